use std::sync::Arc;
use std::sync::atomic::AtomicBool;
use std::sync::atomic::Ordering;
use std::time::Duration;
use std::time::Instant;

/// Cooperative cancellation signal.
///
/// Engines poll this once per outer-loop step (each frontier extraction in
/// A*, each Lloyd iteration in k-means) and bail out with
/// [`crate::Error::Cancelled`] as soon as it reports true.
///
/// # Implementations
///
/// - `()` — never interrupts
/// - [`Deadline`] / [`Instant`] — interrupts once the instant has passed
/// - [`AtomicBool`] — interrupts once another thread stores `true`
/// - `Option<T>`, `&T`, `Arc<T>` — forward to the inner signal
pub trait Interrupt {
    /// Whether the computation should stop now.
    fn interrupted(&self) -> bool;
}

impl Interrupt for () {
    fn interrupted(&self) -> bool {
        false
    }
}

impl Interrupt for Instant {
    fn interrupted(&self) -> bool {
        Instant::now() >= *self
    }
}

impl Interrupt for AtomicBool {
    fn interrupted(&self) -> bool {
        self.load(Ordering::Relaxed)
    }
}

impl<T> Interrupt for Option<T>
where
    T: Interrupt,
{
    fn interrupted(&self) -> bool {
        self.as_ref().is_some_and(T::interrupted)
    }
}

impl<T> Interrupt for &T
where
    T: Interrupt + ?Sized,
{
    fn interrupted(&self) -> bool {
        (**self).interrupted()
    }
}

impl<T> Interrupt for Arc<T>
where
    T: Interrupt + ?Sized,
{
    fn interrupted(&self) -> bool {
        (**self).interrupted()
    }
}

/// A wall-clock budget for a single computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Deadline(Instant);

impl Deadline {
    /// Deadline `budget` from now, or `None` if that lies beyond what the
    /// clock can represent.
    pub fn after(budget: Duration) -> Option<Self> {
        Instant::now().checked_add(budget).map(Self)
    }
    /// Time left before the deadline passes.
    pub fn remaining(&self) -> Duration {
        self.0.saturating_duration_since(Instant::now())
    }
    /// Deadline read from [`crate::DEADLINE_ENV`], if set and parseable.
    pub fn from_env() -> Option<Self> {
        Self::from_var(crate::DEADLINE_ENV)
    }
    /// Deadline read from an arbitrary environment variable.
    pub fn from_var(key: &str) -> Option<Self> {
        let value = std::env::var(key).ok()?;
        match parse_duration(&value).and_then(Self::after) {
            Some(deadline) => {
                log::info!("{:<32}{:<32}", "computation budget", value);
                Some(deadline)
            }
            None => {
                log::warn!("ignoring unusable {}={}", key, value);
                None
            }
        }
    }
}

impl From<Instant> for Deadline {
    fn from(instant: Instant) -> Self {
        Self(instant)
    }
}

impl Interrupt for Deadline {
    fn interrupted(&self) -> bool {
        self.0.interrupted()
    }
}

/// Parse duration string like "30s", "5m", "2h", "1d" into Duration.
pub fn parse_duration(s: &str) -> Option<Duration> {
    let s = s.trim();
    let (num, unit) = s.split_at(s.char_indices().last().map_or(0, |(i, _)| i));
    let value: u64 = num.parse().ok()?;
    let scale = match unit {
        "s" => 1,
        "m" => 60,
        "h" => 3600,
        "d" => 86400,
        _ => return None,
    };
    value.checked_mul(scale).map(Duration::from_secs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn durations() {
        assert_eq!(parse_duration("30s"), Some(Duration::from_secs(30)));
        assert_eq!(parse_duration(" 5m "), Some(Duration::from_secs(300)));
        assert_eq!(parse_duration("2h"), Some(Duration::from_secs(7200)));
        assert_eq!(parse_duration("1d"), Some(Duration::from_secs(86400)));
        assert_eq!(parse_duration("1w"), None);
        assert_eq!(parse_duration("h"), None);
        assert_eq!(parse_duration(""), None);
        assert_eq!(parse_duration("5µ"), None);
    }

    #[test]
    fn oversized_durations_are_rejected() {
        assert_eq!(parse_duration("999999999999999999m"), None);
        assert_eq!(parse_duration("999999999999999999d"), None);
        assert_eq!(
            parse_duration("18446744073709551615s"),
            Some(Duration::from_secs(u64::MAX))
        );
        assert_eq!(Deadline::after(Duration::MAX), None);
    }

    #[test]
    fn oversized_env_budget_means_no_deadline() {
        let key = "GEOSPAT_TEST_OVERSIZED_DEADLINE";
        // SAFETY: the key is unique to this test, so no other thread reads it.
        unsafe { std::env::set_var(key, "18446744073709551615s") };
        assert_eq!(Deadline::from_var(key), None);
        unsafe { std::env::set_var(key, "999999999999999999m") };
        assert_eq!(Deadline::from_var(key), None);
        unsafe { std::env::set_var(key, "30s") };
        assert!(Deadline::from_var(key).is_some_and(|d| !d.interrupted()));
        unsafe { std::env::remove_var(key) };
    }

    #[test]
    fn expired_deadline_interrupts() {
        assert!(Deadline::after(Duration::ZERO).unwrap().interrupted());
        assert!(!Deadline::after(Duration::from_secs(3600)).unwrap().interrupted());
    }

    #[test]
    fn flag_interrupts_through_references() {
        let flag = Arc::new(AtomicBool::new(false));
        assert!(!(&flag).interrupted());
        flag.store(true, Ordering::Relaxed);
        assert!(flag.interrupted());
        assert!(Some(flag).interrupted());
        assert!(!None::<Deadline>.interrupted());
        assert!(!().interrupted());
    }
}
