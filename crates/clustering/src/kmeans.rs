use super::*;
use geospat_core::Distance;
use geospat_core::Error;
use geospat_core::Interrupt;
use geospat_core::Result;
use geospat_geometry::Point;
use rayon::prelude::*;
use serde::Deserialize;
use serde::Serialize;

/// Lloyd's k-means over planar points.
///
/// # Algorithm
///
/// Starting from the [`Seeding`] centroids, each iteration:
///
/// 1. Assigns every point to its nearest centroid (ties → lowest index)
/// 2. Moves each centroid to the mean of its members
/// 3. Heals empty clusters by moving their centroid to the point farthest
///    from every other centroid
/// 4. Stops once no centroid moved by `epsilon` or more
///
/// Everything is deterministic: the same points, `k`, and seed give a
/// bit-identical [`ClusterResult`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KMeans {
    k: usize,
    iterations: usize,
    epsilon: Distance,
    seeding: Seeding,
}

impl KMeans {
    /// `k` clusters with default iteration budget, epsilon, and seed.
    pub fn new(k: usize) -> Self {
        Self {
            k,
            iterations: geospat_core::KMEANS_ITERATIONS,
            epsilon: geospat_core::KMEANS_EPSILON,
            seeding: Seeding::default(),
        }
    }
    /// Upper bound on Lloyd iterations.
    pub fn iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }
    /// Convergence threshold on the largest centroid displacement.
    pub fn epsilon(mut self, epsilon: Distance) -> Self {
        self.epsilon = epsilon;
        self
    }
    /// Sample initial centroids from the input with this seed.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seeding = Seeding::Sample(seed);
        self
    }
    /// Start from these centroids instead of sampling.
    pub fn centroids(mut self, centroids: Vec<Point>) -> Self {
        self.seeding = Seeding::Given(centroids);
        self
    }
    pub fn k(&self) -> usize {
        self.k
    }

    /// Cluster `points`.
    pub fn fit(&self, points: &[Point]) -> Result<ClusterResult> {
        self.fit_within(points, &())
    }

    /// Cluster `points`, giving up with [`Error::Cancelled`] as soon as
    /// `interrupt` fires. The signal is polled once per iteration.
    pub fn fit_within<I>(&self, points: &[Point], interrupt: &I) -> Result<ClusterResult>
    where
        I: Interrupt + ?Sized,
    {
        self.validate(points)?;
        log::debug!(
            "{:<32}{:<32}",
            "kmeans initializing",
            format!("n={} k={}", points.len(), self.k)
        );
        let mut kmeans = self.seeding.init(points, self.k)?;
        let mut assignment = Vec::new();
        let mut converged = false;
        let mut t = 0;
        while t < self.iterations {
            if interrupt.interrupted() {
                log::debug!("{:<32}{:<32}", "kmeans cancelled", t);
                return Err(Error::Cancelled);
            }
            assignment = Self::assign(points, &kmeans);
            let next = Self::update(points, &assignment, self.k);
            let drift = Self::drift(&kmeans, &next);
            kmeans = next;
            t += 1;
            log::debug!("{:<32}{:<32}", t, drift);
            if drift < self.epsilon {
                converged = true;
                break;
            }
        }
        if t == 0 {
            assignment = Self::assign(points, &kmeans);
        }
        log::debug!("{:<32}{:<32}", "kmeans finished", format!("t={} converged={}", t, converged));
        Ok(ClusterResult::new(kmeans, assignment, t, converged))
    }

    fn validate(&self, points: &[Point]) -> Result<()> {
        if points.is_empty() {
            return Err(Error::EmptyInput);
        }
        if self.k < 1 || self.k > points.len() {
            return Err(Error::InvalidParameter(format!(
                "k = {} must lie in 1..={}",
                self.k,
                points.len()
            )));
        }
        if self.epsilon.is_nan() || self.epsilon < 0. {
            return Err(Error::InvalidParameter(format!(
                "epsilon = {} must be non-negative",
                self.epsilon
            )));
        }
        if let Some(i) = points.iter().position(|p| !p.is_finite()) {
            return Err(Error::InvalidParameter(format!(
                "point {} has non-finite coordinates",
                i
            )));
        }
        Ok(())
    }

    /// Index of the nearest centroid; the first one wins ties.
    fn neighbor(point: &Point, kmeans: &[Point]) -> usize {
        kmeans
            .iter()
            .map(|c| point.euclidean(c))
            .enumerate()
            .min_by(|(_, d1), (_, d2)| d1.total_cmp(d2))
            .map(|(j, _)| j)
            .unwrap_or(0)
    }

    /// Nearest-centroid label for every point.
    fn assign(points: &[Point], kmeans: &[Point]) -> Vec<usize> {
        points
            .par_iter()
            .map(|p| Self::neighbor(p, kmeans))
            .collect()
    }

    /// Mean of each cluster's members, healing clusters that came up empty.
    fn update(points: &[Point], assignment: &[usize], k: usize) -> Vec<Point> {
        let mut means = points
            .iter()
            .zip(assignment.iter())
            .fold(vec![Centroid::default(); k], |mut sums, (p, &j)| {
                sums[j] = sums[j].absorb(p);
                sums
            })
            .iter()
            .map(Centroid::mean)
            .collect::<Vec<Option<Point>>>();
        for j in 0..k {
            if means[j].is_none() {
                let far = Self::farthest(points, means.iter().flatten());
                log::debug!("{:<32}{:<32}", "kmeans healing", format!("cluster {} -> {}", j, far));
                means[j] = Some(far);
            }
        }
        means.into_iter().map(Option::unwrap_or_default).collect()
    }

    /// The point whose distance to its nearest centroid is largest;
    /// the first one wins ties.
    fn farthest<'a>(points: &[Point], kmeans: impl Iterator<Item = &'a Point> + Clone) -> Point {
        let (i, _) = points
            .iter()
            .map(|p| {
                kmeans
                    .clone()
                    .map(|c| p.euclidean(c))
                    .fold(Distance::INFINITY, Distance::min)
            })
            .enumerate()
            .fold((0, Distance::NEG_INFINITY), |(best, far), (i, d)| {
                if d > far { (i, d) } else { (best, far) }
            });
        points[i]
    }

    /// Largest distance any centroid moved.
    fn drift(old: &[Point], new: &[Point]) -> Distance {
        old.iter()
            .zip(new.iter())
            .map(|(a, b)| a.euclidean(b))
            .fold(0., Distance::max)
    }
}

/// Cluster `points` into `k` groups, sampling initial centroids with `seed`.
pub fn cluster(
    points: &[Point],
    k: usize,
    max_iterations: usize,
    epsilon: Distance,
    seed: u64,
) -> Result<ClusterResult> {
    KMeans::new(k)
        .iterations(max_iterations)
        .epsilon(epsilon)
        .seed(seed)
        .fit(points)
}
