use geospat_core::Error;
use geospat_core::Result;
use geospat_geometry::Point;
use serde::Deserialize;
use serde::Serialize;

/// Where the initial centroids come from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Seeding {
    /// k distinct input points, drawn without replacement by a `SmallRng`
    /// seeded with this value. Same seed, same draw.
    Sample(u64),
    /// Caller-supplied centroids, e.g. a previous run's result.
    Given(Vec<Point>),
}

impl Seeding {
    /// Initial centroids for clustering `points` into `k` groups.
    /// Expects `1 <= k <= points.len()` to have been checked already.
    pub fn init(&self, points: &[Point], k: usize) -> Result<Vec<Point>> {
        match self {
            Seeding::Sample(seed) => {
                use rand::SeedableRng;
                use rand::rngs::SmallRng;
                let ref mut rng = SmallRng::seed_from_u64(*seed);
                Ok(rand::seq::index::sample(rng, points.len(), k)
                    .into_iter()
                    .map(|i| points[i])
                    .collect())
            }
            Seeding::Given(centroids) if centroids.len() != k => {
                Err(Error::InvalidParameter(format!(
                    "{} initial centroids supplied for k = {}",
                    centroids.len(),
                    k
                )))
            }
            Seeding::Given(centroids) if !centroids.iter().all(Point::is_finite) => Err(
                Error::InvalidParameter("initial centroids must be finite".to_string()),
            ),
            Seeding::Given(centroids) => Ok(centroids.clone()),
        }
    }
}

impl Default for Seeding {
    fn default() -> Self {
        Seeding::Sample(geospat_core::KMEANS_SEED)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn points() -> Vec<Point> {
        (0..50).map(|i| Point::new(i as f64, (i * i) as f64)).collect()
    }

    #[test]
    fn sample_is_distinct() {
        let ref points = points();
        let seeds = Seeding::Sample(17).init(points, 50).unwrap();
        let mut xs = seeds.iter().map(|p| p.x() as usize).collect::<Vec<_>>();
        xs.sort();
        assert_eq!(xs, (0..50).collect::<Vec<_>>());
    }

    #[test]
    fn sample_is_reproducible() {
        let ref points = points();
        let a = Seeding::Sample(42).init(points, 5).unwrap();
        let b = Seeding::Sample(42).init(points, 5).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.len(), 5);
    }

    #[test]
    fn given_must_match_k() {
        let ref points = points();
        let given = Seeding::Given(vec![Point::new(0., 0.)]);
        assert!(matches!(given.init(points, 2), Err(Error::InvalidParameter(_))));
        assert_eq!(given.init(points, 1).unwrap(), vec![Point::new(0., 0.)]);
    }

    #[test]
    fn given_must_be_finite() {
        let ref points = points();
        let given = Seeding::Given(vec![Point::new(f64::NAN, 0.)]);
        assert!(given.init(points, 1).is_err());
    }
}
