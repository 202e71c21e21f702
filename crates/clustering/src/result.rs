use geospat_core::Distance;
use geospat_geometry::Point;
use serde::Deserialize;
use serde::Serialize;

/// Outcome of one k-means run.
///
/// `assignment[i]` is the cluster id of input point `i`, always in `0..k`.
/// Produced once per run and never modified.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClusterResult {
    centroids: Vec<Point>,
    assignment: Vec<usize>,
    iterations: usize,
    converged: bool,
}

/// One cluster of a [`ClusterResult`], materialised for reporting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cluster {
    id: usize,
    centroid: Point,
    members: Vec<usize>,
}

impl ClusterResult {
    pub(crate) fn new(
        centroids: Vec<Point>,
        assignment: Vec<usize>,
        iterations: usize,
        converged: bool,
    ) -> Self {
        debug_assert!(assignment.iter().all(|&j| j < centroids.len()));
        Self {
            centroids,
            assignment,
            iterations,
            converged,
        }
    }
    /// Number of clusters.
    pub fn k(&self) -> usize {
        self.centroids.len()
    }
    pub fn centroids(&self) -> &[Point] {
        &self.centroids
    }
    pub fn assignment(&self) -> &[usize] {
        &self.assignment
    }
    /// Lloyd iterations actually run.
    pub fn iterations(&self) -> usize {
        self.iterations
    }
    /// Whether the run stopped because centroids moved less than epsilon,
    /// rather than by exhausting the iteration budget.
    pub fn converged(&self) -> bool {
        self.converged
    }
    /// Cluster id of input point `i`.
    pub fn label(&self, i: usize) -> Option<usize> {
        self.assignment.get(i).copied()
    }
    /// Member count per cluster.
    pub fn sizes(&self) -> Vec<usize> {
        let mut sizes = vec![0; self.k()];
        self.assignment.iter().for_each(|&j| sizes[j] += 1);
        sizes
    }
    /// Member points grouped by cluster, in input order.
    pub fn members(&self, points: &[Point]) -> Vec<Vec<Point>> {
        self.clusters(points)
            .into_iter()
            .map(|c| c.members.iter().map(|&i| points[i]).collect())
            .collect()
    }
    /// Every cluster with its centroid and member indices.
    pub fn clusters(&self, points: &[Point]) -> Vec<Cluster> {
        let mut clusters = self
            .centroids
            .iter()
            .enumerate()
            .map(|(id, centroid)| Cluster {
                id,
                centroid: *centroid,
                members: Vec::new(),
            })
            .collect::<Vec<_>>();
        self.assignment
            .iter()
            .enumerate()
            .take(points.len())
            .for_each(|(i, &j)| clusters[j].members.push(i));
        clusters
    }
    /// Root-mean-square distance from each point to its centroid.
    pub fn rms(&self, points: &[Point]) -> Distance {
        let n = points.len().min(self.assignment.len());
        if n == 0 {
            return 0.;
        }
        (points
            .iter()
            .zip(self.assignment.iter())
            .map(|(p, &j)| p.euclidean(&self.centroids[j]))
            .map(|d| d * d)
            .sum::<Distance>()
            / n as Distance)
            .sqrt()
    }
}

impl Cluster {
    pub fn id(&self) -> usize {
        self.id
    }
    pub fn centroid(&self) -> &Point {
        &self.centroid
    }
    /// Indices of member points in the input.
    pub fn members(&self) -> &[usize] {
        &self.members
    }
    pub fn len(&self) -> usize {
        self.members.len()
    }
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

impl std::fmt::Display for Cluster {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "cluster {} at {} ({} points)", self.id, self.centroid, self.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> (Vec<Point>, ClusterResult) {
        let points = [(0., 0.), (10., 0.), (0., 2.), (10., 2.)].map(Point::from).to_vec();
        let centroids = vec![Point::new(0., 1.), Point::new(10., 1.)];
        let result = ClusterResult::new(centroids, vec![0, 1, 0, 1], 2, true);
        (points, result)
    }

    #[test]
    fn grouping() {
        let (points, result) = fixture();
        assert_eq!(result.k(), 2);
        assert_eq!(result.sizes(), vec![2, 2]);
        assert_eq!(result.label(3), Some(1));
        assert_eq!(result.label(4), None);
        assert_eq!(
            result.members(&points),
            vec![
                vec![Point::new(0., 0.), Point::new(0., 2.)],
                vec![Point::new(10., 0.), Point::new(10., 2.)],
            ]
        );
        let clusters = result.clusters(&points);
        assert_eq!(clusters[1].id(), 1);
        assert_eq!(clusters[1].members(), &[1, 3]);
        assert_eq!(clusters[1].centroid(), &Point::new(10., 1.));
    }

    #[test]
    fn rms_is_unit() {
        let (points, result) = fixture();
        assert_eq!(result.rms(&points), 1.);
        assert_eq!(result.rms(&[]), 0.);
    }

    #[test]
    fn empty_clusters_are_reported() {
        let points = vec![Point::new(0., 0.)];
        let centroids = vec![Point::new(0., 0.), Point::new(0., 0.)];
        let result = ClusterResult::new(centroids, vec![0], 1, true);
        assert_eq!(result.sizes(), vec![1, 0]);
        assert!(result.clusters(&points)[1].is_empty());
    }
}
