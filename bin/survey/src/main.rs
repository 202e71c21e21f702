//! Survey Binary
//!
//! Measures, routes, and clusters a fixed set of European capitals and the
//! planar points of the classic textbook example, logging progress and
//! printing a JSON report to stdout.
//!
//! Options: --distance, --route, --cluster (default: all three)
//!
//! Set `GEOSPAT_DEADLINE` (e.g. "30s") to bound each computation.
use geospat::Deadline;
use geospat::clustering::ClusterResult;
use geospat::clustering::KMeans;
use geospat::geometry::Metric;
use geospat::geometry::Point;
use geospat::graph::Graph;
use geospat::graph::Node;
use geospat::graph::NodeId;
use geospat::search::AStar;
use geospat::search::Route;
use serde::Serialize;

/// Which parts of the survey to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Distance,
    Route,
    Cluster,
    All,
}

impl Mode {
    fn from_args() -> Self {
        std::env::args()
            .find_map(|a| match a.as_str() {
                "--distance" => Some(Self::Distance),
                "--route" => Some(Self::Route),
                "--cluster" => Some(Self::Cluster),
                _ => None,
            })
            .unwrap_or(Self::All)
    }
    fn runs(&self, other: Self) -> bool {
        *self == Self::All || *self == other
    }
}

#[derive(Debug, Default, Serialize)]
struct Report {
    #[serde(skip_serializing_if = "Option::is_none")]
    distance: Option<f64>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    routes: Vec<Leg>,
    #[serde(skip_serializing_if = "Option::is_none")]
    clusters: Option<ClusterResult>,
}

#[derive(Debug, Serialize)]
struct Leg {
    metric: Metric,
    points: Vec<Point>,
    route: Route,
}

fn capitals() -> Vec<Node> {
    [
        ("warsaw", 52.2296756, 21.0122287),
        ("rome", 41.8919300, 12.5113300),
        ("paris", 48.8566140, 2.3522219),
        ("london", 51.5073509, -0.1277583),
        ("madrid", 40.4167754, -3.7037902),
        ("berlin", 52.5200066, 13.4049540),
    ]
    .into_iter()
    .map(|(name, lat, lon)| Node::labelled(Point::geodetic(lat, lon), name))
    .collect()
}

fn planar() -> Vec<Node> {
    [(0., 0.), (10., 10.), (1., 1.), (2., 2.), (3., 3.), (4., 4.), (5., 5.)]
        .map(Node::from)
        .to_vec()
}

fn distance() -> f64 {
    let d = geospat::geometry::haversine(52.2296756, 21.0122287, 41.8919300, 12.5113300);
    log::info!("{:<32}{:<32}", "warsaw -> rome", format!("{:.2} km", d));
    d
}

fn route(
    nodes: Vec<Node>,
    metric: Metric,
    start: usize,
    goal: usize,
    deadline: &Option<Deadline>,
) -> anyhow::Result<Leg> {
    let graph = Graph::complete(nodes, metric)?;
    let route = AStar::new(&graph).find_within(
        NodeId::new(start),
        NodeId::new(goal),
        deadline,
    )?;
    log::info!("{:<32}{:<32}", format!("route ({})", metric), route);
    Ok(Leg {
        metric,
        points: route.points(&graph),
        route,
    })
}

fn cluster(deadline: &Option<Deadline>) -> anyhow::Result<ClusterResult> {
    let ref points = [(1., 1.), (2., 2.), (3., 3.), (8., 8.), (9., 9.), (10., 10.)]
        .map(Point::from)
        .to_vec();
    let result = KMeans::new(2).fit_within(points, deadline)?;
    for cluster in result.clusters(points) {
        log::info!("{:<32}{:<32}", "k-means", cluster);
    }
    log::info!("{:<32}{:<32}", "k-means rms", result.rms(points));
    Ok(result)
}

fn main() -> anyhow::Result<()> {
    geospat_core::log()?;
    let mode = Mode::from_args();
    let ref deadline = Deadline::from_env();
    let mut report = Report::default();
    if mode.runs(Mode::Distance) {
        report.distance = Some(distance());
    }
    if mode.runs(Mode::Route) {
        report.routes.push(route(planar(), Metric::Euclidean, 0, 1, deadline)?);
        report.routes.push(route(capitals(), Metric::Haversine, 4, 0, deadline)?);
    }
    if mode.runs(Mode::Cluster) {
        report.clusters = Some(cluster(deadline)?);
    }
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn planar_route_is_direct() {
        let leg = route(planar(), Metric::Euclidean, 0, 1, &None).unwrap();
        assert_eq!(leg.route.nodes(), &[NodeId::new(0), NodeId::new(1)]);
        assert_eq!(leg.points, vec![Point::new(0., 0.), Point::new(10., 10.)]);
    }

    #[test]
    fn capitals_route_ends_in_warsaw() {
        let leg = route(capitals(), Metric::Haversine, 4, 0, &None).unwrap();
        assert_eq!(leg.route.start(), Some(NodeId::new(4)));
        assert_eq!(leg.route.goal(), Some(NodeId::new(0)));
    }

    #[test]
    fn clusters_split_in_two() {
        let result = cluster(&None).unwrap();
        assert_eq!(result.sizes(), vec![3, 3]);
    }
}
