criterion::criterion_main!(benches);
criterion::criterion_group! {
    name = benches;
    config = criterion::Criterion::default()
        .without_plots()
        .noise_threshold(3.0)
        .significance_level(0.01)
        .sample_size(10)
        .measurement_time(std::time::Duration::from_secs(1));
    targets =
        measuring_haversine_distance,
        measuring_euclidean_distance,
        building_complete_graph,
        searching_complete_graph,
        searching_sparse_graph,
        searching_sparse_graph_dijkstra,
        clustering_kmeans_blobs,
        clustering_kmeans_globe,
}

const NODES: usize = 256;
const POINTS: usize = 8192;

fn measuring_haversine_distance(c: &mut criterion::Criterion) {
    let (a, b) = (Point::random(), Point::random());
    c.bench_function("haversine between two random points", |bench| {
        bench.iter(|| a.haversine(&b))
    });
}

fn measuring_euclidean_distance(c: &mut criterion::Criterion) {
    let (a, b) = (Point::random(), Point::random());
    c.bench_function("euclidean between two random points", |bench| {
        bench.iter(|| a.euclidean(&b))
    });
}

fn building_complete_graph(c: &mut criterion::Criterion) {
    let nodes = nodes();
    c.bench_function("build a complete haversine Graph", |bench| {
        bench.iter(|| Graph::complete(nodes.clone(), Metric::Haversine))
    });
}

fn searching_complete_graph(c: &mut criterion::Criterion) {
    let ref graph = Graph::complete(nodes(), Metric::Haversine).unwrap();
    c.bench_function("A* across a complete Graph", |bench| {
        bench.iter(|| find_path(graph, NodeId::new(0), NodeId::new(NODES - 1)))
    });
}

fn searching_sparse_graph(c: &mut criterion::Criterion) {
    let ref graph = lattice();
    c.bench_function("A* across a sparse lattice", |bench| {
        bench.iter(|| find_path(graph, NodeId::new(0), NodeId::new(graph.node_count() - 1)))
    });
}

fn searching_sparse_graph_dijkstra(c: &mut criterion::Criterion) {
    let ref graph = lattice();
    c.bench_function("Dijkstra across a sparse lattice", |bench| {
        bench.iter(|| {
            AStar::new(graph)
                .heuristic(Zero)
                .find(NodeId::new(0), NodeId::new(graph.node_count() - 1))
        })
    });
}

fn clustering_kmeans_blobs(c: &mut criterion::Criterion) {
    let ref points = blobs();
    c.bench_function("k-means 8 planar blobs", |bench| {
        bench.iter(|| KMeans::new(8).fit(points))
    });
}

fn clustering_kmeans_globe(c: &mut criterion::Criterion) {
    let ref points = (0..POINTS).map(|_| Point::random()).collect::<Vec<_>>();
    c.bench_function("k-means 32 on uniform lon/lat", |bench| {
        bench.iter(|| KMeans::new(32).iterations(16).fit(points))
    });
}

fn nodes() -> Vec<Node> {
    (0..NODES).map(|_| Node::from(Point::random())).collect()
}

/// Square grid with 4-neighbour undirected edges.
fn lattice() -> Graph {
    let side = 64;
    let nodes = (0..side * side)
        .map(|i| Node::from(((i % side) as f64, (i / side) as f64)))
        .collect();
    let edges = (0..side * side)
        .flat_map(|i| {
            let right = (i % side + 1 < side).then(|| Edge::measured(i, i + 1));
            let below = (i / side + 1 < side).then(|| Edge::measured(i, i + side));
            right.into_iter().chain(below)
        })
        .collect();
    Graph::build(nodes, Topology::Undirected(edges), Metric::Euclidean).unwrap()
}

fn blobs() -> Vec<Point> {
    use rand::Rng;
    use rand::SeedableRng;
    let ref mut rng = rand::rngs::SmallRng::seed_from_u64(0);
    (0..POINTS)
        .map(|i| (i % 8) as f64 * 100.)
        .map(|c| Point::new(c + rng.random_range(-20.0..20.0), c + rng.random_range(-20.0..20.0)))
        .collect()
}

use geospat::Arbitrary;
use geospat::clustering::KMeans;
use geospat::geometry::Metric;
use geospat::geometry::Point;
use geospat::graph::Edge;
use geospat::graph::Graph;
use geospat::graph::Node;
use geospat::graph::NodeId;
use geospat::graph::Topology;
use geospat::search::AStar;
use geospat::search::Zero;
use geospat::search::find_path;
