use roadroute::{find_route, shortest_path_tree, Algorithm, Graph, PathError, RouteError};

use std::collections::HashSet;
use rand::{rngs::StdRng, Rng, SeedableRng};


/// Random road network where no edge is cheaper than the straight line
/// between its endpoints, so the Euclidean heuristic stays admissible
fn random_network(seed: u64, nodes: u32, out_degree: u32) -> Graph<u32> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut graph = Graph::with_capacity(nodes as usize);

    for id in 0..nodes {
        let x = rng.random_range(0.0..100.0);
        let y = rng.random_range(0.0..100.0);
        graph.add_node(id, x, y).unwrap();
    }

    let mut seen = HashSet::new();
    for from in 0..nodes {
        for _ in 0..out_degree {
            let to = rng.random_range(0..nodes);
            if to == from || !seen.insert((from, to)) {
                continue;
            }
            let a = graph.node_coordinate(&from).unwrap();
            let b = graph.node_coordinate(&to).unwrap();
            let detour = rng.random_range(1.0..2.0);
            graph.add_edge(&from, &to, a.distance(&b) * detour).unwrap();
        }
    }
    graph
}

fn edge_weight(graph: &Graph<u32>, from: u32, to: u32) -> f64 {
    graph
        .neighbors(&from)
        .unwrap()
        .filter(|&(&target, _)| target == to)
        .map(|(_, weight)| weight)
        .fold(f64::INFINITY, f64::min)
}

#[test]
fn dijkstra_and_a_star_agree_on_cost() {
    for seed in 0..8 {
        let graph = random_network(seed, 60, 3);
        let mut rng = StdRng::seed_from_u64(seed + 100);

        for _ in 0..25 {
            let source = rng.random_range(0..60);
            let destination = rng.random_range(0..60);

            let plain = find_route(&graph, &source, &destination, Algorithm::Dijkstra);
            let guided = find_route(&graph, &source, &destination, Algorithm::AStar);

            match (plain, guided) {
                (Ok(plain), Ok(guided)) => {
                    let tolerance = 1e-9 * plain.cost().max(1.0);
                    assert!(
                        (plain.cost() - guided.cost()).abs() <= tolerance,
                        "seed {seed}: {source} -> {destination}: {} vs {}", plain.cost(), guided.cost()
                    );
                }
                (Err(plain), Err(guided)) => {
                    assert_eq!(plain, RouteError::Path(PathError::Unreachable));
                    assert_eq!(guided, RouteError::Path(PathError::Unreachable));
                }
                (plain, guided) => panic!("seed {seed}: {source} -> {destination}: {plain:?} vs {guided:?}"),
            }
        }
    }
}

#[test]
fn route_cost_is_the_sum_of_its_edges() {
    for seed in 0..8 {
        let graph = random_network(seed, 40, 4);
        let mut rng = StdRng::seed_from_u64(seed + 200);

        for _ in 0..25 {
            let source = rng.random_range(0..40);
            let destination = rng.random_range(0..40);

            for algorithm in [Algorithm::Dijkstra, Algorithm::AStar] {
                let Ok(route) = find_route(&graph, &source, &destination, algorithm) else {
                    continue;
                };

                assert_eq!(route.source(), Some(&source));
                assert_eq!(route.destination(), Some(&destination));
                assert!(route.cost() >= 0.0);

                // summed in travel order, the same order the search accumulated it
                let total = route
                    .nodes()
                    .windows(2)
                    .fold(0.0, |acc, pair| acc + edge_weight(&graph, pair[0], pair[1]));
                assert_eq!(total, route.cost(), "seed {seed} {algorithm}");
            }
        }
    }
}

#[test]
fn unreachable_never_yields_a_route() {
    let graph = random_network(3, 30, 2);
    let tree = shortest_path_tree(&graph, &0).unwrap();

    for destination in graph.node_ids().copied() {
        let result = find_route(&graph, &0, &destination, Algorithm::Dijkstra);
        if tree.reached(&destination) {
            let route = result.unwrap();
            assert_eq!(Some(route.cost()), tree.cost_to(&destination));
        } else {
            assert_eq!(result, Err(RouteError::Path(PathError::Unreachable)));
        }
    }
}

#[test]
fn every_node_routes_to_itself_for_free() {
    let graph = random_network(11, 25, 3);
    for node in graph.node_ids() {
        for algorithm in [Algorithm::Dijkstra, Algorithm::AStar] {
            let route = find_route(&graph, node, node, algorithm).unwrap();
            assert_eq!(route.nodes(), &[*node]);
            assert_eq!(route.cost(), 0.0);
        }
    }
}

#[test]
fn concurrent_searches_share_one_graph() {
    let graph = random_network(5, 80, 3);
    let expected: Vec<_> = (0..8u32)
        .map(|source| find_route(&graph, &source, &79, Algorithm::Dijkstra).map(|route| route.cost()))
        .collect();

    let costs: Vec<_> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..8u32)
            .map(|source| {
                let graph = &graph;
                scope.spawn(move || {
                    find_route(graph, &source, &79, Algorithm::AStar).map(|route| route.cost())
                })
            })
            .collect();
        handles.into_iter().map(|handle| handle.join().unwrap()).collect()
    });

    for (plain, guided) in expected.iter().zip(&costs) {
        match (plain, guided) {
            (Ok(a), Ok(b)) => assert!((a - b).abs() <= 1e-9 * a.max(1.0)),
            (a, b) => assert_eq!(a, b),
        }
    }
}
