//! Least-cost routing over road networks.
//!
//! Build a [`Graph`] of places and one-way road segments, then ask
//! [`find_route`] for the cheapest route between two places using either
//! Dijkstra's algorithm or A* guided by straight line distance.
//!
//! ```
//! use roadroute::{find_route, Algorithm, Graph};
//!
//! let mut graph: Graph<&str> = Graph::new();
//! graph.add_node("A", 0.0, 0.0)?;
//! graph.add_node("B", 1.0, 0.0)?;
//! graph.add_node("C", 2.0, 0.0)?;
//! graph.add_edge(&"A", &"B", 1.0)?;
//! graph.add_edge(&"B", &"C", 1.0)?;
//!
//! let route = find_route(&graph, &"A", &"C", Algorithm::AStar)?;
//! assert_eq!(route.nodes(), &["A", "B", "C"]);
//! assert_eq!(route.cost(), 2.0);
//! # Ok::<(), roadroute::RouteError>(())
//! ```
//!
//! The search engines in [`graph_algos`] also work on implicit graphs: they
//! only need a start node, a neighbor function and a goal predicate.

mod collections;
pub mod errors;
pub mod geometry;
pub mod graph;
pub mod graph_algos;
mod routing;

pub use errors::{GraphError, PathError, RouteError, UnknownAlgorithm};
pub use geometry::Point;
pub use graph::{sample_map, Graph, Neighbors};
pub use graph_algos::{reconstruct, Route, SearchResult, SearchStats};
pub use routing::{find_route, shortest_path_tree, Algorithm};
