use crate::errors::{GraphError, PathError, RouteError, UnknownAlgorithm};
use crate::graph::Graph;
use crate::graph_algos::a_star::AStar;
use crate::graph_algos::dijkstra::{dijkstra_nodes_full, dijkstra_search};
use crate::graph_algos::{reconstruct, Route, SearchResult};

use std::{fmt, hash::Hash, fmt::Debug, str::FromStr};
use num_traits::Float;


/// Search strategy used by [`find_route`]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Algorithm {
    /// Uniform cost search
    #[default]
    Dijkstra,
    /// Guided by straight line distance to the destination
    AStar,
}

impl FromStr for Algorithm {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dijkstra" => Ok(Algorithm::Dijkstra),
            "astar" | "a*" | "a-star" => Ok(Algorithm::AStar),
            _ => Err(UnknownAlgorithm(s.to_string())),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::Dijkstra => f.write_str("dijkstra"),
            Algorithm::AStar => f.write_str("astar"),
        }
    }
}


/// Least cost route from `source` to `destination`
///
/// A* uses the Euclidean distance between node coordinates as its heuristic.
/// It returns the same cost as Dijkstra only when no edge is cheaper than the
/// straight line between its endpoints; for weights unrelated to the
/// coordinates the A* route may be suboptimal.
pub fn find_route<N, C>(graph: &Graph<N, C>, source: &N, destination: &N, algorithm: Algorithm) -> Result<Route<N, C>, RouteError>
where
    N: Eq + Hash + Clone + Debug,
    C: Float + Debug,
{
    let start = graph.index_of(source)?;
    let goal = graph.index_of(destination)?;

    let result = match algorithm {
        Algorithm::Dijkstra => dijkstra_search(
            start,
            |&index| graph.successors(index),
            |&index| index == goal,
        ),
        Algorithm::AStar => {
            let target = graph.node_coordinate(destination)?;
            AStar {}.search(
                start,
                |&index| graph.successors(index),
                |&index| graph.point_at(index).map_or(C::zero(), |point| point.distance(&target)),
                |&index| index == goal,
            )
        }
    };

    if result.goal().is_none() {
        return Err(PathError::Unreachable.into());
    }

    let route = reconstruct(&result, &goal)?;
    route
        .try_map(|index| graph.id_at(index).cloned())
        .ok_or(RouteError::Path(PathError::Inconsistent))
}


/// Costs and predecessors from `source` to every node it can reach
/// Runs Dijkstra to exhaustion, so every entry is final
pub fn shortest_path_tree<N, C>(graph: &Graph<N, C>, source: &N) -> Result<SearchResult<N, C>, GraphError>
where
    N: Eq + Hash + Clone + Debug,
    C: Float + Debug,
{
    let start = graph.index_of(source)?;
    let result = dijkstra_nodes_full(start, |&index| graph.successors(index));

    // indices come from the graph, so every one of them maps back
    result
        .map_nodes(|index| graph.id_at(index).cloned())
        .ok_or_else(|| GraphError::UnknownNode(format!("{source:?}")))
}
