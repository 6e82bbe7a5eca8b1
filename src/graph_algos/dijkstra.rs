use crate::collections::{FxIndexMap, NO_PARENT};
use crate::errors::PathError;
use super::frontier::Frontier;
use super::{reconstruct, GraphNodeMap, Route, SearchResult, SearchStats};

use std::{hash::Hash, fmt::Debug};
use num_traits::Float;
use indexmap::map::Entry::{Occupied, Vacant};




/// Identify the shortest path using Dijkstra's Algorithm
/// https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm
/// From start Node, traverse through graph until node meets goal criteria
pub fn dijkstra<N, C, IT, NN, G>(start: N, neighbors: NN, goal: G) -> Result<Route<N, C>, PathError>
where
    N: Eq + Hash + Clone + Debug,
    NN: Fn(&N) -> IT, // returns iterator of neighbors + costs
    IT: IntoIterator<Item = (N, C)>, // Iterator of neighbors + edge cost to neighbor node
    C: Float + Debug,
    G: Fn(&N) -> bool, // node qualifier for goal
    {

    // Build the graph - terminates when the goal is met
    let result = dijkstra_search(start, neighbors, goal);

    match result.goal() {
        Some(goal) => reconstruct(&result, goal),
        None => Err(PathError::Unreachable),
    }
}


/// Run the search up to the first node meeting the goal criteria
/// Nodes discovered before the goal was settled are included
pub fn dijkstra_search<N, C, IT, NN, G>(start: N, neighbors: NN, goal: G) -> SearchResult<N, C>
where
    N: Eq + Hash + Clone + Debug,
    NN: Fn(&N) -> IT,
    IT: IntoIterator<Item = (N, C)>,
    C: Float + Debug,
    G: Fn(&N) -> bool,
    {
    build_dijkstra_graph(start, neighbors, goal)
}

/// Returns a full map of the graph, includes all (reachable) nodes and costs
pub fn dijkstra_nodes_full<N, C, IT, NN>(start: N, neighbors: NN) -> SearchResult<N, C>
where
    N: Eq + Hash + Clone + Debug,
    NN: Fn(&N) -> IT,
    IT: IntoIterator<Item = (N, C)>,
    C: Float + Debug,
    {

    // no goal - runs until the frontier is exhausted
    build_dijkstra_graph(start, neighbors, |_| false)
}


/// Traverses the graph using Dijkstra's algorithm
/// Returns a map of nodes with their smallest costs along with the index of the goal node
fn build_dijkstra_graph<N, C, IT, NN, G>(start: N, neighbors: NN, goal_fn: G) -> SearchResult<N, C>
where
    N: Eq + Hash + Clone + Debug,
    NN: Fn(&N) -> IT,
    IT: IntoIterator<Item = (N, C)>,
    C: Float + Debug,
    G: Fn(&N) -> bool // Returns true if goal is met
    {

    // Nodes to visit, cheapest first
    // Priority and cost are the same thing here
    let mut frontier: Frontier<C> = Frontier::new();
    let mut stats = SearchStats::default();

    // best known (parent_index, cost) per node
    // for the start node, parent_index is set to NO_PARENT
    let mut nodes_map: GraphNodeMap<N, C> = FxIndexMap::default();

    let start_index = nodes_map.insert_full(start, (NO_PARENT, C::zero())).0;
    frontier.push(start_index, C::zero(), C::zero());
    stats.pushed += 1;

    let mut goal_index = None;

    // Loop over each node to visit, removing the smallest node
    while let Some(entry) = frontier.pop_min() {

        // fetch current best cost for node
        let Some((node, &(_, c))) = nodes_map.get_index(entry.index) else {
            continue;
        };

        // A cheaper path to this node was found after this entry was queued
        if entry.is_stale(c) {
            log::trace!("dropping stale entry for {node:?}: {:?} > {c:?}", entry.cost);
            stats.stale += 1;
            continue;
        }

        // Check if we've reached the goal
        if goal_fn(node) {
            goal_index = Some(entry.index);
            break;
        }

        stats.expanded += 1;

        // loop over neighbors
        for (neighbor, edge_cost) in neighbors(node) {

            // new cost to reach this node = edge cost + node cost
            let new_cost = c + edge_cost;

            let neighbor_index = match nodes_map.entry(neighbor) {
                Vacant(e) => {
                    // This is the first time we're seeing this neighbor
                    let index = e.index();
                    e.insert((entry.index, new_cost));
                    index
                }
                Occupied(mut e) => {
                    // Only a strict improvement relaxes, ties keep the first path
                    if new_cost < e.get().1 {
                        e.insert((entry.index, new_cost));
                        e.index()
                    } else {
                        continue;
                    }
                }
            };

            frontier.push(neighbor_index, new_cost, new_cost);
            stats.pushed += 1;
        }
    }

    log::debug!(
        "dijkstra: reached {} nodes, expanded {}, pushed {}, stale {}, goal found: {}",
        nodes_map.len(), stats.expanded, stats.pushed, stats.stale, goal_index.is_some()
    );

    SearchResult {
        nodes: nodes_map,
        source: start_index,
        goal: goal_index,
        stats,
    }
}
