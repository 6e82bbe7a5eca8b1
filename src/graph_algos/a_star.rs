use crate::collections::{FxIndexMap, NO_PARENT};
use crate::errors::PathError;
use super::frontier::Frontier;
use super::{reconstruct, GraphNodeMap, Route, SearchResult, SearchStats};

use std::{
    hash::Hash,
    fmt::Debug,
};
use num_traits::Float;
use indexmap::map::Entry::{Occupied, Vacant};



/// A* Algorithm
/// https://en.wikipedia.org/wiki/A*_search_algorithm
#[derive(Clone, Copy, Debug, Default)]
pub struct AStar {}

impl AStar {

    /// From start Node, traverse through graph until node meets goal criteria
    /// The result is only guaranteed optimal when the heuristic is admissible
    /// (never overestimates the true cost to reach the goal) and consistent
    pub fn plan<N, C, IT, NN, H, G>(&self, start: N, neighbors: NN, heuristic_fn: H, goal_fn: G) -> Result<Route<N, C>, PathError>
    where
        N: Eq + Hash + Clone + Debug,
        NN: Fn(&N) -> IT, // returns iterator of neighbors + costs
        H: Fn(&N) -> C, // heuristic function
        IT: IntoIterator<Item = (N, C)>, // Iterator of neighbors + edge cost to neighbor node
        C: Float + Debug,
        G: Fn(&N) -> bool, // node qualifier for goal
        {

        let result = self.search(start, neighbors, heuristic_fn, goal_fn);

        // Return the shortest path
        match result.goal() {
            Some(goal) => reconstruct(&result, goal),
            None => Err(PathError::Unreachable),
        }
    }


    /// Traverses the graph using A* algorithm
    /// Returns the best known costs and parents along with the goal node, if found
    pub fn search<N, C, IT, NN, H, G>(&self, start: N, neighbors: NN, heuristic_fn: H, goal_fn: G) -> SearchResult<N, C>
    where
        N: Eq + Hash + Clone + Debug,
        NN: Fn(&N) -> IT,
        IT: IntoIterator<Item = (N, C)>,
        C: Float + Debug,
        H: Fn(&N) -> C,
        G: Fn(&N) -> bool
    {
        // Open List
        // Nodes that need to be evaluated, implemented as priority queue
        // Sorting is done by f_cost (cost + heuristic)
        let mut open_list: Frontier<C> = Frontier::new();
        let mut stats = SearchStats::default();

        // Evaluated nodes, avoids re-evaluating nodes, used to find the final path
        // Stores the raw cost only, the heuristic never leaks into it
        let mut closed_list: GraphNodeMap<N, C> = FxIndexMap::default();

        let start_f = heuristic_fn(&start);
        let start_index = closed_list.insert_full(start, (NO_PARENT, C::zero())).0;
        open_list.push(start_index, C::zero(), start_f);
        stats.pushed += 1;

        let mut goal_index = None;

        while let Some(entry) = open_list.pop_min() {

            // fetch current best cost for node
            let Some((node, &(_, c))) = closed_list.get_index(entry.index) else {
                continue;
            };

            // Staleness compares raw cost, not f_cost
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

                // This is confirmed cost, not heuristic
                let new_cost = c + edge_cost;

                let (neighbor_index, h_cost) = match closed_list.entry(neighbor) {
                    Vacant(e) => {
                        // This is the first time we're seeing this neighbor
                        let h_cost = heuristic_fn(e.key());
                        let index = e.index();
                        e.insert((entry.index, new_cost));
                        (index, h_cost)
                    }
                    Occupied(mut e) => {
                        if new_cost < e.get().1 {
                            // We've found a better path to this neighbor
                            let h_cost = heuristic_fn(e.key());
                            e.insert((entry.index, new_cost));
                            (e.index(), h_cost)
                        } else {
                            // The existing path is at least as good, do nothing
                            continue;
                        }
                    }
                };

                // Only add to the queue if we've found a better path
                open_list.push(neighbor_index, new_cost, new_cost + h_cost);
                stats.pushed += 1;
            }
        }

        log::debug!(
            "a*: reached {} nodes, expanded {}, pushed {}, stale {}, goal found: {}",
            closed_list.len(), stats.expanded, stats.pushed, stats.stale, goal_index.is_some()
        );

        SearchResult {
            nodes: closed_list,
            source: start_index,
            goal: goal_index,
            stats,
        }
    }
}
