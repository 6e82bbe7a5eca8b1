use crate::collections::NO_PARENT;
use crate::errors::PathError;
use super::SearchResult;

use std::hash::Hash;
use num_traits::Float;


/// Ordered nodes from source to destination plus the total cost
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route<N, C = f64> {
    nodes: Vec<N>,
    cost: C,
}

impl<N, C: Copy> Route<N, C> {

    /// Nodes in travel order, source first
    pub fn nodes(&self) -> &[N] {
        &self.nodes
    }

    pub fn cost(&self) -> C {
        self.cost
    }

    pub fn source(&self) -> Option<&N> {
        self.nodes.first()
    }

    pub fn destination(&self) -> Option<&N> {
        self.nodes.last()
    }

    /// Number of nodes, a route is never empty
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn into_nodes(self) -> Vec<N> {
        self.nodes
    }

    /// Translate node ids, failing if any id has no counterpart
    pub(crate) fn try_map<M, F>(self, f: F) -> Option<Route<M, C>>
    where
        F: FnMut(N) -> Option<M>,
    {
        let nodes = self.nodes.into_iter().map(f).collect::<Option<Vec<M>>>()?;
        Some(Route { nodes, cost: self.cost })
    }
}


/// Construct the shortest path from the source of `result` to `destination`
/// Walks parent links back from the destination, then reverses
///
/// For a search that stopped early only the goal's route is guaranteed optimal
pub fn reconstruct<N, C>(result: &SearchResult<N, C>, destination: &N) -> Result<Route<N, C>, PathError>
where
    N: Eq + Hash + Clone,
    C: Float,
{
    let node_map = &result.nodes;

    let Some(goal_index) = node_map.get_index_of(destination) else {
        return Err(PathError::Unreachable);
    };
    let (_, &(_, cost)) = node_map.get_index(goal_index).ok_or(PathError::Inconsistent)?;

    if goal_index == result.source {
        return Ok(Route { nodes: vec![destination.clone()], cost: C::zero() });
    }

    let mut path = Vec::new();
    let mut current_index = goal_index;

    // Trace back from goal to start
    loop {
        // a chain longer than the map must be a cycle
        if path.len() >= node_map.len() {
            return Err(PathError::Inconsistent);
        }

        let Some((node, &(parent_index, _))) = node_map.get_index(current_index) else {
            return Err(PathError::Inconsistent);
        };
        path.push(node.clone());

        if parent_index == NO_PARENT {
            break;
        }
        current_index = parent_index;
    }

    // The chain has to end at the source
    if current_index != result.source {
        return Err(PathError::Inconsistent);
    }

    // The path is in reverse order, so reverse it
    path.reverse();

    Ok(Route { nodes: path, cost })
}
