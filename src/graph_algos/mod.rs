pub mod dijkstra;
pub mod a_star;
pub mod frontier;
mod shortest_path;

pub use shortest_path::{reconstruct, Route};

use crate::collections::{FxIndexMap, NO_PARENT};

use std::hash::Hash;

/// Type alias for the node map used in path planning algorithms
/// N: Node - space on a graph
/// C: Cost of reaching the node from the start
/// The tuple contains (parent_index, cost) where:
/// - parent_index is the index of the parent node in the map
/// - cost is the best known cost to reach this node from the start
pub type GraphNodeMap<N, C> = FxIndexMap<N, (usize, C)>;


/// Counters collected while a search runs
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub expanded: usize, // nodes whose edges were relaxed
    pub pushed: usize, // entries pushed onto the frontier
    pub stale: usize, // popped entries discarded as outdated
}


/// Outcome of one search invocation
///
/// Holds the best known cost and predecessor of every node the search reached.
/// Nodes that were never reached are absent. When the search stopped early at
/// its goal, costs of nodes other than the goal may still be tentative.
#[derive(Clone, Debug)]
pub struct SearchResult<N, C> {
    pub(crate) nodes: GraphNodeMap<N, C>,
    pub(crate) source: usize,
    pub(crate) goal: Option<usize>,
    pub(crate) stats: SearchStats,
}

impl<N, C> SearchResult<N, C>
where
    N: Eq + Hash,
    C: Copy,
{

    /// Start node of the search
    pub fn source(&self) -> Option<&N> {
        self.nodes.get_index(self.source).map(|(node, _)| node)
    }

    /// Goal node the search stopped at, if it reached one
    pub fn goal(&self) -> Option<&N> {
        self.goal
            .and_then(|index| self.nodes.get_index(index))
            .map(|(node, _)| node)
    }

    /// Best known cost from the source
    pub fn cost_to(&self, node: &N) -> Option<C> {
        self.nodes.get(node).map(|&(_, cost)| cost)
    }

    /// Previous node on the best known path, `None` for the source and unreached nodes
    pub fn predecessor_of(&self, node: &N) -> Option<&N> {
        let &(parent, _) = self.nodes.get(node)?;
        if parent == NO_PARENT {
            return None;
        }
        self.nodes.get_index(parent).map(|(node, _)| node)
    }

    pub fn reached(&self, node: &N) -> bool {
        self.nodes.contains_key(node)
    }

    /// Number of reached nodes
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Reached nodes with their best known cost, in discovery order
    pub fn iter(&self) -> impl Iterator<Item = (&N, C)> + '_ {
        self.nodes.iter().map(|(node, &(_, cost))| (node, cost))
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Swap node ids, keeping costs, parent links and statistics
    pub(crate) fn map_nodes<M, F>(self, mut f: F) -> Option<SearchResult<M, C>>
    where
        M: Eq + Hash,
        F: FnMut(N) -> Option<M>,
    {
        let mut nodes = FxIndexMap::default();
        nodes.reserve(self.nodes.len());
        for (node, value) in self.nodes {
            // a duplicate key would shift every later index
            if nodes.insert(f(node)?, value).is_some() {
                return None;
            }
        }
        Some(SearchResult {
            nodes,
            source: self.source,
            goal: self.goal,
            stats: self.stats,
        })
    }
}
