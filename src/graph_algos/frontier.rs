use std::{
    cmp::Ordering,
    collections::BinaryHeap,
};
use num_traits::Float;


/// Entry on the frontier
/// - `index` identifies the node, usually its position in the search node map
/// - `cost` is the accumulated cost when the entry was pushed
/// - `priority` orders the queue: cost for Dijkstra, cost + h(n) for A*
#[derive(Clone, Copy, Debug)]
pub struct FrontierEntry<C> {
    pub index: usize,
    pub cost: C,
    pub priority: C,
}

impl<C: Float> FrontierEntry<C> {

    /// An entry is stale once a cheaper path to its node has been recorded
    pub fn is_stale(&self, best_cost: C) -> bool {
        best_cost < self.cost
    }
}

// BinaryHeap is a max heap, so the comparison is reversed
// Equal priorities fall back to the index to keep pops deterministic
impl<C: Float> Ord for FrontierEntry<C> {
    fn cmp(&self, other: &Self) -> Ordering {
        other.priority
            .partial_cmp(&self.priority)
            .unwrap_or(Ordering::Equal)
            .then_with(|| other.index.cmp(&self.index))
    }
}
impl<C: Float> PartialOrd for FrontierEntry<C> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl<C: Float> PartialEq for FrontierEntry<C> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}
impl<C: Float> Eq for FrontierEntry<C> {}


/// Min priority queue with lazy deletion
///
/// There is no decrease-key: when a node gets cheaper it is pushed again and
/// the older entry stays queued. Consumers check [`FrontierEntry::is_stale`]
/// against their best known cost and drop outdated entries on pop.
#[derive(Clone, Debug)]
pub struct Frontier<C> {
    heap: BinaryHeap<FrontierEntry<C>>,
}

impl<C: Float> Frontier<C> {

    pub fn new() -> Self {
        Self { heap: BinaryHeap::new() }
    }

    pub fn push(&mut self, index: usize, cost: C, priority: C) {
        self.heap.push(FrontierEntry { index, cost, priority });
    }

    /// Remove and return the entry with the lowest priority
    pub fn pop_min(&mut self) -> Option<FrontierEntry<C>> {
        self.heap.pop()
    }

    pub fn peek_min(&self) -> Option<&FrontierEntry<C>> {
        self.heap.peek()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

impl<C: Float> Default for Frontier<C> {
    fn default() -> Self {
        Self::new()
    }
}
