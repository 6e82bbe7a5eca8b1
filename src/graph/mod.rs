mod sample;

pub use sample::sample_map;

use crate::collections::FxIndexMap;
use crate::errors::GraphError;
use crate::geometry::Point;

use std::{fmt, hash::Hash, fmt::Debug, slice};
use kdtree::KdTree;
use kdtree::distance::squared_euclidean;
use num_traits::{Float, ToPrimitive};


/// Outgoing edge, `to` is the dense index of the target node
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Edge<C> {
    pub to: usize,
    pub weight: C,
}

#[derive(Clone, Debug)]
struct NodeEntry<C> {
    point: Point<C>,
    edges: Vec<Edge<C>>,
}


/// Directed, weighted road network
///
/// Nodes are keyed by a caller chosen id and carry a 2D coordinate used by the
/// A* heuristic and by [`Graph::nearest_node`]. Edges are one-directional; a two
/// way road is two edges, see [`Graph::add_road`].
///
/// The graph is built up front and then only read. Searches borrow it shared,
/// so any number of them may run at once on different threads. Mutating a graph
/// while a search holds it is ruled out by the borrow checker.
pub struct Graph<N, C: Float = f64> {
    nodes: FxIndexMap<N, NodeEntry<C>>,
    edge_count: usize,
    spatial: KdTree<C, usize, [C; 2]>, // coordinate -> node index
}

impl<N, C> Graph<N, C>
where
    N: Eq + Hash + Clone + Debug,
    C: Float + Debug,
{

    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Create an empty graph with room for `capacity` nodes
    pub fn with_capacity(capacity: usize) -> Self {
        let mut nodes = FxIndexMap::default();
        nodes.reserve(capacity);
        Self {
            nodes,
            edge_count: 0,
            spatial: KdTree::new(2),
        }
    }

    /// Insert a node at (x, y)
    pub fn add_node(&mut self, id: N, x: C, y: C) -> Result<(), GraphError> {
        if self.nodes.contains_key(&id) {
            return Err(GraphError::DuplicateNode(format!("{id:?}")));
        }

        let point = Point::new(x, y);
        if !point.is_finite() {
            return Err(GraphError::NonFiniteCoordinate(format!("{id:?}")));
        }

        // index the node will get once inserted
        let index = self.nodes.len();
        self.spatial.add(point.coords(), index)?;
        self.nodes.insert(id, NodeEntry { point, edges: Vec::new() });
        Ok(())
    }

    /// Insert a directed edge `from -> to`
    /// Both endpoints must already exist and the weight must be finite and >= 0
    pub fn add_edge(&mut self, from: &N, to: &N, weight: C) -> Result<(), GraphError> {
        let from_index = self.index_of(from)?;
        let to_index = self.index_of(to)?;

        if weight.is_nan() || weight.is_infinite() {
            return Err(GraphError::NonFiniteWeight {
                from: format!("{from:?}"),
                to: format!("{to:?}"),
            });
        }
        if weight < C::zero() {
            return Err(GraphError::NegativeWeight {
                from: format!("{from:?}"),
                to: format!("{to:?}"),
                weight: weight.to_f64().unwrap_or(f64::NAN),
            });
        }

        if let Some((_, entry)) = self.nodes.get_index_mut(from_index) {
            entry.edges.push(Edge { to: to_index, weight });
            self.edge_count += 1;
        }
        Ok(())
    }

    /// Insert a two way road, one edge per direction
    pub fn add_road(&mut self, a: &N, b: &N, weight: C) -> Result<(), GraphError> {
        // validate both directions before touching the graph
        self.index_of(a)?;
        self.index_of(b)?;
        self.add_edge(a, b, weight)?;
        self.add_edge(b, a, weight)
    }

    /// Outgoing edges of `id` as (target, weight)
    pub fn neighbors(&self, id: &N) -> Result<Neighbors<'_, N, C>, GraphError> {
        let index = self.index_of(id)?;
        Ok(Neighbors {
            nodes: &self.nodes,
            edges: self.outgoing(index).iter(),
        })
    }

    pub fn node_coordinate(&self, id: &N) -> Result<Point<C>, GraphError> {
        self.nodes
            .get(id)
            .map(|entry| entry.point)
            .ok_or_else(|| GraphError::UnknownNode(format!("{id:?}")))
    }

    /// Node closest to (x, y), `None` on an empty graph
    pub fn nearest_node(&self, x: C, y: C) -> Result<Option<&N>, GraphError> {
        let query = Point::new(x, y);
        if !query.is_finite() {
            return Err(GraphError::NonFiniteCoordinate(format!("({x:?}, {y:?})")));
        }
        if self.nodes.is_empty() {
            return Ok(None);
        }

        let nearest = self.spatial.nearest(&query.coords(), 1, &squared_euclidean)?;
        Ok(nearest
            .first()
            .and_then(|&(_, &index)| self.id_at(index)))
    }

    pub fn contains(&self, id: &N) -> bool {
        self.nodes.contains_key(id)
    }

    /// Number of nodes
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of directed edges
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Node ids in insertion order
    pub fn node_ids(&self) -> impl Iterator<Item = &N> + '_ {
        self.nodes.keys()
    }

    /// Every directed edge as (from, to, weight)
    pub fn edges(&self) -> impl Iterator<Item = (&N, &N, C)> + '_ {
        self.nodes.iter().flat_map(move |(from, entry)| {
            entry.edges.iter().filter_map(move |edge| {
                self.id_at(edge.to).map(|to| (from, to, edge.weight))
            })
        })
    }

    pub(crate) fn index_of(&self, id: &N) -> Result<usize, GraphError> {
        self.nodes
            .get_index_of(id)
            .ok_or_else(|| GraphError::UnknownNode(format!("{id:?}")))
    }

    pub(crate) fn id_at(&self, index: usize) -> Option<&N> {
        self.nodes.get_index(index).map(|(id, _)| id)
    }

    pub(crate) fn point_at(&self, index: usize) -> Option<Point<C>> {
        self.nodes.get_index(index).map(|(_, entry)| entry.point)
    }

    pub(crate) fn outgoing(&self, index: usize) -> &[Edge<C>] {
        self.nodes
            .get_index(index)
            .map(|(_, entry)| entry.edges.as_slice())
            .unwrap_or_default()
    }

    /// Successors of a dense index, the shape the search engines consume
    pub(crate) fn successors(&self, index: usize) -> impl Iterator<Item = (usize, C)> + '_ {
        self.outgoing(index).iter().map(|edge| (edge.to, edge.weight))
    }
}

impl<N, C> Default for Graph<N, C>
where
    N: Eq + Hash + Clone + Debug,
    C: Float + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<N: Debug, C: Float> fmt::Debug for Graph<N, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Graph")
            .field("nodes", &self.nodes.len())
            .field("edges", &self.edge_count)
            .finish()
    }
}


/// Iterator over the outgoing edges of one node
pub struct Neighbors<'a, N, C> {
    nodes: &'a FxIndexMap<N, NodeEntry<C>>,
    edges: slice::Iter<'a, Edge<C>>,
}

impl<'a, N, C: Copy> Iterator for Neighbors<'a, N, C> {
    type Item = (&'a N, C);

    fn next(&mut self) -> Option<Self::Item> {
        let edge = self.edges.next()?;
        let (id, _) = self.nodes.get_index(edge.to)?;
        Some((id, edge.weight))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.edges.size_hint()
    }
}
