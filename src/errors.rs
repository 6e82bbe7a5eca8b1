use thiserror::Error;


/// Failures while building a [`Graph`](crate::graph::Graph)
/// Node ids are carried as their `Debug` rendering
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GraphError {
    #[error("node {0} already exists")]
    DuplicateNode(String),

    #[error("node {0} is not in the graph")]
    UnknownNode(String),

    #[error("edge {from} -> {to} has negative weight {weight}")]
    NegativeWeight { from: String, to: String, weight: f64 },

    #[error("edge {from} -> {to} has a non-finite weight")]
    NonFiniteWeight { from: String, to: String },

    #[error("coordinate of {0} is not finite")]
    NonFiniteCoordinate(String),

    #[error("spatial index error: {0}")]
    Spatial(String),
}

/// Failures while turning a search into a route
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PathError {
    #[error("destination is unreachable from the source")]
    Unreachable,

    // Predecessor chain does not lead back to the source
    #[error("search result is inconsistent")]
    Inconsistent,
}

/// Anything `find_route` can fail with
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RouteError {
    #[error(transparent)]
    Graph(#[from] GraphError),

    #[error(transparent)]
    Path(#[from] PathError),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown routing algorithm `{0}`")]
pub struct UnknownAlgorithm(pub String);


impl From<kdtree::ErrorKind> for GraphError {
    fn from(error: kdtree::ErrorKind) -> Self {
        GraphError::Spatial(error.to_string())
    }
}
