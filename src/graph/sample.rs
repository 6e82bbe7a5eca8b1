use super::Graph;
use crate::errors::GraphError;


/// Small demo town: six places joined by two way roads
///
/// Road weights are travel times and do not follow the coordinates exactly, so
/// A* on this map is not guaranteed to find the cheapest route.
pub fn sample_map() -> Result<Graph<&'static str>, GraphError> {
    let mut graph = Graph::with_capacity(6);

    graph.add_node("Station", 0.0, 0.0)?;
    graph.add_node("Market", 2.0, 1.0)?;
    graph.add_node("College", 4.0, 0.0)?;
    graph.add_node("Hospital", 1.0, -2.0)?;
    graph.add_node("Mall", 3.0, -2.0)?;
    graph.add_node("Airport", 6.0, -1.0)?;

    let roads = [
        ("Station", "Market", 2.2),
        ("Station", "Hospital", 2.5),
        ("Market", "College", 2.5),
        ("Market", "Mall", 3.0),
        ("College", "Airport", 2.8),
        ("Hospital", "Mall", 1.8),
        ("Mall", "Airport", 3.0),
        ("Market", "Hospital", 3.4),
    ];
    for (a, b, weight) in roads {
        graph.add_road(&a, &b, weight)?;
    }

    Ok(graph)
}
