use procgraph::graph::Graph;
use procgraph::types::NodeId;

#[allow(dead_code)]
pub fn position_of<P>(graph: &Graph<P>, id: &str) -> usize {
    graph
        .position_of(&NodeId::from(id))
        .unwrap_or_else(|| panic!("node '{id}' missing from graph"))
}

#[allow(dead_code)]
pub fn assert_before<P>(graph: &Graph<P>, earlier: &str, later: &str) {
    let earlier_at = position_of(graph, earlier);
    let later_at = position_of(graph, later);
    assert!(
        earlier_at < later_at,
        "expected '{earlier}' (position {earlier_at}) before '{later}' (position {later_at})"
    );
}

#[allow(dead_code)]
pub fn ids_of<P>(graph: &Graph<P>) -> Vec<String> {
    graph.ids().map(|id| id.as_str().to_string()).collect()
}
