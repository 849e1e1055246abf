use std::collections::HashSet;

use anatomy_atlas::Atlas;

use super::HighlightState;

/// The selected node, its visible incident edges and the nodes at their far
/// ends.
pub(super) fn build_highlight_state(atlas: &Atlas, selected_id: &str) -> Option<HighlightState> {
    let graph = atlas.graph();
    let visibility = atlas.visibility();
    let selected_index = graph.node_index(selected_id)?;

    let mut related_nodes = HashSet::from([selected_index]);
    let mut related_edges = HashSet::new();

    for edge_index in graph.incident_edges(selected_id) {
        if !visibility.edge(edge_index) {
            continue;
        }
        let Some(edge) = graph.edges.get(edge_index) else {
            continue;
        };
        related_edges.insert(edge_index);
        for endpoint in [&edge.source, &edge.target] {
            if let Some(index) = graph.node_index(endpoint) {
                related_nodes.insert(index);
            }
        }
    }

    Some(HighlightState {
        related_nodes,
        related_edges,
    })
}
