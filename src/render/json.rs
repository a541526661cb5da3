use crate::graph::Graph;

/// Render the graph as pretty-printed JSON.
pub fn render_json(graph: &Graph) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(graph)?)
}
