//! Renderers turning a [`Graph`](crate::graph::Graph) into text.

pub mod dot;
pub mod json;

pub use dot::render_dot;
pub use json::render_json;

use crate::graph::Graph;
use clap::ValueEnum;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// Graphviz dot
    #[default]
    Dot,
    Json,
}

pub fn render(graph: &Graph, format: Format) -> anyhow::Result<String> {
    match format {
        Format::Dot => render_dot(graph),
        Format::Json => render_json(graph),
    }
}
