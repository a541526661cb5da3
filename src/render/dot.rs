use crate::graph::{Attrs, Graph};
use std::fmt::Write;

/// Render the graph in Graphviz dot format.
///
/// Vertices and edges are written in insertion order; every identifier and
/// attribute value is quoted.
pub fn render_dot(graph: &Graph) -> anyhow::Result<String> {
    let mut out = String::new();
    writeln!(out, "digraph {{")?;

    for (key, value) in &graph.attrs {
        writeln!(out, "\t{}={};", key, quote(value))?;
    }

    for v in graph.vertices() {
        writeln!(out, "\t{}{};", quote(&v.name), attr_list(&v.attrs))?;
    }

    for e in graph.edges() {
        writeln!(
            out,
            "\t{} -> {}{};",
            quote(&e.from),
            quote(&e.to),
            attr_list(&e.attrs)
        )?;
    }

    writeln!(out, "}}")?;
    Ok(out)
}

fn attr_list(attrs: &Attrs) -> String {
    if attrs.is_empty() {
        return String::new();
    }
    let parts: Vec<String> = attrs
        .iter()
        .map(|(k, v)| format!("{}={}", k, quote(v)))
        .collect();
    format!(" [{}]", parts.join(", "))
}

fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}
