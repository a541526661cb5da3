use crate::config::Config;
use crate::error::Result;
use crate::graph::highlight::apply_highlight;
use crate::graph::naming::{
    edge_label_from_origin, vertex_name_from_origin, vertex_name_from_resource,
};
use crate::graph::policy::should_drop;
use crate::graph::Graph;
use crate::resource::Resource;
use tracing::{debug, info};

/// Build the resource -> origin graph.
///
/// Each kept resource becomes a vertex connected to the vertex of its origin
/// (file or generator). Resources without an origin annotation get no edge;
/// a blank one links to the empty-named vertex. A malformed origin annotation
/// aborts the whole build.
pub fn build_graph(resources: &[Resource], config: &Config) -> Result<Graph> {
    let mut g = Graph::new();
    let mut dropped = 0usize;

    for r in resources {
        if should_drop(r, config) {
            debug!(resource = %r, "dropping resource");
            dropped += 1;
            continue;
        }

        let u = vertex_name_from_resource(r);
        apply_highlight(g.add_vertex(&u), r, config);

        let Some(origin) = r.origin()? else {
            debug!(resource = %r, "no origin metadata");
            continue;
        };

        let v = vertex_name_from_origin(&origin);
        let label = edge_label_from_origin(&origin);
        if let Some(generator) = origin.generator() {
            debug!(resource = %r, generator = %generator, "generated resource");
        }
        g.add_edge(&u, &v).insert("label".to_string(), label);
    }

    g.attrs
        .insert("rankdir".to_string(), config.layout.to_string());

    info!(
        resources = resources.len(),
        dropped,
        vertices = g.vertices().len(),
        edges = g.edges().len(),
        "built graph"
    );

    Ok(g)
}
