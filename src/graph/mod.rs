//! Directed graph with string attribute bags on vertices, edges and the graph
//! itself, plus the engines that build one from resources.
//!
//! Vertices are keyed by name; adding an existing vertex (or an edge between
//! a pair that already has one) returns the existing attributes. Insertion
//! order is preserved for rendering.

pub mod builder;
pub mod highlight;
pub mod naming;
pub mod policy;

pub use builder::build_graph;

use serde::Serialize;
use std::collections::{BTreeMap, HashMap};

/// Render hints, e.g. `color`, `fillcolor`, `label`, `rankdir`.
pub type Attrs = BTreeMap<String, String>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Vertex {
    pub name: String,
    pub attrs: Attrs,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Edge {
    pub from: String,
    pub to: String,
    pub attrs: Attrs,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct Graph {
    /// Graph-level attributes.
    pub attrs: Attrs,
    vertices: Vec<Vertex>,
    edges: Vec<Edge>,

    #[serde(skip)]
    vertex_index: HashMap<String, usize>,
    #[serde(skip)]
    edge_index: HashMap<(String, String), usize>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `name` if missing and return its attributes.
    pub fn add_vertex(&mut self, name: &str) -> &mut Attrs {
        let idx = match self.vertex_index.get(name) {
            Some(&idx) => idx,
            None => {
                let idx = self.vertices.len();
                self.vertices.push(Vertex {
                    name: name.to_string(),
                    attrs: Attrs::new(),
                });
                self.vertex_index.insert(name.to_string(), idx);
                idx
            }
        };
        &mut self.vertices[idx].attrs
    }

    /// Add the edge `from -> to` if missing (adding endpoints as needed) and
    /// return its attributes.
    pub fn add_edge(&mut self, from: &str, to: &str) -> &mut Attrs {
        self.add_vertex(from);
        self.add_vertex(to);

        let key = (from.to_string(), to.to_string());
        let idx = match self.edge_index.get(&key) {
            Some(&idx) => idx,
            None => {
                let idx = self.edges.len();
                self.edges.push(Edge {
                    from: key.0.clone(),
                    to: key.1.clone(),
                    attrs: Attrs::new(),
                });
                self.edge_index.insert(key, idx);
                idx
            }
        };
        &mut self.edges[idx].attrs
    }

    pub fn vertex(&self, name: &str) -> Option<&Vertex> {
        self.vertex_index.get(name).map(|&idx| &self.vertices[idx])
    }

    pub fn edge(&self, from: &str, to: &str) -> Option<&Edge> {
        self.edge_index
            .get(&(from.to_string(), to.to_string()))
            .map(|&idx| &self.edges[idx])
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }
}

// Lookup indexes are derived from the vectors, so equality ignores them.
impl PartialEq for Graph {
    fn eq(&self, other: &Self) -> bool {
        self.attrs == other.attrs && self.vertices == other.vertices && self.edges == other.edges
    }
}

impl Eq for Graph {}
