//! Turn the output of `kustomize build` into a graph connecting every
//! resource to the file or generator it came from.
//!
//! The pipeline is: [`resource::parse_str`] -> [`graph::build_graph`] ->
//! [`render::render_dot`].

pub mod config;
pub mod error;
pub mod graph;
pub mod plugin;
pub mod render;
pub mod resource;

pub use error::Error;
