//! Kubernetes resources and their kustomize origin metadata.

pub mod item;
pub mod origin;
pub mod parse;

pub use item::Resource;
pub use origin::{ConfiguredBy, ORIGIN_ANNOTATION, Origin};
pub use parse::{from_value, parse_file, parse_reader, parse_str};
