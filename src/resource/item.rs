use crate::error::{Error, Result};
use crate::resource::origin::{ORIGIN_ANNOTATION, Origin};
use std::collections::BTreeMap;
use std::fmt;

/// A single Kubernetes resource as emitted by `kustomize build`.
///
/// Only the identity fields and annotations are retained; the rest of the
/// document is irrelevant for graphing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Resource {
    pub api_version: String,
    pub kind: String,
    /// Empty for cluster-scoped resources.
    pub namespace: String,
    pub name: String,
    pub annotations: BTreeMap<String, String>,
}

impl Resource {
    pub fn new(kind: &str, namespace: &str, name: &str) -> Self {
        Self {
            kind: kind.to_string(),
            namespace: namespace.to_string(),
            name: name.to_string(),
            ..Self::default()
        }
    }

    pub fn with_annotation(mut self, key: &str, value: &str) -> Self {
        self.annotations.insert(key.to_string(), value.to_string());
        self
    }

    /// Read the origin annotation.
    ///
    /// Returns `Ok(None)` only when the annotation is missing. A blank, `null`
    /// or `~` annotation yields an empty origin, and anything that is not an
    /// origin document is an error.
    pub fn origin(&self) -> Result<Option<Origin>> {
        let Some(text) = self.annotations.get(ORIGIN_ANNOTATION) else {
            return Ok(None);
        };

        Origin::from_annotation(text)
            .map(Some)
            .map_err(|source| Error::Origin {
                resource: self.to_string(),
                source,
            })
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.api_version.is_empty() {
            write!(f, "{}/", self.api_version)?;
        }
        if self.namespace.is_empty() {
            write!(f, "{} {}", self.kind, self.name)
        } else {
            write!(f, "{} {}/{}", self.kind, self.namespace, self.name)
        }
    }
}
