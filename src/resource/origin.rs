//! Origin metadata recorded by `kustomize build` when `buildMetadata:
//! [originAnnotations]` is enabled.
//!
//! The annotation value is a small YAML document:
//!
//! ```yaml
//! path: examples/helloWorld/configMap.yaml
//! repo: https://github.com/kubernetes-sigs/kustomize
//! ref: v1.0.6
//! ```
//!
//! Generated resources carry `configuredIn` / `configuredBy` instead.

use serde::{Deserialize, Serialize};

/// Annotation holding the origin document.
pub const ORIGIN_ANNOTATION: &str = "config.kubernetes.io/origin";

/// Prefix kustomize adds to paths of remote resources it did not clone.
pub const NOT_CLONED_PREFIX: &str = "notCloned/";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Origin {
    pub path: String,
    pub repo: String,
    #[serde(rename = "ref")]
    pub git_ref: String,
    pub configured_in: String,
    pub configured_by: ConfiguredBy,
}

/// Identity of the generator or transformer that produced a resource.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConfiguredBy {
    pub api_version: String,
    pub kind: String,
    pub name: String,
    pub namespace: String,
}

impl Origin {
    /// Parse an annotation value. A blank or null document is an empty
    /// origin, the same as `{}`.
    pub fn from_annotation(text: &str) -> Result<Self, serde_yaml::Error> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        let origin: Option<Self> = serde_yaml::from_str(text)?;
        Ok(origin.unwrap_or_default())
    }

    /// Generator identity as `apiVersion/kind name`, for diagnostics.
    pub fn generator(&self) -> Option<String> {
        let by = &self.configured_by;
        if by.kind.is_empty() {
            return None;
        }
        let mut out = format!("{}/{}", by.api_version, by.kind);
        match (by.namespace.as_str(), by.name.as_str()) {
            (_, "") => {}
            ("", name) => out.push_str(&format!(" {name}")),
            (ns, name) => out.push_str(&format!(" {ns}/{name}")),
        }
        Some(out)
    }

    /// Origin path without the `notCloned/` marker.
    pub fn display_path(&self) -> &str {
        self.path
            .strip_prefix(NOT_CLONED_PREFIX)
            .unwrap_or(&self.path)
    }
}
