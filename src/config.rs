//! Graph options: layout direction, highlights and keep/drop filters.
//!
//! All kind and namespace keys are lower-cased on insertion so the engines
//! can compare case-insensitively.

use crate::error::{Error, Result};
use regex::Regex;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;

/// Direction of the graph layout (Graphviz `rankdir`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LayoutDirection {
    /// Top to bottom.
    TopBottom,
    /// Bottom to top.
    BottomTop,
    #[default]
    LeftRight,
    RightLeft,
}

impl LayoutDirection {
    pub fn as_str(self) -> &'static str {
        match self {
            LayoutDirection::TopBottom => "TB",
            LayoutDirection::BottomTop => "BT",
            LayoutDirection::LeftRight => "LR",
            LayoutDirection::RightLeft => "RL",
        }
    }
}

impl fmt::Display for LayoutDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LayoutDirection {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "TB" => Ok(LayoutDirection::TopBottom),
            "BT" => Ok(LayoutDirection::BottomTop),
            "LR" => Ok(LayoutDirection::LeftRight),
            "RL" => Ok(LayoutDirection::RightLeft),
            other => Err(Error::UnsupportedLayout(other.to_string())),
        }
    }
}

/// Immutable options for a single graph build.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub layout: LayoutDirection,
    /// kind -> color
    pub highlight_kinds: BTreeMap<String, String>,
    /// namespace -> color
    pub highlight_namespaces: BTreeMap<String, String>,
    pub drop_kinds: BTreeSet<String>,
    pub drop_namespaces: BTreeSet<String>,
    pub keep_kinds: BTreeSet<String>,
    pub keep_namespaces: BTreeSet<String>,
}

impl Config {
    pub fn with_layout(mut self, layout: LayoutDirection) -> Self {
        self.layout = layout;
        self
    }

    pub fn with_highlight_kind(mut self, kind: &str, color: &str) -> Self {
        self.highlight_kinds
            .insert(kind.to_lowercase(), color.to_string());
        self
    }

    pub fn with_highlight_namespace(mut self, namespace: &str, color: &str) -> Self {
        self.highlight_namespaces
            .insert(namespace.to_lowercase(), color.to_string());
        self
    }

    pub fn with_drop_kind(mut self, kind: &str) -> Self {
        self.drop_kinds.insert(kind.to_lowercase());
        self
    }

    pub fn with_drop_namespace(mut self, namespace: &str) -> Self {
        self.drop_namespaces.insert(namespace.to_lowercase());
        self
    }

    pub fn with_keep_kind(mut self, kind: &str) -> Self {
        self.keep_kinds.insert(kind.to_lowercase());
        self
    }

    pub fn with_keep_namespace(mut self, namespace: &str) -> Self {
        self.keep_namespaces.insert(namespace.to_lowercase());
        self
    }
}

/// Parse a `key=value` pair, e.g. `ConfigMap=red`.
///
/// Exactly one `=` is allowed.
pub fn parse_kv(s: &str) -> Result<(String, String)> {
    let re = Regex::new(r"^([^=]*)=([^=]*)$")?;

    let caps = re
        .captures(s)
        .ok_or_else(|| Error::InvalidKeyValue(s.to_string()))?;

    Ok((caps[1].to_string(), caps[2].to_string()))
}
