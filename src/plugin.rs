//! KRM function mode.
//!
//! kustomize pipes a `ResourceList` to stdin and reads one back from stdout.
//! The input items are graphed and replaced by a single ConfigMap whose
//! `data.dot` holds the rendered graph.
//!
//! ```yaml
//! apiVersion: config.kubernetes.io/v1
//! kind: ResourceList
//! functionConfig:
//!   spec:
//!     layout: TB
//!     highlightKinds: { Deployment: green }
//!     dropKinds: [Secret]
//! items: [...]
//! ```

use crate::config::{Config, LayoutDirection};
use crate::error;
use crate::graph::build_graph;
use crate::render::render_dot;
use crate::resource;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use serde_yaml::Value;
use std::collections::BTreeMap;
use tracing::debug;

const RESOURCE_LIST_API_VERSION: &str = "config.kubernetes.io/v1";
const OUTPUT_NAME: &str = "kustomize-dot";
const OUTPUT_NAMESPACE: &str = "default";

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceList {
    #[serde(default)]
    pub items: Vec<Value>,

    #[serde(default)]
    pub function_config: Option<PluginConfig>,
}

#[derive(Debug, Default, Deserialize)]
pub struct PluginConfig {
    #[serde(default)]
    pub spec: PluginSpec,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PluginSpec {
    /// Empty or missing means LR.
    pub layout: Option<String>,
    pub highlight_kinds: BTreeMap<String, String>,
    pub highlight_namespaces: BTreeMap<String, String>,
    pub drop_kinds: Vec<String>,
    pub drop_namespaces: Vec<String>,
    pub keep_kinds: Vec<String>,
    #[serde(alias = "keepNamespace")]
    pub keep_namespaces: Vec<String>,
}

impl PluginSpec {
    pub fn to_config(&self) -> error::Result<Config> {
        let layout = match self.layout.as_deref() {
            None | Some("") => LayoutDirection::default(),
            Some(s) => s.parse()?,
        };

        let mut config = Config::default().with_layout(layout);
        for (kind, color) in &self.highlight_kinds {
            config = config.with_highlight_kind(kind, color);
        }
        for (namespace, color) in &self.highlight_namespaces {
            config = config.with_highlight_namespace(namespace, color);
        }
        for kind in &self.drop_kinds {
            config = config.with_drop_kind(kind);
        }
        for namespace in &self.drop_namespaces {
            config = config.with_drop_namespace(namespace);
        }
        for kind in &self.keep_kinds {
            config = config.with_keep_kind(kind);
        }
        for namespace in &self.keep_namespaces {
            config = config.with_keep_namespace(namespace);
        }

        Ok(config)
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct OutputList {
    api_version: &'static str,
    kind: &'static str,
    items: Vec<ConfigMap>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ConfigMap {
    api_version: &'static str,
    kind: &'static str,
    metadata: Metadata,
    data: BTreeMap<String, String>,
}

#[derive(Debug, Serialize)]
struct Metadata {
    name: &'static str,
    namespace: &'static str,
}

/// Process a serialized `ResourceList` and return the output `ResourceList`.
pub fn run(input: &str) -> anyhow::Result<String> {
    let list: ResourceList =
        serde_yaml::from_str(input).context("cannot parse ResourceList")?;

    let spec = list
        .function_config
        .map(|c| c.spec)
        .unwrap_or_default();
    let config = spec.to_config()?;
    debug!(?config, "plugin config");

    let mut resources = Vec::new();
    for (idx, item) in list.items.into_iter().enumerate() {
        resources.extend(resource::from_value(idx + 1, item).context("cannot parse resources")?);
    }

    let g = build_graph(&resources, &config).context("cannot generate graph")?;
    let dot = render_dot(&g)?;

    let out = OutputList {
        api_version: RESOURCE_LIST_API_VERSION,
        kind: "ResourceList",
        items: vec![ConfigMap {
            api_version: "v1",
            kind: "ConfigMap",
            metadata: Metadata {
                name: OUTPUT_NAME,
                namespace: OUTPUT_NAMESPACE,
            },
            data: BTreeMap::from([("dot".to_string(), dot)]),
        }],
    };

    Ok(serde_yaml::to_string(&out)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use pretty_assertions::assert_eq;

    const INPUT: &str = r#"
apiVersion: config.kubernetes.io/v1
kind: ResourceList
functionConfig:
  apiVersion: dnaeon.github.io/v1
  kind: KustomizeDot
  metadata:
    name: kustomize-dot
  spec:
    layout: TB
    highlightKinds:
      Service: red
    keepNamespace:
      - default
items:
  - apiVersion: v1
    kind: Service
    metadata:
      name: the-service
      namespace: default
      annotations:
        config.kubernetes.io/origin: |
          path: service.yaml
  - apiVersion: v1
    kind: ConfigMap
    metadata:
      name: other
      namespace: other
      annotations:
        config.kubernetes.io/origin: |
          path: other.yaml
"#;

    #[test]
    fn spec_to_config() {
        let list: ResourceList = serde_yaml::from_str(INPUT).unwrap();
        let config = list.function_config.unwrap().spec.to_config().unwrap();

        assert_eq!(config.layout, LayoutDirection::TopBottom);
        assert_eq!(config.highlight_kinds["service"], "red");
        assert!(config.keep_namespaces.contains("default"));
    }

    #[test]
    fn missing_layout_defaults_to_lr() {
        let spec = PluginSpec::default();
        assert_eq!(spec.to_config().unwrap().layout, LayoutDirection::LeftRight);

        let spec = PluginSpec {
            layout: Some(String::new()),
            ..PluginSpec::default()
        };
        assert_eq!(spec.to_config().unwrap().layout, LayoutDirection::LeftRight);
    }

    #[test]
    fn unknown_layout_is_an_error() {
        let spec = PluginSpec {
            layout: Some("diagonal".to_string()),
            ..PluginSpec::default()
        };
        assert!(matches!(spec.to_config(), Err(Error::UnsupportedLayout(_))));
    }

    #[test]
    fn emits_config_map_with_dot() {
        let out = run(INPUT).unwrap();
        let value: Value = serde_yaml::from_str(&out).unwrap();

        assert_eq!(value["apiVersion"].as_str(), Some("config.kubernetes.io/v1"));
        assert_eq!(value["kind"].as_str(), Some("ResourceList"));

        let items = value["items"].as_sequence().unwrap();
        assert_eq!(items.len(), 1);

        let cm = &items[0];
        assert_eq!(cm["kind"].as_str(), Some("ConfigMap"));
        assert_eq!(cm["metadata"]["name"].as_str(), Some("kustomize-dot"));
        assert_eq!(cm["metadata"]["namespace"].as_str(), Some("default"));

        let dot = cm["data"]["dot"].as_str().unwrap();
        assert!(dot.contains("rankdir=\"TB\";"), "{dot}");
        assert!(
            dot.contains(r#""default/service/the-service" [color="red", fillcolor="red"];"#),
            "{dot}"
        );
        assert!(dot.contains("\"default/service/the-service\" -> \"service.yaml\""), "{dot}");
        assert!(!dot.contains("other"), "{dot}");
    }

    #[test]
    fn bad_item_reports_its_position() {
        let input = "kind: ResourceList\nitems:\n\
            - kind: Namespace\n  metadata:\n    name: a\n\
            - kind: Namespace\n  metadata:\n    name: b\n\
            - kind: Namespace\n  metadata: {}\n";
        let err = run(input).unwrap_err();
        let parse = err.downcast_ref::<Error>().unwrap();
        assert!(matches!(parse, Error::Parse { index: 3, .. }), "{err:#}");
    }

    #[test]
    fn no_function_config() {
        let out = run("kind: ResourceList\nitems: []\n").unwrap();
        let value: Value = serde_yaml::from_str(&out).unwrap();
        assert_eq!(
            value["items"][0]["data"]["dot"].as_str(),
            Some("digraph {\n\trankdir=\"LR\";\n}\n")
        );
    }
}
