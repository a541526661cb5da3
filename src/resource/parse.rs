use crate::error::{Error, Result};
use crate::resource::item::Resource;
use serde::Deserialize;
use serde_yaml::Value;
use std::collections::BTreeMap;
use std::fs;
use std::io::{self, Read};

/// Shape of a resource document, reduced to the fields we graph.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawResource {
    #[serde(default)]
    api_version: String,

    #[serde(default)]
    kind: String,

    #[serde(default)]
    metadata: Option<RawMetadata>,

    #[serde(default)]
    items: Option<Vec<Value>>,
}

#[derive(Debug, Deserialize)]
struct RawMetadata {
    #[serde(default)]
    name: Option<String>,

    #[serde(default)]
    namespace: Option<String>,

    #[serde(default)]
    annotations: Option<BTreeMap<String, String>>,
}

/// Parse a multi-document YAML stream, as produced by `kustomize build`.
///
/// Empty documents are skipped. `*List` documents are flattened into their
/// items.
pub fn parse_str(text: &str) -> Result<Vec<Resource>> {
    let mut out = Vec::new();
    for (idx, doc) in serde_yaml::Deserializer::from_str(text).enumerate() {
        let value = Value::deserialize(doc)?;
        collect(idx + 1, value, &mut out)?;
    }

    Ok(out)
}

pub fn parse_reader<R: Read>(mut reader: R) -> Result<Vec<Resource>> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    parse_str(&text)
}

/// Parse resources from a file; `-` reads stdin.
pub fn parse_file(path: &str) -> Result<Vec<Resource>> {
    if path == "-" {
        return parse_reader(io::stdin().lock());
    }
    let text = fs::read_to_string(path)?;
    parse_str(&text)
}

/// Convert a single already-parsed document (e.g. a ResourceList item).
/// `index` is its 1-based position, used in error messages.
pub fn from_value(index: usize, value: Value) -> Result<Vec<Resource>> {
    let mut out = Vec::new();
    collect(index, value, &mut out)?;
    Ok(out)
}

fn collect(index: usize, value: Value, out: &mut Vec<Resource>) -> Result<()> {
    match &value {
        Value::Null => return Ok(()),
        Value::Mapping(_) => {}
        other => {
            return Err(Error::Parse {
                index,
                message: format!("expected a resource mapping, found {}", type_name(other)),
            });
        }
    }

    let raw: RawResource = serde_yaml::from_value(value).map_err(|e| Error::Parse {
        index,
        message: e.to_string(),
    })?;

    if raw.kind.is_empty() {
        return Err(Error::Parse {
            index,
            message: "missing kind".to_string(),
        });
    }

    if raw.kind.ends_with("List") {
        if let Some(items) = raw.items {
            for item in items {
                collect(index, item, out)?;
            }
            return Ok(());
        }
    }

    let Some(metadata) = raw.metadata else {
        return Err(Error::Parse {
            index,
            message: format!("{} is missing metadata", raw.kind),
        });
    };
    let name = metadata.name.unwrap_or_default();
    if name.is_empty() {
        return Err(Error::Parse {
            index,
            message: format!("{} is missing metadata.name", raw.kind),
        });
    }

    out.push(Resource {
        api_version: raw.api_version,
        kind: raw.kind,
        namespace: metadata.namespace.unwrap_or_default(),
        name,
        annotations: metadata.annotations.unwrap_or_default(),
    });

    Ok(())
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a sequence",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}
