use std::{fs, path::Path};

use anyhow::Context;
use serde::{Deserialize, de::DeserializeOwned};

/// Reads every non-empty document of a YAML manifest as `K`.
pub(crate) fn read_all<K: DeserializeOwned>(path: &Path) -> anyhow::Result<Vec<K>> {
    let contents =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    parse_all(&contents).with_context(|| format!("failed to parse {}", path.display()))
}

/// Reads a manifest that must contain exactly one document.
pub(crate) fn read_one<K: DeserializeOwned>(path: &Path) -> anyhow::Result<K> {
    let mut docs = read_all(path)?;
    match docs.len() {
        1 => Ok(docs.remove(0)),
        n => anyhow::bail!("expected one document in {}, found {}", path.display(), n),
    }
}

pub(crate) fn parse_all<K: DeserializeOwned>(contents: &str) -> anyhow::Result<Vec<K>> {
    let mut objects = Vec::new();
    for document in serde_yaml::Deserializer::from_str(contents) {
        let value = serde_yaml::Value::deserialize(document)?;
        if value.is_null() {
            continue;
        }
        objects.push(serde_yaml::from_value(value)?);
    }
    Ok(objects)
}
