//! JSON document loading with duplicate-key detection
//!
//! `serde_json` silently keeps the last value of a repeated key. Package
//! documents are hand edited, so a repeated key almost always means a
//! configuration block was overwritten by accident. The loader rebuilds the
//! value tree itself and remembers every duplicate it sees, at any depth.

use std::collections::BTreeSet;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::de::{DeserializeSeed, Deserializer, MapAccess, SeqAccess, Visitor};
use serde_json::{Map, Number, Value};
use thiserror::Error;

use crate::diagnostics::{Diagnostics, Namespace};

/// Failures that make a document unreadable as a whole
#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("{} must contain a JSON object at the top level", .path.display())]
    NotAnObject { path: PathBuf },
}

/// A parsed document together with its structural findings
#[derive(Debug, Clone)]
pub struct LoadedDocument {
    /// File name used in messages (e.g. `problem.json`)
    pub name: String,
    pub root: Map<String, Value>,
    /// Keys that appeared more than once inside a single object
    pub duplicate_keys: Vec<String>,
    /// Required top-level keys that are absent
    pub missing_keys: Vec<String>,
}

impl LoadedDocument {
    /// Append duplicate-key and missing-key errors to `diag`
    pub fn record_findings(&self, diag: &mut Diagnostics, namespace: Namespace) {
        for key in &self.duplicate_keys {
            diag.error(namespace, format!("duplicate key: {key}"));
        }
        for key in &self.missing_keys {
            diag.error(namespace, format!("{key} is required in {}", self.name));
        }
    }
}

/// Load `path` as a JSON object and check it for `required_keys`.
pub fn load_document(path: &Path, required_keys: &[&str]) -> Result<LoadedDocument, DocumentError> {
    let content = fs::read_to_string(path).map_err(|source| DocumentError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    let (value, duplicate_keys) = parse_str(&content).map_err(|source| DocumentError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    let Value::Object(root) = value else {
        return Err(DocumentError::NotAnObject {
            path: path.to_path_buf(),
        });
    };

    let missing_keys = missing_keys(&root, required_keys);
    tracing::debug!(
        document = %name,
        entries = root.len(),
        duplicates = duplicate_keys.len(),
        missing = missing_keys.len(),
        "loaded document"
    );

    Ok(LoadedDocument {
        name,
        root,
        duplicate_keys,
        missing_keys,
    })
}

/// Parse JSON text, returning the value and every duplicated key in order of appearance.
///
/// The first occurrence of a repeated key is kept.
pub fn parse_str(content: &str) -> Result<(Value, Vec<String>), serde_json::Error> {
    let mut duplicates = Vec::new();
    let mut deserializer = serde_json::Deserializer::from_str(content);
    let value = ValueSeed {
        duplicates: &mut duplicates,
    }
    .deserialize(&mut deserializer)?;
    deserializer.end()?;
    Ok((value, duplicates))
}

/// Required keys absent from `object`, in the order they were asked for
pub fn missing_keys(object: &Map<String, Value>, required: &[&str]) -> Vec<String> {
    required
        .iter()
        .filter(|key| !object.contains_key(**key))
        .map(|key| key.to_string())
        .collect()
}

/// Names of the entries of `dir`, minus `ignored`.
pub fn list_files(dir: &Path, ignored: &[String]) -> Result<BTreeSet<String>> {
    let entries = fs::read_dir(dir)
        .with_context(|| format!("Failed to list directory: {}", dir.display()))?;

    let mut names = BTreeSet::new();
    for entry in entries {
        let entry =
            entry.with_context(|| format!("Failed to read entry in {}", dir.display()))?;
        let name = entry.file_name().to_string_lossy().into_owned();
        if !ignored.iter().any(|i| *i == name) {
            names.insert(name);
        }
    }
    Ok(names)
}

struct ValueSeed<'a> {
    duplicates: &'a mut Vec<String>,
}

impl<'de> DeserializeSeed<'de> for ValueSeed<'_> {
    type Value = Value;

    fn deserialize<D>(self, deserializer: D) -> Result<Value, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(self)
    }
}

impl<'de> Visitor<'de> for ValueSeed<'_> {
    type Value = Value;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("any JSON value")
    }

    fn visit_bool<E>(self, v: bool) -> Result<Value, E> {
        Ok(Value::Bool(v))
    }

    fn visit_i64<E>(self, v: i64) -> Result<Value, E> {
        Ok(Value::Number(v.into()))
    }

    fn visit_u64<E>(self, v: u64) -> Result<Value, E> {
        Ok(Value::Number(v.into()))
    }

    fn visit_f64<E>(self, v: f64) -> Result<Value, E> {
        Ok(Number::from_f64(v).map_or(Value::Null, Value::Number))
    }

    fn visit_str<E>(self, v: &str) -> Result<Value, E> {
        Ok(Value::String(v.to_owned()))
    }

    fn visit_string<E>(self, v: String) -> Result<Value, E> {
        Ok(Value::String(v))
    }

    fn visit_unit<E>(self) -> Result<Value, E> {
        Ok(Value::Null)
    }

    fn visit_none<E>(self) -> Result<Value, E> {
        Ok(Value::Null)
    }

    fn visit_some<D>(self, deserializer: D) -> Result<Value, D::Error>
    where
        D: Deserializer<'de>,
    {
        DeserializeSeed::deserialize(self, deserializer)
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let duplicates = self.duplicates;
        let mut items = Vec::new();
        while let Some(item) = seq.next_element_seed(ValueSeed {
            duplicates: &mut *duplicates,
        })? {
            items.push(item);
        }
        Ok(Value::Array(items))
    }

    fn visit_map<A>(self, mut map: A) -> Result<Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let duplicates = self.duplicates;
        let mut object = Map::new();
        while let Some(key) = map.next_key::<String>()? {
            let value = map.next_value_seed(ValueSeed {
                duplicates: &mut *duplicates,
            })?;
            if object.contains_key(&key) {
                duplicates.push(key);
            } else {
                object.insert(key, value);
            }
        }
        Ok(Value::Object(object))
    }
}
