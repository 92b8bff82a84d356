//! Document loading, mapping validation, and record shaping.
//!
//! Two load paths exist:
//! - [`ConfigStore::load`] returns each document as a raw YAML mapping and
//!   performs **no** fallback when a user file is missing.
//! - [`ConfigStore::load_records`] shapes each document into typed records
//!   and recovers a missing user file exactly once by copying the library
//!   default ([`ConfigStore::replace`]).
//!
//! The asymmetry is inherited behavior, kept as-is.

use std::fs;
use std::io;
use std::path::Path;

use indexmap::IndexMap;
use serde::de::DeserializeOwned;
use serde_yaml::{Mapping, Value};
use tracing::debug;

use super::error::{StoreError, StoreResult};
use super::ConfigStore;

impl ConfigStore {
    /// Load the named files from the user configuration directory as raw
    /// YAML mappings.
    ///
    /// Results are keyed by the requested names, in request order. The
    /// whole call fails on the first error; no partial result is returned.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if:
    /// - A user file is missing ([`StoreError::FileRead`] — this path
    ///   performs no fallback copy)
    /// - A file has invalid YAML syntax
    /// - A document's top level is not a mapping
    ///   ([`StoreError::BadConfigData`])
    pub fn load(&self, names: &[&str]) -> StoreResult<IndexMap<String, Mapping>> {
        let mut loaded = IndexMap::new();
        for name in names {
            let path = self.user_file_path(name);
            let doc = read_document(&path)?;
            let mapping = require_mapping(doc, &path)?;
            loaded.insert((*name).to_string(), mapping);
        }
        Ok(loaded)
    }

    /// Load the named files and shape each document into records of type
    /// `T`, one per top-level key, in document order.
    ///
    /// A missing user file is recovered exactly once: the library default
    /// is copied into the user directory via [`ConfigStore::replace`] and
    /// the read is retried. A second miss propagates unrecovered.
    ///
    /// Strict field-set matching (rejecting extra fields in the document)
    /// is opted into by declaring `#[serde(deny_unknown_fields)]` on `T`;
    /// missing fields always fail.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if:
    /// - The fallback copy fails (library source absent, or the user
    ///   directory cannot be created)
    /// - A file has invalid YAML syntax
    /// - A document's top level is not a mapping, or a top-level key is
    ///   not a string ([`StoreError::BadConfigData`])
    /// - A top-level value does not deserialize into `T`
    ///   ([`StoreError::RecordBuild`])
    pub fn load_records<T: DeserializeOwned>(
        &self,
        names: &[&str],
    ) -> StoreResult<IndexMap<String, IndexMap<String, T>>> {
        let mut loaded = IndexMap::new();
        for name in names {
            let records = self.load_shaped(name)?;
            loaded.insert((*name).to_string(), records);
        }
        Ok(loaded)
    }

    /// Copy the library default for `name` into the user configuration
    /// directory, creating that directory (and parents) first if absent.
    ///
    /// This is the sole recovery mechanism for a missing per-file user
    /// configuration.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::DirectoryCreate`] if the user directory
    /// cannot be created, or [`StoreError::FileCopy`] if the copy fails —
    /// including when the library source file itself is absent.
    pub fn replace(&self, name: &str) -> StoreResult<()> {
        fs::create_dir_all(self.user_config_dir()).map_err(|source| {
            StoreError::DirectoryCreate {
                path: self.user_config_dir().to_path_buf(),
                source,
            }
        })?;

        let from = self.lib_file_path(name);
        let to = self.user_file_path(name);
        fs::copy(&from, &to).map_err(|source| StoreError::FileCopy { from, to, source })?;
        Ok(())
    }

    /// Load one named file as shaped records, recovering a missing user
    /// file once via the fallback copy.
    fn load_shaped<T: DeserializeOwned>(&self, name: &str) -> StoreResult<IndexMap<String, T>> {
        let path = self.user_file_path(name);

        let doc = match read_document(&path) {
            Ok(doc) => doc,
            Err(StoreError::FileRead { ref source, .. })
                if source.kind() == io::ErrorKind::NotFound =>
            {
                // No user file; seed it from the library copy and try again.
                debug!(
                    name,
                    path = %path.display(),
                    "user config file missing, copying library default"
                );
                self.replace(name)?;
                read_document(&path)?
            }
            Err(e) => return Err(e),
        };

        let mapping = require_mapping(doc, &path)?;
        shape_records(mapping, &path)
    }
}

/// Read and parse one YAML document from disk.
fn read_document(path: &Path) -> StoreResult<Value> {
    let content = fs::read_to_string(path).map_err(|source| StoreError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;

    serde_yaml::from_str(&content).map_err(|source| StoreError::YamlParse {
        path: path.to_path_buf(),
        source,
    })
}

/// Reject any document whose top level is not a mapping.
fn require_mapping(doc: Value, path: &Path) -> StoreResult<Mapping> {
    match doc {
        Value::Mapping(mapping) => Ok(mapping),
        other => Err(StoreError::BadConfigData {
            path: path.to_path_buf(),
            reason: format!(
                "expected a mapping at the top level, found {}",
                value_kind(&other)
            ),
        }),
    }
}

/// Build one record per top-level key from a parsed mapping, preserving
/// document order.
fn shape_records<T: DeserializeOwned>(
    mapping: Mapping,
    path: &Path,
) -> StoreResult<IndexMap<String, T>> {
    let mut records = IndexMap::new();
    for (key, value) in mapping {
        let key = match key {
            Value::String(key) => key,
            other => {
                return Err(StoreError::BadConfigData {
                    path: path.to_path_buf(),
                    reason: format!(
                        "expected a string top-level key, found {}",
                        value_kind(&other)
                    ),
                })
            }
        };

        let record = serde_yaml::from_value(value).map_err(|source| StoreError::RecordBuild {
            path: path.to_path_buf(),
            key: key.clone(),
            source,
        })?;

        records.insert(key, record);
    }
    Ok(records)
}

/// Human-readable kind of a YAML value, for error messages.
fn value_kind(value: &Value) -> &'static str {
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
