//! Loading of CRD documents.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;
use walkdir::WalkDir;

use crate::error::CrdLoadError;

/// Schema of one served CRD version.
#[derive(Debug, Clone)]
pub struct CrdVersion {
    /// CRD file the version was loaded from
    pub file: PathBuf,
    /// The version's `openAPIV3Schema`; an empty object when absent
    pub schema: Value,
}

/// Served CRD versions keyed by kind, version and API group.
#[derive(Debug, Default)]
pub struct CrdIndex {
    versions: BTreeMap<(String, String, String), CrdVersion>,
}

impl CrdIndex {
    pub fn insert(&mut self, kind: &str, version: &str, group: &str, crd: CrdVersion) {
        self.versions
            .insert((kind.to_owned(), version.to_owned(), group.to_owned()), crd);
    }

    #[must_use]
    pub fn get(&self, kind: &str, version: &str, group: &str) -> Option<&CrdVersion> {
        self.versions
            .get(&(kind.to_owned(), version.to_owned(), group.to_owned()))
    }

    /// Whether any served version of `kind` exists in `group`.
    #[must_use]
    pub fn has_kind_in_group(&self, kind: &str, group: &str) -> bool {
        self.versions.keys().any(|(k, _, g)| k == kind && g == group)
    }

    /// Entries keyed in `<Kind>.<version>.<group>` form.
    pub fn entries(&self) -> impl Iterator<Item = (String, &CrdVersion)> + '_ {
        self.versions
            .iter()
            .map(|((kind, version, group), crd)| (format!("{kind}.{version}.{group}"), crd))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.versions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.versions.is_empty()
    }
}

/// Loads every served version of every CRD in the `*.yaml` files directly
/// inside `dir`.
///
/// Files that cannot be read or parsed are returned as errors and skipped.
/// Documents of other kinds are ignored.
#[must_use]
pub fn load_crds(dir: &Path) -> (CrdIndex, Vec<CrdLoadError>) {
    let mut index = CrdIndex::default();
    let mut errors = Vec::new();

    let mut files: Vec<PathBuf> = WalkDir::new(dir)
        .max_depth(1)
        .into_iter()
        .filter_map(Result::ok)
        .map(walkdir::DirEntry::into_path)
        .filter(|p| p.is_file() && p.extension().is_some_and(|e| e == "yaml"))
        .collect();
    files.sort();

    for file in files {
        let content = match fs::read_to_string(&file) {
            Ok(c) => c,
            Err(e) => {
                errors.push(CrdLoadError {
                    file,
                    message: e.to_string(),
                });
                continue;
            }
        };

        let docs: Vec<Value> = match serde_saphyr::from_multiple(&content) {
            Ok(docs) => docs,
            Err(e) => {
                errors.push(CrdLoadError {
                    file,
                    message: e.to_string(),
                });
                continue;
            }
        };

        for doc in &docs {
            if let Err(message) = index_crd(&mut index, &file, doc) {
                errors.push(CrdLoadError {
                    file: file.clone(),
                    message,
                });
            }
        }
    }

    (index, errors)
}

fn index_crd(index: &mut CrdIndex, file: &Path, doc: &Value) -> Result<(), String> {
    if doc.get("kind").and_then(Value::as_str) != Some("CustomResourceDefinition") {
        return Ok(());
    }

    let spec = doc.get("spec").ok_or("CRD has no spec")?;
    let group = spec
        .get("group")
        .and_then(Value::as_str)
        .ok_or("CRD has no spec.group")?;
    let kind = spec
        .pointer("/names/kind")
        .and_then(Value::as_str)
        .ok_or("CRD has no spec.names.kind")?;
    let versions = spec
        .get("versions")
        .and_then(Value::as_array)
        .ok_or("CRD has no spec.versions")?;

    for version in versions {
        if !version.get("served").and_then(Value::as_bool).unwrap_or(false) {
            continue;
        }
        let Some(name) = version.get("name").and_then(Value::as_str) else {
            continue;
        };
        let schema = version
            .pointer("/schema/openAPIV3Schema")
            .cloned()
            .unwrap_or_else(|| Value::Object(serde_json::Map::new()));

        index.insert(
            kind,
            name,
            group,
            CrdVersion {
                file: file.to_path_buf(),
                schema,
            },
        );
    }
    Ok(())
}
