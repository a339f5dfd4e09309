//! Validation of example manifests against the loaded CRDs.

use std::fs;
use std::path::Path;

use serde_json::{Map, Value};

use crate::crds::CrdIndex;
use crate::error::ExampleError;

/// Validates every document of an example file.
///
/// Documents without `kind` / `apiVersion`, and core resources whose
/// `apiVersion` has no group, are skipped. A kind that is served by its
/// group under another version is accepted without schema checks.
///
/// Documents are parsed one at a time. A YAML error stops the file, and the
/// problems found in the documents before it are kept.
#[must_use]
pub fn validate_example(path: &Path, crds: &CrdIndex) -> Vec<ExampleError> {
    let content = match fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) => {
            return vec![ExampleError::in_file(
                path.to_path_buf(),
                format!("Unexpected error: {e}"),
            )];
        }
    };

    let mut errors = Vec::new();
    for (idx, source) in split_documents(&content).into_iter().enumerate() {
        let doc: Value = match serde_saphyr::from_str(&source) {
            Ok(doc) => doc,
            Err(e) => {
                errors.push(ExampleError::in_file(
                    path.to_path_buf(),
                    format!("YAML parsing error: {e}"),
                ));
                break;
            }
        };
        let Some(doc) = doc.as_object() else {
            continue;
        };
        for message in validate_document(doc, crds) {
            errors.push(ExampleError::in_document(path.to_path_buf(), idx, message));
        }
    }
    errors
}

/// Splits a YAML stream at its `---` markers.
///
/// Documents holding only blank lines and comments are dropped. Text after a
/// marker on the same line belongs to the document that follows.
fn split_documents(content: &str) -> Vec<String> {
    let mut docs = Vec::new();
    let mut current = String::new();

    for line in content.lines() {
        if let Some(rest) = document_marker(line) {
            docs.push(std::mem::take(&mut current));
            if !rest.is_empty() {
                current.push_str(rest);
                current.push('\n');
            }
        } else if line.trim_end() == "..." {
            docs.push(std::mem::take(&mut current));
        } else {
            current.push_str(line);
            current.push('\n');
        }
    }
    docs.push(current);

    docs.retain(|doc| {
        doc.lines().any(|l| {
            let l = l.trim();
            !l.is_empty() && !l.starts_with('#')
        })
    });
    docs
}

fn document_marker(line: &str) -> Option<&str> {
    let rest = line.strip_prefix("---")?;
    if rest.is_empty() || rest.starts_with([' ', '\t']) {
        Some(rest.trim_start())
    } else {
        None
    }
}

fn validate_document(doc: &Map<String, Value>, crds: &CrdIndex) -> Vec<String> {
    let (Some(kind), Some(api_version)) = (
        doc.get("kind").and_then(Value::as_str),
        doc.get("apiVersion").and_then(Value::as_str),
    ) else {
        return Vec::new();
    };

    let Some((group, version)) = api_version.rsplit_once('/') else {
        return Vec::new();
    };

    let Some(crd) = crds.get(kind, version, group) else {
        if crds.has_kind_in_group(kind, group) {
            return Vec::new();
        }
        return vec![format!("No CRD found for {kind} in {api_version}")];
    };

    let schema = &crd.schema;
    if schema.get("properties").is_none() {
        return Vec::new();
    }

    let mut errors = Vec::new();
    let spec_schema = schema.pointer("/properties/spec");
    if spec_schema.is_some_and(is_truthy) && !doc.contains_key("spec") {
        errors.push("Missing required 'spec' field".to_owned());
    }

    let required = schema
        .get("required")
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default();
    for field in required.iter().filter_map(Value::as_str) {
        if !doc.contains_key(field) {
            errors.push(format!("Missing required field '{field}'"));
        }
    }
    errors
}

/// Empty objects, arrays, strings and `null` count as absent.
fn is_truthy(v: &Value) -> bool {
    match v {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
        Value::Number(_) => true,
    }
}
