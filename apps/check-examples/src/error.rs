//! Problems reported by the example checker.

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

/// A problem found in an example manifest file.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ExampleError {
    /// Example file the problem was found in
    pub file: PathBuf,
    /// Zero-based index of the YAML document; `None` for file-level problems
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document: Option<usize>,
    /// Human-readable description
    pub message: String,
}

impl ExampleError {
    #[must_use]
    pub fn in_document(file: PathBuf, document: usize, message: impl Into<String>) -> Self {
        Self {
            file,
            document: Some(document),
            message: message.into(),
        }
    }

    #[must_use]
    pub fn in_file(file: PathBuf, message: impl Into<String>) -> Self {
        Self {
            file,
            document: None,
            message: message.into(),
        }
    }
}

impl fmt::Display for ExampleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.document {
            Some(idx) => write!(f, "Document {idx}: {}", self.message),
            None => f.write_str(&self.message),
        }
    }
}

/// A CRD file that could not be loaded. It is reported and skipped.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CrdLoadError {
    pub file: PathBuf,
    pub message: String,
}

impl fmt::Display for CrdLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Error parsing CRD file {}: {}",
            self.file.display(),
            self.message
        )
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn test_document_error_display() {
        let err = ExampleError::in_document(
            PathBuf::from("examples/acl/role.yaml"),
            1,
            "Missing required 'spec' field",
        );
        assert_eq!(err.to_string(), "Document 1: Missing required 'spec' field");
    }

    #[test]
    fn test_file_error_display_and_json() {
        let err = ExampleError::in_file(PathBuf::from("bad.yaml"), "YAML parsing error: boom");
        assert_eq!(err.to_string(), "YAML parsing error: boom");

        let json = serde_json::to_value(&err).unwrap();
        assert!(json.get("document").is_none());
        assert_eq!(json["file"], "bad.yaml");
    }
}
