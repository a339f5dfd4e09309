//! Parsing of the embedded provider documents.
//!
//! Two documents are bundled with every provider:
//!
//! - the Terraform provider schema (`terraform providers schema -json` output),
//!   from which the set of resource names is taken;
//! - the provider metadata (YAML scraped from the registry docs), which adds
//!   titles, descriptions and examples per resource.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::error::ProviderError;

#[derive(Debug, Deserialize)]
struct SchemaDocument {
    #[serde(default)]
    provider_schemas: BTreeMap<String, ProviderSchema>,
}

#[derive(Debug, Deserialize)]
struct ProviderSchema {
    #[serde(default)]
    resource_schemas: BTreeMap<String, serde_json::Value>,
}

#[derive(Debug, Default, Deserialize)]
struct MetadataDocument {
    #[serde(default)]
    resources: BTreeMap<String, ResourceMetadata>,
}

/// Documentation metadata of one resource.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResourceMetadata {
    /// Documentation section, e.g. `Pro Subscriptions`.
    pub sub_category: String,
    /// Human-readable title.
    pub title: String,
    /// Short description of the resource.
    pub description: String,
    /// Example `terraform import` statements.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub import_statements: Vec<String>,
    /// Example configurations.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub examples: Vec<ResourceExample>,
}

/// A single example configuration of a resource.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResourceExample {
    /// Example name.
    pub name: String,
    /// Example manifest (JSON-encoded HCL body).
    pub manifest: String,
}

/// Returns the names of all resources declared in a provider schema document.
///
/// Names from every provider in the document are merged, sorted and deduplicated.
///
/// # Errors
///
/// Returns [`ProviderError::Schema`] if the document is not valid schema JSON.
pub fn resource_names(schema: &[u8]) -> Result<Vec<String>, ProviderError> {
    let doc: SchemaDocument =
        serde_json::from_slice(schema).map_err(|source| ProviderError::Schema { source })?;

    let names: BTreeSet<String> = doc
        .provider_schemas
        .into_values()
        .flat_map(|p| p.resource_schemas.into_keys())
        .collect();

    Ok(names.into_iter().collect())
}

/// Parses the provider metadata document into per-resource metadata.
///
/// An empty document yields an empty map.
///
/// # Errors
///
/// Returns [`ProviderError::Metadata`] if the document is not UTF-8 or not valid YAML.
pub fn resource_metadata(
    metadata: &[u8],
) -> Result<BTreeMap<String, ResourceMetadata>, ProviderError> {
    let content = std::str::from_utf8(metadata).map_err(ProviderError::metadata)?;

    if content.trim().is_empty() {
        return Ok(BTreeMap::new());
    }

    let doc: MetadataDocument =
        serde_saphyr::from_str(content).map_err(ProviderError::metadata)?;

    Ok(doc.resources)
}
