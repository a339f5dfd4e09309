//! Per-resource configuration.

use std::collections::BTreeMap;
use std::sync::Arc;

use heck::ToUpperCamelCase;
use serde::Serialize;

use crate::external_name::ExternalName;
use crate::schema::ResourceMetadata;

/// Default API version of generated managed resources.
pub const DEFAULT_VERSION: &str = "v1alpha1";

/// Configuration of a single managed resource type.
///
/// Created by [`Provider::configure_resources`](crate::Provider::configure_resources)
/// for every schema resource selected by the include list, then handed to each
/// default [`ResourceOption`] and resource configurator in turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resource {
    /// Terraform resource name, e.g. `rediscloud_acl_role`.
    pub name: String,
    /// API group prefix; joined with the provider root group.
    pub short_group: String,
    /// Kind of the generated custom resource.
    pub kind: String,
    /// API version of the generated custom resource.
    pub version: String,
    /// How the remote identifier is obtained.
    pub external_name: ExternalName,
    /// Documentation metadata, when the provider metadata lists this resource.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<ResourceMetadata>,
    /// Cross-resource references: spec field -> referenced resource name.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub references: BTreeMap<String, String>,
}

impl Resource {
    /// Creates the default configuration for a resource.
    ///
    /// The short group and kind are derived from the name: the provider short
    /// name prefix is stripped, the first remaining word becomes the group and
    /// the rest the kind (`rediscloud_acl_role` -> `acl` / `Role`). A name with
    /// a single remaining word is grouped under the short name itself
    /// (`rediscloud_subscription` -> `rediscloud` / `Subscription`).
    #[must_use]
    pub fn new(name: &str, short_name: &str) -> Self {
        let trimmed = name
            .strip_prefix(short_name)
            .and_then(|rest| rest.strip_prefix('_'))
            .unwrap_or(name);

        let (short_group, kind) = match trimmed.split_once('_') {
            Some((group, rest)) if !rest.is_empty() => {
                (group.to_owned(), rest.to_upper_camel_case())
            }
            _ => (short_name.to_owned(), trimmed.to_upper_camel_case()),
        };

        Self {
            name: name.to_owned(),
            short_group,
            kind,
            version: DEFAULT_VERSION.to_owned(),
            external_name: ExternalName::default(),
            metadata: None,
            references: BTreeMap::new(),
        }
    }

    /// Fully qualified API group under the given root group.
    #[must_use]
    pub fn group(&self, root_group: &str) -> String {
        format!("{}.{root_group}", self.short_group)
    }

    /// Declares that `field` refers to another resource type.
    pub fn add_reference(&mut self, field: impl Into<String>, target: impl Into<String>) {
        self.references.insert(field.into(), target.into());
    }
}

/// Mutator applied to a resource configuration.
///
/// Options are shared between the provider and the framework, so they are
/// reference counted and must be thread-safe.
pub type ResourceOption = Arc<dyn Fn(&mut Resource) + Send + Sync>;

/// Wraps a closure into a [`ResourceOption`].
pub fn resource_option<F>(f: F) -> ResourceOption
where
    F: Fn(&mut Resource) + Send + Sync + 'static,
{
    Arc::new(f)
}
