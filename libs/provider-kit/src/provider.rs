//! The provider configuration object.
//!
//! A [`Provider`] is assembled once at startup:
//!
//! 1. [`Provider::builder`] takes the embedded documents and the provider identity
//! 2. builder options set the root group, include list, features package and
//!    default resource options
//! 3. resource-group configurators mutate the built provider
//! 4. [`Provider::configure_resources`] resolves the resource set
//!
//! After step 4 the object is handed to the code generator / controller runtime.

use std::collections::BTreeMap;
use std::fmt;

use bytes::Bytes;
use regex::Regex;
use tracing::{debug, info};

use crate::error::ProviderError;
use crate::resource::{Resource, ResourceOption};
use crate::schema;

/// Provider configuration: identity, resource selection and per-resource options.
pub struct Provider {
    schema: Bytes,
    metadata: Bytes,
    short_name: String,
    module_path: String,
    root_group: String,
    include_list: Vec<String>,
    features_package: String,
    default_resource_options: Vec<ResourceOption>,
    resource_configurators: BTreeMap<String, Vec<ResourceOption>>,
    resources: BTreeMap<String, Resource>,
}

impl fmt::Debug for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Provider")
            .field("short_name", &self.short_name)
            .field("module_path", &self.module_path)
            .field("root_group", &self.root_group)
            .field("include_list", &self.include_list)
            .field("features_package", &self.features_package)
            .field(
                "default_resource_options",
                &self.default_resource_options.len(),
            )
            .field(
                "resource_configurators",
                &self.resource_configurators.keys().collect::<Vec<_>>(),
            )
            .field("resources", &self.resources.keys().collect::<Vec<_>>())
            .finish_non_exhaustive()
    }
}

impl Provider {
    /// Starts building a provider from its embedded documents and identity.
    pub fn builder(
        schema: impl Into<Bytes>,
        short_name: impl Into<String>,
        module_path: impl Into<String>,
        metadata: impl Into<Bytes>,
    ) -> ProviderBuilder {
        let short_name = short_name.into();
        ProviderBuilder {
            provider: Self {
                schema: schema.into(),
                metadata: metadata.into(),
                root_group: format!("{short_name}.upbound.io"),
                short_name,
                module_path: module_path.into(),
                include_list: Vec::new(),
                features_package: String::new(),
                default_resource_options: Vec::new(),
                resource_configurators: BTreeMap::new(),
                resources: BTreeMap::new(),
            },
        }
    }

    /// Provider short name; also the prefix of every resource name.
    #[must_use]
    pub fn short_name(&self) -> &str {
        &self.short_name
    }

    /// Module path of the provider.
    #[must_use]
    pub fn module_path(&self) -> &str {
        &self.module_path
    }

    /// Root API group; resource groups are `<short_group>.<root_group>`.
    #[must_use]
    pub fn root_group(&self) -> &str {
        &self.root_group
    }

    /// Regular expressions selecting the schema resources to manage.
    #[must_use]
    pub fn include_list(&self) -> &[String] {
        &self.include_list
    }

    /// Path of the package that defines the provider feature flags.
    #[must_use]
    pub fn features_package(&self) -> &str {
        &self.features_package
    }

    /// Options applied, in order, to every resolved resource.
    #[must_use]
    pub fn default_resource_options(&self) -> &[ResourceOption] {
        &self.default_resource_options
    }

    /// Resolved resources, keyed by resource name.
    ///
    /// Empty until [`configure_resources`](Self::configure_resources) has run.
    #[must_use]
    pub fn resources(&self) -> &BTreeMap<String, Resource> {
        &self.resources
    }

    /// Returns a resolved resource by name.
    #[must_use]
    pub fn resource(&self, name: &str) -> Option<&Resource> {
        self.resources.get(name)
    }

    /// Appends a default option applied to every resolved resource.
    pub fn add_default_resource_option(&mut self, option: ResourceOption) {
        self.default_resource_options.push(option);
    }

    /// Registers a configurator for a single resource.
    ///
    /// Configurators run after all default options, in registration order.
    pub fn add_resource_configurator(&mut self, name: impl Into<String>, option: ResourceOption) {
        self.resource_configurators
            .entry(name.into())
            .or_default()
            .push(option);
    }

    /// Resolves the resource set from the embedded documents.
    ///
    /// Every schema resource matching at least one include-list pattern gets a
    /// default [`Resource`], its documentation metadata, every default option
    /// and finally its own configurators.
    ///
    /// # Errors
    ///
    /// - [`ProviderError::Schema`] / [`ProviderError::Metadata`] if a document is malformed
    /// - [`ProviderError::InvalidIncludePattern`] if an include entry is not a valid regex
    /// - [`ProviderError::UnknownResource`] if a configurator targets a resource
    ///   that was not resolved
    pub fn configure_resources(&mut self) -> Result<(), ProviderError> {
        let names = schema::resource_names(&self.schema)?;
        let mut metadata = schema::resource_metadata(&self.metadata)?;
        let filters = self
            .include_list
            .iter()
            .map(|pattern| {
                Regex::new(pattern).map_err(|source| ProviderError::InvalidIncludePattern {
                    pattern: pattern.clone(),
                    source,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let mut resources = BTreeMap::new();
        for name in names {
            if !filters.iter().any(|re| re.is_match(&name)) {
                debug!(resource = %name, "Resource not in include list, skipping");
                continue;
            }

            let mut resource = Resource::new(&name, &self.short_name);
            resource.metadata = metadata.remove(&name);
            for option in &self.default_resource_options {
                option(&mut resource);
            }

            debug!(
                resource = %name,
                group = %resource.group(&self.root_group),
                kind = %resource.kind,
                external_name = %resource.external_name,
                "Resource configured"
            );
            resources.insert(name, resource);
        }

        for (name, configurators) in &self.resource_configurators {
            let resource =
                resources
                    .get_mut(name)
                    .ok_or_else(|| ProviderError::UnknownResource {
                        name: name.clone(),
                    })?;
            for configure in configurators {
                configure(resource);
            }
        }

        info!(
            provider = %self.short_name,
            resources = resources.len(),
            "Provider resources configured"
        );
        self.resources = resources;
        Ok(())
    }
}

/// Builder for [`Provider`].
#[must_use]
pub struct ProviderBuilder {
    provider: Provider,
}

impl ProviderBuilder {
    /// Sets the root API group.
    pub fn root_group(mut self, root_group: impl Into<String>) -> Self {
        self.provider.root_group = root_group.into();
        self
    }

    /// Sets the include list (regular expressions over resource names).
    pub fn include_list(mut self, include_list: Vec<String>) -> Self {
        self.provider.include_list = include_list;
        self
    }

    /// Sets the path of the package defining the provider feature flags.
    pub fn features_package(mut self, path: impl Into<String>) -> Self {
        self.provider.features_package = path.into();
        self
    }

    /// Appends default resource options, preserving their order.
    pub fn default_resource_options(
        mut self,
        options: impl IntoIterator<Item = ResourceOption>,
    ) -> Self {
        self.provider.default_resource_options.extend(options);
        self
    }

    /// Finishes the builder. Resources are not resolved yet.
    pub fn build(self) -> Provider {
        self.provider
    }
}
