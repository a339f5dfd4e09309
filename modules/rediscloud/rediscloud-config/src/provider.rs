//! Assembly of the Redis Cloud provider configuration.

use bytes::Bytes;
use provider_kit::{Provider, ProviderError};
use tracing::debug;

use crate::external_name::{external_name_configurations, external_name_configured};

/// Provider short name; every Terraform resource name starts with it.
pub const RESOURCE_PREFIX: &str = "rediscloud";

/// Module path of the provider.
pub const MODULE_PATH: &str = "github.com/RedisLabs/provider-rediscloud";

/// Root API group of all managed resources.
pub const ROOT_GROUP: &str = "redis.io";

/// Package defining the provider feature flags.
pub const FEATURES_PACKAGE: &str = "internal/features";

static PROVIDER_SCHEMA: &[u8] = include_bytes!(concat!(env!("CARGO_MANIFEST_DIR"), "/schema.json"));

static PROVIDER_METADATA: &[u8] = include_bytes!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/provider-metadata.yaml"
));

/// Customization hook for a group of resources.
pub type ResourceGroupConfigurator = fn(&mut Provider);

/// Resource-group configurators applied by [`get_provider`], in order.
const RESOURCE_GROUP_CONFIGURATORS: &[ResourceGroupConfigurator] = &[
    // add custom config functions for resource groups
];

/// Returns the fully configured provider built from the embedded documents.
///
/// # Errors
///
/// Returns the error of [`Provider::configure_resources`] unchanged.
pub fn get_provider() -> Result<Provider, ProviderError> {
    build_provider(
        Bytes::from_static(PROVIDER_SCHEMA),
        Bytes::from_static(PROVIDER_METADATA),
        RESOURCE_GROUP_CONFIGURATORS,
    )
}

/// Builds the provider from the given documents and resource-group configurators.
///
/// The configurators run in slice order, after the base configuration and
/// before resources are resolved.
///
/// # Errors
///
/// Returns the error of [`Provider::configure_resources`] unchanged.
pub fn build_provider(
    schema: Bytes,
    metadata: Bytes,
    configurators: &[ResourceGroupConfigurator],
) -> Result<Provider, ProviderError> {
    let mut pc = Provider::builder(schema, RESOURCE_PREFIX, MODULE_PATH, metadata)
        .root_group(ROOT_GROUP)
        .include_list(external_name_configured())
        .features_package(FEATURES_PACKAGE)
        .default_resource_options([external_name_configurations()])
        .build();

    debug!(
        configurators = configurators.len(),
        "Applying resource group configurators"
    );
    for configure in configurators {
        configure(&mut pc);
    }

    pc.configure_resources()?;
    Ok(pc)
}
