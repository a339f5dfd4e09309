//! External-name configuration of every managed Redis Cloud resource.
//!
//! The table below is also the include list of the provider: a Terraform
//! resource that is not listed here is not generated.

use std::collections::HashMap;
use std::sync::LazyLock;

use provider_kit::{ExternalName, Resource, ResourceOption, resource_option};

static EXTERNAL_NAME_CONFIGS: LazyLock<HashMap<&'static str, ExternalName>> =
    LazyLock::new(|| {
        HashMap::from([
            // ACL
            ("rediscloud_acl_role", ExternalName::IdentifierFromProvider),
            ("rediscloud_acl_rule", ExternalName::IdentifierFromProvider),
            ("rediscloud_acl_user", ExternalName::IdentifierFromProvider),
            // Active-Active
            (
                "rediscloud_active_active_subscription",
                ExternalName::IdentifierFromProvider,
            ),
            (
                "rediscloud_active_active_subscription_database",
                ExternalName::IdentifierFromProvider,
            ),
            (
                "rediscloud_active_active_subscription_peering",
                ExternalName::IdentifierFromProvider,
            ),
            (
                "rediscloud_active_active_subscription_regions",
                ExternalName::IdentifierFromProvider,
            ),
            (
                "rediscloud_active_active_transit_gateway_attachment",
                ExternalName::IdentifierFromProvider,
            ),
            (
                "rediscloud_active_active_private_service_connect",
                ExternalName::IdentifierFromProvider,
            ),
            (
                "rediscloud_active_active_private_service_connect_endpoint",
                ExternalName::IdentifierFromProvider,
            ),
            (
                "rediscloud_active_active_private_service_connect_endpoint_accepter",
                ExternalName::IdentifierFromProvider,
            ),
            // Cloud accounts
            ("rediscloud_cloud_account", ExternalName::IdentifierFromProvider),
            // Essentials
            (
                "rediscloud_essentials_database",
                ExternalName::IdentifierFromProvider,
            ),
            (
                "rediscloud_essentials_subscription",
                ExternalName::IdentifierFromProvider,
            ),
            // Private Service Connect
            (
                "rediscloud_private_service_connect",
                ExternalName::IdentifierFromProvider,
            ),
            (
                "rediscloud_private_service_connect_endpoint",
                ExternalName::IdentifierFromProvider,
            ),
            (
                "rediscloud_private_service_connect_endpoint_accepter",
                ExternalName::IdentifierFromProvider,
            ),
            // Pro subscriptions
            ("rediscloud_subscription", ExternalName::IdentifierFromProvider),
            (
                "rediscloud_subscription_database",
                ExternalName::IdentifierFromProvider,
            ),
            (
                "rediscloud_subscription_peering",
                ExternalName::IdentifierFromProvider,
            ),
            // Transit Gateway
            (
                "rediscloud_transit_gateway_attachment",
                ExternalName::IdentifierFromProvider,
            ),
        ])
    });

/// All external-name configurations of this provider, keyed by resource name.
#[must_use]
pub fn external_name_configs() -> &'static HashMap<&'static str, ExternalName> {
    &EXTERNAL_NAME_CONFIGS
}

/// Default resource option applying the configured external name.
///
/// Resources missing from the table are left untouched.
#[must_use]
pub fn external_name_configurations() -> ResourceOption {
    resource_option(|r: &mut Resource| {
        if let Some(e) = EXTERNAL_NAME_CONFIGS.get(r.name.as_str()) {
            r.external_name = e.clone();
        }
    })
}

/// Names of all resources with a configured external name, as include-list
/// patterns.
///
/// Each name gets a trailing `$` so that it matches only itself and not longer
/// names sharing its prefix. Order is unspecified.
#[must_use]
pub fn external_name_configured() -> Vec<String> {
    EXTERNAL_NAME_CONFIGS
        .keys()
        .map(|name| format!("{name}$"))
        .collect()
}
