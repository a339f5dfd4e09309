//! Redis Cloud provider configuration.
//!
//! - [`external_name`] - which Terraform resources are managed and how their
//!   external names are obtained
//! - [`provider`] - assembly of the [`Provider`](provider_kit::Provider) from the
//!   embedded schema and metadata
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod external_name;
pub mod provider;

pub use external_name::{
    external_name_configs, external_name_configurations, external_name_configured,
};
pub use provider::{
    FEATURES_PACKAGE, MODULE_PATH, RESOURCE_PREFIX, ROOT_GROUP, build_provider, get_provider,
};
