//! Provider Kit
//!
//! Building blocks shared by managed-resource providers:
//!
//! - [`ExternalName`] - how a resource's remote identifier is obtained
//! - [`Resource`], [`ResourceOption`] - per-resource configuration and its mutators
//! - [`Provider`], [`ProviderBuilder`] - the provider configuration object and
//!   its resource finalization step
//! - [`Manager`], [`ControllerOptions`], [`SetupFn`] - the controller setup contract
//! - [`ControllerRegistry`] - an in-memory [`Manager`] used for dry runs and tests
//!
//! ## Usage
//!
//! ```ignore
//! let mut provider = Provider::builder(schema, "rediscloud", MODULE_PATH, metadata)
//!     .root_group("redis.io")
//!     .include_list(vec!["rediscloud_subscription$".to_owned()])
//!     .default_resource_options([external_name_configurations()])
//!     .build();
//!
//! provider.configure_resources()?;
//! ```
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod controller;
pub mod error;
pub mod external_name;
pub mod provider;
pub mod resource;
pub mod schema;

// Re-export main types at crate root
pub use controller::{
    ControllerOptions, ControllerRegistration, ControllerRegistry, Manager, SetupFn,
    managed_controller_name,
};
pub use error::{ControllerError, ProviderError};
pub use external_name::ExternalName;
pub use provider::{Provider, ProviderBuilder};
pub use resource::{Resource, ResourceOption, resource_option};
pub use schema::{ResourceExample, ResourceMetadata};
