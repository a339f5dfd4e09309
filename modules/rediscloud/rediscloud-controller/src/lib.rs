//! Redis Cloud controllers.
//!
//! One module per resource group, each exposing a `setup` routine per managed
//! kind. [`setup`] aggregates them, together with the provider config
//! controller, into a single fail-fast startup call.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

#[macro_use]
pub mod managed;

pub mod acl;
pub mod active;
pub mod cloud;
pub mod essentials;
pub mod features;
pub mod private;
pub mod providerconfig;
pub mod rediscloud;
pub mod setup;
pub mod subscription;
pub mod transit;

pub use features::Feature;
pub use managed::{MANAGED_VERSION, ManagedKind};
pub use setup::{SETUP_FNS, setup, setup_all};
