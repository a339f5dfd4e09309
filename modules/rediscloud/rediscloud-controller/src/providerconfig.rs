//! Controller of the provider-level `ProviderConfig` kind.

use provider_kit::{ControllerOptions, ControllerRegistration, Manager};
use tracing::debug;

pub const GROUP: &str = "rediscloud.redis.io";
pub const VERSION: &str = "v1beta1";
pub const KIND: &str = "ProviderConfig";

/// Name of the `ProviderConfig` controller, `providerconfig/<Kind>.<group>`.
#[must_use]
pub fn controller_name() -> String {
    format!("providerconfig/{KIND}.{GROUP}")
}

/// Registers the `ProviderConfig` controller with the manager.
///
/// The controller tracks credentials and usages; it is not backed by a
/// Terraform resource and ignores management policies.
///
/// # Errors
///
/// Returns the manager's error unchanged.
pub fn setup(mgr: &dyn Manager, o: &ControllerOptions) -> anyhow::Result<()> {
    debug!(kind = KIND, group = GROUP, "Setting up provider config controller");
    mgr.add_controller(ControllerRegistration {
        name: controller_name(),
        group: GROUP.to_owned(),
        version: VERSION.to_owned(),
        kind: KIND.to_owned(),
        terraform_resource: None,
        management_policies: false,
        poll_interval: o.poll_interval,
        max_concurrent_reconciles: o.max_concurrent_reconciles,
    })
}
