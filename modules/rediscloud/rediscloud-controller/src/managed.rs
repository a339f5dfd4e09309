//! Setup of managed-resource controllers.

use provider_kit::{ControllerOptions, ControllerRegistration, Manager, managed_controller_name};
use tracing::debug;

use crate::features::Feature;

/// API version of every managed resource of this provider.
pub const MANAGED_VERSION: &str = "v1alpha1";

/// Static description of a managed kind and the Terraform resource behind it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ManagedKind {
    pub group: &'static str,
    pub version: &'static str,
    pub kind: &'static str,
    pub terraform_resource: &'static str,
}

impl ManagedKind {
    #[must_use]
    pub const fn new(
        group: &'static str,
        kind: &'static str,
        terraform_resource: &'static str,
    ) -> Self {
        Self {
            group,
            version: MANAGED_VERSION,
            kind,
            terraform_resource,
        }
    }

    /// Controller name, `managed/<group>/<version>, Kind=<kind>`.
    #[must_use]
    pub fn controller_name(&self) -> String {
        managed_controller_name(self.group, self.version, self.kind)
    }

    /// Registers the controller of this kind with the manager.
    ///
    /// Management policies are honoured when the beta management-policies
    /// feature flag is enabled.
    ///
    /// # Errors
    ///
    /// Returns the manager's error unchanged.
    pub fn setup(&self, mgr: &dyn Manager, o: &ControllerOptions) -> anyhow::Result<()> {
        let management_policies = o.is_enabled(Feature::EnableBetaManagementPolicies.as_str());

        let registration = ControllerRegistration {
            name: self.controller_name(),
            group: self.group.to_owned(),
            version: self.version.to_owned(),
            kind: self.kind.to_owned(),
            terraform_resource: Some(self.terraform_resource.to_owned()),
            management_policies,
            poll_interval: o.poll_interval,
            max_concurrent_reconciles: o.max_concurrent_reconciles,
        };

        debug!(
            kind = self.kind,
            group = self.group,
            terraform_resource = self.terraform_resource,
            management_policies,
            "Setting up managed resource controller"
        );
        mgr.add_controller(registration)
    }
}

/// Declares one module per managed kind, each with a `KIND` constant and a
/// `setup` routine matching [`provider_kit::SetupFn`].
///
/// The short group is joined with the `redis.io` root group.
macro_rules! managed_controllers {
    ($($module:ident => ($group:literal, $kind:literal, $terraform:literal);)+) => {
        $(
            #[doc = concat!("Controller of `", $kind, "` (`", $terraform, "`).")]
            pub mod $module {
                use provider_kit::{ControllerOptions, Manager};

                use crate::managed::ManagedKind;

                pub const KIND: ManagedKind =
                    ManagedKind::new(concat!($group, ".redis.io"), $kind, $terraform);

                /// Registers the controller with the manager.
                ///
                /// # Errors
                ///
                /// Returns the manager's error unchanged.
                pub fn setup(mgr: &dyn Manager, o: &ControllerOptions) -> anyhow::Result<()> {
                    KIND.setup(mgr, o)
                }
            }
        )+
    };
}
