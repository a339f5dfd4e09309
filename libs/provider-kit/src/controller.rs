//! Controller setup contract.
//!
//! Every managed resource ships a setup routine with the [`SetupFn`] signature.
//! The routine describes its controller as a [`ControllerRegistration`] and
//! hands it to the [`Manager`], which owns watches, caches and leader election.

use std::collections::BTreeSet;
use std::fmt;
use std::time::Duration;

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ControllerError;

/// Controller manager that setup routines register with.
pub trait Manager: Send + Sync {
    /// Adds a controller to the manager.
    ///
    /// # Errors
    ///
    /// Returns an error if the manager rejects the controller.
    fn add_controller(&self, registration: ControllerRegistration) -> anyhow::Result<()>;
}

/// Signature of a per-resource controller setup routine.
pub type SetupFn = fn(&dyn Manager, &ControllerOptions) -> anyhow::Result<()>;

/// Options shared by every controller of a provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ControllerOptions {
    /// How often each managed resource is re-observed.
    #[serde(with = "humantime_serde")]
    pub poll_interval: Duration,

    /// Random jitter added to every poll.
    #[serde(with = "humantime_serde")]
    pub poll_jitter: Duration,

    /// Maximum number of concurrent reconciles per controller.
    pub max_concurrent_reconciles: usize,

    /// Names of enabled feature flags.
    pub features: BTreeSet<String>,
}

impl Default for ControllerOptions {
    fn default() -> Self {
        Self {
            poll_interval: Duration::from_secs(10 * 60),
            poll_jitter: Duration::from_secs(30),
            max_concurrent_reconciles: 1,
            features: BTreeSet::new(),
        }
    }
}

impl ControllerOptions {
    /// Whether the named feature flag is enabled.
    #[must_use]
    pub fn is_enabled(&self, feature: &str) -> bool {
        self.features.contains(feature)
    }

    /// Returns these options with the named feature flag enabled.
    #[must_use]
    pub fn with_feature(mut self, feature: impl Into<String>) -> Self {
        self.features.insert(feature.into());
        self
    }
}

/// A controller as seen by the manager.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ControllerRegistration {
    /// Unique controller name.
    pub name: String,
    /// API group of the reconciled kind.
    pub group: String,
    /// API version of the reconciled kind.
    pub version: String,
    /// Reconciled kind.
    pub kind: String,
    /// Terraform resource backing the kind; `None` for provider-level controllers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub terraform_resource: Option<String>,
    /// Whether management policies are honoured.
    pub management_policies: bool,
    /// Poll interval of the controller.
    #[serde(with = "humantime_serde")]
    pub poll_interval: Duration,
    /// Maximum number of concurrent reconciles.
    pub max_concurrent_reconciles: usize,
}

/// Name of a managed-resource controller: `managed/<group>/<version>, Kind=<kind>`.
#[must_use]
pub fn managed_controller_name(group: &str, version: &str, kind: &str) -> String {
    format!("managed/{group}/{version}, Kind={kind}")
}

/// In-memory [`Manager`] recording registrations in order.
///
/// Rejects a second controller with an already registered name.
#[derive(Default)]
pub struct ControllerRegistry {
    registrations: Mutex<Vec<ControllerRegistration>>,
}

impl fmt::Debug for ControllerRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ControllerRegistry")
            .field("registrations", &self.registrations.lock().len())
            .finish()
    }
}

impl ControllerRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all registrations, in registration order.
    #[must_use]
    pub fn registrations(&self) -> Vec<ControllerRegistration> {
        self.registrations.lock().clone()
    }

    /// Number of registered controllers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.registrations.lock().len()
    }

    /// Whether no controller is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.registrations.lock().is_empty()
    }
}

impl Manager for ControllerRegistry {
    fn add_controller(&self, registration: ControllerRegistration) -> anyhow::Result<()> {
        let mut registrations = self.registrations.lock();
        if registrations.iter().any(|r| r.name == registration.name) {
            return Err(ControllerError::Duplicate {
                name: registration.name,
            }
            .into());
        }

        debug!(controller = %registration.name, "Controller registered");
        registrations.push(registration);
        Ok(())
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    fn registration(name: &str) -> ControllerRegistration {
        ControllerRegistration {
            name: name.to_owned(),
            group: "acl.redis.io".to_owned(),
            version: "v1alpha1".to_owned(),
            kind: "Role".to_owned(),
            terraform_resource: Some("rediscloud_acl_role".to_owned()),
            management_policies: false,
            poll_interval: Duration::from_secs(600),
            max_concurrent_reconciles: 1,
        }
    }

    #[test]
    fn test_managed_controller_name() {
        assert_eq!(
            managed_controller_name("acl.redis.io", "v1alpha1", "Role"),
            "managed/acl.redis.io/v1alpha1, Kind=Role"
        );
    }

    #[test]
    fn test_registry_preserves_order() {
        let registry = ControllerRegistry::new();
        assert!(registry.is_empty());
        registry.add_controller(registration("a")).unwrap();
        registry.add_controller(registration("b")).unwrap();

        let names: Vec<_> = registry
            .registrations()
            .into_iter()
            .map(|r| r.name)
            .collect();
        assert_eq!(names, vec!["a", "b"]);
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_registry_rejects_duplicates() {
        let registry = ControllerRegistry::new();
        registry.add_controller(registration("a")).unwrap();
        let err = registry.add_controller(registration("a")).unwrap_err();

        assert_eq!(
            err.downcast_ref::<ControllerError>(),
            Some(&ControllerError::Duplicate {
                name: "a".to_owned()
            })
        );
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_options_defaults() {
        let o = ControllerOptions::default();
        assert_eq!(o.poll_interval, Duration::from_secs(600));
        assert_eq!(o.max_concurrent_reconciles, 1);
        assert!(!o.is_enabled("EnableBetaManagementPolicies"));
        assert!(
            o.with_feature("EnableBetaManagementPolicies")
                .is_enabled("EnableBetaManagementPolicies")
        );
    }

    #[test]
    fn test_options_deserialize_humantime() {
        let o: ControllerOptions = serde_json::from_value(serde_json::json!({
            "poll_interval": "1m 30s",
            "max_concurrent_reconciles": 4
        }))
        .unwrap();
        assert_eq!(o.poll_interval, Duration::from_secs(90));
        assert_eq!(o.poll_jitter, Duration::from_secs(30));
        assert_eq!(o.max_concurrent_reconciles, 4);
    }

    #[test]
    fn test_options_reject_bad_duration() {
        let res: Result<ControllerOptions, _> =
            serde_json::from_value(serde_json::json!({ "poll_interval": "soon" }));
        assert!(res.is_err());
    }

    #[test]
    fn test_options_serialize_humantime() {
        let json = serde_json::to_value(ControllerOptions::default()).unwrap();
        assert_eq!(json["poll_interval"], "10m");
        assert_eq!(json["poll_jitter"], "30s");
    }

    #[test]
    fn test_registration_serializes_poll_interval() {
        let json = serde_json::to_value(registration("managed/acl.redis.io/v1alpha1, Kind=Role"))
            .unwrap();
        assert_eq!(json["poll_interval"], "10m");
        assert_eq!(json["terraform_resource"], "rediscloud_acl_role");
    }
}
