//! Controller aggregation.
//!
//! [`setup`] registers every controller of the provider with a [`Manager`]
//! by running the routines of [`SETUP_FNS`] in order. The first failure stops
//! the sequence and is returned as is.

use provider_kit::{ControllerOptions, Manager, SetupFn};
use tracing::{debug, info};

use crate::{
    acl, active, cloud, essentials, private, providerconfig, rediscloud, subscription, transit,
};

/// Setup routines of all controllers, in registration order.
pub static SETUP_FNS: &[SetupFn] = &[
    acl::role::setup,
    acl::rule::setup,
    acl::user::setup,
    active::activeprivateserviceconnect::setup,
    active::activeprivateserviceconnectendpoint::setup,
    active::activeprivateserviceconnectendpointaccepter::setup,
    active::activesubscription::setup,
    active::activesubscriptiondatabase::setup,
    active::activesubscriptionpeering::setup,
    active::activesubscriptionregions::setup,
    active::activetransitgatewayattachment::setup,
    cloud::account::setup,
    essentials::database::setup,
    essentials::subscription::setup,
    private::serviceconnect::setup,
    private::serviceconnectendpoint::setup,
    private::serviceconnectendpointaccepter::setup,
    providerconfig::setup,
    rediscloud::subscription::setup,
    subscription::database::setup,
    subscription::peering::setup,
    transit::gatewayattachment::setup,
];

/// Creates all controllers with the supplied options and adds them to the
/// manager.
///
/// # Errors
///
/// Returns the error of the first failing setup routine, unchanged.
pub fn setup(mgr: &dyn Manager, o: &ControllerOptions) -> anyhow::Result<()> {
    setup_all(SETUP_FNS, mgr, o)?;
    info!(controllers = SETUP_FNS.len(), "All controllers set up");
    Ok(())
}

/// Runs `fns` in order against the manager, stopping at the first error.
///
/// Routines after the failing one are not invoked. Nothing is rolled back.
///
/// # Errors
///
/// Returns the error of the first failing routine, unchanged.
pub fn setup_all<F>(fns: &[F], mgr: &dyn Manager, o: &ControllerOptions) -> anyhow::Result<()>
where
    F: Fn(&dyn Manager, &ControllerOptions) -> anyhow::Result<()>,
{
    for (index, setup) in fns.iter().enumerate() {
        if let Err(e) = setup(mgr, o) {
            debug!(index, error = %e, "Controller setup failed");
            return Err(e);
        }
    }
    Ok(())
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use std::cell::RefCell;

    use provider_kit::{ControllerRegistration, ControllerRegistry};

    #[derive(Debug, thiserror::Error)]
    #[error("setup failed: {0}")]
    struct SetupFailed(&'static str);

    type BoxedSetup<'a> = Box<dyn Fn(&dyn Manager, &ControllerOptions) -> anyhow::Result<()> + 'a>;

    fn recording<'a>(calls: &'a RefCell<Vec<&'static str>>, name: &'static str) -> BoxedSetup<'a> {
        Box::new(move |_: &dyn Manager, _: &ControllerOptions| {
            calls.borrow_mut().push(name);
            Ok(())
        })
    }

    fn failing<'a>(calls: &'a RefCell<Vec<&'static str>>, name: &'static str) -> BoxedSetup<'a> {
        Box::new(move |_: &dyn Manager, _: &ControllerOptions| {
            calls.borrow_mut().push(name);
            Err(SetupFailed(name).into())
        })
    }

    #[test]
    fn test_setup_all_invokes_in_order() {
        let calls = RefCell::new(Vec::new());
        let fns = [
            recording(&calls, "f1"),
            recording(&calls, "f2"),
            recording(&calls, "f3"),
        ];

        setup_all(&fns, &ControllerRegistry::new(), &ControllerOptions::default()).unwrap();
        assert_eq!(*calls.borrow(), vec!["f1", "f2", "f3"]);
    }

    #[test]
    fn test_setup_all_stops_at_first_error() {
        let calls = RefCell::new(Vec::new());
        let fns = [
            recording(&calls, "f1"),
            failing(&calls, "f2"),
            recording(&calls, "f3"),
        ];

        let err = setup_all(&fns, &ControllerRegistry::new(), &ControllerOptions::default())
            .unwrap_err();

        assert_eq!(*calls.borrow(), vec!["f1", "f2"]);
        assert_eq!(err.downcast_ref::<SetupFailed>().map(|e| e.0), Some("f2"));
        assert_eq!(err.chain().count(), 1, "error must not be wrapped");
    }

    #[test]
    fn test_setup_all_empty_list() {
        let fns: [SetupFn; 0] = [];
        let registry = ControllerRegistry::new();
        setup_all(&fns, &registry, &ControllerOptions::default()).unwrap();
        assert!(registry.is_empty());
    }

    #[test]
    fn test_setup_registers_every_controller() {
        let registry = ControllerRegistry::new();
        setup(&registry, &ControllerOptions::default()).unwrap();

        let names: Vec<String> = registry
            .registrations()
            .into_iter()
            .map(|r| r.name)
            .collect();
        assert_eq!(
            names,
            vec![
                "managed/acl.redis.io/v1alpha1, Kind=Role",
                "managed/acl.redis.io/v1alpha1, Kind=Rule",
                "managed/acl.redis.io/v1alpha1, Kind=User",
                "managed/active.redis.io/v1alpha1, Kind=ActivePrivateServiceConnect",
                "managed/active.redis.io/v1alpha1, Kind=ActivePrivateServiceConnectEndpoint",
                "managed/active.redis.io/v1alpha1, Kind=ActivePrivateServiceConnectEndpointAccepter",
                "managed/active.redis.io/v1alpha1, Kind=ActiveSubscription",
                "managed/active.redis.io/v1alpha1, Kind=ActiveSubscriptionDatabase",
                "managed/active.redis.io/v1alpha1, Kind=ActiveSubscriptionPeering",
                "managed/active.redis.io/v1alpha1, Kind=ActiveSubscriptionRegions",
                "managed/active.redis.io/v1alpha1, Kind=ActiveTransitGatewayAttachment",
                "managed/cloud.redis.io/v1alpha1, Kind=Account",
                "managed/essentials.redis.io/v1alpha1, Kind=Database",
                "managed/essentials.redis.io/v1alpha1, Kind=Subscription",
                "managed/private.redis.io/v1alpha1, Kind=ServiceConnect",
                "managed/private.redis.io/v1alpha1, Kind=ServiceConnectEndpoint",
                "managed/private.redis.io/v1alpha1, Kind=ServiceConnectEndpointAccepter",
                "providerconfig/ProviderConfig.rediscloud.redis.io",
                "managed/rediscloud.redis.io/v1alpha1, Kind=Subscription",
                "managed/subscription.redis.io/v1alpha1, Kind=Database",
                "managed/subscription.redis.io/v1alpha1, Kind=Peering",
                "managed/transit.redis.io/v1alpha1, Kind=GatewayAttachment",
            ]
        );
    }

    #[test]
    fn test_setup_stops_at_duplicate_registration() {
        let registry = ControllerRegistry::new();
        registry
            .add_controller(ControllerRegistration {
                name: cloud::account::KIND.controller_name(),
                group: cloud::account::KIND.group.to_owned(),
                version: cloud::account::KIND.version.to_owned(),
                kind: cloud::account::KIND.kind.to_owned(),
                terraform_resource: None,
                management_policies: false,
                poll_interval: ControllerOptions::default().poll_interval,
                max_concurrent_reconciles: 1,
            })
            .unwrap();

        let err = setup(&registry, &ControllerOptions::default()).unwrap_err();
        assert!(err.to_string().contains("Kind=Account"));
        // pre-registered account + the 11 routines before it
        assert_eq!(registry.len(), 12);
    }
}
