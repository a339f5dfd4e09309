#![allow(clippy::unwrap_used, clippy::expect_used)]

//! Controller setup against the resolved provider configuration.

use std::collections::BTreeSet;

use provider_kit::{ControllerOptions, ControllerRegistry};
use rediscloud_config::get_provider;
use rediscloud_controller::{Feature, MANAGED_VERSION, setup};

#[test]
fn every_resolved_resource_has_a_controller() {
    let provider = get_provider().unwrap();
    let registry = ControllerRegistry::new();
    setup(&registry, &ControllerOptions::default()).unwrap();

    let controllers: BTreeSet<_> = registry
        .registrations()
        .into_iter()
        .filter_map(|r| r.terraform_resource.map(|tf| (tf, r.group, r.kind, r.version)))
        .collect();

    let expected: BTreeSet<_> = provider
        .resources()
        .values()
        .map(|r| {
            (
                r.name.clone(),
                r.group(provider.root_group()),
                r.kind.clone(),
                r.version.clone(),
            )
        })
        .collect();

    assert_eq!(controllers, expected);
}

#[test]
fn options_flow_into_every_registration() {
    let registry = ControllerRegistry::new();
    let o = ControllerOptions {
        max_concurrent_reconciles: 3,
        ..ControllerOptions::default()
    }
    .with_feature(Feature::EnableBetaManagementPolicies.as_str());
    setup(&registry, &o).unwrap();

    for r in registry.registrations() {
        assert_eq!(r.max_concurrent_reconciles, 3, "{}", r.name);
        assert_eq!(r.poll_interval, o.poll_interval, "{}", r.name);
        // provider config controller ignores management policies
        assert_eq!(r.management_policies, r.terraform_resource.is_some(), "{}", r.name);
    }
}

#[test]
fn rerunning_setup_against_same_manager_fails_on_first_routine() {
    let registry = ControllerRegistry::new();
    let o = ControllerOptions::default();
    setup(&registry, &o).unwrap();

    let err = setup(&registry, &o).unwrap_err();
    assert!(
        err.to_string()
            .contains(&format!("managed/acl.redis.io/{MANAGED_VERSION}, Kind=Role"))
    );
    assert_eq!(registry.len(), 22);
}

#[test]
fn fresh_manager_accepts_a_second_run() {
    let o = ControllerOptions::default();
    for _ in 0..2 {
        let registry = ControllerRegistry::new();
        setup(&registry, &o).unwrap();
        assert_eq!(registry.len(), 22);
    }
}
