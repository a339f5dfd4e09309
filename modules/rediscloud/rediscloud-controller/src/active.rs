//! Active-Active subscription controllers.
//!
//! Kinds keep the repeated `Active` word of their Terraform names, so
//! `rediscloud_active_active_subscription` becomes `ActiveSubscription` in
//! the `active` group.

managed_controllers! {
    activeprivateserviceconnect => (
        "active",
        "ActivePrivateServiceConnect",
        "rediscloud_active_active_private_service_connect"
    );
    activeprivateserviceconnectendpoint => (
        "active",
        "ActivePrivateServiceConnectEndpoint",
        "rediscloud_active_active_private_service_connect_endpoint"
    );
    activeprivateserviceconnectendpointaccepter => (
        "active",
        "ActivePrivateServiceConnectEndpointAccepter",
        "rediscloud_active_active_private_service_connect_endpoint_accepter"
    );
    activesubscription => (
        "active",
        "ActiveSubscription",
        "rediscloud_active_active_subscription"
    );
    activesubscriptiondatabase => (
        "active",
        "ActiveSubscriptionDatabase",
        "rediscloud_active_active_subscription_database"
    );
    activesubscriptionpeering => (
        "active",
        "ActiveSubscriptionPeering",
        "rediscloud_active_active_subscription_peering"
    );
    activesubscriptionregions => (
        "active",
        "ActiveSubscriptionRegions",
        "rediscloud_active_active_subscription_regions"
    );
    activetransitgatewayattachment => (
        "active",
        "ActiveTransitGatewayAttachment",
        "rediscloud_active_active_transit_gateway_attachment"
    );
}
