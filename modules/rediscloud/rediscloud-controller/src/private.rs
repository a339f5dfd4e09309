//! Private Service Connect controllers of Pro subscriptions.

managed_controllers! {
    serviceconnect => ("private", "ServiceConnect", "rediscloud_private_service_connect");
    serviceconnectendpoint => (
        "private",
        "ServiceConnectEndpoint",
        "rediscloud_private_service_connect_endpoint"
    );
    serviceconnectendpointaccepter => (
        "private",
        "ServiceConnectEndpointAccepter",
        "rediscloud_private_service_connect_endpoint_accepter"
    );
}
