managed_controllers! {
    gatewayattachment => ("transit", "GatewayAttachment", "rediscloud_transit_gateway_attachment");
}
