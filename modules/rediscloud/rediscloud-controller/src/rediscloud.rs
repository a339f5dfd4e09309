//! Controllers grouped under the provider short name.

managed_controllers! {
    subscription => ("rediscloud", "Subscription", "rediscloud_subscription");
}
