//! Pro subscription controllers.

managed_controllers! {
    database => ("subscription", "Database", "rediscloud_subscription_database");
    peering => ("subscription", "Peering", "rediscloud_subscription_peering");
}
