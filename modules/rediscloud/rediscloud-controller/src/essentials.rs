//! Essentials (fixed plan) controllers.

managed_controllers! {
    database => ("essentials", "Database", "rediscloud_essentials_database");
    subscription => ("essentials", "Subscription", "rediscloud_essentials_subscription");
}
