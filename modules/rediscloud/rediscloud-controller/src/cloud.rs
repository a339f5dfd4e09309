managed_controllers! {
    account => ("cloud", "Account", "rediscloud_cloud_account");
}
