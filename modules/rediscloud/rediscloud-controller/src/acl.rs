//! ACL controllers.

managed_controllers! {
    role => ("acl", "Role", "rediscloud_acl_role");
    rule => ("acl", "Rule", "rediscloud_acl_rule");
    user => ("acl", "User", "rediscloud_acl_user");
}
