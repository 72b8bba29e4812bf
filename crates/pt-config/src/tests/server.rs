use crate::ServerConfig;

use googletest::prelude::*;

#[test]
fn given_default_server_config_then_bind_address_is_loopback() {
    let config = ServerConfig::default();
    assert_that!(config.bind_address(), eq("127.0.0.1:8080"));
}

#[test]
fn given_zero_port_then_validation_fails() {
    let config = ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
    };
    assert_that!(config.validate(), err(anything()));
}

#[test]
fn given_empty_host_then_validation_fails() {
    let config = ServerConfig {
        host: "  ".to_string(),
        port: 8080,
    };
    assert_that!(config.validate(), err(anything()));
}
