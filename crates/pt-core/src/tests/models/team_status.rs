use crate::TeamStatus;

use std::str::FromStr;

use googletest::prelude::*;

#[test]
fn given_lowercase_input_when_parsing_then_status_is_normalized_uppercase() {
    assert_that!(TeamStatus::from_str("active").unwrap().as_str(), eq("ACTIVE"));
    assert_that!(
        TeamStatus::from_str("on_hold").unwrap().as_str(),
        eq("ON_HOLD")
    );
    assert_that!(
        TeamStatus::from_str("Inactive").unwrap().as_str(),
        eq("INACTIVE")
    );
}

#[test]
fn given_unknown_status_when_parsing_then_error_carries_allowed_set() {
    let err = TeamStatus::from_str("archived").unwrap_err();
    let allowed = err.allowed_values().unwrap();
    assert_that!(allowed, container_eq(vec!["ACTIVE", "INACTIVE", "ON_HOLD"]));
}
