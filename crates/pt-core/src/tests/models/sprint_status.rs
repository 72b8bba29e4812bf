use crate::SprintStatus;

use std::str::FromStr;

use googletest::prelude::*;

#[test]
fn given_planning_sprint_then_forward_transitions_are_allowed() {
    assert_that!(
        SprintStatus::Planning.can_transition_to(SprintStatus::InProgress),
        eq(true)
    );
    assert_that!(
        SprintStatus::InProgress.can_transition_to(SprintStatus::Completed),
        eq(true)
    );
}

#[test]
fn given_non_terminal_sprint_then_cancel_is_allowed() {
    assert_that!(
        SprintStatus::Planning.can_transition_to(SprintStatus::Cancelled),
        eq(true)
    );
    assert_that!(
        SprintStatus::InProgress.can_transition_to(SprintStatus::Cancelled),
        eq(true)
    );
}

#[test]
fn given_terminal_sprint_then_no_further_transitions() {
    assert_that!(
        SprintStatus::Completed.can_transition_to(SprintStatus::InProgress),
        eq(false)
    );
    assert_that!(
        SprintStatus::Completed.can_transition_to(SprintStatus::Cancelled),
        eq(false)
    );
    assert_that!(
        SprintStatus::Cancelled.can_transition_to(SprintStatus::InProgress),
        eq(false)
    );
}

#[test]
fn given_backward_transition_then_it_is_rejected() {
    let err = SprintStatus::InProgress
        .transition_to(SprintStatus::Planning)
        .unwrap_err();
    assert_that!(err.to_string(), contains_substring("IN_PROGRESS"));
    assert_that!(err.to_string(), contains_substring("PLANNING"));
}

#[test]
fn given_lowercase_input_when_parsing_then_uppercase_value_is_stored() {
    let status = SprintStatus::from_str("in_progress").unwrap();
    assert_that!(status.as_str(), eq("IN_PROGRESS"));
}
