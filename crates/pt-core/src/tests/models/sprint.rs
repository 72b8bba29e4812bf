use crate::{Sprint, SprintStatus};

use chrono::{Duration, Utc};
use googletest::prelude::*;
use uuid::Uuid;

#[test]
fn given_valid_window_when_creating_sprint_then_status_defaults_to_planning() {
    let start = Utc::now();
    let end = start + Duration::days(14);

    let sprint = Sprint::new(Uuid::new_v4(), "Sprint 1".into(), None, start, end).unwrap();

    assert_that!(sprint.status, eq(SprintStatus::Planning));
    assert_that!(sprint.deleted_at, none());
}

#[test]
fn given_inverted_window_when_creating_sprint_then_validation_fails() {
    let start = Utc::now();
    let end = start - Duration::days(1);

    let result = Sprint::new(Uuid::new_v4(), "Sprint 1".into(), None, start, end);

    assert_that!(result, err(anything()));
}

#[test]
fn given_equal_dates_when_creating_sprint_then_validation_fails() {
    let start = Utc::now();

    let result = Sprint::new(Uuid::new_v4(), "Sprint 1".into(), None, start, start);

    assert_that!(result, err(anything()));
}
