use crate::{Priority, WorkItemType};

use std::str::FromStr;

use googletest::prelude::*;

#[test]
fn given_story_type_when_formatting_key_then_no_prefix_is_used() {
    assert_that!(WorkItemType::Story.format_key("ACME", 1), eq("ACME-1"));
    assert_that!(WorkItemType::Story.format_key("ACME", 42), eq("ACME-42"));
}

#[test]
fn given_typed_variants_when_formatting_key_then_prefix_is_inserted() {
    assert_that!(WorkItemType::Task.format_key("ACME", 3), eq("ACME-TASK-3"));
    assert_that!(WorkItemType::Defect.format_key("ACME", 7), eq("ACME-BUG-7"));
    assert_that!(WorkItemType::Feature.format_key("WEB", 1), eq("WEB-FEAT-1"));
    assert_that!(WorkItemType::Epic.format_key("WEB", 2), eq("WEB-EPIC-2"));
}

#[test]
fn given_defect_type_then_default_priority_is_high() {
    assert_that!(WorkItemType::Defect.default_priority(), eq(Priority::High));
    assert_that!(WorkItemType::Story.default_priority(), eq(Priority::Medium));
    assert_that!(WorkItemType::Task.default_priority(), eq(Priority::Medium));
}

#[test]
fn given_unknown_type_string_when_parsing_then_error_lists_allowed_set() {
    let err = WorkItemType::from_str("subtask").unwrap_err();
    let allowed = err.allowed_values().unwrap();
    assert_that!(allowed, container_eq(WorkItemType::ALL_VALUES.to_vec()));
}

#[test]
fn given_mixed_case_type_string_when_parsing_then_it_is_accepted() {
    assert_that!(
        WorkItemType::from_str("Defect").unwrap(),
        eq(WorkItemType::Defect)
    );
}
