use crate::{Priority, WorkItem, WorkItemStatus, WorkItemType};

use googletest::prelude::*;
use uuid::Uuid;

fn new_item(item_type: WorkItemType) -> WorkItem {
    WorkItem::new(
        item_type,
        item_type.format_key("ACME", 1),
        1,
        Uuid::new_v4(),
        "Test item".to_string(),
        None,
        Uuid::new_v4(),
    )
}

#[test]
fn given_new_work_item_then_initial_status_is_backlog() {
    let item = new_item(WorkItemType::Story);
    assert_that!(item.status, eq(WorkItemStatus::Backlog));
    assert_that!(item.sprint_id, none());
    assert_that!(item.deleted_at, none());
}

#[test]
fn given_new_defect_then_priority_defaults_to_high() {
    let defect = new_item(WorkItemType::Defect);
    assert_that!(defect.priority, eq(Priority::High));

    let story = new_item(WorkItemType::Story);
    assert_that!(story.priority, eq(Priority::Medium));
}

#[test]
fn given_new_work_item_then_metrics_start_at_zero() {
    let item = new_item(WorkItemType::Task);
    assert_that!(item.time_spent_minutes, eq(0));
    assert_that!(item.time_estimate_minutes, eq(0));
    assert_that!(item.cycle_time_days, eq(0.0));
}
