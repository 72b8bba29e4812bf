use crate::models::priority::Priority;
use crate::models::work_item_status::WorkItemStatus;
use crate::models::work_item_type::WorkItemType;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The polymorphic work item: one schema with a variant tag.
///
/// `key` and `key_number` are assigned by the key generator at creation and
/// never change afterwards. `sprint_id = None` means the item sits in the
/// backlog. The `time_*`/`cycle_time_days` fields are update-only metrics;
/// nothing branches on them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkItem {
    pub id: Uuid,
    pub key: String,
    pub key_number: i64,
    pub item_type: WorkItemType,

    pub project_id: Uuid,
    pub sprint_id: Option<Uuid>,

    pub title: String,
    pub description: Option<String>,

    pub status: WorkItemStatus,
    pub priority: Priority,

    pub assignee_id: Option<Uuid>,
    pub reporter_id: Uuid,

    // Metrics
    pub time_spent_minutes: i64,
    pub time_estimate_minutes: i64,
    pub cycle_time_days: f64,

    // Audit
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl WorkItem {
    pub fn new(
        item_type: WorkItemType,
        key: String,
        key_number: i64,
        project_id: Uuid,
        title: String,
        description: Option<String>,
        reporter_id: Uuid,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            key,
            key_number,
            item_type,
            project_id,
            sprint_id: None,
            title,
            description,
            status: WorkItemStatus::Backlog,
            priority: item_type.default_priority(),
            assignee_id: None,
            reporter_id,
            time_spent_minutes: 0,
            time_estimate_minutes: 0,
            cycle_time_days: 0.0,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        }
    }

    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }
}
