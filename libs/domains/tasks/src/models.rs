use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Page size used when the caller does not supply a positive limit
pub const DEFAULT_LIMIT: i64 = 50;

/// Task status
///
/// Wire names are the snake_case variants and matching is case sensitive,
/// so `"New"` or `"DONE"` are rejected.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, Default,
    ToSchema,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum TaskStatus {
    /// Freshly created, no work started
    #[default]
    New,
    /// Work has begun
    InProgress,
    /// Work is finished
    Done,
}

/// Task entity - represents a single tracked task
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Task {
    /// Unique identifier, assigned once at creation
    pub id: Uuid,
    /// Short human-readable title
    pub title: String,
    /// Free-form details, may be empty
    pub description: String,
    /// Workflow state
    pub status: TaskStatus,
    /// Creation timestamp, immutable
    pub created_at: DateTime<Utc>,
    /// Refreshed on every successful mutation
    pub updated_at: DateTime<Utc>,
}

/// DTO for creating a new task
///
/// Status is not client-settable: every task starts out as `new`.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateTask {
    /// Title, at least 3 characters
    #[validate(length(min = 3))]
    pub title: String,
    /// Details, defaults to empty when omitted
    #[serde(default)]
    pub description: String,
}

/// DTO for partially updating a task
///
/// Absent (or `null`) fields leave the stored value untouched. The status
/// arrives as a raw string so the service can reject unknown values with a
/// stable message instead of a deserializer error.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateTask {
    #[validate(length(min = 3))]
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<String>,
}

/// Filters applied by the repository when listing tasks
#[derive(Debug, Clone, Default)]
pub struct TaskFilter {
    /// Only return tasks in this status
    pub status: Option<TaskStatus>,
    /// Row cap, applied only when positive
    pub limit: i64,
    /// Rows to skip, applied only when positive
    pub offset: i64,
}
