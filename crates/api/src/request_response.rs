// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.
//!
//! Requests mirror the JSON bodies clients send, with ids, timestamps and
//! colors kept as raw strings until the handlers parse them.

use focusdesk::Change;

/// A sub-todo as supplied in a create or edit request.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SubTodoRequest {
    /// The sub-todo name.
    pub name: String,
    /// Whether the sub-todo is complete. Defaults to false.
    #[serde(default)]
    pub done: bool,
}

/// API request to create a todo.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTodoRequest {
    /// The todo name.
    pub name: String,
    #[serde(default)]
    pub done: Option<bool>,
    /// End-of-day UTC timestamp.
    #[serde(default)]
    pub deadline: Option<String>,
    #[serde(default)]
    pub note: Option<String>,
    #[serde(default)]
    pub is_important: Option<bool>,
    /// The group to file the todo under.
    #[serde(default)]
    pub group_id: Option<String>,
    #[serde(default)]
    pub today: Option<bool>,
    #[serde(default)]
    pub sub_todos: Option<Vec<SubTodoRequest>>,
}

/// API request to edit a todo.
///
/// `deadline` and `groupId` distinguish an absent key (keep) from an
/// explicit `null` (clear).
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditTodoRequest {
    /// The todo to edit.
    pub to_edit_id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub done: Option<bool>,
    #[serde(default)]
    pub deadline: Change<String>,
    #[serde(default)]
    pub note: Option<String>,
    #[serde(default)]
    pub is_important: Option<bool>,
    #[serde(default)]
    pub group_id: Change<String>,
    #[serde(default)]
    pub today: Option<bool>,
    /// Replaces every sub-todo when present.
    #[serde(default)]
    pub sub_todos: Option<Vec<SubTodoRequest>>,
}

/// API request to delete an entity by id.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteRequest {
    /// The entity to delete.
    pub to_delete_id: String,
}

/// API request to create a group.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
pub struct CreateGroupRequest {
    /// The group name.
    pub name: String,
}

/// API request to rename a group.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditGroupRequest {
    /// The group to edit.
    pub to_edit_id: String,
    #[serde(default)]
    pub name: Option<String>,
}

/// API request to plan pomodoros.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePlannedRequest {
    /// The plan name.
    pub name: String,
    /// How many pomodoros are planned.
    pub pomodoros_amount: u32,
}

/// API request to edit a plan.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditPlannedRequest {
    /// The plan to edit.
    pub to_edit_id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub pomodoros_amount: Option<u32>,
}

/// API request to log one pomodoro taken from a plan.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkDoneRequest {
    /// The plan the pomodoro is taken from.
    pub planned_id: String,
    pub minutes_spent: u32,
    /// RFC 3339 timestamp.
    pub start_time: String,
    /// RFC 3339 timestamp.
    pub end_time: String,
}

/// API request to edit a logged pomodoro.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditDoneRequest {
    /// The entry to edit.
    pub to_edit_id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub minutes_spent: Option<u32>,
    #[serde(default)]
    pub start_time: Option<String>,
    #[serde(default)]
    pub end_time: Option<String>,
}

/// API request to track minutes against a category on one day.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddTaskRequest {
    pub category_id: String,
    /// UTC midnight timestamp of the tracked day.
    pub date: String,
    pub minutes_spent: u32,
}

/// API request to edit a task.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditTaskRequest {
    /// The task to edit.
    pub to_edit_id: String,
    #[serde(default)]
    pub category_id: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub minutes_spent: Option<u32>,
}

/// API request to create a category.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
pub struct CreateCategoryRequest {
    /// The category name.
    pub name: String,
    /// `#RGB` or `#RRGGBB`.
    pub color: String,
}

/// API request to edit a category.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditCategoryRequest {
    /// The category to edit.
    pub to_edit_id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub is_archived: Option<bool>,
}

/// Query parameters of the month-bucketed task history.
///
/// Values stay textual so that malformed numbers are reported through the
/// same error path as every other field.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TasksByMonthsQuery {
    /// Distinct days of history to collect. Defaults when absent.
    #[serde(default)]
    pub days_amount: Option<String>,
    /// Reference year.
    #[serde(default)]
    pub year: Option<String>,
    /// Zero-based reference month.
    #[serde(default)]
    pub month: Option<String>,
}

/// API response for a section reset.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ResetResponse {
    /// A success message.
    pub message: String,
}
