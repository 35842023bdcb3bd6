// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API handler functions for state-changing and read-only operations.
//!
//! Handlers are pure: they take the caller's current aggregate, parse the
//! request, run exactly one core operation on a copy of the aggregate and
//! hand back the response together with the new aggregate. Persisting the
//! new aggregate is left to the caller. A failed handler returns no
//! aggregate at all, so nothing can be saved by mistake.

use focusdesk::{
    CategoryDeletion, CategoryPatch, Change, DEFAULT_DAYS_AMOUNT, DonePatch, GroupDeletion,
    NewSubTodo, NewTodo, PlannedPatch, PomodorosView, TaskHistory, TaskPatch, TaskView, TodoPatch,
    TodoView, UserRoot,
};
use focusdesk_domain::{
    CalendarMonth, Category, DonePomodoro, EntityId, Group, HexColor, PlannedPomodoro,
};
use time::{Date, OffsetDateTime};
use tracing::{debug, info};

use crate::error::{ApiError, translate_core_error, translate_domain_error};
use crate::input::{
    parse_color, parse_deadline, parse_id, parse_number, parse_timestamp,
    parse_tracked_day, require_number,
};
use crate::request_response::{
    AddTaskRequest, CreateCategoryRequest, CreateGroupRequest, CreatePlannedRequest,
    CreateTodoRequest, DeleteRequest, EditCategoryRequest, EditDoneRequest, EditGroupRequest,
    EditPlannedRequest, EditTaskRequest, EditTodoRequest, MarkDoneRequest, ResetResponse,
    SubTodoRequest, TasksByMonthsQuery,
};

/// The result of a state-changing API operation.
///
/// Carries the response for the caller and the aggregate that must be
/// persisted for the operation to take effect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResult<T> {
    /// The API response.
    pub response: T,
    /// The user's aggregate after the operation.
    pub new_root: UserRoot,
}

/// Runs one mutation against a copy of the aggregate.
fn mutate<T, F>(root: &UserRoot, operation: F) -> Result<ApiResult<T>, ApiError>
where
    F: FnOnce(&mut UserRoot) -> Result<T, focusdesk::CoreError>,
{
    let mut new_root: UserRoot = root.clone();
    let response: T = operation(&mut new_root).map_err(translate_core_error)?;
    Ok(ApiResult { response, new_root })
}

fn to_new_sub_todos(sub_todos: Vec<SubTodoRequest>) -> Vec<NewSubTodo> {
    sub_todos
        .into_iter()
        .map(|sub_todo| NewSubTodo {
            name: sub_todo.name,
            done: sub_todo.done,
        })
        .collect()
}

fn reset_response(section: &str) -> ResetResponse {
    ResetResponse {
        message: format!("{section} has been reset"),
    }
}

// ---------------------------------------------------------------------------
// Checklist
// ---------------------------------------------------------------------------

/// Lists every todo with its group resolved, in insertion order.
#[must_use]
pub fn list_todos(root: &UserRoot) -> Vec<TodoView> {
    root.todos()
}

/// Lists every group in insertion order.
#[must_use]
pub fn list_groups(root: &UserRoot) -> Vec<Group> {
    root.groups()
}

/// Creates a todo.
///
/// This function:
/// - Parses the optional deadline and group id
/// - Creates the todo with the group reference resolved
/// - Returns the populated todo and the new aggregate
///
/// # Errors
///
/// Returns an error if:
/// - The name or note is blank
/// - The deadline is not an end-of-day UTC timestamp
/// - The group id is malformed or names no group
pub fn create_todo(
    root: &UserRoot,
    request: CreateTodoRequest,
) -> Result<ApiResult<TodoView>, ApiError> {
    let deadline: Option<OffsetDateTime> = request
        .deadline
        .as_deref()
        .map(|value| parse_deadline("deadline", value))
        .transpose()?;
    let group: Option<EntityId> = request
        .group_id
        .as_deref()
        .map(|value| parse_id("groupId", value))
        .transpose()?;

    let new_todo: NewTodo = NewTodo {
        name: request.name,
        done: request.done.unwrap_or(false),
        deadline,
        note: request.note,
        is_important: request.is_important.unwrap_or(false),
        group,
        today: request.today.unwrap_or(false),
        sub_todos: to_new_sub_todos(request.sub_todos.unwrap_or_default()),
    };

    let result: ApiResult<TodoView> = mutate(root, |new_root| new_root.create_todo(new_todo))?;
    debug!(todo_id = %result.response.id, "Created todo");
    Ok(result)
}

/// Edits a todo.
///
/// Absent fields are kept. An explicit `null` deadline or group clears it.
///
/// # Errors
///
/// Returns an error if the todo or the new group does not exist, or any
/// supplied field is invalid.
pub fn edit_todo(
    root: &UserRoot,
    request: EditTodoRequest,
) -> Result<ApiResult<TodoView>, ApiError> {
    let id: EntityId = parse_id("toEditId", &request.to_edit_id)?;
    let deadline: Change<OffsetDateTime> = request
        .deadline
        .try_map(|value| parse_deadline("deadline", &value))?;
    let group: Change<EntityId> = request
        .group_id
        .try_map(|value| parse_id("groupId", &value))?;

    let patch: TodoPatch = TodoPatch {
        name: request.name,
        done: request.done,
        deadline,
        note: request.note,
        is_important: request.is_important,
        group,
        today: request.today,
        sub_todos: request.sub_todos.map(to_new_sub_todos),
    };

    mutate(root, |new_root| new_root.edit_todo(id, patch))
}

/// Deletes a todo together with its sub-todos.
///
/// # Errors
///
/// Returns an error if the id is malformed or names no todo.
pub fn delete_todo(
    root: &UserRoot,
    request: &DeleteRequest,
) -> Result<ApiResult<TodoView>, ApiError> {
    let id: EntityId = parse_id("toDeleteId", &request.to_delete_id)?;
    mutate(root, |new_root| new_root.delete_todo(id))
}

/// Creates a group.
///
/// # Errors
///
/// Returns an error if the name is blank or already used by another group.
pub fn create_group(
    root: &UserRoot,
    request: &CreateGroupRequest,
) -> Result<ApiResult<Group>, ApiError> {
    mutate(root, |new_root| new_root.create_group(&request.name))
}

/// Renames a group.
///
/// # Errors
///
/// Returns an error if the group does not exist or the name is blank or
/// taken.
pub fn edit_group(
    root: &UserRoot,
    request: &EditGroupRequest,
) -> Result<ApiResult<Group>, ApiError> {
    let id: EntityId = parse_id("toEditId", &request.to_edit_id)?;
    mutate(root, |new_root| {
        new_root.edit_group(id, request.name.as_deref())
    })
}

/// Deletes a group.
///
/// Todos filed under the group are kept and become ungrouped.
///
/// # Errors
///
/// Returns an error if the id is malformed or names no group.
pub fn delete_group(
    root: &UserRoot,
    request: &DeleteRequest,
) -> Result<ApiResult<Group>, ApiError> {
    let id: EntityId = parse_id("toDeleteId", &request.to_delete_id)?;
    let ApiResult { response, new_root } = mutate(root, |new_root| new_root.delete_group(id))?;
    let GroupDeletion {
        group,
        detached_todos,
    } = response;

    debug!(group_id = %id, detached_todos, "Deleted group");
    Ok(ApiResult {
        response: group,
        new_root,
    })
}

/// Clears every todo and group.
#[must_use]
pub fn reset_checklist(root: &UserRoot) -> ApiResult<ResetResponse> {
    let mut new_root: UserRoot = root.clone();
    new_root.reset_checklist();
    info!("Checklist reset");
    ApiResult {
        response: reset_response("Checklist"),
        new_root,
    }
}

// ---------------------------------------------------------------------------
// Pomodoros
// ---------------------------------------------------------------------------

/// Lists planned and done pomodoros.
#[must_use]
pub fn list_pomodoros(root: &UserRoot) -> PomodorosView {
    root.pomodoro_lists()
}

/// Plans a number of pomodoros.
///
/// # Errors
///
/// Returns an error if the name is blank or the amount is zero.
pub fn create_planned(
    root: &UserRoot,
    request: &CreatePlannedRequest,
) -> Result<ApiResult<PlannedPomodoro>, ApiError> {
    mutate(root, |new_root| {
        new_root.create_planned(&request.name, request.pomodoros_amount)
    })
}

/// Edits a plan.
///
/// # Errors
///
/// Returns an error if the plan does not exist or a field is invalid.
pub fn edit_planned(
    root: &UserRoot,
    request: EditPlannedRequest,
) -> Result<ApiResult<PlannedPomodoro>, ApiError> {
    let id: EntityId = parse_id("toEditId", &request.to_edit_id)?;
    let patch: PlannedPatch = PlannedPatch {
        name: request.name,
        pomodoros_amount: request.pomodoros_amount,
    };
    mutate(root, |new_root| new_root.edit_planned(id, patch))
}

/// Discards one pomodoro from a plan.
///
/// The response is the remaining plan, or `None` once the last pomodoro
/// has been discarded and the plan removed.
///
/// # Errors
///
/// Returns an error if the id is malformed or names no plan.
pub fn delete_planned(
    root: &UserRoot,
    request: &DeleteRequest,
) -> Result<ApiResult<Option<PlannedPomodoro>>, ApiError> {
    let id: EntityId = parse_id("toDeleteId", &request.to_delete_id)?;
    let result: ApiResult<Option<PlannedPomodoro>> =
        mutate(root, |new_root| new_root.delete_planned(id))?;
    if result.response.is_none() {
        debug!(planned_id = %id, "Plan exhausted and removed");
    }
    Ok(result)
}

/// Logs one pomodoro taken from a plan.
///
/// This function:
/// - Parses the start and end timestamps
/// - Consumes one pomodoro from the plan, removing it when exhausted
/// - Appends a done entry named after the plan
///
/// # Errors
///
/// Returns an error if:
/// - The plan id is malformed or names no plan
/// - Minutes spent is zero
/// - A timestamp is malformed or the end precedes the start
pub fn mark_done(
    root: &UserRoot,
    request: &MarkDoneRequest,
) -> Result<ApiResult<DonePomodoro>, ApiError> {
    let planned_id: EntityId = parse_id("plannedId", &request.planned_id)?;
    let start_time: OffsetDateTime = parse_timestamp("startTime", &request.start_time)?;
    let end_time: OffsetDateTime = parse_timestamp("endTime", &request.end_time)?;

    mutate(root, |new_root| {
        new_root.mark_done(planned_id, request.minutes_spent, start_time, end_time)
    })
}

/// Edits a logged pomodoro.
///
/// # Errors
///
/// Returns an error if the entry does not exist, a field is invalid or the
/// resulting interval is inverted.
pub fn edit_done(
    root: &UserRoot,
    request: EditDoneRequest,
) -> Result<ApiResult<DonePomodoro>, ApiError> {
    let id: EntityId = parse_id("toEditId", &request.to_edit_id)?;
    let start_time: Option<OffsetDateTime> = request
        .start_time
        .as_deref()
        .map(|value| parse_timestamp("startTime", value))
        .transpose()?;
    let end_time: Option<OffsetDateTime> = request
        .end_time
        .as_deref()
        .map(|value| parse_timestamp("endTime", value))
        .transpose()?;

    let patch: DonePatch = DonePatch {
        name: request.name,
        minutes_spent: request.minutes_spent,
        start_time,
        end_time,
    };
    mutate(root, |new_root| new_root.edit_done(id, patch))
}

/// Deletes a logged pomodoro.
///
/// # Errors
///
/// Returns an error if the id is malformed or names no entry.
pub fn delete_done(
    root: &UserRoot,
    request: &DeleteRequest,
) -> Result<ApiResult<DonePomodoro>, ApiError> {
    let id: EntityId = parse_id("toDeleteId", &request.to_delete_id)?;
    mutate(root, |new_root| new_root.delete_done(id))
}

/// Clears every plan and log entry.
#[must_use]
pub fn reset_pomodoros(root: &UserRoot) -> ApiResult<ResetResponse> {
    let mut new_root: UserRoot = root.clone();
    new_root.reset_pomodoros();
    info!("Pomodoros reset");
    ApiResult {
        response: reset_response("Pomodoros"),
        new_root,
    }
}

// ---------------------------------------------------------------------------
// Tracker
// ---------------------------------------------------------------------------

/// Lists every task with its category resolved, in insertion order.
#[must_use]
pub fn list_tasks(root: &UserRoot) -> Vec<TaskView> {
    root.tasks()
}

/// Lists every category, archived ones included.
#[must_use]
pub fn list_categories(root: &UserRoot) -> Vec<Category> {
    root.categories()
}

/// Returns tracked tasks bucketed by month, walking back from a reference
/// month.
///
/// `year` and `month` select the reference month and must be given
/// together. When both are absent the month containing `today` is used.
/// `daysAmount` defaults to [`DEFAULT_DAYS_AMOUNT`].
///
/// # Errors
///
/// Returns an error if:
/// - A parameter is not a number
/// - Only one of `year` and `month` is given
/// - The month is outside 0..=11 or the day count is zero
pub fn tasks_by_months(
    root: &UserRoot,
    query: &TasksByMonthsQuery,
    today: Date,
) -> Result<TaskHistory, ApiError> {
    let days_amount: u32 =
        parse_number("daysAmount", query.days_amount.as_deref())?.unwrap_or(DEFAULT_DAYS_AMOUNT);

    let reference: CalendarMonth = match (query.year.as_deref(), query.month.as_deref()) {
        (None, None) => CalendarMonth::of(today),
        (year, month) => {
            let year: i32 = require_number("year", year)?;
            let month: u8 = require_number("month", month)?;
            CalendarMonth::from_zero_based(year, month).map_err(translate_domain_error)?
        }
    };

    root.tasks_by_months(days_amount, reference)
        .map_err(translate_core_error)
}

/// Tracks minutes against a category on one day.
///
/// If a task for the same category and day exists, the minutes are added
/// to it instead of creating a second task.
///
/// # Errors
///
/// Returns an error if:
/// - The category id is malformed or names no category
/// - The date is not a UTC midnight timestamp
/// - Minutes spent is zero or the merged total overflows
pub fn add_task(
    root: &UserRoot,
    request: &AddTaskRequest,
) -> Result<ApiResult<TaskView>, ApiError> {
    let category: EntityId = parse_id("categoryId", &request.category_id)?;
    let date: Date = parse_tracked_day("date", &request.date)?;

    mutate(root, |new_root| {
        new_root.add_task(category, date, request.minutes_spent)
    })
}

/// Edits a task.
///
/// # Errors
///
/// Returns an error if the task or new category does not exist, a field is
/// invalid, or another task already covers the resulting category and day.
pub fn edit_task(
    root: &UserRoot,
    request: &EditTaskRequest,
) -> Result<ApiResult<TaskView>, ApiError> {
    let id: EntityId = parse_id("toEditId", &request.to_edit_id)?;
    let category: Option<EntityId> = request
        .category_id
        .as_deref()
        .map(|value| parse_id("categoryId", value))
        .transpose()?;
    let date: Option<Date> = request
        .date
        .as_deref()
        .map(|value| parse_tracked_day("date", value))
        .transpose()?;

    let patch: TaskPatch = TaskPatch {
        category,
        date,
        minutes_spent: request.minutes_spent,
    };
    mutate(root, |new_root| new_root.edit_task(id, patch))
}

/// Deletes a task.
///
/// # Errors
///
/// Returns an error if the id is malformed or names no task.
pub fn delete_task(
    root: &UserRoot,
    request: &DeleteRequest,
) -> Result<ApiResult<TaskView>, ApiError> {
    let id: EntityId = parse_id("toDeleteId", &request.to_delete_id)?;
    mutate(root, |new_root| new_root.delete_task(id))
}

/// Creates a category.
///
/// # Errors
///
/// Returns an error if the name is blank or taken, or the color is
/// malformed.
pub fn create_category(
    root: &UserRoot,
    request: &CreateCategoryRequest,
) -> Result<ApiResult<Category>, ApiError> {
    let color: HexColor = parse_color("color", &request.color)?;
    mutate(root, |new_root| {
        new_root.create_category(&request.name, color)
    })
}

/// Edits a category.
///
/// # Errors
///
/// Returns an error if the category does not exist, the name is blank or
/// taken, or the color is malformed.
pub fn edit_category(
    root: &UserRoot,
    request: EditCategoryRequest,
) -> Result<ApiResult<Category>, ApiError> {
    let id: EntityId = parse_id("toEditId", &request.to_edit_id)?;
    let color: Option<HexColor> = request
        .color
        .as_deref()
        .map(|value| parse_color("color", value))
        .transpose()?;

    let patch: CategoryPatch = CategoryPatch {
        name: request.name,
        color,
        is_archived: request.is_archived,
    };
    mutate(root, |new_root| new_root.edit_category(id, patch))
}

/// Deletes a category and every task tracked against it.
///
/// # Errors
///
/// Returns an error if the id is malformed or names no category.
pub fn delete_category(
    root: &UserRoot,
    request: &DeleteRequest,
) -> Result<ApiResult<Category>, ApiError> {
    let id: EntityId = parse_id("toDeleteId", &request.to_delete_id)?;
    let ApiResult { response, new_root } =
        mutate(root, |new_root| new_root.delete_category(id))?;
    let CategoryDeletion {
        category,
        removed_tasks,
    } = response;

    debug!(
        category_id = %id,
        removed_tasks = removed_tasks.len(),
        "Deleted category"
    );
    Ok(ApiResult {
        response: category,
        new_root,
    })
}

/// Clears every category and task.
#[must_use]
pub fn reset_tracker(root: &UserRoot) -> ApiResult<ResetResponse> {
    let mut new_root: UserRoot = root.clone();
    new_root.reset_tracker();
    info!("Tracker reset");
    ApiResult {
        response: reset_response("Tracker"),
        new_root,
    }
}
