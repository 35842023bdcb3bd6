// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

mod auth;
mod error;
mod handlers;
mod input;
mod request_response;

#[cfg(test)]
mod tests;

pub use auth::resolve_user;
pub use error::{ApiError, AuthError, translate_core_error, translate_domain_error};
pub use handlers::{
    ApiResult, add_task, create_category, create_group, create_planned, create_todo,
    delete_category, delete_done, delete_group, delete_planned, delete_task, delete_todo,
    edit_category, edit_done, edit_group, edit_planned, edit_task, edit_todo, list_categories,
    list_groups, list_pomodoros, list_tasks, list_todos, mark_done, reset_checklist,
    reset_pomodoros, reset_tracker, tasks_by_months,
};
pub use input::{
    InputError, parse_color, parse_deadline, parse_id, parse_number, parse_timestamp,
    parse_tracked_day, require_number,
};
pub use request_response::{
    AddTaskRequest, CreateCategoryRequest, CreateGroupRequest, CreatePlannedRequest,
    CreateTodoRequest, DeleteRequest, EditCategoryRequest, EditDoneRequest, EditGroupRequest,
    EditPlannedRequest, EditTaskRequest, EditTodoRequest, MarkDoneRequest, ResetResponse,
    SubTodoRequest, TasksByMonthsQuery,
};
