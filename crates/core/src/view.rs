// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Read views with weak references resolved.
//!
//! A reference that no longer resolves is shown as `None`.

use focusdesk_domain::{
    Category, Collection, DonePomodoro, Entity, EntityId, Group, PlannedPomodoro, SubTodo, Task,
    Todo, day_timestamp,
};
use serde::Serialize;
use time::{Date, OffsetDateTime};

/// A todo with its group resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoView {
    pub id: EntityId,
    pub name: String,
    pub done: bool,
    #[serde(with = "time::serde::rfc3339::option")]
    pub deadline: Option<OffsetDateTime>,
    pub note: Option<String>,
    pub is_important: bool,
    pub today: bool,
    pub group: Option<Group>,
    pub sub_todos: Vec<SubTodo>,
}

impl TodoView {
    /// Builds the view of `todo`, resolving its group in `groups`.
    #[must_use]
    pub fn populate(todo: &Todo, groups: &Collection<Group>) -> Self {
        Self {
            id: todo.id(),
            name: todo.name.clone(),
            done: todo.done,
            deadline: todo.deadline,
            note: todo.note.clone(),
            is_important: todo.is_important,
            today: todo.today,
            group: todo.group.and_then(|id| groups.find(id)).cloned(),
            sub_todos: todo.sub_todos.clone(),
        }
    }
}

/// A task with its category resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskView {
    pub id: EntityId,
    pub category: Option<Category>,
    #[serde(with = "day_timestamp")]
    pub date: Date,
    pub minutes_spent: u32,
}

impl TaskView {
    /// Builds the view of `task`, resolving its category in `categories`.
    #[must_use]
    pub fn populate(task: &Task, categories: &Collection<Category>) -> Self {
        Self {
            id: task.id(),
            category: categories.find(task.category).cloned(),
            date: task.date,
            minutes_spent: task.minutes_spent,
        }
    }
}

/// Both pomodoro lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PomodorosView {
    pub plan: Vec<PlannedPomodoro>,
    pub done: Vec<DonePomodoro>,
}
