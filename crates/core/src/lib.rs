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
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod aggregation;
mod change;
mod checklist;
mod error;
mod integrity;
mod pomodoro;
mod state;
mod tracker;
mod view;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use aggregation::{DEFAULT_DAYS_AMOUNT, MonthBucket, TaskHistory, tasks_by_months};
pub use change::Change;
pub use checklist::{ChecklistSection, GroupDeletion, NewSubTodo, NewTodo, TodoPatch};
pub use error::CoreError;
pub use integrity::{cascade_delete_tasks, nullify_group_references};
pub use pomodoro::{DonePatch, PlannedPatch, PomodoroSection};
pub use state::UserRoot;
pub use tracker::{CategoryDeletion, CategoryPatch, TaskPatch, TrackerSection};
pub use view::{PomodorosView, TaskView, TodoView};
