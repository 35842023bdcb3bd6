// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::aggregation::TaskHistory;
use crate::checklist::{ChecklistSection, GroupDeletion, NewTodo, TodoPatch};
use crate::error::CoreError;
use crate::pomodoro::{DonePatch, PlannedPatch, PomodoroSection};
use crate::tracker::{CategoryDeletion, CategoryPatch, TaskPatch, TrackerSection};
use crate::view::{PomodorosView, TaskView, TodoView};
use focusdesk_domain::{
    CalendarMonth, Category, DonePomodoro, EntityId, Group, HexColor, PlannedPomodoro,
};
use serde::{Deserialize, Serialize};
use time::{Date, OffsetDateTime};

/// Everything one user owns, persisted and loaded as a single document.
///
/// Each operation validates everything it needs before writing, so a
/// failed operation leaves the root unchanged. Callers load a root, run
/// exactly one operation and save the result.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserRoot {
    checklist: ChecklistSection,
    pomodoros: PomodoroSection,
    tracker: TrackerSection,
}

impl UserRoot {
    /// Creates the root of a user with no data.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            checklist: ChecklistSection::new(),
            pomodoros: PomodoroSection::new(),
            tracker: TrackerSection::new(),
        }
    }

    #[must_use]
    pub const fn checklist(&self) -> &ChecklistSection {
        &self.checklist
    }

    #[must_use]
    pub const fn pomodoros(&self) -> &PomodoroSection {
        &self.pomodoros
    }

    #[must_use]
    pub const fn tracker(&self) -> &TrackerSection {
        &self.tracker
    }

    // Checklist

    #[must_use]
    pub fn todos(&self) -> Vec<TodoView> {
        self.checklist.todo_views()
    }

    #[must_use]
    pub fn groups(&self) -> Vec<Group> {
        self.checklist.groups().as_slice().to_vec()
    }

    /// See [`ChecklistSection::create_todo`].
    ///
    /// # Errors
    ///
    /// Fails on blank text fields or an unknown group.
    pub fn create_todo(&mut self, new_todo: NewTodo) -> Result<TodoView, CoreError> {
        self.checklist.create_todo(new_todo)
    }

    /// See [`ChecklistSection::edit_todo`].
    ///
    /// # Errors
    ///
    /// Fails on an unknown todo or group, or blank text fields.
    pub fn edit_todo(&mut self, id: EntityId, patch: TodoPatch) -> Result<TodoView, CoreError> {
        self.checklist.edit_todo(id, patch)
    }

    /// See [`ChecklistSection::delete_todo`].
    ///
    /// # Errors
    ///
    /// Fails on an unknown todo.
    pub fn delete_todo(&mut self, id: EntityId) -> Result<TodoView, CoreError> {
        self.checklist.delete_todo(id)
    }

    /// See [`ChecklistSection::create_group`].
    ///
    /// # Errors
    ///
    /// Fails on a blank or already used name.
    pub fn create_group(&mut self, name: &str) -> Result<Group, CoreError> {
        self.checklist.create_group(name)
    }

    /// See [`ChecklistSection::edit_group`].
    ///
    /// # Errors
    ///
    /// Fails on an unknown group, or a blank or already used name.
    pub fn edit_group(&mut self, id: EntityId, name: Option<&str>) -> Result<Group, CoreError> {
        self.checklist.edit_group(id, name)
    }

    /// See [`ChecklistSection::delete_group`].
    ///
    /// # Errors
    ///
    /// Fails on an unknown group.
    pub fn delete_group(&mut self, id: EntityId) -> Result<GroupDeletion, CoreError> {
        self.checklist.delete_group(id)
    }

    pub fn reset_checklist(&mut self) {
        self.checklist.reset();
    }

    // Pomodoros

    #[must_use]
    pub fn pomodoro_lists(&self) -> PomodorosView {
        self.pomodoros.view()
    }

    /// See [`PomodoroSection::create_planned`].
    ///
    /// # Errors
    ///
    /// Fails on a blank name or a zero amount.
    pub fn create_planned(
        &mut self,
        name: &str,
        pomodoros_amount: u32,
    ) -> Result<PlannedPomodoro, CoreError> {
        self.pomodoros.create_planned(name, pomodoros_amount)
    }

    /// See [`PomodoroSection::edit_planned`].
    ///
    /// # Errors
    ///
    /// Fails on an unknown plan, a blank name or a zero amount.
    pub fn edit_planned(
        &mut self,
        id: EntityId,
        patch: PlannedPatch,
    ) -> Result<PlannedPomodoro, CoreError> {
        self.pomodoros.edit_planned(id, patch)
    }

    /// See [`PomodoroSection::delete_planned`].
    ///
    /// # Errors
    ///
    /// Fails on an unknown plan.
    pub fn delete_planned(&mut self, id: EntityId) -> Result<Option<PlannedPomodoro>, CoreError> {
        self.pomodoros.delete_planned(id)
    }

    /// See [`PomodoroSection::mark_done`].
    ///
    /// # Errors
    ///
    /// Fails on an unknown plan, zero minutes or an inverted time range.
    pub fn mark_done(
        &mut self,
        planned_id: EntityId,
        minutes_spent: u32,
        start_time: OffsetDateTime,
        end_time: OffsetDateTime,
    ) -> Result<DonePomodoro, CoreError> {
        self.pomodoros
            .mark_done(planned_id, minutes_spent, start_time, end_time)
    }

    /// See [`PomodoroSection::edit_done`].
    ///
    /// # Errors
    ///
    /// Fails on an unknown entry or invalid fields.
    pub fn edit_done(&mut self, id: EntityId, patch: DonePatch) -> Result<DonePomodoro, CoreError> {
        self.pomodoros.edit_done(id, patch)
    }

    /// See [`PomodoroSection::delete_done`].
    ///
    /// # Errors
    ///
    /// Fails on an unknown entry.
    pub fn delete_done(&mut self, id: EntityId) -> Result<DonePomodoro, CoreError> {
        self.pomodoros.delete_done(id)
    }

    pub fn reset_pomodoros(&mut self) {
        self.pomodoros.reset();
    }

    // Tracker

    #[must_use]
    pub fn tasks(&self) -> Vec<TaskView> {
        self.tracker.task_views()
    }

    #[must_use]
    pub fn categories(&self) -> Vec<Category> {
        self.tracker.categories().as_slice().to_vec()
    }

    /// See [`TrackerSection::add_task`].
    ///
    /// # Errors
    ///
    /// Fails on an unknown category, zero minutes or an overflowing merge.
    pub fn add_task(
        &mut self,
        category_id: EntityId,
        date: Date,
        minutes_spent: u32,
    ) -> Result<TaskView, CoreError> {
        self.tracker.add_task(category_id, date, minutes_spent)
    }

    /// See [`TrackerSection::edit_task`].
    ///
    /// # Errors
    ///
    /// Fails on an unknown task or category, zero minutes, or a clash with
    /// another task on the same category and day.
    pub fn edit_task(&mut self, id: EntityId, patch: TaskPatch) -> Result<TaskView, CoreError> {
        self.tracker.edit_task(id, patch)
    }

    /// See [`TrackerSection::delete_task`].
    ///
    /// # Errors
    ///
    /// Fails on an unknown task.
    pub fn delete_task(&mut self, id: EntityId) -> Result<TaskView, CoreError> {
        self.tracker.delete_task(id)
    }

    /// See [`TrackerSection::create_category`].
    ///
    /// # Errors
    ///
    /// Fails on a blank or already used name.
    pub fn create_category(&mut self, name: &str, color: HexColor) -> Result<Category, CoreError> {
        self.tracker.create_category(name, color)
    }

    /// See [`TrackerSection::edit_category`].
    ///
    /// # Errors
    ///
    /// Fails on an unknown category, or a blank or already used name.
    pub fn edit_category(
        &mut self,
        id: EntityId,
        patch: CategoryPatch,
    ) -> Result<Category, CoreError> {
        self.tracker.edit_category(id, patch)
    }

    /// See [`TrackerSection::delete_category`].
    ///
    /// # Errors
    ///
    /// Fails on an unknown category.
    pub fn delete_category(&mut self, id: EntityId) -> Result<CategoryDeletion, CoreError> {
        self.tracker.delete_category(id)
    }

    /// See [`crate::tasks_by_months`].
    ///
    /// # Errors
    ///
    /// Fails if `days_amount` is zero.
    pub fn tasks_by_months(
        &self,
        days_amount: u32,
        reference: CalendarMonth,
    ) -> Result<TaskHistory, CoreError> {
        self.tracker.tasks_by_months(days_amount, reference)
    }

    pub fn reset_tracker(&mut self) {
        self.tracker.reset();
    }
}
