// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::aggregation::{TaskHistory, tasks_by_months};
use crate::error::CoreError;
use crate::integrity::cascade_delete_tasks;
use crate::view::TaskView;
use focusdesk_domain::{
    CalendarMonth, Category, Collection, DomainError, Entity, EntityId, EntityKind, HexColor, Task,
    resolve_reference, validate_minutes, validate_name, validate_name_unique,
};
use serde::{Deserialize, Serialize};
use time::Date;

/// An edit to a category. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryPatch {
    pub name: Option<String>,
    pub color: Option<HexColor>,
    pub is_archived: Option<bool>,
}

/// An edit to a task. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskPatch {
    pub category: Option<EntityId>,
    pub date: Option<Date>,
    pub minutes_spent: Option<u32>,
}

/// The outcome of deleting a category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryDeletion {
    /// The removed category.
    pub category: Category,
    /// The tasks deleted along with it.
    pub removed_tasks: Vec<Task>,
}

/// Time-tracking categories and the per-day tasks recorded against them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackerSection {
    categories: Collection<Category>,
    tasks: Collection<Task>,
}

impl TrackerSection {
    /// Creates an empty section.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            categories: Collection::new(),
            tasks: Collection::new(),
        }
    }

    #[must_use]
    pub const fn categories(&self) -> &Collection<Category> {
        &self.categories
    }

    #[must_use]
    pub const fn tasks(&self) -> &Collection<Task> {
        &self.tasks
    }

    /// Returns every task with its category resolved, in creation order.
    #[must_use]
    pub fn task_views(&self) -> Vec<TaskView> {
        self.tasks
            .iter()
            .map(|task| TaskView::populate(task, &self.categories))
            .collect()
    }

    /// Creates a category.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is blank or already used by a category,
    /// archived or not.
    pub fn create_category(&mut self, name: &str, color: HexColor) -> Result<Category, CoreError> {
        let name: String = validate_name(name)?;
        validate_name_unique(&self.categories, &name, None)?;

        let category: Category = Category::new(name, color);
        self.categories.insert(category.clone())?;
        Ok(category)
    }

    /// Edits a category.
    ///
    /// # Errors
    ///
    /// Returns an error if the category does not exist, or if the new name
    /// is blank or used by another category.
    pub fn edit_category(
        &mut self,
        id: EntityId,
        patch: CategoryPatch,
    ) -> Result<Category, CoreError> {
        resolve_reference(&self.categories, id)?;
        let name: Option<String> = patch.name.as_deref().map(validate_name).transpose()?;
        if let Some(name) = &name {
            validate_name_unique(&self.categories, name, Some(id))?;
        }

        let category: &mut Category = self.categories.require_mut(id)?;
        if let Some(name) = name {
            category.name = name;
        }
        if let Some(color) = patch.color {
            category.color = color;
        }
        if let Some(is_archived) = patch.is_archived {
            category.is_archived = is_archived;
        }
        Ok(category.clone())
    }

    /// Deletes a category together with every task recorded against it.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::NotFound` if the category does not exist.
    pub fn delete_category(&mut self, id: EntityId) -> Result<CategoryDeletion, CoreError> {
        let category: Category = self.categories.remove(id).ok_or(DomainError::NotFound {
            kind: EntityKind::Category,
            id,
        })?;
        let removed_tasks: Vec<Task> = cascade_delete_tasks(&mut self.tasks, id);
        Ok(CategoryDeletion {
            category,
            removed_tasks,
        })
    }

    /// Records `minutes_spent` against a category on a day.
    ///
    /// If a task already exists for the same category and day the minutes
    /// are added to it instead of creating a second task.
    ///
    /// # Errors
    ///
    /// Returns an error if `minutes_spent` is zero, the category does not
    /// exist or the merged total overflows.
    pub fn add_task(
        &mut self,
        category_id: EntityId,
        date: Date,
        minutes_spent: u32,
    ) -> Result<TaskView, CoreError> {
        let minutes_spent: u32 = validate_minutes(minutes_spent)?;
        resolve_reference(&self.categories, category_id)?;

        if let Some(existing) = self
            .tasks
            .iter_mut()
            .find(|task| task.category == category_id && task.date == date)
        {
            existing.minutes_spent = existing.minutes_spent.checked_add(minutes_spent).ok_or(
                DomainError::MinutesOverflow {
                    existing: existing.minutes_spent,
                    added: minutes_spent,
                },
            )?;
            return Ok(TaskView::populate(existing, &self.categories));
        }

        let task: Task = Task::new(category_id, date, minutes_spent);
        let view: TaskView = TaskView::populate(&task, &self.categories);
        self.tasks.insert(task)?;
        Ok(view)
    }

    /// Edits a task.
    ///
    /// # Errors
    ///
    /// Returns an error if the task or the new category does not exist,
    /// `minutes_spent` is zero, or another task already exists for the
    /// resulting category and day.
    pub fn edit_task(&mut self, id: EntityId, patch: TaskPatch) -> Result<TaskView, CoreError> {
        let current: &Task = resolve_reference(&self.tasks, id)?;
        let category_id: EntityId = patch.category.unwrap_or(current.category);
        let date: Date = patch.date.unwrap_or(current.date);
        let minutes_spent: Option<u32> = patch.minutes_spent.map(validate_minutes).transpose()?;
        if let Some(category_id) = patch.category {
            resolve_reference(&self.categories, category_id)?;
        }

        let taken: bool = self
            .tasks
            .iter()
            .any(|task| task.id() != id && task.category == category_id && task.date == date);
        if taken {
            return Err(DomainError::DuplicateTask {
                category: category_id,
                date,
            }
            .into());
        }

        let task: &mut Task = self.tasks.require_mut(id)?;
        task.category = category_id;
        task.date = date;
        if let Some(minutes_spent) = minutes_spent {
            task.minutes_spent = minutes_spent;
        }
        Ok(TaskView::populate(task, &self.categories))
    }

    /// Deletes a task.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::NotFound` if the task does not exist.
    pub fn delete_task(&mut self, id: EntityId) -> Result<TaskView, CoreError> {
        let task: Task = self.tasks.remove(id).ok_or(DomainError::NotFound {
            kind: EntityKind::Task,
            id,
        })?;
        Ok(TaskView::populate(&task, &self.categories))
    }

    /// Pages backward through the task history from `reference`.
    ///
    /// See [`tasks_by_months`].
    ///
    /// # Errors
    ///
    /// Returns an error if `days_amount` is zero.
    pub fn tasks_by_months(
        &self,
        days_amount: u32,
        reference: CalendarMonth,
    ) -> Result<TaskHistory, CoreError> {
        tasks_by_months(self, days_amount, reference)
    }

    /// Removes every category and task.
    pub fn reset(&mut self) {
        self.categories.clear();
        self.tasks.clear();
    }
}
