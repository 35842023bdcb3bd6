// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::change::Change;
use crate::error::CoreError;
use crate::integrity::nullify_group_references;
use crate::view::TodoView;
use focusdesk_domain::{
    Collection, DomainError, EntityId, EntityKind, Group, SubTodo, Todo, resolve_reference,
    validate_name, validate_name_unique, validate_note,
};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// A sub-todo as supplied when creating or replacing a todo's items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSubTodo {
    pub name: String,
    pub done: bool,
}

/// The fields of a todo to create.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTodo {
    pub name: String,
    pub done: bool,
    pub deadline: Option<OffsetDateTime>,
    pub note: Option<String>,
    pub is_important: bool,
    pub group: Option<EntityId>,
    pub today: bool,
    pub sub_todos: Vec<NewSubTodo>,
}

impl NewTodo {
    /// Creates an open, ungrouped todo request with no optional fields.
    #[must_use]
    pub const fn new(name: String) -> Self {
        Self {
            name,
            done: false,
            deadline: None,
            note: None,
            is_important: false,
            group: None,
            today: false,
            sub_todos: Vec::new(),
        }
    }
}

/// An edit to a todo. Absent fields are left unchanged.
///
/// A note can be replaced but not cleared. Supplying `sub_todos` replaces
/// the whole list with freshly identified items.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoPatch {
    pub name: Option<String>,
    pub done: Option<bool>,
    pub deadline: Change<OffsetDateTime>,
    pub note: Option<String>,
    pub is_important: Option<bool>,
    pub group: Change<EntityId>,
    pub today: Option<bool>,
    pub sub_todos: Option<Vec<NewSubTodo>>,
}

/// The outcome of deleting a group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupDeletion {
    /// The removed group.
    pub group: Group,
    /// How many todos lost their reference to it.
    pub detached_todos: usize,
}

/// Todos and the groups they can be organised under.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChecklistSection {
    todos: Collection<Todo>,
    groups: Collection<Group>,
}

impl ChecklistSection {
    /// Creates an empty section.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            todos: Collection::new(),
            groups: Collection::new(),
        }
    }

    #[must_use]
    pub const fn todos(&self) -> &Collection<Todo> {
        &self.todos
    }

    #[must_use]
    pub const fn groups(&self) -> &Collection<Group> {
        &self.groups
    }

    /// Returns every todo with its group resolved, in creation order.
    #[must_use]
    pub fn todo_views(&self) -> Vec<TodoView> {
        self.todos
            .iter()
            .map(|todo| TodoView::populate(todo, &self.groups))
            .collect()
    }

    /// Creates a todo.
    ///
    /// # Errors
    ///
    /// Returns an error if the name, note or a sub-todo name is blank, or if
    /// the referenced group does not exist.
    pub fn create_todo(&mut self, new_todo: NewTodo) -> Result<TodoView, CoreError> {
        let name: String = validate_name(&new_todo.name)?;
        let note: Option<String> = new_todo.note.as_deref().map(validate_note).transpose()?;
        if let Some(group_id) = new_todo.group {
            resolve_reference(&self.groups, group_id)?;
        }
        let sub_todos: Vec<SubTodo> = build_sub_todos(new_todo.sub_todos)?;

        let mut todo: Todo = Todo::new(name);
        todo.done = new_todo.done;
        todo.deadline = new_todo.deadline;
        todo.note = note;
        todo.is_important = new_todo.is_important;
        todo.group = new_todo.group;
        todo.today = new_todo.today;
        todo.sub_todos = sub_todos;

        let view: TodoView = TodoView::populate(&todo, &self.groups);
        self.todos.insert(todo)?;
        Ok(view)
    }

    /// Edits a todo in place.
    ///
    /// # Errors
    ///
    /// Returns an error if the todo or a newly referenced group does not
    /// exist, or if any supplied text field is blank. Nothing is changed on
    /// error.
    pub fn edit_todo(&mut self, id: EntityId, patch: TodoPatch) -> Result<TodoView, CoreError> {
        resolve_reference(&self.todos, id)?;
        let name: Option<String> = patch.name.as_deref().map(validate_name).transpose()?;
        let note: Option<String> = patch.note.as_deref().map(validate_note).transpose()?;
        if let Some(group_id) = patch.group.as_set() {
            resolve_reference(&self.groups, *group_id)?;
        }
        let sub_todos: Option<Vec<SubTodo>> = patch.sub_todos.map(build_sub_todos).transpose()?;

        let todo: &mut Todo = self.todos.require_mut(id)?;
        if let Some(name) = name {
            todo.name = name;
        }
        if let Some(done) = patch.done {
            todo.done = done;
        }
        patch.deadline.apply_to(&mut todo.deadline);
        if note.is_some() {
            todo.note = note;
        }
        if let Some(is_important) = patch.is_important {
            todo.is_important = is_important;
        }
        patch.group.apply_to(&mut todo.group);
        if let Some(today) = patch.today {
            todo.today = today;
        }
        if let Some(sub_todos) = sub_todos {
            todo.sub_todos = sub_todos;
        }

        Ok(TodoView::populate(todo, &self.groups))
    }

    /// Deletes a todo and its sub-todos.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::NotFound` if the todo does not exist.
    pub fn delete_todo(&mut self, id: EntityId) -> Result<TodoView, CoreError> {
        let todo: Todo = self.todos.remove(id).ok_or(DomainError::NotFound {
            kind: EntityKind::Todo,
            id,
        })?;
        Ok(TodoView::populate(&todo, &self.groups))
    }

    /// Creates a group.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is blank or already used by a group.
    pub fn create_group(&mut self, name: &str) -> Result<Group, CoreError> {
        let name: String = validate_name(name)?;
        validate_name_unique(&self.groups, &name, None)?;

        let group: Group = Group::new(name);
        self.groups.insert(group.clone())?;
        Ok(group)
    }

    /// Renames a group. Renaming a group to its current name is allowed.
    ///
    /// # Errors
    ///
    /// Returns an error if the group does not exist, or if the new name is
    /// blank or used by another group.
    pub fn edit_group(&mut self, id: EntityId, name: Option<&str>) -> Result<Group, CoreError> {
        resolve_reference(&self.groups, id)?;
        let name: Option<String> = name.map(validate_name).transpose()?;
        if let Some(name) = &name {
            validate_name_unique(&self.groups, name, Some(id))?;
        }

        let group: &mut Group = self.groups.require_mut(id)?;
        if let Some(name) = name {
            group.name = name;
        }
        Ok(group.clone())
    }

    /// Deletes a group and detaches every todo that referenced it.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::NotFound` if the group does not exist.
    pub fn delete_group(&mut self, id: EntityId) -> Result<GroupDeletion, CoreError> {
        let group: Group = self.groups.remove(id).ok_or(DomainError::NotFound {
            kind: EntityKind::Group,
            id,
        })?;
        let detached_todos: usize = nullify_group_references(&mut self.todos, id);
        Ok(GroupDeletion {
            group,
            detached_todos,
        })
    }

    /// Removes every todo and group.
    pub fn reset(&mut self) {
        self.todos.clear();
        self.groups.clear();
    }
}

fn build_sub_todos(items: Vec<NewSubTodo>) -> Result<Vec<SubTodo>, DomainError> {
    items
        .into_iter()
        .map(|item| validate_name(&item.name).map(|name| SubTodo::new(name, item.done)))
        .collect()
}
