// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::calendar::day_timestamp;
use crate::collection::{Entity, Named};
use crate::error::DomainError;
use crate::id::{EntityId, EntityKind};
use serde::{Deserialize, Serialize};
use time::{Date, OffsetDateTime};

/// A named label todos can be organised under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    id: EntityId,
    /// Unique within the checklist section.
    pub name: String,
}

impl Group {
    /// Creates a group with a fresh id.
    #[must_use]
    pub fn new(name: String) -> Self {
        Self {
            id: EntityId::generate(),
            name,
        }
    }
}

impl Entity for Group {
    const KIND: EntityKind = EntityKind::Group;

    fn id(&self) -> EntityId {
        self.id
    }
}

impl Named for Group {
    fn name(&self) -> &str {
        &self.name
    }
}

/// A checklist item nested inside a todo.
///
/// Sub-todos have no lifecycle of their own; they are replaced wholesale
/// when their todo is edited.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubTodo {
    id: EntityId,
    /// Display name.
    pub name: String,
    /// Whether the item is complete.
    pub done: bool,
}

impl SubTodo {
    /// Creates a sub-todo with a fresh id.
    #[must_use]
    pub fn new(name: String, done: bool) -> Self {
        Self {
            id: EntityId::generate(),
            name,
            done,
        }
    }

    /// Returns the sub-todo's id.
    #[must_use]
    pub const fn id(&self) -> EntityId {
        self.id
    }
}

/// A checklist entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    id: EntityId,
    /// Display name.
    pub name: String,
    /// Whether the todo is complete.
    pub done: bool,
    /// Optional deadline.
    #[serde(with = "time::serde::rfc3339::option")]
    pub deadline: Option<OffsetDateTime>,
    /// Optional free-form note.
    pub note: Option<String>,
    /// Whether the todo is flagged important.
    pub is_important: bool,
    /// Whether the todo is planned for today.
    pub today: bool,
    /// Weak reference to a [`Group`] in the same section.
    pub group: Option<EntityId>,
    /// Owned sub-items.
    pub sub_todos: Vec<SubTodo>,
}

impl Todo {
    /// Creates an open, ungrouped todo with a fresh id.
    #[must_use]
    pub fn new(name: String) -> Self {
        Self {
            id: EntityId::generate(),
            name,
            done: false,
            deadline: None,
            note: None,
            is_important: false,
            today: false,
            group: None,
            sub_todos: Vec::new(),
        }
    }
}

impl Entity for Todo {
    const KIND: EntityKind = EntityKind::Todo;

    fn id(&self) -> EntityId {
        self.id
    }
}

/// Planned work measured in pomodoros.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlannedPomodoro {
    id: EntityId,
    /// Display name, copied onto done entries.
    pub name: String,
    /// Remaining pomodoros; never stored as zero.
    pub pomodoros_amount: u32,
}

impl PlannedPomodoro {
    /// Creates a plan with a fresh id.
    #[must_use]
    pub fn new(name: String, pomodoros_amount: u32) -> Self {
        Self {
            id: EntityId::generate(),
            name,
            pomodoros_amount,
        }
    }
}

impl Entity for PlannedPomodoro {
    const KIND: EntityKind = EntityKind::PlannedPomodoro;

    fn id(&self) -> EntityId {
        self.id
    }
}

/// A logged pomodoro.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DonePomodoro {
    id: EntityId,
    /// Name of the plan the pomodoro was taken from.
    pub name: String,
    /// Minutes actually spent.
    pub minutes_spent: u32,
    /// When the pomodoro started.
    #[serde(with = "time::serde::rfc3339")]
    pub start_time: OffsetDateTime,
    /// When the pomodoro ended.
    #[serde(with = "time::serde::rfc3339")]
    pub end_time: OffsetDateTime,
}

impl DonePomodoro {
    /// Creates a log entry with a fresh id.
    #[must_use]
    pub fn new(
        name: String,
        minutes_spent: u32,
        start_time: OffsetDateTime,
        end_time: OffsetDateTime,
    ) -> Self {
        Self {
            id: EntityId::generate(),
            name,
            minutes_spent,
            start_time,
            end_time,
        }
    }
}

impl Entity for DonePomodoro {
    const KIND: EntityKind = EntityKind::DonePomodoro;

    fn id(&self) -> EntityId {
        self.id
    }
}

/// A `#RGB` or `#RRGGBB` color code.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexColor(String);

impl HexColor {
    /// Parses a hex color code. Either letter case is accepted and kept.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidColor` if the value is not `#` followed
    /// by exactly 3 or 6 hex digits.
    pub fn parse(value: &str) -> Result<Self, DomainError> {
        let digits: &str = value
            .strip_prefix('#')
            .ok_or_else(|| DomainError::InvalidColor(value.to_string()))?;

        let well_formed: bool = matches!(digits.len(), 3 | 6)
            && digits.chars().all(|c| c.is_ascii_hexdigit());
        if !well_formed {
            return Err(DomainError::InvalidColor(value.to_string()));
        }

        Ok(Self(value.to_string()))
    }

    /// Returns the color code.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for HexColor {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<HexColor> for String {
    fn from(color: HexColor) -> Self {
        color.0
    }
}

/// A time-tracking category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    id: EntityId,
    /// Unique among all categories, archived or not.
    pub name: String,
    /// Display color.
    pub color: HexColor,
    /// Archived categories stay resolvable but are hidden from pickers.
    pub is_archived: bool,
}

impl Category {
    /// Creates an active category with a fresh id.
    #[must_use]
    pub fn new(name: String, color: HexColor) -> Self {
        Self {
            id: EntityId::generate(),
            name,
            color,
            is_archived: false,
        }
    }
}

impl Entity for Category {
    const KIND: EntityKind = EntityKind::Category;

    fn id(&self) -> EntityId {
        self.id
    }
}

impl Named for Category {
    fn name(&self) -> &str {
        &self.name
    }
}

/// Minutes tracked against a category on one calendar day.
///
/// `(category, date)` is unique within the tracker section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    id: EntityId,
    /// Weak reference to a [`Category`] in the same section.
    pub category: EntityId,
    /// The tracked day.
    #[serde(with = "day_timestamp")]
    pub date: Date,
    /// Minutes tracked on that day.
    pub minutes_spent: u32,
}

impl Task {
    /// Creates a task with a fresh id.
    #[must_use]
    pub fn new(category: EntityId, date: Date, minutes_spent: u32) -> Self {
        Self {
            id: EntityId::generate(),
            category,
            date,
            minutes_spent,
        }
    }
}

impl Entity for Task {
    const KIND: EntityKind = EntityKind::Task;

    fn id(&self) -> EntityId {
        self.id
    }
}
