// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::id::{EntityId, EntityKind};
use time::Date;

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The referenced entity does not exist in the user's aggregate.
    NotFound {
        /// The kind of entity that was looked up.
        kind: EntityKind,
        /// The id that did not resolve.
        id: EntityId,
    },
    /// A name is already taken within its section.
    DuplicateName {
        /// The kind of entity whose name collided.
        kind: EntityKind,
        /// The colliding name.
        name: String,
    },
    /// A task already exists for this category and day.
    DuplicateTask {
        /// The category of the existing task.
        category: EntityId,
        /// The day of the existing task.
        date: Date,
    },
    /// An entity with this id is already present in the collection.
    DuplicateId {
        /// The kind of entity.
        kind: EntityKind,
        /// The duplicated id.
        id: EntityId,
    },
    /// Name is empty or invalid.
    InvalidName(String),
    /// Note is empty or invalid.
    InvalidNote(String),
    /// Color is not a hex color code.
    InvalidColor(String),
    /// Minutes spent must be at least one.
    InvalidMinutes(u32),
    /// Pomodoros amount must be at least one.
    InvalidPomodorosAmount(u32),
    /// Requested history length must be at least one day.
    InvalidDaysAmount(u32),
    /// Month index outside 0..=11.
    InvalidMonth(u8),
    /// Year outside the supported calendar range.
    InvalidYear(i32),
    /// A pomodoro ends before it starts.
    InvalidTimeRange {
        /// The start of the interval (RFC 3339).
        start: String,
        /// The end of the interval (RFC 3339).
        end: String,
    },
    /// Adding minutes to an existing task would overflow.
    MinutesOverflow {
        /// The minutes already recorded.
        existing: u32,
        /// The minutes being added.
        added: u32,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound { kind, id } => write!(f, "{kind} with id '{id}' not found"),
            Self::DuplicateName { kind, name } => {
                write!(f, "{kind} with name '{name}' already exists")
            }
            Self::DuplicateTask { category, date } => {
                write!(
                    f,
                    "A task for category '{category}' on {date} already exists"
                )
            }
            Self::DuplicateId { kind, id } => {
                write!(f, "{kind} with id '{id}' is already present")
            }
            Self::InvalidName(msg) => write!(f, "Invalid name: {msg}"),
            Self::InvalidNote(msg) => write!(f, "Invalid note: {msg}"),
            Self::InvalidColor(value) => {
                write!(f, "Invalid color '{value}': expected #RGB or #RRGGBB")
            }
            Self::InvalidMinutes(value) => {
                write!(f, "Invalid minutes spent: {value}. Must be at least 1")
            }
            Self::InvalidPomodorosAmount(value) => {
                write!(f, "Invalid pomodoros amount: {value}. Must be at least 1")
            }
            Self::InvalidDaysAmount(value) => {
                write!(f, "Invalid days amount: {value}. Must be at least 1")
            }
            Self::InvalidMonth(value) => {
                write!(f, "Invalid month: {value}. Must be between 0 and 11")
            }
            Self::InvalidYear(value) => write!(f, "Invalid year: {value}"),
            Self::InvalidTimeRange { start, end } => {
                write!(f, "End time {end} is before start time {start}")
            }
            Self::MinutesOverflow { existing, added } => {
                write!(
                    f,
                    "Adding {added} minutes to {existing} recorded minutes overflows"
                )
            }
        }
    }
}

impl std::error::Error for DomainError {}
