// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::collection::{Collection, Entity, Named};
use crate::error::DomainError;
use crate::id::EntityId;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

/// Validates and normalizes an entity name.
///
/// # Arguments
///
/// * `name` - The raw name
///
/// # Returns
///
/// * `Ok(String)` with surrounding whitespace trimmed
/// * `Err(DomainError::InvalidName)` if nothing remains after trimming
///
/// # Errors
///
/// Returns an error if the name is empty or whitespace only.
pub fn validate_name(name: &str) -> Result<String, DomainError> {
    let trimmed: &str = name.trim();
    if trimmed.is_empty() {
        return Err(DomainError::InvalidName(String::from(
            "Name cannot be empty",
        )));
    }
    Ok(trimmed.to_string())
}

/// Validates and normalizes a todo note.
///
/// # Errors
///
/// Returns `DomainError::InvalidNote` if the note is empty or whitespace only.
pub fn validate_note(note: &str) -> Result<String, DomainError> {
    let trimmed: &str = note.trim();
    if trimmed.is_empty() {
        return Err(DomainError::InvalidNote(String::from(
            "Note cannot be empty",
        )));
    }
    Ok(trimmed.to_string())
}

/// Validates a minutes-spent value.
///
/// # Errors
///
/// Returns `DomainError::InvalidMinutes` if the value is zero.
pub const fn validate_minutes(minutes: u32) -> Result<u32, DomainError> {
    if minutes == 0 {
        return Err(DomainError::InvalidMinutes(minutes));
    }
    Ok(minutes)
}

/// Validates a planned pomodoros amount.
///
/// # Errors
///
/// Returns `DomainError::InvalidPomodorosAmount` if the value is zero.
pub const fn validate_pomodoros_amount(amount: u32) -> Result<u32, DomainError> {
    if amount == 0 {
        return Err(DomainError::InvalidPomodorosAmount(amount));
    }
    Ok(amount)
}

/// Validates the number of history days requested.
///
/// # Errors
///
/// Returns `DomainError::InvalidDaysAmount` if the value is zero.
pub const fn validate_days_amount(days: u32) -> Result<u32, DomainError> {
    if days == 0 {
        return Err(DomainError::InvalidDaysAmount(days));
    }
    Ok(days)
}

/// Validates that an interval does not end before it starts.
///
/// # Errors
///
/// Returns `DomainError::InvalidTimeRange` if `end` precedes `start`.
pub fn validate_time_range(
    start: OffsetDateTime,
    end: OffsetDateTime,
) -> Result<(), DomainError> {
    if end < start {
        return Err(DomainError::InvalidTimeRange {
            start: start.format(&Rfc3339).unwrap_or_else(|_| start.to_string()),
            end: end.format(&Rfc3339).unwrap_or_else(|_| end.to_string()),
        });
    }
    Ok(())
}

/// Checks whether a name is free within a collection.
///
/// Comparison is exact. `exclude` skips one entity so that an entity can
/// be renamed to its own current name.
///
/// # Arguments
///
/// * `collection` - The collection to search
/// * `name` - The candidate name
/// * `exclude` - An entity to ignore, if any
#[must_use]
pub fn check_name_unique<T: Named>(
    collection: &Collection<T>,
    name: &str,
    exclude: Option<EntityId>,
) -> bool {
    !collection
        .iter()
        .filter(|entity| Some(entity.id()) != exclude)
        .any(|entity| entity.name() == name)
}

/// Validates that a name is free within a collection.
///
/// # Errors
///
/// Returns `DomainError::DuplicateName` if another entity already uses the
/// name.
pub fn validate_name_unique<T: Named>(
    collection: &Collection<T>,
    name: &str,
    exclude: Option<EntityId>,
) -> Result<(), DomainError> {
    if !check_name_unique(collection, name, exclude) {
        return Err(DomainError::DuplicateName {
            kind: T::KIND,
            name: name.to_string(),
        });
    }
    Ok(())
}

/// Resolves an id to a live entity before a reference to it is stored.
///
/// # Errors
///
/// Returns `DomainError::NotFound` if no entity with the id exists.
pub fn resolve_reference<T: Entity>(
    collection: &Collection<T>,
    id: EntityId,
) -> Result<&T, DomainError> {
    collection
        .find(id)
        .ok_or(DomainError::NotFound { kind: T::KIND, id })
}
