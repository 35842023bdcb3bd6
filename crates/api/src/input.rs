// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Request field parsing.
//!
//! Requests carry ids, timestamps and colors as strings. This module turns
//! them into typed values before any core operation runs, so a malformed
//! request never reaches the aggregate.

use focusdesk_domain::{EntityId, HexColor, parse_day};
use std::str::FromStr;
use thiserror::Error;
use time::format_description::well_known::Rfc3339;
use time::{Date, OffsetDateTime, Time, UtcOffset};

/// Request field errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    /// A field is not a valid entity id.
    #[error("'{value}' is not a valid id")]
    InvalidId { field: &'static str, value: String },

    /// A field is not an RFC 3339 timestamp.
    #[error("'{value}' is not a valid timestamp")]
    InvalidTimestamp { field: &'static str, value: String },

    /// A deadline is not the last instant of a UTC day.
    #[error("'{value}' is not a deadline of the form YYYY-MM-DDT23:59:59.999Z")]
    InvalidDeadline { field: &'static str, value: String },

    /// A field is not a UTC midnight timestamp.
    #[error("'{value}' is not a day of the form YYYY-MM-DDT00:00:00.000Z")]
    InvalidDay { field: &'static str, value: String },

    /// A field is not a hex color code.
    #[error("'{value}' is not a color of the form #RGB or #RRGGBB")]
    InvalidColor { field: &'static str, value: String },

    /// A field is not a whole number in range.
    #[error("'{value}' is not a valid number")]
    InvalidNumber { field: &'static str, value: String },

    /// A required field is missing.
    #[error("Field is required")]
    Missing { field: &'static str },
}

impl InputError {
    /// Returns the name of the offending request field.
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match self {
            Self::InvalidId { field, .. }
            | Self::InvalidTimestamp { field, .. }
            | Self::InvalidDeadline { field, .. }
            | Self::InvalidDay { field, .. }
            | Self::InvalidColor { field, .. }
            | Self::InvalidNumber { field, .. }
            | Self::Missing { field } => field,
        }
    }
}

/// Parses an entity id.
///
/// # Errors
///
/// Returns `InputError::InvalidId` if the value is not a UUID.
pub fn parse_id(field: &'static str, value: &str) -> Result<EntityId, InputError> {
    EntityId::from_str(value).map_err(|_| InputError::InvalidId {
        field,
        value: value.to_string(),
    })
}

/// Parses an RFC 3339 timestamp.
///
/// # Errors
///
/// Returns `InputError::InvalidTimestamp` if the value does not parse.
pub fn parse_timestamp(field: &'static str, value: &str) -> Result<OffsetDateTime, InputError> {
    OffsetDateTime::parse(value, &Rfc3339).map_err(|_| InputError::InvalidTimestamp {
        field,
        value: value.to_string(),
    })
}

/// Parses a todo deadline.
///
/// A deadline marks the end of a UTC day: `23:59:59` with either no
/// fraction or exactly `.999`, in UTC.
///
/// # Errors
///
/// Returns `InputError::InvalidDeadline` for any other timestamp.
pub fn parse_deadline(field: &'static str, value: &str) -> Result<OffsetDateTime, InputError> {
    let invalid = || InputError::InvalidDeadline {
        field,
        value: value.to_string(),
    };

    if !value.ends_with('Z') {
        return Err(invalid());
    }
    let parsed: OffsetDateTime = OffsetDateTime::parse(value, &Rfc3339).map_err(|_| invalid())?;

    let end_of_day: bool = parsed.offset() == UtcOffset::UTC
        && (parsed.hour(), parsed.minute(), parsed.second()) == (23, 59, 59)
        && matches!(parsed.millisecond(), 0 | 999)
        && parsed.time() == truncate_to_millis(parsed.time());
    if !end_of_day {
        return Err(invalid());
    }
    Ok(parsed)
}

fn truncate_to_millis(time: Time) -> Time {
    time.replace_nanosecond(u32::from(time.millisecond()) * 1_000_000)
        .unwrap_or(time)
}

/// Parses a tracked day.
///
/// # Errors
///
/// Returns `InputError::InvalidDay` unless the value is a UTC midnight
/// timestamp.
pub fn parse_tracked_day(field: &'static str, value: &str) -> Result<Date, InputError> {
    parse_day(value).ok_or_else(|| InputError::InvalidDay {
        field,
        value: value.to_string(),
    })
}

/// Parses a hex color code.
///
/// # Errors
///
/// Returns `InputError::InvalidColor` if the value is malformed.
pub fn parse_color(field: &'static str, value: &str) -> Result<HexColor, InputError> {
    HexColor::parse(value).map_err(|_| InputError::InvalidColor {
        field,
        value: value.to_string(),
    })
}

/// Parses an optional query parameter as a number.
///
/// # Errors
///
/// Returns `InputError::InvalidNumber` if the value is present but does
/// not parse.
pub fn parse_number<T: FromStr>(
    field: &'static str,
    value: Option<&str>,
) -> Result<Option<T>, InputError> {
    value
        .map(|text| {
            text.trim().parse::<T>().map_err(|_| InputError::InvalidNumber {
                field,
                value: text.to_string(),
            })
        })
        .transpose()
}

/// Parses a required query parameter as a number.
///
/// # Errors
///
/// Returns `InputError::Missing` if the value is absent, or
/// `InputError::InvalidNumber` if it does not parse.
pub fn require_number<T: FromStr>(
    field: &'static str,
    value: Option<&str>,
) -> Result<T, InputError> {
    parse_number(field, value)?.ok_or(InputError::Missing { field })
}
