// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Calendar helpers for day-granular tracking.
//!
//! Tracked days are plain [`Date`] values. On the wire a day is written as
//! the UTC midnight timestamp `YYYY-MM-DDT00:00:00.000Z`, so a value with a
//! time-of-day component can never be parsed into a day.

use crate::error::DomainError;
use std::cmp::Ordering;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{Date, Month};

const DAY_FORMAT: &[BorrowedFormatItem<'_>] =
    format_description!("[year]-[month]-[day]T00:00:00.000Z");

const DAY_FORMAT_NO_MILLIS: &[BorrowedFormatItem<'_>] =
    format_description!("[year]-[month]-[day]T00:00:00Z");

/// Parses a UTC midnight timestamp into a calendar day.
///
/// Both `2022-04-21T00:00:00.000Z` and `2022-04-21T00:00:00Z` are accepted.
/// Anything else, including other times of day, yields `None`.
#[must_use]
pub fn parse_day(value: &str) -> Option<Date> {
    Date::parse(value, DAY_FORMAT)
        .or_else(|_| Date::parse(value, DAY_FORMAT_NO_MILLIS))
        .ok()
}

/// Formats a calendar day as its UTC midnight timestamp.
#[must_use]
pub fn format_day(date: Date) -> String {
    // Every component of DAY_FORMAT is available on a Date.
    date.format(DAY_FORMAT)
        .unwrap_or_else(|_| format!("{date}T00:00:00.000Z"))
}

/// Serde adapter writing a [`Date`] as its UTC midnight timestamp.
pub mod day_timestamp {
    use super::{format_day, parse_day};
    use serde::{Deserialize, Deserializer, Serializer};
    use time::Date;

    /// Serializes a day.
    ///
    /// # Errors
    ///
    /// Propagates serializer errors.
    pub fn serialize<S>(date: &Date, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format_day(*date))
    }

    /// Deserializes a day.
    ///
    /// # Errors
    ///
    /// Fails if the value is not a UTC midnight timestamp.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Date, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text: String = String::deserialize(deserializer)?;
        parse_day(&text).ok_or_else(|| {
            serde::de::Error::custom(format!("'{text}' is not a UTC midnight timestamp"))
        })
    }
}

/// A calendar month, addressed with a zero-based month index
/// (0 = January, 11 = December).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CalendarMonth {
    year: i32,
    month: Month,
}

impl CalendarMonth {
    /// Creates a calendar month from a year and a zero-based month index.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidMonth` if `month` is not in `0..=11`,
    /// or `DomainError::InvalidYear` if the year is outside the supported
    /// calendar range.
    pub fn from_zero_based(year: i32, month: u8) -> Result<Self, DomainError> {
        if month > 11 {
            return Err(DomainError::InvalidMonth(month));
        }
        let month: Month =
            Month::try_from(month + 1).map_err(|_| DomainError::InvalidMonth(month))?;

        let calendar_month: Self = Self { year, month };

        // Both the first and the last day must be representable.
        Date::from_calendar_date(year, month, 1).map_err(|_| DomainError::InvalidYear(year))?;
        calendar_month.last_day()?;

        Ok(calendar_month)
    }

    /// Returns the month containing `date`.
    #[must_use]
    pub fn of(date: Date) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Returns the year.
    #[must_use]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Returns the month.
    #[must_use]
    pub const fn month(&self) -> Month {
        self.month
    }

    /// Returns the zero-based month index.
    #[must_use]
    pub const fn zero_based_month(&self) -> u8 {
        self.month as u8 - 1
    }

    /// Returns the month before this one, rolling January back to the
    /// previous year's December.
    #[must_use]
    pub const fn previous(&self) -> Self {
        match self.month {
            Month::January => Self {
                year: self.year - 1,
                month: Month::December,
            },
            month => Self {
                year: self.year,
                month: month.previous(),
            },
        }
    }

    /// Returns the last calendar day of the month.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidYear` if the day falls outside the
    /// supported calendar range.
    pub fn last_day(&self) -> Result<Date, DomainError> {
        let first_of_next: Result<Date, time::error::ComponentRange> = match self.month {
            Month::December => Date::from_calendar_date(self.year + 1, Month::January, 1),
            month => Date::from_calendar_date(self.year, month.next(), 1),
        };
        first_of_next
            .ok()
            .and_then(Date::previous_day)
            .ok_or(DomainError::InvalidYear(self.year))
    }

    /// Returns whether `date` falls inside this month.
    #[must_use]
    pub fn contains(&self, date: Date) -> bool {
        date.year() == self.year && date.month() == self.month
    }
}

impl PartialOrd for CalendarMonth {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CalendarMonth {
    fn cmp(&self, other: &Self) -> Ordering {
        self.year
            .cmp(&other.year)
            .then_with(|| self.zero_based_month().cmp(&other.zero_based_month()))
    }
}
