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

mod calendar;
mod collection;
mod error;
mod id;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use calendar::{CalendarMonth, day_timestamp, format_day, parse_day};
pub use collection::{Collection, Entity, Named};
pub use error::DomainError;
pub use id::{EntityId, EntityKind, UserId};
pub use types::{Category, DonePomodoro, Group, HexColor, PlannedPomodoro, SubTodo, Task, Todo};
pub use validation::{
    check_name_unique, resolve_reference, validate_days_amount, validate_minutes,
    validate_name, validate_name_unique, validate_note, validate_pomodoros_amount,
    validate_time_range,
};
