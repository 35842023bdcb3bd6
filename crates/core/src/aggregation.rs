// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Month-bucketed task history.
//!
//! The task log is unordered, so a history page is built by splitting the
//! log at the last day of a reference month and then walking backward one
//! calendar month at a time, collecting each non-empty month as a bucket
//! until enough distinct days have been gathered. The walk never goes past
//! the month of the oldest task at or before the boundary, so it ends even
//! when the history is sparse.

use crate::error::CoreError;
use crate::tracker::TrackerSection;
use crate::view::TaskView;
use focusdesk_domain::{CalendarMonth, Task, validate_days_amount};
use serde::Serialize;
use std::collections::HashSet;
use time::Date;

/// Number of distinct days returned when the caller does not ask for a
/// specific amount.
pub const DEFAULT_DAYS_AMOUNT: u32 = 24;

/// Tasks recorded in one calendar month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthBucket {
    pub year: i32,
    /// Zero-based (0 = January).
    pub month: u8,
    pub tasks: Vec<TaskView>,
}

/// One page of task history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskHistory {
    /// Distinct days with tasks anywhere in the log.
    pub total_days: usize,
    /// Distinct days with tasks on or before the reference boundary.
    pub total_earlier_days: usize,
    /// Distinct days covered by `months`.
    pub collected_days: usize,
    /// Non-empty months, newest first.
    pub months: Vec<MonthBucket>,
}

/// Collects up to `days_amount` distinct days of tasks, walking backward
/// month by month from `reference`.
///
/// Tasks dated after the last day of `reference` only count towards
/// `total_days`. A month is always returned whole, so `collected_days` can
/// exceed `days_amount`, but never `total_earlier_days`.
///
/// # Errors
///
/// Returns an error if `days_amount` is zero.
pub fn tasks_by_months(
    tracker: &TrackerSection,
    days_amount: u32,
    reference: CalendarMonth,
) -> Result<TaskHistory, CoreError> {
    let days_amount: usize =
        usize::try_from(validate_days_amount(days_amount)?).unwrap_or(usize::MAX);
    let reference_day: Date = reference.last_day()?;

    let (earlier, later): (Vec<&Task>, Vec<&Task>) = tracker
        .tasks()
        .iter()
        .partition(|task| task.date <= reference_day);
    let total_earlier_days: usize = distinct_days(&earlier);
    let total_later_days: usize = distinct_days(&later);

    let mut history: TaskHistory = TaskHistory {
        total_days: total_earlier_days + total_later_days,
        total_earlier_days: 0,
        collected_days: 0,
        months: Vec::new(),
    };

    let Some(oldest) = earlier.iter().map(|task| CalendarMonth::of(task.date)).min() else {
        return Ok(history);
    };
    history.total_earlier_days = total_earlier_days;

    let mut month: CalendarMonth = reference;
    while history.collected_days < days_amount
        && history.collected_days < total_earlier_days
        && month >= oldest
    {
        let in_month: Vec<&Task> = earlier
            .iter()
            .copied()
            .filter(|task| month.contains(task.date))
            .collect();

        if !in_month.is_empty() {
            history.collected_days += distinct_days(&in_month);
            history.months.push(MonthBucket {
                year: month.year(),
                month: month.zero_based_month(),
                tasks: in_month
                    .into_iter()
                    .map(|task| TaskView::populate(task, tracker.categories()))
                    .collect(),
            });
        }

        month = month.previous();
    }

    Ok(history)
}

fn distinct_days(tasks: &[&Task]) -> usize {
    tasks
        .iter()
        .map(|task| task.date)
        .collect::<HashSet<Date>>()
        .len()
}
