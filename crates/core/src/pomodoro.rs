// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Pomodoro planning and logging.
//!
//! A plan holds a remaining pomodoro count. Completing or discarding one
//! pomodoro decrements the count, and a plan whose count would reach zero
//! is removed instead, so no plan is ever stored with a zero count.

use crate::error::CoreError;
use crate::view::PomodorosView;
use focusdesk_domain::{
    Collection, DomainError, DonePomodoro, Entity, EntityId, EntityKind, PlannedPomodoro,
    resolve_reference, validate_minutes, validate_name, validate_pomodoros_amount,
    validate_time_range,
};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// An edit to a planned pomodoro. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlannedPatch {
    pub name: Option<String>,
    pub pomodoros_amount: Option<u32>,
}

/// An edit to a logged pomodoro. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DonePatch {
    pub name: Option<String>,
    pub minutes_spent: Option<u32>,
    pub start_time: Option<OffsetDateTime>,
    pub end_time: Option<OffsetDateTime>,
}

/// Planned and completed pomodoros.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PomodoroSection {
    plan: Collection<PlannedPomodoro>,
    done: Collection<DonePomodoro>,
}

impl PomodoroSection {
    /// Creates an empty section.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            plan: Collection::new(),
            done: Collection::new(),
        }
    }

    #[must_use]
    pub const fn plan(&self) -> &Collection<PlannedPomodoro> {
        &self.plan
    }

    #[must_use]
    pub const fn done(&self) -> &Collection<DonePomodoro> {
        &self.done
    }

    /// Returns both lists in creation order.
    #[must_use]
    pub fn view(&self) -> PomodorosView {
        PomodorosView {
            plan: self.plan.as_slice().to_vec(),
            done: self.done.as_slice().to_vec(),
        }
    }

    /// Plans `pomodoros_amount` pomodoros under `name`.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is blank or the amount is zero.
    pub fn create_planned(
        &mut self,
        name: &str,
        pomodoros_amount: u32,
    ) -> Result<PlannedPomodoro, CoreError> {
        let name: String = validate_name(name)?;
        let pomodoros_amount: u32 = validate_pomodoros_amount(pomodoros_amount)?;

        let planned: PlannedPomodoro = PlannedPomodoro::new(name, pomodoros_amount);
        self.plan.insert(planned.clone())?;
        Ok(planned)
    }

    /// Edits a plan.
    ///
    /// # Errors
    ///
    /// Returns an error if the plan does not exist, the name is blank or the
    /// amount is zero.
    pub fn edit_planned(
        &mut self,
        id: EntityId,
        patch: PlannedPatch,
    ) -> Result<PlannedPomodoro, CoreError> {
        resolve_reference(&self.plan, id)?;
        let name: Option<String> = patch.name.as_deref().map(validate_name).transpose()?;
        let pomodoros_amount: Option<u32> = patch
            .pomodoros_amount
            .map(validate_pomodoros_amount)
            .transpose()?;

        let planned: &mut PlannedPomodoro = self.plan.require_mut(id)?;
        if let Some(name) = name {
            planned.name = name;
        }
        if let Some(pomodoros_amount) = pomodoros_amount {
            planned.pomodoros_amount = pomodoros_amount;
        }
        Ok(planned.clone())
    }

    /// Discards one pomodoro from a plan without logging it.
    ///
    /// Returns the remaining plan, or `None` when its last pomodoro was
    /// discarded and the plan removed.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::NotFound` if the plan does not exist.
    pub fn delete_planned(&mut self, id: EntityId) -> Result<Option<PlannedPomodoro>, CoreError> {
        Ok(self.consume_one(id)?)
    }

    /// Logs one pomodoro taken from a plan.
    ///
    /// The plan is decremented, or removed when this was its last pomodoro,
    /// and a done entry carrying the plan's name is appended. Either both
    /// happen or neither does.
    ///
    /// # Errors
    ///
    /// Returns an error if the plan does not exist, `minutes_spent` is zero
    /// or `end_time` precedes `start_time`.
    pub fn mark_done(
        &mut self,
        planned_id: EntityId,
        minutes_spent: u32,
        start_time: OffsetDateTime,
        end_time: OffsetDateTime,
    ) -> Result<DonePomodoro, CoreError> {
        let name: String = resolve_reference(&self.plan, planned_id)?.name.clone();
        let minutes_spent: u32 = validate_minutes(minutes_spent)?;
        validate_time_range(start_time, end_time)?;

        let done: DonePomodoro = DonePomodoro::new(name, minutes_spent, start_time, end_time);
        // Both writes below must succeed once the plan is touched.
        if self.done.contains(done.id()) {
            return Err(DomainError::DuplicateId {
                kind: EntityKind::DonePomodoro,
                id: done.id(),
            }
            .into());
        }

        self.consume_one(planned_id)?;
        self.done.insert(done.clone())?;
        Ok(done)
    }

    /// Edits a logged pomodoro.
    ///
    /// # Errors
    ///
    /// Returns an error if the entry does not exist, the name is blank,
    /// `minutes_spent` is zero or the resulting end precedes the start.
    pub fn edit_done(&mut self, id: EntityId, patch: DonePatch) -> Result<DonePomodoro, CoreError> {
        let current: &DonePomodoro = resolve_reference(&self.done, id)?;
        let name: Option<String> = patch.name.as_deref().map(validate_name).transpose()?;
        let minutes_spent: Option<u32> = patch.minutes_spent.map(validate_minutes).transpose()?;
        let start_time: OffsetDateTime = patch.start_time.unwrap_or(current.start_time);
        let end_time: OffsetDateTime = patch.end_time.unwrap_or(current.end_time);
        validate_time_range(start_time, end_time)?;

        let done: &mut DonePomodoro = self.done.require_mut(id)?;
        if let Some(name) = name {
            done.name = name;
        }
        if let Some(minutes_spent) = minutes_spent {
            done.minutes_spent = minutes_spent;
        }
        done.start_time = start_time;
        done.end_time = end_time;
        Ok(done.clone())
    }

    /// Deletes a logged pomodoro.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::NotFound` if the entry does not exist.
    pub fn delete_done(&mut self, id: EntityId) -> Result<DonePomodoro, CoreError> {
        Ok(self.done.remove(id).ok_or(DomainError::NotFound {
            kind: EntityKind::DonePomodoro,
            id,
        })?)
    }

    /// Removes every plan and log entry.
    pub fn reset(&mut self) {
        self.plan.clear();
        self.done.clear();
    }

    fn consume_one(&mut self, id: EntityId) -> Result<Option<PlannedPomodoro>, DomainError> {
        let planned: &mut PlannedPomodoro = self.plan.require_mut(id)?;
        if planned.pomodoros_amount <= 1 {
            self.plan.remove(id);
            return Ok(None);
        }
        planned.pomodoros_amount -= 1;
        Ok(Some(planned.clone()))
    }
}
