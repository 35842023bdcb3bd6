// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{CoreError, UserRoot};
use focusdesk_domain::{
    Category, DomainError, Entity, EntityId, Group, HexColor, PlannedPomodoro,
};
use time::{Date, Month};

pub fn create_test_color() -> HexColor {
    HexColor::parse("#3a7bd5").unwrap()
}

pub fn create_test_group(root: &mut UserRoot, name: &str) -> EntityId {
    let group: Group = root.create_group(name).unwrap();
    group.id()
}

pub fn create_test_category(root: &mut UserRoot, name: &str) -> EntityId {
    let category: Category = root.create_category(name, create_test_color()).unwrap();
    category.id()
}

pub fn create_test_plan(root: &mut UserRoot, name: &str, amount: u32) -> EntityId {
    let planned: PlannedPomodoro = root.create_planned(name, amount).unwrap();
    planned.id()
}

pub fn day(year: i32, month: Month, day: u8) -> Date {
    Date::from_calendar_date(year, month, day).unwrap()
}

pub fn domain_error(err: CoreError) -> DomainError {
    match err {
        CoreError::DomainViolation(err) => err,
    }
}
