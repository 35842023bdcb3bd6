// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    Collection, DomainError, Entity, EntityId, EntityKind, Group, check_name_unique,
    resolve_reference, validate_minutes, validate_name, validate_name_unique, validate_note,
    validate_pomodoros_amount, validate_time_range,
};
use time::macros::datetime;

fn create_test_groups() -> (Collection<Group>, EntityId) {
    let mut groups: Collection<Group> = Collection::new();
    let home: EntityId = groups.insert(Group::new(String::from("Home"))).unwrap();
    groups.insert(Group::new(String::from("Work"))).unwrap();
    (groups, home)
}

#[test]
fn test_validate_name_trims() {
    assert_eq!(validate_name("  Groceries ").unwrap(), "Groceries");
}

#[test]
fn test_validate_name_rejects_blank() {
    assert!(matches!(validate_name("   "), Err(DomainError::InvalidName(_))));
    assert!(matches!(validate_note(""), Err(DomainError::InvalidNote(_))));
}

#[test]
fn test_validate_positive_numbers() {
    assert_eq!(validate_minutes(25), Ok(25));
    assert_eq!(validate_minutes(0), Err(DomainError::InvalidMinutes(0)));
    assert_eq!(validate_pomodoros_amount(3), Ok(3));
    assert_eq!(
        validate_pomodoros_amount(0),
        Err(DomainError::InvalidPomodorosAmount(0))
    );
}

#[test]
fn test_validate_time_range() {
    let start = datetime!(2022-04-21 16:00 UTC);
    let end = datetime!(2022-04-21 16:25 UTC);

    assert!(validate_time_range(start, end).is_ok());
    assert!(validate_time_range(start, start).is_ok());
    assert!(matches!(
        validate_time_range(end, start),
        Err(DomainError::InvalidTimeRange { .. })
    ));
}

#[test]
fn test_check_name_unique_is_exact_match() {
    let (groups, _) = create_test_groups();

    assert!(!check_name_unique(&groups, "Home", None));
    assert!(check_name_unique(&groups, "home", None));
    assert!(check_name_unique(&groups, "Garden", None));
}

#[test]
fn test_check_name_unique_excludes_self() {
    let (groups, home) = create_test_groups();

    assert!(check_name_unique(&groups, "Home", Some(home)));
    assert!(!check_name_unique(&groups, "Work", Some(home)));
}

#[test]
fn test_validate_name_unique_reports_kind() {
    let (groups, _) = create_test_groups();

    assert_eq!(
        validate_name_unique(&groups, "Work", None),
        Err(DomainError::DuplicateName {
            kind: EntityKind::Group,
            name: String::from("Work"),
        })
    );
}

#[test]
fn test_resolve_reference() {
    let (groups, home) = create_test_groups();

    assert_eq!(resolve_reference(&groups, home).unwrap().id(), home);

    let missing: EntityId = EntityId::generate();
    assert_eq!(
        resolve_reference(&groups, missing).unwrap_err(),
        DomainError::NotFound {
            kind: EntityKind::Group,
            id: missing,
        }
    );
}
