// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use focusdesk::CoreError;
use focusdesk_domain::{DomainError, EntityId, EntityKind};
use focusdesk_persistence::PersistenceError;
use time::macros::date;

use crate::{ApiError, InputError, translate_core_error, translate_domain_error};

#[test]
fn test_not_found_translates_to_resource_not_found() {
    let err: ApiError = translate_domain_error(DomainError::NotFound {
        kind: EntityKind::Category,
        id: EntityId::generate(),
    });
    match err {
        ApiError::ResourceNotFound { resource_type, .. } => {
            assert_eq!(resource_type, "Category");
        }
        other => panic!("Expected ResourceNotFound, got {other:?}"),
    }
}

#[test]
fn test_uniqueness_violations_translate_to_conflict() {
    let duplicate_name: ApiError = translate_domain_error(DomainError::DuplicateName {
        kind: EntityKind::Group,
        name: String::from("Work"),
    });
    assert!(matches!(
        duplicate_name,
        ApiError::Conflict { ref rule, .. } if rule == "unique_name"
    ));

    let duplicate_task: ApiError = translate_domain_error(DomainError::DuplicateTask {
        category: EntityId::generate(),
        date: date!(2022 - 04 - 21),
    });
    assert!(matches!(
        duplicate_task,
        ApiError::Conflict { ref rule, .. } if rule == "unique_task_day"
    ));
}

#[test]
fn test_field_errors_name_the_request_field() {
    let cases: Vec<(DomainError, &str)> = vec![
        (DomainError::InvalidName(String::from("empty")), "name"),
        (DomainError::InvalidMinutes(0), "minutesSpent"),
        (DomainError::InvalidPomodorosAmount(0), "pomodorosAmount"),
        (DomainError::InvalidDaysAmount(0), "daysAmount"),
        (DomainError::InvalidMonth(12), "month"),
        (
            DomainError::MinutesOverflow {
                existing: u32::MAX,
                added: 1,
            },
            "minutesSpent",
        ),
    ];

    for (domain_err, expected_field) in cases {
        match translate_domain_error(domain_err) {
            ApiError::InvalidInput { field, .. } => assert_eq!(field, expected_field),
            other => panic!("Expected InvalidInput, got {other:?}"),
        }
    }
}

#[test]
fn test_core_error_unwraps_domain_violation() {
    let err: ApiError = translate_core_error(CoreError::DomainViolation(
        DomainError::InvalidColor(String::from("red")),
    ));
    assert!(matches!(err, ApiError::InvalidInput { ref field, .. } if field == "color"));
}

#[test]
fn test_input_error_keeps_field_and_message() {
    let err: ApiError = InputError::InvalidId {
        field: "toEditId",
        value: String::from("nope"),
    }
    .into();
    assert_eq!(
        err.to_string(),
        "Invalid input for field 'toEditId': 'nope' is not a valid id"
    );
}

#[test]
fn test_persistence_error_is_internal() {
    let err: ApiError = PersistenceError::QueryFailed(String::from("disk on fire")).into();
    assert!(matches!(err, ApiError::Internal { .. }));
}
