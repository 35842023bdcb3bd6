// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{create_test_category, create_test_group, create_test_plan, day};
use crate::{Change, NewTodo, UserRoot};
use focusdesk_domain::EntityId;
use time::Month;

#[test]
fn test_root_survives_document_round_trip() {
    let mut root: UserRoot = UserRoot::new();
    let group: EntityId = create_test_group(&mut root, "Home");
    let mut new_todo: NewTodo = NewTodo::new(String::from("Laundry"));
    new_todo.group = Some(group);
    root.create_todo(new_todo).unwrap();
    create_test_plan(&mut root, "Essay", 2);
    let reading: EntityId = create_test_category(&mut root, "Reading");
    root.add_task(reading, day(2022, Month::April, 21), 30)
        .unwrap();

    let document: String = serde_json::to_string(&root).unwrap();
    let restored: UserRoot = serde_json::from_str(&document).unwrap();

    assert_eq!(restored, root);
}

#[test]
fn test_missing_sections_load_as_empty() {
    let restored: UserRoot = serde_json::from_str("{}").unwrap();
    assert_eq!(restored, UserRoot::new());
}

#[test]
fn test_document_uses_camel_case_fields() {
    let mut root: UserRoot = UserRoot::new();
    create_test_plan(&mut root, "Essay", 2);

    let value: serde_json::Value = serde_json::to_value(&root).unwrap();

    assert_eq!(value["pomodoros"]["plan"][0]["pomodorosAmount"], 2);
    assert!(value["checklist"]["todos"].is_array());
    assert!(value["tracker"]["tasks"].is_array());
}

#[test]
fn test_change_deserializes_absent_null_and_value() {
    #[derive(serde::Deserialize)]
    struct Body {
        #[serde(default)]
        group: Change<String>,
    }

    let absent: Body = serde_json::from_str("{}").unwrap();
    let cleared: Body = serde_json::from_str(r#"{"group":null}"#).unwrap();
    let set: Body = serde_json::from_str(r#"{"group":"abc"}"#).unwrap();

    assert_eq!(absent.group, Change::Unchanged);
    assert_eq!(cleared.group, Change::Cleared);
    assert_eq!(set.group, Change::Set(String::from("abc")));
}
