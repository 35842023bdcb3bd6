// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{create_test_group, domain_error};
use crate::{Change, CoreError, NewSubTodo, NewTodo, TodoPatch, TodoView, UserRoot};
use focusdesk_domain::{DomainError, EntityId, EntityKind, Group};
use time::macros::datetime;

#[test]
fn test_create_todo_trims_and_resolves_group() {
    let mut root: UserRoot = UserRoot::new();
    let group_id: EntityId = create_test_group(&mut root, "Home");

    let mut new_todo: NewTodo = NewTodo::new(String::from("  Buy milk "));
    new_todo.group = Some(group_id);
    new_todo.note = Some(String::from(" semi-skimmed "));
    new_todo.sub_todos = vec![NewSubTodo {
        name: String::from(" two litres "),
        done: false,
    }];

    let view: TodoView = root.create_todo(new_todo).unwrap();

    assert_eq!(view.name, "Buy milk");
    assert_eq!(view.note.as_deref(), Some("semi-skimmed"));
    assert_eq!(view.group.unwrap().name, "Home");
    assert_eq!(view.sub_todos.len(), 1);
    assert_eq!(view.sub_todos[0].name, "two litres");
    assert_eq!(root.todos().len(), 1);
}

#[test]
fn test_create_todo_with_unknown_group_creates_nothing() {
    let mut root: UserRoot = UserRoot::new();
    let missing: EntityId = EntityId::generate();

    let mut new_todo: NewTodo = NewTodo::new(String::from("Buy milk"));
    new_todo.group = Some(missing);

    let err: CoreError = root.create_todo(new_todo).unwrap_err();
    assert_eq!(
        domain_error(err),
        DomainError::NotFound {
            kind: EntityKind::Group,
            id: missing,
        }
    );
    assert!(root.todos().is_empty());
}

#[test]
fn test_create_todo_rejects_blank_sub_todo() {
    let mut root: UserRoot = UserRoot::new();

    let mut new_todo: NewTodo = NewTodo::new(String::from("Pack"));
    new_todo.sub_todos = vec![NewSubTodo {
        name: String::from("   "),
        done: true,
    }];

    assert!(root.create_todo(new_todo).is_err());
    assert!(root.todos().is_empty());
}

#[test]
fn test_edit_todo_leaves_absent_fields_unchanged() {
    let mut root: UserRoot = UserRoot::new();
    let group_id: EntityId = create_test_group(&mut root, "Work");

    let mut new_todo: NewTodo = NewTodo::new(String::from("Report"));
    new_todo.group = Some(group_id);
    new_todo.note = Some(String::from("Quarterly"));
    new_todo.deadline = Some(datetime!(2022-04-21 23:59:59.999 UTC));
    let created: TodoView = root.create_todo(new_todo).unwrap();

    let patch: TodoPatch = TodoPatch {
        done: Some(true),
        ..TodoPatch::default()
    };
    let edited: TodoView = root.edit_todo(created.id, patch).unwrap();

    assert!(edited.done);
    assert_eq!(edited.name, "Report");
    assert_eq!(edited.note.as_deref(), Some("Quarterly"));
    assert_eq!(edited.deadline, created.deadline);
    assert_eq!(edited.group.unwrap().name, "Work");
}

#[test]
fn test_edit_todo_clears_group_and_deadline() {
    let mut root: UserRoot = UserRoot::new();
    let group_id: EntityId = create_test_group(&mut root, "Work");

    let mut new_todo: NewTodo = NewTodo::new(String::from("Report"));
    new_todo.group = Some(group_id);
    new_todo.deadline = Some(datetime!(2022-04-21 23:59:59.999 UTC));
    let created: TodoView = root.create_todo(new_todo).unwrap();

    let patch: TodoPatch = TodoPatch {
        group: Change::Cleared,
        deadline: Change::Cleared,
        ..TodoPatch::default()
    };
    let edited: TodoView = root.edit_todo(created.id, patch).unwrap();

    assert!(edited.group.is_none());
    assert!(edited.deadline.is_none());
    assert!(root.checklist().todos().find(created.id).unwrap().group.is_none());
}

#[test]
fn test_edit_todo_replaces_sub_todos_with_fresh_ids() {
    let mut root: UserRoot = UserRoot::new();

    let mut new_todo: NewTodo = NewTodo::new(String::from("Trip"));
    new_todo.sub_todos = vec![NewSubTodo {
        name: String::from("Tickets"),
        done: false,
    }];
    let created: TodoView = root.create_todo(new_todo).unwrap();

    let patch: TodoPatch = TodoPatch {
        sub_todos: Some(vec![
            NewSubTodo {
                name: String::from("Tickets"),
                done: true,
            },
            NewSubTodo {
                name: String::from("Hotel"),
                done: false,
            },
        ]),
        ..TodoPatch::default()
    };
    let edited: TodoView = root.edit_todo(created.id, patch).unwrap();

    assert_eq!(edited.sub_todos.len(), 2);
    assert!(edited.sub_todos[0].done);
    assert_ne!(edited.sub_todos[0].id(), created.sub_todos[0].id());
}

#[test]
fn test_failed_edit_leaves_todo_unchanged() {
    let mut root: UserRoot = UserRoot::new();
    let created: TodoView = root
        .create_todo(NewTodo::new(String::from("Report")))
        .unwrap();
    let before: UserRoot = root.clone();

    let patch: TodoPatch = TodoPatch {
        name: Some(String::from("Renamed")),
        group: Change::Set(EntityId::generate()),
        ..TodoPatch::default()
    };

    assert!(root.edit_todo(created.id, patch).is_err());
    assert_eq!(root, before);
}

#[test]
fn test_delete_todo() {
    let mut root: UserRoot = UserRoot::new();
    let created: TodoView = root
        .create_todo(NewTodo::new(String::from("Report")))
        .unwrap();

    let deleted: TodoView = root.delete_todo(created.id).unwrap();
    assert_eq!(deleted.id, created.id);
    assert!(root.todos().is_empty());

    let err: CoreError = root.delete_todo(created.id).unwrap_err();
    assert!(matches!(
        domain_error(err),
        DomainError::NotFound {
            kind: EntityKind::Todo,
            ..
        }
    ));
}

#[test]
fn test_duplicate_group_name_is_rejected() {
    let mut root: UserRoot = UserRoot::new();
    create_test_group(&mut root, "Home");

    let err: CoreError = root.create_group(" Home ").unwrap_err();
    assert_eq!(
        domain_error(err),
        DomainError::DuplicateName {
            kind: EntityKind::Group,
            name: String::from("Home"),
        }
    );
    assert_eq!(root.groups().len(), 1);
}

#[test]
fn test_edit_group_allows_own_name_but_not_another() {
    let mut root: UserRoot = UserRoot::new();
    let home: EntityId = create_test_group(&mut root, "Home");
    create_test_group(&mut root, "Work");

    let renamed: Group = root.edit_group(home, Some("Home")).unwrap();
    assert_eq!(renamed.name, "Home");

    let err: CoreError = root.edit_group(home, Some("Work")).unwrap_err();
    assert!(matches!(
        domain_error(err),
        DomainError::DuplicateName { .. }
    ));
    assert_eq!(root.checklist().groups().find(home).unwrap().name, "Home");
}

#[test]
fn test_reset_checklist() {
    let mut root: UserRoot = UserRoot::new();
    create_test_group(&mut root, "Home");
    root.create_todo(NewTodo::new(String::from("Report")))
        .unwrap();

    root.reset_checklist();

    assert!(root.todos().is_empty());
    assert!(root.groups().is_empty());
}
