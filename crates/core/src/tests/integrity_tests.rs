// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{create_test_category, create_test_group, day};
use crate::{CategoryDeletion, GroupDeletion, NewTodo, TaskView, TodoView, UserRoot};
use focusdesk_domain::{Collection, EntityId, Todo};
use time::Month;

#[test]
fn test_deleting_group_detaches_todos() {
    let mut root: UserRoot = UserRoot::new();
    let home: EntityId = create_test_group(&mut root, "Home");
    let work: EntityId = create_test_group(&mut root, "Work");

    let mut at_home: NewTodo = NewTodo::new(String::from("Laundry"));
    at_home.group = Some(home);
    let mut at_work: NewTodo = NewTodo::new(String::from("Report"));
    at_work.group = Some(work);
    let laundry: TodoView = root.create_todo(at_home.clone()).unwrap();
    let dishes: TodoView = root
        .create_todo(NewTodo {
            name: String::from("Dishes"),
            ..at_home
        })
        .unwrap();
    let report: TodoView = root.create_todo(at_work).unwrap();

    let deletion: GroupDeletion = root.delete_group(home).unwrap();

    assert_eq!(deletion.group.name, "Home");
    assert_eq!(deletion.detached_todos, 2);
    assert_eq!(root.todos().len(), 3);

    let todos: &Collection<Todo> = root.checklist().todos();
    let laundry: &Todo = todos.find(laundry.id).unwrap();
    let dishes: &Todo = todos.find(dishes.id).unwrap();
    let report: &Todo = todos.find(report.id).unwrap();
    assert!(laundry.group.is_none());
    assert!(dishes.group.is_none());
    assert_eq!(report.group, Some(work));
}

#[test]
fn test_deleting_category_removes_its_tasks() {
    let mut root: UserRoot = UserRoot::new();
    let reading: EntityId = create_test_category(&mut root, "Reading");
    let coding: EntityId = create_test_category(&mut root, "Coding");

    let first: TaskView = root
        .add_task(reading, day(2022, Month::October, 1), 30)
        .unwrap();
    let second: TaskView = root
        .add_task(reading, day(2022, Month::October, 2), 45)
        .unwrap();
    let kept: TaskView = root
        .add_task(coding, day(2022, Month::October, 1), 60)
        .unwrap();

    let deletion: CategoryDeletion = root.delete_category(reading).unwrap();

    assert_eq!(deletion.category.name, "Reading");
    let removed: Vec<EntityId> = deletion
        .removed_tasks
        .iter()
        .map(focusdesk_domain::Entity::id)
        .collect();
    assert_eq!(removed, vec![first.id, second.id]);

    let remaining: Vec<TaskView> = root.tasks();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, kept.id);
}

#[test]
fn test_deleting_unreferenced_parents_is_a_no_op_cascade() {
    let mut root: UserRoot = UserRoot::new();
    let group: EntityId = create_test_group(&mut root, "Empty");
    let category: EntityId = create_test_category(&mut root, "Unused");
    root.create_todo(NewTodo::new(String::from("Loose")))
        .unwrap();

    assert_eq!(root.delete_group(group).unwrap().detached_todos, 0);
    assert!(root.delete_category(category).unwrap().removed_tasks.is_empty());
    assert_eq!(root.todos().len(), 1);
}
