// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use focusdesk::{TaskHistory, TaskView, UserRoot};
use focusdesk_domain::{Category, Entity};
use time::macros::date;

use crate::{
    AddTaskRequest, ApiError, ApiResult, CreateCategoryRequest, DeleteRequest,
    EditCategoryRequest, EditTaskRequest, InputError, ResetResponse, TasksByMonthsQuery, add_task,
    create_category, delete_category, delete_task, edit_category, edit_task, list_categories,
    list_tasks, reset_tracker, tasks_by_months,
};

use super::helpers::{request, root_with_category};

fn add_task_request(category: &Category, day: &str, minutes: u32) -> AddTaskRequest {
    AddTaskRequest {
        category_id: category.id().to_string(),
        date: day.to_string(),
        minutes_spent: minutes,
    }
}

fn track(root: &UserRoot, category: &Category, day: &str, minutes: u32) -> UserRoot {
    add_task(root, &add_task_request(category, day, minutes))
        .unwrap()
        .new_root
}

#[test]
fn test_add_task_merges_same_day() {
    let (root, category): (UserRoot, Category) = root_with_category("Coding", "#0f0");
    let root: UserRoot = track(&root, &category, "2022-04-21T00:00:00.000Z", 30);

    let result: ApiResult<TaskView> = add_task(
        &root,
        &add_task_request(&category, "2022-04-21T00:00:00Z", 15),
    )
    .unwrap();

    assert_eq!(result.response.minutes_spent, 45);
    assert_eq!(result.response.category, Some(category));
    assert_eq!(list_tasks(&result.new_root).len(), 1);
}

#[test]
fn test_add_task_rejects_non_midnight_date() {
    let (root, category): (UserRoot, Category) = root_with_category("Coding", "#0f0");

    let err: ApiError = add_task(
        &root,
        &add_task_request(&category, "2022-04-21T09:30:00.000Z", 15),
    )
    .unwrap_err();

    assert!(matches!(
        err,
        ApiError::InvalidInput { ref field, .. } if field == "date"
    ));
}

#[test]
fn test_add_task_with_unknown_category_is_not_found() {
    let root: UserRoot = UserRoot::new();
    let body: AddTaskRequest = request(
        r#"{
            "categoryId": "3f2504e0-4f89-11d3-9a0c-0305e82c3301",
            "date": "2022-04-21T00:00:00.000Z",
            "minutesSpent": 10
        }"#,
    );

    let err: ApiError = add_task(&root, &body).unwrap_err();
    assert!(matches!(err, ApiError::ResourceNotFound { .. }));
}

#[test]
fn test_edit_task_onto_occupied_day_is_conflict() {
    let (root, category): (UserRoot, Category) = root_with_category("Coding", "#0f0");
    let root: UserRoot = track(&root, &category, "2022-04-21T00:00:00.000Z", 30);
    let moved: ApiResult<TaskView> = add_task(
        &root,
        &add_task_request(&category, "2022-04-22T00:00:00.000Z", 10),
    )
    .unwrap();

    let err: ApiError = edit_task(
        &moved.new_root,
        &EditTaskRequest {
            to_edit_id: moved.response.id.to_string(),
            category_id: None,
            date: Some(String::from("2022-04-21T00:00:00.000Z")),
            minutes_spent: None,
        },
    )
    .unwrap_err();

    assert!(matches!(
        err,
        ApiError::Conflict { ref rule, .. } if rule == "unique_task_day"
    ));
}

#[test]
fn test_delete_task() {
    let (root, category): (UserRoot, Category) = root_with_category("Coding", "#0f0");
    let added: ApiResult<TaskView> = add_task(
        &root,
        &add_task_request(&category, "2022-04-21T00:00:00.000Z", 5),
    )
    .unwrap();

    let deleted: ApiResult<TaskView> = delete_task(
        &added.new_root,
        &DeleteRequest {
            to_delete_id: added.response.id.to_string(),
        },
    )
    .unwrap();

    assert_eq!(deleted.response.date, date!(2022 - 04 - 21));
    assert!(list_tasks(&deleted.new_root).is_empty());
}

#[test]
fn test_create_category_rejects_bad_color() {
    let root: UserRoot = UserRoot::new();

    let err: ApiError = create_category(
        &root,
        &CreateCategoryRequest {
            name: String::from("Reading"),
            color: String::from("blue"),
        },
    )
    .unwrap_err();

    assert!(matches!(
        err,
        ApiError::InvalidInput { ref field, .. } if field == "color"
    ));
}

#[test]
fn test_edit_category_archives() {
    let (root, category): (UserRoot, Category) = root_with_category("Reading", "#00f");
    let body: EditCategoryRequest = request(&format!(
        r##"{{ "toEditId": "{}", "isArchived": true, "color": "#0000ff" }}"##,
        category.id()
    ));

    let result: ApiResult<Category> = edit_category(&root, body).unwrap();

    assert!(result.response.is_archived);
    assert_eq!(result.response.color.value(), "#0000ff");
    assert_eq!(list_categories(&result.new_root), vec![result.response]);
}

#[test]
fn test_delete_category_removes_its_tasks() {
    let (root, category): (UserRoot, Category) = root_with_category("Coding", "#0f0");
    let root: UserRoot = track(&root, &category, "2022-04-21T00:00:00.000Z", 30);
    let root: UserRoot = track(&root, &category, "2022-04-22T00:00:00.000Z", 30);

    let result: ApiResult<Category> = delete_category(
        &root,
        &DeleteRequest {
            to_delete_id: category.id().to_string(),
        },
    )
    .unwrap();

    assert_eq!(result.response, category);
    assert!(list_tasks(&result.new_root).is_empty());
    assert!(list_categories(&result.new_root).is_empty());
}

#[test]
fn test_tasks_by_months_uses_explicit_reference_month() {
    let (root, category): (UserRoot, Category) = root_with_category("Coding", "#0f0");
    let root: UserRoot = track(&root, &category, "2022-03-10T00:00:00.000Z", 30);
    let root: UserRoot = track(&root, &category, "2022-04-21T00:00:00.000Z", 30);
    let query: TasksByMonthsQuery = TasksByMonthsQuery {
        days_amount: Some(String::from("1")),
        year: Some(String::from("2022")),
        month: Some(String::from("2")),
    };

    let history: TaskHistory = tasks_by_months(&root, &query, date!(2030 - 01 - 01)).unwrap();

    assert_eq!(history.total_days, 2);
    assert_eq!(history.total_earlier_days, 1);
    assert_eq!(history.collected_days, 1);
    assert_eq!(history.months.len(), 1);
    assert_eq!((history.months[0].year, history.months[0].month), (2022, 2));
}

#[test]
fn test_tasks_by_months_defaults_to_current_month() {
    let (root, category): (UserRoot, Category) = root_with_category("Coding", "#0f0");
    let root: UserRoot = track(&root, &category, "2022-04-21T00:00:00.000Z", 30);
    let root: UserRoot = track(&root, &category, "2022-05-02T00:00:00.000Z", 30);

    let history: TaskHistory =
        tasks_by_months(&root, &TasksByMonthsQuery::default(), date!(2022 - 04 - 25)).unwrap();

    assert_eq!(history.total_days, 2);
    assert_eq!(history.collected_days, 1);
    assert_eq!(history.months[0].month, 3);
}

#[test]
fn test_tasks_by_months_requires_year_and_month_together() {
    let root: UserRoot = UserRoot::new();
    let query: TasksByMonthsQuery = TasksByMonthsQuery {
        days_amount: None,
        year: Some(String::from("2022")),
        month: None,
    };

    let err: ApiError = tasks_by_months(&root, &query, date!(2022 - 04 - 25)).unwrap_err();
    assert_eq!(
        err,
        ApiError::from(InputError::Missing { field: "month" })
    );
}

#[test]
fn test_tasks_by_months_rejects_out_of_range_month() {
    let root: UserRoot = UserRoot::new();
    let query: TasksByMonthsQuery = TasksByMonthsQuery {
        days_amount: Some(String::from("0")),
        year: Some(String::from("2022")),
        month: Some(String::from("12")),
    };

    let err: ApiError = tasks_by_months(&root, &query, date!(2022 - 04 - 25)).unwrap_err();
    assert!(matches!(
        err,
        ApiError::InvalidInput { ref field, .. } if field == "month"
    ));
}

#[test]
fn test_reset_tracker() {
    let (root, _category): (UserRoot, Category) = root_with_category("Coding", "#0f0");
    let result: ApiResult<ResetResponse> = reset_tracker(&root);
    assert!(list_categories(&result.new_root).is_empty());
}
