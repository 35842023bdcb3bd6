// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use focusdesk::UserRoot;
use focusdesk_domain::{Category, Group, PlannedPomodoro};
use serde::de::DeserializeOwned;

use crate::{
    ApiResult, CreateCategoryRequest, CreateGroupRequest, CreatePlannedRequest, create_category,
    create_group, create_planned,
};

/// Builds a request from its JSON body, the way the server receives it.
pub fn request<T: DeserializeOwned>(body: &str) -> T {
    serde_json::from_str(body).expect("test request body should deserialize")
}

pub fn root_with_group(name: &str) -> (UserRoot, Group) {
    let root: UserRoot = UserRoot::new();
    let result: ApiResult<Group> = create_group(
        &root,
        &CreateGroupRequest {
            name: name.to_string(),
        },
    )
    .unwrap();
    (result.new_root, result.response)
}

pub fn root_with_category(name: &str, color: &str) -> (UserRoot, Category) {
    let root: UserRoot = UserRoot::new();
    let result: ApiResult<Category> = create_category(
        &root,
        &CreateCategoryRequest {
            name: name.to_string(),
            color: color.to_string(),
        },
    )
    .unwrap();
    (result.new_root, result.response)
}

pub fn root_with_plan(name: &str, amount: u32) -> (UserRoot, PlannedPomodoro) {
    let root: UserRoot = UserRoot::new();
    let result: ApiResult<PlannedPomodoro> = create_planned(
        &root,
        &CreatePlannedRequest {
            name: name.to_string(),
            pomodoros_amount: amount,
        },
    )
    .unwrap();
    (result.new_root, result.response)
}
