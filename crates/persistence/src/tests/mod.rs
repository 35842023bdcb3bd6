// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]


use focusdesk::UserRoot;
use focusdesk_domain::{Category, Entity, HexColor, UserId};
use time::macros::date;

pub fn create_test_user() -> UserId {
    UserId::new("user-123")
}

pub fn create_test_root() -> UserRoot {
    let mut root: UserRoot = UserRoot::new();
    root.create_group("Home").unwrap();
    root.create_planned("Essay", 2).unwrap();
    let category: Category = root
        .create_category("Reading", HexColor::parse("#abc").unwrap())
        .unwrap();
    root.add_task(category.id(), date!(2022 - 10 - 31), 30)
        .unwrap();
    root
}
