// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use focusdesk_domain::UserId;

use crate::{ApiError, AuthError, resolve_user};

#[test]
fn test_resolve_user_trims_identity() {
    let user_id: UserId = resolve_user(Some("  user-42 ")).unwrap();
    assert_eq!(user_id.value(), "user-42");
}

#[test]
fn test_resolve_user_fails_without_identity() {
    let result: Result<UserId, AuthError> = resolve_user(None);
    assert!(matches!(
        result.unwrap_err(),
        AuthError::AuthenticationFailed { .. }
    ));
}

#[test]
fn test_resolve_user_fails_with_blank_identity() {
    let err: AuthError = resolve_user(Some("   ")).unwrap_err();
    let api_err: ApiError = err.into();
    assert!(matches!(api_err, ApiError::AuthenticationFailed { .. }));
}
