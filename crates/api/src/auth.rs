// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! User identity resolution.
//!
//! Every operation acts on exactly one user's aggregate. The identity is
//! supplied by the caller (the server reads it from a request header) and
//! is trusted as given; verifying it is the job of whatever sits in front
//! of the service.

use crate::error::AuthError;
use focusdesk_domain::UserId;

/// Resolves the user an operation acts on.
///
/// # Arguments
///
/// * `raw` - The identity supplied with the request, if any
///
/// # Returns
///
/// * `Ok(UserId)` with surrounding whitespace trimmed
///
/// # Errors
///
/// Returns `AuthError::AuthenticationFailed` if no identity was supplied
/// or it is blank.
pub fn resolve_user(raw: Option<&str>) -> Result<UserId, AuthError> {
    let Some(raw) = raw else {
        return Err(AuthError::AuthenticationFailed {
            reason: String::from("No user identity supplied"),
        });
    };

    let user_id: UserId = UserId::new(raw);
    if user_id.is_empty() {
        return Err(AuthError::AuthenticationFailed {
            reason: String::from("User identity is blank"),
        });
    }
    Ok(user_id)
}
