// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Request extractors for the server.
//!
//! [`CurrentUser`] resolves the user a request acts on from the
//! `x-user-id` header. [`JsonBody`] wraps axum's JSON extractor so that a
//! malformed body is reported with the same error shape as every other
//! invalid input.

use axum::{
    Json,
    extract::{FromRequest, FromRequestParts, Request, rejection::JsonRejection},
    http::{StatusCode, request::Parts},
};
use focusdesk_api::{ApiError, resolve_user};
use focusdesk_domain::UserId;
use tracing::{debug, warn};

use crate::HttpError;

/// Header carrying the caller's user identity.
pub const USER_ID_HEADER: &str = "x-user-id";

/// Extractor for the user a request acts on.
///
/// # Usage
///
/// ```ignore
/// async fn my_handler(
///     CurrentUser(user_id): CurrentUser,
/// ) -> Result<Json<Response>, HttpError> {
///     // user_id: UserId
///     Ok(Json(Response { ... }))
/// }
/// ```
///
/// # Errors
///
/// Rejects with HTTP 401 Unauthorized if the header is missing, blank or
/// not valid UTF-8.
pub struct CurrentUser(pub UserId);

impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let raw: Option<&str> = match parts.headers.get(USER_ID_HEADER) {
            None => None,
            Some(value) => Some(value.to_str().map_err(|_| {
                warn!("Invalid {USER_ID_HEADER} header encoding");
                HttpError {
                    status: StatusCode::UNAUTHORIZED,
                    message: format!("Invalid {USER_ID_HEADER} header encoding"),
                }
            })?),
        };

        let user_id: UserId = resolve_user(raw).map_err(|e| {
            debug!(error = %e, "Request without user identity");
            HttpError::from(ApiError::from(e))
        })?;

        Ok(Self(user_id))
    }
}

/// JSON body extractor reporting malformed bodies as `400 Bad Request`.
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => {
                debug!(error = %rejection.body_text(), "Rejected request body");
                Err(HttpError {
                    status: StatusCode::BAD_REQUEST,
                    message: rejection.body_text(),
                })
            }
        }
    }
}
