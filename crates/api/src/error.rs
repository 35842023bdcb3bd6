// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use crate::input::InputError;
use focusdesk::CoreError;
use focusdesk_domain::DomainError;
use focusdesk_persistence::PersistenceError;

/// Identity resolution errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    /// No usable user identity accompanied the request.
    AuthenticationFailed {
        /// The reason authentication failed.
        reason: String,
    },
}

impl std::fmt::Display for AuthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AuthenticationFailed { reason } => {
                write!(f, "Authentication failed: {reason}")
            }
        }
    }
}

impl std::error::Error for AuthError {}

/// API-level errors.
///
/// These are distinct from domain/core errors and represent the API contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The request carried no usable user identity.
    AuthenticationFailed {
        /// The reason authentication failed.
        reason: String,
    },
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A requested resource was not found.
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// The request collides with existing data.
    Conflict {
        /// The uniqueness rule that was violated.
        rule: String,
        /// A human-readable description of the conflict.
        message: String,
    },
    /// An internal error occurred.
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AuthenticationFailed { reason } => {
                write!(f, "Authentication failed: {reason}")
            }
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::ResourceNotFound {
                resource_type,
                message,
            } => {
                write!(f, "{resource_type} not found: {message}")
            }
            Self::Conflict { rule, message } => {
                write!(f, "Conflict ({rule}): {message}")
            }
            Self::Internal { message } => {
                write!(f, "Internal error: {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::AuthenticationFailed { reason } => Self::AuthenticationFailed { reason },
        }
    }
}

impl From<InputError> for ApiError {
    fn from(err: InputError) -> Self {
        Self::InvalidInput {
            field: err.field().to_string(),
            message: err.to_string(),
        }
    }
}

impl From<PersistenceError> for ApiError {
    fn from(err: PersistenceError) -> Self {
        Self::Internal {
            message: err.to_string(),
        }
    }
}

fn invalid_input(field: &str, err: &DomainError) -> ApiError {
    ApiError::InvalidInput {
        field: field.to_string(),
        message: err.to_string(),
    }
}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked directly.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    match &err {
        DomainError::NotFound { kind, .. } => ApiError::ResourceNotFound {
            resource_type: kind.to_string(),
            message: err.to_string(),
        },
        DomainError::DuplicateName { .. } => ApiError::Conflict {
            rule: String::from("unique_name"),
            message: err.to_string(),
        },
        DomainError::DuplicateTask { .. } => ApiError::Conflict {
            rule: String::from("unique_task_day"),
            message: err.to_string(),
        },
        DomainError::DuplicateId { .. } => ApiError::Conflict {
            rule: String::from("unique_id"),
            message: err.to_string(),
        },
        DomainError::InvalidName(_) => invalid_input("name", &err),
        DomainError::InvalidNote(_) => invalid_input("note", &err),
        DomainError::InvalidColor(_) => invalid_input("color", &err),
        DomainError::InvalidMinutes(_) | DomainError::MinutesOverflow { .. } => {
            invalid_input("minutesSpent", &err)
        }
        DomainError::InvalidPomodorosAmount(_) => invalid_input("pomodorosAmount", &err),
        DomainError::InvalidDaysAmount(_) => invalid_input("daysAmount", &err),
        DomainError::InvalidMonth(_) => invalid_input("month", &err),
        DomainError::InvalidYear(_) => invalid_input("year", &err),
        DomainError::InvalidTimeRange { .. } => invalid_input("endTime", &err),
    }
}

/// Translates a core error into an API error.
#[must_use]
pub fn translate_core_error(err: CoreError) -> ApiError {
    match err {
        CoreError::DomainViolation(domain_err) => translate_domain_error(domain_err),
    }
}
