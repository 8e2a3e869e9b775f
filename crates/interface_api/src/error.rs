//! API error handling

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use tracing::error;

use core_kernel::PortError;
use domain_damage::DamageError;
use domain_dashboard::DashboardError;

use crate::auth::AuthError;

/// API error types
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Damage already fixed")]
    AlreadyFixed,

    #[error("Damage is fixed and can no longer be updated")]
    DamageFixed,

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<String>>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type) = match &self {
            ApiError::NotFound(_) => (StatusCode::NOT_FOUND, "not_found"),
            ApiError::BadRequest(_) => (StatusCode::BAD_REQUEST, "bad_request"),
            ApiError::Unauthorized => (StatusCode::UNAUTHORIZED, "unauthorized"),
            ApiError::Forbidden(_) => (StatusCode::FORBIDDEN, "forbidden"),
            ApiError::AlreadyFixed => (StatusCode::CONFLICT, "already_fixed"),
            ApiError::DamageFixed => (StatusCode::UNPROCESSABLE_ENTITY, "cannot_update_fixed_damage"),
            ApiError::Conflict(_) => (StatusCode::CONFLICT, "conflict"),
            ApiError::Validation(_) => (StatusCode::UNPROCESSABLE_ENTITY, "validation_error"),
            ApiError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "internal_error"),
        };

        let body = ErrorResponse {
            error: error_type.to_string(),
            message: self.to_string(),
            details: None,
        };

        (status, Json(body)).into_response()
    }
}

impl From<DamageError> for ApiError {
    fn from(err: DamageError) -> Self {
        match err {
            DamageError::AlreadyFixed => ApiError::AlreadyFixed,
            DamageError::CannotUpdateFixedDamage => ApiError::DamageFixed,
            DamageError::Conflict(message) => ApiError::Conflict(message),
            DamageError::NotFound(id) => ApiError::NotFound(format!("Damage {}", id)),
            DamageError::Storage(e) => {
                error!(error = %e, "Damage storage failed");
                ApiError::Internal("storage failure".to_string())
            }
        }
    }
}

impl From<DashboardError> for ApiError {
    fn from(err: DashboardError) -> Self {
        match err {
            DashboardError::PreconditionViolation(violation) => {
                error!(
                    invariant = violation.invariant,
                    detail = %violation.detail,
                    "Precondition violated while building dashboard"
                );
                ApiError::Internal("inconsistent property data".to_string())
            }
            DashboardError::Localization { key, message } => {
                error!(%key, %message, "Reminder localization failed");
                ApiError::Internal("localization failure".to_string())
            }
        }
    }
}

impl From<PortError> for ApiError {
    fn from(err: PortError) -> Self {
        match err {
            PortError::NotFound { entity_type, id } => {
                ApiError::NotFound(format!("{} {}", entity_type, id))
            }
            PortError::Validation { message, .. } => ApiError::Validation(message),
            PortError::Conflict { message } => ApiError::Conflict(message),
            PortError::Unavailable { message, .. } => {
                error!(%message, "Store unavailable");
                ApiError::Internal("storage failure".to_string())
            }
        }
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::MissingRole(role) => ApiError::Forbidden(format!("requires {} role", role.as_str())),
            AuthError::InvalidToken | AuthError::TokenExpired => ApiError::Unauthorized,
        }
    }
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(errors: validator::ValidationErrors) -> Self {
        ApiError::Validation(errors.to_string())
    }
}
