//! Request handlers

pub mod health;
pub mod dashboard;
pub mod damages;

use axum::http::HeaderMap;

use core_kernel::{OperationMetadata, UserId};

/// Port metadata for a request: correlation id and caller
pub(crate) fn request_metadata(headers: &HeaderMap, user: UserId) -> OperationMetadata {
    let metadata = headers
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .map(OperationMetadata::with_correlation_id)
        .unwrap_or_default();
    metadata.initiated_by(user.to_string())
}
