//! Request middleware: bearer authentication and audit logging

use std::time::Instant;

use axum::{
    body::Body,
    extract::State,
    http::{header, Request},
    middleware::Next,
    response::{IntoResponse, Response},
};
use tracing::{info, warn};

use crate::auth::{validate_token, Claims};
use crate::error::ApiError;
use crate::AppState;

fn bearer_token(request: &Request<Body>) -> Option<&str> {
    request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
}

/// Rejects requests without a valid token and stores its claims as an
/// extension for the handlers
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request<Body>,
    next: Next,
) -> Response {
    let Some(token) = bearer_token(&request) else {
        warn!(uri = %request.uri(), "Missing bearer token");
        return ApiError::Unauthorized.into_response();
    };

    match validate_token(token, &state.config.jwt_secret) {
        Ok(claims) => {
            request.extensions_mut().insert(claims);
            next.run(request).await
        }
        Err(e) => {
            warn!(uri = %request.uri(), error = %e, "Token rejected");
            ApiError::from(e).into_response()
        }
    }
}

/// Logs each API call with caller, role and outcome
pub async fn audit_middleware(request: Request<Body>, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let request_id = request
        .headers()
        .get("x-request-id")
        .and_then(|value| value.to_str().ok())
        .unwrap_or("-")
        .to_string();
    let (user, role) = request
        .extensions()
        .get::<Claims>()
        .map(|claims| (claims.sub.clone(), claims.role.as_str()))
        .unwrap_or_else(|| ("anonymous".to_string(), "none"));

    let started = Instant::now();
    let response = next.run(request).await;

    info!(
        %method,
        %uri,
        %request_id,
        %user,
        role,
        status = response.status().as_u16(),
        duration_ms = started.elapsed().as_millis() as u64,
        "API request"
    );

    response
}
