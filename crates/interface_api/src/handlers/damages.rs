//! Damage handlers
//!
//! Each handler locates the damage, checks the caller is the owner of its
//! property or the tenant of its lease, then hands the damage to the
//! `DamageService`.

use axum::{
    extract::{Path, State},
    http::HeaderMap,
    Extension, Json,
};
use validator::Validate;

use core_kernel::{DamageId, UserId};
use domain_property::DamageLocation;

use crate::auth::{Claims, Role};
use crate::dto::damages::{DamageResponse, OwnerDamageRequest, TenantDamageRequest};
use crate::error::ApiError;
use crate::handlers::request_metadata;
use crate::AppState;

fn parse_damage_id(raw: &str) -> Result<DamageId, ApiError> {
    raw.parse()
        .map_err(|_| ApiError::BadRequest(format!("invalid damage id: {}", raw)))
}

fn ensure_party(location: &DamageLocation, role: Role, user: UserId) -> Result<(), ApiError> {
    let allowed = match role {
        Role::Owner => location.owner_id == user,
        Role::Tenant => location.tenant_id == user,
    };
    if !allowed {
        return Err(ApiError::Forbidden("not a party to this damage".to_string()));
    }
    Ok(())
}

async fn locate(
    state: &AppState,
    headers: &HeaderMap,
    raw_id: &str,
    role: Role,
    user: UserId,
) -> Result<DamageLocation, ApiError> {
    let damage_id = parse_damage_id(raw_id)?;
    let location = state
        .properties
        .locate_damage(damage_id, Some(request_metadata(headers, user)))
        .await?;
    ensure_party(&location, role, user)?;
    Ok(location)
}

/// Confirms the fix for the caller's role
pub async fn mark_fixed(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<Json<DamageResponse>, ApiError> {
    let user = claims.user_id()?;
    let location = locate(&state, &headers, &id, claims.role, user).await?;

    let damage = state
        .damages
        .mark_fixed(location.damage, claims.role.into())
        .await?;
    Ok(Json(damage.into()))
}

/// Owner update: read flag and planned fix date
pub async fn update_as_owner(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Json(request): Json<OwnerDamageRequest>,
) -> Result<Json<DamageResponse>, ApiError> {
    let user = claims.require(Role::Owner)?;
    let location = locate(&state, &headers, &id, Role::Owner, user).await?;

    let damage = state
        .damages
        .update_as_owner(location.damage, request.into())
        .await?;
    Ok(Json(damage.into()))
}

/// Tenant update: comment, priority and new pictures
pub async fn update_as_tenant(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Json(request): Json<TenantDamageRequest>,
) -> Result<Json<DamageResponse>, ApiError> {
    let user = claims.require(Role::Tenant)?;
    request.validate()?;
    let location = locate(&state, &headers, &id, Role::Tenant, user).await?;

    let damage = state
        .damages
        .update_as_tenant(location.damage, request.into())
        .await?;
    Ok(Json(damage.into()))
}
