//! Authentication and authorization
//!
//! Bearer tokens carry the user id and a single role. Owners and tenants
//! share one account space; the role decides which damage fields a request
//! may touch.

use chrono::{Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use core_kernel::UserId;
use domain_damage::FixRole;

/// Role carried by a token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Owner,
    Tenant,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Owner => "owner",
            Role::Tenant => "tenant",
        }
    }
}

impl From<Role> for FixRole {
    fn from(role: Role) -> Self {
        match role {
            Role::Owner => FixRole::Owner,
            Role::Tenant => FixRole::Tenant,
        }
    }
}

/// JWT claims
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: String,
    pub role: Role,
    /// Expiration timestamp
    pub exp: i64,
    /// Issued at timestamp
    pub iat: i64,
}

impl Claims {
    /// Parses the subject as a user id
    pub fn user_id(&self) -> Result<UserId, AuthError> {
        self.sub.parse().map_err(|_| AuthError::InvalidToken)
    }

    /// Returns the user id when the token carries `role`
    pub fn require(&self, role: Role) -> Result<UserId, AuthError> {
        if self.role != role {
            return Err(AuthError::MissingRole(role));
        }
        self.user_id()
    }
}

/// Auth errors
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Invalid token")]
    InvalidToken,
    #[error("Token expired")]
    TokenExpired,
    #[error("Missing role: {0:?}")]
    MissingRole(Role),
}

/// Creates a new JWT token
///
/// # Arguments
///
/// * `user_id` - User identifier
/// * `role` - Owner or tenant
/// * `secret` - JWT secret key
/// * `expiration_secs` - Token validity in seconds
pub fn create_token(
    user_id: UserId,
    role: Role,
    secret: &str,
    expiration_secs: u64,
) -> Result<String, AuthError> {
    let now = Utc::now();
    let exp = now + Duration::seconds(expiration_secs as i64);

    let claims = Claims {
        sub: user_id.to_string(),
        role,
        exp: exp.timestamp(),
        iat: now.timestamp(),
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|_| AuthError::InvalidToken)
}

/// Validates a JWT token
pub fn validate_token(token: &str, secret: &str) -> Result<Claims, AuthError> {
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map_err(|e| match e.kind() {
        ErrorKind::ExpiredSignature => AuthError::TokenExpired,
        _ => AuthError::InvalidToken,
    })?;

    Ok(token_data.claims)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_round_trip() {
        let user = UserId::new_v7();
        let token = create_token(user, Role::Tenant, "secret", 60).unwrap();
        let claims = validate_token(&token, "secret").unwrap();

        assert_eq!(claims.user_id().unwrap(), user);
        assert_eq!(claims.role, Role::Tenant);
    }

    #[test]
    fn test_wrong_secret_is_rejected() {
        let token = create_token(UserId::new_v7(), Role::Owner, "secret", 60).unwrap();

        assert!(matches!(validate_token(&token, "other"), Err(AuthError::InvalidToken)));
    }

    #[test]
    fn test_require_role() {
        let user = UserId::new_v7();
        let claims = Claims {
            sub: user.to_string(),
            role: Role::Owner,
            exp: 0,
            iat: 0,
        };

        assert_eq!(claims.require(Role::Owner).unwrap(), user);
        assert!(matches!(claims.require(Role::Tenant), Err(AuthError::MissingRole(Role::Tenant))));
    }
}
