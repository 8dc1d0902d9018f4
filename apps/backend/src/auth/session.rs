//! Session guard: resolves a presented bearer token to an authenticated
//! user, or rejects the request.
//!
//! This is the single canonical token-verification path. Handlers consume it
//! through the `CurrentUser` extractor; nothing else re-implements decode or
//! expiry logic.

use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

use crate::auth::jwt::decode_access_token;
use crate::state::security_config::SecurityConfig;
use crate::AppError;

/// The identity a protected handler receives. Recomputed from the token on
/// every request; nothing is persisted.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub username: String,
    pub id: i64,
}

/// Resolve an optional bearer token into an authenticated user.
///
/// Failure modes, in order:
/// - no token → `MissingToken`
/// - undecodable or bad signature → `InvalidToken`
/// - `sub` or `id` absent → `IncompleteClaims`
/// - `exp` absent → `MissingExpiry`
/// - `now` past `exp` → `Expired`
///
/// All failures are terminal for the request; clients re-login to recover.
pub fn resolve_bearer(
    token: Option<&str>,
    now: SystemTime,
    security: &SecurityConfig,
) -> Result<AuthenticatedUser, AppError> {
    let token = match token {
        Some(t) if !t.is_empty() => t,
        _ => return Err(AppError::MissingToken),
    };

    let claims = decode_access_token(token, security)?;

    let (username, id) = match (claims.sub, claims.id) {
        (Some(sub), Some(id)) => (sub, id),
        _ => return Err(AppError::IncompleteClaims),
    };

    let exp = claims.exp.ok_or(AppError::MissingExpiry)?;

    let now_secs = now
        .duration_since(UNIX_EPOCH)
        .map_err(|_| AppError::internal("Failed to get current time".to_string()))?
        .as_secs() as i64;
    if now_secs > exp {
        return Err(AppError::Expired);
    }

    Ok(AuthenticatedUser { username, id })
}
