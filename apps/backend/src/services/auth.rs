//! Authentication flow: credentials in, signed access token out.

use std::time::SystemTime;

use sea_orm::ConnectionTrait;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::auth::jwt::mint_access_token;
use crate::auth::password::verify_password;
use crate::error::AppError;
use crate::repos::users::{self, User};
use crate::state::security_config::SecurityConfig;

/// Response body of a successful login.
#[derive(Debug, Serialize, Deserialize)]
pub struct IssuedToken {
    pub access_token: String,
    pub token_type: String,
}

/// Verify a (username, password) pair against the identity store.
///
/// An unknown username and a wrong password both fail with
/// `InvalidCredentials`; the distinction is never surfaced so the endpoint
/// cannot be used to probe which accounts exist.
pub async fn authenticate<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    username: &str,
    password: &str,
) -> Result<User, AppError> {
    let user = users::find_by_name(conn, username).await?;

    match user {
        Some(user) if verify_password(password, &user.password_hash) => {
            debug!(user_id = user.id, "credentials verified");
            Ok(user)
        }
        _ => {
            debug!("authentication failed");
            Err(AppError::InvalidCredentials)
        }
    }
}

/// Authenticate and issue a bearer access token with the configured ttl.
///
/// Stateless: nothing is written anywhere; the token alone carries the
/// session.
pub async fn login<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    username: &str,
    password: &str,
    security: &SecurityConfig,
) -> Result<IssuedToken, AppError> {
    let user = authenticate(conn, username, password).await?;

    let access_token = mint_access_token(&user.name, user.id, SystemTime::now(), security)?;
    info!(user_id = user.id, "access token issued");

    Ok(IssuedToken {
        access_token,
        token_type: "bearer".to_string(),
    })
}
