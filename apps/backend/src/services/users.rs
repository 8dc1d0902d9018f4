//! User management: registration and account maintenance. This is the
//! collaborator that writes identities; the auth flows only read them.

use sea_orm::ConnectionTrait;
use tracing::info;

use crate::auth::password::{hash_password, is_password_strong, MIN_PASSWORD_LEN};
use crate::error::AppError;
use crate::repos::users::{self, User};

pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
}

pub struct UpdateUser {
    pub name: String,
    pub email: String,
    /// When present, the password is re-hashed and replaced.
    pub password: Option<String>,
}

pub async fn list_users<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Vec<User>, AppError> {
    users::list(conn).await
}

pub async fn get_user<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
) -> Result<User, AppError> {
    users::find_by_id(conn, user_id)
        .await?
        .ok_or_else(|| AppError::not_found("USER_NOT_FOUND", "User not found"))
}

pub async fn create_user<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    new_user: NewUser,
) -> Result<User, AppError> {
    validate_password(&new_user.password)?;

    let password_hash = hash_password(&new_user.password)?;
    let user = users::create(conn, &new_user.name, &new_user.email, &password_hash).await?;

    info!(user_id = user.id, "user created");
    Ok(user)
}

pub async fn update_user<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
    update: UpdateUser,
) -> Result<User, AppError> {
    let mut user = get_user(conn, user_id).await?;

    user.name = update.name;
    user.email = update.email;
    if let Some(password) = update.password {
        validate_password(&password)?;
        user.password_hash = hash_password(&password)?;
    }

    users::update(conn, user).await
}

pub async fn delete_user<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
) -> Result<(), AppError> {
    let deleted = users::delete(conn, user_id).await?;
    if !deleted {
        return Err(AppError::not_found("USER_NOT_FOUND", "User not found"));
    }
    info!(user_id, "user deleted");
    Ok(())
}

/// Registration-boundary password policy. The auth core itself never
/// enforces strength; this gate only guards account creation.
fn validate_password(password: &str) -> Result<(), AppError> {
    if password.len() < MIN_PASSWORD_LEN {
        return Err(AppError::bad_request(
            "PASSWORD_TOO_SHORT",
            format!("Password must be at least {MIN_PASSWORD_LEN} characters"),
        ));
    }
    if !is_password_strong(password) {
        return Err(AppError::bad_request(
            "PASSWORD_TOO_WEAK",
            "Password must contain at least one letter and one digit",
        ));
    }
    Ok(())
}
