//! User repository: the identity store consumed by the auth flows.
//!
//! Functions are generic over `ConnectionTrait` so they run against a pooled
//! connection or a transaction alike. The auth core only ever reads from
//! here; writes belong to the user-management surface.

use sea_orm::{ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, QueryFilter, QueryOrder, Set};

use crate::entities::users;
use crate::error::AppError;

/// User domain model
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub password_hash: String,
}

impl From<users::Model> for User {
    fn from(model: users::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            email: model.email,
            password_hash: model.password_hash,
        }
    }
}

pub async fn find_by_name<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    name: &str,
) -> Result<Option<User>, AppError> {
    let user = users::Entity::find()
        .filter(users::Column::Name.eq(name))
        .one(conn)
        .await
        .map_err(|e| AppError::db(format!("Failed to query user by name: {e}")))?;
    Ok(user.map(User::from))
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
) -> Result<Option<User>, AppError> {
    let user = users::Entity::find_by_id(user_id)
        .one(conn)
        .await
        .map_err(|e| AppError::db(format!("Failed to query user: {e}")))?;
    Ok(user.map(User::from))
}

pub async fn list<C: ConnectionTrait + Send + Sync>(conn: &C) -> Result<Vec<User>, AppError> {
    let models = users::Entity::find()
        .order_by_asc(users::Column::Id)
        .all(conn)
        .await
        .map_err(|e| AppError::db(format!("Failed to list users: {e}")))?;
    Ok(models.into_iter().map(User::from).collect())
}

pub async fn create<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    name: &str,
    email: &str,
    password_hash: &str,
) -> Result<User, AppError> {
    let active = users::ActiveModel {
        id: NotSet,
        name: Set(name.to_string()),
        email: Set(email.to_string()),
        password_hash: Set(password_hash.to_string()),
    };

    let user = active.insert(conn).await.map_err(map_user_write_err)?;
    Ok(User::from(user))
}

pub async fn update<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user: User,
) -> Result<User, AppError> {
    let active = users::ActiveModel {
        id: Set(user.id),
        name: Set(user.name),
        email: Set(user.email),
        password_hash: Set(user.password_hash),
    };

    let user = active.update(conn).await.map_err(map_user_write_err)?;
    Ok(User::from(user))
}

pub async fn delete<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
) -> Result<bool, AppError> {
    let result = users::Entity::delete_by_id(user_id)
        .exec(conn)
        .await
        .map_err(|e| AppError::db(format!("Failed to delete user: {e}")))?;
    Ok(result.rows_affected > 0)
}

fn map_user_write_err(e: sea_orm::DbErr) -> AppError {
    let msg = e.to_string();
    // Unique constraint violations on name/email surface as conflicts
    if msg.to_lowercase().contains("unique") || msg.to_lowercase().contains("duplicate") {
        AppError::conflict("USER_ALREADY_EXISTS", "A user with this name or email already exists")
    } else {
        AppError::db(format!("Failed to write user: {msg}"))
    }
}
