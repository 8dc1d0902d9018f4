use actix_web::{web, HttpResponse, Result};
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::repos::users::User;
use crate::services::users::{self, NewUser, UpdateUser};
use crate::state::app_state::AppState;

#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: i64,
    pub name: String,
    pub email: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        // password_hash never leaves the service layer
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateUserRequest {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub password: Option<String>,
}

async fn list_users(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let db = app_state.require_db()?;
    let users = users::list_users(db).await?;
    let body: Vec<UserResponse> = users.into_iter().map(UserResponse::from).collect();
    Ok(HttpResponse::Ok().json(body))
}

async fn get_user(
    path: web::Path<i64>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = app_state.require_db()?;
    let user = users::get_user(db, path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(UserResponse::from(user)))
}

async fn create_user(
    body: web::Json<CreateUserRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = app_state.require_db()?;
    let body = body.into_inner();

    if body.name.trim().is_empty() {
        return Err(AppError::bad_request("INVALID_NAME", "Name cannot be empty"));
    }
    if !body.email.contains('@') {
        return Err(AppError::bad_request("INVALID_EMAIL", "Email is not valid"));
    }

    let user = users::create_user(
        db,
        NewUser {
            name: body.name,
            email: body.email,
            password: body.password,
        },
    )
    .await?;

    Ok(HttpResponse::Created().json(UserResponse::from(user)))
}

async fn update_user(
    path: web::Path<i64>,
    body: web::Json<UpdateUserRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = app_state.require_db()?;
    let body = body.into_inner();

    let user = users::update_user(
        db,
        path.into_inner(),
        UpdateUser {
            name: body.name,
            email: body.email,
            password: body.password,
        },
    )
    .await?;

    Ok(HttpResponse::Ok().json(UserResponse::from(user)))
}

async fn delete_user(
    path: web::Path<i64>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = app_state.require_db()?;
    users::delete_user(db, path.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(list_users))
        .route("/", web::post().to(create_user))
        .route("/{user_id}", web::get().to(get_user))
        .route("/{user_id}", web::put().to(update_user))
        .route("/{user_id}", web::delete().to(delete_user));
}
