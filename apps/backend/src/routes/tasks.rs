use actix_web::{web, HttpResponse, Result};
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::extractors::current_user::CurrentUser;
use crate::repos::tasks::Task;
use crate::services::tasks::{self, NewTask, TaskStatus, UpdateTask};
use crate::state::app_state::AppState;

#[derive(Debug, Serialize)]
pub struct TaskResponse {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub status: String,
}

impl From<Task> for TaskResponse {
    fn from(task: Task) -> Self {
        Self {
            id: task.id,
            title: task.title,
            description: task.description,
            status: task.status,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateTaskRequest {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Unknown status tokens are rejected by serde at the boundary.
    #[serde(default)]
    pub status: TaskStatus,
}

#[derive(Debug, Deserialize)]
pub struct UpdateTaskRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub status: Option<TaskStatus>,
}

async fn list_tasks(
    current_user: CurrentUser,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = app_state.require_db()?;
    let tasks = tasks::list_tasks(db, current_user.id()).await?;
    let body: Vec<TaskResponse> = tasks.into_iter().map(TaskResponse::from).collect();
    Ok(HttpResponse::Ok().json(body))
}

async fn get_task(
    path: web::Path<i64>,
    current_user: CurrentUser,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = app_state.require_db()?;
    let task = tasks::get_task(db, path.into_inner(), current_user.id()).await?;
    Ok(HttpResponse::Ok().json(TaskResponse::from(task)))
}

async fn create_task(
    body: web::Json<CreateTaskRequest>,
    current_user: CurrentUser,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = app_state.require_db()?;
    let body = body.into_inner();

    let task = tasks::create_task(
        db,
        current_user.id(),
        NewTask {
            title: body.title,
            description: body.description,
            status: body.status,
        },
    )
    .await?;

    Ok(HttpResponse::Created().json(TaskResponse::from(task)))
}

async fn update_task(
    path: web::Path<i64>,
    body: web::Json<UpdateTaskRequest>,
    current_user: CurrentUser,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = app_state.require_db()?;
    let body = body.into_inner();

    let task = tasks::update_task(
        db,
        path.into_inner(),
        current_user.id(),
        UpdateTask {
            title: body.title,
            description: body.description,
            status: body.status,
        },
    )
    .await?;

    Ok(HttpResponse::Ok().json(TaskResponse::from(task)))
}

async fn delete_task(
    path: web::Path<i64>,
    current_user: CurrentUser,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = app_state.require_db()?;
    tasks::delete_task(db, path.into_inner(), current_user.id()).await?;
    Ok(HttpResponse::NoContent().finish())
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(list_tasks))
        .route("/", web::post().to(create_task))
        .route("/{task_id}", web::get().to(get_task))
        .route("/{task_id}", web::put().to(update_task))
        .route("/{task_id}", web::delete().to(delete_task));
}
