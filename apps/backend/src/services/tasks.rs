//! Task management, always scoped to the authenticated user.

use sea_orm::ConnectionTrait;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::AppError;
use crate::repos::tasks::{self, Task};

/// Allowed task states, stored as text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    New,
    InProgress,
    Done,
}

impl TaskStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::New => "new",
            TaskStatus::InProgress => "in_progress",
            TaskStatus::Done => "done",
        }
    }
}

impl Default for TaskStatus {
    fn default() -> Self {
        TaskStatus::New
    }
}

pub struct NewTask {
    pub title: String,
    pub description: Option<String>,
    pub status: TaskStatus,
}

pub struct UpdateTask {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<TaskStatus>,
}

pub async fn list_tasks<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
) -> Result<Vec<Task>, AppError> {
    tasks::list_for_user(conn, user_id).await
}

pub async fn get_task<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    task_id: i64,
    user_id: i64,
) -> Result<Task, AppError> {
    tasks::find_for_user(conn, task_id, user_id)
        .await?
        .ok_or_else(|| AppError::not_found("TASK_NOT_FOUND", "Task not found"))
}

pub async fn create_task<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
    new_task: NewTask,
) -> Result<Task, AppError> {
    if new_task.title.trim().is_empty() {
        return Err(AppError::bad_request("INVALID_TITLE", "Title cannot be empty"));
    }
    if tasks::find_by_title(conn, &new_task.title).await?.is_some() {
        return Err(AppError::conflict(
            "TASK_ALREADY_EXISTS",
            "A task with this title already exists",
        ));
    }

    let task = tasks::create(
        conn,
        &new_task.title,
        new_task.description.as_deref(),
        new_task.status.as_str(),
        user_id,
    )
    .await?;

    info!(task_id = task.id, user_id, "task created");
    Ok(task)
}

pub async fn update_task<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    task_id: i64,
    user_id: i64,
    update: UpdateTask,
) -> Result<Task, AppError> {
    let mut task = get_task(conn, task_id, user_id).await?;

    if let Some(title) = update.title {
        if title.trim().is_empty() {
            return Err(AppError::bad_request("INVALID_TITLE", "Title cannot be empty"));
        }
        task.title = title;
    }
    if let Some(description) = update.description {
        task.description = Some(description);
    }
    if let Some(status) = update.status {
        task.status = status.as_str().to_string();
    }

    tasks::update(conn, task).await
}

pub async fn delete_task<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    task_id: i64,
    user_id: i64,
) -> Result<(), AppError> {
    let deleted = tasks::delete(conn, task_id, user_id).await?;
    if !deleted {
        return Err(AppError::not_found("TASK_NOT_FOUND", "Task not found"));
    }
    info!(task_id, user_id, "task deleted");
    Ok(())
}
