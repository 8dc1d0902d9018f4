//! Task repository. Every lookup that serves a protected endpoint is scoped
//! by the owning user's id; a task belonging to someone else is
//! indistinguishable from a missing one.

use sea_orm::{ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, QueryFilter, QueryOrder, Set};

use crate::entities::tasks;
use crate::error::AppError;

/// Task domain model
#[derive(Debug, Clone, PartialEq)]
pub struct Task {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub status: String,
    pub user_id: i64,
}

impl From<tasks::Model> for Task {
    fn from(model: tasks::Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            description: model.description,
            status: model.status,
            user_id: model.user_id,
        }
    }
}

pub async fn list_for_user<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
) -> Result<Vec<Task>, AppError> {
    let models = tasks::Entity::find()
        .filter(tasks::Column::UserId.eq(user_id))
        .order_by_asc(tasks::Column::Id)
        .all(conn)
        .await
        .map_err(|e| AppError::db(format!("Failed to list tasks: {e}")))?;
    Ok(models.into_iter().map(Task::from).collect())
}

pub async fn find_for_user<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    task_id: i64,
    user_id: i64,
) -> Result<Option<Task>, AppError> {
    let task = tasks::Entity::find()
        .filter(tasks::Column::Id.eq(task_id))
        .filter(tasks::Column::UserId.eq(user_id))
        .one(conn)
        .await
        .map_err(|e| AppError::db(format!("Failed to query task: {e}")))?;
    Ok(task.map(Task::from))
}

pub async fn find_by_title<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    title: &str,
) -> Result<Option<Task>, AppError> {
    let task = tasks::Entity::find()
        .filter(tasks::Column::Title.eq(title))
        .one(conn)
        .await
        .map_err(|e| AppError::db(format!("Failed to query task by title: {e}")))?;
    Ok(task.map(Task::from))
}

pub async fn create<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    title: &str,
    description: Option<&str>,
    status: &str,
    user_id: i64,
) -> Result<Task, AppError> {
    let active = tasks::ActiveModel {
        id: NotSet,
        title: Set(title.to_string()),
        description: Set(description.map(|d| d.to_string())),
        status: Set(status.to_string()),
        user_id: Set(user_id),
    };

    let task = active
        .insert(conn)
        .await
        .map_err(|e| AppError::db(format!("Failed to create task: {e}")))?;
    Ok(Task::from(task))
}

pub async fn update<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    task: Task,
) -> Result<Task, AppError> {
    let active = tasks::ActiveModel {
        id: Set(task.id),
        title: Set(task.title),
        description: Set(task.description),
        status: Set(task.status),
        user_id: Set(task.user_id),
    };

    let task = active
        .update(conn)
        .await
        .map_err(|e| AppError::db(format!("Failed to update task: {e}")))?;
    Ok(Task::from(task))
}

pub async fn delete<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    task_id: i64,
    user_id: i64,
) -> Result<bool, AppError> {
    let result = tasks::Entity::delete_many()
        .filter(tasks::Column::Id.eq(task_id))
        .filter(tasks::Column::UserId.eq(user_id))
        .exec(conn)
        .await
        .map_err(|e| AppError::db(format!("Failed to delete task: {e}")))?;
    Ok(result.rows_affected > 0)
}
