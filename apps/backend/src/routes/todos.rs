use actix_web::{web, HttpResponse, Result};
use serde::Deserialize;
use tracing::info;

use crate::error::AppError;
use crate::extractors::current_user::CurrentUser;
use crate::state::app_state::AppState;

#[derive(Debug, Deserialize)]
pub struct TaskRequest {
    pub task: String,
}

fn todo_not_found(todo_id: i64) -> AppError {
    AppError::not_found("TODO_NOT_FOUND", format!("Todo {todo_id} not found"))
}

/// List all todos assigned to the caller.
async fn get_todos(
    user: CurrentUser,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    info!(user_id = user.user_id, "GET /api/todos");

    let todos = app_state.todos.get_all_assigned(user.user_id).await?;
    Ok(HttpResponse::Ok().json(todos))
}

async fn get_todo(
    user: CurrentUser,
    path: web::Path<i64>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let todo_id = path.into_inner();
    info!(user_id = user.user_id, todo_id, "GET /api/todos/{todo_id}");

    let todo = app_state
        .todos
        .get_assigned_by_id(user.user_id, todo_id)
        .await?
        .ok_or_else(|| todo_not_found(todo_id))?;

    Ok(HttpResponse::Ok().json(todo))
}

async fn create_todo(
    user: CurrentUser,
    body: web::Json<TaskRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    info!(user_id = user.user_id, task = %body.task, "POST /api/todos");

    if body.task.trim().is_empty() {
        return Err(AppError::bad_request(
            "INVALID_TASK",
            "Task cannot be empty".to_string(),
        ));
    }

    let todo = app_state.todos.create(user.user_id, &body.task).await?;
    Ok(HttpResponse::Ok().json(todo))
}

async fn update_todo(
    user: CurrentUser,
    path: web::Path<i64>,
    body: web::Json<TaskRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let todo_id = path.into_inner();
    info!(user_id = user.user_id, todo_id, task = %body.task, "PUT /api/todos/{todo_id}");

    if body.task.trim().is_empty() {
        return Err(AppError::bad_request(
            "INVALID_TASK",
            "Task cannot be empty".to_string(),
        ));
    }

    let updated = app_state
        .todos
        .update_task(user.user_id, todo_id, &body.task)
        .await?;
    if !updated {
        return Err(todo_not_found(todo_id));
    }

    Ok(HttpResponse::NoContent().finish())
}

async fn complete_todo(
    user: CurrentUser,
    path: web::Path<i64>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let todo_id = path.into_inner();
    info!(user_id = user.user_id, todo_id, "PUT /api/todos/{todo_id}/complete");

    let completed = app_state.todos.complete(user.user_id, todo_id).await?;
    if !completed {
        return Err(todo_not_found(todo_id));
    }

    Ok(HttpResponse::NoContent().finish())
}

async fn delete_todo(
    user: CurrentUser,
    path: web::Path<i64>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let todo_id = path.into_inner();
    info!(user_id = user.user_id, todo_id, "DELETE /api/todos/{todo_id}");

    let deleted = app_state.todos.delete(user.user_id, todo_id).await?;
    if !deleted {
        return Err(todo_not_found(todo_id));
    }

    Ok(HttpResponse::NoContent().finish())
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("")
            .route(web::get().to(get_todos))
            .route(web::post().to(create_todo)),
    );
    cfg.service(
        web::resource("/{todo_id}")
            .route(web::get().to(get_todo))
            .route(web::put().to(update_todo))
            .route(web::delete().to(delete_todo)),
    );
    cfg.service(web::resource("/{todo_id}/complete").route(web::put().to(complete_todo)));
}
