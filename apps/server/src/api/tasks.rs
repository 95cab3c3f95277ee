use std::sync::Arc;

use crate::{
    auth::Caller,
    error::ApiResult,
    main_lib::AppState,
    models::{Task, TaskParams},
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};

#[utoipa::path(
    get,
    path = "/api/v1/manager/goals/{goal_id}/tasks",
    responses((status = 200, body = [Task]), (status = 404))
)]
pub(crate) async fn list_tasks(
    Path(goal_id): Path<String>,
    State(state): State<Arc<AppState>>,
    Caller(ctx): Caller,
) -> ApiResult<Json<Vec<Task>>> {
    let tasks = state.task_service.get_tasks(&ctx, &goal_id)?;
    Ok(Json(tasks.into_iter().map(Task::from).collect()))
}

#[utoipa::path(
    post,
    path = "/api/v1/manager/goals/{goal_id}/tasks",
    request_body = TaskParams,
    responses((status = 201, body = Task), (status = 404), (status = 422))
)]
pub(crate) async fn create_task(
    Path(goal_id): Path<String>,
    State(state): State<Arc<AppState>>,
    Caller(ctx): Caller,
    Json(params): Json<TaskParams>,
) -> ApiResult<(StatusCode, Json<Task>)> {
    let task = state
        .task_service
        .create_task(&ctx, &goal_id, params.into())
        .await?;
    Ok((StatusCode::CREATED, Json(task.into())))
}

#[utoipa::path(
    put,
    path = "/api/v1/manager/goals/{goal_id}/tasks/{task_id}",
    request_body = TaskParams,
    responses((status = 200, body = Task), (status = 404), (status = 422))
)]
pub(crate) async fn update_task(
    Path((goal_id, task_id)): Path<(String, String)>,
    State(state): State<Arc<AppState>>,
    Caller(ctx): Caller,
    Json(params): Json<TaskParams>,
) -> ApiResult<Json<Task>> {
    let task = state
        .task_service
        .update_task(&ctx, &goal_id, &task_id, params.into())
        .await?;
    Ok(Json(task.into()))
}

#[utoipa::path(
    delete,
    path = "/api/v1/manager/goals/{goal_id}/tasks/{task_id}",
    responses((status = 204), (status = 404))
)]
pub(crate) async fn delete_task(
    Path((goal_id, task_id)): Path<(String, String)>,
    State(state): State<Arc<AppState>>,
    Caller(ctx): Caller,
) -> ApiResult<StatusCode> {
    state
        .task_service
        .delete_task(&ctx, &goal_id, &task_id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/manager/goals/{goal_id}/tasks",
            get(list_tasks).post(create_task),
        )
        .route(
            "/manager/goals/{goal_id}/tasks/{task_id}",
            put(update_task).patch(update_task).delete(delete_task),
        )
}
