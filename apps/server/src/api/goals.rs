use std::sync::Arc;

use crate::{
    auth::Caller,
    error::ApiResult,
    main_lib::AppState,
    models::{
        Goal, GoalForm, GoalFormView, GoalIndexParams, GoalIndexView, GoalParams, GoalShowView,
        Task, View,
    },
};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    routing::get,
    Json, Router,
};
use goalmanager_core::errors::FieldErrors;
use goalmanager_core::goals::{GoalSearch, GoalUpdate, NewGoal};

pub const GOALS_PATH: &str = "/api/v1/manager/goals";

pub fn goal_path(id: &str) -> String {
    format!("{}/{}", GOALS_PATH, id)
}

fn render_form(view: View, goal: GoalForm, errors: &FieldErrors) -> Response {
    let body = GoalFormView {
        view,
        goal,
        errors: errors.clone().into_map(),
    };
    (StatusCode::UNPROCESSABLE_ENTITY, Json(body)).into_response()
}

#[utoipa::path(
    get,
    path = "/api/v1/manager/goals",
    params(GoalIndexParams),
    responses((status = 200, body = GoalIndexView))
)]
pub(crate) async fn list_goals(
    State(state): State<Arc<AppState>>,
    Caller(ctx): Caller,
    Query(params): Query<GoalIndexParams>,
) -> ApiResult<Json<GoalIndexView>> {
    let search = GoalSearch {
        query: params.q.clone(),
    };
    let goals = state.goal_service.get_goals(&ctx, &search)?;
    Ok(Json(GoalIndexView {
        view: View::Index,
        query: params.q,
        goals: goals.into_iter().map(Goal::from).collect(),
    }))
}

#[utoipa::path(
    get,
    path = "/api/v1/manager/goals/{id}",
    responses((status = 200, body = GoalShowView), (status = 404))
)]
pub(crate) async fn show_goal(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Caller(ctx): Caller,
) -> ApiResult<Json<GoalShowView>> {
    let goal = state.goal_service.get_goal(&ctx, &id)?;
    let tasks = state.goal_service.get_goal_tasks(&ctx, &goal.id)?;
    Ok(Json(GoalShowView {
        view: View::Show,
        goal: goal.into(),
        tasks: tasks.into_iter().map(Task::from).collect(),
    }))
}

#[utoipa::path(
    get,
    path = "/api/v1/manager/goals/new",
    responses((status = 200, body = GoalFormView))
)]
pub(crate) async fn new_goal_form(
    State(state): State<Arc<AppState>>,
    Caller(ctx): Caller,
) -> Json<GoalFormView> {
    let blank = state.goal_service.new_goal(&ctx);
    Json(GoalFormView::blank(View::New, blank.into()))
}

#[utoipa::path(
    get,
    path = "/api/v1/manager/goals/{id}/edit",
    responses((status = 200, body = GoalFormView), (status = 404))
)]
pub(crate) async fn edit_goal_form(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Caller(ctx): Caller,
) -> ApiResult<Json<GoalFormView>> {
    let goal = state.goal_service.get_goal(&ctx, &id)?;
    Ok(Json(GoalFormView::blank(View::Edit, goal.into())))
}

#[utoipa::path(
    post,
    path = "/api/v1/manager/goals",
    request_body = GoalParams,
    responses((status = 303, description = "Redirect to the created goal"), (status = 422, body = GoalFormView))
)]
pub(crate) async fn create_goal(
    State(state): State<Arc<AppState>>,
    Caller(ctx): Caller,
    Json(params): Json<GoalParams>,
) -> ApiResult<Response> {
    let new_goal = NewGoal::from(params);
    match state.goal_service.create_goal(&ctx, new_goal.clone()).await {
        Ok(goal) => Ok(Redirect::to(&goal_path(&goal.id)).into_response()),
        Err(err) => match err.field_errors() {
            Some(fields) => {
                tracing::debug!("Goal creation rejected: {}", fields);
                Ok(render_form(View::New, new_goal.into(), fields))
            }
            None => Err(err.into()),
        },
    }
}

#[utoipa::path(
    put,
    path = "/api/v1/manager/goals/{id}",
    request_body = GoalParams,
    responses(
        (status = 303, description = "Redirect to the updated goal"),
        (status = 404),
        (status = 422, body = GoalFormView)
    )
)]
pub(crate) async fn update_goal(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Caller(ctx): Caller,
    Json(params): Json<GoalParams>,
) -> ApiResult<Response> {
    let update = GoalUpdate::from(params);
    match state
        .goal_service
        .update_goal(&ctx, &id, update.clone())
        .await
    {
        Ok(goal) => Ok(Redirect::to(&goal_path(&goal.id)).into_response()),
        Err(err) => match err.field_errors() {
            Some(fields) => {
                tracing::debug!("Goal {} update rejected: {}", id, fields);
                // Re-show the stored goal with the rejected attributes on top.
                let mut form = GoalForm::from(state.goal_service.get_goal(&ctx, &id)?);
                if let Some(name) = update.name {
                    form.name = name;
                }
                if let Some(description) = update.description {
                    form.description = description;
                }
                Ok(render_form(View::Edit, form, fields))
            }
            None => Err(err.into()),
        },
    }
}

#[utoipa::path(
    delete,
    path = "/api/v1/manager/goals/{id}",
    responses(
        (status = 303, description = "Redirect to the goal list"),
        (status = 404),
        (status = 409, description = "Goal still has tasks")
    )
)]
pub(crate) async fn delete_goal(
    Path(id): Path<String>,
    State(state): State<Arc<AppState>>,
    Caller(ctx): Caller,
) -> ApiResult<Redirect> {
    state.goal_service.delete_goal(&ctx, &id).await?;
    Ok(Redirect::to(GOALS_PATH))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/manager/goals", get(list_goals).post(create_goal))
        .route("/manager/goals/new", get(new_goal_form))
        .route(
            "/manager/goals/{id}",
            get(show_goal)
                .put(update_goal)
                .patch(update_goal)
                .delete(delete_goal),
        )
        .route("/manager/goals/{id}/edit", get(edit_goal_form))
}
