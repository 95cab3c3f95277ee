use std::sync::Arc;

use crate::{
    auth,
    config::Config,
    main_lib::AppState,
    models::{
        Client, Goal, GoalForm, GoalFormView, GoalIndexView, GoalParams, GoalShowView, NewClient,
        Task, TaskParams, View,
    },
};
use axum::{http::HeaderValue, middleware, routing::get, Json, Router};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use utoipa::OpenApi;

pub mod clients;
pub mod goals;
pub mod health;
pub mod tasks;

#[derive(OpenApi)]
#[openapi(
    paths(
        health::healthz,
        health::readyz,
        goals::list_goals,
        goals::show_goal,
        goals::new_goal_form,
        goals::edit_goal_form,
        goals::create_goal,
        goals::update_goal,
        goals::delete_goal,
        tasks::list_tasks,
        tasks::create_task,
        tasks::update_task,
        tasks::delete_task,
        clients::list_clients,
        clients::get_client,
        clients::create_client
    ),
    components(schemas(
        View,
        Goal,
        GoalParams,
        GoalForm,
        GoalIndexView,
        GoalShowView,
        GoalFormView,
        Task,
        TaskParams,
        Client,
        NewClient
    )),
    tags((name = "goalmanager"))
)]
pub struct ApiDoc;

fn cors_layer(config: &Config) -> CorsLayer {
    if config.cors_allow.iter().any(|o| o == "*") {
        return CorsLayer::new().allow_origin(Any);
    }
    let origins = config
        .cors_allow
        .iter()
        .filter_map(|o| match o.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", o);
                None
            }
        })
        .collect::<Vec<_>>();
    CorsLayer::new().allow_origin(AllowOrigin::list(origins))
}

pub fn app_router(state: Arc<AppState>, config: &Config) -> Router {
    let openapi = ApiDoc::openapi();

    let manager = Router::new()
        .merge(goals::router())
        .merge(tasks::router())
        .merge(clients::router())
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth::require_token,
        ));

    let api = Router::new().merge(health::router()).merge(manager);

    Router::new()
        .nest("/api/v1", api)
        .route("/openapi.json", get(move || async move { Json(openapi) }))
        .with_state(state)
        .layer(cors_layer(config))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(TimeoutLayer::new(config.request_timeout))
        .layer(TraceLayer::new_for_http())
}
