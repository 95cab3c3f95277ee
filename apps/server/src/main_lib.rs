use std::sync::Arc;

use crate::config::Config;
use goalmanager_core::{
    clients::{ClientService, ClientServiceTrait},
    goals::{GoalService, GoalServiceTrait},
    tasks::{TaskService, TaskServiceTrait},
};
use goalmanager_storage_sqlite::{
    clients::ClientRepository,
    db::{self, write_actor, DbPool},
    goals::GoalRepository,
    tasks::TaskRepository,
};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

pub struct AppState {
    pub client_service: Arc<dyn ClientServiceTrait + Send + Sync>,
    pub goal_service: Arc<dyn GoalServiceTrait + Send + Sync>,
    pub task_service: Arc<dyn TaskServiceTrait + Send + Sync>,
    pub pool: Arc<DbPool>,
    pub api_token: Option<String>,
}

pub fn init_tracing() {
    let fmt_layer = fmt::layer().json().with_current_span(false);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}

pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let db_path = db::init(&config.db_path)?;
    tracing::info!("Database path in use: {}", db_path);

    let pool = db::create_pool(&db_path)?;
    db::run_migrations(&pool)?;
    let writer = write_actor::spawn_writer((*pool).clone());

    let client_repo = Arc::new(ClientRepository::new(pool.clone(), writer.clone()));
    let goal_repo = Arc::new(GoalRepository::new(pool.clone(), writer.clone()));
    let task_repo = Arc::new(TaskRepository::new(pool.clone(), writer.clone()));

    let client_service = Arc::new(ClientService::new(client_repo.clone()));
    let goal_service = Arc::new(GoalService::new(
        goal_repo.clone(),
        task_repo.clone(),
        client_repo,
        config.task_deletion_policy,
    ));
    let task_service = Arc::new(TaskService::new(task_repo, goal_repo));
    tracing::info!(
        "Goal deletion applies the '{}' task policy",
        config.task_deletion_policy
    );

    Ok(Arc::new(AppState {
        client_service,
        goal_service,
        task_service,
        pool,
        api_token: config.api_token.clone(),
    }))
}
