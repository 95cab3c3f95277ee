use std::{net::SocketAddr, time::Duration};

use anyhow::Context;
use goalmanager_core::goals::TaskDeletionPolicy;

pub struct Config {
    pub listen_addr: SocketAddr,
    pub db_path: String,
    pub cors_allow: Vec<String>,
    pub request_timeout: Duration,
    /// Bearer token required on manager routes; `None` leaves them open.
    pub api_token: Option<String>,
    pub task_deletion_policy: TaskDeletionPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            db_path: "./db/app.db".to_string(),
            cors_allow: vec!["*".to_string()],
            request_timeout: Duration::from_millis(30000),
            api_token: None,
            task_deletion_policy: TaskDeletionPolicy::default(),
        }
    }
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let listen_addr: SocketAddr = std::env::var("GM_LISTEN_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:8080".to_string())
            .parse()
            .context("Invalid GM_LISTEN_ADDR")?;
        let db_path = std::env::var("GM_DB_PATH").unwrap_or_else(|_| "./db/app.db".into());
        let cors_allow = std::env::var("GM_CORS_ALLOW_ORIGINS")
            .unwrap_or_else(|_| "*".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        let timeout_ms: u64 = std::env::var("GM_REQUEST_TIMEOUT_MS")
            .unwrap_or_else(|_| "30000".into())
            .parse()
            .context("Invalid GM_REQUEST_TIMEOUT_MS")?;
        let api_token = std::env::var("GM_API_TOKEN")
            .ok()
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty());
        let task_deletion_policy = match std::env::var("GM_TASK_DELETION_POLICY") {
            Ok(raw) => raw
                .parse()
                .map_err(|e| anyhow::anyhow!("Invalid GM_TASK_DELETION_POLICY: {}", e))?,
            Err(_) => TaskDeletionPolicy::default(),
        };
        Ok(Self {
            listen_addr,
            db_path,
            cors_allow,
            request_timeout: Duration::from_millis(timeout_ms),
            api_token,
            task_deletion_policy,
        })
    }
}
