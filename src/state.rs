use crate::{config::Config, utils::credentials::CredentialVerifier};
use axum::extract::FromRef;
use sqlx::SqlitePool;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub config: Config,
    pub verifier: Arc<dyn CredentialVerifier>,
}

impl AppState {
    /// Builds state with the default plain-text credential check.
    pub fn new(pool: SqlitePool, config: Config) -> Self {
        Self {
            pool,
            config,
            verifier: Arc::new(crate::utils::credentials::PlainTextVerifier),
        }
    }
}

impl FromRef<AppState> for SqlitePool {
    fn from_ref(state: &AppState) -> Self {
        state.pool.clone()
    }
}

impl FromRef<AppState> for Config {
    fn from_ref(state: &AppState) -> Self {
        state.config.clone()
    }
}

impl FromRef<AppState> for Arc<dyn CredentialVerifier> {
    fn from_ref(state: &AppState) -> Self {
        state.verifier.clone()
    }
}
