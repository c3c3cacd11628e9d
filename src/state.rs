use std::sync::{Arc, Mutex, MutexGuard};

use crate::{auth::store::UserStore, config::AppConfig, error::ApiError, portfolio::data::Portfolio};

/// Shared application state. Users and the portfolio document live in
/// process memory only and are lost on restart. Both sit behind a mutex so
/// check-then-mutate sequences stay atomic on a multi-threaded runtime.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<Mutex<UserStore>>,
    pub portfolio: Arc<Mutex<Portfolio>>,
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self {
            users: Arc::new(Mutex::new(UserStore::new())),
            portfolio: Arc::new(Mutex::new(Portfolio::seed())),
            config: Arc::new(config),
        }
    }

    pub fn users(&self) -> Result<MutexGuard<'_, UserStore>, ApiError> {
        self.users
            .lock()
            .map_err(|_| ApiError::Internal(anyhow::anyhow!("user store mutex poisoned")))
    }

    pub fn portfolio(&self) -> Result<MutexGuard<'_, Portfolio>, ApiError> {
        self.portfolio
            .lock()
            .map_err(|_| ApiError::Internal(anyhow::anyhow!("portfolio mutex poisoned")))
    }
}
