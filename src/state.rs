//! Estado compartido de la aplicación
//!
//! axum lo clona en cada handler; los repositorios son `Arc`, así que
//! clonarlo es barato.

use std::sync::Arc;

use crate::config::EnvironmentConfig;
use crate::repositories::Repositories;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<EnvironmentConfig>,
    pub repositories: Repositories,
}

impl AppState {
    pub fn new(config: EnvironmentConfig, repositories: Repositories) -> Self {
        Self {
            config: Arc::new(config),
            repositories,
        }
    }

    /// Estado sobre los repositorios en memoria.
    pub fn in_memory(config: EnvironmentConfig) -> Self {
        Self::new(config, Repositories::in_memory())
    }

    pub fn bcrypt_cost(&self) -> u32 {
        self.config.bcrypt_cost
    }
}
