//! Configuración de variables de entorno
//!
//! Los valores salen del entorno del proceso (`main` carga un `.env` con
//! `dotenvy`). Cada variable tiene un valor por defecto para desarrollo.

use std::env;
use std::str::FromStr;

use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub environment: String,
    pub port: u16,
    pub host: String,
    pub log_level: String,
    /// Vacío significa cualquier origen.
    pub cors_origins: Vec<String>,
    pub bcrypt_cost: u32,
    pub run_migrations: bool,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            port: 8080,
            host: "0.0.0.0".to_string(),
            log_level: "info".to_string(),
            cors_origins: Vec::new(),
            bcrypt_cost: bcrypt::DEFAULT_COST,
            run_migrations: true,
        }
    }
}

impl EnvironmentConfig {
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();
        Ok(Self {
            environment: env::var("ENVIRONMENT").unwrap_or(defaults.environment),
            port: parse_var("PORT", defaults.port)?,
            host: env::var("HOST").unwrap_or(defaults.host),
            log_level: env::var("LOG_LEVEL").unwrap_or(defaults.log_level),
            cors_origins: env::var("CORS_ORIGINS")
                .map(|origins| {
                    origins
                        .split(',')
                        .map(|s| s.trim().to_string())
                        .filter(|s| !s.is_empty())
                        .collect()
                })
                .unwrap_or(defaults.cors_origins),
            bcrypt_cost: parse_var("BCRYPT_COST", defaults.bcrypt_cost)?,
            run_migrations: parse_var("RUN_MIGRATIONS", defaults.run_migrations)?,
        })
    }

    pub fn is_production(&self) -> bool {
        self.environment.eq_ignore_ascii_case("production")
    }

    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Lee `name`; usa `default` si no está definida.
pub(crate) fn parse_var<T>(name: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(name) {
        Ok(value) => value
            .trim()
            .parse()
            .with_context(|| format!("{} must be a valid value, got '{}'", name, value)),
        Err(_) => Ok(default),
    }
}
