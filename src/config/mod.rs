//! Configuración del servicio: entorno y pool de base de datos.

pub mod database;
pub mod environment;

pub use database::DatabaseConfig;
pub use environment::EnvironmentConfig;
