//! Middleware de CORS

use axum::http::{HeaderName, HeaderValue, Method};
use tower_http::cors::CorsLayer;
use tracing::warn;

use crate::config::EnvironmentConfig;

/// Cualquier origen, para desarrollo y tests.
pub fn cors_middleware() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Restringido a `origins`; las entradas inválidas se ignoran.
pub fn cors_middleware_with_origins(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| HeaderValue::from_str(origin).ok())
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            HeaderName::from_static("content-type"),
            HeaderName::from_static("accept"),
            HeaderName::from_static("origin"),
            HeaderName::from_static("x-requested-with"),
        ])
        .max_age(std::time::Duration::from_secs(3600))
}

/// Elige la capa según los orígenes configurados. Sin lista, producción
/// solo acepta peticiones del mismo origen y el resto de entornos acepta cualquiera.
pub fn cors_layer(config: &EnvironmentConfig) -> CorsLayer {
    if !config.cors_origins.is_empty() {
        cors_middleware_with_origins(&config.cors_origins)
    } else if config.is_production() {
        warn!("CORS_ORIGINS is empty in production, cross-origin requests are refused");
        CorsLayer::new()
    } else {
        cors_middleware()
    }
}
