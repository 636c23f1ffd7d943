//! Backend del concesionario
//!
//! API REST JSON sobre empleados, tickets de servicio, sedes, clientes y
//! sus relaciones. [`create_app`] construye el servicio completo para un
//! [`AppState`]; `main` solo carga la configuración y lo sirve.

pub mod config;
pub mod controllers;
pub mod database;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;

use axum::{extract::State, http::Uri, response::Json, routing::get, Router};
use serde_json::json;
use tower::{Layer, ServiceBuilder};
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::trace::TraceLayer;

use crate::middleware::cors_layer;
use crate::routes::{
    address_routes, client_routes, comment_routes, department_routes, location_routes,
    lot_routes, manager_routes, mechanic_routes, sales_associate_routes, service_ticket_routes,
};
pub use crate::state::AppState;
use crate::utils::errors::{AppError, AppResult};

/// `/api/v1/locations/` y `/api/v1/locations` llegan al mismo handler.
/// Se sirve con `axum::ServiceExt::<Request>::into_make_service`.
pub fn create_app(state: AppState) -> NormalizePath<Router> {
    let api = Router::new()
        .nest("/addresses", address_routes::create_address_router())
        .nest("/clients", client_routes::create_client_router())
        .nest("/comments", comment_routes::create_comment_router())
        .nest("/departments", department_routes::create_department_router())
        .nest("/locations", location_routes::create_location_router())
        .nest("/lots", lot_routes::create_lot_router())
        .nest("/managers", manager_routes::create_manager_router())
        .nest("/mechanics", mechanic_routes::create_mechanic_router())
        .nest("/associates", sales_associate_routes::create_sales_associate_router())
        .nest("/tickets", service_ticket_routes::create_ticket_router());

    let cors = cors_layer(&state.config);

    let router = Router::new()
        .route("/health", get(health))
        .nest("/api/v1", api)
        .fallback(not_found)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state);

    NormalizePathLayer::trim_trailing_slash().layer(router)
}

async fn health(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "storage": state.repositories.storage,
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

async fn not_found(uri: Uri) -> AppResult<()> {
    Err(AppError::NotFound(format!("No route for {}", uri.path())))
}
