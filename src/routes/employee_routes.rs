//! Rutas CRUD compartidas por todos los subtipos de empleado
//!
//! El router de cada subtipo combina [`create_employee_router`] para su
//! propio [`EmployeeResource`] con sus rutas de relaciones.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};

use crate::controllers::employee_controller::EmployeeController;
use crate::dto::{EmployeeRequest, EmployeeResponse};
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::validation::ValidatedJson;

/// Subtipo de empleado servido bajo su propia ruta.
pub trait EmployeeResource: Send + Sync + 'static {
    fn controller(state: &AppState) -> EmployeeController;
}

pub fn create_employee_router<R: EmployeeResource>() -> Router<AppState> {
    Router::new()
        .route("/", get(list_employees::<R>).post(create_employee::<R>))
        .route(
            "/:id",
            get(get_employee::<R>)
                .put(update_employee::<R>)
                .delete(delete_employee::<R>),
        )
}

async fn create_employee<R: EmployeeResource>(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<EmployeeRequest>,
) -> Result<(StatusCode, Json<EmployeeResponse>), AppError> {
    let response = R::controller(&state).create(request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn list_employees<R: EmployeeResource>(
    State(state): State<AppState>,
) -> Result<Json<Vec<EmployeeResponse>>, AppError> {
    Ok(Json(R::controller(&state).list().await?))
}

async fn get_employee<R: EmployeeResource>(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<EmployeeResponse>, AppError> {
    Ok(Json(R::controller(&state).get(id).await?))
}

async fn update_employee<R: EmployeeResource>(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    ValidatedJson(request): ValidatedJson<EmployeeRequest>,
) -> Result<Json<EmployeeResponse>, AppError> {
    Ok(Json(R::controller(&state).update(id, request).await?))
}

async fn delete_employee<R: EmployeeResource>(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<EmployeeResponse>, AppError> {
    Ok(Json(R::controller(&state).delete(id).await?))
}
