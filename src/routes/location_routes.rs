use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post},
    Json, Router,
};

use crate::controllers::location_controller::LocationController;
use crate::dto::{
    DepartmentResponse, EmployeeResponse, LocationRequest, LocationResponse, LotResponse,
};
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::validation::ValidatedJson;

pub fn create_location_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_locations).post(create_location))
        .route(
            "/:id",
            get(get_location).put(update_location).delete(delete_location),
        )
        .route("/:id/lots", get(list_lots))
        .route("/:id/lots/:lot_id/add", post(add_lot))
        .route("/:id/lots/:lot_id/remove", delete(remove_lot))
        .route("/:id/departments", get(list_departments))
        .route("/:id/departments/:department_id/add", post(add_department))
        .route("/:id/departments/:department_id/remove", delete(remove_department))
        .route("/:id/mechanics", get(list_mechanics))
        .route("/:id/mechanics/:mechanic_id/add", post(add_mechanic))
        .route("/:id/mechanics/:mechanic_id/remove", delete(remove_mechanic))
}

async fn create_location(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<LocationRequest>,
) -> Result<(StatusCode, Json<LocationResponse>), AppError> {
    let controller = LocationController::new(&state);
    let response = controller.create(request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn list_locations(
    State(state): State<AppState>,
) -> Result<Json<Vec<LocationResponse>>, AppError> {
    let controller = LocationController::new(&state);
    Ok(Json(controller.list().await?))
}

async fn get_location(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<LocationResponse>, AppError> {
    let controller = LocationController::new(&state);
    Ok(Json(controller.get(id).await?))
}

async fn update_location(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    ValidatedJson(request): ValidatedJson<LocationRequest>,
) -> Result<Json<LocationResponse>, AppError> {
    let controller = LocationController::new(&state);
    Ok(Json(controller.update(id, request).await?))
}

async fn delete_location(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<LocationResponse>, AppError> {
    let controller = LocationController::new(&state);
    Ok(Json(controller.delete(id).await?))
}

async fn list_lots(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Vec<LotResponse>>, AppError> {
    let controller = LocationController::new(&state);
    Ok(Json(controller.lots(id).await?))
}

async fn add_lot(
    State(state): State<AppState>,
    Path((id, lot_id)): Path<(i64, i64)>,
) -> Result<Json<LocationResponse>, AppError> {
    let controller = LocationController::new(&state);
    Ok(Json(controller.add_lot(id, lot_id).await?))
}

async fn remove_lot(
    State(state): State<AppState>,
    Path((id, lot_id)): Path<(i64, i64)>,
) -> Result<Json<LocationResponse>, AppError> {
    let controller = LocationController::new(&state);
    Ok(Json(controller.remove_lot(id, lot_id).await?))
}

async fn list_departments(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Vec<DepartmentResponse>>, AppError> {
    let controller = LocationController::new(&state);
    Ok(Json(controller.departments(id).await?))
}

async fn add_department(
    State(state): State<AppState>,
    Path((id, department_id)): Path<(i64, i64)>,
) -> Result<Json<LocationResponse>, AppError> {
    let controller = LocationController::new(&state);
    Ok(Json(controller.add_department(id, department_id).await?))
}

async fn remove_department(
    State(state): State<AppState>,
    Path((id, department_id)): Path<(i64, i64)>,
) -> Result<Json<LocationResponse>, AppError> {
    let controller = LocationController::new(&state);
    Ok(Json(controller.remove_department(id, department_id).await?))
}

async fn list_mechanics(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Vec<EmployeeResponse>>, AppError> {
    let controller = LocationController::new(&state);
    Ok(Json(controller.mechanics(id).await?))
}

async fn add_mechanic(
    State(state): State<AppState>,
    Path((id, mechanic_id)): Path<(i64, i64)>,
) -> Result<Json<LocationResponse>, AppError> {
    let controller = LocationController::new(&state);
    Ok(Json(controller.add_mechanic(id, mechanic_id).await?))
}

async fn remove_mechanic(
    State(state): State<AppState>,
    Path((id, mechanic_id)): Path<(i64, i64)>,
) -> Result<Json<LocationResponse>, AppError> {
    let controller = LocationController::new(&state);
    Ok(Json(controller.remove_mechanic(id, mechanic_id).await?))
}
