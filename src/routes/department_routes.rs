use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post},
    Json, Router,
};

use crate::controllers::department_controller::DepartmentController;
use crate::dto::{DepartmentRequest, DepartmentResponse, EmployeeResponse};
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::validation::ValidatedJson;

pub fn create_department_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_departments).post(create_department))
        .route(
            "/:id",
            get(get_department).put(update_department).delete(delete_department),
        )
        .route("/:id/mechanics", get(list_mechanics))
        .route("/:id/mechanics/:mechanic_id/add", post(add_mechanic))
        .route("/:id/mechanics/:mechanic_id/remove", delete(remove_mechanic))
}

async fn create_department(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<DepartmentRequest>,
) -> Result<(StatusCode, Json<DepartmentResponse>), AppError> {
    let controller = DepartmentController::new(&state);
    let response = controller.create(request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn list_departments(
    State(state): State<AppState>,
) -> Result<Json<Vec<DepartmentResponse>>, AppError> {
    let controller = DepartmentController::new(&state);
    Ok(Json(controller.list().await?))
}

async fn get_department(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<DepartmentResponse>, AppError> {
    let controller = DepartmentController::new(&state);
    Ok(Json(controller.get(id).await?))
}

async fn update_department(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    ValidatedJson(request): ValidatedJson<DepartmentRequest>,
) -> Result<Json<DepartmentResponse>, AppError> {
    let controller = DepartmentController::new(&state);
    Ok(Json(controller.update(id, request).await?))
}

async fn delete_department(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<DepartmentResponse>, AppError> {
    let controller = DepartmentController::new(&state);
    Ok(Json(controller.delete(id).await?))
}

async fn list_mechanics(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Vec<EmployeeResponse>>, AppError> {
    let controller = DepartmentController::new(&state);
    Ok(Json(controller.mechanics(id).await?))
}

async fn add_mechanic(
    State(state): State<AppState>,
    Path((id, mechanic_id)): Path<(i64, i64)>,
) -> Result<Json<DepartmentResponse>, AppError> {
    let controller = DepartmentController::new(&state);
    Ok(Json(controller.add_mechanic(id, mechanic_id).await?))
}

async fn remove_mechanic(
    State(state): State<AppState>,
    Path((id, mechanic_id)): Path<(i64, i64)>,
) -> Result<Json<DepartmentResponse>, AppError> {
    let controller = DepartmentController::new(&state);
    Ok(Json(controller.remove_mechanic(id, mechanic_id).await?))
}
