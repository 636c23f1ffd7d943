use axum::{
    extract::{Path, State},
    routing::{delete, get, post},
    Json, Router,
};

use super::employee_routes::{create_employee_router, EmployeeResource};
use crate::controllers::employee_controller::EmployeeController;
use crate::controllers::manager_controller::ManagerController;
use crate::dto::EmployeeResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub struct Managers;

impl EmployeeResource for Managers {
    fn controller(state: &AppState) -> EmployeeController {
        ManagerController::new(state).employees()
    }
}

pub fn create_manager_router() -> Router<AppState> {
    create_employee_router::<Managers>()
        .route("/:id/mechanics", get(list_mechanics))
        .route("/:id/mechanics/:mechanic_id/add", post(add_mechanic))
        .route("/:id/mechanics/:mechanic_id/remove", delete(remove_mechanic))
        .route("/:id/associates", get(list_associates))
        .route("/:id/associates/:associate_id/add", post(add_associate))
        .route("/:id/associates/:associate_id/remove", delete(remove_associate))
}

async fn list_mechanics(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Vec<EmployeeResponse>>, AppError> {
    let controller = ManagerController::new(&state);
    Ok(Json(controller.mechanics(id).await?))
}

async fn add_mechanic(
    State(state): State<AppState>,
    Path((id, mechanic_id)): Path<(i64, i64)>,
) -> Result<Json<EmployeeResponse>, AppError> {
    let controller = ManagerController::new(&state);
    Ok(Json(controller.add_mechanic(id, mechanic_id).await?))
}

async fn remove_mechanic(
    State(state): State<AppState>,
    Path((id, mechanic_id)): Path<(i64, i64)>,
) -> Result<Json<EmployeeResponse>, AppError> {
    let controller = ManagerController::new(&state);
    Ok(Json(controller.remove_mechanic(id, mechanic_id).await?))
}

async fn list_associates(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Vec<EmployeeResponse>>, AppError> {
    let controller = ManagerController::new(&state);
    Ok(Json(controller.associates(id).await?))
}

async fn add_associate(
    State(state): State<AppState>,
    Path((id, associate_id)): Path<(i64, i64)>,
) -> Result<Json<EmployeeResponse>, AppError> {
    let controller = ManagerController::new(&state);
    Ok(Json(controller.add_associate(id, associate_id).await?))
}

async fn remove_associate(
    State(state): State<AppState>,
    Path((id, associate_id)): Path<(i64, i64)>,
) -> Result<Json<EmployeeResponse>, AppError> {
    let controller = ManagerController::new(&state);
    Ok(Json(controller.remove_associate(id, associate_id).await?))
}
