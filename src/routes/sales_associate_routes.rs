use axum::{
    extract::{Path, State},
    routing::{delete, get, post},
    Json, Router,
};

use super::employee_routes::{create_employee_router, EmployeeResource};
use crate::controllers::employee_controller::EmployeeController;
use crate::controllers::sales_associate_controller::SalesAssociateController;
use crate::dto::{ClientResponse, EmployeeResponse};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub struct SalesAssociates;

impl EmployeeResource for SalesAssociates {
    fn controller(state: &AppState) -> EmployeeController {
        SalesAssociateController::new(state).employees()
    }
}

pub fn create_sales_associate_router() -> Router<AppState> {
    create_employee_router::<SalesAssociates>()
        .route("/:id/clients", get(list_clients))
        .route("/:id/clients/:client_id/add", post(add_client))
        .route("/:id/clients/:client_id/remove", delete(remove_client))
}

async fn list_clients(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Vec<ClientResponse>>, AppError> {
    let controller = SalesAssociateController::new(&state);
    Ok(Json(controller.clients(id).await?))
}

async fn add_client(
    State(state): State<AppState>,
    Path((id, client_id)): Path<(i64, i64)>,
) -> Result<Json<EmployeeResponse>, AppError> {
    let controller = SalesAssociateController::new(&state);
    Ok(Json(controller.add_client(id, client_id).await?))
}

async fn remove_client(
    State(state): State<AppState>,
    Path((id, client_id)): Path<(i64, i64)>,
) -> Result<Json<EmployeeResponse>, AppError> {
    let controller = SalesAssociateController::new(&state);
    Ok(Json(controller.remove_client(id, client_id).await?))
}
