use axum::{
    extract::{Path, State},
    routing::{delete, get, post},
    Json, Router,
};

use super::employee_routes::{create_employee_router, EmployeeResource};
use crate::controllers::employee_controller::EmployeeController;
use crate::controllers::mechanic_controller::MechanicController;
use crate::dto::{CommentResponse, EmployeeResponse, ServiceTicketResponse};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub struct Mechanics;

impl EmployeeResource for Mechanics {
    fn controller(state: &AppState) -> EmployeeController {
        MechanicController::new(state).employees()
    }
}

pub fn create_mechanic_router() -> Router<AppState> {
    create_employee_router::<Mechanics>()
        .route("/:id/tickets", get(list_tickets))
        .route("/:id/tickets/:ticket_id/add", post(assign_ticket))
        .route("/:id/tickets/:ticket_id/remove", delete(remove_ticket))
        .route("/:id/comments", get(list_comments))
}

async fn list_tickets(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Vec<ServiceTicketResponse>>, AppError> {
    let controller = MechanicController::new(&state);
    Ok(Json(controller.tickets(id).await?))
}

async fn assign_ticket(
    State(state): State<AppState>,
    Path((id, ticket_id)): Path<(i64, i64)>,
) -> Result<Json<EmployeeResponse>, AppError> {
    let controller = MechanicController::new(&state);
    Ok(Json(controller.assign_ticket(id, ticket_id).await?))
}

async fn remove_ticket(
    State(state): State<AppState>,
    Path((id, ticket_id)): Path<(i64, i64)>,
) -> Result<Json<EmployeeResponse>, AppError> {
    let controller = MechanicController::new(&state);
    Ok(Json(controller.remove_ticket(id, ticket_id).await?))
}

async fn list_comments(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Vec<CommentResponse>>, AppError> {
    let controller = MechanicController::new(&state);
    Ok(Json(controller.comments(id).await?))
}
