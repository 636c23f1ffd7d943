use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post},
    Json, Router,
};

use crate::controllers::service_ticket_controller::ServiceTicketController;
use crate::dto::{CommentResponse, ServiceTicketRequest, ServiceTicketResponse};
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::validation::ValidatedJson;

pub fn create_ticket_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_tickets).post(create_ticket))
        .route(
            "/:id",
            get(get_ticket).put(update_ticket).delete(delete_ticket),
        )
        .route("/:id/comments", get(list_comments))
        .route("/:id/comments/:comment_id/add", post(add_comment))
        .route("/:id/comments/:comment_id/remove", delete(remove_comment))
}

async fn create_ticket(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<ServiceTicketRequest>,
) -> Result<(StatusCode, Json<ServiceTicketResponse>), AppError> {
    let controller = ServiceTicketController::new(&state);
    let response = controller.create(request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn list_tickets(
    State(state): State<AppState>,
) -> Result<Json<Vec<ServiceTicketResponse>>, AppError> {
    let controller = ServiceTicketController::new(&state);
    Ok(Json(controller.list().await?))
}

async fn get_ticket(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ServiceTicketResponse>, AppError> {
    let controller = ServiceTicketController::new(&state);
    Ok(Json(controller.get(id).await?))
}

async fn update_ticket(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    ValidatedJson(request): ValidatedJson<ServiceTicketRequest>,
) -> Result<Json<ServiceTicketResponse>, AppError> {
    let controller = ServiceTicketController::new(&state);
    Ok(Json(controller.update(id, request).await?))
}

async fn delete_ticket(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ServiceTicketResponse>, AppError> {
    let controller = ServiceTicketController::new(&state);
    Ok(Json(controller.delete(id).await?))
}

async fn list_comments(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Vec<CommentResponse>>, AppError> {
    let controller = ServiceTicketController::new(&state);
    Ok(Json(controller.comments(id).await?))
}

async fn add_comment(
    State(state): State<AppState>,
    Path((id, comment_id)): Path<(i64, i64)>,
) -> Result<Json<ServiceTicketResponse>, AppError> {
    let controller = ServiceTicketController::new(&state);
    Ok(Json(controller.add_comment(id, comment_id).await?))
}

async fn remove_comment(
    State(state): State<AppState>,
    Path((id, comment_id)): Path<(i64, i64)>,
) -> Result<Json<ServiceTicketResponse>, AppError> {
    let controller = ServiceTicketController::new(&state);
    Ok(Json(controller.remove_comment(id, comment_id).await?))
}
