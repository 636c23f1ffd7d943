use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};

use crate::controllers::client_controller::ClientController;
use crate::dto::{ClientRequest, ClientResponse};
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::validation::ValidatedJson;

pub fn create_client_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_clients).post(create_client))
        .route(
            "/:id",
            get(get_client).put(update_client).delete(delete_client),
        )
}

async fn create_client(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<ClientRequest>,
) -> Result<(StatusCode, Json<ClientResponse>), AppError> {
    let controller = ClientController::new(&state);
    let response = controller.create(request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn list_clients(
    State(state): State<AppState>,
) -> Result<Json<Vec<ClientResponse>>, AppError> {
    let controller = ClientController::new(&state);
    Ok(Json(controller.list().await?))
}

async fn get_client(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ClientResponse>, AppError> {
    let controller = ClientController::new(&state);
    Ok(Json(controller.get(id).await?))
}

async fn update_client(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    ValidatedJson(request): ValidatedJson<ClientRequest>,
) -> Result<Json<ClientResponse>, AppError> {
    let controller = ClientController::new(&state);
    Ok(Json(controller.update(id, request).await?))
}

async fn delete_client(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ClientResponse>, AppError> {
    let controller = ClientController::new(&state);
    Ok(Json(controller.delete(id).await?))
}
