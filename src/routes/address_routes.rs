use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};

use crate::controllers::address_controller::AddressController;
use crate::dto::{AddressRequest, AddressResponse};
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::validation::ValidatedJson;

pub fn create_address_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_addresses).post(create_address))
        .route(
            "/:id",
            get(get_address).put(update_address).delete(delete_address),
        )
}

async fn create_address(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<AddressRequest>,
) -> Result<(StatusCode, Json<AddressResponse>), AppError> {
    let controller = AddressController::new(&state);
    let response = controller.create(request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn list_addresses(
    State(state): State<AppState>,
) -> Result<Json<Vec<AddressResponse>>, AppError> {
    let controller = AddressController::new(&state);
    Ok(Json(controller.list().await?))
}

async fn get_address(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<AddressResponse>, AppError> {
    let controller = AddressController::new(&state);
    Ok(Json(controller.get(id).await?))
}

async fn update_address(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    ValidatedJson(request): ValidatedJson<AddressRequest>,
) -> Result<Json<AddressResponse>, AppError> {
    let controller = AddressController::new(&state);
    Ok(Json(controller.update(id, request).await?))
}

async fn delete_address(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<AddressResponse>, AppError> {
    let controller = AddressController::new(&state);
    Ok(Json(controller.delete(id).await?))
}
