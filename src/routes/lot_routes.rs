use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};

use crate::controllers::lot_controller::LotController;
use crate::dto::{LotRequest, LotResponse};
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::validation::ValidatedJson;

pub fn create_lot_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_lots).post(create_lot))
        .route(
            "/:id",
            get(get_lot).put(update_lot).delete(delete_lot),
        )
}

async fn create_lot(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<LotRequest>,
) -> Result<(StatusCode, Json<LotResponse>), AppError> {
    let controller = LotController::new(&state);
    let response = controller.create(request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn list_lots(
    State(state): State<AppState>,
) -> Result<Json<Vec<LotResponse>>, AppError> {
    let controller = LotController::new(&state);
    Ok(Json(controller.list().await?))
}

async fn get_lot(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<LotResponse>, AppError> {
    let controller = LotController::new(&state);
    Ok(Json(controller.get(id).await?))
}

async fn update_lot(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    ValidatedJson(request): ValidatedJson<LotRequest>,
) -> Result<Json<LotResponse>, AppError> {
    let controller = LotController::new(&state);
    Ok(Json(controller.update(id, request).await?))
}

async fn delete_lot(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<LotResponse>, AppError> {
    let controller = LotController::new(&state);
    Ok(Json(controller.delete(id).await?))
}
