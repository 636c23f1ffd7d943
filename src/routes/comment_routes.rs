use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};

use crate::controllers::comment_controller::CommentController;
use crate::dto::{CommentRequest, CommentResponse};
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::validation::ValidatedJson;

pub fn create_comment_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_comments).post(create_comment))
        .route(
            "/:id",
            get(get_comment).put(update_comment).delete(delete_comment),
        )
}

async fn create_comment(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CommentRequest>,
) -> Result<(StatusCode, Json<CommentResponse>), AppError> {
    let controller = CommentController::new(&state);
    let response = controller.create(request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn list_comments(
    State(state): State<AppState>,
) -> Result<Json<Vec<CommentResponse>>, AppError> {
    let controller = CommentController::new(&state);
    Ok(Json(controller.list().await?))
}

async fn get_comment(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<CommentResponse>, AppError> {
    let controller = CommentController::new(&state);
    Ok(Json(controller.get(id).await?))
}

async fn update_comment(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    ValidatedJson(request): ValidatedJson<CommentRequest>,
) -> Result<Json<CommentResponse>, AppError> {
    let controller = CommentController::new(&state);
    Ok(Json(controller.update(id, request).await?))
}

async fn delete_comment(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<CommentResponse>, AppError> {
    let controller = CommentController::new(&state);
    Ok(Json(controller.delete(id).await?))
}
