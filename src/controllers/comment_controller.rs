use tracing::info;

use crate::dto::{CommentRequest, CommentResponse};
use crate::services::CommentService;
use crate::state::AppState;
use crate::utils::errors::AppResult;

pub struct CommentController {
    service: CommentService,
}

impl CommentController {
    pub fn new(state: &AppState) -> Self {
        Self {
            service: CommentService::new(&state.repositories),
        }
    }

    pub async fn create(&self, request: CommentRequest) -> AppResult<CommentResponse> {
        info!("POST /api/v1/comments/");
        let comment = self.service.add_comment(request.into_entity()).await?;
        Ok(comment.into())
    }

    pub async fn list(&self) -> AppResult<Vec<CommentResponse>> {
        info!("GET /api/v1/comments/");
        let comments = self.service.get_comments().await?;
        Ok(comments.into_iter().map(Into::into).collect())
    }

    pub async fn get(&self, id: i64) -> AppResult<CommentResponse> {
        info!("GET /api/v1/comments/{}", id);
        Ok(self.service.get_comment(id).await?.into())
    }

    pub async fn update(&self, id: i64, request: CommentRequest) -> AppResult<CommentResponse> {
        info!("PUT /api/v1/comments/{}", id);
        let comment = self.service.edit_comment(id, request.into_entity()).await?;
        Ok(comment.into())
    }

    pub async fn delete(&self, id: i64) -> AppResult<CommentResponse> {
        info!("DELETE /api/v1/comments/{}", id);
        Ok(self.service.delete_comment(id).await?.into())
    }
}
