use tracing::info;

use crate::dto::{CommentResponse, ServiceTicketRequest, ServiceTicketResponse};
use crate::services::ServiceTicketService;
use crate::state::AppState;
use crate::utils::errors::AppResult;

pub struct ServiceTicketController {
    service: ServiceTicketService,
}

impl ServiceTicketController {
    pub fn new(state: &AppState) -> Self {
        Self {
            service: ServiceTicketService::new(&state.repositories),
        }
    }

    pub async fn create(&self, request: ServiceTicketRequest) -> AppResult<ServiceTicketResponse> {
        info!("POST /api/v1/tickets/");
        let ticket = self.service.add_ticket(request.into_entity()).await?;
        Ok(ticket.into())
    }

    pub async fn list(&self) -> AppResult<Vec<ServiceTicketResponse>> {
        info!("GET /api/v1/tickets/");
        let tickets = self.service.get_tickets().await?;
        Ok(tickets.into_iter().map(Into::into).collect())
    }

    pub async fn get(&self, id: i64) -> AppResult<ServiceTicketResponse> {
        info!("GET /api/v1/tickets/{}", id);
        Ok(self.service.get_ticket(id).await?.into())
    }

    pub async fn update(
        &self,
        id: i64,
        request: ServiceTicketRequest,
    ) -> AppResult<ServiceTicketResponse> {
        info!("PUT /api/v1/tickets/{}", id);
        let ticket = self.service.edit_ticket(id, request.into_entity()).await?;
        Ok(ticket.into())
    }

    pub async fn delete(&self, id: i64) -> AppResult<ServiceTicketResponse> {
        info!("DELETE /api/v1/tickets/{}", id);
        Ok(self.service.delete_ticket(id).await?.into())
    }

    pub async fn comments(&self, id: i64) -> AppResult<Vec<CommentResponse>> {
        info!("GET /api/v1/tickets/{}/comments", id);
        let comments = self.service.get_comments(id).await?;
        Ok(comments.into_iter().map(Into::into).collect())
    }

    pub async fn add_comment(&self, id: i64, comment_id: i64) -> AppResult<ServiceTicketResponse> {
        info!("POST /api/v1/tickets/{}/comments/{}/add", id, comment_id);
        Ok(self.service.add_comment(id, comment_id).await?.into())
    }

    pub async fn remove_comment(&self, id: i64, comment_id: i64) -> AppResult<ServiceTicketResponse> {
        info!("DELETE /api/v1/tickets/{}/comments/{}/remove", id, comment_id);
        Ok(self.service.remove_comment(id, comment_id).await?.into())
    }
}
