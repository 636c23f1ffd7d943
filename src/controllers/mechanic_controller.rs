use tracing::info;

use super::employee_controller::EmployeeController;
use crate::dto::{CommentResponse, EmployeeResponse, ServiceTicketResponse};
use crate::services::MechanicService;
use crate::state::AppState;
use crate::utils::errors::AppResult;

pub struct MechanicController {
    service: MechanicService,
}

impl MechanicController {
    pub fn new(state: &AppState) -> Self {
        Self {
            service: MechanicService::new(&state.repositories, state.bcrypt_cost()),
        }
    }

    pub fn employees(&self) -> EmployeeController {
        EmployeeController::new(self.service.employees().clone())
    }

    pub async fn tickets(&self, id: i64) -> AppResult<Vec<ServiceTicketResponse>> {
        info!("GET /api/v1/mechanics/{}/tickets", id);
        let tickets = self.service.get_tickets(id).await?;
        Ok(tickets.into_iter().map(Into::into).collect())
    }

    pub async fn assign_ticket(&self, id: i64, ticket_id: i64) -> AppResult<EmployeeResponse> {
        info!("POST /api/v1/mechanics/{}/tickets/{}/add", id, ticket_id);
        Ok(self.service.assign_ticket(id, ticket_id).await?.into())
    }

    pub async fn remove_ticket(&self, id: i64, ticket_id: i64) -> AppResult<EmployeeResponse> {
        info!("DELETE /api/v1/mechanics/{}/tickets/{}/remove", id, ticket_id);
        Ok(self.service.remove_ticket(id, ticket_id).await?.into())
    }

    pub async fn comments(&self, id: i64) -> AppResult<Vec<CommentResponse>> {
        info!("GET /api/v1/mechanics/{}/comments", id);
        let comments = self.service.get_comments(id).await?;
        Ok(comments.into_iter().map(Into::into).collect())
    }
}
