//! Tickets de servicio y sus comentarios

use std::sync::Arc;

use tracing::info;

use super::crud_service::CrudService;
use super::relationship::{ensure_employee, Relation};
use crate::models::{
    Comment, CommentReference, Employee, EmployeeType, EntityKind, ServiceTicket,
};
use crate::repositories::{Repositories, Repository};
use crate::utils::errors::AppResult;

pub struct ServiceTicketService {
    tickets: CrudService<ServiceTicket>,
    comments: CrudService<Comment>,
    employees: Arc<dyn Repository<Employee>>,
    ticket_comments: Relation<Comment>,
}

impl ServiceTicketService {
    pub fn new(repositories: &Repositories) -> Self {
        Self {
            tickets: CrudService::new(repositories.tickets.clone()),
            comments: CrudService::new(repositories.comments.clone()),
            employees: repositories.employees.clone(),
            ticket_comments: Relation::new(
                repositories.comments.clone(),
                CommentReference::ServiceTicket,
                EntityKind::ServiceTicket,
            ),
        }
    }

    pub async fn add_ticket(&self, ticket: ServiceTicket) -> AppResult<ServiceTicket> {
        ensure_employee(self.employees.as_ref(), ticket.mechanic_id, EmployeeType::Mechanic).await?;
        self.tickets.add(ticket).await
    }

    pub async fn get_tickets(&self) -> AppResult<Vec<ServiceTicket>> {
        self.tickets.list().await
    }

    pub async fn get_ticket(&self, id: i64) -> AppResult<ServiceTicket> {
        self.tickets.get(id).await
    }

    pub async fn edit_ticket(&self, id: i64, ticket: ServiceTicket) -> AppResult<ServiceTicket> {
        ensure_employee(self.employees.as_ref(), ticket.mechanic_id, EmployeeType::Mechanic).await?;
        self.tickets.edit(id, ticket).await
    }

    pub async fn delete_ticket(&self, id: i64) -> AppResult<ServiceTicket> {
        self.tickets.get(id).await?;
        let detached = self.ticket_comments.detach_all(id).await?;
        info!("ServiceTicket {} detached from {} comments", id, detached);
        self.tickets.delete(id).await
    }

    pub async fn add_comment(&self, ticket_id: i64, comment_id: i64) -> AppResult<ServiceTicket> {
        let ticket = self.tickets.get(ticket_id).await?;
        let comment = self.comments.get(comment_id).await?;
        self.ticket_comments.link(ticket_id, comment).await?;
        Ok(ticket)
    }

    pub async fn remove_comment(&self, ticket_id: i64, comment_id: i64) -> AppResult<ServiceTicket> {
        let ticket = self.tickets.get(ticket_id).await?;
        let comment = self.comments.get(comment_id).await?;
        self.ticket_comments.unlink(ticket_id, comment).await?;
        Ok(ticket)
    }

    pub async fn get_comments(&self, ticket_id: i64) -> AppResult<Vec<Comment>> {
        self.tickets.get(ticket_id).await?;
        self.ticket_comments.children(ticket_id).await
    }
}
