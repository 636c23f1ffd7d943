use super::crud_service::CrudService;
use super::employee_service::EmployeeService;
use super::relationship::Relation;
use crate::models::{
    Comment, CommentReference, Employee, EmployeeType, EntityKind, ServiceTicket,
    ServiceTicketReference,
};
use crate::repositories::Repositories;
use crate::utils::errors::AppResult;

/// CRUD de mecánicos más los tickets que atienden.
pub struct MechanicService {
    mechanics: EmployeeService,
    tickets: CrudService<ServiceTicket>,
    assigned_tickets: Relation<ServiceTicket>,
    comments: Relation<Comment>,
}

impl MechanicService {
    pub fn new(repositories: &Repositories, bcrypt_cost: u32) -> Self {
        Self {
            mechanics: EmployeeService::new(repositories, EmployeeType::Mechanic, bcrypt_cost),
            tickets: CrudService::new(repositories.tickets.clone()),
            assigned_tickets: Relation::new(
                repositories.tickets.clone(),
                ServiceTicketReference::Mechanic,
                EntityKind::Mechanic,
            ),
            comments: Relation::new(
                repositories.comments.clone(),
                CommentReference::Mechanic,
                EntityKind::Mechanic,
            ),
        }
    }

    pub fn employees(&self) -> &EmployeeService {
        &self.mechanics
    }

    /// Already-Assigned si otro mecánico ya atiende el ticket.
    pub async fn assign_ticket(&self, mechanic_id: i64, ticket_id: i64) -> AppResult<Employee> {
        let mechanic = self.mechanics.get_employee(mechanic_id).await?;
        let ticket = self.tickets.get(ticket_id).await?;
        self.assigned_tickets.link(mechanic_id, ticket).await?;
        Ok(mechanic)
    }

    pub async fn remove_ticket(&self, mechanic_id: i64, ticket_id: i64) -> AppResult<Employee> {
        let mechanic = self.mechanics.get_employee(mechanic_id).await?;
        let ticket = self.tickets.get(ticket_id).await?;
        self.assigned_tickets.unlink(mechanic_id, ticket).await?;
        Ok(mechanic)
    }

    pub async fn get_tickets(&self, mechanic_id: i64) -> AppResult<Vec<ServiceTicket>> {
        self.mechanics.get_employee(mechanic_id).await?;
        self.assigned_tickets.children(mechanic_id).await
    }

    pub async fn get_comments(&self, mechanic_id: i64) -> AppResult<Vec<Comment>> {
        self.mechanics.get_employee(mechanic_id).await?;
        self.comments.children(mechanic_id).await
    }
}
