use std::sync::Arc;

use super::crud_service::CrudService;
use super::relationship::{ensure_employee, ensure_exists};
use crate::models::{Comment, Employee, EmployeeType, ServiceTicket};
use crate::repositories::{Repositories, Repository};
use crate::utils::errors::AppResult;

pub struct CommentService {
    comments: CrudService<Comment>,
    tickets: Arc<dyn Repository<ServiceTicket>>,
    employees: Arc<dyn Repository<Employee>>,
}

impl CommentService {
    pub fn new(repositories: &Repositories) -> Self {
        Self {
            comments: CrudService::new(repositories.comments.clone()),
            tickets: repositories.tickets.clone(),
            employees: repositories.employees.clone(),
        }
    }

    pub async fn add_comment(&self, comment: Comment) -> AppResult<Comment> {
        self.check_references(&comment).await?;
        self.comments.add(comment).await
    }

    pub async fn get_comments(&self) -> AppResult<Vec<Comment>> {
        self.comments.list().await
    }

    pub async fn get_comment(&self, id: i64) -> AppResult<Comment> {
        self.comments.get(id).await
    }

    pub async fn edit_comment(&self, id: i64, comment: Comment) -> AppResult<Comment> {
        self.check_references(&comment).await?;
        self.comments.edit(id, comment).await
    }

    pub async fn delete_comment(&self, id: i64) -> AppResult<Comment> {
        self.comments.delete(id).await
    }

    async fn check_references(&self, comment: &Comment) -> AppResult<()> {
        ensure_exists(self.tickets.as_ref(), comment.ticket_id).await?;
        ensure_employee(self.employees.as_ref(), comment.mechanic_id, EmployeeType::Mechanic).await
    }
}
