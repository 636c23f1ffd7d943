use std::sync::Arc;

use super::crud_service::CrudService;
use super::relationship::ensure_employee;
use crate::models::{Client, Employee, EmployeeType};
use crate::repositories::{Repositories, Repository};
use crate::utils::errors::AppResult;

pub struct ClientService {
    clients: CrudService<Client>,
    employees: Arc<dyn Repository<Employee>>,
}

impl ClientService {
    pub fn new(repositories: &Repositories) -> Self {
        Self {
            clients: CrudService::new(repositories.clients.clone()),
            employees: repositories.employees.clone(),
        }
    }

    pub async fn add_client(&self, client: Client) -> AppResult<Client> {
        self.check_associate(&client).await?;
        self.clients.add(client).await
    }

    pub async fn get_clients(&self) -> AppResult<Vec<Client>> {
        self.clients.list().await
    }

    pub async fn get_client(&self, id: i64) -> AppResult<Client> {
        self.clients.get(id).await
    }

    pub async fn edit_client(&self, id: i64, client: Client) -> AppResult<Client> {
        self.check_associate(&client).await?;
        self.clients.edit(id, client).await
    }

    pub async fn delete_client(&self, id: i64) -> AppResult<Client> {
        self.clients.delete(id).await
    }

    async fn check_associate(&self, client: &Client) -> AppResult<()> {
        ensure_employee(
            self.employees.as_ref(),
            client.sales_associate_id,
            EmployeeType::SalesAssociate,
        )
        .await
    }
}
