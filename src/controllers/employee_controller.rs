//! CRUD compartido por los endpoints de gerentes, mecánicos y vendedores

use tracing::info;

use crate::dto::{EmployeeRequest, EmployeeResponse};
use crate::models::EmployeeType;
use crate::services::EmployeeService;
use crate::utils::errors::AppResult;

/// Ruta base de los endpoints que sirven `employee_type`.
pub fn resource_path(employee_type: EmployeeType) -> &'static str {
    match employee_type {
        EmployeeType::Manager => "/api/v1/managers",
        EmployeeType::Mechanic => "/api/v1/mechanics",
        EmployeeType::SalesAssociate => "/api/v1/associates",
    }
}

pub struct EmployeeController {
    service: EmployeeService,
}

impl EmployeeController {
    pub fn new(service: EmployeeService) -> Self {
        Self { service }
    }

    fn path(&self) -> &'static str {
        resource_path(self.service.employee_type())
    }

    pub async fn create(&self, request: EmployeeRequest) -> AppResult<EmployeeResponse> {
        info!("POST {}/", self.path());
        let employee = request.into_entity(self.service.employee_type());
        Ok(self.service.add_employee(employee).await?.into())
    }

    pub async fn list(&self) -> AppResult<Vec<EmployeeResponse>> {
        info!("GET {}/", self.path());
        let employees = self.service.get_employees().await?;
        Ok(employees.into_iter().map(Into::into).collect())
    }

    pub async fn get(&self, id: i64) -> AppResult<EmployeeResponse> {
        info!("GET {}/{}", self.path(), id);
        Ok(self.service.get_employee(id).await?.into())
    }

    pub async fn update(&self, id: i64, request: EmployeeRequest) -> AppResult<EmployeeResponse> {
        info!("PUT {}/{}", self.path(), id);
        let employee = request.into_entity(self.service.employee_type());
        Ok(self.service.edit_employee(id, employee).await?.into())
    }

    pub async fn delete(&self, id: i64) -> AppResult<EmployeeResponse> {
        info!("DELETE {}/{}", self.path(), id);
        Ok(self.service.delete_employee(id).await?.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_path() {
        assert_eq!(resource_path(EmployeeType::Manager), "/api/v1/managers");
        assert_eq!(resource_path(EmployeeType::Mechanic), "/api/v1/mechanics");
        assert_eq!(resource_path(EmployeeType::SalesAssociate), "/api/v1/associates");
    }
}
