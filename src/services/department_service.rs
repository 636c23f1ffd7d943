use std::sync::Arc;

use tracing::info;

use super::crud_service::CrudService;
use super::employee_service::EmployeeService;
use super::relationship::{ensure_employee, ensure_exists, Relation};
use crate::models::{
    Department, Employee, EmployeeReference, EmployeeType, EntityKind, Location,
};
use crate::repositories::{Repositories, Repository};
use crate::utils::errors::AppResult;

/// Departamentos de una sede y los mecánicos que trabajan en ellos.
pub struct DepartmentService {
    departments: CrudService<Department>,
    locations: Arc<dyn Repository<Location>>,
    employees: Arc<dyn Repository<Employee>>,
    mechanics: EmployeeService,
    members: Relation<Employee>,
}

impl DepartmentService {
    pub fn new(repositories: &Repositories, bcrypt_cost: u32) -> Self {
        Self {
            departments: CrudService::new(repositories.departments.clone()),
            locations: repositories.locations.clone(),
            employees: repositories.employees.clone(),
            mechanics: EmployeeService::new(repositories, EmployeeType::Mechanic, bcrypt_cost),
            members: Relation::new(
                repositories.employees.clone(),
                EmployeeReference::Department,
                EntityKind::Department,
            )
            .with_child_kind(EntityKind::Mechanic),
        }
    }

    pub async fn add_department(&self, department: Department) -> AppResult<Department> {
        self.check_references(&department).await?;
        self.departments.add(department).await
    }

    pub async fn get_departments(&self) -> AppResult<Vec<Department>> {
        self.departments.list().await
    }

    pub async fn get_department(&self, id: i64) -> AppResult<Department> {
        self.departments.get(id).await
    }

    pub async fn edit_department(&self, id: i64, department: Department) -> AppResult<Department> {
        self.check_references(&department).await?;
        self.departments.edit(id, department).await
    }

    pub async fn delete_department(&self, id: i64) -> AppResult<Department> {
        self.departments.get(id).await?;
        let detached = self.members.detach_all(id).await?;
        info!("Department {} detached from {} employees", id, detached);
        self.departments.delete(id).await
    }

    pub async fn assign_mechanic(&self, department_id: i64, mechanic_id: i64) -> AppResult<Department> {
        let department = self.departments.get(department_id).await?;
        let mechanic = self.mechanics.get_employee(mechanic_id).await?;
        self.members.link(department_id, mechanic).await?;
        Ok(department)
    }

    pub async fn remove_mechanic(&self, department_id: i64, mechanic_id: i64) -> AppResult<Department> {
        let department = self.departments.get(department_id).await?;
        let mechanic = self.mechanics.get_employee(mechanic_id).await?;
        self.members.unlink(department_id, mechanic).await?;
        Ok(department)
    }

    pub async fn get_mechanics(&self, department_id: i64) -> AppResult<Vec<Employee>> {
        self.departments.get(department_id).await?;
        let mut members = self.members.children(department_id).await?;
        members.retain(|e| e.employee_type == EmployeeType::Mechanic);
        Ok(members)
    }

    async fn check_references(&self, department: &Department) -> AppResult<()> {
        ensure_exists(self.locations.as_ref(), department.location_id).await?;
        ensure_employee(self.employees.as_ref(), department.manager_id, EmployeeType::Manager).await
    }
}
