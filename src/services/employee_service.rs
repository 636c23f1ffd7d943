//! CRUD de empleados, limitado a un subtipo
//!
//! Un servicio creado para `MECHANIC` nunca ve gerentes: buscar el id de
//! otro subtipo da Not-Found, los listados se filtran y las escrituras
//! conservan el subtipo.

use tracing::info;

use super::crud_service::CrudService;
use super::relationship::{ensure_employee, ensure_exists, Relation};
use crate::models::{
    ClientReference, CommentReference, DepartmentReference, Employee, EmployeeReference,
    EmployeeType, ServiceTicketReference,
};
use crate::repositories::Repositories;
use crate::utils::errors::{bad_request_error, not_found_error, AppResult};
use crate::utils::password::hash_password;

#[derive(Clone)]
pub struct EmployeeService {
    employee_type: EmployeeType,
    employees: CrudService<Employee>,
    repositories: Repositories,
    bcrypt_cost: u32,
}

impl EmployeeService {
    pub fn new(repositories: &Repositories, employee_type: EmployeeType, bcrypt_cost: u32) -> Self {
        Self {
            employee_type,
            employees: CrudService::new(repositories.employees.clone()),
            repositories: repositories.clone(),
            bcrypt_cost,
        }
    }

    pub fn employee_type(&self) -> EmployeeType {
        self.employee_type
    }

    /// `employee.password` llega en texto plano y se guarda hasheada.
    pub async fn add_employee(&self, employee: Employee) -> AppResult<Employee> {
        let employee = self.prepare(employee).await?;
        self.employees.add(employee).await
    }

    pub async fn get_employees(&self) -> AppResult<Vec<Employee>> {
        let mut employees = self.employees.list().await?;
        employees.retain(|e| e.employee_type == self.employee_type);
        Ok(employees)
    }

    pub async fn get_employee(&self, id: i64) -> AppResult<Employee> {
        match self.employees.repository().find_by_id(id).await? {
            Some(employee) if employee.employee_type == self.employee_type => Ok(employee),
            _ => Err(not_found_error(self.employee_type.kind(), id)),
        }
    }

    /// Reemplazo completo, contraseña incluida.
    pub async fn edit_employee(&self, id: i64, employee: Employee) -> AppResult<Employee> {
        self.get_employee(id).await?;
        let employee = self.prepare(employee).await?;
        self.employees.edit(id, employee).await
    }

    /// Tickets, comentarios, subordinados y clientes del empleado pierden el vínculo.
    pub async fn delete_employee(&self, id: i64) -> AppResult<Employee> {
        self.get_employee(id).await?;
        let kind = self.employee_type.kind();
        let repos = &self.repositories;

        let detached = match self.employee_type {
            EmployeeType::Manager => {
                Relation::new(repos.employees.clone(), EmployeeReference::Manager, kind)
                    .detach_all(id)
                    .await?
                    + Relation::new(repos.departments.clone(), DepartmentReference::Manager, kind)
                        .detach_all(id)
                        .await?
            }
            EmployeeType::Mechanic => {
                Relation::new(repos.tickets.clone(), ServiceTicketReference::Mechanic, kind)
                    .detach_all(id)
                    .await?
                    + Relation::new(repos.comments.clone(), CommentReference::Mechanic, kind)
                        .detach_all(id)
                        .await?
            }
            EmployeeType::SalesAssociate => {
                Relation::new(repos.clients.clone(), ClientReference::SalesAssociate, kind)
                    .detach_all(id)
                    .await?
            }
        };
        info!("{} {} detached from {} records", kind, id, detached);

        self.employees.delete(id).await
    }

    /// Fija el subtipo, verifica cada referencia y hashea la contraseña.
    async fn prepare(&self, mut employee: Employee) -> AppResult<Employee> {
        employee.employee_type = self.employee_type;

        if self.employee_type == EmployeeType::Manager && employee.manager_id.is_some() {
            return Err(bad_request_error("A manager cannot report to another manager"));
        }

        let repos = &self.repositories;
        ensure_exists(repos.locations.as_ref(), employee.work_location_id).await?;
        ensure_exists(repos.addresses.as_ref(), employee.address_id).await?;
        ensure_exists(repos.departments.as_ref(), employee.department_id).await?;
        ensure_employee(repos.employees.as_ref(), employee.manager_id, EmployeeType::Manager).await?;

        employee.password = hash_password(employee.password, self.bcrypt_cost).await?;
        Ok(employee)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::models::{Gender, Role, ServiceTicket};
    use crate::utils::errors::AppError;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    pub(crate) fn employee(employee_type: EmployeeType) -> Employee {
        Employee {
            id: 0,
            ssn: "123-45-6789".to_string(),
            first_name: "FirstName".to_string(),
            middle_initial: Some("M".to_string()),
            last_name: "LastName".to_string(),
            gender: Gender::Male,
            date_of_birth: NaiveDate::from_ymd_opt(1990, 1, 1).unwrap(),
            phone_number: "123-456-7890".to_string(),
            email: "employee@company.com".to_string(),
            work_location_id: None,
            salary: Decimal::new(4500000, 2),
            date_started: NaiveDate::from_ymd_opt(2020, 6, 1).unwrap(),
            address_id: None,
            hours_worked: 780.0,
            employee_type,
            is_active: true,
            role: Role::User,
            username: "employee".to_string(),
            password: "password123".to_string(),
            manager_id: None,
            department_id: None,
        }
    }

    #[tokio::test]
    async fn test_add_hashes_password_and_pins_type() {
        let repositories = Repositories::in_memory();
        let service = EmployeeService::new(&repositories, EmployeeType::Mechanic, 4);

        let saved = service
            .add_employee(employee(EmployeeType::Manager))
            .await
            .unwrap();
        assert_eq!(saved.employee_type, EmployeeType::Mechanic);
        assert!(bcrypt::verify("password123", &saved.password).unwrap());
    }

    #[tokio::test]
    async fn test_other_subtype_is_not_found() {
        let repositories = Repositories::in_memory();
        let mechanics = EmployeeService::new(&repositories, EmployeeType::Mechanic, 4);
        let managers = EmployeeService::new(&repositories, EmployeeType::Manager, 4);

        let manager = managers.add_employee(employee(EmployeeType::Manager)).await.unwrap();
        let err = mechanics.get_employee(manager.id).await.unwrap_err();
        assert_eq!(
            err.to_string(),
            format!("Not found: Could not find Mechanic with id: {}", manager.id)
        );
        assert!(mechanics.get_employees().await.unwrap().is_empty());
        assert_eq!(managers.get_employees().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_reference_checks() {
        let repositories = Repositories::in_memory();
        let mechanics = EmployeeService::new(&repositories, EmployeeType::Mechanic, 4);
        let managers = EmployeeService::new(&repositories, EmployeeType::Manager, 4);

        let mut missing_location = employee(EmployeeType::Mechanic);
        missing_location.work_location_id = Some(3);
        assert!(matches!(
            mechanics.add_employee(missing_location).await,
            Err(AppError::NotFound(_))
        ));

        let other_mechanic = mechanics.add_employee(employee(EmployeeType::Mechanic)).await.unwrap();
        let mut wrong_manager = employee(EmployeeType::Mechanic);
        wrong_manager.manager_id = Some(other_mechanic.id);
        assert!(matches!(
            mechanics.add_employee(wrong_manager).await,
            Err(AppError::NotFound(_))
        ));

        let boss = managers.add_employee(employee(EmployeeType::Manager)).await.unwrap();
        let mut managed_manager = employee(EmployeeType::Manager);
        managed_manager.manager_id = Some(boss.id);
        assert!(matches!(
            managers.add_employee(managed_manager).await,
            Err(AppError::BadRequest(_))
        ));
    }

    #[tokio::test]
    async fn test_edit_replaces_fields() {
        let repositories = Repositories::in_memory();
        let service = EmployeeService::new(&repositories, EmployeeType::SalesAssociate, 4);
        let saved = service
            .add_employee(employee(EmployeeType::SalesAssociate))
            .await
            .unwrap();

        let mut values = employee(EmployeeType::SalesAssociate);
        values.first_name = "Renamed".to_string();
        values.middle_initial = None;
        values.password = "new-password".to_string();

        let edited = service.edit_employee(saved.id, values).await.unwrap();
        assert_eq!(edited.id, saved.id);
        assert_eq!(edited.first_name, "Renamed");
        assert_eq!(edited.middle_initial, None);
        assert!(bcrypt::verify("new-password", &edited.password).unwrap());
    }

    #[tokio::test]
    async fn test_delete_mechanic_frees_tickets() {
        let repositories = Repositories::in_memory();
        let service = EmployeeService::new(&repositories, EmployeeType::Mechanic, 4);
        let mechanic = service.add_employee(employee(EmployeeType::Mechanic)).await.unwrap();

        let ticket = repositories
            .tickets
            .insert(ServiceTicket {
                id: 0,
                description: "Oil change".to_string(),
                date_created: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
                date_closed: None,
                mechanic_id: Some(mechanic.id),
            })
            .await
            .unwrap();

        service.delete_employee(mechanic.id).await.unwrap();
        let ticket = repositories.tickets.find_by_id(ticket.id).await.unwrap().unwrap();
        assert_eq!(ticket.mechanic_id, None);
        assert!(matches!(
            service.get_employee(mechanic.id).await,
            Err(AppError::NotFound(_))
        ));
    }
}
