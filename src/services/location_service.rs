//! Sedes del concesionario y lo que les pertenece
//!
//! Lotes, departamentos y mecánicos se vinculan mediante su propia
//! columna `location_id` / `work_location_id`.

use std::sync::Arc;

use tracing::info;

use super::crud_service::CrudService;
use super::employee_service::EmployeeService;
use super::relationship::{ensure_exists, Relation};
use crate::models::{
    Address, Department, DepartmentReference, Employee, EmployeeReference, EmployeeType,
    EntityKind, Location, Lot, LotReference,
};
use crate::repositories::{Repositories, Repository};
use crate::utils::errors::AppResult;

pub struct LocationService {
    locations: CrudService<Location>,
    addresses: Arc<dyn Repository<Address>>,
    lots: CrudService<Lot>,
    departments: CrudService<Department>,
    mechanics: EmployeeService,
    location_lots: Relation<Lot>,
    location_departments: Relation<Department>,
    location_employees: Relation<Employee>,
}

impl LocationService {
    pub fn new(repositories: &Repositories, bcrypt_cost: u32) -> Self {
        Self {
            locations: CrudService::new(repositories.locations.clone()),
            addresses: repositories.addresses.clone(),
            lots: CrudService::new(repositories.lots.clone()),
            departments: CrudService::new(repositories.departments.clone()),
            mechanics: EmployeeService::new(repositories, EmployeeType::Mechanic, bcrypt_cost),
            location_lots: Relation::new(
                repositories.lots.clone(),
                LotReference::Location,
                EntityKind::Location,
            ),
            location_departments: Relation::new(
                repositories.departments.clone(),
                DepartmentReference::Location,
                EntityKind::Location,
            ),
            location_employees: Relation::new(
                repositories.employees.clone(),
                EmployeeReference::WorkLocation,
                EntityKind::Location,
            )
            .with_child_kind(EntityKind::Mechanic),
        }
    }

    pub async fn add_location(&self, location: Location) -> AppResult<Location> {
        ensure_exists(self.addresses.as_ref(), location.address_id).await?;
        self.locations.add(location).await
    }

    pub async fn get_locations(&self) -> AppResult<Vec<Location>> {
        self.locations.list().await
    }

    pub async fn get_location(&self, id: i64) -> AppResult<Location> {
        self.locations.get(id).await
    }

    pub async fn edit_location(&self, id: i64, location: Location) -> AppResult<Location> {
        ensure_exists(self.addresses.as_ref(), location.address_id).await?;
        self.locations.edit(id, location).await
    }

    pub async fn delete_location(&self, id: i64) -> AppResult<Location> {
        self.locations.get(id).await?;
        let lots = self.location_lots.detach_all(id).await?;
        let departments = self.location_departments.detach_all(id).await?;
        let employees = self.location_employees.detach_all(id).await?;
        info!(
            "Location {} detached from {} lots, {} departments and {} employees",
            id, lots, departments, employees
        );
        self.locations.delete(id).await
    }

    pub async fn add_lot(&self, location_id: i64, lot_id: i64) -> AppResult<Location> {
        let location = self.locations.get(location_id).await?;
        let lot = self.lots.get(lot_id).await?;
        self.location_lots.link(location_id, lot).await?;
        Ok(location)
    }

    pub async fn remove_lot(&self, location_id: i64, lot_id: i64) -> AppResult<Location> {
        let location = self.locations.get(location_id).await?;
        let lot = self.lots.get(lot_id).await?;
        self.location_lots.unlink(location_id, lot).await?;
        Ok(location)
    }

    pub async fn get_lots(&self, location_id: i64) -> AppResult<Vec<Lot>> {
        self.locations.get(location_id).await?;
        self.location_lots.children(location_id).await
    }

    pub async fn add_department(&self, location_id: i64, department_id: i64) -> AppResult<Location> {
        let location = self.locations.get(location_id).await?;
        let department = self.departments.get(department_id).await?;
        self.location_departments.link(location_id, department).await?;
        Ok(location)
    }

    pub async fn remove_department(&self, location_id: i64, department_id: i64) -> AppResult<Location> {
        let location = self.locations.get(location_id).await?;
        let department = self.departments.get(department_id).await?;
        self.location_departments.unlink(location_id, department).await?;
        Ok(location)
    }

    pub async fn get_departments(&self, location_id: i64) -> AppResult<Vec<Department>> {
        self.locations.get(location_id).await?;
        self.location_departments.children(location_id).await
    }

    pub async fn assign_mechanic(&self, location_id: i64, mechanic_id: i64) -> AppResult<Location> {
        let location = self.locations.get(location_id).await?;
        let mechanic = self.mechanics.get_employee(mechanic_id).await?;
        self.location_employees.link(location_id, mechanic).await?;
        Ok(location)
    }

    pub async fn remove_mechanic(&self, location_id: i64, mechanic_id: i64) -> AppResult<Location> {
        let location = self.locations.get(location_id).await?;
        let mechanic = self.mechanics.get_employee(mechanic_id).await?;
        self.location_employees.unlink(location_id, mechanic).await?;
        Ok(location)
    }

    pub async fn get_mechanics(&self, location_id: i64) -> AppResult<Vec<Employee>> {
        self.locations.get(location_id).await?;
        let mut employees = self.location_employees.children(location_id).await?;
        employees.retain(|e| e.employee_type == EmployeeType::Mechanic);
        Ok(employees)
    }
}
