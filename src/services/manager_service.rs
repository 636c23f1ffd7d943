use super::employee_service::EmployeeService;
use super::relationship::Relation;
use crate::models::{Employee, EmployeeReference, EmployeeType, EntityKind};
use crate::repositories::Repositories;
use crate::utils::errors::AppResult;

/// CRUD de gerentes más los mecánicos y vendedores a su cargo.
pub struct ManagerService {
    managers: EmployeeService,
    mechanics: EmployeeService,
    associates: EmployeeService,
    mechanic_reports: Relation<Employee>,
    associate_reports: Relation<Employee>,
}

impl ManagerService {
    pub fn new(repositories: &Repositories, bcrypt_cost: u32) -> Self {
        let reports = |kind: EntityKind| {
            Relation::new(
                repositories.employees.clone(),
                EmployeeReference::Manager,
                EntityKind::Manager,
            )
            .with_child_kind(kind)
        };

        Self {
            managers: EmployeeService::new(repositories, EmployeeType::Manager, bcrypt_cost),
            mechanics: EmployeeService::new(repositories, EmployeeType::Mechanic, bcrypt_cost),
            associates: EmployeeService::new(repositories, EmployeeType::SalesAssociate, bcrypt_cost),
            mechanic_reports: reports(EntityKind::Mechanic),
            associate_reports: reports(EntityKind::SalesAssociate),
        }
    }

    pub fn employees(&self) -> &EmployeeService {
        &self.managers
    }

    pub async fn assign_mechanic(&self, manager_id: i64, mechanic_id: i64) -> AppResult<Employee> {
        let manager = self.managers.get_employee(manager_id).await?;
        let mechanic = self.mechanics.get_employee(mechanic_id).await?;
        self.mechanic_reports.link(manager_id, mechanic).await?;
        Ok(manager)
    }

    pub async fn remove_mechanic(&self, manager_id: i64, mechanic_id: i64) -> AppResult<Employee> {
        let manager = self.managers.get_employee(manager_id).await?;
        let mechanic = self.mechanics.get_employee(mechanic_id).await?;
        self.mechanic_reports.unlink(manager_id, mechanic).await?;
        Ok(manager)
    }

    pub async fn get_mechanics(&self, manager_id: i64) -> AppResult<Vec<Employee>> {
        self.reports_of_type(manager_id, &self.mechanic_reports, EmployeeType::Mechanic)
            .await
    }

    pub async fn assign_associate(&self, manager_id: i64, associate_id: i64) -> AppResult<Employee> {
        let manager = self.managers.get_employee(manager_id).await?;
        let associate = self.associates.get_employee(associate_id).await?;
        self.associate_reports.link(manager_id, associate).await?;
        Ok(manager)
    }

    pub async fn remove_associate(&self, manager_id: i64, associate_id: i64) -> AppResult<Employee> {
        let manager = self.managers.get_employee(manager_id).await?;
        let associate = self.associates.get_employee(associate_id).await?;
        self.associate_reports.unlink(manager_id, associate).await?;
        Ok(manager)
    }

    pub async fn get_associates(&self, manager_id: i64) -> AppResult<Vec<Employee>> {
        self.reports_of_type(manager_id, &self.associate_reports, EmployeeType::SalesAssociate)
            .await
    }

    async fn reports_of_type(
        &self,
        manager_id: i64,
        relation: &Relation<Employee>,
        employee_type: EmployeeType,
    ) -> AppResult<Vec<Employee>> {
        self.managers.get_employee(manager_id).await?;
        let mut reports = relation.children(manager_id).await?;
        reports.retain(|e| e.employee_type == employee_type);
        Ok(reports)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::employee_service::tests::employee;
    use crate::utils::errors::AppError;

    #[tokio::test]
    async fn test_mechanics_and_associates_are_listed_separately() {
        let repositories = Repositories::in_memory();
        let service = ManagerService::new(&repositories, 4);
        let mechanics = EmployeeService::new(&repositories, EmployeeType::Mechanic, 4);
        let associates = EmployeeService::new(&repositories, EmployeeType::SalesAssociate, 4);

        let manager = service.employees().add_employee(employee(EmployeeType::Manager)).await.unwrap();
        let mechanic = mechanics.add_employee(employee(EmployeeType::Mechanic)).await.unwrap();
        let associate = associates
            .add_employee(employee(EmployeeType::SalesAssociate))
            .await
            .unwrap();

        service.assign_mechanic(manager.id, mechanic.id).await.unwrap();
        service.assign_associate(manager.id, associate.id).await.unwrap();

        let listed = service.get_mechanics(manager.id).await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, mechanic.id);
        assert_eq!(listed[0].manager_id, Some(manager.id));

        let listed = service.get_associates(manager.id).await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, associate.id);

        service.remove_mechanic(manager.id, mechanic.id).await.unwrap();
        assert!(service.get_mechanics(manager.id).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_assigning_to_second_manager_fails() {
        let repositories = Repositories::in_memory();
        let service = ManagerService::new(&repositories, 4);
        let mechanics = EmployeeService::new(&repositories, EmployeeType::Mechanic, 4);

        let first = service.employees().add_employee(employee(EmployeeType::Manager)).await.unwrap();
        let second = service.employees().add_employee(employee(EmployeeType::Manager)).await.unwrap();
        let mechanic = mechanics.add_employee(employee(EmployeeType::Mechanic)).await.unwrap();

        service.assign_mechanic(first.id, mechanic.id).await.unwrap();
        let err = service.assign_mechanic(second.id, mechanic.id).await.unwrap_err();
        assert!(matches!(err, AppError::AlreadyAssigned(_)));
        assert!(err.to_string().contains("Mechanic with id"));
    }

    #[tokio::test]
    async fn test_associate_id_is_not_a_mechanic() {
        let repositories = Repositories::in_memory();
        let service = ManagerService::new(&repositories, 4);
        let associates = EmployeeService::new(&repositories, EmployeeType::SalesAssociate, 4);

        let manager = service.employees().add_employee(employee(EmployeeType::Manager)).await.unwrap();
        let associate = associates
            .add_employee(employee(EmployeeType::SalesAssociate))
            .await
            .unwrap();

        assert!(matches!(
            service.assign_mechanic(manager.id, associate.id).await,
            Err(AppError::NotFound(_))
        ));
    }
}
