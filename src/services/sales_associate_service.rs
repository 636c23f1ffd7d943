use super::crud_service::CrudService;
use super::employee_service::EmployeeService;
use super::relationship::Relation;
use crate::models::{Client, ClientReference, Employee, EmployeeType, EntityKind};
use crate::repositories::Repositories;
use crate::utils::errors::AppResult;

/// CRUD de vendedores más los clientes que siguen.
pub struct SalesAssociateService {
    associates: EmployeeService,
    clients: CrudService<Client>,
    followed_clients: Relation<Client>,
}

impl SalesAssociateService {
    pub fn new(repositories: &Repositories, bcrypt_cost: u32) -> Self {
        Self {
            associates: EmployeeService::new(repositories, EmployeeType::SalesAssociate, bcrypt_cost),
            clients: CrudService::new(repositories.clients.clone()),
            followed_clients: Relation::new(
                repositories.clients.clone(),
                ClientReference::SalesAssociate,
                EntityKind::SalesAssociate,
            ),
        }
    }

    pub fn employees(&self) -> &EmployeeService {
        &self.associates
    }

    pub async fn assign_client(&self, associate_id: i64, client_id: i64) -> AppResult<Employee> {
        let associate = self.associates.get_employee(associate_id).await?;
        let client = self.clients.get(client_id).await?;
        self.followed_clients.link(associate_id, client).await?;
        Ok(associate)
    }

    pub async fn remove_client(&self, associate_id: i64, client_id: i64) -> AppResult<Employee> {
        let associate = self.associates.get_employee(associate_id).await?;
        let client = self.clients.get(client_id).await?;
        self.followed_clients.unlink(associate_id, client).await?;
        Ok(associate)
    }

    pub async fn get_clients(&self, associate_id: i64) -> AppResult<Vec<Client>> {
        self.associates.get_employee(associate_id).await?;
        self.followed_clients.children(associate_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::client_service::tests::client;
    use crate::services::employee_service::tests::employee;
    use crate::utils::errors::AppError;

    #[tokio::test]
    async fn test_assign_and_remove_client() {
        let repositories = Repositories::in_memory();
        let service = SalesAssociateService::new(&repositories, 4);
        let associate = service
            .employees()
            .add_employee(employee(EmployeeType::SalesAssociate))
            .await
            .unwrap();
        let client = repositories.clients.insert(client(None)).await.unwrap();

        let returned = service.assign_client(associate.id, client.id).await.unwrap();
        assert_eq!(returned.id, associate.id);
        let followed = service.get_clients(associate.id).await.unwrap();
        assert_eq!(followed.len(), 1);
        assert_eq!(followed[0].sales_associate_id, Some(associate.id));

        service.remove_client(associate.id, client.id).await.unwrap();
        assert!(service.get_clients(associate.id).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_client_followed_by_another_associate() {
        let repositories = Repositories::in_memory();
        let service = SalesAssociateService::new(&repositories, 4);
        let first = service
            .employees()
            .add_employee(employee(EmployeeType::SalesAssociate))
            .await
            .unwrap();
        let second = service
            .employees()
            .add_employee(employee(EmployeeType::SalesAssociate))
            .await
            .unwrap();
        let client = repositories.clients.insert(client(None)).await.unwrap();
        service.assign_client(first.id, client.id).await.unwrap();

        let err = service.assign_client(second.id, client.id).await.unwrap_err();
        assert!(matches!(err, AppError::AlreadyAssigned(_)));
        assert!(err.to_string().contains(&format!(
            "Client with id: {} is already assigned to SalesAssociate with id: {}",
            client.id, first.id
        )));

        // quitarlo desde otro vendedor no toca el vínculo
        service.remove_client(second.id, client.id).await.unwrap();
        assert_eq!(service.get_clients(first.id).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_mechanic_is_not_an_associate() {
        let repositories = Repositories::in_memory();
        let service = SalesAssociateService::new(&repositories, 4);
        let mechanic = repositories
            .employees
            .insert(employee(EmployeeType::Mechanic))
            .await
            .unwrap();

        assert!(matches!(
            service.get_clients(mechanic.id).await,
            Err(AppError::NotFound(_))
        ));
    }
}
