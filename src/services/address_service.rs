use tracing::info;

use super::crud_service::CrudService;
use super::relationship::Relation;
use crate::models::{Address, Employee, EmployeeReference, EntityKind, Location, LocationReference};
use crate::repositories::Repositories;
use crate::utils::errors::AppResult;

pub struct AddressService {
    addresses: CrudService<Address>,
    locations: Relation<Location>,
    employees: Relation<Employee>,
}

impl AddressService {
    pub fn new(repositories: &Repositories) -> Self {
        Self {
            addresses: CrudService::new(repositories.addresses.clone()),
            locations: Relation::new(
                repositories.locations.clone(),
                LocationReference::Address,
                EntityKind::Address,
            ),
            employees: Relation::new(
                repositories.employees.clone(),
                EmployeeReference::Address,
                EntityKind::Address,
            ),
        }
    }

    pub async fn add_address(&self, address: Address) -> AppResult<Address> {
        self.addresses.add(address).await
    }

    pub async fn get_addresses(&self) -> AppResult<Vec<Address>> {
        self.addresses.list().await
    }

    pub async fn get_address(&self, id: i64) -> AppResult<Address> {
        self.addresses.get(id).await
    }

    pub async fn edit_address(&self, id: i64, address: Address) -> AppResult<Address> {
        self.addresses.edit(id, address).await
    }

    /// Las sedes y empleados con esta dirección se conservan, sin dirección.
    pub async fn delete_address(&self, id: i64) -> AppResult<Address> {
        self.addresses.get(id).await?;
        let locations = self.locations.detach_all(id).await?;
        let employees = self.employees.detach_all(id).await?;
        info!(
            "Address {} detached from {} locations and {} employees",
            id, locations, employees
        );
        self.addresses.delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Location;

    fn address(street: &str) -> Address {
        Address {
            id: 0,
            street: street.to_string(),
            city: "New York City".to_string(),
            state: "New York".to_string(),
            zip_code: 12345,
        }
    }

    #[tokio::test]
    async fn test_delete_detaches_locations() {
        let repositories = Repositories::in_memory();
        let service = AddressService::new(&repositories);

        let saved = service.add_address(address("123 Main St.")).await.unwrap();
        let location = repositories
            .locations
            .insert(Location {
                id: 0,
                name: "Location A".to_string(),
                address_id: Some(saved.id),
            })
            .await
            .unwrap();

        let deleted = service.delete_address(saved.id).await.unwrap();
        assert_eq!(deleted, saved);

        let location = repositories.locations.find_by_id(location.id).await.unwrap().unwrap();
        assert_eq!(location.address_id, None);
        assert!(service.get_address(saved.id).await.is_err());
    }
}
