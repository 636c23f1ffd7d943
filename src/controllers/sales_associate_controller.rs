use tracing::info;

use super::employee_controller::EmployeeController;
use crate::dto::{ClientResponse, EmployeeResponse};
use crate::services::SalesAssociateService;
use crate::state::AppState;
use crate::utils::errors::AppResult;

pub struct SalesAssociateController {
    service: SalesAssociateService,
}

impl SalesAssociateController {
    pub fn new(state: &AppState) -> Self {
        Self {
            service: SalesAssociateService::new(&state.repositories, state.bcrypt_cost()),
        }
    }

    pub fn employees(&self) -> EmployeeController {
        EmployeeController::new(self.service.employees().clone())
    }

    pub async fn clients(&self, id: i64) -> AppResult<Vec<ClientResponse>> {
        info!("GET /api/v1/associates/{}/clients", id);
        let clients = self.service.get_clients(id).await?;
        Ok(clients.into_iter().map(Into::into).collect())
    }

    pub async fn add_client(&self, id: i64, client_id: i64) -> AppResult<EmployeeResponse> {
        info!("POST /api/v1/associates/{}/clients/{}/add", id, client_id);
        Ok(self.service.assign_client(id, client_id).await?.into())
    }

    pub async fn remove_client(&self, id: i64, client_id: i64) -> AppResult<EmployeeResponse> {
        info!("DELETE /api/v1/associates/{}/clients/{}/remove", id, client_id);
        Ok(self.service.remove_client(id, client_id).await?.into())
    }
}
