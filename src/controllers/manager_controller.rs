use tracing::info;

use super::employee_controller::EmployeeController;
use crate::dto::EmployeeResponse;
use crate::services::ManagerService;
use crate::state::AppState;
use crate::utils::errors::AppResult;

pub struct ManagerController {
    service: ManagerService,
}

impl ManagerController {
    pub fn new(state: &AppState) -> Self {
        Self {
            service: ManagerService::new(&state.repositories, state.bcrypt_cost()),
        }
    }

    pub fn employees(&self) -> EmployeeController {
        EmployeeController::new(self.service.employees().clone())
    }

    pub async fn mechanics(&self, id: i64) -> AppResult<Vec<EmployeeResponse>> {
        info!("GET /api/v1/managers/{}/mechanics", id);
        let mechanics = self.service.get_mechanics(id).await?;
        Ok(mechanics.into_iter().map(Into::into).collect())
    }

    pub async fn add_mechanic(&self, id: i64, mechanic_id: i64) -> AppResult<EmployeeResponse> {
        info!("POST /api/v1/managers/{}/mechanics/{}/add", id, mechanic_id);
        Ok(self.service.assign_mechanic(id, mechanic_id).await?.into())
    }

    pub async fn remove_mechanic(&self, id: i64, mechanic_id: i64) -> AppResult<EmployeeResponse> {
        info!("DELETE /api/v1/managers/{}/mechanics/{}/remove", id, mechanic_id);
        Ok(self.service.remove_mechanic(id, mechanic_id).await?.into())
    }

    pub async fn associates(&self, id: i64) -> AppResult<Vec<EmployeeResponse>> {
        info!("GET /api/v1/managers/{}/associates", id);
        let associates = self.service.get_associates(id).await?;
        Ok(associates.into_iter().map(Into::into).collect())
    }

    pub async fn add_associate(&self, id: i64, associate_id: i64) -> AppResult<EmployeeResponse> {
        info!("POST /api/v1/managers/{}/associates/{}/add", id, associate_id);
        Ok(self.service.assign_associate(id, associate_id).await?.into())
    }

    pub async fn remove_associate(&self, id: i64, associate_id: i64) -> AppResult<EmployeeResponse> {
        info!("DELETE /api/v1/managers/{}/associates/{}/remove", id, associate_id);
        Ok(self.service.remove_associate(id, associate_id).await?.into())
    }
}
