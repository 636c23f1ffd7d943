use tracing::info;

use crate::dto::{
    DepartmentResponse, EmployeeResponse, LocationRequest, LocationResponse, LotResponse,
};
use crate::services::LocationService;
use crate::state::AppState;
use crate::utils::errors::AppResult;

pub struct LocationController {
    service: LocationService,
}

impl LocationController {
    pub fn new(state: &AppState) -> Self {
        Self {
            service: LocationService::new(&state.repositories, state.bcrypt_cost()),
        }
    }

    pub async fn create(&self, request: LocationRequest) -> AppResult<LocationResponse> {
        info!("POST /api/v1/locations/");
        let location = self.service.add_location(request.into_entity()).await?;
        Ok(location.into())
    }

    pub async fn list(&self) -> AppResult<Vec<LocationResponse>> {
        info!("GET /api/v1/locations/");
        let locations = self.service.get_locations().await?;
        Ok(locations.into_iter().map(Into::into).collect())
    }

    pub async fn get(&self, id: i64) -> AppResult<LocationResponse> {
        info!("GET /api/v1/locations/{}", id);
        Ok(self.service.get_location(id).await?.into())
    }

    pub async fn update(&self, id: i64, request: LocationRequest) -> AppResult<LocationResponse> {
        info!("PUT /api/v1/locations/{}", id);
        let location = self.service.edit_location(id, request.into_entity()).await?;
        Ok(location.into())
    }

    pub async fn delete(&self, id: i64) -> AppResult<LocationResponse> {
        info!("DELETE /api/v1/locations/{}", id);
        Ok(self.service.delete_location(id).await?.into())
    }

    pub async fn lots(&self, id: i64) -> AppResult<Vec<LotResponse>> {
        info!("GET /api/v1/locations/{}/lots", id);
        let lots = self.service.get_lots(id).await?;
        Ok(lots.into_iter().map(Into::into).collect())
    }

    pub async fn add_lot(&self, id: i64, lot_id: i64) -> AppResult<LocationResponse> {
        info!("POST /api/v1/locations/{}/lots/{}/add", id, lot_id);
        Ok(self.service.add_lot(id, lot_id).await?.into())
    }

    pub async fn remove_lot(&self, id: i64, lot_id: i64) -> AppResult<LocationResponse> {
        info!("DELETE /api/v1/locations/{}/lots/{}/remove", id, lot_id);
        Ok(self.service.remove_lot(id, lot_id).await?.into())
    }

    pub async fn departments(&self, id: i64) -> AppResult<Vec<DepartmentResponse>> {
        info!("GET /api/v1/locations/{}/departments", id);
        let departments = self.service.get_departments(id).await?;
        Ok(departments.into_iter().map(Into::into).collect())
    }

    pub async fn add_department(&self, id: i64, department_id: i64) -> AppResult<LocationResponse> {
        info!("POST /api/v1/locations/{}/departments/{}/add", id, department_id);
        Ok(self.service.add_department(id, department_id).await?.into())
    }

    pub async fn remove_department(&self, id: i64, department_id: i64) -> AppResult<LocationResponse> {
        info!("DELETE /api/v1/locations/{}/departments/{}/remove", id, department_id);
        Ok(self.service.remove_department(id, department_id).await?.into())
    }

    pub async fn mechanics(&self, id: i64) -> AppResult<Vec<EmployeeResponse>> {
        info!("GET /api/v1/locations/{}/mechanics", id);
        let mechanics = self.service.get_mechanics(id).await?;
        Ok(mechanics.into_iter().map(Into::into).collect())
    }

    pub async fn add_mechanic(&self, id: i64, mechanic_id: i64) -> AppResult<LocationResponse> {
        info!("POST /api/v1/locations/{}/mechanics/{}/add", id, mechanic_id);
        Ok(self.service.assign_mechanic(id, mechanic_id).await?.into())
    }

    pub async fn remove_mechanic(&self, id: i64, mechanic_id: i64) -> AppResult<LocationResponse> {
        info!("DELETE /api/v1/locations/{}/mechanics/{}/remove", id, mechanic_id);
        Ok(self.service.remove_mechanic(id, mechanic_id).await?.into())
    }
}
