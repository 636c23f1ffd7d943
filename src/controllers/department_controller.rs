use tracing::info;

use crate::dto::{DepartmentRequest, DepartmentResponse, EmployeeResponse};
use crate::services::DepartmentService;
use crate::state::AppState;
use crate::utils::errors::AppResult;

pub struct DepartmentController {
    service: DepartmentService,
}

impl DepartmentController {
    pub fn new(state: &AppState) -> Self {
        Self {
            service: DepartmentService::new(&state.repositories, state.bcrypt_cost()),
        }
    }

    pub async fn create(&self, request: DepartmentRequest) -> AppResult<DepartmentResponse> {
        info!("POST /api/v1/departments/");
        let department = self.service.add_department(request.into_entity()).await?;
        Ok(department.into())
    }

    pub async fn list(&self) -> AppResult<Vec<DepartmentResponse>> {
        info!("GET /api/v1/departments/");
        let departments = self.service.get_departments().await?;
        Ok(departments.into_iter().map(Into::into).collect())
    }

    pub async fn get(&self, id: i64) -> AppResult<DepartmentResponse> {
        info!("GET /api/v1/departments/{}", id);
        Ok(self.service.get_department(id).await?.into())
    }

    pub async fn update(&self, id: i64, request: DepartmentRequest) -> AppResult<DepartmentResponse> {
        info!("PUT /api/v1/departments/{}", id);
        let department = self.service.edit_department(id, request.into_entity()).await?;
        Ok(department.into())
    }

    pub async fn delete(&self, id: i64) -> AppResult<DepartmentResponse> {
        info!("DELETE /api/v1/departments/{}", id);
        Ok(self.service.delete_department(id).await?.into())
    }

    pub async fn mechanics(&self, id: i64) -> AppResult<Vec<EmployeeResponse>> {
        info!("GET /api/v1/departments/{}/mechanics", id);
        let mechanics = self.service.get_mechanics(id).await?;
        Ok(mechanics.into_iter().map(Into::into).collect())
    }

    pub async fn add_mechanic(&self, id: i64, mechanic_id: i64) -> AppResult<DepartmentResponse> {
        info!("POST /api/v1/departments/{}/mechanics/{}/add", id, mechanic_id);
        Ok(self.service.assign_mechanic(id, mechanic_id).await?.into())
    }

    pub async fn remove_mechanic(&self, id: i64, mechanic_id: i64) -> AppResult<DepartmentResponse> {
        info!("DELETE /api/v1/departments/{}/mechanics/{}/remove", id, mechanic_id);
        Ok(self.service.remove_mechanic(id, mechanic_id).await?.into())
    }
}
