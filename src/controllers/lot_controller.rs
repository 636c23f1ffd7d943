use tracing::info;

use crate::dto::{LotRequest, LotResponse};
use crate::services::LotService;
use crate::state::AppState;
use crate::utils::errors::AppResult;

pub struct LotController {
    service: LotService,
}

impl LotController {
    pub fn new(state: &AppState) -> Self {
        Self {
            service: LotService::new(&state.repositories),
        }
    }

    pub async fn create(&self, request: LotRequest) -> AppResult<LotResponse> {
        info!("POST /api/v1/lots/");
        Ok(self.service.add_lot(request.into_entity()).await?.into())
    }

    pub async fn list(&self) -> AppResult<Vec<LotResponse>> {
        info!("GET /api/v1/lots/");
        let lots = self.service.get_lots().await?;
        Ok(lots.into_iter().map(Into::into).collect())
    }

    pub async fn get(&self, id: i64) -> AppResult<LotResponse> {
        info!("GET /api/v1/lots/{}", id);
        Ok(self.service.get_lot(id).await?.into())
    }

    pub async fn update(&self, id: i64, request: LotRequest) -> AppResult<LotResponse> {
        info!("PUT /api/v1/lots/{}", id);
        Ok(self.service.edit_lot(id, request.into_entity()).await?.into())
    }

    pub async fn delete(&self, id: i64) -> AppResult<LotResponse> {
        info!("DELETE /api/v1/lots/{}", id);
        Ok(self.service.delete_lot(id).await?.into())
    }
}
