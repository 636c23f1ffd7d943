use tracing::info;

use crate::dto::{AddressRequest, AddressResponse};
use crate::services::AddressService;
use crate::state::AppState;
use crate::utils::errors::AppResult;

pub struct AddressController {
    service: AddressService,
}

impl AddressController {
    pub fn new(state: &AppState) -> Self {
        Self {
            service: AddressService::new(&state.repositories),
        }
    }

    pub async fn create(&self, request: AddressRequest) -> AppResult<AddressResponse> {
        info!("POST /api/v1/addresses/");
        let address = self.service.add_address(request.into_entity()).await?;
        Ok(address.into())
    }

    pub async fn list(&self) -> AppResult<Vec<AddressResponse>> {
        info!("GET /api/v1/addresses/");
        let addresses = self.service.get_addresses().await?;
        Ok(addresses.into_iter().map(Into::into).collect())
    }

    pub async fn get(&self, id: i64) -> AppResult<AddressResponse> {
        info!("GET /api/v1/addresses/{}", id);
        Ok(self.service.get_address(id).await?.into())
    }

    pub async fn update(&self, id: i64, request: AddressRequest) -> AppResult<AddressResponse> {
        info!("PUT /api/v1/addresses/{}", id);
        let address = self.service.edit_address(id, request.into_entity()).await?;
        Ok(address.into())
    }

    pub async fn delete(&self, id: i64) -> AppResult<AddressResponse> {
        info!("DELETE /api/v1/addresses/{}", id);
        Ok(self.service.delete_address(id).await?.into())
    }
}
