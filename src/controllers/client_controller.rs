use tracing::info;

use crate::dto::{ClientRequest, ClientResponse};
use crate::services::ClientService;
use crate::state::AppState;
use crate::utils::errors::AppResult;

pub struct ClientController {
    service: ClientService,
}

impl ClientController {
    pub fn new(state: &AppState) -> Self {
        Self {
            service: ClientService::new(&state.repositories),
        }
    }

    pub async fn create(&self, request: ClientRequest) -> AppResult<ClientResponse> {
        info!("POST /api/v1/clients/");
        let client = self.service.add_client(request.into_entity()).await?;
        Ok(client.into())
    }

    pub async fn list(&self) -> AppResult<Vec<ClientResponse>> {
        info!("GET /api/v1/clients/");
        let clients = self.service.get_clients().await?;
        Ok(clients.into_iter().map(Into::into).collect())
    }

    pub async fn get(&self, id: i64) -> AppResult<ClientResponse> {
        info!("GET /api/v1/clients/{}", id);
        Ok(self.service.get_client(id).await?.into())
    }

    pub async fn update(&self, id: i64, request: ClientRequest) -> AppResult<ClientResponse> {
        info!("PUT /api/v1/clients/{}", id);
        let client = self.service.edit_client(id, request.into_entity()).await?;
        Ok(client.into())
    }

    pub async fn delete(&self, id: i64) -> AppResult<ClientResponse> {
        info!("DELETE /api/v1/clients/{}", id);
        Ok(self.service.delete_client(id).await?.into())
    }
}
