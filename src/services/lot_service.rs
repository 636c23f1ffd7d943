use std::sync::Arc;

use super::crud_service::CrudService;
use super::relationship::ensure_exists;
use crate::models::{Location, Lot};
use crate::repositories::{Repositories, Repository};
use crate::utils::errors::AppResult;

pub struct LotService {
    lots: CrudService<Lot>,
    locations: Arc<dyn Repository<Location>>,
}

impl LotService {
    pub fn new(repositories: &Repositories) -> Self {
        Self {
            lots: CrudService::new(repositories.lots.clone()),
            locations: repositories.locations.clone(),
        }
    }

    pub async fn add_lot(&self, lot: Lot) -> AppResult<Lot> {
        ensure_exists(self.locations.as_ref(), lot.location_id).await?;
        self.lots.add(lot).await
    }

    pub async fn get_lots(&self) -> AppResult<Vec<Lot>> {
        self.lots.list().await
    }

    pub async fn get_lot(&self, id: i64) -> AppResult<Lot> {
        self.lots.get(id).await
    }

    pub async fn edit_lot(&self, id: i64, lot: Lot) -> AppResult<Lot> {
        ensure_exists(self.locations.as_ref(), lot.location_id).await?;
        self.lots.edit(id, lot).await
    }

    pub async fn delete_lot(&self, id: i64) -> AppResult<Lot> {
        self.lots.delete(id).await
    }
}
