use std::sync::Arc;

use tracing::info;

use crate::repositories::{Entity, Repository};
use crate::utils::errors::{not_found_error, AppResult};

/// Alta, consulta, edición y borrado sobre una tabla, común a todos los servicios.
pub struct CrudService<T: Entity> {
    repository: Arc<dyn Repository<T>>,
}

impl<T: Entity> Clone for CrudService<T> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<T: Entity> CrudService<T> {
    pub fn new(repository: Arc<dyn Repository<T>>) -> Self {
        Self { repository }
    }

    pub fn repository(&self) -> &Arc<dyn Repository<T>> {
        &self.repository
    }

    pub async fn add(&self, entity: T) -> AppResult<T> {
        let saved = self.repository.insert(entity).await?;
        info!("Created {} {}", T::KIND, saved.id());
        Ok(saved)
    }

    pub async fn list(&self) -> AppResult<Vec<T>> {
        self.repository.find_all().await
    }

    pub async fn get(&self, id: i64) -> AppResult<T> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error(T::KIND, id))
    }

    /// Borra el registro y devuelve cómo estaba.
    pub async fn delete(&self, id: i64) -> AppResult<T> {
        let snapshot = self.get(id).await?;
        if !self.repository.delete(id).await? {
            return Err(not_found_error(T::KIND, id));
        }
        info!("Deleted {} {}", T::KIND, id);
        Ok(snapshot)
    }

    /// Reemplazo completo: cada columna toma el valor de `values`.
    pub async fn edit(&self, id: i64, mut values: T) -> AppResult<T> {
        self.get(id).await?;
        values.set_id(id);
        let updated = self.repository.update(values).await?;
        info!("Updated {} {}", T::KIND, id);
        Ok(updated)
    }
}
