use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{Entity, Repository};
use crate::utils::errors::{not_found_error, AppResult};

/// Tabla en memoria del proceso. Los ids empiezan en 1 y no se reutilizan.
pub struct MemoryRepository<T> {
    rows: RwLock<BTreeMap<i64, T>>,
    sequence: AtomicI64,
}

impl<T> MemoryRepository<T> {
    pub fn new() -> Self {
        Self {
            rows: RwLock::new(BTreeMap::new()),
            sequence: AtomicI64::new(0),
        }
    }
}

impl<T> Default for MemoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T: Entity> Repository<T> for MemoryRepository<T> {
    async fn find_all(&self) -> AppResult<Vec<T>> {
        let rows = self.rows.read().await;
        Ok(rows.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<T>> {
        let rows = self.rows.read().await;
        Ok(rows.get(&id).cloned())
    }

    async fn find_by_reference(&self, field: T::Reference, parent_id: i64) -> AppResult<Vec<T>> {
        let rows = self.rows.read().await;
        Ok(rows
            .values()
            .filter(|row| row.reference(field) == Some(parent_id))
            .cloned()
            .collect())
    }

    async fn insert(&self, mut entity: T) -> AppResult<T> {
        let id = self.sequence.fetch_add(1, Ordering::SeqCst) + 1;
        entity.set_id(id);

        let mut rows = self.rows.write().await;
        rows.insert(id, entity.clone());
        Ok(entity)
    }

    async fn update(&self, entity: T) -> AppResult<T> {
        let mut rows = self.rows.write().await;
        match rows.get_mut(&entity.id()) {
            Some(row) => {
                *row = entity.clone();
                Ok(entity)
            }
            None => Err(not_found_error(T::KIND, entity.id())),
        }
    }

    async fn delete(&self, id: i64) -> AppResult<bool> {
        let mut rows = self.rows.write().await;
        Ok(rows.remove(&id).is_some())
    }

    async fn assign_reference(&self, field: T::Reference, id: i64, parent_id: i64) -> AppResult<Option<T>> {
        let mut rows = self.rows.write().await;
        match rows.get_mut(&id) {
            Some(row) if row.reference(field).is_none() => {
                row.set_reference(field, Some(parent_id));
                Ok(Some(row.clone()))
            }
            _ => Ok(None),
        }
    }

    async fn release_reference(&self, field: T::Reference, id: i64, parent_id: i64) -> AppResult<Option<T>> {
        let mut rows = self.rows.write().await;
        match rows.get_mut(&id) {
            Some(row) if row.reference(field) == Some(parent_id) => {
                row.set_reference(field, None);
                Ok(Some(row.clone()))
            }
            _ => Ok(None),
        }
    }

    async fn clear_reference(&self, field: T::Reference, parent_id: i64) -> AppResult<u64> {
        let mut rows = self.rows.write().await;
        let mut cleared = 0;
        for row in rows.values_mut() {
            if row.reference(field) == Some(parent_id) {
                row.set_reference(field, None);
                cleared += 1;
            }
        }
        Ok(cleared)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Lot, LotReference};
    use crate::utils::errors::AppError;

    fn lot(size: f64, location_id: Option<i64>) -> Lot {
        Lot {
            id: 0,
            size,
            location_id,
        }
    }

    #[tokio::test]
    async fn test_insert_assigns_increasing_ids() {
        let repo = MemoryRepository::<Lot>::new();
        let first = repo.insert(lot(10.0, None)).await.unwrap();
        let second = repo.insert(lot(20.0, None)).await.unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(repo.find_all().await.unwrap(), vec![first, second]);
    }

    #[tokio::test]
    async fn test_deleted_ids_are_not_reused() {
        let repo = MemoryRepository::<Lot>::new();
        let first = repo.insert(lot(10.0, None)).await.unwrap();
        assert!(repo.delete(first.id).await.unwrap());
        assert!(!repo.delete(first.id).await.unwrap());

        let next = repo.insert(lot(11.0, None)).await.unwrap();
        assert_eq!(next.id, 2);
        assert!(repo.find_by_id(first.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_update_missing_row_is_not_found() {
        let repo = MemoryRepository::<Lot>::new();
        let mut ghost = lot(1.0, None);
        ghost.id = 99;

        let err = repo.update(ghost).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_reference_queries() {
        let repo = MemoryRepository::<Lot>::new();
        let a = repo.insert(lot(1.0, Some(7))).await.unwrap();
        repo.insert(lot(2.0, Some(8))).await.unwrap();
        let c = repo.insert(lot(3.0, Some(7))).await.unwrap();

        let found = repo.find_by_reference(LotReference::Location, 7).await.unwrap();
        assert_eq!(found, vec![a.clone(), c.clone()]);

        let cleared = repo.clear_reference(LotReference::Location, 7).await.unwrap();
        assert_eq!(cleared, 2);
        assert!(repo
            .find_by_reference(LotReference::Location, 7)
            .await
            .unwrap()
            .is_empty());
        assert_eq!(repo.find_by_id(a.id).await.unwrap().unwrap().location_id, None);
    }

    #[tokio::test]
    async fn test_assign_reference_only_fills_empty_link() {
        let repo = MemoryRepository::<Lot>::new();
        let free = repo.insert(lot(1.0, None)).await.unwrap();
        let taken = repo.insert(lot(2.0, Some(8))).await.unwrap();

        let assigned = repo
            .assign_reference(LotReference::Location, free.id, 7)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(assigned.location_id, Some(7));

        assert!(repo
            .assign_reference(LotReference::Location, taken.id, 7)
            .await
            .unwrap()
            .is_none());
        assert!(repo
            .assign_reference(LotReference::Location, 99, 7)
            .await
            .unwrap()
            .is_none());
        assert_eq!(repo.find_by_id(taken.id).await.unwrap().unwrap().location_id, Some(8));
    }

    #[tokio::test]
    async fn test_release_reference_checks_parent() {
        let repo = MemoryRepository::<Lot>::new();
        let linked = repo.insert(lot(1.0, Some(8))).await.unwrap();

        assert!(repo
            .release_reference(LotReference::Location, linked.id, 7)
            .await
            .unwrap()
            .is_none());
        let released = repo
            .release_reference(LotReference::Location, linked.id, 8)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(released.location_id, None);
    }
}
