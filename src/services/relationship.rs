//! Relaciones uno a muchos
//!
//! Un vínculo es la clave foránea del hijo. Asignarla añade el hijo a la
//! colección del padre y limpiarla lo quita, así ambos lados siempre
//! coinciden.

use std::sync::Arc;

use tracing::info;

use crate::models::{Employee, EmployeeType, EntityKind};
use crate::repositories::{Entity, Repository};
use crate::utils::errors::{already_assigned_error, not_found_error, AppResult};

pub struct Relation<C: Entity> {
    children: Arc<dyn Repository<C>>,
    field: C::Reference,
    parent_kind: EntityKind,
    child_kind: EntityKind,
}

impl<C: Entity> Clone for Relation<C> {
    fn clone(&self) -> Self {
        Self {
            children: Arc::clone(&self.children),
            field: self.field,
            parent_kind: self.parent_kind,
            child_kind: self.child_kind,
        }
    }
}

impl<C: Entity> Relation<C> {
    pub fn new(children: Arc<dyn Repository<C>>, field: C::Reference, parent_kind: EntityKind) -> Self {
        Self {
            children,
            field,
            parent_kind,
            child_kind: C::KIND,
        }
    }

    /// Nombre del hijo en los mensajes, p. ej. `Mechanic` en vez de `Employee`.
    pub fn with_child_kind(mut self, child_kind: EntityKind) -> Self {
        self.child_kind = child_kind;
        self
    }

    /// Already-Assigned si el hijo apunta a otro padre; volver a vincularlo
    /// al padre actual no cambia nada. La escritura solo ocurre mientras el
    /// vínculo guardado sigue vacío: dos vínculos concurrentes no pueden
    /// ganar ambos y no se reescriben otras columnas.
    pub async fn link(&self, parent_id: i64, child: C) -> AppResult<C> {
        let id = child.id();
        loop {
            if let Some(linked) = self.children.assign_reference(self.field, id, parent_id).await? {
                info!(
                    "Linked {} {} to {} {}",
                    self.child_kind, id, self.parent_kind, parent_id
                );
                return Ok(linked);
            }

            let current = self
                .children
                .find_by_id(id)
                .await?
                .ok_or_else(|| not_found_error(self.child_kind, id))?;
            match current.reference(self.field) {
                Some(owner) if owner == parent_id => return Ok(current),
                Some(owner) => {
                    return Err(already_assigned_error(
                        self.child_kind,
                        id,
                        self.parent_kind,
                        owner,
                    ))
                }
                // desvinculado entre medias, reintentar
                None => continue,
            }
        }
    }

    /// Limpia el vínculo si el hijo apunta a `parent_id`.
    pub async fn unlink(&self, parent_id: i64, child: C) -> AppResult<C> {
        let id = child.id();
        match self.children.release_reference(self.field, id, parent_id).await? {
            Some(unlinked) => {
                info!(
                    "Unlinked {} {} from {} {}",
                    self.child_kind, id, self.parent_kind, parent_id
                );
                Ok(unlinked)
            }
            None => Ok(self.children.find_by_id(id).await?.unwrap_or(child)),
        }
    }

    pub async fn children(&self, parent_id: i64) -> AppResult<Vec<C>> {
        self.children.find_by_reference(self.field, parent_id).await
    }

    /// Desvincula todos los hijos de un padre que se va a borrar.
    pub async fn detach_all(&self, parent_id: i64) -> AppResult<u64> {
        self.children.clear_reference(self.field, parent_id).await
    }
}

/// Not-Found salvo que `id` esté vacío o nombre un registro existente.
pub async fn ensure_exists<T: Entity>(repository: &dyn Repository<T>, id: Option<i64>) -> AppResult<()> {
    if let Some(id) = id {
        if repository.find_by_id(id).await?.is_none() {
            return Err(not_found_error(T::KIND, id));
        }
    }
    Ok(())
}

/// Como [`ensure_exists`], pero el empleado además debe ser de `employee_type`.
pub async fn ensure_employee(
    repository: &dyn Repository<Employee>,
    id: Option<i64>,
    employee_type: EmployeeType,
) -> AppResult<()> {
    if let Some(id) = id {
        match repository.find_by_id(id).await? {
            Some(employee) if employee.employee_type == employee_type => {}
            _ => return Err(not_found_error(employee_type.kind(), id)),
        }
    }
    Ok(())
}
