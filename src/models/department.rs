use sqlx::FromRow;

use super::EntityKind;
use crate::repositories::{Entity, PgQueryAs};

#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Department {
    pub id: i64,
    pub name: String,
    pub location_id: Option<i64>,
    /// Empleado de tipo `MANAGER` a cargo del departamento.
    pub manager_id: Option<i64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DepartmentReference {
    Location,
    Manager,
}

impl Entity for Department {
    type Reference = DepartmentReference;

    const TABLE: &'static str = "departments";
    const KIND: EntityKind = EntityKind::Department;
    const COLUMNS: &'static [&'static str] = &["name", "location_id", "manager_id"];

    fn id(&self) -> i64 {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = id;
    }

    fn reference(&self, field: DepartmentReference) -> Option<i64> {
        match field {
            DepartmentReference::Location => self.location_id,
            DepartmentReference::Manager => self.manager_id,
        }
    }

    fn set_reference(&mut self, field: DepartmentReference, value: Option<i64>) {
        match field {
            DepartmentReference::Location => self.location_id = value,
            DepartmentReference::Manager => self.manager_id = value,
        }
    }

    fn reference_column(field: DepartmentReference) -> &'static str {
        match field {
            DepartmentReference::Location => "location_id",
            DepartmentReference::Manager => "manager_id",
        }
    }

    fn bind_columns<'q>(&'q self, query: PgQueryAs<'q, Self>) -> PgQueryAs<'q, Self> {
        query
            .bind(&self.name)
            .bind(self.location_id)
            .bind(self.manager_id)
    }
}
