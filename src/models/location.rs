use sqlx::FromRow;

use super::EntityKind;
use crate::repositories::{Entity, PgQueryAs};

/// Sede del concesionario. Lotes, departamentos y mecánicos apuntan a ella.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Location {
    pub id: i64,
    pub name: String,
    pub address_id: Option<i64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocationReference {
    Address,
}

impl Entity for Location {
    type Reference = LocationReference;

    const TABLE: &'static str = "locations";
    const KIND: EntityKind = EntityKind::Location;
    const COLUMNS: &'static [&'static str] = &["name", "address_id"];

    fn id(&self) -> i64 {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = id;
    }

    fn reference(&self, field: LocationReference) -> Option<i64> {
        match field {
            LocationReference::Address => self.address_id,
        }
    }

    fn set_reference(&mut self, field: LocationReference, value: Option<i64>) {
        match field {
            LocationReference::Address => self.address_id = value,
        }
    }

    fn reference_column(field: LocationReference) -> &'static str {
        match field {
            LocationReference::Address => "address_id",
        }
    }

    fn bind_columns<'q>(&'q self, query: PgQueryAs<'q, Self>) -> PgQueryAs<'q, Self> {
        query.bind(&self.name).bind(self.address_id)
    }
}
