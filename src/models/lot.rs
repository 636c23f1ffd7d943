use sqlx::FromRow;

use super::EntityKind;
use crate::repositories::{Entity, PgQueryAs};

/// Lote de estacionamiento o exposición de una sede.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Lot {
    pub id: i64,
    pub size: f64,
    pub location_id: Option<i64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LotReference {
    Location,
}

impl Entity for Lot {
    type Reference = LotReference;

    const TABLE: &'static str = "lots";
    const KIND: EntityKind = EntityKind::Lot;
    const COLUMNS: &'static [&'static str] = &["size", "location_id"];

    fn id(&self) -> i64 {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = id;
    }

    fn reference(&self, field: LotReference) -> Option<i64> {
        match field {
            LotReference::Location => self.location_id,
        }
    }

    fn set_reference(&mut self, field: LotReference, value: Option<i64>) {
        match field {
            LotReference::Location => self.location_id = value,
        }
    }

    fn reference_column(field: LotReference) -> &'static str {
        match field {
            LotReference::Location => "location_id",
        }
    }

    fn bind_columns<'q>(&'q self, query: PgQueryAs<'q, Self>) -> PgQueryAs<'q, Self> {
        query.bind(self.size).bind(self.location_id)
    }
}
