use sqlx::FromRow;

use super::{EntityKind, NoReference};
use crate::repositories::{Entity, PgQueryAs};

/// Dirección postal compartida por sedes y empleados.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Address {
    pub id: i64,
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip_code: i32,
}

impl Entity for Address {
    type Reference = NoReference;

    const TABLE: &'static str = "addresses";
    const KIND: EntityKind = EntityKind::Address;
    const COLUMNS: &'static [&'static str] = &["street", "city", "state", "zip_code"];

    fn id(&self) -> i64 {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = id;
    }

    fn reference(&self, field: NoReference) -> Option<i64> {
        match field {}
    }

    fn set_reference(&mut self, field: NoReference, _value: Option<i64>) {
        match field {}
    }

    fn reference_column(field: NoReference) -> &'static str {
        match field {}
    }

    fn bind_columns<'q>(&'q self, query: PgQueryAs<'q, Self>) -> PgQueryAs<'q, Self> {
        query
            .bind(&self.street)
            .bind(&self.city)
            .bind(&self.state)
            .bind(self.zip_code)
    }
}
