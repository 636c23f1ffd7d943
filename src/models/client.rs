use rust_decimal::Decimal;
use sqlx::FromRow;

use super::{EntityKind, Gender};
use crate::repositories::{Entity, PgQueryAs};

/// Posible comprador, opcionalmente seguido por un vendedor.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Client {
    pub id: i64,
    pub ssn: i32,
    pub first_name: String,
    pub last_name: String,
    pub gender: Gender,
    pub email: String,
    pub phone_number: String,
    pub address: String,
    pub sales_associate_id: Option<i64>,
    pub minimum_price: Decimal,
    pub maximum_price: Decimal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientReference {
    SalesAssociate,
}

impl Entity for Client {
    type Reference = ClientReference;

    const TABLE: &'static str = "clients";
    const KIND: EntityKind = EntityKind::Client;
    const COLUMNS: &'static [&'static str] = &[
        "ssn",
        "first_name",
        "last_name",
        "gender",
        "email",
        "phone_number",
        "address",
        "sales_associate_id",
        "minimum_price",
        "maximum_price",
    ];

    fn id(&self) -> i64 {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = id;
    }

    fn reference(&self, field: ClientReference) -> Option<i64> {
        match field {
            ClientReference::SalesAssociate => self.sales_associate_id,
        }
    }

    fn set_reference(&mut self, field: ClientReference, value: Option<i64>) {
        match field {
            ClientReference::SalesAssociate => self.sales_associate_id = value,
        }
    }

    fn reference_column(field: ClientReference) -> &'static str {
        match field {
            ClientReference::SalesAssociate => "sales_associate_id",
        }
    }

    fn bind_columns<'q>(&'q self, query: PgQueryAs<'q, Self>) -> PgQueryAs<'q, Self> {
        query
            .bind(self.ssn)
            .bind(&self.first_name)
            .bind(&self.last_name)
            .bind(self.gender)
            .bind(&self.email)
            .bind(&self.phone_number)
            .bind(&self.address)
            .bind(self.sales_associate_id)
            .bind(self.minimum_price)
            .bind(self.maximum_price)
    }
}
