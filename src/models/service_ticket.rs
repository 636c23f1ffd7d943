use chrono::NaiveDate;
use sqlx::FromRow;

use super::EntityKind;
use crate::repositories::{Entity, PgQueryAs};

/// Reparación o mantenimiento que atiende como mucho un mecánico.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct ServiceTicket {
    pub id: i64,
    pub description: String,
    pub date_created: NaiveDate,
    pub date_closed: Option<NaiveDate>,
    pub mechanic_id: Option<i64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceTicketReference {
    Mechanic,
}

impl Entity for ServiceTicket {
    type Reference = ServiceTicketReference;

    const TABLE: &'static str = "service_tickets";
    const KIND: EntityKind = EntityKind::ServiceTicket;
    const COLUMNS: &'static [&'static str] =
        &["description", "date_created", "date_closed", "mechanic_id"];

    fn id(&self) -> i64 {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = id;
    }

    fn reference(&self, field: ServiceTicketReference) -> Option<i64> {
        match field {
            ServiceTicketReference::Mechanic => self.mechanic_id,
        }
    }

    fn set_reference(&mut self, field: ServiceTicketReference, value: Option<i64>) {
        match field {
            ServiceTicketReference::Mechanic => self.mechanic_id = value,
        }
    }

    fn reference_column(field: ServiceTicketReference) -> &'static str {
        match field {
            ServiceTicketReference::Mechanic => "mechanic_id",
        }
    }

    fn bind_columns<'q>(&'q self, query: PgQueryAs<'q, Self>) -> PgQueryAs<'q, Self> {
        query
            .bind(&self.description)
            .bind(self.date_created)
            .bind(self.date_closed)
            .bind(self.mechanic_id)
    }
}
