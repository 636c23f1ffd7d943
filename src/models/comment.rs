use chrono::NaiveDate;
use sqlx::FromRow;

use super::EntityKind;
use crate::repositories::{Entity, PgQueryAs};

/// Nota de un mecánico sobre un ticket de servicio.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Comment {
    pub id: i64,
    pub ticket_id: Option<i64>,
    pub mechanic_id: Option<i64>,
    pub date_created: NaiveDate,
    pub content: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentReference {
    ServiceTicket,
    Mechanic,
}

impl Entity for Comment {
    type Reference = CommentReference;

    const TABLE: &'static str = "comments";
    const KIND: EntityKind = EntityKind::Comment;
    const COLUMNS: &'static [&'static str] =
        &["ticket_id", "mechanic_id", "date_created", "content"];

    fn id(&self) -> i64 {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = id;
    }

    fn reference(&self, field: CommentReference) -> Option<i64> {
        match field {
            CommentReference::ServiceTicket => self.ticket_id,
            CommentReference::Mechanic => self.mechanic_id,
        }
    }

    fn set_reference(&mut self, field: CommentReference, value: Option<i64>) {
        match field {
            CommentReference::ServiceTicket => self.ticket_id = value,
            CommentReference::Mechanic => self.mechanic_id = value,
        }
    }

    fn reference_column(field: CommentReference) -> &'static str {
        match field {
            CommentReference::ServiceTicket => "ticket_id",
            CommentReference::Mechanic => "mechanic_id",
        }
    }

    fn bind_columns<'q>(&'q self, query: PgQueryAs<'q, Self>) -> PgQueryAs<'q, Self> {
        query
            .bind(self.ticket_id)
            .bind(self.mechanic_id)
            .bind(self.date_created)
            .bind(&self.content)
    }
}
