use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::models::ServiceTicket;
use crate::utils::validation::validate_not_blank;

/// Fechas en formato `YYYY-MM-DD`.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_ticket_dates"))]
pub struct ServiceTicketRequest {
    #[validate(custom = "validate_not_blank", length(max = 2000))]
    pub description: String,
    pub date_created: NaiveDate,
    pub date_closed: Option<NaiveDate>,
    pub mechanic_id: Option<i64>,
}

fn validate_ticket_dates(request: &ServiceTicketRequest) -> Result<(), ValidationError> {
    match request.date_closed {
        Some(closed) if closed < request.date_created => {
            Err(ValidationError::new("date_closed_before_date_created"))
        }
        _ => Ok(()),
    }
}

impl ServiceTicketRequest {
    pub fn into_entity(self) -> ServiceTicket {
        ServiceTicket {
            id: 0,
            description: self.description,
            date_created: self.date_created,
            date_closed: self.date_closed,
            mechanic_id: self.mechanic_id,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ServiceTicketResponse {
    pub id: i64,
    pub description: String,
    pub date_created: NaiveDate,
    pub date_closed: Option<NaiveDate>,
    pub mechanic_id: Option<i64>,
}

impl From<ServiceTicket> for ServiceTicketResponse {
    fn from(ticket: ServiceTicket) -> Self {
        Self {
            id: ticket.id,
            description: ticket.description,
            date_created: ticket.date_created,
            date_closed: ticket.date_closed,
            mechanic_id: ticket.mechanic_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closed_before_created_is_rejected() {
        let request: ServiceTicketRequest = serde_json::from_value(serde_json::json!({
            "description": "Brakes",
            "dateCreated": "2024-03-10",
            "dateClosed": "2024-03-01"
        }))
        .unwrap();
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_omitted_optionals_are_null() {
        let request: ServiceTicketRequest = serde_json::from_value(serde_json::json!({
            "description": "Brakes",
            "dateCreated": "2024-03-10"
        }))
        .unwrap();
        assert!(request.validate().is_ok());
        let ticket = request.into_entity();
        assert_eq!(ticket.date_closed, None);
        assert_eq!(ticket.mechanic_id, None);
    }
}
