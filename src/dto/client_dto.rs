use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::models::{Client, Gender};
use crate::utils::validation::{validate_amount, validate_not_blank, PHONE_REGEX};

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_price_range"))]
pub struct ClientRequest {
    #[validate(range(min = 0))]
    pub ssn: i32,
    #[validate(custom = "validate_not_blank", length(max = 100))]
    pub first_name: String,
    #[validate(custom = "validate_not_blank", length(max = 100))]
    pub last_name: String,
    pub gender: Gender,
    #[validate(email)]
    pub email: String,
    #[validate(regex = "PHONE_REGEX")]
    pub phone_number: String,
    #[validate(custom = "validate_not_blank", length(max = 255))]
    pub address: String,
    pub sales_associate_id: Option<i64>,
    #[validate(custom = "validate_amount")]
    pub minimum_price: Decimal,
    #[validate(custom = "validate_amount")]
    pub maximum_price: Decimal,
}

/// El mínimo no supera el máximo.
fn validate_price_range(request: &ClientRequest) -> Result<(), ValidationError> {
    if request.minimum_price > request.maximum_price {
        return Err(ValidationError::new("minimum_price_above_maximum_price"));
    }
    Ok(())
}

impl ClientRequest {
    pub fn into_entity(self) -> Client {
        Client {
            id: 0,
            ssn: self.ssn,
            first_name: self.first_name,
            last_name: self.last_name,
            gender: self.gender,
            email: self.email,
            phone_number: self.phone_number,
            address: self.address,
            sales_associate_id: self.sales_associate_id,
            minimum_price: self.minimum_price,
            maximum_price: self.maximum_price,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ClientResponse {
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

impl From<Client> for ClientResponse {
    fn from(client: Client) -> Self {
        Self {
            id: client.id,
            ssn: client.ssn,
            first_name: client.first_name,
            last_name: client.last_name,
            gender: client.gender,
            email: client.email,
            phone_number: client.phone_number,
            address: client.address,
            sales_associate_id: client.sales_associate_id,
            minimum_price: client.minimum_price,
            maximum_price: client.maximum_price,
        }
    }
}
