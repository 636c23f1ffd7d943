use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::Address;
use crate::utils::validation::validate_not_blank;

/// Cuerpo de `POST` y `PUT /api/v1/addresses`.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AddressRequest {
    #[validate(custom = "validate_not_blank", length(max = 255))]
    pub street: String,
    #[validate(custom = "validate_not_blank", length(max = 100))]
    pub city: String,
    #[validate(custom = "validate_not_blank", length(max = 100))]
    pub state: String,
    #[validate(range(min = 0, max = 99999))]
    pub zip_code: i32,
}

impl AddressRequest {
    pub fn into_entity(self) -> Address {
        Address {
            id: 0,
            street: self.street,
            city: self.city,
            state: self.state,
            zip_code: self.zip_code,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AddressResponse {
    pub id: i64,
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip_code: i32,
}

impl From<Address> for AddressResponse {
    fn from(address: Address) -> Self {
        Self {
            id: address.id,
            street: address.street,
            city: address.city,
            state: address.state,
            zip_code: address.zip_code,
        }
    }
}
