use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::Location;
use crate::utils::validation::validate_not_blank;

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct LocationRequest {
    #[validate(custom = "validate_not_blank", length(max = 255))]
    pub name: String,
    pub address_id: Option<i64>,
}

impl LocationRequest {
    pub fn into_entity(self) -> Location {
        Location {
            id: 0,
            name: self.name,
            address_id: self.address_id,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LocationResponse {
    pub id: i64,
    pub name: String,
    pub address_id: Option<i64>,
}

impl From<Location> for LocationResponse {
    fn from(location: Location) -> Self {
        Self {
            id: location.id,
            name: location.name,
            address_id: location.address_id,
        }
    }
}
