use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::Lot;

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct LotRequest {
    /// Unidades cuadradas.
    #[validate(range(min = 0.0))]
    pub size: f64,
    pub location_id: Option<i64>,
}

impl LotRequest {
    pub fn into_entity(self) -> Lot {
        Lot {
            id: 0,
            size: self.size,
            location_id: self.location_id,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LotResponse {
    pub id: i64,
    pub size: f64,
    pub location_id: Option<i64>,
}

impl From<Lot> for LotResponse {
    fn from(lot: Lot) -> Self {
        Self {
            id: lot.id,
            size: lot.size,
            location_id: lot.location_id,
        }
    }
}
