use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::Department;
use crate::utils::validation::validate_not_blank;

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentRequest {
    #[validate(custom = "validate_not_blank", length(max = 255))]
    pub name: String,
    pub location_id: Option<i64>,
    pub manager_id: Option<i64>,
}

impl DepartmentRequest {
    pub fn into_entity(self) -> Department {
        Department {
            id: 0,
            name: self.name,
            location_id: self.location_id,
            manager_id: self.manager_id,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentResponse {
    pub id: i64,
    pub name: String,
    pub location_id: Option<i64>,
    pub manager_id: Option<i64>,
}

impl From<Department> for DepartmentResponse {
    fn from(department: Department) -> Self {
        Self {
            id: department.id,
            name: department.name,
            location_id: department.location_id,
            manager_id: department.manager_id,
        }
    }
}
