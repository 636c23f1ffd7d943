//! Modelo de empleado
//!
//! Gerentes, mecánicos y vendedores comparten la tabla `employees`;
//! `employee_type` los distingue. Solo mecánicos y vendedores usan
//! `manager_id` y solo los mecánicos se asignan a un departamento.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};

use super::EntityKind;
use crate::repositories::{Entity, PgQueryAs};

/// ENUM `gender`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Type, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[sqlx(type_name = "gender", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Gender {
    Male,
    Female,
    Other,
}

/// ENUM `employee_type`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Type, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[sqlx(type_name = "employee_type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EmployeeType {
    Manager,
    Mechanic,
    SalesAssociate,
}

impl EmployeeType {
    pub fn kind(self) -> EntityKind {
        match self {
            EmployeeType::Manager => EntityKind::Manager,
            EmployeeType::Mechanic => EntityKind::Mechanic,
            EmployeeType::SalesAssociate => EntityKind::SalesAssociate,
        }
    }
}

/// ENUM `employee_role`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Type, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[sqlx(type_name = "employee_role", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Admin,
    User,
}

#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Employee {
    pub id: i64,
    pub ssn: String,
    pub first_name: String,
    pub middle_initial: Option<String>,
    pub last_name: String,
    pub gender: Gender,
    pub date_of_birth: NaiveDate,
    pub phone_number: String,
    pub email: String,
    pub work_location_id: Option<i64>,
    pub salary: Decimal,
    pub date_started: NaiveDate,
    pub address_id: Option<i64>,
    pub hours_worked: f64,
    pub employee_type: EmployeeType,
    pub is_active: bool,
    pub role: Role,
    pub username: String,
    /// Hash bcrypt, nunca la contraseña en claro.
    pub password: String,
    pub manager_id: Option<i64>,
    pub department_id: Option<i64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmployeeReference {
    WorkLocation,
    Address,
    Manager,
    Department,
}

impl Entity for Employee {
    type Reference = EmployeeReference;

    const TABLE: &'static str = "employees";
    const KIND: EntityKind = EntityKind::Employee;
    const COLUMNS: &'static [&'static str] = &[
        "ssn",
        "first_name",
        "middle_initial",
        "last_name",
        "gender",
        "date_of_birth",
        "phone_number",
        "email",
        "work_location_id",
        "salary",
        "date_started",
        "address_id",
        "hours_worked",
        "employee_type",
        "is_active",
        "role",
        "username",
        "password",
        "manager_id",
        "department_id",
    ];

    fn id(&self) -> i64 {
        self.id
    }

    fn set_id(&mut self, id: i64) {
        self.id = id;
    }

    fn reference(&self, field: EmployeeReference) -> Option<i64> {
        match field {
            EmployeeReference::WorkLocation => self.work_location_id,
            EmployeeReference::Address => self.address_id,
            EmployeeReference::Manager => self.manager_id,
            EmployeeReference::Department => self.department_id,
        }
    }

    fn set_reference(&mut self, field: EmployeeReference, value: Option<i64>) {
        match field {
            EmployeeReference::WorkLocation => self.work_location_id = value,
            EmployeeReference::Address => self.address_id = value,
            EmployeeReference::Manager => self.manager_id = value,
            EmployeeReference::Department => self.department_id = value,
        }
    }

    fn reference_column(field: EmployeeReference) -> &'static str {
        match field {
            EmployeeReference::WorkLocation => "work_location_id",
            EmployeeReference::Address => "address_id",
            EmployeeReference::Manager => "manager_id",
            EmployeeReference::Department => "department_id",
        }
    }

    fn bind_columns<'q>(&'q self, query: PgQueryAs<'q, Self>) -> PgQueryAs<'q, Self> {
        query
            .bind(&self.ssn)
            .bind(&self.first_name)
            .bind(&self.middle_initial)
            .bind(&self.last_name)
            .bind(self.gender)
            .bind(self.date_of_birth)
            .bind(&self.phone_number)
            .bind(&self.email)
            .bind(self.work_location_id)
            .bind(self.salary)
            .bind(self.date_started)
            .bind(self.address_id)
            .bind(self.hours_worked)
            .bind(self.employee_type)
            .bind(self.is_active)
            .bind(self.role)
            .bind(&self.username)
            .bind(&self.password)
            .bind(self.manager_id)
            .bind(self.department_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enums_use_upper_snake_case_on_the_wire() {
        assert_eq!(
            serde_json::to_string(&EmployeeType::SalesAssociate).unwrap(),
            "\"SALES_ASSOCIATE\""
        );
        assert_eq!(
            serde_json::from_str::<Gender>("\"FEMALE\"").unwrap(),
            Gender::Female
        );
        assert!(serde_json::from_str::<Role>("\"admin\"").is_err());
    }

    #[test]
    fn test_employee_type_kind() {
        assert_eq!(EmployeeType::Mechanic.kind(), EntityKind::Mechanic);
        assert_eq!(EmployeeType::SalesAssociate.kind().to_string(), "SalesAssociate");
    }

    #[test]
    fn test_columns_match_bind_order_length() {
        assert_eq!(Employee::COLUMNS.len(), 20);
        assert!(!Employee::COLUMNS.contains(&"id"));
    }
}
