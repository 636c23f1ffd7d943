use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::{Employee, EmployeeType, Gender, Role};
use crate::utils::validation::{
    validate_amount, validate_middle_initial, validate_not_blank, PHONE_REGEX, SSN_REGEX,
};

/// Cuerpo compartido por los endpoints de gerentes, mecánicos y vendedores.
/// El subtipo sale de la ruta, nunca del cuerpo.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeRequest {
    #[validate(regex = "SSN_REGEX")]
    pub ssn: String,
    #[validate(custom = "validate_not_blank", length(max = 100))]
    pub first_name: String,
    #[validate(custom = "validate_middle_initial")]
    pub middle_initial: Option<String>,
    #[validate(custom = "validate_not_blank", length(max = 100))]
    pub last_name: String,
    pub gender: Gender,
    pub date_of_birth: NaiveDate,
    #[validate(regex = "PHONE_REGEX")]
    pub phone_number: String,
    #[validate(email)]
    pub email: String,
    pub work_location_id: Option<i64>,
    #[validate(custom = "validate_amount")]
    pub salary: Decimal,
    pub date_started: NaiveDate,
    pub address_id: Option<i64>,
    #[serde(default)]
    #[validate(range(min = 0.0))]
    pub hours_worked: f64,
    #[serde(default = "default_active")]
    pub is_active: bool,
    pub role: Role,
    #[validate(length(min = 3, max = 50))]
    pub username: String,
    #[validate(length(min = 8, max = 72))]
    pub password: String,
    pub manager_id: Option<i64>,
    pub department_id: Option<i64>,
}

fn default_active() -> bool {
    true
}

impl EmployeeRequest {
    pub fn into_entity(self, employee_type: EmployeeType) -> Employee {
        Employee {
            id: 0,
            ssn: self.ssn,
            first_name: self.first_name,
            middle_initial: self.middle_initial,
            last_name: self.last_name,
            gender: self.gender,
            date_of_birth: self.date_of_birth,
            phone_number: self.phone_number,
            email: self.email,
            work_location_id: self.work_location_id,
            salary: self.salary,
            date_started: self.date_started,
            address_id: self.address_id,
            hours_worked: self.hours_worked,
            employee_type,
            is_active: self.is_active,
            role: self.role,
            username: self.username,
            password: self.password,
            manager_id: self.manager_id,
            department_id: self.department_id,
        }
    }
}

/// Empleado tal como lo devuelve la API; el hash de la contraseña no sale del servidor.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeResponse {
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
    pub manager_id: Option<i64>,
    pub department_id: Option<i64>,
}

impl From<Employee> for EmployeeResponse {
    fn from(employee: Employee) -> Self {
        Self {
            id: employee.id,
            ssn: employee.ssn,
            first_name: employee.first_name,
            middle_initial: employee.middle_initial,
            last_name: employee.last_name,
            gender: employee.gender,
            date_of_birth: employee.date_of_birth,
            phone_number: employee.phone_number,
            email: employee.email,
            work_location_id: employee.work_location_id,
            salary: employee.salary,
            date_started: employee.date_started,
            address_id: employee.address_id,
            hours_worked: employee.hours_worked,
            employee_type: employee.employee_type,
            is_active: employee.is_active,
            role: employee.role,
            username: employee.username,
            manager_id: employee.manager_id,
            department_id: employee.department_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn body() -> serde_json::Value {
        json!({
            "ssn": "123-45-6789",
            "firstName": "John",
            "middleInitial": "Q",
            "lastName": "Smith",
            "gender": "MALE",
            "dateOfBirth": "1985-04-12",
            "phoneNumber": "555-123-4567",
            "email": "john.smith@dealer.com",
            "salary": 52000.5,
            "dateStarted": "2019-09-01",
            "role": "USER",
            "username": "jsmith",
            "password": "password123"
        })
    }

    #[test]
    fn test_defaults_and_subtype() {
        let request: EmployeeRequest = serde_json::from_value(body()).unwrap();
        assert!(request.validate().is_ok());

        let employee = request.into_entity(EmployeeType::Mechanic);
        assert_eq!(employee.employee_type, EmployeeType::Mechanic);
        assert!(employee.is_active);
        assert_eq!(employee.hours_worked, 0.0);
        assert_eq!(employee.salary, Decimal::new(520005, 1));
    }

    #[test]
    fn test_field_formats() {
        let mut value = body();
        value["ssn"] = json!("123456789");
        value["middleInitial"] = json!("QQ");
        value["email"] = json!("not-an-email");
        let request: EmployeeRequest = serde_json::from_value(value).unwrap();

        let errors = request.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("ssn"));
        assert!(fields.contains_key("middle_initial"));
        assert!(fields.contains_key("email"));
    }

    #[test]
    fn test_response_has_no_password() {
        let request: EmployeeRequest = serde_json::from_value(body()).unwrap();
        let mut employee = request.into_entity(EmployeeType::Manager);
        employee.id = 3;

        let value = serde_json::to_value(EmployeeResponse::from(employee)).unwrap();
        assert!(value.get("password").is_none());
        assert_eq!(value["employeeType"], "MANAGER");
        assert_eq!(value["firstName"], "John");
    }

    #[test]
    fn test_salary_must_fit_the_column() {
        let mut value = body();
        value["salary"] = json!(1e10);
        let request: EmployeeRequest = serde_json::from_value(value).unwrap();
        assert!(request.validate().unwrap_err().field_errors().contains_key("salary"));

        let mut value = body();
        value["salary"] = json!(-1.0);
        let request: EmployeeRequest = serde_json::from_value(value).unwrap();
        assert!(request.validate().is_err());
    }
}
