//! Validación de peticiones
//!
//! [`ValidatedJson`] deserializa el cuerpo y ejecuta las reglas de
//! `validator` del DTO antes del handler. Los atributos `#[validate]` de
//! `dto/` usan las regex y validaciones de este módulo.

use axum::async_trait;
use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};
use axum::Json;
use lazy_static::lazy_static;
use regex::Regex;
use rust_decimal::Decimal;
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationError};

use crate::utils::errors::AppError;

lazy_static! {
    /// `ddd-dd-dddd`
    pub static ref SSN_REGEX: Regex = Regex::new(r"^\d{3}-\d{2}-\d{4}$").unwrap();
    /// `ddd-ddd-dddd`
    pub static ref PHONE_REGEX: Regex = Regex::new(r"^\d{3}-\d{3}-\d{4}$").unwrap();
}

/// Cuerpo JSON que pasó sus reglas de `validator`.
///
/// Cuerpos ilegibles, un cuerpo `null` o valores de enum desconocidos
/// se rechazan como Bad-Request.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
        value.validate()?;
        Ok(ValidatedJson(value))
    }
}

/// Exactamente un carácter alfabético.
pub fn validate_middle_initial(value: &str) -> Result<(), ValidationError> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_alphabetic() => Ok(()),
        _ => {
            let mut error = ValidationError::new("middle_initial");
            error.add_param("value".into(), &value.to_string());
            Err(error)
        }
    }
}

/// Las columnas de dinero son `NUMERIC(12, 2)`: no negativas y menores
/// que 10^10 tras redondear a céntimos.
pub fn validate_amount(value: &Decimal) -> Result<(), ValidationError> {
    if value.is_sign_negative() {
        return Err(ValidationError::new("negative_amount"));
    }
    if value.round_dp(2) > Decimal::new(999_999_999_999, 2) {
        let mut error = ValidationError::new("amount_too_large");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

/// Rechaza cadenas vacías o solo con espacios.
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("not_blank"));
    }
    Ok(())
}
