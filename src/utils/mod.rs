//! Utilidades compartidas: errores, validación y hash de contraseñas.

pub mod errors;
pub mod password;
pub mod validation;
