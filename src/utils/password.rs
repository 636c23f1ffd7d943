//! Hash de contraseñas de empleados

use crate::utils::errors::{AppError, AppResult};

/// Hashea `plain` con bcrypt en el pool bloqueante.
pub async fn hash_password(plain: String, cost: u32) -> AppResult<String> {
    tokio::task::spawn_blocking(move || bcrypt::hash(plain, cost))
        .await
        .map_err(|e| AppError::Internal(format!("Password hashing task failed: {}", e)))?
        .map_err(|e| AppError::Hash(format!("Error hashing password: {}", e)))
}
