//! Utilidades del sistema
//!
//! Manejo de errores de la aplicación.

pub mod errors;

pub use errors::{AppError, AppResult};
