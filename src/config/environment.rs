//! Configuración de variables de entorno
//!
//! Este módulo lee la configuración del servidor desde el entorno
//! (`.env` se carga con dotenvy en `main`).

use std::env;
use std::str::FromStr;
use thiserror::Error;

use super::database::DatabaseConfig;

/// Errores al leer la configuración
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{name} has an invalid value `{value}`")]
    Invalid { name: &'static str, value: String },
}

/// Configuración del entorno
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub environment: String,
    pub port: u16,
    pub host: String,
    pub log_level: String,
    pub cors_origins: Vec<String>,
    pub run_migrations: bool,
    pub database: DatabaseConfig,
}

impl EnvironmentConfig {
    /// Leer la configuración desde las variables de entorno
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Leer la configuración desde una fuente arbitraria de variables
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .filter(|url| !url.trim().is_empty())
            .ok_or(ConfigError::Missing("DATABASE_URL"))?;

        let mut database = DatabaseConfig::new(database_url);
        database.max_connections =
            parse_or(&lookup, "DATABASE_MAX_CONNECTIONS", database.max_connections)?;
        database.min_connections =
            parse_or(&lookup, "DATABASE_MIN_CONNECTIONS", database.min_connections)?;
        if database.min_connections > database.max_connections {
            return Err(ConfigError::Invalid {
                name: "DATABASE_MIN_CONNECTIONS",
                value: database.min_connections.to_string(),
            });
        }

        let cors_origins = lookup("CORS_ORIGINS")
            .map(|origins| {
                origins
                    .split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect()
            })
            .unwrap_or_default();

        Ok(Self {
            environment: lookup("ENVIRONMENT").unwrap_or_else(|| "development".to_string()),
            port: parse_or(&lookup, "PORT", 3000)?,
            host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            log_level: lookup("LOG_LEVEL").unwrap_or_else(|| "info".to_string()),
            cors_origins,
            run_migrations: parse_or(&lookup, "RUN_MIGRATIONS", false)?,
            database,
        })
    }

    /// Verificar si estamos en modo desarrollo
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    /// Verificar si estamos en modo producción
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// Obtener la URL del servidor
    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_or<F, T>(lookup: &F, name: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(name) {
        None => Ok(default),
        Some(raw) if raw.trim().is_empty() => Ok(default),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { name, value: raw }),
    }
}
