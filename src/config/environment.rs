//! Configuración de variables de entorno
//!
//! Este módulo maneja la configuración del entorno: URL base del almacén
//! remoto de vehículos, timeout HTTP y ruta de exportación.

use std::env;

/// Configuración del entorno
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    /// Ruta base fija del almacén remoto, p. ej. `http://localhost:3000/vehicles`
    pub api_base_url: String,
    pub http_timeout_secs: u64,
    pub export_path: String,
}

impl EnvironmentConfig {
    pub fn from_env() -> Self {
        Self {
            api_base_url: env::var("VEHICLE_API_URL")
                .unwrap_or_else(|_| "http://localhost:3000/vehicles".to_string()),
            http_timeout_secs: env::var("HTTP_TIMEOUT_SECS")
                .ok()
                .and_then(|value| value.parse().ok())
                .unwrap_or(30),
            export_path: env::var("EXPORT_PATH")
                .unwrap_or_else(|_| "vehicles-report.csv".to_string()),
        }
    }
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeout_falls_back_on_garbage() {
        env::set_var("HTTP_TIMEOUT_SECS", "no-num");
        let config = EnvironmentConfig::from_env();
        assert_eq!(config.http_timeout_secs, 30);
        env::remove_var("HTTP_TIMEOUT_SECS");
    }
}
