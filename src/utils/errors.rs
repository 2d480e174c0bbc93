//! Sistema de manejo de errores
//!
//! Este módulo define los tipos de errores del registro de vehículos y
//! sus helpers de construcción.

use thiserror::Error;

/// Errores principales del registro
#[derive(Error, Debug)]
pub enum RegistryError {
    /// Uno o más campos no pasaron las reglas de validación. Se reporta
    /// antes de cualquier llamada al almacén remoto; ningún estado cambia.
    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    /// El registro objetivo de checkout/retorno/edición no existe en el almacén
    #[error("Not found: {0}")]
    NotFound(String),

    /// El almacén remoto no responde o respondió con un estado de error.
    /// La vista en memoria queda sin tocar; no hay reintento automático.
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Resultado tipado para operaciones que pueden fallar
pub type RegistryResult<T> = Result<T, RegistryError>;

/// Función helper para crear errores de recurso no encontrado
pub fn not_found_error(resource: &str, id: &str) -> RegistryError {
    RegistryError::NotFound(format!("{} con id '{}' no existe", resource, id))
}

impl RegistryError {
    pub fn is_validation(&self) -> bool {
        matches!(self, RegistryError::Validation(_))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, RegistryError::NotFound(_))
    }
}
