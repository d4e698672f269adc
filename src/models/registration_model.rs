use chrono::Utc;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Payload crudo que llega del formulario de registro.
/// Todos los campos son opcionales para que un campo faltante
/// produzca nuestro 400 y no un error de deserialización de actix.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub opportunity_title: Option<String>,
    pub opportunity_id: Option<String>,
}

/// Registro validado, tal como se persiste en el audit log.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationRecord {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub opportunity_title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opportunity_id: Option<String>,
    /// ISO-8601, asignado por el servidor al crear el registro.
    pub timestamp: String,
}

impl RegistrationRecord {
    /// Construye el registro con timestamp del servidor. Asume que
    /// `req` ya pasó por `validate_registration`.
    pub fn from_request(req: RegisterRequest) -> Self {
        RegistrationRecord {
            full_name: req.full_name.unwrap_or_default(),
            email: req.email.unwrap_or_default(),
            phone: req.phone.unwrap_or_default(),
            opportunity_title: req.opportunity_title.unwrap_or_default(),
            opportunity_id: req.opportunity_id,
            timestamp: Utc::now().to_rfc3339(),
        }
    }
}

/// Única categoría de error que produce una respuesta no-200.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Missing required fields")]
    MissingField,
    #[error("Invalid email address")]
    InvalidEmail,
}
