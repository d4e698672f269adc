//! config/app_config.rs
//! Configuración global del servicio, resuelta UNA sola vez al arrancar.
//! Los servicios reciben esta struct en el constructor; nadie lee
//! variables de entorno en tiempo de request.

use std::env;
use std::path::PathBuf;

pub const DEFAULT_RESEND_API_URL: &str = "https://api.resend.com/emails";

/// Credenciales de los canales de notificación. La selección de canal
/// es función pura de qué campos están presentes.
#[derive(Debug, Clone)]
pub struct NotifyConfig {
    /// API key del canal primario (Resend).
    pub resend_api_key: Option<String>,
    /// Endpoint del canal primario. Configurable para poder apuntarlo
    /// a un servidor local en los tests.
    pub resend_api_url: String,
    /// Cuenta del relay SMTP de respaldo.
    pub smtp_user: Option<String>,
    pub smtp_pass: Option<String>,
}

impl Default for NotifyConfig {
    fn default() -> Self {
        NotifyConfig {
            resend_api_key: None,
            resend_api_url: DEFAULT_RESEND_API_URL.to_string(),
            smtp_user: None,
            smtp_pass: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Base para armar el confirmation link.
    pub base_url: String,
    /// Directorio del audit log (un archivo por registro).
    pub registrations_dir: PathBuf,
    pub notify: NotifyConfig,
}

impl AppConfig {
    pub fn from_env() -> Self {
        // Una variable vacía cuenta como no configurada.
        let non_empty = |key: &str| env::var(key).ok().filter(|v| !v.is_empty());

        AppConfig {
            base_url: non_empty("PUBLIC_BASE_URL")
                .unwrap_or_else(|| "http://localhost:5030".to_string()),
            registrations_dir: non_empty("REGISTRATIONS_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("registrations")),
            notify: NotifyConfig {
                resend_api_key: non_empty("RESEND_API_KEY"),
                smtp_user: non_empty("EMAIL_USER"),
                smtp_pass: non_empty("EMAIL_PASSWORD"),
                ..NotifyConfig::default()
            },
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            base_url: "http://localhost:5030".to_string(),
            registrations_dir: PathBuf::from("registrations"),
            notify: NotifyConfig::default(),
        }
    }
}
