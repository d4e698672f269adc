//! services/auth_service.rs
//! Identity Provider consumido por el flujo de login. La variante
//! federada vive fuera de este servicio; acá sólo está la variante de
//! credenciales con la regla DEMO (password >= 6), aislada en un
//! provider cuyo nombre deja claro que no es lógica de producción.

use std::sync::Arc;

use chrono::{Duration, Utc};
use thiserror::Error;

use crate::models::session_model::{Session, SessionUser};

const SESSION_MAX_AGE_DAYS: i64 = 30;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("Email and password are required")]
    MissingCredentials,
    #[error("Invalid credentials. Password must be at least 6 characters.")]
    InvalidCredentials,
}

/// Contrato normalizado de identidad: cualquier variante (federada o
/// por credenciales) devuelve la misma forma de sesión.
pub trait IdentityProvider: Send + Sync {
    fn provider_id(&self) -> &'static str;
    fn authorize(&self, email: &str, password: &str) -> Result<Session, AuthError>;
}

/// Provider DEMO: acepta cualquier par email/password con password de
/// al menos 6 caracteres. Sólo para demos y tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct DemoCredentialsProvider;

impl IdentityProvider for DemoCredentialsProvider {
    fn provider_id(&self) -> &'static str {
        "credentials"
    }

    fn authorize(&self, email: &str, password: &str) -> Result<Session, AuthError> {
        if email.is_empty() || password.is_empty() {
            return Err(AuthError::MissingCredentials);
        }
        if password.len() < 6 {
            return Err(AuthError::InvalidCredentials);
        }

        // id derivado del email: sólo minúsculas y dígitos ascii
        let id: String = email
            .chars()
            .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
            .collect();
        let name = email.split('@').next().unwrap_or(email).to_string();
        let image = format!(
            "https://api.dicebear.com/7.x/avataaars/svg?seed={}",
            urlencoding::encode(email)
        );
        let expires_at = (Utc::now() + Duration::days(SESSION_MAX_AGE_DAYS)).to_rfc3339();

        Ok(Session {
            user: SessionUser {
                id,
                email: email.to_string(),
                name,
                image,
            },
            provider: self.provider_id().to_string(),
            expires_at,
        })
    }
}

#[derive(Clone)]
pub struct AuthService {
    provider: Arc<dyn IdentityProvider>,
}

impl AuthService {
    pub fn new(provider: Arc<dyn IdentityProvider>) -> Self {
        AuthService { provider }
    }

    /// Servicio armado con el provider demo.
    pub fn demo() -> Self {
        Self::new(Arc::new(DemoCredentialsProvider))
    }

    pub fn authorize(&self, email: &str, password: &str) -> Result<Session, AuthError> {
        self.provider.authorize(email, password)
    }
}
