use serde::{Deserialize, Serialize};

/// Credenciales que llegan a POST /api/auth/login.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionUser {
    pub id: String,
    pub email: String,
    pub name: String,
    pub image: String,
}

/// Sesión normalizada que devuelve cualquier Identity Provider,
/// federado o por credenciales.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub user: SessionUser,
    pub provider: String,
    /// ISO-8601, vida fija de 30 días.
    pub expires_at: String,
}
