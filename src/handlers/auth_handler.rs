//! handlers/auth_handler.rs

use actix_web::{web, HttpResponse};
use serde_json::json;

use crate::models::session_model::LoginRequest;
use crate::services::auth_service::{AuthError, AuthService};

/// POST /api/auth/login
pub async fn login_endpoint(
    auth_service: web::Data<AuthService>,
    body: web::Json<LoginRequest>,
) -> HttpResponse {
    let req = body.into_inner();
    let email = req.email.unwrap_or_default();
    let password = req.password.unwrap_or_default();

    match auth_service.authorize(&email, &password) {
        Ok(session) => HttpResponse::Ok().json(json!({
            "success": true,
            "session": session,
        })),
        Err(e @ AuthError::MissingCredentials) => HttpResponse::BadRequest().json(json!({
            "success": false,
            "error": e.to_string(),
        })),
        Err(e @ AuthError::InvalidCredentials) => HttpResponse::Unauthorized().json(json!({
            "success": false,
            "error": e.to_string(),
        })),
    }
}
