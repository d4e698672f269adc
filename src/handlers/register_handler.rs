//! handlers/register_handler.rs
//! POST /api/register: el endpoint orquesta Validator -> Audit Log ->
//! Dispatcher. Política deliberada: después de la validación el
//! usuario SIEMPRE recibe 200; cualquier fallo interno se absorbe en
//! una respuesta de éxito con el error como diagnóstico.

use actix_web::{web, HttpResponse};
use anyhow::Result;
use serde_json::json;

use crate::config::app_config::AppConfig;
use crate::models::notification_model::EmailMessage;
use crate::models::registration_model::{RegisterRequest, RegistrationRecord};
use crate::services::audit_service::AuditService;
use crate::services::notification_service::{
    build_confirmation_link, generate_confirmation_token, render_confirmation_email,
    NotificationService,
};
use crate::services::validation_service::validate_registration;

/// POST /api/register
pub async fn register_endpoint(
    config: web::Data<AppConfig>,
    audit_service: web::Data<AuditService>,
    notification_service: web::Data<NotificationService>,
    body: web::Json<RegisterRequest>,
) -> HttpResponse {
    let req = body.into_inner();

    // Chequeo autoritativo: la validación del cliente no se confía.
    if let Err(e) = validate_registration(&req) {
        return HttpResponse::BadRequest().json(json!({ "error": e.to_string() }));
    }

    let record = RegistrationRecord::from_request(req);

    match process_registration(&config, &audit_service, &notification_service, record).await {
        Ok(response) => HttpResponse::Ok().json(response),
        Err(e) => {
            log::error!("Registration error: {:?}", e);
            // Un formulario de marketing nunca muestra un fallo duro.
            HttpResponse::Ok().json(json!({
                "success": true,
                "message": "Registration successful! Your application has been received.",
                "error": e.to_string(),
            }))
        }
    }
}

/// Pipeline post-validación. Audit y notificación son best-effort:
/// sus errores se loguean y el registro sigue adelante.
async fn process_registration(
    config: &AppConfig,
    audit_service: &AuditService,
    notification_service: &NotificationService,
    record: RegistrationRecord,
) -> Result<serde_json::Value> {
    let token = generate_confirmation_token();
    let confirmation_link = build_confirmation_link(&config.base_url, &token, &record.email);
    let html = render_confirmation_email(&record, &confirmation_link, &config.base_url);

    if let Err(e) = audit_service.save_registration(&record).await {
        log::error!("Failed to save registration file: {:?}", e);
    }

    let outcome = notification_service
        .dispatch(EmailMessage {
            to: record.email.clone(),
            subject: format!(
                "Registration Confirmed - {} | Skill Radar",
                record.opportunity_title
            ),
            html,
        })
        .await;

    log::info!(
        "Registration processed for {}: {}",
        record.email,
        outcome.method.as_str()
    );

    Ok(json!({
        "success": true,
        "message": "Registration successful! Your registration has been saved.",
        "confirmationLink": confirmation_link,
        "email": record.email,
        "emailStatus": outcome.method.as_str(),
    }))
}
