//! services/notification_service.rs
//! Dispatcher de la confirmación de registro. Elige el canal de salida
//! como función pura de la config inmutable que recibe al construirse
//! (nada de leer el entorno en tiempo de request) y nunca devuelve Err:
//! todo resultado viaja en un `DispatchOutcome`.

use reqwest::Client;
use uuid::Uuid;

use crate::config::app_config::NotifyConfig;
use crate::models::notification_model::{DeliveryMethod, DispatchOutcome, EmailMessage};
use crate::models::registration_model::RegistrationRecord;
use crate::services::email_service::EmailService;

const FROM_ADDRESS: &str = "Skill Radar <onboarding@resend.dev>";

#[derive(Clone)]
pub struct NotificationService {
    config: NotifyConfig,
    email_service: Option<EmailService>,
    http_client: Client,
}

impl NotificationService {
    pub fn new(config: NotifyConfig) -> Self {
        // El canal SMTP sólo existe si ambas credenciales están.
        let email_service = match (&config.smtp_user, &config.smtp_pass) {
            (Some(user), Some(pass)) => Some(EmailService::new(user.clone(), pass.clone())),
            _ => None,
        };
        NotificationService {
            config,
            email_service,
            http_client: Client::new(),
        }
    }

    /// Canal que va a usarse, decidido sólo por la config.
    pub fn selected_method(&self) -> DeliveryMethod {
        if self.config.resend_api_key.is_some() {
            DeliveryMethod::Resend
        } else if self.email_service.is_some() {
            DeliveryMethod::Smtp
        } else {
            DeliveryMethod::FileSaved
        }
    }

    /// A lo sumo una llamada de red por request; los canales nunca se
    /// combinan ni se reintentan entre sí.
    pub async fn dispatch(&self, msg: EmailMessage) -> DispatchOutcome {
        if let Some(api_key) = &self.config.resend_api_key {
            return self.send_via_resend(api_key, &msg).await;
        }
        if let Some(email_service) = &self.email_service {
            return self.send_via_smtp(email_service, &msg).await;
        }

        log::info!(
            "(dispatch) Sin canal de correo configurado; {} queda sólo en archivo",
            msg.to
        );
        DispatchOutcome {
            success: true,
            method: DeliveryMethod::FileSaved,
            detail: Some("Email channel not configured".to_string()),
        }
    }

    /// Canal primario: API hosteada con bearer token. Este camino
    /// jamás reporta fallo hacia arriba; un error se degrada al tag
    /// `demo` con el flag de éxito intacto.
    async fn send_via_resend(&self, api_key: &str, msg: &EmailMessage) -> DispatchOutcome {
        let payload = serde_json::json!({
            "from": FROM_ADDRESS,
            "to": msg.to,
            "subject": msg.subject,
            "html": msg.html,
        });

        let response = self
            .http_client
            .post(&self.config.resend_api_url)
            .bearer_auth(api_key)
            .json(&payload)
            .send()
            .await;

        match response {
            Ok(resp) if resp.status().is_success() => {
                log::info!("(dispatch) Correo enviado vía Resend a {}", msg.to);
                DispatchOutcome {
                    success: true,
                    method: DeliveryMethod::Resend,
                    detail: None,
                }
            }
            Ok(resp) => {
                let status = resp.status();
                let body = resp.text().await.unwrap_or_default();
                log::error!("(dispatch) Resend respondió {}: {}", status, body);
                DispatchOutcome {
                    success: true,
                    method: DeliveryMethod::Demo,
                    detail: Some("Email queued".to_string()),
                }
            }
            Err(e) => {
                log::error!("(dispatch) Error de red contra Resend: {}", e);
                DispatchOutcome {
                    success: true,
                    method: DeliveryMethod::Demo,
                    detail: Some("Fallback mode".to_string()),
                }
            }
        }
    }

    async fn send_via_smtp(
        &self,
        email_service: &EmailService,
        msg: &EmailMessage,
    ) -> DispatchOutcome {
        match email_service.send_html(msg).await {
            Ok(_) => {
                log::info!("(dispatch) Correo enviado vía SMTP a {}", msg.to);
                DispatchOutcome {
                    success: true,
                    method: DeliveryMethod::Smtp,
                    detail: None,
                }
            }
            Err(e) => {
                log::error!("(dispatch) Fallo SMTP para {}: {:?}", msg.to, e);
                DispatchOutcome {
                    success: false,
                    method: DeliveryMethod::Smtp,
                    detail: Some(format!("{e:?}")),
                }
            }
        }
    }
}

/// Token opaco: dos UUID v4 concatenados (64 chars alfanuméricos).
/// No es criptográficamente seguro y nada lo verifica río abajo; la
/// página de confirmación es decorativa.
pub fn generate_confirmation_token() -> String {
    format!("{}{}", Uuid::new_v4().simple(), Uuid::new_v4().simple())
}

/// Link de confirmación con el email URL-encoded.
pub fn build_confirmation_link(base_url: &str, token: &str, email: &str) -> String {
    format!(
        "{}/registration-confirmed?token={}&email={}",
        base_url,
        token,
        urlencoding::encode(email)
    )
}

const CONFIRMATION_TEMPLATE: &str = r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="UTF-8">
    <style>
        body { font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif; line-height: 1.6; color: #333; margin: 0; padding: 0; }
        .container { max-width: 600px; margin: 0 auto; padding: 20px; background: #f9f9f9; }
        .header { background: linear-gradient(135deg, #4F46E5 0%, #3B82F6 100%); color: white; padding: 30px 20px; text-align: center; border-radius: 8px 8px 0 0; }
        .content { background: white; padding: 30px 20px; }
        .content h2 { color: #4F46E5; margin-top: 0; }
        .footer { background: #f0f0f0; padding: 20px; text-align: center; font-size: 12px; color: #666; border-radius: 0 0 8px 8px; }
        .button { background: linear-gradient(135deg, #4F46E5 0%, #3B82F6 100%); color: white; padding: 12px 30px; text-decoration: none; border-radius: 6px; display: inline-block; margin: 20px 0; font-weight: bold; }
        .info-box { background: #f0f4ff; padding: 15px; border-left: 4px solid #4F46E5; margin: 15px 0; }
    </style>
</head>
<body>
    <div class="container">
        <div class="header">
            <h1>Skill Radar</h1>
            <p>Registration Confirmed!</p>
        </div>
        <div class="content">
            <h2>Hello {full_name},</h2>
            <p>Congratulations! You have successfully registered for:</p>
            <div class="info-box">
                <strong>Opportunity:</strong> {opportunity_title}<br>
                <strong>Name:</strong> {full_name}<br>
                <strong>Email:</strong> {email}<br>
                <strong>Phone:</strong> {phone}
            </div>
            <p>Your registration has been confirmed and saved in our system.</p>
            <center>
                <a href="{confirmation_link}" class="button">View Your Registration</a>
            </center>
            <p style="color: #666; font-size: 14px; margin-top: 30px;">
                If you didn't register for this opportunity, please ignore this email or contact our support team.
            </p>
        </div>
        <div class="footer">
            <p>&copy; 2026 Skill Radar. All rights reserved.</p>
            <p>This is an automated email. Please do not reply directly.</p>
            <p><a href="{base_url}" style="color: #4F46E5; text-decoration: none;">Visit Skill Radar</a></p>
        </div>
    </div>
</body>
</html>
"#;

/// Cuerpo HTML del correo de confirmación. Template por reemplazo de
/// placeholders para no pelear con las llaves del CSS en un format!.
pub fn render_confirmation_email(
    record: &RegistrationRecord,
    confirmation_link: &str,
    base_url: &str,
) -> String {
    CONFIRMATION_TEMPLATE
        .replace("{full_name}", &record.full_name)
        .replace("{opportunity_title}", &record.opportunity_title)
        .replace("{email}", &record.email)
        .replace("{phone}", &record.phone)
        .replace("{confirmation_link}", confirmation_link)
        .replace("{base_url}", base_url)
}
