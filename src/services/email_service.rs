//! services/email_service.rs
//! Canal SMTP de respaldo (relay con credenciales de la config).
//! Es el único camino que puede reportar fallo hacia el dispatcher.

use anyhow::{Context, Result};
use lettre::{
    message::{header::ContentType, Mailbox, SinglePart},
    transport::smtp::{
        authentication::Credentials,
        client::{Tls, TlsParameters},
    },
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};

use crate::models::notification_model::EmailMessage;

const SMTP_RELAY: &str = "smtp.gmail.com";

#[derive(Debug, Clone)]
pub struct EmailService {
    smtp_user: String,
    smtp_pass: String,
}

impl EmailService {
    pub fn new(smtp_user: String, smtp_pass: String) -> Self {
        EmailService {
            smtp_user,
            smtp_pass,
        }
    }

    /// Envía un correo HTML a un único destinatario vía el relay.
    pub async fn send_html(&self, msg: &EmailMessage) -> Result<()> {
        let from: Mailbox = format!("Skill Radar <{}>", self.smtp_user)
            .parse()
            .context("Invalid from address")?;
        let to: Mailbox = msg.to.parse().context("Invalid recipient address")?;

        let tls_params = TlsParameters::new(SMTP_RELAY.to_string())?;
        let mailer = AsyncSmtpTransport::<Tokio1Executor>::relay(SMTP_RELAY)?
            .credentials(Credentials::new(
                self.smtp_user.clone(),
                self.smtp_pass.clone(),
            ))
            .tls(Tls::Required(tls_params))
            .build();

        let html_part = SinglePart::builder()
            .header(ContentType::parse("text/html; charset=utf-8")?)
            .body(msg.html.clone());

        let message = Message::builder()
            .from(from)
            .to(to)
            .subject(&msg.subject)
            .singlepart(html_part)?;

        // Un solo intento con timeout; sin reintentos.
        tokio::time::timeout(std::time::Duration::from_secs(30), mailer.send(message)).await??;

        Ok(())
    }
}
