//! handlers/confirmation_handler.rs
//! GET /registration-confirmed: página decorativa. La presencia de
//! token y email en la query cuenta como "confirmado"; no hay store
//! de tokens ni verificación del lado del servidor.

use actix_web::{web, HttpResponse};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ConfirmationQuery {
    pub token: Option<String>,
    pub email: Option<String>,
}

pub async fn registration_confirmed_page(query: web::Query<ConfirmationQuery>) -> HttpResponse {
    let q = query.into_inner();
    let confirmed = matches!(
        (&q.token, &q.email),
        (Some(token), Some(email)) if !token.is_empty() && !email.is_empty()
    );

    let body = if confirmed {
        render_confirmed(q.email.as_deref().unwrap_or_default())
    } else {
        render_not_confirmed()
    };

    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(body)
}

fn escape_html(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn render_confirmed(email: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head><meta charset=\"UTF-8\"><title>Skill Radar</title></head>\n\
         <body>\n<h1>All Set!</h1>\n<p>Your registration has been confirmed</p>\n\
         <p>Confirmation sent to: <strong>{}</strong></p>\n\
         <p>A confirmation email has been sent to your inbox. If you don't see it, \
         please check your spam folder.</p>\n\
         <p><a href=\"/api/opportunities\">Explore More Opportunities</a></p>\n</body>\n</html>\n",
        escape_html(email)
    )
}

fn render_not_confirmed() -> String {
    "<!DOCTYPE html>\n<html>\n<head><meta charset=\"UTF-8\"><title>Skill Radar</title></head>\n\
     <body>\n<h1>Almost there</h1>\n<p>This confirmation link is incomplete. Please use the \
     link from your confirmation email.</p>\n</body>\n</html>\n"
        .to_string()
}
