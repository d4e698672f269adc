use actix_web::{web, App, HttpServer};
use dotenv::dotenv;

use crate::config::app_config::AppConfig;
use crate::logger::init_logger;
use crate::services::audit_service::AuditService;
use crate::services::auth_service::AuthService;
use crate::services::catalog_service::CatalogService;
use crate::services::notification_service::NotificationService;

mod app;
mod config;
mod handlers;
mod logger;
mod models;
mod services;
#[cfg(test)]
mod tests;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok(); // Cargar .env al inicio
    init_logger();

    // La config se resuelve UNA vez; los servicios no tocan el entorno.
    let config = AppConfig::from_env();

    let audit_service = AuditService::new(config.registrations_dir.clone());
    let notification_service = NotificationService::new(config.notify.clone());
    let catalog_service = CatalogService::new();
    let auth_service = AuthService::demo();

    log::info!(
        "Canal de correo configurado: {}",
        notification_service.selected_method().as_str()
    );

    // Levantar servidor
    log::info!("Levantando servidor en 0.0.0.0:5030");
    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(config.clone()))
            .app_data(web::Data::new(audit_service.clone()))
            .app_data(web::Data::new(notification_service.clone()))
            .app_data(web::Data::new(catalog_service.clone()))
            .app_data(web::Data::new(auth_service.clone()))
            .configure(app::init_app)
    })
    .workers(1)
    .bind(("0.0.0.0", 5030))?
    .run()
    .await
}
