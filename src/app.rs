//! app.rs
use crate::handlers::{auth_handler, catalog_handler, confirmation_handler, register_handler};
use actix_web::{error::InternalError, web, HttpResponse};

pub fn init_app(cfg: &mut web::ServiceConfig) {
    // Un body que ni siquiera parsea como JSON recibe el mismo 400 del
    // contrato que un campo faltante, no el error default del extractor.
    cfg.app_data(web::JsonConfig::default().error_handler(|err, _req| {
        InternalError::from_response(
            err,
            HttpResponse::BadRequest()
                .json(serde_json::json!({ "error": "Missing required fields" })),
        )
        .into()
    }));

    cfg.service(
        web::scope("/api")
            .service(
                web::scope("/register")
                    .route("", web::post().to(register_handler::register_endpoint)),
            )
            .service(
                web::scope("/opportunities")
                    .route(
                        "",
                        web::get().to(catalog_handler::list_opportunities_endpoint),
                    )
                    .route(
                        "/{id}",
                        web::get().to(catalog_handler::get_opportunity_endpoint),
                    ),
            )
            .service(
                web::scope("/auth").route("/login", web::post().to(auth_handler::login_endpoint)),
            ),
    )
    .route(
        "/registration-confirmed",
        web::get().to(confirmation_handler::registration_confirmed_page),
    );
}
