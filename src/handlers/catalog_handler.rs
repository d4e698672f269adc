//! handlers/catalog_handler.rs

use actix_web::{web, HttpResponse};
use serde_json::json;

use crate::models::opportunity_model::CatalogFilter;
use crate::services::catalog_service::CatalogService;

/// GET /api/opportunities
pub async fn list_opportunities_endpoint(
    catalog_service: web::Data<CatalogService>,
    query: web::Query<CatalogFilter>,
) -> HttpResponse {
    let items = catalog_service.list(&query.into_inner());
    HttpResponse::Ok().json(json!({
        "total": items.len(),
        "items": items,
    }))
}

/// GET /api/opportunities/{id}
pub async fn get_opportunity_endpoint(
    catalog_service: web::Data<CatalogService>,
    path: web::Path<String>,
) -> HttpResponse {
    let id = path.into_inner();

    match catalog_service.get(&id) {
        Some(op) => HttpResponse::Ok().json(op),
        None => HttpResponse::NotFound().json(json!({
            "error": "Opportunity not found",
            "id": id,
        })),
    }
}
