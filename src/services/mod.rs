//! services/mod.rs
//! Módulo que agrupa distintos "servicios" o "capas de negocio" de la app.

pub mod audit_service;
pub mod auth_service;
pub mod catalog_service;
pub mod email_service;
pub mod notification_service;
pub mod validation_service;
