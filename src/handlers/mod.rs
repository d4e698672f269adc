//! handlers/mod.rs
//! Módulo que agrupa los distintos handlers (registro, catálogo, auth, etc.).

pub mod auth_handler;
pub mod catalog_handler;
pub mod confirmation_handler;
pub mod register_handler;
