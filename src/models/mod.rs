//! models/mod.rs
//! Módulo raíz para modelos/estructuras compartidas.

pub mod notification_model;
pub mod opportunity_model;
pub mod registration_model;
pub mod session_model;
