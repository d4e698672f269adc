use serde::{Deserialize, Serialize};

/// Categorías fijas del catálogo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Hackathon,
    Competition,
    Internship,
    Job,
    Scholarship,
    Course,
}

/// Modalidad de la oportunidad.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryMode {
    Online,
    Offline,
    Hybrid,
}

/// Oportunidad publicada. Proviene del Catalog Provider y es de sólo
/// lectura para el resto del sistema: el registro únicamente toma
/// `id` y `title`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Opportunity {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: Category,
    #[serde(rename = "type")]
    pub mode: DeliveryMode,
    pub company: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub start_date: String,
    pub end_date: String,
    pub registration_deadline: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prize: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skills: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eligibility: Option<String>,
}

/// Filtros aceptados en GET /api/opportunities.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogFilter {
    pub category: Option<Category>,
    #[serde(rename = "type")]
    pub mode: Option<DeliveryMode>,
    pub search: Option<String>,
}
