//! services/audit_service.rs
//! Audit log en disco: un archivo JSON por registro, nombrado por
//! timestamp. Devuelve Result; el endpoint decide tragarse el error
//! (la escritura es best-effort y nunca bloquea la respuesta).

use std::path::PathBuf;

use anyhow::{Context, Result};
use tokio::fs;

use crate::models::registration_model::RegistrationRecord;

#[derive(Debug, Clone)]
pub struct AuditService {
    dir: PathBuf,
}

impl AuditService {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        AuditService { dir: dir.into() }
    }

    /// `:` y `.` no son seguros en nombres de archivo; se reemplazan
    /// por `-`. Dos registros en el mismo tick de reloj colisionan y
    /// gana la última escritura (caso aceptado).
    pub fn file_name_for(timestamp: &str) -> String {
        let sanitized: String = timestamp
            .chars()
            .map(|c| if c == ':' || c == '.' { '-' } else { c })
            .collect();
        format!("registration-{}.json", sanitized)
    }

    /// Persiste el registro como JSON legible. Crea el directorio en
    /// el primer uso (create_dir_all es idempotente, así que dos
    /// requests concurrentes no se pisan).
    pub async fn save_registration(&self, record: &RegistrationRecord) -> Result<PathBuf> {
        fs::create_dir_all(&self.dir)
            .await
            .with_context(|| format!("No se pudo crear el directorio {}", self.dir.display()))?;

        let path = self.dir.join(Self::file_name_for(&record.timestamp));
        let json =
            serde_json::to_string_pretty(record).context("Fallo serializando el registro")?;

        fs::write(&path, json)
            .await
            .with_context(|| format!("Fallo al escribir {}", path.display()))?;

        log::info!("Registro guardado en {}", path.display());
        Ok(path)
    }
}
