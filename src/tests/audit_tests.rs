//! tests/audit_tests.rs
//! Pruebas del Audit Log Writer sobre un directorio temporal.

#[cfg(test)]
mod tests {
    use std::fs;

    use actix_rt::test;
    use tempfile::TempDir;

    use crate::models::registration_model::RegistrationRecord;
    use crate::services::audit_service::AuditService;

    fn sample_record() -> RegistrationRecord {
        RegistrationRecord {
            full_name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            phone: "555-0100".to_string(),
            opportunity_title: "AI Challenge".to_string(),
            opportunity_id: Some("2".to_string()),
            timestamp: "2026-08-27T10:15:30.123456+00:00".to_string(),
        }
    }

    #[test]
    async fn test_file_name_sanitizes_colons_and_dots() {
        let name = AuditService::file_name_for("2026-08-27T10:15:30.123456+00:00");
        assert_eq!(name, "registration-2026-08-27T10-15-30-123456+00-00.json");
        assert!(!name[..name.len() - ".json".len()].contains(':'));
    }

    #[test]
    async fn test_save_creates_directory_and_file() {
        let tmp = TempDir::new().expect("tempdir");
        let dir = tmp.path().join("registrations");
        let service = AuditService::new(dir.clone());

        let path = service
            .save_registration(&sample_record())
            .await
            .expect("No se escribió el registro");

        assert!(dir.is_dir());
        assert!(path.starts_with(&dir));

        let content = fs::read_to_string(&path).expect("read");
        assert!(content.contains("jane@example.com"));
        assert!(content.contains("Jane Doe"));
        assert!(content.contains("555-0100"));
        assert!(content.contains("AI Challenge"));
        // JSON pretty-printed, con claves camelCase
        assert!(content.contains("\n  \"fullName\""));
    }

    #[test]
    async fn test_same_timestamp_last_write_wins() {
        let tmp = TempDir::new().expect("tempdir");
        let service = AuditService::new(tmp.path());

        let first = sample_record();
        let mut second = sample_record();
        second.full_name = "Other Person".to_string();

        service.save_registration(&first).await.expect("write 1");
        let path = service.save_registration(&second).await.expect("write 2");

        // mismo timestamp => mismo archivo, sin error
        let files: Vec<_> = fs::read_dir(tmp.path()).unwrap().collect();
        assert_eq!(files.len(), 1);
        let content = fs::read_to_string(path).unwrap();
        assert!(content.contains("Other Person"));
    }

    #[test]
    async fn test_distinct_timestamps_two_files() {
        let tmp = TempDir::new().expect("tempdir");
        let service = AuditService::new(tmp.path());

        let first = sample_record();
        let mut second = sample_record();
        second.timestamp = "2026-08-27T10:15:31.000001+00:00".to_string();

        service.save_registration(&first).await.expect("write 1");
        service.save_registration(&second).await.expect("write 2");

        let files: Vec<_> = fs::read_dir(tmp.path()).unwrap().collect();
        assert_eq!(files.len(), 2);
    }

    #[test]
    async fn test_unwritable_directory_reports_error() {
        // Un archivo plano en lugar de directorio: create_dir_all falla
        let tmp = TempDir::new().expect("tempdir");
        let blocker = tmp.path().join("blocked");
        fs::write(&blocker, b"no-dir").unwrap();

        let service = AuditService::new(&blocker);
        let result = service.save_registration(&sample_record()).await;
        assert!(result.is_err());
    }
}
