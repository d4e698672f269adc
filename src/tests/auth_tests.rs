//! tests/auth_tests.rs
//! Pruebas del Identity Provider demo y del endpoint de login.

#[cfg(test)]
mod tests {
    use actix_rt::test;
    use actix_web::{test as actix_test, web, App};
    use chrono::{DateTime, Duration, Utc};
    use serde_json::{json, Value};

    use crate::app;
    use crate::services::auth_service::{AuthError, AuthService, DemoCredentialsProvider, IdentityProvider};

    #[test]
    async fn test_demo_provider_accepts_password_of_six_or_more() {
        let provider = DemoCredentialsProvider;
        let session = provider
            .authorize("jane.doe@example.com", "secret123")
            .expect("login demo");

        assert_eq!(session.user.email, "jane.doe@example.com");
        assert_eq!(session.user.name, "jane.doe");
        // id: sólo minúsculas y dígitos del email
        assert_eq!(session.user.id, "janedoeexamplecom");
        assert!(session.user.image.contains("dicebear"));
        assert_eq!(session.provider, "credentials");
    }

    #[test]
    async fn test_session_expires_in_thirty_days() {
        let session = DemoCredentialsProvider
            .authorize("jane@example.com", "secret123")
            .unwrap();

        let expires: DateTime<Utc> = session.expires_at.parse().expect("ISO-8601");
        let delta = expires - Utc::now();
        assert!(delta > Duration::days(29));
        assert!(delta <= Duration::days(30));
    }

    #[test]
    async fn test_short_password_rejected() {
        let result = DemoCredentialsProvider.authorize("jane@example.com", "12345");
        assert_eq!(result.unwrap_err(), AuthError::InvalidCredentials);
    }

    #[test]
    async fn test_missing_credentials_rejected() {
        assert_eq!(
            DemoCredentialsProvider.authorize("", "secret123").unwrap_err(),
            AuthError::MissingCredentials
        );
        assert_eq!(
            DemoCredentialsProvider.authorize("jane@example.com", "").unwrap_err(),
            AuthError::MissingCredentials
        );
    }

    #[test]
    async fn test_login_endpoint_statuses() {
        let app = actix_test::init_service(
            App::new()
                .app_data(web::Data::new(AuthService::demo()))
                .configure(app::init_app),
        )
        .await;

        let req = actix_test::TestRequest::post()
            .uri("/api/auth/login")
            .set_json(json!({ "email": "jane@example.com", "password": "secret123" }))
            .to_request();
        let resp = actix_test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);
        let body: Value = actix_test::read_body_json(resp).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["session"]["user"]["email"], "jane@example.com");

        let req = actix_test::TestRequest::post()
            .uri("/api/auth/login")
            .set_json(json!({ "email": "jane@example.com", "password": "123" }))
            .to_request();
        let resp = actix_test::call_service(&app, req).await;
        assert_eq!(resp.status(), 401);

        let req = actix_test::TestRequest::post()
            .uri("/api/auth/login")
            .set_json(json!({ "email": "jane@example.com" }))
            .to_request();
        let resp = actix_test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);
    }
}
