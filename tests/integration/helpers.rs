//! Shared test helpers for integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode};
use serde_json::{Value, json};
use tower::ServiceExt;
use uuid::Uuid;

use pagehub_api::{build_app, build_state};
use pagehub_core::LocaleStore;
use pagehub_core::config::AppConfig;
use pagehub_database::DocumentStore;

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Application config
    pub config: Arc<AppConfig>,
}

impl TestApp {
    /// Create a new test application over a fresh, empty store
    pub async fn new() -> Self {
        let config = AppConfig::from_toml(
            r#"
            [auth]
            jwt_secret = "integration-test-secret"
            verification_url = "http://localhost/api/v1/auth/verify-email"
            "#,
        )
        .expect("Failed to parse test config");
        let config = Arc::new(config);

        let locales = LocaleStore::new(config.i18n.default_locale.clone());
        locales
            .load_file(concat!(
                env!("CARGO_MANIFEST_DIR"),
                "/assets/locales/localization.json"
            ))
            .expect("Failed to load locales");

        let store = DocumentStore::named(&format!("test-{}", Uuid::new_v4()));
        let state = build_state(Arc::clone(&config), Arc::new(locales), store);

        Self {
            router: build_app(state),
            config,
        }
    }

    /// Create a user through the admin endpoint and return their ID
    pub async fn create_test_user(&self, email: &str, password: &str, role: &str) -> String {
        let response = self
            .request(
                "POST",
                "/api/v1/users",
                Some(json!({
                    "email": email,
                    "password": password,
                    "first_name": "Test",
                    "last_name": "User",
                    "phone_number": "+14155552671",
                    "role": role,
                })),
                None,
            )
            .await;

        assert_eq!(
            response.status,
            StatusCode::CREATED,
            "User creation failed: {:?}",
            response.body
        );

        response.body["data"]["id"]
            .as_str()
            .expect("No id in created user")
            .to_string()
    }

    /// Register an account and return the verification token from its link
    pub async fn register(&self, email: &str, password: &str) -> String {
        let response = self
            .request(
                "POST",
                "/api/v1/auth/register",
                Some(json!({
                    "first_name": "Reg",
                    "last_name": "Istered",
                    "email": email,
                    "password": password,
                    "phone_number": "+14155552671",
                })),
                None,
            )
            .await;

        assert_eq!(
            response.status,
            StatusCode::CREATED,
            "Registration failed: {:?}",
            response.body
        );

        let link = response.body["data"]["verification_url"]
            .as_str()
            .expect("No verification_url in registration response");
        link.split_once("?token=")
            .map(|(_, token)| token.to_string())
            .expect("Verification link carries no token")
    }

    /// Make a JSON request to the test app
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        lang: Option<&str>,
    ) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();
        self.request_raw(method, path, &body_str, lang).await
    }

    /// Make a request with a verbatim body
    pub async fn request_raw(
        &self,
        method: &str,
        path: &str,
        body: &str,
        lang: Option<&str>,
    ) -> TestResponse {
        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json");

        if let Some(lang) = lang {
            req = req.header("Accept-Language", lang);
        }

        let req = req
            .body(Body::from(body.to_string()))
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse { status, body }
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body
    pub body: Value,
}
