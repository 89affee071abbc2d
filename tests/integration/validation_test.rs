//! Integration tests for request binding, validation, and locale negotiation.

mod helpers;

use http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_malformed_json_is_rejected_with_fixed_message() {
    let app = helpers::TestApp::new().await;

    for lang in [None, Some("ar")] {
        let response = app
            .request_raw("POST", "/api/v1/auth/login", r#"{"email": "a@b.co","#, lang)
            .await;

        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        assert_eq!(response.body["message"], "Invalid JSON payload");
        assert!(response.body["error"].as_str().is_some_and(|e| !e.is_empty()));
    }
}

#[tokio::test]
async fn test_empty_body_is_invalid_json() {
    let app = helpers::TestApp::new().await;

    let response = app.request_raw("POST", "/api/v1/users", "", None).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["message"], "Invalid JSON payload");
}

#[tokio::test]
async fn test_oversized_body_is_invalid_json() {
    let app = helpers::TestApp::new().await;
    let padding = "x".repeat(app.config.server.body_limit_bytes + 1);
    let body = format!(r#"{{"email":"a@b.co","password":"{padding}"}}"#);

    let response = app
        .request_raw("POST", "/api/v1/auth/login", &body, None)
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["message"], "Invalid JSON payload");
    assert!(
        response.body["error"]
            .as_str()
            .is_some_and(|e| e.contains("length limit exceeded"))
    );
}

#[tokio::test]
async fn test_every_failing_field_is_reported() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/v1/auth/register",
            Some(json!({
                "first_name": "Ada",
                "last_name": "Lovelace",
                "password": "short",
                "phone_number": "+442071234567",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(response.body["message"], "Validation failed");

    let errors = response.body["errors"].as_object().expect("errors object");
    assert_eq!(errors.len(), 2);
    assert_eq!(errors["email"], "validation failed on tag 'required'");
    assert_eq!(errors["password"], "validation failed on tag 'length'");
}

#[tokio::test]
async fn test_validation_message_follows_accept_language() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request("POST", "/api/v1/auth/login", Some(json!({})), Some("ar-EG,en;q=0.5"))
        .await;

    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(response.body["message"], "فشل التحقق من البيانات");
    assert_eq!(
        response.body["errors"]["password"],
        "validation failed on tag 'required'"
    );
}

#[tokio::test]
async fn test_unknown_language_falls_back_to_default() {
    let app = helpers::TestApp::new().await;

    for lang in [Some("fr-FR"), Some(""), None] {
        let response = app
            .request("POST", "/api/v1/auth/login", Some(json!({})), lang)
            .await;
        assert_eq!(response.body["message"], "Validation failed");
    }
}

#[tokio::test]
async fn test_query_decode_failure() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request("GET", "/api/v1/users?page=first&page_size=10", None, None)
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["message"], "Invalid query parameters");
}

#[tokio::test]
async fn test_query_constraints() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request(
            "GET",
            "/api/v1/users?page=0&page_size=500&sort_order=sideways",
            None,
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    let errors = response.body["errors"].as_object().expect("errors object");
    assert_eq!(errors.len(), 3);
    assert_eq!(errors["page"], "validation failed on tag 'range'");
    assert_eq!(errors["page_size"], "validation failed on tag 'range'");
    assert_eq!(errors["sort_order"], "validation failed on tag 'oneof'");

    let response = app.request("GET", "/api/v1/users", None, None).await;
    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        response.body["errors"]["page"],
        "validation failed on tag 'required'"
    );
}

#[tokio::test]
async fn test_path_identifier_must_be_uuid() {
    let app = helpers::TestApp::new().await;

    let response = app.request("GET", "/api/v1/users/42", None, None).await;

    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(response.body["errors"]["id"], "validation failed on tag 'uuid'");
}

#[tokio::test]
async fn test_ping() {
    let app = helpers::TestApp::new().await;

    let response = app.request("GET", "/api/v1/ping", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, json!({"message": "pong"}));
}
