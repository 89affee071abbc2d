//! Integration tests for authentication flow.

mod helpers;

use http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_login_success() {
    let app = helpers::TestApp::new().await;
    app.create_test_user("ada@example.com", "password123", "user")
        .await;

    let response = app
        .request(
            "POST",
            "/api/v1/auth/login",
            Some(json!({
                "email": "ada@example.com",
                "password": "password123",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["success"], true);
    assert_eq!(response.body["status"], 200);
    assert_eq!(response.body["message"], "Login successful");
    assert!(response.body["data"]["token"].as_str().is_some_and(|t| !t.is_empty()));
    assert_eq!(
        response.body["data"]["expiration_in_milliseconds"],
        app.config.auth.jwt_expiration_ms
    );
}

#[tokio::test]
async fn test_login_invalid_password() {
    let app = helpers::TestApp::new().await;
    app.create_test_user("grace@example.com", "password123", "user")
        .await;

    let response = app
        .request(
            "POST",
            "/api/v1/auth/login",
            Some(json!({
                "email": "grace@example.com",
                "password": "wrongpassword",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["message"], "Invalid email or password");
}

#[tokio::test]
async fn test_login_nonexistent_user() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/v1/auth/login",
            Some(json!({
                "email": "nobody@example.com",
                "password": "password123",
            })),
            Some("ar"),
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(
        response.body["message"],
        "البريد الإلكتروني أو كلمة المرور غير صحيحة"
    );
}

#[tokio::test]
async fn test_register_creates_pending_user() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/v1/auth/register",
            Some(json!({
                "first_name": "Katherine",
                "last_name": "Johnson",
                "email": "katherine@example.com",
                "password": "trajectory",
                "phone_number": "+14155552671",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["message"], "User registered successfully");
    assert_eq!(response.body["data"]["user_status"], "pending");
    assert!(
        response.body["data"]["verification_url"]
            .as_str()
            .is_some_and(|url| url.starts_with("http://localhost/api/v1/auth/verify-email?token="))
    );
}

#[tokio::test]
async fn test_register_duplicate_email() {
    let app = helpers::TestApp::new().await;
    app.register("dup@example.com", "password123").await;

    let response = app
        .request(
            "POST",
            "/api/v1/auth/register",
            Some(json!({
                "first_name": "Second",
                "last_name": "Comer",
                "email": "DUP@example.com",
                "password": "password123",
                "phone_number": "+14155552671",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["message"], "Email is already in use");
}

#[tokio::test]
async fn test_verify_email_activates_user() {
    let app = helpers::TestApp::new().await;
    let token = app.register("verify@example.com", "password123").await;

    let response = app
        .request(
            "GET",
            &format!("/api/v1/auth/verify-email?token={token}"),
            None,
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["message"], "Email verified successfully");
    assert!(response.body.get("data").is_none());

    let response = app
        .request("GET", "/api/v1/users?page=1&page_size=10", None, None)
        .await;
    assert_eq!(response.body["data"]["users"][0]["status"], "activated");
}

#[tokio::test]
async fn test_verify_email_rejects_bad_tokens() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request("GET", "/api/v1/auth/verify-email?token=garbage", None, None)
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["message"], "Invalid or expired token");

    let response = app
        .request("GET", "/api/v1/auth/verify-email", None, None)
        .await;
    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        response.body["errors"]["token"],
        "validation failed on tag 'required'"
    );
}

#[tokio::test]
async fn test_verify_email_query_decode_failure() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request("GET", "/api/v1/auth/verify-email?token=a&token=b", None, Some("ar"))
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["message"], "Invalid query parameters");
    assert!(
        response.body["error"]
            .as_str()
            .is_some_and(|e| e.contains("duplicate field"))
    );
}

#[tokio::test]
async fn test_login_token_is_not_a_verification_token() {
    let app = helpers::TestApp::new().await;
    app.create_test_user("mixed@example.com", "password123", "user")
        .await;

    let login = app
        .request(
            "POST",
            "/api/v1/auth/login",
            Some(json!({
                "email": "mixed@example.com",
                "password": "password123",
            })),
            None,
        )
        .await;
    let token = login.body["data"]["token"].as_str().expect("token");

    let response = app
        .request(
            "GET",
            &format!("/api/v1/auth/verify-email?token={token}"),
            None,
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}
