//! Integration tests for user administration.

mod helpers;

use http::StatusCode;
use serde_json::json;
use uuid::Uuid;

fn update_body(id: &str) -> serde_json::Value {
    json!({
        "id": id,
        "first_name": "Augusta",
        "last_name": "King",
        "email": "augusta@example.com",
        "phone_number": "01001234567",
    })
}

#[tokio::test]
async fn test_create_user() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/v1/users",
            Some(json!({
                "email": "ada@example.com",
                "password": "analytical",
                "first_name": "Ada",
                "last_name": "Lovelace",
                "phone_number": "+442071234567",
                "role": "moderator",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["success"], true);
    assert_eq!(response.body["status"], 201);
    assert_eq!(response.body["message"], "User created successfully");
    assert_eq!(response.body["data"]["role"], "moderator");
    assert_eq!(response.body["data"]["status"], "pending");
    assert!(response.body["data"].get("hashed_password").is_none());
    assert!(response.body["data"].get("password").is_none());
}

#[tokio::test]
async fn test_create_user_constraints() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/v1/users",
            Some(json!({
                "email": "not-an-email",
                "password": "analytical",
                "first_name": "A",
                "last_name": "Lovelace",
                "phone_number": "02071234567",
                "role": "root",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    let errors = response.body["errors"].as_object().expect("errors object");
    assert_eq!(errors.len(), 4);
    assert_eq!(errors["email"], "validation failed on tag 'email'");
    assert_eq!(errors["first_name"], "validation failed on tag 'length'");
    assert_eq!(errors["phone_number"], "validation failed on tag 'e164'");
    assert_eq!(errors["role"], "validation failed on tag 'oneof'");
}

#[tokio::test]
async fn test_create_duplicate_user_conflicts() {
    let app = helpers::TestApp::new().await;
    app.create_test_user("ada@example.com", "analytical", "user")
        .await;

    let response = app
        .request(
            "POST",
            "/api/v1/users",
            Some(json!({
                "email": "ada@example.com",
                "password": "analytical",
                "first_name": "Ada",
                "last_name": "Lovelace",
                "phone_number": "+442071234567",
                "role": "user",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::CONFLICT);
    assert_eq!(response.body["message"], "User already exists");
}

#[tokio::test]
async fn test_get_user() {
    let app = helpers::TestApp::new().await;
    let id = app
        .create_test_user("ada@example.com", "analytical", "admin")
        .await;

    let response = app
        .request("GET", &format!("/api/v1/users/{id}"), None, None)
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["message"], "User fetched successfully");
    assert_eq!(response.body["data"]["id"], id.as_str());
    assert_eq!(response.body["data"]["email"], "ada@example.com");
}

#[tokio::test]
async fn test_missing_user_is_not_found() {
    let app = helpers::TestApp::new().await;
    let id = Uuid::new_v4();

    let response = app
        .request("GET", &format!("/api/v1/users/{id}"), None, Some("ar"))
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["message"], "المستخدم غير موجود");

    let response = app
        .request("DELETE", &format!("/api/v1/users/{id}"), None, None)
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["message"], "User not found");

    let id = id.to_string();
    let response = app
        .request(
            "PUT",
            &format!("/api/v1/users/{id}"),
            Some(update_body(&id)),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_user() {
    let app = helpers::TestApp::new().await;
    let id = app
        .create_test_user("ada@example.com", "analytical", "user")
        .await;

    let mut body = update_body(&id);
    body["password"] = json!("difference engine");
    let response = app
        .request("PUT", &format!("/api/v1/users/{id}"), Some(body), None)
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["message"], "User updated successfully");
    assert_eq!(response.body["data"]["first_name"], "Augusta");
    assert_eq!(response.body["data"]["email"], "augusta@example.com");

    let login = app
        .request(
            "POST",
            "/api/v1/auth/login",
            Some(json!({
                "email": "augusta@example.com",
                "password": "difference engine",
            })),
            None,
        )
        .await;
    assert_eq!(login.status, StatusCode::OK);
}

#[tokio::test]
async fn test_update_with_mismatched_id() {
    let app = helpers::TestApp::new().await;
    let id = app
        .create_test_user("ada@example.com", "analytical", "user")
        .await;
    let other = Uuid::new_v4().to_string();

    let response = app
        .request(
            "PUT",
            &format!("/api/v1/users/{id}"),
            Some(update_body(&other)),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["success"], false);
    assert_eq!(response.body["status"], 400);
    assert_eq!(
        response.body["message"],
        "The id in the path does not match the id in the body"
    );
}

#[tokio::test]
async fn test_delete_user() {
    let app = helpers::TestApp::new().await;
    let id = app
        .create_test_user("ada@example.com", "analytical", "user")
        .await;

    let response = app
        .request("DELETE", &format!("/api/v1/users/{id}"), None, None)
        .await;
    assert_eq!(response.status, StatusCode::NO_CONTENT);

    let response = app
        .request("GET", &format!("/api/v1/users/{id}"), None, None)
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_list_users_filters_sorts_and_pages() {
    let app = helpers::TestApp::new().await;
    for email in [
        "carol@example.com",
        "alice@example.com",
        "bob@example.com",
        "dave@other.org",
    ] {
        app.create_test_user(email, "password123", "user").await;
    }

    let response = app
        .request(
            "GET",
            "/api/v1/users?page=1&page_size=2&sort_by=email&filter_search=EXAMPLE",
            None,
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["message"], "User fetched successfully");
    let data = &response.body["data"];
    assert_eq!(data["users"][0]["email"], "alice@example.com");
    assert_eq!(data["users"][1]["email"], "bob@example.com");
    assert_eq!(
        data["pagination"],
        json!({
            "is_next": true,
            "is_prev": false,
            "page": 1,
            "page_size": 2,
            "total": 3,
            "total_pages": 2,
        })
    );

    let response = app
        .request(
            "GET",
            "/api/v1/users?page=1&page_size=10&sort_by=email&sort_order=desc",
            None,
            None,
        )
        .await;
    let users = response.body["data"]["users"].as_array().expect("users");
    assert_eq!(users.len(), 4);
    assert_eq!(users[0]["email"], "dave@other.org");
}
