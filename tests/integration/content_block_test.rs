//! Integration tests for versioned content blocks.

mod helpers;

use http::StatusCode;
use serde_json::json;

async fn create_block(app: &helpers::TestApp, page: &str, section: &str, content: &str) {
    let response = app
        .request(
            "POST",
            "/api/v1/blocks",
            Some(json!({"page": page, "section": section, "content": content})),
            None,
        )
        .await;
    assert_eq!(
        response.status,
        StatusCode::CREATED,
        "Block creation failed: {:?}",
        response.body
    );
}

#[tokio::test]
async fn test_create_block_starts_at_version_one() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/v1/blocks",
            Some(json!({"page": "home", "section": "hero", "content": "<h1>Hi</h1>"})),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["message"], "Content block created successfully");
    assert_eq!(response.body["data"]["version"], 1);
    assert_eq!(response.body["data"]["content"], "<h1>Hi</h1>");
}

#[tokio::test]
async fn test_duplicate_key_conflicts() {
    let app = helpers::TestApp::new().await;
    create_block(&app, "home", "hero", "first").await;

    let response = app
        .request(
            "POST",
            "/api/v1/blocks",
            Some(json!({"page": "home", "section": "hero", "content": "second"})),
            Some("ar"),
        )
        .await;

    assert_eq!(response.status, StatusCode::CONFLICT);
    assert_eq!(response.body["message"], "كتلة المحتوى موجود بالفعل");
}

#[tokio::test]
async fn test_update_bumps_version() {
    let app = helpers::TestApp::new().await;
    create_block(&app, "home", "hero", "v1").await;

    let mut last = serde_json::Value::Null;
    for content in ["v2", "v3"] {
        let response = app
            .request(
                "PUT",
                "/api/v1/blocks",
                Some(json!({"page": "home", "section": "hero", "content": content})),
                None,
            )
            .await;
        assert_eq!(response.status, StatusCode::OK);
        assert_eq!(response.body["message"], "Content block updated successfully");
        last = response.body["data"].clone();
    }

    assert_eq!(last["version"], 3);
    assert_eq!(last["content"], "v3");

    let response = app
        .request("GET", "/api/v1/blocks?page=home&section=hero", None, None)
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["version"], 3);
    assert_eq!(response.body["data"]["created_at"], last["created_at"]);
}

#[tokio::test]
async fn test_missing_block_is_not_found() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request("GET", "/api/v1/blocks?page=home&section=nope", None, None)
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.body["message"], "Content block not found");

    let response = app
        .request(
            "PUT",
            "/api/v1/blocks",
            Some(json!({"page": "home", "section": "nope", "content": "x"})),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);

    let response = app
        .request("DELETE", "/api/v1/blocks?page=home&section=nope", None, None)
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_page_lists_its_blocks_by_section() {
    let app = helpers::TestApp::new().await;
    create_block(&app, "home", "zeta", "z").await;
    create_block(&app, "about", "intro", "i").await;
    create_block(&app, "home", "alpha", "a").await;

    let response = app
        .request("GET", "/api/v1/blocks/page/home", None, None)
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let blocks = response.body["data"]["blocks"].as_array().expect("blocks");
    let sections: Vec<&str> = blocks
        .iter()
        .filter_map(|b| b["section"].as_str())
        .collect();
    assert_eq!(sections, vec!["alpha", "zeta"]);

    let response = app
        .request("GET", "/api/v1/blocks/page/contact", None, None)
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["blocks"], json!([]));
}

#[tokio::test]
async fn test_delete_block() {
    let app = helpers::TestApp::new().await;
    create_block(&app, "home", "hero", "x").await;

    let response = app
        .request("DELETE", "/api/v1/blocks?page=home&section=hero", None, None)
        .await;
    assert_eq!(response.status, StatusCode::NO_CONTENT);

    let response = app
        .request("GET", "/api/v1/blocks?page=home&section=hero", None, None)
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_block_fields_are_required() {
    let app = helpers::TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/v1/blocks",
            Some(json!({"page": "home", "content": "  "})),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    let errors = response.body["errors"].as_object().expect("errors object");
    assert_eq!(errors.len(), 2);
    assert_eq!(errors["section"], "validation failed on tag 'required'");
    assert_eq!(errors["content"], "validation failed on tag 'required'");

    let response = app
        .request("GET", "/api/v1/blocks?page=home", None, None)
        .await;
    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(
        response.body["errors"]["section"],
        "validation failed on tag 'required'"
    );
}
