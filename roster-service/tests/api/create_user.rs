use fake::Fake;
use fake::faker::internet::en::SafeEmail;

use crate::helpers::{CALLER_TOKEN, TestApp, valid_body};

#[tokio::test]
async fn missing_auth_context_is_unauthenticated_and_touches_nothing() {
    let app = TestApp::spawn().await;

    let response = app.post_user(&valid_body("a@example.com"), None).await;
    assert_eq!(response.status(), 401);

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["code"], "unauthenticated");

    assert_eq!(app.identity.account_count().await, 0);
    assert_eq!(app.profiles.profile_count().await, 0);
}

#[tokio::test]
async fn invalid_token_is_unauthenticated() {
    let app = TestApp::spawn().await;

    let response = app
        .post_user(&valid_body("a@example.com"), Some("forged-token"))
        .await;
    assert_eq!(response.status(), 401);
}

#[tokio::test]
async fn missing_fields_are_named_and_no_account_is_created() {
    let app = TestApp::spawn().await;

    let response = app
        .post_user(
            &serde_json::json!({ "name": "Alice", "email": "a@example.com" }),
            Some(CALLER_TOKEN),
        )
        .await;
    assert_eq!(response.status(), 400);

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["code"], "invalid-argument");
    let message = body["message"].as_str().unwrap();
    assert!(message.contains("password"));
    assert!(message.contains("department"));
    assert!(message.contains("role"));

    assert_eq!(app.identity.account_count().await, 0);
}

#[tokio::test]
async fn short_password_is_rejected_before_account_creation() {
    let app = TestApp::spawn().await;

    let mut body = valid_body("a@example.com");
    body["password"] = serde_json::json!("five5");

    let response = app.post_user(&body, Some(CALLER_TOKEN)).await;
    assert_eq!(response.status(), 400);

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["code"], "invalid-argument");
    assert_eq!(body["message"], "password too short");

    assert_eq!(app.identity.account_count().await, 0);
}

#[tokio::test]
async fn valid_request_provisions_account_profile_and_claim() {
    let app = TestApp::spawn().await;
    let email: String = SafeEmail().fake();

    let response = app.post_user(&valid_body(&email), Some(CALLER_TOKEN)).await;
    assert_eq!(response.status(), 200);

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "User created successfully.");

    assert_eq!(app.identity.account_count().await, 1);
    assert_eq!(app.profiles.profile_count().await, 1);
}

#[tokio::test]
async fn profile_is_keyed_by_account_id_with_role_and_timestamp() {
    let app = TestApp::spawn().await;

    let before = chrono::Utc::now();
    app.post_user(&valid_body("a@example.com"), Some(CALLER_TOKEN))
        .await;

    // Exactly one account exists; its id keys the profile document.
    let ids = app.identity.account_ids().await;
    assert_eq!(ids.len(), 1);
    let id = &ids[0];

    let profile = app.profiles.get(id).await.expect("profile written");
    assert_eq!(&profile.fields.uid, id);
    assert_eq!(profile.fields.role, "admin");
    assert_eq!(profile.fields.email, "a@example.com");
    assert_eq!(profile.fields.phone_number, "");
    assert!(profile.created_at >= before);

    assert_eq!(
        app.identity.role_claim(id).await.as_deref(),
        Some("admin")
    );
    assert_eq!(
        app.identity.display_name(id).await.as_deref(),
        Some("Alice")
    );
}

#[tokio::test]
async fn duplicate_email_fails_without_writing_a_profile() {
    let app = TestApp::spawn().await;

    app.post_user(&valid_body("a@example.com"), Some(CALLER_TOKEN))
        .await;

    let response = app
        .post_user(&valid_body("a@example.com"), Some(CALLER_TOKEN))
        .await;
    assert_eq!(response.status(), 400);

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["code"], "invalid-argument");
    assert_eq!(body["message"], "email already registered");

    assert_eq!(app.profiles.profile_count().await, 1);
}

#[tokio::test]
async fn empty_fields_count_as_missing() {
    let app = TestApp::spawn().await;

    let mut body = valid_body("a@example.com");
    body["department"] = serde_json::json!("");

    let response = app.post_user(&body, Some(CALLER_TOKEN)).await;
    assert_eq!(response.status(), 400);

    let error: serde_json::Value = response.json().await.unwrap();
    assert!(error["message"].as_str().unwrap().contains("department"));
}
