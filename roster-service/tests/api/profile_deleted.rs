use roster_core::AccountId;

use crate::helpers::TestApp;

#[tokio::test]
async fn deletes_account_for_deleted_profile() {
    let app = TestApp::spawn().await;
    let id = AccountId::new("u123");
    app.identity.insert_account(id.clone(), "a@example.com").await;

    let response = app.post_profile_deleted("users/u123").await;
    assert_eq!(response.status(), 204);

    assert!(!app.identity.contains(&id).await);
}

#[tokio::test]
async fn missing_account_still_completes() {
    let app = TestApp::spawn().await;

    let response = app.post_profile_deleted("users/u404").await;
    assert_eq!(response.status(), 204);
}

#[tokio::test]
async fn repeated_delivery_is_idempotent() {
    let app = TestApp::spawn().await;
    let id = AccountId::new("u123");
    app.identity.insert_account(id, "a@example.com").await;

    assert_eq!(app.post_profile_deleted("users/u123").await.status(), 204);
    assert_eq!(app.post_profile_deleted("users/u123").await.status(), 204);
}

#[tokio::test]
async fn rejects_paths_outside_the_users_collection() {
    let app = TestApp::spawn().await;

    let response = app.post_profile_deleted("teams/t1").await;
    assert_eq!(response.status(), 400);

    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["code"], "invalid-argument");
}

#[tokio::test]
async fn deletion_does_not_touch_the_profile_store() {
    let app = TestApp::spawn().await;
    app.identity
        .insert_account(AccountId::new("u123"), "a@example.com")
        .await;

    app.post_profile_deleted("users/u123").await;

    // The watcher only talks to the identity provider; by the time it runs
    // the document is already gone.
    assert_eq!(app.profiles.profile_count().await, 0);
}
