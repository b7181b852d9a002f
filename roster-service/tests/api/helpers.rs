use std::sync::Arc;

use roster_adapters::{InMemoryIdentityProvider, InMemoryProfileStore};
use roster_core::AccountId;

/// Token the test caller authenticates with.
pub const CALLER_TOKEN: &str = "caller-token";

pub struct TestApp {
    pub address: String,
    pub client: reqwest::Client,
    pub identity: Arc<InMemoryIdentityProvider>,
    pub profiles: Arc<InMemoryProfileStore>,
}

impl TestApp {
    /// Spawn the service on an ephemeral port against in-memory
    /// collaborators, with one authenticated caller pre-registered.
    pub async fn spawn() -> Self {
        let identity = Arc::new(InMemoryIdentityProvider::new());
        let profiles = Arc::new(InMemoryProfileStore::new());

        identity
            .issue_token(CALLER_TOKEN, AccountId::new("caller-1"))
            .await;

        let app = roster_service::router(identity.clone(), profiles.clone());
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind test listener");
        let address = format!("http://{}", listener.local_addr().unwrap());

        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("server error");
        });

        Self {
            address,
            client: reqwest::Client::new(),
            identity,
            profiles,
        }
    }

    pub async fn post_user(
        &self,
        body: &serde_json::Value,
        token: Option<&str>,
    ) -> reqwest::Response {
        let mut request = self.client.post(format!("{}/users", self.address)).json(body);
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }
        request.send().await.expect("failed to execute request")
    }

    pub async fn post_profile_deleted(&self, path: &str) -> reqwest::Response {
        self.client
            .post(format!("{}/events/profile-deleted", self.address))
            .json(&serde_json::json!({ "path": path }))
            .send()
            .await
            .expect("failed to execute request")
    }
}

pub fn valid_body(email: &str) -> serde_json::Value {
    serde_json::json!({
        "name": "Alice",
        "email": email,
        "password": "secret1",
        "department": "Eng",
        "role": "admin",
    })
}
