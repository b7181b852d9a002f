use async_trait::async_trait;
use reqwest::{Client, Url};
use secrecy::{ExposeSecret, Secret};

use roster_core::{NewProfile, ProfileStore, ProfileStoreError};

const API_KEY_HEADER: &str = "X-Store-Api-Key";

/// Document store client for the `users` collection.
///
/// The store stamps `createdAt` from its own clock when the document is
/// created; this client never sends a timestamp.
pub struct RestProfileStore {
    http_client: Client,
    base_url: String,
    api_key: Secret<String>,
}

impl RestProfileStore {
    pub fn new(base_url: String, api_key: Secret<String>, http_client: Client) -> Self {
        Self {
            http_client,
            base_url,
            api_key,
        }
    }
}

#[async_trait]
impl ProfileStore for RestProfileStore {
    #[tracing::instrument(name = "ProfileStore::create", skip_all, fields(uid = %profile.uid))]
    async fn create(&self, profile: NewProfile) -> Result<(), ProfileStoreError> {
        let url = Url::parse(&self.base_url)
            .and_then(|base| base.join(&format!("/users/{}", profile.uid)))
            .map_err(|e| ProfileStoreError::Unexpected(e.to_string()))?;

        let response = self
            .http_client
            .put(url)
            .header(API_KEY_HEADER, self.api_key.expose_secret())
            .json(&profile)
            .send()
            .await
            .map_err(|e| ProfileStoreError::Unexpected(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(ProfileStoreError::Unexpected(format!(
                "profile store returned {status}: {body}"
            )));
        }

        Ok(())
    }
}
