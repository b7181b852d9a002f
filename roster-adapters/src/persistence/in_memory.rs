use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use roster_core::{AccountId, NewProfile, Profile, ProfileStore, ProfileStoreError};

/// In-memory document store for tests and local runs.
///
/// Stamps `created_at` with its own clock, standing in for the real store's
/// server-assigned timestamp.
#[derive(Default)]
pub struct InMemoryProfileStore {
    profiles: RwLock<HashMap<AccountId, Profile>>,
}

impl InMemoryProfileStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn get(&self, id: &AccountId) -> Option<Profile> {
        self.profiles.read().await.get(id).cloned()
    }

    pub async fn profile_count(&self) -> usize {
        self.profiles.read().await.len()
    }
}

#[async_trait]
impl ProfileStore for InMemoryProfileStore {
    async fn create(&self, profile: NewProfile) -> Result<(), ProfileStoreError> {
        let stored = Profile {
            fields: profile,
            created_at: Utc::now(),
        };
        self.profiles
            .write()
            .await
            .insert(stored.fields.uid.clone(), stored);
        Ok(())
    }
}
