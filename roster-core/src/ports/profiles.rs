use async_trait::async_trait;
use thiserror::Error;

use crate::domain::profile::NewProfile;

#[derive(Debug, Error)]
pub enum ProfileStoreError {
    #[error("unexpected profile store error: {0}")]
    Unexpected(String),
}

/// Document store holding the `users` collection.
///
/// The deletion watcher never touches this port: by the time it runs, the
/// document is already gone.
#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// Write the profile document keyed by `profile.uid`. The store assigns
    /// `createdAt` from its own clock.
    async fn create(&self, profile: NewProfile) -> Result<(), ProfileStoreError>;
}
