use std::sync::Arc;

use roster_core::{AccountId, IdentityError, IdentityProvider};

/// Error types for the revoke account use case
#[derive(Debug, thiserror::Error)]
pub enum RevokeError {
    #[error("Identity provider error: {0}")]
    Identity(#[from] IdentityError),
}

/// Revoke account use case - deletes the identity account matching a
/// removed profile document.
///
/// Idempotent: a missing account counts as success, because any actor may
/// have deleted it first.
pub struct RevokeAccountUseCase<I>
where
    I: IdentityProvider,
{
    identity: Arc<I>,
}

impl<I> RevokeAccountUseCase<I>
where
    I: IdentityProvider,
{
    pub fn new(identity: Arc<I>) -> Self {
        Self { identity }
    }

    /// Execute the revoke account use case
    ///
    /// # Arguments
    /// * `id` - Account identifier taken from the deleted document's key
    #[tracing::instrument(name = "RevokeAccountUseCase::execute", skip(self))]
    pub async fn execute(&self, id: &AccountId) -> Result<(), RevokeError> {
        match self.identity.delete_account(id).await {
            Ok(()) => {
                tracing::info!(account_id = %id, "identity account deleted");
                Ok(())
            }
            Err(IdentityError::AccountNotFound) => {
                tracing::warn!(account_id = %id, "account not found, likely already deleted");
                Ok(())
            }
            Err(e) => Err(e.into()),
        }
    }
}
