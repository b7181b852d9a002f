use async_trait::async_trait;
use secrecy::Secret;
use thiserror::Error;

use crate::domain::account::{AccountId, CallerContext, NewAccount};

/// Closed set of identity-provider failures.
///
/// Provider-specific wire codes are mapped into this enum exactly once, at
/// the adapter boundary; everything above it matches on these variants.
#[derive(Debug, Error)]
pub enum IdentityError {
    #[error("email already registered")]
    EmailAlreadyInUse,
    #[error("password too weak")]
    WeakPassword,
    #[error("account not found")]
    AccountNotFound,
    #[error("invalid or expired token")]
    InvalidToken,
    #[error("unexpected identity provider error: {0}")]
    Unexpected(String),
}

impl PartialEq for IdentityError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::EmailAlreadyInUse, Self::EmailAlreadyInUse) => true,
            (Self::WeakPassword, Self::WeakPassword) => true,
            (Self::AccountNotFound, Self::AccountNotFound) => true,
            (Self::InvalidToken, Self::InvalidToken) => true,
            (Self::Unexpected(_), Self::Unexpected(_)) => true,
            _ => false,
        }
    }
}

#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Create an account and return the provider-assigned identifier.
    async fn create_account(&self, account: NewAccount) -> Result<AccountId, IdentityError>;

    /// Attach or replace the `role` custom claim on an account.
    async fn set_role_claim(&self, id: &AccountId, role: &str) -> Result<(), IdentityError>;

    /// Delete an account. Fails with [`IdentityError::AccountNotFound`] when
    /// the account is already gone.
    async fn delete_account(&self, id: &AccountId) -> Result<(), IdentityError>;

    /// Verify a caller's bearer token and return who is calling.
    async fn verify_id_token(
        &self,
        token: &Secret<String>,
    ) -> Result<CallerContext, IdentityError>;
}
