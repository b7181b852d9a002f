use std::sync::Arc;

use roster_core::{
    AccountId, Email, IdentityError, IdentityProvider, NewAccount, NewProfile, Password,
    ProfileStore, ProfileStoreError,
};
use secrecy::ExposeSecret;

/// Error types for the provision account use case
#[derive(Debug, thiserror::Error)]
pub enum ProvisionError {
    #[error("Identity provider error: {0}")]
    Identity(#[from] IdentityError),

    #[error("Profile store error: {0}")]
    Profile(#[from] ProfileStoreError),
}

/// Validated input for provisioning, produced by the transport layer.
#[derive(Debug)]
pub struct ProvisionRequest {
    pub name: String,
    pub email: Email,
    pub password: Password,
    pub phone_number: Option<String>,
    pub department: String,
    pub role: String,
}

/// Provision account use case - creates an identity account, writes the
/// matching profile document, and tags the account with its role claim.
///
/// The three steps run strictly sequentially and there is no compensating
/// rollback: when the profile write fails after the account was created, the
/// account is left orphaned and the failure is logged.
pub struct ProvisionAccountUseCase<I, P>
where
    I: IdentityProvider,
    P: ProfileStore,
{
    identity: Arc<I>,
    profiles: Arc<P>,
}

impl<I, P> ProvisionAccountUseCase<I, P>
where
    I: IdentityProvider,
    P: ProfileStore,
{
    pub fn new(identity: Arc<I>, profiles: Arc<P>) -> Self {
        Self { identity, profiles }
    }

    /// Execute the provision account use case
    ///
    /// # Returns
    /// The new account's identifier on success, or ProvisionError
    #[tracing::instrument(name = "ProvisionAccountUseCase::execute", skip_all)]
    pub async fn execute(&self, request: ProvisionRequest) -> Result<AccountId, ProvisionError> {
        let email_text = request.email.as_ref().expose_secret().clone();

        let account_id = self
            .identity
            .create_account(NewAccount {
                email: request.email,
                password: request.password,
                display_name: request.name.clone(),
                phone_number: request.phone_number.clone(),
            })
            .await?;

        let profile = NewProfile {
            name: request.name,
            email: email_text.clone(),
            phone_number: request.phone_number.unwrap_or_default(),
            department: request.department,
            role: request.role.clone(),
            uid: account_id.clone(),
        };

        if let Err(e) = self.profiles.create(profile).await {
            tracing::error!(
                account_id = %account_id,
                error = %e,
                "profile write failed after account creation, account left orphaned"
            );
            return Err(e.into());
        }

        self.identity
            .set_role_claim(&account_id, &request.role)
            .await?;

        tracing::info!(account_id = %account_id, email = %email_text, "user created");

        Ok(account_id)
    }
}
