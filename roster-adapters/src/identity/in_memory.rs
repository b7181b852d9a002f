use std::collections::HashMap;

use async_trait::async_trait;
use secrecy::{ExposeSecret, Secret};
use tokio::sync::RwLock;
use uuid::Uuid;

use roster_core::{AccountId, CallerContext, IdentityError, IdentityProvider, NewAccount};

#[derive(Debug, Clone)]
struct AccountRecord {
    email: String,
    display_name: String,
    role_claim: Option<String>,
}

/// In-memory identity provider for tests and local runs.
///
/// Enforces the same semantics the real service does: unique emails,
/// not-found on deleting a missing account, token verification.
#[derive(Default)]
pub struct InMemoryIdentityProvider {
    accounts: RwLock<HashMap<AccountId, AccountRecord>>,
    tokens: RwLock<HashMap<String, AccountId>>,
}

impl InMemoryIdentityProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a bearer token as belonging to `caller`, so tests can make
    /// authenticated calls without a full login flow.
    pub async fn issue_token(&self, token: &str, caller: AccountId) {
        self.tokens
            .write()
            .await
            .insert(token.to_string(), caller);
    }

    pub async fn contains(&self, id: &AccountId) -> bool {
        self.accounts.read().await.contains_key(id)
    }

    pub async fn account_count(&self) -> usize {
        self.accounts.read().await.len()
    }

    pub async fn account_ids(&self) -> Vec<AccountId> {
        self.accounts.read().await.keys().cloned().collect()
    }

    pub async fn display_name(&self, id: &AccountId) -> Option<String> {
        self.accounts
            .read()
            .await
            .get(id)
            .map(|record| record.display_name.clone())
    }

    pub async fn role_claim(&self, id: &AccountId) -> Option<String> {
        self.accounts
            .read()
            .await
            .get(id)
            .and_then(|record| record.role_claim.clone())
    }

    /// Seed an existing account, as if it had been created earlier.
    pub async fn insert_account(&self, id: AccountId, email: &str) {
        self.accounts.write().await.insert(
            id,
            AccountRecord {
                email: email.to_string(),
                display_name: String::new(),
                role_claim: None,
            },
        );
    }
}

#[async_trait]
impl IdentityProvider for InMemoryIdentityProvider {
    async fn create_account(&self, account: NewAccount) -> Result<AccountId, IdentityError> {
        let email = account.email.as_ref().expose_secret().clone();
        let mut accounts = self.accounts.write().await;

        if accounts.values().any(|record| record.email == email) {
            return Err(IdentityError::EmailAlreadyInUse);
        }

        let id = AccountId::new(Uuid::new_v4().to_string());
        accounts.insert(
            id.clone(),
            AccountRecord {
                email,
                display_name: account.display_name,
                role_claim: None,
            },
        );

        Ok(id)
    }

    async fn set_role_claim(&self, id: &AccountId, role: &str) -> Result<(), IdentityError> {
        let mut accounts = self.accounts.write().await;
        let record = accounts.get_mut(id).ok_or(IdentityError::AccountNotFound)?;
        record.role_claim = Some(role.to_string());
        Ok(())
    }

    async fn delete_account(&self, id: &AccountId) -> Result<(), IdentityError> {
        self.accounts
            .write()
            .await
            .remove(id)
            .ok_or(IdentityError::AccountNotFound)?;
        Ok(())
    }

    async fn verify_id_token(
        &self,
        token: &Secret<String>,
    ) -> Result<CallerContext, IdentityError> {
        self.tokens
            .read()
            .await
            .get(token.expose_secret())
            .map(|id| CallerContext {
                account_id: id.clone(),
            })
            .ok_or(IdentityError::InvalidToken)
    }
}
