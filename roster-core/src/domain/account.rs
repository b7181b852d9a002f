use serde::{Deserialize, Serialize};

use super::{email::Email, password::Password};

/// Opaque identifier assigned by the identity provider.
///
/// Doubles as the profile document ID; the two sides of the system are
/// coupled only through this convention.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountId(String);

impl AccountId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for AccountId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Everything the identity provider needs to create an account.
#[derive(Debug)]
pub struct NewAccount {
    pub email: Email,
    pub password: Password,
    pub display_name: String,
    pub phone_number: Option<String>,
}

/// The authenticated caller, derived from a verified bearer token.
#[derive(Debug, Clone)]
pub struct CallerContext {
    pub account_id: AccountId,
}
