use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::account::AccountId;

/// Profile fields as written by the provisioner.
///
/// `created_at` is deliberately absent: the document store assigns it from
/// its own clock at write time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProfile {
    pub name: String,
    pub email: String,
    /// Empty string when the request carried no phone number.
    pub phone_number: String,
    pub department: String,
    pub role: String,
    /// Redundant copy of the document ID.
    pub uid: AccountId,
}

/// A stored profile document, timestamp included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    #[serde(flatten)]
    pub fields: NewProfile,
    pub created_at: DateTime<Utc>,
}
