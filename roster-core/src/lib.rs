pub mod domain;
pub mod ports;

// Re-export commonly used types for convenience
pub use domain::{
    account::{AccountId, CallerContext, NewAccount},
    email::{Email, EmailError},
    password::{Password, PasswordError},
    profile::{NewProfile, Profile},
};

pub use ports::{
    identity::{IdentityError, IdentityProvider},
    profiles::{ProfileStore, ProfileStoreError},
};
