pub mod use_cases;

pub use use_cases::{
    provision_account::{ProvisionAccountUseCase, ProvisionError, ProvisionRequest},
    revoke_account::{RevokeAccountUseCase, RevokeError},
};
