pub mod provision_account;
pub mod revoke_account;
