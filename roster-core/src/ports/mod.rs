pub mod identity;
pub mod profiles;
