pub mod in_memory;
pub mod rest;

pub use in_memory::InMemoryIdentityProvider;
pub use rest::RestIdentityProvider;
