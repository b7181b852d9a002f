pub mod in_memory;
pub mod rest;

pub use in_memory::InMemoryProfileStore;
pub use rest::RestProfileStore;
