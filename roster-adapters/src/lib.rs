pub mod config;
pub mod http;
pub mod identity;
pub mod persistence;

// Re-export commonly used types for convenience
pub use config::Settings;
pub use http::AppState;
pub use identity::{InMemoryIdentityProvider, RestIdentityProvider};
pub use persistence::{InMemoryProfileStore, RestProfileStore};
