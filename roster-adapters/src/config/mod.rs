pub mod settings;

pub use settings::{RemoteServiceSettings, ServerSettings, Settings};
