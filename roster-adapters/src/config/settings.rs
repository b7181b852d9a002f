use config::{Config, ConfigError, Environment, File};
use secrecy::Secret;
use serde::Deserialize;

/// Process configuration, loaded once at startup and passed down explicitly.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub identity: RemoteServiceSettings,
    pub profiles: RemoteServiceSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

/// Connection details for one of the two remote collaborators.
#[derive(Debug, Clone, Deserialize)]
pub struct RemoteServiceSettings {
    pub base_url: String,
    pub api_key: Secret<String>,
}

impl Settings {
    /// Load configuration from `config/default.json`, an optional
    /// `config/local.json` override, and `ROSTER`-prefixed environment
    /// variables (e.g. `ROSTER_IDENTITY__API_KEY`).
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000)?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            .add_source(Environment::with_prefix("ROSTER").separator("__"))
            .build()?
            .try_deserialize()
    }
}
