use std::sync::Arc;

use color_eyre::eyre::Result;
use reqwest::Client as HttpClient;
use roster_adapters::{RestIdentityProvider, RestProfileStore, Settings};
use tracing_error::ErrorLayer;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    color_eyre::install()?;
    init_tracing()?;

    // Load configuration
    let config = Settings::load()?;

    // One HTTP client shared by both collaborator adapters
    let http_client = HttpClient::builder()
        .timeout(std::time::Duration::from_secs(10))
        .build()?;

    // Process-lifetime collaborator handles, passed down explicitly
    let identity = Arc::new(RestIdentityProvider::new(
        config.identity.base_url.clone(),
        config.identity.api_key.clone(),
        http_client.clone(),
    ));
    let profiles = Arc::new(RestProfileStore::new(
        config.profiles.base_url.clone(),
        config.profiles.api_key.clone(),
        http_client,
    ));

    let app = roster_service::router(identity, profiles);

    let address = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&address).await?;
    tracing::info!(%address, "starting roster provisioning service");

    axum::serve(listener, app).await?;

    Ok(())
}

pub fn init_tracing() -> Result<()> {
    let fmt_layer = fmt::layer().compact();

    let filter_layer = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("info"))?;

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .with(ErrorLayer::default())
        .init();

    Ok(())
}
