use live_translate::config::Settings;
use live_translate::server;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let settings = Settings::from_env();
    tracing::info!(
        "Configured translation provider: {} (port {})",
        settings.service_name(),
        settings.port
    );

    server::run(settings).await;
}
