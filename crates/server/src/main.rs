use gitops_showcase::api::{AppState, start_webserver};
use gitops_showcase::config::load_config_or_panic;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

fn initialize_tracing() {
    let default_directives = "gitops_showcase=info,tower_http=info";
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directives));

    let registry = tracing_subscriber::registry().with(env_filter);
    let layer = fmt::layer().with_target(true).with_level(true);

    registry.with(layer).init();
}

#[tokio::main]
async fn main() -> color_eyre::eyre::Result<()> {
    color_eyre::install().expect("Failed to install `color_eyre::install`");

    initialize_tracing();

    // Load config
    let config = load_config_or_panic();

    // The document is hardcoded and read-only for the process lifetime.
    let state = AppState::new();

    start_webserver(state, &config).await?;
    Ok(())
}
