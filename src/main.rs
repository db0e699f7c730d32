use tracing_subscriber::{EnvFilter, fmt};

use members_api::config::AppConfig;
use members_api::shell;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = AppConfig::from_env()?;
    let state = shell::build_state(&config).await?;
    let app = shell::http::router(state);

    tracing::info!("listening on http://{}", config.bind);
    let listener = tokio::net::TcpListener::bind(config.bind).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
