use anyhow::Context;

use bayespro_api::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    bayespro_observability::init();

    let config = Config::from_env().context("invalid configuration")?;
    let app = bayespro_api::app::build_app(&config);

    let listener = tokio::net::TcpListener::bind(config.addr)
        .await
        .with_context(|| format!("failed to bind {}", config.addr))?;

    tracing::info!(theme = %config.theme, "listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
