mod api;
mod middleware;

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use brandsight_scraper::SiteClient;
use brandsight_structurer::{Structurer, StructurerConfig};

use crate::api::{build_app, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = brandsight_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let pool_config = brandsight_db::PoolConfig::from_app_config(&config);
    let pool = brandsight_db::connect_pool(&config.database_url, pool_config).await?;
    brandsight_db::run_migrations(&pool).await?;

    let site = SiteClient::new(config.scraper_timeout_secs, &config.scraper_user_agent)?;
    let structurer = Structurer::new(StructurerConfig {
        endpoint: config.structurer_endpoint.clone(),
        api_key: config.structurer_api_key.clone(),
        model: config.structurer_model.clone(),
        timeout_secs: config.structurer_timeout_secs,
    })?;

    let app = build_app(AppState {
        pool,
        site: Arc::new(site),
        structurer: Arc::new(structurer),
    });

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!(addr = %config.bind_addr, "brandsight server listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to listen for ctrl-c");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("received shutdown signal, starting graceful shutdown");
}
