mod api;
mod middleware;

use std::sync::Arc;

use aru365_core::{load_catalog, load_snapshot, AffiliateLinks};
use aru365_resolve::{marketplace_from_config, Resolver};
use tracing_subscriber::EnvFilter;

use crate::api::{build_app, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = aru365_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let links = AffiliateLinks::from_app_config(&config);
    let catalog = load_catalog(&config.catalog_path)?;
    let snapshot = load_snapshot(&config.snapshot_path, links.clone())?;
    tracing::info!(
        env = %config.env,
        pillars = catalog.pillars().len(),
        pages = catalog.page_paths().len(),
        snapshot_products = snapshot.len(),
        "loaded editorial data"
    );

    let marketplace = marketplace_from_config(&config, false)?;
    let resolver = Resolver::new(
        Arc::new(catalog),
        Arc::new(snapshot),
        links,
        marketplace,
        &config.site_url,
    );
    let app = build_app(AppState { resolver });

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!(addr = %config.bind_addr, "listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("received shutdown signal, starting graceful shutdown");
}
