//! Users service binary
//!
//! Usage: `roster-server [config.ron]`. Without a config file the server listens on
//! `0.0.0.0:8000` and serves the built-in sample users. `ROSTER_LISTEN`
//! overrides the listen address and `RUST_LOG` controls log verbosity.

use roster::{serve, App, Config};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{error, info};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("roster=info"))?;
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer())
        .init();

    if let Err(e) = run().await {
        error!(error = %e, "server failed");
        return Err(e);
    }

    Ok(())
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = match std::env::args().nth(1) {
        Some(path) => {
            info!(%path, "loading configuration");
            Config::load(&path)?
        }
        None => Config::default(),
    }
    .with_env_overrides();

    let store = config.store();
    info!(users = store.len(), "user store ready");
    let app = Arc::new(App::new(Arc::new(store)));

    let addr: SocketAddr = config.listen.parse()?;
    let listener = TcpListener::bind(addr).await?;
    info!("server running on {}", listener.local_addr()?);

    tokio::select! {
        _ = serve(listener, app) => {}
        result = tokio::signal::ctrl_c() => {
            result?;
            info!("shutting down");
        }
    }

    Ok(())
}
