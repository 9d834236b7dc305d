//! ledgerbook service binary.

#![forbid(unsafe_code)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

use std::sync::Arc;
use std::time::Duration;

use ledgerbook_ledger::{spawn_autosave, Ledger};
use ledgerbook_service::{create_router, AppState, Persistence, ServiceConfig};
use ledgerbook_store::{FileStore, MemoryStore, SnapshotStore};
use tracing::{error, info, warn};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,ledgerbook=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServiceConfig::from_env();

    let store: Arc<dyn SnapshotStore> = match config.persistence {
        Persistence::File => {
            info!(path = %config.data_file, "using file-backed snapshot store");
            Arc::new(FileStore::new(&config.data_file))
        }
        Persistence::Memory => {
            warn!("using in-memory snapshot store; data is lost on exit");
            Arc::new(MemoryStore::new())
        }
    };

    let ledger = Arc::new(Ledger::open(store).await?);

    if config.seed_sample_data && ledger.seed_sample_data().await? {
        info!("seeded sample data into empty ledger");
    }

    let autosave = spawn_autosave(
        Arc::clone(&ledger),
        Duration::from_secs(config.autosave_interval_seconds),
    );

    let state = AppState::new(Arc::clone(&ledger), config.clone());
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(&config.listen_addr).await?;
    info!(addr = %config.listen_addr, "ledgerbook service listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("shutting down; flushing ledger");
    autosave.abort();

    match tokio::time::timeout(Duration::from_secs(5), ledger.flush()).await {
        Ok(Ok(())) => info!("final snapshot saved"),
        Ok(Err(err)) => error!(error = %err, "final snapshot save failed"),
        Err(_) => error!("final snapshot save timed out"),
    }

    Ok(())
}

/// Wait for either SIGINT (ctrl-c) or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install ctrl-c handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("received ctrl-c"),
        () = terminate => info!("received SIGTERM"),
    }
}
