use std::sync::Arc;

use flora::{router, Config, Error, Result, Storage};

use log::{error, info};
use tokio::net::TcpListener;
use tokio::signal::unix::{signal, SignalKind};

const VERSION: &str = env!("CARGO_PKG_VERSION");

#[tokio::main]
async fn main() -> Result<()> {
    pretty_env_logger::init_timed();

    info!("flora version {VERSION}");

    let config = Config::from_env().map_err(Error::from)?;
    let storage = Arc::new(Storage::with_history_capacity(config.history_capacity));

    let listener = TcpListener::bind(config.address)
        .await
        .map_err(Error::from)?;
    info!("Listening http://{}", config.address);

    axum::serve(listener, router(storage))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(Error::from)?;

    Ok(())
}

async fn shutdown_signal() {
    let mut terminate = match signal(SignalKind::terminate()) {
        Ok(terminate) => terminate,
        Err(err) => {
            error!("unable to listen for SIGTERM: {err}");
            let _ = tokio::signal::ctrl_c().await;
            info!("got SIGINT, exiting...");
            return;
        }
    };

    tokio::select! {
        _ = terminate.recv() => info!("got SIGTERM, exiting..."),
        _ = tokio::signal::ctrl_c() => info!("got SIGINT, exiting..."),
    }
}
