use super::{ApplicationState, ApplicationStateToClose};
use std::sync::Arc;

pub async fn close(state: ApplicationState, state_to_close: ApplicationStateToClose) {
    drop(state);

    tracing::info!("closing notifications aggregator");
    match Arc::try_unwrap(state_to_close.aggregator) {
        Ok(aggregator) => aggregator.close().await,
        Err(_) => tracing::error!("cannot close notifications aggregator"),
    }

    tracing::info!("closing realtime channel");
    match Arc::try_unwrap(state_to_close.realtime_service) {
        Ok(realtime_service) => realtime_service.close().await,
        Err(_) => tracing::error!("cannot close realtime service"),
    }
}

pub async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
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
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("starting shutdown");
}
