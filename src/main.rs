use std::{net::SocketAddr, sync::Arc};
use ticket_desk::{
    notify::{NotificationSink, WebhookSink},
    router,
    seed::load_seed,
    AppState, Config,
};
use tracing::{info, warn};
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let config = Config::from_env()?;

    let seed = match &config.seed_path {
        Some(path) => load_seed(path).await?,
        None => Vec::new(),
    };

    let sink: Option<Arc<dyn NotificationSink>> = match config.webhook.clone() {
        Some(webhook) => {
            info!("forwarding new tickets to {}", webhook.url);
            Some(Arc::new(WebhookSink::new(webhook)?))
        }
        None => {
            warn!("TICKETS_WEBHOOK_URL not set, new tickets will not be forwarded");
            None
        }
    };

    let state = AppState::new(seed, sink)?;
    let app = router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!("listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!("failed to listen for ctrl-c: {err}");
        std::future::pending::<()>().await;
    }
    info!("shutting down, session discarded");
}
