pub mod handlers;
pub mod routes;
pub mod shared;

use std::path::PathBuf;

/// Shared handler state.
#[derive(Clone, Debug)]
pub struct AppState {
    pub content_dir: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use axum::middleware;
    use tokio::net::TcpListener;
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    // Создаем директорию для логов
    let log_dir = std::path::Path::new("target").join("logs");
    std::fs::create_dir_all(&log_dir)?;

    let log_file_path = log_dir.join("server.log");
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file_path)?;

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,tower_http=warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::sync::Arc::new(log_file))
                .with_ansi(false),
        )
        .init();

    let loaded = shared::config::load_config()?;
    let static_dir = loaded.static_dir();
    let content_dir = loaded.content_dir();
    tracing::info!("Static files: {}", static_dir.display());
    tracing::info!("Content fragments: {}", content_dir.display());
    if !content_dir.is_dir() {
        tracing::warn!(
            "Content directory {} does not exist; fragment requests will return 404",
            content_dir.display()
        );
    }

    let app = routes::configure_routes(AppState { content_dir }, &static_dir)
        .layer(middleware::from_fn(shared::request_logger::request_logger));

    let addr = loaded.bind_addr();
    tracing::info!("Attempting to bind server to http://{}", addr);
    let listener = match TcpListener::bind(&addr).await {
        Ok(listener) => {
            tracing::info!("Server successfully bound to {}", addr);
            listener
        }
        Err(e) => {
            if e.kind() == std::io::ErrorKind::AddrInUse {
                tracing::error!(
                    "Error: {} is already in use. Please ensure no other process is using this port.",
                    addr
                );
            } else {
                tracing::error!("Failed to bind to {}. Error: {}", addr, e);
            }
            return Err(e.into());
        }
    };

    axum::serve(listener, app).await?;

    Ok(())
}
