//! Posts HTTP server binary.
//!
//! Entry point for the REST API server: initializes logging, seeds the
//! in-memory registry, sets up the router, and starts serving requests.
//!
//! # Environment Variables
//!
//! - `HOST`: server host (default: 0.0.0.0)
//! - `PORT`: server port (default: 5002)
//! - `RUST_LOG`: log level (default: info)

use std::env;
use std::net::SocketAddr;
use std::sync::Arc;

use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use posts_backend::db::{seed_posts, LocalRepository, PostRepository};
use posts_backend::http::{create_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .init();

    info!("Starting posts HTTP server");

    // Registry lives for the process lifetime only; restarts reset it to the
    // two seed posts.
    let repository: Arc<dyn PostRepository> = Arc::new(LocalRepository::with_posts(seed_posts()));
    let state = AppState::new(repository);
    let app = create_router(state);

    let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port: u16 = env::var("PORT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(5002);
    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;

    info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
