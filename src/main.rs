use std::sync::Arc;

use shark_hunt::{Config, HuntSession, ServerError, serve};
use tokio::net::TcpListener;
use tokio::sync::RwLock;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("shark_hunt=info")),
        )
        .init();

    let config = Config::from_env()?;
    let mut rng = rand::rng();
    let session = HuntSession::from_config(&config, &mut rng)?;
    tracing::info!(shark = ?session.shark(), tuna = ?session.tuna(), "session ready");

    let listener = TcpListener::bind(&config.server.address).await?;
    tracing::info!(address = %config.server.address, "server is up");

    serve(listener, Arc::new(RwLock::new(session))).await
}
