use std::net::SocketAddr;
use std::sync::Arc;

use futures_util::{SinkExt, StreamExt};
use thiserror::Error;
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::RwLock;
use tokio_tungstenite::accept_async;
use tokio_tungstenite::tungstenite::{self, Message};
use tracing::{info, warn};

use crate::{Command, ConfigError, HuntSession, Reply};

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("WebSocket error: {0}")]
    WebSocket(#[from] tungstenite::Error),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

pub async fn serve(
    listener: TcpListener,
    session: Arc<RwLock<HuntSession>>,
) -> Result<(), ServerError> {
    loop {
        let (stream, addr) = listener.accept().await?;
        let session = session.clone();
        tokio::spawn(async move {
            if let Err(err) = handle_connection(stream, addr, session).await {
                warn!(%addr, %err, "connection closed with error");
            }
        });
    }
}

async fn handle_connection(
    stream: TcpStream,
    addr: SocketAddr,
    session: Arc<RwLock<HuntSession>>,
) -> Result<(), ServerError> {
    let ws_stream = accept_async(stream).await?;
    info!(%addr, "new WebSocket connection");

    let (mut write, mut read) = ws_stream.split();

    while let Some(message) = read.next().await {
        let text = match message? {
            Message::Text(text) => text,
            Message::Close(_) => break,
            _ => continue,
        };

        let reply = match serde_json::from_str::<Command>(text.as_str()) {
            Ok(Command::Hunt) => session.read().await.hunt(),
            Ok(command) => session.write().await.apply(command),
            Err(err) => {
                warn!(%addr, %err, "invalid command");
                Reply::invalid_command()
            }
        };

        let reply_json = serde_json::to_string(&reply)?;
        write.send(Message::Text(reply_json.into())).await?;
    }

    info!(%addr, "WebSocket connection closed");
    Ok(())
}
