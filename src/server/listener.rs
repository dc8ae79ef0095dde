use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::info;

use crate::config::Config;
use crate::handler::Engine;
use crate::server::connection::Connection;

pub async fn run(cfg: &Config) -> anyhow::Result<()> {
    let engine = Arc::new(Engine::new(cfg.engine.clone()));
    let max_request_bytes = cfg.engine.max_request_bytes;

    let listener = TcpListener::bind(&cfg.server.listen_addr).await?;
    info!("Listening on {}", cfg.server.listen_addr);

    loop {
        let (socket, peer) = listener.accept().await?;
        info!("Accepted connection from {}", peer);

        let engine = Arc::clone(&engine);
        tokio::spawn(async move {
            let mut conn = Connection::new(socket, engine, max_request_bytes);
            if let Err(e) = conn.run().await {
                tracing::error!("Connection error from {}: {}", peer, e);
            }
        });
    }
}
