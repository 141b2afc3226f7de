use anyhow::Context;
use tokio::net::TcpListener;
use tracing::info;

use crate::config::{Config, StaticFilesConfig};
use crate::http::connection::Connection;

pub async fn run(cfg: &Config) -> anyhow::Result<()> {
    let addr = cfg.server.listen_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    info!("Listening on {}", addr);

    serve(listener, cfg).await
}

/// Accept loop over an already-bound listener. Each connection gets its own
/// task and its own pipeline; no state is shared between them, and no
/// single connection's failure stops the loop.
pub async fn serve(listener: TcpListener, cfg: &Config) -> anyhow::Result<()> {
    // Pin the root down once; resolution inside connections is lexical
    let root = tokio::fs::canonicalize(&cfg.static_files.root)
        .await
        .with_context(|| {
            format!(
                "server root {} does not exist",
                cfg.static_files.root.display()
            )
        })?;
    info!(root = %root.display(), "Serving static files");

    let files = StaticFilesConfig {
        root,
        index_file: cfg.static_files.index_file.clone(),
    };
    let chunk_size = cfg.server.read_chunk_size;

    loop {
        let (socket, peer) = listener.accept().await?;
        info!("Accepted connection from {}", peer);

        let files = files.clone();
        tokio::spawn(async move {
            let conn = Connection::new(socket, files, chunk_size);
            if let Err(e) = conn.run().await {
                tracing::error!("Connection error from {}: {}", peer, e);
            }
        });
    }
}
