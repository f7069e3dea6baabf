use anyhow::Context;
use tokio::net::{lookup_host, TcpListener, TcpSocket};
use tracing::{debug, error, info};

use crate::config::Config;
use crate::http::connection::Connection;
use crate::http::router::Router;

/// Pending connections the kernel may queue while one is being served.
pub const LISTEN_BACKLOG: u32 = 1;

pub async fn run(cfg: &Config) -> anyhow::Result<()> {
    let router = Router::from_config(cfg)?;
    let listener = bind(&cfg.listen_addr).await?;
    info!("Listening on {}", cfg.listen_addr);
    info!("Serving files from {}", router.root().display());

    serve(listener, &router).await
}

/// Binds a listener with address reuse and a backlog of one.
pub async fn bind(addr: &str) -> anyhow::Result<TcpListener> {
    let addr = lookup_host(addr)
        .await
        .with_context(|| format!("resolving {}", addr))?
        .next()
        .with_context(|| format!("no address for {}", addr))?;

    let socket = if addr.is_ipv4() {
        TcpSocket::new_v4()?
    } else {
        TcpSocket::new_v6()?
    };
    socket.set_reuseaddr(true)?;
    socket
        .bind(addr)
        .with_context(|| format!("binding {}", addr))?;
    Ok(socket.listen(LISTEN_BACKLOG)?)
}

/// Accepts connections one at a time.
///
/// Each connection is served to completion before the next accept, so a
/// client that never finishes its request holds up everyone behind it.
pub async fn serve(listener: TcpListener, router: &Router) -> anyhow::Result<()> {
    loop {
        let (socket, peer) = match listener.accept().await {
            Ok(accepted) => accepted,
            Err(e) => {
                error!("Failed to accept connection: {}", e);
                continue;
            }
        };
        debug!("Accepted connection from {}", peer);

        if let Err(e) = Connection::new(socket, peer, router).run().await {
            error!("Connection error from {}: {:#}", peer, e);
        }
    }
}
