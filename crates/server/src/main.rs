//! PeerConnect Server - HTTP REST API for profile matching
//!
//! Configuration comes from `server.*` files, `PEERCONNECT_SERVER__*`
//! environment variables and an optional `.env` file.

use server::ServerConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = ServerConfig::load()?;

    // Start server
    server::start_server(config).await?;

    Ok(())
}
