//! Web server command.

use std::net::SocketAddr;

use anyhow::Context;

use crate::cli::icons::{dim_arrow, info, success, warn};
use crate::config::Config;

/// Port used when the bind address names only a host.
const DEFAULT_PORT: u16 = 8000;

/// Start the web server.
pub async fn cmd_serve(config: &Config, bind: &str) -> anyhow::Result<()> {
    let (host, port) = parse_bind_address(bind)?;
    let addr: SocketAddr = tokio::net::lookup_host((host.as_str(), port))
        .await
        .with_context(|| format!("Failed to resolve bind address {}", bind))?
        .next()
        .with_context(|| format!("No address found for {}", bind))?;

    if let Some(path) = &config.source_path {
        println!("{} Config: {}", dim_arrow(), path.display());
    }
    if config.inference.has_api_key() {
        println!("  {} Inference credential configured", success());
    } else {
        println!(
            "  {} No inference credential; responses will use fallback text",
            warn()
        );
    }

    println!("{} Starting LegalMind server at http://{}", info(), addr);
    println!("  Press Ctrl+C to stop");

    crate::server::serve(config, addr).await
}

/// Parse a bind address that can be:
/// - Just a port: "8000" -> 127.0.0.1:8000
/// - Just a host: "0.0.0.0" -> 0.0.0.0:8000
/// - Host and port: "0.0.0.0:8000" -> 0.0.0.0:8000
fn parse_bind_address(bind: &str) -> anyhow::Result<(String, u16)> {
    let bind = bind.trim();
    if bind.is_empty() {
        anyhow::bail!("Bind address is empty");
    }

    // Try parsing as just a port number
    if let Ok(port) = bind.parse::<u16>() {
        return Ok(("127.0.0.1".to_string(), port));
    }

    // Try parsing as host:port
    if let Some((host, port_str)) = bind.rsplit_once(':') {
        if let Ok(port) = port_str.parse::<u16>() {
            let host = host.trim_start_matches('[').trim_end_matches(']');
            return Ok((host.to_string(), port));
        }
    }

    // Must be just a host, use default port
    Ok((bind.to_string(), DEFAULT_PORT))
}
