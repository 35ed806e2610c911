//! Web server command.

use std::net::IpAddr;

use console::style;

use crate::config::{Settings, DEFAULT_PORT};

/// Start the web server.
pub async fn cmd_serve(settings: &Settings) -> anyhow::Result<()> {
    let (host, port) = parse_bind_address(&settings.bind)?;

    let anchors = settings.anchors()?;
    println!("{} Looking for assets under:", style("→").cyan());
    println!("  app dir:      {}", anchors.app_dir.display());
    println!("  project root: {}", anchors.project_root.display());
    println!("  working dir:  {}", anchors.working_dir.display());

    println!(
        "{} Starting Quantheo viewer at http://{}:{}",
        style("→").cyan(),
        host,
        port
    );
    println!("  Press Ctrl+C to stop");

    crate::server::serve(settings, &host, port).await
}

/// Parse a bind address that can be:
/// - Just a port: "8501" -> 127.0.0.1:8501
/// - Just a host: "0.0.0.0" -> 0.0.0.0:8501
/// - Host and port: "0.0.0.0:8501" -> 0.0.0.0:8501
/// - Bracketed IPv6 with port: "[::1]:8501" -> ::1:8501
fn parse_bind_address(bind: &str) -> anyhow::Result<(String, u16)> {
    let bind = bind.trim();
    if bind.is_empty() {
        anyhow::bail!("Bind address is empty");
    }

    // Try parsing as just a port number
    if let Ok(port) = bind.parse::<u16>() {
        return Ok(("127.0.0.1".to_string(), port));
    }

    // A bare IP address, including IPv6 with its colons
    if let Ok(ip) = bind.trim_start_matches('[').trim_end_matches(']').parse::<IpAddr>() {
        return Ok((ip.to_string(), DEFAULT_PORT));
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
