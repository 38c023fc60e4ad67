use crate::error::AcquireError;
use std::net::{SocketAddr, SocketAddrV4};

/// Resolve the archive host to its first IPv4 address.
///
/// Download URLs point at the address rather than the host name.
pub async fn resolve_archive_host(host: &str, port: u16) -> Result<SocketAddrV4, AcquireError> {
    let addrs = tokio::net::lookup_host((host, port))
        .await
        .map_err(|e| AcquireError::Dns {
            host: host.to_string(),
            detail: e.to_string(),
        })?;

    let addr = addrs
        .filter_map(|addr| match addr {
            SocketAddr::V4(v4) => Some(v4),
            SocketAddr::V6(_) => None,
        })
        .next()
        .ok_or_else(|| AcquireError::Dns {
            host: host.to_string(),
            detail: "no IPv4 address".to_string(),
        })?;

    tracing::debug!(host = %host, addr = %addr, "Resolved archive host");
    Ok(addr)
}

/// URL authority for a resolved address: the bare IP on port 80, `ip:port` otherwise.
pub fn authority(addr: SocketAddrV4) -> String {
    if addr.port() == 80 {
        addr.ip().to_string()
    } else {
        addr.to_string()
    }
}
