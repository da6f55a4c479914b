// ────────────────────────────────
// src/server/listener.rs
// Low-level TCP bind.
// ────────────────────────────────
use std::net::SocketAddr;
use tokio::net::TcpListener;

/// The listening socket could not be acquired (port in use, permission denied).
#[derive(Debug, thiserror::Error)]
#[error("failed to bind {addr}: {source}")]
pub struct BindError {
    pub addr: SocketAddr,
    #[source]
    pub source: std::io::Error,
}

pub async fn bind_tcp(addr: SocketAddr) -> Result<TcpListener, BindError> {
    TcpListener::bind(addr)
        .await
        .map_err(|source| BindError { addr, source })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn second_bind_on_held_address_fails() {
        let first = bind_tcp("127.0.0.1:0".parse().unwrap()).await.unwrap();
        let held = first.local_addr().unwrap();

        let err = bind_tcp(held).await.unwrap_err();
        assert_eq!(err.addr, held);
        assert_eq!(err.source.kind(), std::io::ErrorKind::AddrInUse);
        assert!(err.to_string().contains(&held.to_string()));
    }
}
