// ────────────────────────────────
// src/server/bootstrap.rs
// The fixed-port liveness listener.
// ────────────────────────────────
use crate::server::{AckHandler, BindError, BoundServer, ServerBuilder};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

pub const BIND_ADDR: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
pub const PORT: u16 = 5000;
pub const ACK_BODY: &str = "Port 5000 is open\n";

/// A bound bootstrap listener. There is no way back to unbound.
pub type Listening = BoundServer<AckHandler>;

/// Unbound state of the bootstrap listener.
///
/// Address and port are constants; nothing about the bind is configurable.
/// [`start`](Self::start) consumes the value so a given listener transitions
/// `Unbound -> Listening` at most once.
#[derive(Debug, Default)]
pub struct BootstrapListener;

impl BootstrapListener {
    pub fn new() -> Self {
        Self
    }

    pub fn addr() -> SocketAddr {
        SocketAddr::new(BIND_ADDR, PORT)
    }

    /// Bind `0.0.0.0:5000` and announce it on stdout. No pre-check, no retry.
    pub async fn start(self) -> Result<Listening, BindError> {
        let addr = Self::addr();
        let server = ServerBuilder::new(AckHandler::new(ACK_BODY))
            .bind(addr)
            .await?;

        tracing::info!(%addr, "bootstrap listener bound");
        println!("Server running on port {PORT}");
        Ok(server)
    }
}
