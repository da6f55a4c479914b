// ────────────────────────────────
// src/server/builder.rs
// ────────────────────────────────
use crate::server::listener::{bind_tcp, BindError};
use hyper::{server::conn::Http, Body, Request, Response};
use std::net::SocketAddr;
use std::time::Duration;
use tokio::net::TcpListener;
use tower::Service;
use tracing::Instrument;
use uuid::Uuid;

/// Pause after an accept error that is not tied to a single connection
/// (EMFILE, ENFILE, ENOBUFS); accepting again at once would spin.
pub const ACCEPT_ERROR_BACKOFF: Duration = Duration::from_secs(1);

/// Builder so callers can inject any tower handler before binding.
pub struct ServerBuilder<H> {
    handler: H,
}

impl<H> ServerBuilder<H>
where
    H: Service<Request<Body>, Response = Response<Body>> + Send + Clone + 'static,
    H::Error: Into<Box<dyn std::error::Error + Send + Sync>>,
    H::Future: Send + 'static,
{
    pub fn new(handler: H) -> Self {
        Self { handler }
    }

    /// Acquire the socket. Nothing is served until [`BoundServer::serve`].
    pub async fn bind(self, addr: SocketAddr) -> Result<BoundServer<H>, BindError> {
        let listener = bind_tcp(addr).await?;
        Ok(BoundServer {
            listener,
            handler: self.handler,
        })
    }
}

/// A bound socket plus the handler that will answer on it.
pub struct BoundServer<H> {
    listener: TcpListener,
    handler: H,
}

impl<H> BoundServer<H>
where
    H: Service<Request<Body>, Response = Response<Body>> + Send + Clone + 'static,
    H::Error: Into<Box<dyn std::error::Error + Send + Sync>>,
    H::Future: Send + 'static,
{
    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.listener.local_addr()
    }

    /// Accept forever. Accept errors are logged and never end the loop; a
    /// broken connection is logged and dropped.
    pub async fn serve(self) {
        loop {
            let (stream, peer) = match self.listener.accept().await {
                Ok(conn) => conn,
                Err(err) => {
                    match accept_backoff(&err) {
                        Some(pause) => {
                            tracing::warn!(%err, ?pause, "accept error, backing off");
                            tokio::time::sleep(pause).await;
                        }
                        None => tracing::debug!(%err, "connection dropped before accept"),
                    }
                    continue;
                }
            };
            let svc = self.handler.clone();
            let span = tracing::debug_span!("conn", id = %Uuid::new_v4(), %peer);

            tokio::spawn(
                async move {
                    tracing::debug!("accepted");
                    if let Err(err) = Http::new().serve_connection(stream, svc).await {
                        tracing::warn!(%err, "connection error");
                    }
                }
                .instrument(span),
            );
        }
    }
}

/// `None` when the error belongs to one peer and the next accept can follow
/// immediately; otherwise how long to wait first.
pub fn accept_backoff(err: &std::io::Error) -> Option<Duration> {
    use std::io::ErrorKind::*;
    match err.kind() {
        ConnectionRefused | ConnectionAborted | ConnectionReset => None,
        _ => Some(ACCEPT_ERROR_BACKOFF),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::AckHandler;
    use std::io::{Error, ErrorKind};

    #[test]
    fn peer_errors_retry_immediately() {
        for kind in [
            ErrorKind::ConnectionAborted,
            ErrorKind::ConnectionReset,
            ErrorKind::ConnectionRefused,
        ] {
            assert_eq!(accept_backoff(&Error::from(kind)), None);
        }
    }

    #[cfg(unix)]
    #[test]
    fn descriptor_exhaustion_backs_off() {
        // EMFILE and ENFILE
        for code in [24, 23] {
            let err = Error::from_raw_os_error(code);
            assert_eq!(accept_backoff(&err), Some(ACCEPT_ERROR_BACKOFF));
        }
    }

    #[tokio::test(start_paused = true)]
    async fn serve_keeps_running_without_traffic() {
        let server = ServerBuilder::new(AckHandler::new("ok\n"))
            .bind("127.0.0.1:0".parse().unwrap())
            .await
            .unwrap();
        let handle = tokio::spawn(server.serve());

        tokio::time::sleep(Duration::from_secs(60)).await;
        assert!(!handle.is_finished());
        handle.abort();
    }
}
