pub mod bootstrap;
pub mod builder;
pub mod handler;
pub mod listener;

pub use bootstrap::{BootstrapListener, ACK_BODY, BIND_ADDR, PORT};
pub use builder::{accept_backoff, BoundServer, ServerBuilder, ACCEPT_ERROR_BACKOFF};
pub use handler::AckHandler;
pub use listener::BindError;
