// src/lib.rs
pub mod config;
pub mod launcher;
pub mod logging;
pub mod server;
