// src/launcher/mod.rs
mod spawn;

pub use spawn::{launch, run, SpawnError};
