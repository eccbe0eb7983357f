//! Infrastructure implementations.
//!
//! Contains port trait implementations for external dependencies.

pub mod codex_file;
pub mod config;
pub mod ports;
pub mod random;

pub use codex_file::JsonFileCodex;
pub use config::EngineConfig;
pub use ports::{CodexSource, CodexSourceError, RandomPort};
pub use random::SystemRandom;
