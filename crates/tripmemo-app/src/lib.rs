//! Application layer for tripmemo
//!
//! Wires configuration, repositories and domain services together into
//! the use cases the CLI drives.

pub mod config;
pub mod constants;
pub mod export;
pub mod repository;
pub mod service;

pub use config::Config;
