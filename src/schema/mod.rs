//! Schema module - configuration types for evolution runs.

mod config;

pub use config::*;
