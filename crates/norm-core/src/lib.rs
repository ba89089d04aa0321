//! # norm-core
//!
//! Core types, traits, and error definitions for the speakable text
//! normalization workspace.
//!
//! This crate provides the foundational abstractions shared by the other
//! crates in the workspace:
//!
//! - Locale and cleaner pipeline identifiers (`Locale`, `CleanerKind`)
//! - The `TextNormalizer` trait implemented by cleaner pipelines
//! - Unified error handling via `NormError`
//! - Configuration structures

pub mod config;
pub mod error;
pub mod traits;
pub mod types;

pub use config::{CleanerConfig, LoggingConfig};
pub use error::{NormError, NormResult};
pub use traits::TextNormalizer;
pub use types::{CleanerKind, Locale};
