//! Shared types, error model, and configuration for FilterForge.
//!
//! This crate is the foundation depended on by all other FilterForge crates.
//! It provides:
//! - [`FilterForgeError`] — the unified error type
//! - Domain types ([`RuneDesign`], [`FilterBlock`], [`ConfigRequest`])
//! - Configuration ([`AppConfig`], [`SourcesConfig`], config loading)

pub mod config;
pub mod error;
pub mod types;

// Re-export public API at crate root for ergonomic imports.
pub use config::{
    AppConfig, FetchConfig, SourcesConfig, config_dir, config_file_path, init_config,
    load_config, load_config_from,
};
pub use error::{FilterForgeError, Result};
pub use types::{ConfigRequest, FilterBlock, RuneDesign};
