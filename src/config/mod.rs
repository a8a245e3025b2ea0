//! Configuration module for a migration run
//!
//! This module provides the `MigrationConfig` struct, its JSON loader and its
//! type-safe builder.

// Sub-modules
pub mod builder;
pub mod getters;
pub mod methods;
pub mod types;

// Re-exports for public API
pub use builder::{MigrationConfigBuilder, WithOutputDir};
pub use types::MigrationConfig;
