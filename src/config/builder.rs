//! Type-safe builder for `MigrationConfig` using the typestate pattern
//!
//! The output directory has no sensible library default, so `build()` only
//! exists once it has been set.

use anyhow::Result;
use std::marker::PhantomData;
use std::path::PathBuf;

use super::types::MigrationConfig;
use crate::content_saver::markdown_converter::ConversionOptions;

// Type states for the builder
pub struct WithOutputDir;

pub struct MigrationConfigBuilder<State = ()> {
    pub(crate) config: MigrationConfig,
    pub(crate) _phantom: PhantomData<State>,
}

impl Default for MigrationConfigBuilder<()> {
    fn default() -> Self {
        Self {
            config: MigrationConfig::default(),
            _phantom: PhantomData,
        }
    }
}

impl MigrationConfig {
    #[must_use]
    pub fn builder() -> MigrationConfigBuilder<()> {
        MigrationConfigBuilder::default()
    }
}

impl MigrationConfigBuilder<()> {
    pub fn output_dir(self, dir: impl Into<PathBuf>) -> MigrationConfigBuilder<WithOutputDir> {
        let mut config = self.config;
        config.output_dir = dir.into();
        MigrationConfigBuilder {
            config,
            _phantom: PhantomData,
        }
    }
}

impl MigrationConfigBuilder<WithOutputDir> {
    pub fn build(self) -> Result<MigrationConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}

impl<State> MigrationConfigBuilder<State> {
    #[must_use]
    pub fn conversion(mut self, options: ConversionOptions) -> Self {
        self.config.conversion = options;
        self
    }
}
