//! Configuration for evalstore
//!
//! Centralized configuration with sensible defaults.

use std::path::{Path, PathBuf};

/// Name of the hidden directory a store lives in, relative to a working directory
pub const DEFAULT_ROOT_NAME: &str = ".evalstore";

/// Main configuration for an evalstore instance
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Storage Configuration
    // -------------------------------------------------------------------------
    /// Root directory owning every file of the store
    /// Internal structure:
    ///   {root_dir}/
    ///     ├── index.txt          (append-only key log)
    ///     └── {evalRunId}.json   (one record per run)
    pub root_dir: PathBuf,

    /// Sync policy: whether writes are fsynced before returning
    pub sync_policy: SyncPolicy,

    /// Write record files as indented JSON
    pub pretty_records: bool,
}

/// Sync policy for record writes, index appends and index rebuilds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncPolicy {
    /// Leave flushing to the OS
    Never,

    /// fsync after every write (safest, slowest)
    EveryWrite,
}

impl SyncPolicy {
    pub fn should_sync(self) -> bool {
        matches!(self, SyncPolicy::EveryWrite)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            root_dir: PathBuf::from(".").join(DEFAULT_ROOT_NAME),
            sync_policy: SyncPolicy::Never,
            pretty_records: false,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Config rooted at the hidden store directory under `base`
    pub fn in_dir(base: impl AsRef<Path>) -> Self {
        Self {
            root_dir: base.as_ref().join(DEFAULT_ROOT_NAME),
            ..Self::default()
        }
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the root directory (owner of all store files)
    pub fn root_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.root_dir = path.into();
        self
    }

    /// Set the sync policy
    pub fn sync_policy(mut self, policy: SyncPolicy) -> Self {
        self.config.sync_policy = policy;
        self
    }

    /// Pretty-print record files
    pub fn pretty_records(mut self, pretty: bool) -> Self {
        self.config.pretty_records = pretty;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
