// SPDX-License-Identifier: Apache-2.0 OR MIT
//! Startup configuration for the logging facility.
//!
//! JSON5 configuration format supporting comments and trailing commas.
//! Applied through `init_with_config` before any logging happens.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of commands the queue buffers before producers block
pub const COMMAND_QUEUE_CAPACITY: usize = 1024;

/// Startup configuration (JSON5 file format)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// Command queue capacity. Producers block once this many commands are
    /// buffered and the dispatch worker has not caught up.
    #[serde(default = "default_queue_capacity")]
    pub queue_capacity: usize,

    /// Whether trace-level output starts enabled. Off by default; trace
    /// should typically stay off in production systems.
    #[serde(default)]
    pub trace_enabled: bool,
}

fn default_queue_capacity() -> usize {
    COMMAND_QUEUE_CAPACITY
}

impl Default for Config {
    fn default() -> Self {
        Self {
            queue_capacity: COMMAND_QUEUE_CAPACITY,
            trace_enabled: false,
        }
    }
}

impl Config {
    /// Load configuration from a JSON5 file
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::IoError(path.to_path_buf(), e.to_string()))?;
        Self::parse(&content)
    }

    /// Parse configuration from a JSON5 string
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        json5::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.queue_capacity == 0 {
            return Err(ConfigError::InvalidQueueCapacity(self.queue_capacity));
        }
        Ok(())
    }
}

/// Errors from configuration loading and validation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("failed to read config file '{}': {1}", .0.display())]
    IoError(std::path::PathBuf, String),

    #[error("failed to parse config: {0}")]
    ParseError(String),

    #[error("queue capacity must be at least 1, got {0}")]
    InvalidQueueCapacity(usize),
}
