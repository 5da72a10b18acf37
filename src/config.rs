//! Configuration for ingestion runs.
//!
//! Provides the tunable knobs of the pipeline. Defaults reproduce the fixed
//! production policy; tests tighten the threshold to exercise hard rejection
//! without building 200-line fixtures.

use crate::constants::{DEFAULT_ERROR_THRESHOLD, SUPPORTED_EXTENSION};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Run-level configuration shared by the engines and the loader
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngestionConfig {
    /// Error count beyond which a run hard-rejects mid-file
    pub error_threshold: usize,

    /// The single accepted upload extension (without the dot)
    pub supported_extension: String,
}

impl Default for IngestionConfig {
    fn default() -> Self {
        Self {
            error_threshold: DEFAULT_ERROR_THRESHOLD,
            supported_extension: SUPPORTED_EXTENSION.to_string(),
        }
    }
}

impl IngestionConfig {
    /// Validate configuration values for consistency
    pub fn validate(&self) -> Result<()> {
        if self.error_threshold == 0 {
            return Err(Error::configuration(
                "Error threshold must be greater than 0".to_string(),
            ));
        }

        if self.supported_extension.is_empty() || self.supported_extension.contains('.') {
            return Err(Error::configuration(format!(
                "Invalid supported extension: '{}'",
                self.supported_extension
            )));
        }

        Ok(())
    }
}
