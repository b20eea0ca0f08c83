use crate::constants::{DEFAULT_LEAVES_PER_SIGNATURE, MIN_LEAVES_PER_SIGNATURE};
use crate::layout::signature_size;
use crate::types::*;
use std::path::PathBuf;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Signitize configuration
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SignitizeOptions {
    // Input
    pub input_file: PathBuf,

    // Folding
    pub leaves_per_signature: usize,

    // Volumes: last page (1-based) of every volume except the final one
    pub split_pages: Vec<usize>,

    // Output configuration
    pub output_mode: OutputMode,
    pub output_dir: PathBuf,
}

impl Default for SignitizeOptions {
    fn default() -> Self {
        Self {
            input_file: PathBuf::new(),
            leaves_per_signature: DEFAULT_LEAVES_PER_SIGNATURE,
            split_pages: Vec::new(),
            output_mode: OutputMode::PerVolume,
            output_dir: PathBuf::from("."),
        }
    }
}

impl SignitizeOptions {
    /// Load options from JSON file
    #[cfg(feature = "serde")]
    pub async fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|e| SignitizeError::Config(format!("Failed to read config: {}", e)))?;
        let options = serde_json::from_slice(&bytes)
            .map_err(|e| SignitizeError::Config(format!("Failed to parse config: {}", e)))?;
        Ok(options)
    }

    /// Save options to JSON file
    #[cfg(feature = "serde")]
    pub async fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| SignitizeError::Config(format!("Failed to serialize config: {}", e)))?;
        tokio::fs::write(path, json)
            .await
            .map_err(|e| SignitizeError::Config(format!("Failed to write config: {}", e)))?;
        Ok(())
    }

    /// Validate the options
    pub fn validate(&self) -> Result<()> {
        if self.input_file.as_os_str().is_empty() {
            return Err(SignitizeError::Usage("must provide filename".to_string()));
        }

        if self.leaves_per_signature < MIN_LEAVES_PER_SIGNATURE {
            return Err(SignitizeError::Usage(format!(
                "invalid value {} for leaves. Must be >= {}",
                self.leaves_per_signature, MIN_LEAVES_PER_SIGNATURE
            )));
        }

        Ok(())
    }

    /// Pages per signature
    pub fn signature_size(&self) -> usize {
        signature_size(self.leaves_per_signature)
    }

    /// Input file name without directory or extension
    pub fn basename(&self) -> String {
        self.input_file
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "document".to_string())
    }
}
