use crate::error::Result;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Writes result envelopes as 2-space-indented JSON under one output directory.
pub struct ResultWriter {
    output_dir: PathBuf,
}

impl ResultWriter {
    pub fn new(output_dir: impl AsRef<Path>) -> Self {
        Self {
            output_dir: output_dir.as_ref().to_path_buf(),
        }
    }

    /// Serializes the envelope and fully overwrites `filename` in the output
    /// directory, creating the directory first if needed.
    pub fn write(&self, filename: &str, envelope: &impl Serialize) -> Result<PathBuf> {
        fs::create_dir_all(&self.output_dir)?;

        let filepath = self.output_dir.join(filename);
        let json_content = serde_json::to_string_pretty(envelope)?;
        fs::write(&filepath, json_content)?;

        debug!("Wrote {}", filepath.display());
        Ok(filepath)
    }
}
