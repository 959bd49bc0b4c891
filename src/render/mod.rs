//! HCL generation and output writing.
//!
//! The rendering engine (classification, exclusion, recursive property
//! descent, block assembly) lives here, together with the writer that puts
//! the generated `.tf` files on disk.

mod block;
mod classify;
mod exclude;
mod property;

pub use block::{OutputBundle, RenderError, ResourceBlockBuilder};
pub use classify::{Classification, classify};
pub use exclude::ExclusionFilter;
pub use property::PropertyRenderer;

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors that can occur while writing generated files.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid filename: {0}")]
    InvalidFilename(String),
}

/// Sanitizes an output base name to prevent path traversal.
///
/// Module names come out of state files, which may not be trustworthy.
/// Path separators are replaced, trailing dots stripped, and anything
/// still containing `..`, starting with a dot (a hidden file), or ending
/// up empty is rejected.
fn sanitize_basename(name: &str) -> Option<String> {
    let sanitized: String = name
        .chars()
        .map(|c| match c {
            '/' | '\\' | '\0' => '_',
            _ => c,
        })
        .collect();

    let trimmed = sanitized.trim().trim_end_matches('.');

    if trimmed.is_empty() || trimmed.contains("..") || trimmed.starts_with('.') {
        return None;
    }

    Some(trimmed.to_string())
}

/// Writes generated HCL files into the output directory.
pub struct OutputWriter {
    output_dir: PathBuf,
}

impl OutputWriter {
    pub fn new(output_dir: PathBuf) -> Self {
        Self { output_dir }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Removes stale `.tf` files left behind by a previous run.
    ///
    /// A re-run against a changed set of state files must not leave old
    /// generated files mixed in with the new ones.
    pub fn clear_stale(&self) -> Result<(), OutputError> {
        if !self.output_dir.exists() {
            return Ok(());
        }

        for entry in fs::read_dir(&self.output_dir)? {
            let path = entry?.path();

            if path.is_file() && path.extension().is_some_and(|ext| ext == "tf") {
                log::debug!("Removing stale file {}", path.display());
                fs::remove_file(&path)?;
            }
        }

        Ok(())
    }

    /// Writes every file of the bundle as `<basename>.tf`, creating the
    /// output directory if needed.
    pub fn write(&self, bundle: &OutputBundle) -> Result<(), OutputError> {
        fs::create_dir_all(&self.output_dir)?;

        for (basename, text) in bundle.iter() {
            let safe_name = sanitize_basename(basename).ok_or_else(|| {
                OutputError::InvalidFilename(format!(
                    "Module name '{}' contains invalid characters",
                    basename
                ))
            })?;

            let file_path = self.output_dir.join(format!("{}.tf", safe_name));
            fs::write(&file_path, text)?;

            log::info!("Written: {}", file_path.display());
        }

        Ok(())
    }
}
