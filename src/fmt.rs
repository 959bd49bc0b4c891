//! Post-pass `terraform fmt` over the generated files.
//!
//! The generator makes no attempt at canonical HCL layout; terraform's own
//! formatter handles indentation and alignment afterwards.

use std::path::{Path, PathBuf};
use std::process::Command;

use log::{debug, info};
use thiserror::Error;
use which::which;

/// Runs `terraform fmt` in a directory.
pub struct FmtRunner {
    terraform_path: PathBuf,
}

impl FmtRunner {
    /// Creates a new runner, verifying terraform is installed.
    pub fn new() -> Result<Self, FmtError> {
        let terraform_path = which("terraform").map_err(|_| FmtError::NotFound)?;

        debug!("Found terraform at: {:?}", terraform_path);

        Ok(Self { terraform_path })
    }

    /// Runs `terraform fmt` in `dir` and waits for it to finish.
    pub fn fmt(&self, dir: &Path) -> Result<(), FmtError> {
        info!("Running terraform fmt in {:?}", dir);

        let output = Command::new(&self.terraform_path)
            .arg("fmt")
            .current_dir(dir)
            .output()
            .map_err(|e| {
                FmtError::CommandFailed(format!("Failed to execute terraform fmt: {}", e))
            })?;

        if output.status.success() {
            debug!("Terraform fmt successful");
            Ok(())
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let stdout = String::from_utf8_lossy(&output.stdout);
            let error_message = if !stderr.is_empty() { stderr } else { stdout };
            Err(FmtError::FmtFailed(error_message.to_string()))
        }
    }
}

#[derive(Debug, Error)]
pub enum FmtError {
    #[error(
        "Terraform is not installed or not found in PATH; skipping formatting of the generated files"
    )]
    NotFound,

    #[error("Terraform fmt failed:\n{0}")]
    FmtFailed(String),

    #[error("Failed to run terraform command: {0}")]
    CommandFailed(String),
}
