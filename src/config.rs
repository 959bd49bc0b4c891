use std::path::{Path, PathBuf};

use crate::cli::{Cli, LabelStyle};
use crate::error::StateToHclError;

#[derive(Debug)]
pub struct Config {
    pub no_color: bool,
    pub verbose: bool,
    pub working_dir: PathBuf,
    pub output_dir: PathBuf,
    pub label_style: LabelStyle,
    pub skip_fmt: bool,
}

impl Config {
    pub fn from_cli(cli: Cli) -> Result<Self, StateToHclError> {
        let working_dir = match cli.working_dir {
            Some(path) => Self::resolve_path(&path)?,
            None => std::env::current_dir().map_err(|e| {
                StateToHclError::Config(format!("Cannot determine current directory: {}", e))
            })?,
        };

        if !working_dir.exists() {
            return Err(StateToHclError::Config(format!(
                "Working directory does not exist: {}",
                working_dir.display()
            )));
        }

        if !working_dir.is_dir() {
            return Err(StateToHclError::Config(format!(
                "Working directory is not a directory: {}",
                working_dir.display()
            )));
        }

        // Canonicalize to resolve symlinks and normalize path components
        let working_dir = working_dir.canonicalize().map_err(|e| {
            StateToHclError::Config(format!(
                "Cannot canonicalize working directory {}: {}",
                working_dir.display(),
                e
            ))
        })?;

        // The output directory need not exist yet; it is created on write.
        let output_dir = match cli.output_dir {
            Some(path) => Self::resolve_path(&path)?,
            None => working_dir.join("output"),
        };

        Ok(Self {
            no_color: cli.no_color,
            verbose: cli.verbose,
            working_dir,
            output_dir,
            label_style: cli.label_style,
            skip_fmt: cli.skip_fmt,
        })
    }

    /// Resolves a path to an absolute path.
    /// - Absolute paths are returned as-is
    /// - Relative paths are resolved relative to current directory
    pub fn resolve_path(path: &Path) -> Result<PathBuf, StateToHclError> {
        if path.is_absolute() {
            Ok(path.to_path_buf())
        } else {
            let current_dir = std::env::current_dir().map_err(|e| {
                StateToHclError::Config(format!("Cannot determine current directory: {}", e))
            })?;
            Ok(current_dir.join(path))
        }
    }
}
