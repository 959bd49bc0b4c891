use std::path::Path;

use log::debug;
use thiserror::Error;

use super::json_types::StateFile;

/// Parses terraform state JSON into our internal model.
pub struct StateParser;

impl StateParser {
    /// Parses the contents of a `*.tfstate` document.
    pub fn parse(json: &str) -> Result<StateFile, StateError> {
        let state: StateFile =
            serde_json::from_str(json).map_err(|e| StateError::Json(e.to_string()))?;

        debug!("Parsed state document with {} resources", state.resources.len());

        Ok(state)
    }

    /// Reads and parses a state file from disk.
    ///
    /// Any deviation from the expected schema is fatal; a state file that
    /// does not match is unsupported input and the run aborts rather than
    /// producing partial output.
    pub fn parse_file(path: &Path) -> Result<StateFile, StateError> {
        let contents = std::fs::read_to_string(path)?;

        debug!("Read {} bytes from {}", contents.len(), path.display());

        Self::parse(&contents)
    }
}

#[derive(Debug, Error)]
pub enum StateError {
    #[error("Failed to parse state file: {0}")]
    Json(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
