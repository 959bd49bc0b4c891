use std::path::{Path, PathBuf};

use log::debug;

use super::parser::StateError;

/// Lists the `*.tfstate` files directly inside `dir`.
///
/// Only the top level is scanned; nested directories (like a previous run's
/// `output` directory) are never picked up. Results are sorted so repeated
/// runs process files in a stable order.
pub fn find_state_files(dir: &Path) -> Result<Vec<PathBuf>, StateError> {
    let mut files = Vec::new();

    for entry in std::fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();

        if path.is_file() && path.extension().is_some_and(|ext| ext == "tfstate") {
            files.push(path);
        }
    }

    files.sort();

    debug!("Found {} state files in {}", files.len(), dir.display());

    Ok(files)
}
