use crate::error::Error;
use crate::result::Result;
use std::path::{Path, PathBuf};

/// Resolve the project directory from `--path` or the current directory
pub fn find_project_dir(path: Option<&Path>) -> Result<PathBuf> {
    let base_path = match path {
        Some(path) => path.to_path_buf(),
        None => std::env::current_dir()?,
    };

    if !base_path.is_dir() {
        return Err(Error::custom(format!(
            "Project directory not found: {}",
            base_path.display()
        )));
    }

    Ok(base_path)
}
