//! Environment variable handling and .env file management

use crate::error::{AppError, Result};
use std::path::Path;

/// Default location of the optional environment file
pub const ENV_FILE: &str = ".env";

/// Environment variable configuration manager
pub struct EnvManager;

impl EnvManager {
    /// Load `.env` from the working directory if it exists
    ///
    /// Returns whether a file was loaded. Variables already set in the
    /// process environment take precedence over the file.
    pub fn load_env_file() -> Result<bool> {
        Self::load_env_file_from(Path::new(ENV_FILE))
    }

    /// Load a specific environment file if it exists
    pub fn load_env_file_from(path: &Path) -> Result<bool> {
        if !path.exists() {
            return Ok(false);
        }

        dotenv::from_path(path)
            .map_err(|e| AppError::config(format!("Failed to load {} file: {}", path.display(), e)))?;

        Ok(true)
    }
}
