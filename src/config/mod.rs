pub mod default;

use anyhow::Result;
use std::fs;
use std::path::PathBuf;

/// Per-user directory name (under the home directory)
pub const USER_DIR_NAME: &str = ".amabridge";

/// Get the per-user directory, creating it if needed.
pub fn get_user_dir_path() -> Result<PathBuf> {
    let home = home::home_dir().ok_or_else(|| anyhow::anyhow!("failed to get home directory"))?;
    let path = home.join(USER_DIR_NAME);
    if !path.exists() {
        fs::create_dir_all(&path)?;
    }
    Ok(path)
}

/// Get the path of a file in the per-user directory.
pub fn get_user_file_path(file_name: &str) -> Result<PathBuf> {
    Ok(get_user_dir_path()?.join(file_name))
}
