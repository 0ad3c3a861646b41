use std::env;
use std::fmt;
use std::error::Error;
use std::path::{Path, PathBuf};

/// Missing external dependency
#[derive(Debug)]
pub struct DependencyError {
    pub dependency: String,
    pub message: String,
}

impl DependencyError {
    pub fn new(dependency: &str, message: &str) -> Self {
        Self {
            dependency: String::from(dependency),
            message: String::from(message),
        }
    }
}

impl fmt::Display for DependencyError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}: {}", self.dependency, self.message)
    }
}

impl Error for DependencyError {}

/// Resolve a binary name on `PATH`. Names containing a path separator are checked as-is.
pub fn find_binary(bin: &str) -> Option<PathBuf> {
    let candidate = Path::new(bin);
    if candidate.components().count() > 1 {
        return candidate.is_file().then(|| candidate.to_path_buf());
    }
    let paths = env::var_os("PATH")?;
    env::split_paths(&paths).find_map(|dir| {
        let full = dir.join(bin);
        if full.is_file() {
            return Some(full);
        }
        #[cfg(target_os = "windows")]
        {
            let exe = dir.join(format!("{}.exe", bin));
            if exe.is_file() {
                return Some(exe);
            }
        }
        None
    })
}

/// Check that the scanner binary can be resolved.
pub fn check_scanner(bin: &str) -> Result<PathBuf, DependencyError> {
    find_binary(bin).ok_or_else(|| {
        DependencyError::new(bin, "not found on PATH. Scans for every domain will fail until it is installed.")
    })
}
