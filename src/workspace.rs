use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;

use crate::domain::Domain;

/// Results directory shared by every domain of a run.
#[derive(Clone, Debug)]
pub struct Workspace {
    pub path: PathBuf,
    /// Whether this run created the directory
    pub created: bool,
}

/// The three sibling artifacts of a domain.
/// The scanner writes `text` and `structured`. `tabular` is reserved and never read.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ArtifactPaths {
    pub prefix: PathBuf,
    pub text: PathBuf,
    pub structured: PathBuf,
    pub tabular: PathBuf,
}

/// Create the results directory if absent. Relative paths are resolved against the
/// current directory. Calling it again on an existing directory is a no-op.
pub fn ensure_workspace(dir: &Path) -> Result<Workspace> {
    let path = if dir.is_absolute() {
        dir.to_path_buf()
    } else {
        std::env::current_dir()
            .context("failed to get current directory")?
            .join(dir)
    };
    let created = !path.is_dir();
    if created {
        fs::create_dir_all(&path)
            .with_context(|| format!("failed to create results directory {}", path.display()))?;
        tracing::debug!("created results directory {}", path.display());
    }
    Ok(Workspace { path, created })
}

/// Derive the artifact paths of a domain. No I/O.
pub fn artifact_paths(domain: &Domain, workspace: &Workspace) -> ArtifactPaths {
    let prefix = workspace.path.join(domain.file_stem());
    ArtifactPaths {
        text: prefix.with_extension("txt"),
        structured: prefix.with_extension("json"),
        tabular: prefix.with_extension("csv"),
        prefix,
    }
}

/// Separator block written between scan epochs of the same text report.
pub fn separator_block(timestamp: &str) -> String {
    format!("\n\n----- Scan on {} -----\n\n", timestamp)
}

/// Append a timestamped separator to `text_path` if it already exists, so that the
/// output of the next scan is distinguishable from earlier ones.
/// Returns whether a separator was written. Existing content is never touched.
pub fn append_separator_if_exists(text_path: &Path) -> Result<bool> {
    if !text_path.is_file() {
        return Ok(false);
    }
    let mut file = OpenOptions::new()
        .append(true)
        .open(text_path)
        .with_context(|| format!("failed to open {}", text_path.display()))?;
    file.write_all(separator_block(&crate::time::get_sysdate()).as_bytes())?;
    file.flush()?;
    Ok(true)
}
