use std::fs::File;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use reqwest::Url;

use crate::config::default::DEFAULT_WORDLIST_FILE_NAME;

/// Where a wordlist comes from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WordlistSource {
    Local(PathBuf),
    Remote(String),
}

impl WordlistSource {
    /// `http://` and `https://` inputs are remote, anything else is a local path.
    pub fn parse(input: &str) -> Option<WordlistSource> {
        let input = input.trim();
        if input.is_empty() {
            return None;
        }
        if input.starts_with("http://") || input.starts_with("https://") {
            Some(WordlistSource::Remote(input.to_string()))
        } else {
            Some(WordlistSource::Local(PathBuf::from(input)))
        }
    }
}

/// Local file name for a downloaded wordlist: the last path segment of the URL.
pub fn file_name_from_url(url: &str) -> String {
    Url::parse(url)
        .ok()
        .and_then(|u| {
            u.path_segments()
                .and_then(|mut segments| segments.next_back().map(str::to_string))
        })
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| DEFAULT_WORDLIST_FILE_NAME.to_string())
}

/// Download `url` into `dest`, replacing any existing file.
pub fn fetch_to_file(url: &str, dest: &Path) -> Result<PathBuf> {
    let mut response = reqwest::blocking::get(url)
        .with_context(|| format!("request to {} failed", url))?
        .error_for_status()?;
    let mut file = File::create(dest).with_context(|| format!("failed to create {}", dest.display()))?;
    if let Err(e) = response.copy_to(&mut file) {
        drop(file);
        remove_partial(dest);
        return Err(e).with_context(|| format!("failed to download {}", url));
    }
    Ok(dest.to_path_buf())
}

/// Remove a partially written download.
fn remove_partial(dest: &Path) {
    if let Err(e) = std::fs::remove_file(dest) {
        tracing::debug!("failed to remove partial download {}: {}", dest.display(), e);
    }
}

/// Resolve user input to a local wordlist file. Remote wordlists are saved in
/// `download_dir`. Failures are logged and yield `None` so the run goes on without one.
pub fn resolve_wordlist(input: &str, download_dir: &Path) -> Option<PathBuf> {
    match WordlistSource::parse(input)? {
        WordlistSource::Local(path) => {
            if path.is_file() {
                Some(path)
            } else {
                tracing::warn!("The specified wordlist path does not exist: {}", path.display());
                None
            }
        }
        WordlistSource::Remote(url) => {
            let dest = download_dir.join(file_name_from_url(&url));
            tracing::info!("Downloading wordlist from {}...", url);
            match fetch_to_file(&url, &dest) {
                Ok(path) => {
                    tracing::info!("Wordlist downloaded and saved to {}", path.display());
                    Some(path)
                }
                Err(e) => {
                    tracing::warn!("Failed to download wordlist from URL: {:#}", e);
                    None
                }
            }
        }
    }
}
