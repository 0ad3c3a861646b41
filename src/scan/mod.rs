pub mod amass;
pub mod dep;

use std::path::PathBuf;

use serde::Serialize;

use crate::domain::Domain;

pub use amass::AmassScanner;

/// One external scan for one domain.
#[derive(Clone, Debug)]
pub struct ScanJob {
    pub domain: Domain,
    /// Output prefix; the scanner appends its own extensions
    pub output_prefix: PathBuf,
    pub wordlist: Option<PathBuf>,
    pub timeout_minutes: u64,
}

/// Outcome of a scan. Failures carry the scanner diagnostics or the launch error.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ScanResult {
    pub success: bool,
    pub message: String,
}

impl ScanResult {
    pub fn success() -> Self {
        ScanResult { success: true, message: String::new() }
    }

    pub fn failure<S: Into<String>>(message: S) -> Self {
        ScanResult { success: false, message: message.into() }
    }
}

/// Runs one scan job to completion. Implementations must not panic or abort on
/// scanner failure; failures are reported through `ScanResult`.
pub trait Scanner {
    fn scan(&self, job: &ScanJob) -> ScanResult;
}
