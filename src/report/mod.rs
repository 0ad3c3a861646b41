pub mod edge;
pub mod structured;

use std::error::Error;
use std::fmt;
use std::io;
use std::path::PathBuf;

use serde::Serialize;

use crate::domain::Domain;
use crate::scan::ScanResult;

pub use edge::parse_edge_report;
pub use structured::parse_structured_report;

/// Display string used when a record has no addresses.
pub const NO_IPS_FOUND: &str = "No IPs found";

/// A subdomain with the addresses the scanner resolved for it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SubdomainRecord {
    pub name: String,
    pub addresses: Vec<String>,
}

impl SubdomainRecord {
    /// Addresses joined with `", "`, or `No IPs found`.
    pub fn display_addresses(&self) -> String {
        if self.addresses.is_empty() {
            NO_IPS_FOUND.to_string()
        } else {
            self.addresses.join(", ")
        }
    }
}

/// Non-fatal report conditions. Each report of a domain fails independently.
#[derive(Debug)]
pub enum ReportError {
    NotFound(PathBuf),
    Read(PathBuf, io::Error),
    Malformed(PathBuf, serde_json::Error),
}

impl fmt::Display for ReportError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ReportError::NotFound(path) => write!(f, "file not found: {}", path.display()),
            ReportError::Read(path, e) => write!(f, "failed to read {}: {}", path.display(), e),
            ReportError::Malformed(path, e) => write!(f, "error decoding {}: {}", path.display(), e),
        }
    }
}

impl Error for ReportError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ReportError::NotFound(_) => None,
            ReportError::Read(_, e) => Some(e),
            ReportError::Malformed(_, e) => Some(e),
        }
    }
}

fn read_report(path: &std::path::Path) -> Result<String, ReportError> {
    match std::fs::read_to_string(path) {
        Ok(content) => Ok(content),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Err(ReportError::NotFound(path.to_path_buf())),
        Err(e) => Err(ReportError::Read(path.to_path_buf(), e)),
    }
}

/// Summary of one domain, as exported to JSON.
#[derive(Clone, Debug, Serialize)]
pub struct DomainReport {
    pub domain: Domain,
    pub scan: ScanResult,
    /// Sorted, unique subdomain names from the text report
    pub subdomains: Vec<String>,
    /// Records from the structured report, in document order
    pub records: Vec<SubdomainRecord>,
    /// Report conditions met while parsing
    pub notes: Vec<String>,
}

impl DomainReport {
    pub fn new(domain: Domain, scan: ScanResult) -> Self {
        DomainReport {
            domain,
            scan,
            subdomains: Vec::new(),
            records: Vec::new(),
            notes: Vec::new(),
        }
    }
}
