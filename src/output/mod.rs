use std::collections::BTreeSet;
use std::path::Path;

use crate::domain::Domain;
use crate::pipeline::BatchSummary;
use crate::report::{ReportError, SubdomainRecord};
use crate::scan::ScanResult;
use crate::workspace::Workspace;

pub mod plain;
pub mod progress;
pub mod tree;

pub use plain::PlainPresenter;
pub use tree::TreePresenter;

/// Convert a string into a tree label.
fn tree_label<S: Into<String>>(s: S) -> String {
    s.into()
}

/// Presentation side of a run. The pipeline calls these at its input/output
/// boundary only; nothing here affects which domains are scanned or parsed.
pub trait Presenter {
    /// Printed once before any prompt or scan.
    fn banner(&mut self) {}
    fn workspace_ready(&mut self, workspace: &Workspace);
    fn wordlist_used(&mut self, path: &Path);
    /// A scan for `domain` is about to start.
    fn announce(&mut self, domain: &Domain);
    fn report_success(&mut self, domain: &Domain);
    /// The scan failed; parsing of `domain` is skipped.
    fn report_failure(&mut self, domain: &Domain, result: &ScanResult);
    fn subdomains(&mut self, domain: &Domain, report: &Result<BTreeSet<String>, ReportError>);
    fn records(&mut self, domain: &Domain, report: &Result<Vec<SubdomainRecord>, ReportError>);
    fn finished(&mut self, summary: &BatchSummary);
}
