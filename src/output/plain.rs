use std::collections::BTreeSet;
use std::io::Write;
use std::path::Path;

use super::Presenter;
use crate::domain::Domain;
use crate::pipeline::BatchSummary;
use crate::report::{ReportError, SubdomainRecord};
use crate::scan::ScanResult;
use crate::workspace::Workspace;

/// Line oriented output without decoration.
pub struct PlainPresenter<W: Write> {
    out: W,
}

impl<W: Write> PlainPresenter<W> {
    pub fn new(out: W) -> Self {
        PlainPresenter { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Presenter for PlainPresenter<W> {
    fn workspace_ready(&mut self, workspace: &Workspace) {
        if workspace.created {
            let _ = writeln!(self.out, "Created the output directory: {}", workspace.path.display());
        } else {
            let _ = writeln!(self.out, "The output directory already exists: {}", workspace.path.display());
        }
    }

    fn wordlist_used(&mut self, path: &Path) {
        let _ = writeln!(self.out, "Using wordlist: {}", path.display());
    }

    fn announce(&mut self, domain: &Domain) {
        let _ = writeln!(self.out, "\n[+] Enumerating domain: {}", domain);
    }

    fn report_success(&mut self, _domain: &Domain) {
        let _ = writeln!(self.out, "[+] Enumeration completed successfully.");
    }

    fn report_failure(&mut self, domain: &Domain, result: &ScanResult) {
        let _ = writeln!(self.out, "[-] Error scanning {}: {}", domain, result.message);
        let _ = writeln!(self.out, "Skipping processing for {} due to scan failure.", domain);
    }

    fn subdomains(&mut self, _domain: &Domain, report: &Result<BTreeSet<String>, ReportError>) {
        match report {
            Ok(subdomains) if subdomains.is_empty() => {
                let _ = writeln!(self.out, "No subdomains found.");
            }
            Ok(subdomains) => {
                let _ = writeln!(self.out, "\n[+] List of found subdomains:");
                for sub in subdomains {
                    let _ = writeln!(self.out, " - {}", sub);
                }
            }
            Err(ReportError::NotFound(path)) => {
                let _ = writeln!(self.out, "[-] Subdomain list file not found: {}", path.display());
            }
            Err(e) => {
                let _ = writeln!(self.out, "[-] {}", e);
            }
        }
    }

    fn records(&mut self, _domain: &Domain, report: &Result<Vec<SubdomainRecord>, ReportError>) {
        match report {
            Ok(records) if records.is_empty() => {
                let _ = writeln!(self.out, "No data found in the JSON file.");
            }
            Ok(records) => {
                let _ = writeln!(self.out, "\n[+] Subdomain Details (IPs):");
                for record in records {
                    let _ = writeln!(self.out, " - {}: {}", record.name, record.display_addresses());
                }
            }
            Err(ReportError::NotFound(path)) => {
                let _ = writeln!(self.out, "[-] JSON results file not found: {}", path.display());
            }
            Err(ReportError::Malformed(path, _)) => {
                let _ = writeln!(self.out, "[-] Error decoding JSON file: {}", path.display());
            }
            Err(e) => {
                let _ = writeln!(self.out, "[-] {}", e);
            }
        }
    }

    fn finished(&mut self, summary: &BatchSummary) {
        let _ = writeln!(
            self.out,
            "\nAll scans completed ({} succeeded, {} skipped). Results are stored in the '{}' directory.",
            summary.succeeded(),
            summary.skipped(),
            summary.results_dir.display()
        );
    }
}
