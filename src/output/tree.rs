use std::collections::BTreeSet;
use std::path::Path;

use termtree::Tree;
use tracing::Span;
use tracing_indicatif::span_ext::IndicatifSpanExt;

use super::{progress, tree_label, Presenter};
use crate::domain::Domain;
use crate::pipeline::BatchSummary;
use crate::report::{ReportError, SubdomainRecord};
use crate::scan::ScanResult;
use crate::workspace::Workspace;

/// Decorated output: banner, spinner while a scan runs and tree shaped reports.
#[derive(Default)]
pub struct TreePresenter {
    /// Span carrying the spinner of the running scan; dropping it clears the spinner
    scan_span: Option<Span>,
}

impl TreePresenter {
    pub fn new() -> Self {
        Self::default()
    }

    fn finish_scan(&mut self) {
        drop(self.scan_span.take());
    }
}

/// Subdomain names, one node each.
pub fn subdomain_tree(domain: &Domain, subdomains: &BTreeSet<String>) -> Tree<String> {
    let mut root = Tree::new(format!("Subdomains of {} - found: {}", domain, subdomains.len()));
    for sub in subdomains {
        root.push(Tree::new(sub.clone()));
    }
    root
}

/// One `name: ip, ip` node per record, in document order.
pub fn record_tree(domain: &Domain, records: &[SubdomainRecord]) -> Tree<String> {
    let mut root = Tree::new(tree_label(format!("Subdomain details of {}", domain)));
    for record in records {
        root.push(Tree::new(format!("{}: {}", record.name, record.display_addresses())));
    }
    root
}

/// Notice line for a report that could not be used.
pub fn report_notice(error: &ReportError) -> String {
    format!("[-] {}", error)
}

impl Presenter for TreePresenter {
    fn banner(&mut self) {
        crate::app::show_banner_with_starttime();
    }

    fn workspace_ready(&mut self, workspace: &Workspace) {
        let state = if workspace.created { "created" } else { "existing" };
        println!("Results directory ({}): {}", state, workspace.path.display());
    }

    fn wordlist_used(&mut self, path: &Path) {
        println!("Using wordlist: {}", path.display());
    }

    fn announce(&mut self, domain: &Domain) {
        println!();
        let span = tracing::info_span!("scan", domain = %domain);
        span.pb_set_style(&progress::get_spinner_style());
        span.pb_set_message(&format!("Enumerating {}", domain));
        span.pb_start();
        self.scan_span = Some(span);
    }

    fn report_success(&mut self, domain: &Domain) {
        self.finish_scan();
        println!("[+] Enumeration of {} completed", domain);
    }

    fn report_failure(&mut self, domain: &Domain, result: &ScanResult) {
        self.finish_scan();
        tracing::error!("Scan failed for {}: {}", domain, result.message);
        println!("Skipping processing for {} due to scan failure.", domain);
    }

    fn subdomains(&mut self, domain: &Domain, report: &Result<BTreeSet<String>, ReportError>) {
        match report {
            Ok(subdomains) => println!("{}", subdomain_tree(domain, subdomains)),
            Err(e) => println!("{}", report_notice(e)),
        }
    }

    fn records(&mut self, domain: &Domain, report: &Result<Vec<SubdomainRecord>, ReportError>) {
        match report {
            Ok(records) if records.is_empty() => {
                println!("No data found in the structured report of {}", domain);
            }
            Ok(records) => println!("{}", record_tree(domain, records)),
            Err(e) => println!("{}", report_notice(e)),
        }
    }

    fn finished(&mut self, summary: &BatchSummary) {
        let mut root = Tree::new(tree_label("Scan report(s)"));
        for report in &summary.reports {
            let status = if report.scan.success { "ok" } else { "skipped" };
            root.push(Tree::new(format!(
                "{} ({}) - subdomains: {}, records: {}",
                report.domain,
                status,
                report.subdomains.len(),
                report.records.len()
            )));
        }
        println!();
        println!("{}", root);
        println!("Results are stored in '{}'", summary.results_dir.display());
    }
}
