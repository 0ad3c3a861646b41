use std::path::PathBuf;

use anyhow::Result;
use serde::Serialize;

use crate::domain::{parse_domain_list, Domain};
use crate::output::Presenter;
use crate::report::{parse_edge_report, parse_structured_report, DomainReport};
use crate::scan::{ScanJob, Scanner};
use crate::workspace::{append_separator_if_exists, artifact_paths, Workspace};

/// Settings shared by every scan of a batch.
#[derive(Clone, Debug)]
pub struct PipelineSettings {
    pub wordlist: Option<PathBuf>,
    pub timeout_minutes: u64,
}

/// Outcome of a batch, one report per domain in input order.
#[derive(Clone, Debug, Serialize)]
pub struct BatchSummary {
    pub results_dir: PathBuf,
    pub reports: Vec<DomainReport>,
}

impl BatchSummary {
    pub fn succeeded(&self) -> usize {
        self.reports.iter().filter(|r| r.scan.success).count()
    }

    pub fn skipped(&self) -> usize {
        self.reports.len() - self.succeeded()
    }
}

/// Scan and summarize each domain in turn.
///
/// Domains are trimmed and blank entries dropped; an empty list is an error and nothing
/// is scanned. Past that point no domain can abort the batch: a failed scan skips
/// parsing for that domain only, and each report of a domain is parsed independently.
pub fn run<S: AsRef<str>>(
    domains: &[S],
    settings: &PipelineSettings,
    workspace: &Workspace,
    scanner: &dyn Scanner,
    presenter: &mut dyn Presenter,
) -> Result<BatchSummary> {
    let domains = parse_domain_list(domains);
    if domains.is_empty() {
        anyhow::bail!("no valid domains supplied");
    }

    let mut summary = BatchSummary {
        results_dir: workspace.path.clone(),
        reports: Vec::with_capacity(domains.len()),
    };
    for domain in domains {
        let report = process_domain(domain, settings, workspace, scanner, presenter);
        summary.reports.push(report);
    }
    presenter.finished(&summary);
    Ok(summary)
}

fn process_domain(
    domain: Domain,
    settings: &PipelineSettings,
    workspace: &Workspace,
    scanner: &dyn Scanner,
    presenter: &mut dyn Presenter,
) -> DomainReport {
    let paths = artifact_paths(&domain, workspace);
    match append_separator_if_exists(&paths.text) {
        Ok(true) => tracing::debug!("appended scan separator to {}", paths.text.display()),
        Ok(false) => {}
        Err(e) => tracing::warn!("failed to append scan separator: {:#}", e),
    }

    let job = ScanJob {
        domain: domain.clone(),
        output_prefix: paths.prefix.clone(),
        wordlist: settings.wordlist.clone(),
        timeout_minutes: settings.timeout_minutes,
    };
    if let Some(wordlist) = &job.wordlist {
        presenter.wordlist_used(wordlist);
    }
    presenter.announce(&domain);
    let scan = scanner.scan(&job);
    if !scan.success {
        tracing::debug!("scan of {} failed: {}", domain, scan.message);
        presenter.report_failure(&domain, &scan);
        return DomainReport::new(domain, scan);
    }
    presenter.report_success(&domain);

    let mut report = DomainReport::new(domain, scan);

    let subdomains = parse_edge_report(&paths.text);
    presenter.subdomains(&report.domain, &subdomains);
    match subdomains {
        Ok(subdomains) => report.subdomains = subdomains.into_iter().collect(),
        Err(e) => report.notes.push(e.to_string()),
    }

    let records = parse_structured_report(&paths.structured);
    presenter.records(&report.domain, &records);
    match records {
        Ok(records) if records.is_empty() => {
            report.notes.push(format!("no data in {}", paths.structured.display()));
        }
        Ok(records) => report.records = records,
        Err(e) => report.notes.push(e.to_string()),
    }
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::PlainPresenter;
    use crate::scan::ScanResult;
    use crate::workspace::ensure_workspace;
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::fs;
    use tempfile::tempdir;

    /// Writes canned reports at the job prefix, or fails, per domain.
    #[derive(Default)]
    struct FakeScanner {
        text: HashMap<String, String>,
        json: HashMap<String, String>,
        failing: Vec<String>,
        jobs: RefCell<Vec<ScanJob>>,
    }

    impl Scanner for FakeScanner {
        fn scan(&self, job: &ScanJob) -> ScanResult {
            self.jobs.borrow_mut().push(job.clone());
            let name = job.domain.as_str();
            if self.failing.iter().any(|d| d == name) {
                return ScanResult::failure("exit status: 1");
            }
            if let Some(text) = self.text.get(name) {
                let path = job.output_prefix.with_extension("txt");
                let mut content = fs::read_to_string(&path).unwrap_or_default();
                content.push_str(text);
                fs::write(path, content).unwrap();
            }
            if let Some(json) = self.json.get(name) {
                fs::write(job.output_prefix.with_extension("json"), json).unwrap();
            }
            ScanResult::success()
        }
    }

    fn settings() -> PipelineSettings {
        PipelineSettings { wordlist: None, timeout_minutes: 60 }
    }

    #[test]
    fn single_domain_edge_report() {
        let temp_dir = tempdir().unwrap();
        let workspace = ensure_workspace(&temp_dir.path().join("Result")).unwrap();
        let mut scanner = FakeScanner::default();
        scanner.text.insert("example.com".into(), "a --> node --> www.example.com (FQDN)\n".into());
        scanner.json.insert("example.com".into(), "[]".into());
        let mut presenter = PlainPresenter::new(Vec::new());

        let summary = run(&["example.com"], &settings(), &workspace, &scanner, &mut presenter).unwrap();

        assert_eq!(summary.reports[0].subdomains, vec!["www.example.com".to_string()]);
        let out = String::from_utf8(presenter.into_inner()).unwrap();
        assert!(out.contains("[+] List of found subdomains:\n - www.example.com\n"));
        assert!(out.contains("No data found in the JSON file."));

        let jobs = scanner.jobs.borrow();
        assert_eq!(jobs[0].output_prefix, workspace.path.join("example_com"));
        assert_eq!(jobs[0].timeout_minutes, 60);
        assert_eq!(jobs[0].wordlist, None);
    }

    #[test]
    fn failed_domain_does_not_stop_batch() {
        let temp_dir = tempdir().unwrap();
        let workspace = ensure_workspace(&temp_dir.path().join("Result")).unwrap();
        let mut scanner = FakeScanner::default();
        scanner.failing.push("a.com".into());
        scanner.text.insert("b.com".into(), "b.com (FQDN) --> node --> www.b.com (FQDN)\n".into());
        scanner.json.insert(
            "b.com".into(),
            r#"[{"name":"www.b.com","addresses":[{"ip":"10.0.0.1"}]}]"#.into(),
        );
        let mut presenter = PlainPresenter::new(Vec::new());

        let summary = run(&["a.com, b.com"], &settings(), &workspace, &scanner, &mut presenter).unwrap();

        assert_eq!(summary.succeeded(), 1);
        assert_eq!(summary.skipped(), 1);
        assert!(!summary.reports[0].scan.success);
        assert!(summary.reports[0].subdomains.is_empty());
        let out = String::from_utf8(presenter.into_inner()).unwrap();
        assert!(out.contains("Skipping processing for a.com due to scan failure."));
        assert!(out.contains(" - www.b.com\n"));
        assert!(out.contains(" - www.b.com: 10.0.0.1\n"));
        // a.com is scanned before b.com
        let skip = out.find("Skipping processing for a.com").unwrap();
        let listed = out.find(" - www.b.com").unwrap();
        assert!(skip < listed);
    }

    #[test]
    fn structured_report_lines() {
        let temp_dir = tempdir().unwrap();
        let workspace = ensure_workspace(&temp_dir.path().join("Result")).unwrap();
        let mut scanner = FakeScanner::default();
        scanner.json.insert(
            "example.com".into(),
            r#"[{"name":"x.example.com","addresses":[{"ip":"1.2.3.4"},{"ip":"1.2.3.5"}]}]"#.into(),
        );
        let mut presenter = PlainPresenter::new(Vec::new());

        let summary = run(&["example.com"], &settings(), &workspace, &scanner, &mut presenter).unwrap();

        let out = String::from_utf8(presenter.into_inner()).unwrap();
        assert!(out.contains("x.example.com: 1.2.3.4, 1.2.3.5"));
        // no text report was written; the structured one is still shown
        assert!(out.contains("[-] Subdomain list file not found:"));
        assert_eq!(summary.reports[0].records.len(), 1);
        assert_eq!(summary.reports[0].notes.len(), 1);
    }

    #[test]
    fn malformed_structured_report_keeps_edge_report() {
        let temp_dir = tempdir().unwrap();
        let workspace = ensure_workspace(&temp_dir.path().join("Result")).unwrap();
        let mut scanner = FakeScanner::default();
        scanner.text.insert("example.com".into(), "a --> node --> api.example.com (FQDN)\n".into());
        scanner.json.insert("example.com".into(), "{not json".into());
        let mut presenter = PlainPresenter::new(Vec::new());

        let summary = run(&["example.com"], &settings(), &workspace, &scanner, &mut presenter).unwrap();

        assert_eq!(summary.reports[0].subdomains, vec!["api.example.com".to_string()]);
        let out = String::from_utf8(presenter.into_inner()).unwrap();
        assert!(out.contains(" - api.example.com\n"));
        assert!(out.contains("[-] Error decoding JSON file:"));
    }

    #[test]
    fn empty_domain_input_scans_nothing() {
        let temp_dir = tempdir().unwrap();
        let workspace = ensure_workspace(&temp_dir.path().join("Result")).unwrap();
        let scanner = FakeScanner::default();
        let mut presenter = PlainPresenter::new(Vec::new());

        assert!(run(&[""], &settings(), &workspace, &scanner, &mut presenter).is_err());
        assert!(run(&[" , ,,"], &settings(), &workspace, &scanner, &mut presenter).is_err());
        assert!(scanner.jobs.borrow().is_empty());
        assert!(presenter.into_inner().is_empty());
    }

    #[test]
    fn repeated_scan_keeps_history() {
        let temp_dir = tempdir().unwrap();
        let workspace = ensure_workspace(&temp_dir.path().join("Result")).unwrap();
        let mut scanner = FakeScanner::default();
        scanner.text.insert("example.com".into(), "a --> node --> www.example.com (FQDN)\n".into());
        scanner.json.insert("example.com".into(), "[]".into());

        for _ in 0..2 {
            let mut presenter = PlainPresenter::new(Vec::new());
            let summary = run(&["example.com"], &settings(), &workspace, &scanner, &mut presenter).unwrap();
            assert_eq!(summary.reports[0].subdomains, vec!["www.example.com".to_string()]);
        }

        let text = fs::read_to_string(workspace.path.join("example_com.txt")).unwrap();
        assert!(text.starts_with("a --> node --> www.example.com (FQDN)\n\n\n----- Scan on "));
        assert_eq!(text.matches("----- Scan on ").count(), 1);
        assert_eq!(text.matches("www.example.com").count(), 2);
    }

    #[test]
    fn wordlist_is_forwarded_to_every_job() {
        let temp_dir = tempdir().unwrap();
        let workspace = ensure_workspace(&temp_dir.path().join("Result")).unwrap();
        let scanner = FakeScanner::default();
        let settings = PipelineSettings {
            wordlist: Some(PathBuf::from("words.txt")),
            timeout_minutes: 5,
        };
        let mut presenter = PlainPresenter::new(Vec::new());

        run(&["a.com", "b.com"], &settings, &workspace, &scanner, &mut presenter).unwrap();

        let jobs = scanner.jobs.borrow();
        assert_eq!(jobs.len(), 2);
        assert!(jobs.iter().all(|j| j.wordlist == Some(PathBuf::from("words.txt")) && j.timeout_minutes == 5));
        let out = String::from_utf8(presenter.into_inner()).unwrap();
        assert_eq!(out.matches("Using wordlist: words.txt").count(), 2);
    }
}
