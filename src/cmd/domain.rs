use std::io::IsTerminal;
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::cli::Cli;
use crate::domain::parse_domain_list;
use crate::output::{PlainPresenter, Presenter, TreePresenter};
use crate::pipeline::{BatchSummary, PipelineSettings};
use crate::scan::AmassScanner;
use crate::util::json::save_json_output;

/// Run the enumeration batch described by the command line.
pub fn run(args: Cli) -> Result<BatchSummary> {
    let mut presenter: Box<dyn Presenter> = if args.plain {
        Box::new(PlainPresenter::new(std::io::stdout()))
    } else {
        Box::new(TreePresenter::new())
    };
    presenter.banner();

    let raw_domains: Vec<String> = match args.domains {
        Some(domains) => domains,
        None => vec![crate::prompt::ask_domains()?],
    };
    // Validated before anything touches the disk
    if parse_domain_list(&raw_domains).is_empty() {
        anyhow::bail!("No valid domains entered");
    }

    let wordlist_input = if args.no_wordlist {
        None
    } else if args.wordlist.is_some() {
        args.wordlist
    } else if std::io::stdin().is_terminal() {
        crate::prompt::ask_wordlist()?
    } else {
        None
    };
    let wordlist: Option<PathBuf> = match wordlist_input {
        Some(input) => {
            let download_dir = std::env::current_dir().context("failed to get current directory")?;
            crate::wordlist::resolve_wordlist(&input, &download_dir)
        }
        None => None,
    };

    if let Err(e) = crate::scan::dep::check_scanner(&args.scanner) {
        tracing::warn!("{}", e);
    }

    let workspace = crate::workspace::ensure_workspace(&args.results_dir)?;
    presenter.workspace_ready(&workspace);

    let settings = PipelineSettings {
        wordlist,
        timeout_minutes: args.timeout,
    };
    let scanner = AmassScanner::new(args.scanner);
    let summary = crate::pipeline::run(&raw_domains, &settings, &workspace, &scanner, presenter.as_mut())?;

    if let Some(path) = &args.output {
        save_json_output(&summary, path)?;
        tracing::info!("JSON output saved to {}", path.display());
    }
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use tempfile::tempdir;

    fn cli(domains: &str, results_dir: &std::path::Path) -> Cli {
        Cli::parse_from([
            "amabridge",
            "-d",
            domains,
            "--no-wordlist",
            "--plain",
            "--scanner",
            "amabridge-no-such-scanner-binary",
            "--results-dir",
            results_dir.to_str().unwrap(),
        ])
    }

    #[test]
    fn no_valid_domains_is_fatal_before_workspace() {
        let temp_dir = tempdir().unwrap();
        let results_dir = temp_dir.path().join("Result");

        assert!(run(cli(",,", &results_dir)).is_err());
        assert!(run(cli(" , ", &results_dir)).is_err());
        assert!(!results_dir.exists());
    }

    #[test]
    fn unusable_results_dir_is_fatal() {
        let temp_dir = tempdir().unwrap();
        let results_dir = temp_dir.path().join("Result");
        std::fs::write(&results_dir, "not a directory").unwrap();

        assert!(run(cli("example.com", &results_dir)).is_err());
        assert!(results_dir.is_file());
    }

    #[test]
    fn failed_scan_is_not_fatal() {
        let temp_dir = tempdir().unwrap();
        let results_dir = temp_dir.path().join("Result");

        let summary = run(cli("example.com", &results_dir)).unwrap();
        assert!(results_dir.is_dir());
        assert_eq!(summary.skipped(), 1);
    }
}
