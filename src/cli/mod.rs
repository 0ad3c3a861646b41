use std::path::PathBuf;

use clap::{value_parser, ArgAction, Parser, ValueEnum};

use crate::config::default::{DEFAULT_RESULTS_DIR_NAME, DEFAULT_SCANNER_BIN, DEFAULT_SCAN_TIMEOUT_MINUTES};

/// amabridge - Amass orchestration for multi-domain DNS enumeration
#[derive(Parser, Debug)]
#[command(author, version, about = "amabridge - Amass orchestration for multi-domain DNS enumeration", long_about = None)]
pub struct Cli {
    /// Domains to enumerate, separated by commas (prompted when omitted)
    #[arg(short, long, value_name = "LIST", value_delimiter = ',')]
    pub domains: Option<Vec<String>>,

    /// Wordlist local path or http(s) URL
    #[arg(short, long, value_name = "PATH_OR_URL", conflicts_with = "no_wordlist")]
    pub wordlist: Option<String>,

    /// Do not use a wordlist and do not ask for one
    #[arg(long, action = ArgAction::SetTrue, default_value_t = false)]
    pub no_wordlist: bool,

    /// Scanner timeout in minutes
    #[arg(long, value_name = "MINUTES", default_value_t = DEFAULT_SCAN_TIMEOUT_MINUTES, value_parser = value_parser!(u64).range(1..))]
    pub timeout: u64,

    /// Results directory (relative to the current directory)
    #[arg(long, value_name = "DIR", default_value = DEFAULT_RESULTS_DIR_NAME, value_parser = value_parser!(PathBuf))]
    pub results_dir: PathBuf,

    /// External scanner binary
    #[arg(long, value_name = "BIN", default_value = DEFAULT_SCANNER_BIN)]
    pub scanner: String,

    /// Plain line output (no banner, tree or spinner)
    #[arg(long, action = ArgAction::SetTrue, default_value_t = false)]
    pub plain: bool,

    /// Save the batch summary to a JSON file
    #[arg(short, long, value_name = "FILE", value_parser = value_parser!(PathBuf))]
    pub output: Option<PathBuf>,

    /// Global log level
    #[arg(long, default_value = "info")]
    pub log_level: LogLevel,

    /// Log to file (in addition to stderr)
    #[arg(long, action = ArgAction::SetTrue, default_value_t = false)]
    pub log_file: bool,

    /// Log file path (default: ~/.amabridge/amabridge.log)
    #[arg(long, value_name = "FILE", value_parser = value_parser!(PathBuf))]
    pub log_file_path: Option<PathBuf>,

    /// Suppress non-error logs
    #[arg(long, action = ArgAction::SetTrue, default_value_t = false)]
    pub quiet: bool,
}

/// Log level
#[derive(Copy, Clone, Debug, ValueEnum, Eq, PartialEq)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// Convert to `tracing::Level`
    pub fn to_level_filter(&self) -> tracing::Level {
        match self {
            LogLevel::Error => tracing::Level::ERROR,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Trace => tracing::Level::TRACE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domains_split_on_commas() {
        let cli = Cli::parse_from(["amabridge", "-d", "a.com,b.com", "--no-wordlist"]);
        assert_eq!(cli.domains, Some(vec!["a.com".to_string(), "b.com".to_string()]));
        assert!(cli.no_wordlist);
        assert_eq!(cli.timeout, DEFAULT_SCAN_TIMEOUT_MINUTES);
        assert_eq!(cli.results_dir, PathBuf::from("Result"));
        assert_eq!(cli.scanner, "amass");
    }

    #[test]
    fn zero_timeout_rejected() {
        assert!(Cli::try_parse_from(["amabridge", "--timeout", "0"]).is_err());
    }

    #[test]
    fn wordlist_conflicts_with_no_wordlist() {
        assert!(Cli::try_parse_from(["amabridge", "-w", "list.txt", "--no-wordlist"]).is_err());
    }
}
