/// Name of the results directory created under the invocation directory
pub const DEFAULT_RESULTS_DIR_NAME: &str = "Result";
/// Default scanner timeout in minutes
pub const DEFAULT_SCAN_TIMEOUT_MINUTES: u64 = 60;
/// Default external scanner binary
pub const DEFAULT_SCANNER_BIN: &str = "amass";
/// Default log file name (under the user directory)
pub const DEFAULT_LOG_FILE_NAME: &str = "amabridge.log";
/// File name used when a wordlist URL has no usable last path segment
pub const DEFAULT_WORDLIST_FILE_NAME: &str = "wordlist.txt";
