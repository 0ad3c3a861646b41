use std::ffi::OsString;
use std::process::{Command, Stdio};

use super::{ScanJob, ScanResult, Scanner};

/// Runs the Amass binary in active enumeration mode.
#[derive(Clone, Debug)]
pub struct AmassScanner {
    pub bin: String,
}

impl AmassScanner {
    pub fn new<S: Into<String>>(bin: S) -> Self {
        AmassScanner { bin: bin.into() }
    }

    /// Command line arguments for a job.
    pub fn build_args(job: &ScanJob) -> Vec<OsString> {
        let mut args: Vec<OsString> = vec![
            "enum".into(),
            "-active".into(),
            "-nocolor".into(),
            "-d".into(),
            job.domain.as_str().into(),
            "-oA".into(),
            job.output_prefix.clone().into_os_string(),
            "-timeout".into(),
            job.timeout_minutes.to_string().into(),
        ];
        if let Some(wordlist) = &job.wordlist {
            args.push("-w".into());
            args.push(wordlist.clone().into_os_string());
        }
        args
    }
}

impl Scanner for AmassScanner {
    fn scan(&self, job: &ScanJob) -> ScanResult {
        let args = Self::build_args(job);
        tracing::debug!("running {} {:?}", self.bin, args);
        // Blocks until the scanner exits; the timeout is enforced by the scanner itself
        let output = Command::new(&self.bin)
            .args(&args)
            .stdin(Stdio::null())
            .output();
        match output {
            Ok(output) if output.status.success() => ScanResult::success(),
            Ok(output) => {
                let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
                let message = if stderr.is_empty() {
                    format!("{} exited with {}", self.bin, output.status)
                } else {
                    stderr
                };
                ScanResult::failure(message)
            }
            Err(e) => ScanResult::failure(format!("failed to launch {}: {}", self.bin, e)),
        }
    }
}
