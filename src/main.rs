pub mod app;
pub mod cli;
pub mod cmd;
pub mod config;
pub mod domain;
pub mod log;
pub mod output;
pub mod pipeline;
pub mod prompt;
pub mod report;
pub mod scan;
pub mod time;
pub mod util;
pub mod wordlist;
pub mod workspace;

use clap::Parser;
use cli::Cli;

fn main() {
    let cli = Cli::parse();
    if let Err(e) = log::init_logger(&cli) {
        app::exit_with_error_message(&format!("failed to initialize logger: {:#}", e));
    }
    match cmd::domain::run(cli) {
        Ok(summary) => {
            tracing::debug!(
                "batch finished: {} succeeded, {} skipped",
                summary.succeeded(),
                summary.skipped()
            );
        }
        Err(e) => app::exit_with_error_message(&format!("{:#}", e)),
    }
}
