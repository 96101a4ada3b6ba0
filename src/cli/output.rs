//! Terminal output helpers
//!
//! Operator-facing lines go through here; diagnostics go through `tracing`.

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

use crate::core::creator::{PrOutcome, PrResult, Reporter};

pub struct Output;

impl Output {
    /// Print pre-formatted text as is
    pub fn block(text: &str) {
        print!("{}", text);
    }

    pub fn info(msg: &str) {
        println!("{}", msg);
    }

    pub fn success(msg: &str) {
        println!("{} {}", "✓".green(), msg);
    }

    pub fn warning(msg: &str) {
        println!("{} {}", "Warning:".yellow(), msg);
    }

    pub fn error(msg: &str) {
        eprintln!("{} {}", "error:".red().bold(), msg);
    }

    /// Spinner on stderr; draws nothing when stderr is not a terminal
    pub fn spinner(msg: &str) -> ProgressBar {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.cyan} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        pb.enable_steady_tick(Duration::from_millis(100));
        pb.set_message(msg.to_string());
        pb
    }
}

/// Reports per-repository progress to the terminal
#[derive(Default)]
pub struct TerminalReporter {
    spinner: Option<ProgressBar>,
}

impl Reporter for TerminalReporter {
    fn started(&mut self, owner: &str, repository: &str) {
        self.spinner = Some(Output::spinner(&format!(
            "Creating PR in {}/{}...",
            owner, repository
        )));
    }

    fn finished(&mut self, result: &PrResult) {
        if let Some(pb) = self.spinner.take() {
            pb.finish_and_clear();
        }
        match result.outcome {
            PrOutcome::Created { .. } => println!("{}", result.to_string().green()),
            PrOutcome::Failed { .. } => println!("{}", result.to_string().red()),
        }
    }
}

/// Print the closing line after all repositories were processed
pub fn summarize(results: &[PrResult]) {
    let failed = results.iter().filter(|r| !r.is_success()).count();
    let succeeded = results.len() - failed;

    if failed == 0 {
        Output::success(&format!("Created {} pull request(s)", succeeded));
    } else {
        Output::warning(&format!("{} succeeded, {} failed", succeeded, failed));
    }
}
