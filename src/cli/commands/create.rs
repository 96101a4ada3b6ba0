//! Create command implementation
//!
//! Loads configuration, asks the operator what to open, confirms, then opens
//! one PR per selected repository.

use std::path::PathBuf;

use anyhow::Context;
use tracing::debug;

use crate::cli::output::{summarize, Output, TerminalReporter};
use crate::core::config::{load_env_file, RunConfig};
use crate::core::confirm::{Confirmation, ConfirmationView};
use crate::core::creator::{create_pull_requests, PrResult, Reporter};
use crate::platform::{GitHubAdapter, HostingPlatform};
use crate::prompt::{DialoguerPrompter, PromptSession, Prompter};

/// Options from the command line
#[derive(Debug, Clone, Default)]
pub struct CreateOptions {
    /// Env file to load instead of the optional `.env`
    pub env_file: Option<PathBuf>,
    /// Overrides `GITHUB_API_URL`
    pub api_url: Option<String>,
}

/// How a run ended without error
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    Completed(Vec<PrResult>),
    Cancelled,
}

/// Run the create command against the terminal and GitHub
pub async fn run_create(options: &CreateOptions) -> anyhow::Result<RunOutcome> {
    if let Some(path) = load_env_file(options.env_file.as_deref())? {
        debug!("Using env file {}", path.display());
    }

    let mut config = RunConfig::from_env()?;
    if let Some(url) = &options.api_url {
        config.api_url = Some(url.clone());
    }

    let platform = GitHubAdapter::new(&config.access_token, config.api_url.as_deref())
        .context("Failed to set up the GitHub client")?;
    let mut prompter = DialoguerPrompter::new();
    let mut reporter = TerminalReporter::default();

    let outcome = run_pipeline(&config, &mut prompter, &platform, &mut reporter).await?;
    if let RunOutcome::Completed(results) = &outcome {
        summarize(results);
    }
    Ok(outcome)
}

/// Prompt, validate, confirm and create, in that order
pub async fn run_pipeline(
    config: &RunConfig,
    prompter: &mut dyn Prompter,
    platform: &dyn HostingPlatform,
    reporter: &mut dyn Reporter,
) -> anyhow::Result<RunOutcome> {
    let selection = PromptSession::collect(prompter, config)?;
    let validated = selection.validate()?;

    if validated.title_is_empty() {
        Output::warning("PR title is empty");
    }

    Output::block(&ConfirmationView::render(&validated));
    let confirmed = match ConfirmationView::confirm(prompter, validated)? {
        Confirmation::Confirmed(confirmed) => confirmed,
        Confirmation::Declined => {
            Output::info("Operation cancelled by the user.");
            return Ok(RunOutcome::Cancelled);
        }
    };

    let results =
        create_pull_requests(platform, &config.repository_owner, &confirmed, reporter).await;
    Ok(RunOutcome::Completed(results))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::creator::PrOutcome;
    use crate::core::selection::ValidationError;
    use crate::platform::testing::RecordingPlatform;
    use crate::platform::NewPullRequest;
    use crate::prompt::testing::{Answer, ScriptedPrompter};
    use crate::prompt::PromptError;

    struct SilentReporter;

    impl Reporter for SilentReporter {
        fn finished(&mut self, _result: &PrResult) {}
    }

    fn config() -> RunConfig {
        RunConfig {
            access_token: "token".to_string(),
            repository_owner: "acme".to_string(),
            selectable_repositories: vec!["svc-a".to_string(), "svc-b".to_string()],
            selectable_branches: vec!["main".to_string(), "feature-x".to_string()],
            api_url: None,
        }
    }

    fn answers(repos: Vec<usize>, title: &str, confirm: &str) -> ScriptedPrompter {
        ScriptedPrompter::new(vec![
            Answer::Indices(repos),
            Answer::Index(0),
            Answer::Index(1),
            Answer::Text(title.to_string()),
            Answer::Text(confirm.to_string()),
        ])
    }

    #[tokio::test]
    async fn test_confirmed_run_creates_each_pr() {
        let platform = RecordingPlatform::default();
        let mut prompter = answers(vec![0, 1], "Release 1.2", "yes");

        let outcome = run_pipeline(&config(), &mut prompter, &platform, &mut SilentReporter)
            .await
            .unwrap();

        let expected = NewPullRequest::new("Release 1.2", "feature-x", "main");
        let calls = platform.calls.lock().unwrap().clone();
        assert_eq!(
            calls,
            vec![
                ("acme".to_string(), "svc-a".to_string(), expected.clone()),
                ("acme".to_string(), "svc-b".to_string(), expected),
            ]
        );

        match outcome {
            RunOutcome::Completed(results) => {
                let repos: Vec<&str> = results.iter().map(|r| r.repository.as_str()).collect();
                assert_eq!(repos, vec!["svc-a", "svc-b"]);
                assert_eq!(
                    results[0].outcome,
                    PrOutcome::Created {
                        url: "https://github.com/acme/svc-a/pull/1".to_string()
                    }
                );
            }
            RunOutcome::Cancelled => panic!("expected completed run"),
        }
    }

    #[tokio::test]
    async fn test_no_repositories_fails_before_any_call() {
        let platform = RecordingPlatform::default();
        let mut prompter = answers(vec![], "Release 1.2", "yes");

        let err = run_pipeline(&config(), &mut prompter, &platform, &mut SilentReporter)
            .await
            .unwrap_err();

        assert_eq!(
            err.downcast_ref::<ValidationError>(),
            Some(&ValidationError::NoRepositories)
        );
        assert_eq!(err.to_string(), "no repositories selected");
        assert_eq!(platform.call_count(), 0);
        // Confirmation is never asked
        assert_eq!(prompter.asked.len(), 4);
    }

    #[tokio::test]
    async fn test_declined_run_creates_nothing() {
        let platform = RecordingPlatform::default();
        let mut prompter = answers(vec![0, 1], "Release 1.2", "no");

        let outcome = run_pipeline(&config(), &mut prompter, &platform, &mut SilentReporter)
            .await
            .unwrap();

        assert_eq!(outcome, RunOutcome::Cancelled);
        assert_eq!(platform.call_count(), 0);
        assert_eq!(prompter.asked.last().map(String::as_str), Some(ConfirmationView::QUESTION));
    }

    #[tokio::test]
    async fn test_empty_title_still_runs() {
        let platform = RecordingPlatform::default();
        let mut prompter = answers(vec![1], "", "YES");

        let outcome = run_pipeline(&config(), &mut prompter, &platform, &mut SilentReporter)
            .await
            .unwrap();

        assert!(matches!(outcome, RunOutcome::Completed(ref r) if r.len() == 1));
        assert_eq!(platform.calls.lock().unwrap()[0].2.title, "");
    }

    #[tokio::test]
    async fn test_prompt_failure_is_fatal() {
        let platform = RecordingPlatform::default();
        let mut prompter = ScriptedPrompter::new(vec![Answer::Indices(vec![0]), Answer::Fail]);

        let err = run_pipeline(&config(), &mut prompter, &platform, &mut SilentReporter)
            .await
            .unwrap_err();

        assert!(err.downcast_ref::<PromptError>().is_some());
        assert_eq!(platform.call_count(), 0);
    }

    #[tokio::test]
    async fn test_failed_repository_is_reported_and_skipped() {
        let platform = RecordingPlatform::failing_for(&["svc-a"]);
        let mut prompter = answers(vec![0, 1], "Release 1.2", "yes");

        let outcome = run_pipeline(&config(), &mut prompter, &platform, &mut SilentReporter)
            .await
            .unwrap();

        let RunOutcome::Completed(results) = outcome else {
            panic!("expected completed run");
        };
        assert!(!results[0].is_success());
        assert!(results[1].is_success());
        assert_eq!(platform.call_count(), 2);
    }
}
