//! Per-repository pull request creation

use std::fmt;

use tracing::debug;

use crate::core::confirm::ConfirmedSelection;
use crate::platform::{HostingPlatform, NewPullRequest};

/// How one repository fared
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrOutcome {
    Created { url: String },
    Failed { message: String },
}

/// Result of creating a PR in one repository
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrResult {
    pub repository: String,
    pub outcome: PrOutcome,
}

impl PrResult {
    pub fn is_success(&self) -> bool {
        matches!(self.outcome, PrOutcome::Created { .. })
    }
}

impl fmt::Display for PrResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.outcome {
            PrOutcome::Created { url } => write!(f, "PR created: {}", url),
            PrOutcome::Failed { message } => write!(
                f,
                "Failed to create PR for repository {}: {}",
                self.repository, message
            ),
        }
    }
}

/// Receives progress as repositories are processed
pub trait Reporter {
    fn started(&mut self, _owner: &str, _repository: &str) {}
    fn finished(&mut self, result: &PrResult);
}

/// Open one PR per selected repository, in selection order.
///
/// A failure is recorded and the loop moves on; it never aborts the rest.
pub async fn create_pull_requests(
    platform: &dyn HostingPlatform,
    owner: &str,
    selection: &ConfirmedSelection,
    reporter: &mut dyn Reporter,
) -> Vec<PrResult> {
    let request = NewPullRequest::new(
        selection.title(),
        selection.compare_branch(),
        selection.base_branch(),
    );

    let mut results = Vec::with_capacity(selection.repositories().len());
    for repo in selection.repositories() {
        reporter.started(owner, repo);

        let outcome = match platform.create_pull_request(owner, repo, &request).await {
            Ok(created) => {
                debug!("{}/{}: PR #{} created", owner, repo, created.number);
                PrOutcome::Created {
                    url: created.html_url,
                }
            }
            Err(e) => {
                debug!("{}/{}: PR creation failed: {}", owner, repo, e);
                PrOutcome::Failed {
                    message: e.to_string(),
                }
            }
        };

        let result = PrResult {
            repository: repo.clone(),
            outcome,
        };
        reporter.finished(&result);
        results.push(result);
    }

    results
}
