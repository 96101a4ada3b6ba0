//! Hosting platform abstraction
//!
//! The PR creation loop talks to a `HostingPlatform`, so it can run against
//! GitHub or a recording double in tests.

pub mod github;

pub use github::GitHubAdapter;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors returned by a hosting platform call
#[derive(Error, Debug)]
pub enum PlatformError {
    #[error("{0}")]
    Api(String),

    #[error("invalid API URL {url}: {message}")]
    InvalidUrl { url: String, message: String },

    #[error("failed to build API client: {0}")]
    Client(String),
}

/// Body of a pull request creation request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewPullRequest {
    pub title: String,
    /// Branch holding the changes
    pub head: String,
    /// Branch to merge into
    pub base: String,
    pub maintainer_can_modify: bool,
}

impl NewPullRequest {
    pub fn new(title: &str, head: &str, base: &str) -> Self {
        Self {
            title: title.to_string(),
            head: head.to_string(),
            base: base.to_string(),
            maintainer_can_modify: true,
        }
    }
}

/// The parts of a created pull request we report
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreatedPullRequest {
    pub number: u64,
    pub html_url: String,
}

#[async_trait]
pub trait HostingPlatform: Send + Sync {
    /// Open a pull request in `owner/repo`
    async fn create_pull_request(
        &self,
        owner: &str,
        repo: &str,
        request: &NewPullRequest,
    ) -> Result<CreatedPullRequest, PlatformError>;
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_pull_request_body() {
        let request = NewPullRequest::new("Release 1.2", "feature-x", "main");
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "title": "Release 1.2",
                "head": "feature-x",
                "base": "main",
                "maintainer_can_modify": true,
            })
        );
        assert!(json.get("body").is_none());
    }
}
