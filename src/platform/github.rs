//! GitHub adapter

use async_trait::async_trait;
use octocrab::Octocrab;
use tracing::debug;

use super::{CreatedPullRequest, HostingPlatform, NewPullRequest, PlatformError};

/// GitHub REST API client authenticated with a personal access token
pub struct GitHubAdapter {
    octocrab: Octocrab,
}

impl GitHubAdapter {
    /// Create an adapter for github.com, or for `api_url` when given
    pub fn new(token: &str, api_url: Option<&str>) -> Result<Self, PlatformError> {
        let mut builder = Octocrab::builder().personal_token(token.to_string());

        if let Some(url) = api_url {
            builder = builder.base_uri(url).map_err(|e| PlatformError::InvalidUrl {
                url: url.to_string(),
                message: e.to_string(),
            })?;
        }

        let octocrab = builder
            .build()
            .map_err(|e| PlatformError::Client(e.to_string()))?;

        Ok(Self { octocrab })
    }
}

#[async_trait]
impl HostingPlatform for GitHubAdapter {
    async fn create_pull_request(
        &self,
        owner: &str,
        repo: &str,
        request: &NewPullRequest,
    ) -> Result<CreatedPullRequest, PlatformError> {
        debug!(
            "Creating PR in {}/{}: {} <- {}",
            owner, repo, request.base, request.head
        );

        let route = format!("/repos/{}/{}/pulls", owner, repo);
        let created: CreatedPullRequest = self
            .octocrab
            .post(route, Some(request))
            .await
            .map_err(|e| PlatformError::Api(describe_error(&e)))?;

        debug!("Created PR #{} in {}/{}", created.number, owner, repo);
        Ok(created)
    }
}

/// Turn an octocrab error into a message an operator can act on.
///
/// GitHub puts the useful part (e.g. "A pull request already exists") in the
/// `errors` details rather than the top-level message.
fn describe_error(error: &octocrab::Error) -> String {
    match error {
        octocrab::Error::GitHub { source, .. } => {
            let details: Vec<String> = source
                .errors
                .as_ref()
                .map(|errors| errors.iter().filter_map(detail_message).collect())
                .unwrap_or_default();

            if details.is_empty() {
                source.message.clone()
            } else {
                format!("{}: {}", source.message, details.join("; "))
            }
        }
        other => other.to_string(),
    }
}

fn detail_message(detail: &serde_json::Value) -> Option<String> {
    if let Some(message) = detail.get("message").and_then(|m| m.as_str()) {
        return Some(message.to_string());
    }
    // Field errors come without a message
    let code = detail.get("code").and_then(|c| c.as_str())?;
    match detail.get("field").and_then(|f| f.as_str()) {
        Some(field) => Some(format!("{} {}", field, code)),
        None => Some(code.to_string()),
    }
}
