//! GitHub commit-status adapter.

use async_trait::async_trait;
use lgtm_application::{StatusStore, StoreError};
use lgtm_domain::RepoStatus;
use serde::Deserialize;
use tracing::debug;

use super::{DEFAULT_API_ROOT, USER_AGENT};

/// [`StatusStore`] over the GitHub commit-status REST API.
///
/// Reads list the statuses for a ref and pick out the one carrying this
/// gate's `<owner>/lgtm` context; writes create a new status, which GitHub
/// treats as replacing the previous one for the same context.
pub struct GithubStatusStore {
    http: reqwest::Client,
    api_root: String,
    token: String,
}

/// One element of the list-statuses response. Only the fields the gate
/// reads.
#[derive(Debug, Deserialize)]
struct CommitStatus {
    context: Option<String>,
    description: Option<String>,
}

impl GithubStatusStore {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_root: DEFAULT_API_ROOT.to_string(),
            token: token.into(),
        }
    }

    /// Point the adapter at a GitHub Enterprise API root.
    pub fn with_api_root(mut self, api_root: impl Into<String>) -> Self {
        self.api_root = api_root.into();
        self
    }

    fn check(&self, response: reqwest::Response) -> Result<reqwest::Response, StoreError> {
        match response.status() {
            status if status.is_success() => Ok(response),
            reqwest::StatusCode::UNAUTHORIZED | reqwest::StatusCode::FORBIDDEN => {
                Err(StoreError::Unauthorized)
            }
            reqwest::StatusCode::NOT_FOUND => {
                Err(StoreError::NotFound(response.url().path().to_string()))
            }
            status => Err(StoreError::UnexpectedResponse(format!(
                "{} from {}",
                status,
                response.url().path()
            ))),
        }
    }
}

#[async_trait]
impl StatusStore for GithubStatusStore {
    async fn fetch_description(
        &self,
        owner: &str,
        repo: &str,
        commit_id: &str,
    ) -> Result<Option<String>, StoreError> {
        let url = format!(
            "{}/repos/{owner}/{repo}/commits/{commit_id}/statuses",
            self.api_root
        );
        let response = self
            .http
            .get(&url)
            .bearer_auth(&self.token)
            .header(reqwest::header::USER_AGENT, USER_AGENT)
            .header(reqwest::header::ACCEPT, "application/vnd.github+json")
            .send()
            .await
            .map_err(|e| StoreError::RequestFailed(e.to_string()))?;

        let statuses: Vec<CommitStatus> = self
            .check(response)?
            .json()
            .await
            .map_err(|e| StoreError::UnexpectedResponse(e.to_string()))?;

        let gate_context = format!("{owner}/lgtm");
        let description = statuses
            .into_iter()
            .find(|s| s.context.as_deref() == Some(gate_context.as_str()))
            .and_then(|s| s.description);
        debug!(
            %gate_context,
            commit = commit_id,
            found = description.is_some(),
            "fetched commit statuses"
        );
        Ok(description)
    }

    async fn publish(
        &self,
        owner: &str,
        repo: &str,
        commit_id: &str,
        status: &RepoStatus,
    ) -> Result<(), StoreError> {
        let url = format!("{}/repos/{owner}/{repo}/statuses/{commit_id}", self.api_root);
        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.token)
            .header(reqwest::header::USER_AGENT, USER_AGENT)
            .header(reqwest::header::ACCEPT, "application/vnd.github+json")
            .json(status)
            .send()
            .await
            .map_err(|e| StoreError::RequestFailed(e.to_string()))?;

        self.check(response)?;
        Ok(())
    }
}
