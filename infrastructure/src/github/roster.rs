//! GitHub team roster adapter.

use std::time::Duration;

use async_trait::async_trait;
use lgtm_application::{RosterError, TeamRoster};
use lgtm_domain::Team;
use serde::Deserialize;
use tracing::debug;

use super::{DEFAULT_API_ROOT, USER_AGENT};
use crate::cache::TtlCache;

/// [`TeamRoster`] over the GitHub teams REST API, caching each team's
/// maintainer list behind an owned [`TtlCache`].
pub struct GithubTeamRoster {
    http: reqwest::Client,
    api_root: String,
    token: String,
    cache: TtlCache<String, Vec<String>>,
}

#[derive(Debug, Deserialize)]
struct Member {
    login: String,
}

impl GithubTeamRoster {
    /// Default lifetime for a cached roster.
    pub const DEFAULT_TTL: Duration = Duration::from_secs(15 * 60);

    pub fn new(token: impl Into<String>) -> Self {
        Self::with_ttl(token, Self::DEFAULT_TTL)
    }

    /// Create a roster whose cache entries live for `ttl`.
    pub fn with_ttl(token: impl Into<String>, ttl: Duration) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_root: DEFAULT_API_ROOT.to_string(),
            token: token.into(),
            cache: TtlCache::new(ttl),
        }
    }

    /// Point the adapter at a GitHub Enterprise API root.
    pub fn with_api_root(mut self, api_root: impl Into<String>) -> Self {
        self.api_root = api_root.into();
        self
    }

    /// Forget the cached roster for one team, forcing a refetch.
    pub fn invalidate(&self, org: &str, slug: &str) {
        self.cache.invalidate(&cache_key(org, slug));
    }

    async fn fetch_captains(&self, org: &str, slug: &str) -> Result<Vec<String>, RosterError> {
        let url = format!(
            "{}/orgs/{org}/teams/{slug}/members?role=maintainer",
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
            .map_err(|e| RosterError::RequestFailed(e.to_string()))?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(RosterError::UnknownTeam(format!("{org}/{slug}")));
        }
        if !response.status().is_success() {
            return Err(RosterError::RequestFailed(format!(
                "{} from {}",
                response.status(),
                response.url().path()
            )));
        }

        let members: Vec<Member> = response
            .json()
            .await
            .map_err(|e| RosterError::RequestFailed(e.to_string()))?;
        Ok(members.into_iter().map(|m| m.login).collect())
    }
}

fn cache_key(org: &str, slug: &str) -> String {
    format!("{org}/{slug}")
}

#[async_trait]
impl TeamRoster for GithubTeamRoster {
    async fn team(&self, org: &str, slug: &str) -> Result<Team, RosterError> {
        let key = cache_key(org, slug);
        let captains = match self.cache.get(&key) {
            Some(cached) => {
                debug!(team = %key, "roster cache hit");
                cached
            }
            None => {
                let fetched = self.fetch_captains(org, slug).await?;
                self.cache.insert(key, fetched.clone());
                fetched
            }
        };
        Ok(Team::new(org, slug, captains))
    }
}
