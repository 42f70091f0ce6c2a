//! Configuration file schema.
//!
//! ```toml
//! [github]
//! token = "ghp_..."
//! api_root = "https://api.github.com"
//!
//! [quorum]
//! default = 2
//!
//! [quorum.repos]
//! "bunto/bunto" = 3
//! "bunto/sandbox" = 0
//! ```

use std::collections::HashMap;

use lgtm_domain::{DEFAULT_QUORUM, QuorumPolicy};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::github::DEFAULT_API_ROOT;

/// Root of the configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub github: GithubSection,
    pub quorum: QuorumSection,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GithubSection {
    /// Personal access token. Usually supplied via `LGTM_GITHUB__TOKEN`
    /// rather than written to disk.
    pub token: Option<String>,
    pub api_root: String,
}

impl Default for GithubSection {
    fn default() -> Self {
        Self {
            token: None,
            api_root: DEFAULT_API_ROOT.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct QuorumSection {
    /// Fallback for repositories without an explicit entry.
    pub default: usize,
    /// Per-repository overrides, keyed by `owner/name`.
    pub repos: HashMap<String, usize>,
}

impl Default for QuorumSection {
    fn default() -> Self {
        Self {
            default: DEFAULT_QUORUM,
            repos: HashMap::new(),
        }
    }
}

impl FileConfig {
    /// Build the domain policy from the `[quorum]` section. Entries whose
    /// key is not an `owner/name` slug are skipped with a warning.
    pub fn quorum_policy(&self) -> QuorumPolicy {
        self.quorum.repos.iter().fold(
            QuorumPolicy::new(self.quorum.default),
            |policy, (slug, quorum)| match slug.split_once('/') {
                Some((owner, name)) => policy.with_repo(owner, name, *quorum),
                None => {
                    warn!(%slug, "ignoring quorum entry without an owner/name slug");
                    policy
                }
            },
        )
    }
}
