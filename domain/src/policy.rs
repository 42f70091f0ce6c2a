//! Quorum policy
//!
//! Resolves the number of required approvals for a repository. Backed by an
//! explicit per-repository table with a global fallback; lookup is pure,
//! side-effect-free, and never fails — unlisted repositories silently
//! receive the fallback.
//!
//! The policy is the only authority on the quorum. A quorum decoded from a
//! previously published description is never trusted over this table.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Fallback quorum for repositories without an explicit entry.
pub const DEFAULT_QUORUM: usize = 2;

/// Per-repository approval requirements with a global fallback.
///
/// # Example
///
/// ```
/// use lgtm_domain::QuorumPolicy;
///
/// let policy = QuorumPolicy::new(1).with_repo("bunto", "bunto", 2);
/// assert_eq!(policy.required_approvals("bunto", "bunto"), 2);
/// assert_eq!(policy.required_approvals("bunto", "dashboard"), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuorumPolicy {
    fallback: usize,
    repos: HashMap<String, usize>,
}

impl QuorumPolicy {
    /// Create a policy with the given global fallback and an empty table.
    pub fn new(fallback: usize) -> Self {
        Self {
            fallback,
            repos: HashMap::new(),
        }
    }

    /// Register an explicit quorum for one repository.
    pub fn with_repo(mut self, owner: &str, name: &str, quorum: usize) -> Self {
        self.repos.insert(repo_key(owner, name), quorum);
        self
    }

    /// The global fallback quorum.
    pub fn fallback(&self) -> usize {
        self.fallback
    }

    /// Resolve the required number of distinct approvers for a repository.
    pub fn required_approvals(&self, owner: &str, name: &str) -> usize {
        self.repos
            .get(&repo_key(owner, name))
            .copied()
            .unwrap_or(self.fallback)
    }
}

impl Default for QuorumPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_QUORUM)
    }
}

impl FromIterator<(String, usize)> for QuorumPolicy {
    /// Build a policy from `owner/name` slugs, with the default fallback.
    fn from_iter<I: IntoIterator<Item = (String, usize)>>(iter: I) -> Self {
        Self {
            fallback: DEFAULT_QUORUM,
            repos: iter
                .into_iter()
                .map(|(slug, quorum)| (slug.to_ascii_lowercase(), quorum))
                .collect(),
        }
    }
}

/// Repository names on GitHub are case-insensitive.
fn repo_key(owner: &str, name: &str) -> String {
    format!("{}/{}", owner.to_ascii_lowercase(), name.to_ascii_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_entry() {
        let policy = QuorumPolicy::new(1).with_repo("bunto", "bunto", 4);
        assert_eq!(policy.required_approvals("bunto", "bunto"), 4);
    }

    #[test]
    fn test_unknown_repo_gets_fallback() {
        let policy = QuorumPolicy::new(3);
        assert_eq!(policy.required_approvals("anyone", "anything"), 3);
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let policy = QuorumPolicy::new(1).with_repo("Bunto", "Dashboard", 2);
        assert_eq!(policy.required_approvals("bunto", "dashboard"), 2);
        assert_eq!(policy.required_approvals("BUNTO", "DASHBOARD"), 2);
    }

    #[test]
    fn test_zero_quorum_entry() {
        // quorum == 0 disables the requirement for that repo.
        let policy = QuorumPolicy::default().with_repo("bunto", "sandbox", 0);
        assert_eq!(policy.required_approvals("bunto", "sandbox"), 0);
    }

    #[test]
    fn test_default_fallback() {
        assert_eq!(QuorumPolicy::default().fallback(), DEFAULT_QUORUM);
    }

    #[test]
    fn test_from_iter_of_slugs() {
        let policy: QuorumPolicy =
            [("Bunto/Bunto".to_string(), 5)].into_iter().collect();
        assert_eq!(policy.required_approvals("bunto", "bunto"), 5);
        assert_eq!(policy.required_approvals("other", "repo"), DEFAULT_QUORUM);
    }
}
