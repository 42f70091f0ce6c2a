//! Team affinity
//!
//! Review captains for a team, used when a fresh pull request needs
//! reviewers requested. Selection takes an injected random source instead
//! of reseeding from wall-clock time, so tests can pin a seed and get a
//! deterministic pick.

use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

/// A team whose captains can be asked to review.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    /// The org the team belongs to.
    pub org: String,
    /// Team slug, e.g. `documentation`.
    pub slug: String,
    /// The mention this team answers to, e.g. `@bunto/documentation`.
    pub mention: String,
    /// Captain logins, in no particular order.
    pub captains: Vec<String>,
}

impl Team {
    pub fn new(org: impl Into<String>, slug: impl Into<String>, captains: Vec<String>) -> Self {
        let org = org.into();
        let slug = slug.into();
        let mention = format!("@{org}/{slug}");
        Self {
            org,
            slug,
            mention,
            captains,
        }
    }

    /// Pick up to `num` distinct captains at random. If the team has `num`
    /// captains or fewer, all of them are returned.
    pub fn random_captains<R: Rng + ?Sized>(&self, num: usize, rng: &mut R) -> Vec<String> {
        self.captains
            .choose_multiple(rng, num)
            .cloned()
            .collect()
    }
}

impl std::fmt::Display for Team {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Team{{org={} slug={} captains={:?}}}",
            self.org, self.slug, self.captains
        )
    }
}
