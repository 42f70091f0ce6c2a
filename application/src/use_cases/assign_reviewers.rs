//! Pick review captains for a fresh pull request.

use std::sync::Arc;

use lgtm_domain::Team;
use rand::Rng;
use tracing::info;

use crate::ports::team_roster::{RosterError, TeamRoster};

/// Selects captains from a team's roster to request reviews from.
///
/// The random source is injected by the caller, so a seeded generator gives
/// a deterministic pick in tests.
pub struct AssignReviewersUseCase {
    roster: Arc<dyn TeamRoster>,
}

impl AssignReviewersUseCase {
    pub fn new(roster: Arc<dyn TeamRoster>) -> Self {
        Self { roster }
    }

    /// Pick up to `count` captains from `org`/`slug`.
    pub async fn execute<R: Rng + Send>(
        &self,
        org: &str,
        slug: &str,
        count: usize,
        rng: &mut R,
    ) -> Result<Vec<String>, RosterError> {
        let team: Team = self.roster.team(org, slug).await?;
        let picked = team.random_captains(count, rng);
        info!(team = %team.mention, count = picked.len(), "selected review captains");
        Ok(picked)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    struct FakeRoster;

    #[async_trait]
    impl TeamRoster for FakeRoster {
        async fn team(&self, org: &str, slug: &str) -> Result<Team, RosterError> {
            if slug != "documentation" {
                return Err(RosterError::UnknownTeam(format!("{org}/{slug}")));
            }
            Ok(Team::new(
                org,
                slug,
                vec!["@alice".into(), "@bob".into(), "@carol".into()],
            ))
        }
    }

    #[tokio::test]
    async fn test_picks_requested_number() {
        let uc = AssignReviewersUseCase::new(Arc::new(FakeRoster));
        let mut rng = StdRng::seed_from_u64(1);

        let picked = uc
            .execute("bunto", "documentation", 2, &mut rng)
            .await
            .unwrap();
        assert_eq!(picked.len(), 2);
    }

    #[tokio::test]
    async fn test_unknown_team_errors() {
        let uc = AssignReviewersUseCase::new(Arc::new(FakeRoster));
        let mut rng = StdRng::seed_from_u64(1);

        let result = uc.execute("bunto", "nope", 2, &mut rng).await;
        assert!(matches!(result, Err(RosterError::UnknownTeam(_))));
    }
}
