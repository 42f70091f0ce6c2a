//! CLI entrypoint for lgtm-bot
//!
//! Wires the layers together with dependency injection: configuration in,
//! adapters constructed, use case executed.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Result, bail};
use clap::{Parser, Subcommand};
use lgtm_application::{AssignReviewersUseCase, ProcessReviewUseCase, StatusStore};
use lgtm_domain::ReviewEvent;
use lgtm_infrastructure::{ConfigLoader, GithubStatusStore, GithubTeamRoster, InMemoryStatusStore};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "lgtm-bot", about = "Pull request approval gate", version)]
struct Cli {
    /// Path to a config file (overrides discovery)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Fold one submitted review into the approval gate for a commit
    Review {
        repo_owner: String,
        repo_name: String,
        commit_id: String,
        reviewer_login: String,

        /// Evaluate against an empty in-memory store instead of GitHub
        #[arg(long)]
        dry_run: bool,
    },
    /// Pick review captains from a team's roster
    Assign {
        org: String,
        team_slug: String,

        /// How many captains to pick
        #[arg(long, default_value_t = 2)]
        count: usize,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let config = ConfigLoader::load(cli.config.as_ref()).map_err(|e| anyhow::anyhow!(e))?;

    match cli.command {
        Command::Review {
            repo_owner,
            repo_name,
            commit_id,
            reviewer_login,
            dry_run,
        } => {
            // === Dependency Injection ===
            let store: Arc<dyn StatusStore> = if dry_run {
                info!("dry run: using in-memory status store");
                Arc::new(InMemoryStatusStore::new())
            } else {
                let Some(token) = config.github.token.clone() else {
                    bail!("no GitHub token configured; set LGTM_GITHUB__TOKEN or use --dry-run");
                };
                Arc::new(GithubStatusStore::new(token).with_api_root(&config.github.api_root))
            };

            let use_case = ProcessReviewUseCase::new(store, config.quorum_policy());
            let event = ReviewEvent::new(commit_id, repo_owner, repo_name, reviewer_login);
            let status = use_case.execute(&event).await?;

            println!("{} [{}] {}", status.context, status.state, status.description);
        }
        Command::Assign {
            org,
            team_slug,
            count,
        } => {
            let Some(token) = config.github.token.clone() else {
                bail!("no GitHub token configured; set LGTM_GITHUB__TOKEN");
            };
            let roster =
                Arc::new(GithubTeamRoster::new(token).with_api_root(&config.github.api_root));

            let use_case = AssignReviewersUseCase::new(roster);
            let mut rng = StdRng::from_entropy();
            let picked = use_case.execute(&org, &team_slug, count, &mut rng).await?;

            println!("{}", picked.join(", "));
        }
    }

    Ok(())
}
