//! Check command - validates both account files without starting the server

use clap::Args;

use super::{load_config, SourceArgs};
use crate::api::state::AppState;
use crate::infrastructure::logging;

/// Arguments for the check command
#[derive(Args, Clone, Debug, Default)]
pub struct CheckArgs {
    #[command(flatten)]
    pub sources: SourceArgs,
}

/// Record counts of one successful check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckReport {
    pub users: usize,
    pub groups: usize,
}

/// Parse both configured files once and print their record counts
pub async fn run(args: CheckArgs) -> anyhow::Result<()> {
    let mut config = load_config()?;
    args.sources.apply(&mut config);
    logging::init_logging(&config.logging)?;

    let state = crate::create_app_state(&config.sources);
    let report = check_sources(&state).await?;

    println!(
        "{}: {} users",
        config.sources.users_file.display(),
        report.users
    );
    println!(
        "{}: {} groups",
        config.sources.groups_file.display(),
        report.groups
    );

    Ok(())
}

/// Parse both sources, failing on the first that cannot be used
pub async fn check_sources(state: &AppState) -> anyhow::Result<CheckReport> {
    let users = state.user_service.all_users().await?;
    let groups = state.group_service.all_groups().await?;

    Ok(CheckReport {
        users: users.len(),
        groups: groups.len(),
    })
}
