//! CLI module for passwd-service
//!
//! Provides subcommands:
//! - `serve`: run the HTTP query service
//! - `check`: parse both account files once and report

pub mod check;
pub mod serve;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::AppConfig;

/// Passwd as a Service - read-only HTTP queries over passwd and group files
#[derive(Parser)]
#[command(name = "passwd-service")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the HTTP server
    Serve(serve::ServeArgs),

    /// Parse the configured account files and print record counts
    Check(check::CheckArgs),
}

/// Account file locations (override config)
#[derive(Args, Clone, Debug, Default)]
pub struct SourceArgs {
    /// Path to the passwd-formatted user file
    #[arg(long)]
    pub users_file: Option<PathBuf>,

    /// Path to the group-formatted group file
    #[arg(long)]
    pub groups_file: Option<PathBuf>,
}

impl SourceArgs {
    pub fn apply(&self, config: &mut AppConfig) {
        if let Some(path) = &self.users_file {
            config.sources.users_file = path.clone();
        }
        if let Some(path) = &self.groups_file {
            config.sources.groups_file = path.clone();
        }
    }
}

/// Load `.env`, then the layered configuration
fn load_config() -> anyhow::Result<AppConfig> {
    dotenvy::dotenv().ok();
    Ok(AppConfig::load()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_serve_with_overrides() {
        let cli = Cli::try_parse_from([
            "passwd-service",
            "serve",
            "--users-file",
            "/tmp/passwd",
            "--port",
            "9090",
        ])
        .unwrap();

        let Command::Serve(args) = cli.command else {
            panic!("expected serve");
        };
        assert_eq!(args.sources.users_file, Some(PathBuf::from("/tmp/passwd")));
        assert_eq!(args.sources.groups_file, None);
        assert_eq!(args.port, Some(9090));
        assert_eq!(args.host, None);
    }

    #[test]
    fn test_parse_check() {
        let cli =
            Cli::try_parse_from(["passwd-service", "check", "--groups-file", "/tmp/group"]).unwrap();

        let Command::Check(args) = cli.command else {
            panic!("expected check");
        };
        assert_eq!(args.sources.groups_file, Some(PathBuf::from("/tmp/group")));
    }

    #[test]
    fn test_invalid_port_rejected() {
        assert!(Cli::try_parse_from(["passwd-service", "serve", "--port", "http"]).is_err());
    }

    #[test]
    fn test_source_args_override_config() {
        let mut config = AppConfig::default();
        let args = SourceArgs {
            users_file: None,
            groups_file: Some(PathBuf::from("/srv/group")),
        };

        args.apply(&mut config);

        assert_eq!(config.sources.users_file, PathBuf::from("/etc/passwd"));
        assert_eq!(config.sources.groups_file, PathBuf::from("/srv/group"));
    }
}
