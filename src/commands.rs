use std::path::PathBuf;

use clap::{ArgAction, Parser};

use crate::config::{self, LoadedConfig};
use crate::execution_plan::ExecutionReport;
use crate::polkadots_error::{ConfigError, PolkadotsError};

pub mod cmd_apply;

#[derive(Debug, Parser)]
#[command(name = "polkadots")]
#[command(version)]
#[command(about = "Yet another dotfile manager", long_about = None)]
pub struct Cli {
    /// Increase output verbosity (-v for info, -vv for debug)
    #[arg(short = 'v', long, action = ArgAction::Count)]
    pub verbose: u8,
    /// Config to use rather than the default. Can be a directory
    #[arg(short = 'c', long, env = "POLKADOTS_CONFIG", value_name = "PATH")]
    pub config: Option<PathBuf>,
    /// Use the config-directory format (a dotfile_repo file next to config.json)
    #[arg(short = '2', long = "config2")]
    pub config2: bool,
    /// Load a profile from the profiles directory
    #[arg(
        short = 'p',
        long,
        env = "POLKADOTS_PROFILE",
        value_name = "PROFILE"
    )]
    pub profile: Option<String>,
    /// Don't execute any actions, only print the plan
    #[arg(short = 'd', long)]
    pub dry_run: bool,
    /// Atomically replace symlinks that point somewhere else
    #[arg(long)]
    pub relink: bool,
}

pub fn execute(cli: &Cli) -> Result<ExecutionReport, PolkadotsError> {
    let loaded = load_config(cli)?;
    Ok(cmd_apply::run(loaded, cli))
}

fn load_config(cli: &Cli) -> Result<LoadedConfig, ConfigError> {
    let path = match &cli.config {
        Some(path) => path.clone(),
        None => config::config_path(
            &config::default_base_dir()?,
            cli.profile.as_deref(),
            cli.config2,
        ),
    };
    log::info!("Loading config from {}", path.display());
    if cli.config2 {
        config::load_config_dir(&path)
    } else {
        config::load_json_config(&path)
    }
}
