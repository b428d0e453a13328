mod accounts;
mod config;
mod deploy;
mod list;
mod project_directory;
mod tracing_filter;

use {
    crate::{
        accounts::AccountsCmd,
        config::{CONFIG_ENV_PREFIX, Config},
        deploy::DeployCmd,
        list::{ConfigsCmd, list_networks},
        project_directory::ProjectDirectory,
        tracing_filter::CustomLevelFilter,
    },
    clap::Parser,
    colored::Colorize,
    config_parser::parse_config,
    std::{path::PathBuf, process::ExitCode},
    tracing_subscriber::{fmt, prelude::*, registry},
};

#[derive(Parser)]
#[command(author, version, about, next_display_order = None)]
struct Cli {
    /// Hardhat project holding the artifacts, `deploy.toml` and `.env` [default: current directory]
    #[arg(long, global = true)]
    project: Option<PathBuf>,

    /// Network to act on [default: `network` from the config]
    #[arg(long, global = true)]
    network: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Deploy a contract bound to the network's messaging endpoint
    Deploy(DeployCmd),

    /// List the accounts derived from the network's mnemonic
    Accounts(AccountsCmd),

    /// List the networks a contract can be deployed to
    Configs(ConfigsCmd),

    /// List the networks with a known RPC endpoint
    Networks,
}

#[tokio::main]
async fn main() -> ExitCode {
    // Parse CLI arguments.
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{err:#}");
            eprintln!("{} {err:#}", "Error:".red().bold());
            ExitCode::FAILURE
        },
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    // Find the project directory from the CLI `--project` flag.
    let dir = ProjectDirectory::new_or_default(cli.project)?;

    // Load secrets from `.env`, if there is one.
    if let Err(err) = dotenvy::from_path(dir.env_file()) {
        if !err.not_found() {
            return Err(err.into());
        }
    }

    // Parse the config file.
    let cfg: Config = parse_config(dir.config_file(), CONFIG_ENV_PREFIX)?;

    // Set up tracing.
    registry()
        .with(cfg.log_level.parse::<CustomLevelFilter>()?)
        .with(fmt::layer())
        .init();

    let network = cli.network.unwrap_or_else(|| cfg.network.clone());
    tracing::debug!(root = %dir.root().display(), %network, "Loaded project");

    match cli.command {
        Command::Deploy(cmd) => cmd.run(dir, cfg, network).await,
        Command::Accounts(cmd) => cmd.run(cfg, network),
        Command::Configs(cmd) => cmd.run(network),
        Command::Networks => list_networks(&cfg),
    }
}

#[cfg(test)]
mod tests {
    use {super::*, clap::CommandFactory};

    #[test]
    fn cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_follow_the_subcommand() {
        let cli = Cli::try_parse_from([
            "ranker-deploy",
            "deploy",
            "--contract",
            "test-messaging",
            "--network",
            "bsc-testnet",
            "--verify",
        ])
        .unwrap();

        assert_eq!(cli.network.as_deref(), Some("bsc-testnet"));
        assert!(matches!(cli.command, Command::Deploy(_)));
    }
}
