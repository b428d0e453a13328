use {
    crate::config::Config,
    clap::Parser,
    colored::Colorize,
    ranker_deployment::{TargetContract, network::all_networks, report, resolve},
};

#[derive(Parser)]
pub struct ConfigsCmd {
    /// Contract whose configurations to list
    #[arg(long, default_value_t)]
    contract: TargetContract,
}

impl ConfigsCmd {
    pub fn run(self, network: String) -> anyhow::Result<()> {
        let registry = self.contract.registry();

        report::registry_table(&registry).printstd();

        match resolve(&network, &registry) {
            Ok(config) => println!(
                "Active network `{network}` {} (cross-chain id {})",
                "is configured".green(),
                config.cross_chain_id
            ),
            Err(_) => println!(
                "Active network `{network}` {} for {}",
                "has no configuration".yellow(),
                self.contract
            ),
        }

        Ok(())
    }
}

pub fn list_networks(cfg: &Config) -> anyhow::Result<()> {
    let networks = all_networks(&cfg.networks);

    report::networks_table(networks.iter().map(|(name, profile)| (name.as_str(), profile)))
        .printstd();

    Ok(())
}
