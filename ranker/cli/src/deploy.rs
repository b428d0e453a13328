use {
    crate::{config::Config, project_directory::ProjectDirectory},
    anyhow::anyhow,
    clap::Parser,
    ranker_deployment::{
        AlloyChainClient, ContractArtifact, DeploymentSettings, EtherscanVerifier, Orchestrator,
        TargetContract, network::find_network, report, resolve_or_report,
        signers::{derive_signers, mnemonic_from_env},
    },
    std::env,
    tracing::info,
};

#[derive(Parser)]
pub struct DeployCmd {
    /// Contract to deploy
    #[arg(long, default_value_t)]
    contract: TargetContract,

    /// Submit the source to the network's explorer once deployed
    #[arg(long)]
    verify: bool,

    /// Fixed gas price in wei [default: estimated by the node]
    #[arg(long)]
    gas_price: Option<u64>,

    /// Blocks to wait for, counting the including one
    #[arg(long)]
    confirmations: Option<u64>,
}

impl DeployCmd {
    pub async fn run(self, dir: ProjectDirectory, cfg: Config, network: String) -> anyhow::Result<()> {
        let registry = self.contract.registry();

        // A network without configuration is reported, not failed. Nothing
        // below, the RPC profile included, is needed in that case.
        let Ok(config) = resolve_or_report(&network, &registry) else {
            return Ok(());
        };

        let profile = find_network(&network, &cfg.networks).ok_or_else(|| {
            anyhow!("no RPC endpoint known for network `{network}`; add it under `[networks.{network}]` in deploy.toml")
        })?;

        let artifact = ContractArtifact::load(&dir.artifacts_dir(), self.contract.contract_name())?;
        info!(contract = %artifact.contract_name, build_info = ?artifact.build_info, "Loaded artifact");

        let signers = derive_signers(&mnemonic_from_env(&network), cfg.deployment.accounts)?;

        let chain = AlloyChainClient::new(profile.url.parse()?)
            .with_gas_price(self.gas_price.or(cfg.deployment.gas_price).map(u128::from));

        let settings = DeploymentSettings {
            deployer_index: cfg.deployment.deployer_index,
            confirmations: self.confirmations.unwrap_or(cfg.deployment.confirmations),
            expected_chain_id: profile.chain_id,
        };

        // Set up verification before deploying, so that a missing API key
        // is caught while nothing is on chain yet.
        let verifier = if self.verify || cfg.verification.enabled {
            Some(EtherscanVerifier::for_network(
                &network,
                cfg.verification.api_url(&network),
                |key| env::var(key).ok(),
            )?)
        } else {
            None
        };

        let result = Orchestrator::new(chain, settings)
            .with_optional_verifier(verifier)
            .deploy(&config, &artifact, &signers)
            .await?;

        report::summary_table(&result).printstd();

        Ok(())
    }
}
