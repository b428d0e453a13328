use {
    crate::config::Config,
    clap::Parser,
    ranker_deployment::{
        report,
        signers::{derive_signers, mnemonic_from_env},
    },
};

#[derive(Parser)]
pub struct AccountsCmd {
    /// Number of accounts to derive [default: `deployment.accounts` from the config]
    #[arg(long)]
    count: Option<usize>,
}

impl AccountsCmd {
    pub fn run(self, cfg: Config, network: String) -> anyhow::Result<()> {
        let count = self.count.unwrap_or(cfg.deployment.accounts);
        let signers = derive_signers(&mnemonic_from_env(&network), count)?;

        println!("Accounts for network `{network}`:");
        report::accounts_table(&signers, cfg.deployment.deployer_index).printstd();

        Ok(())
    }
}
