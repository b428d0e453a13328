use {
    ranker_deployment::{NetworkProfile, orchestrator::DEFAULT_DEPLOYER_INDEX, signers::DEFAULT_ACCOUNTS},
    serde::{Deserialize, Serialize},
    std::collections::BTreeMap,
};

/// Prefix of environment variables overriding the config file, e.g.
/// `RANKER__DEPLOYMENT__CONFIRMATIONS=3`.
pub const CONFIG_ENV_PREFIX: &str = "RANKER";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    pub log_level: String,
    /// Network used when `--network` isn't given.
    pub network: String,
    pub deployment: DeployConfig,
    pub verification: VerificationConfig,
    /// RPC profiles, added to or replacing the built-in ones.
    pub networks: BTreeMap<String, NetworkProfile>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            network: "ganache".to_string(),
            deployment: DeployConfig::default(),
            verification: VerificationConfig::default(),
            networks: BTreeMap::new(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct DeployConfig {
    pub deployer_index: usize,
    pub confirmations: u64,
    /// Number of accounts derived from the mnemonic.
    pub accounts: usize,
    /// Fixed gas price in wei.
    pub gas_price: Option<u64>,
}

impl Default for DeployConfig {
    fn default() -> Self {
        Self {
            deployer_index: DEFAULT_DEPLOYER_INDEX,
            confirmations: 1,
            accounts: DEFAULT_ACCOUNTS,
            gas_price: None,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct VerificationConfig {
    pub enabled: bool,
    /// Explorer API endpoints by network, for networks without a built-in one.
    pub api_urls: BTreeMap<String, String>,
}

impl VerificationConfig {
    pub fn api_url(&self, network: &str) -> Option<&str> {
        self.api_urls
            .get(network)
            .or_else(|| {
                self.api_urls
                    .iter()
                    .find(|(key, _)| key.eq_ignore_ascii_case(network))
                    .map(|(_, url)| url)
            })
            .map(String::as_str)
    }
}
