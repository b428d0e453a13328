use {
    serde::{Deserialize, Serialize},
    std::collections::BTreeMap,
};

/// How to reach an EVM network.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkProfile {
    pub url: String,
    /// Native chain id. When set, it's checked against the RPC before anything
    /// is submitted.
    #[serde(default)]
    pub chain_id: Option<u64>,
}

impl NetworkProfile {
    fn new(url: &str, chain_id: Option<u64>) -> Self {
        Self {
            url: url.to_string(),
            chain_id,
        }
    }
}

/// Networks known without any configuration.
///
/// Includes both the dashed names used by the RPC table and the camel-cased
/// names used by the endpoint tables, since either may be selected.
pub fn builtin_networks() -> BTreeMap<&'static str, NetworkProfile> {
    [
        ("ganache", NetworkProfile::new("http://127.0.0.1:7545", None)),
        // public infura endpoint
        (
            "ethereum",
            NetworkProfile::new(
                "https://mainnet.infura.io/v3/9aa3d95b3bc440fa88ea12eaa4456161",
                Some(1),
            ),
        ),
        ("bsc", NetworkProfile::new("https://bsc-dataseed1.binance.org", Some(56))),
        (
            "avalanche",
            NetworkProfile::new("https://api.avax.network/ext/bc/C/rpc", Some(43114)),
        ),
        ("polygon", NetworkProfile::new("https://rpc-mainnet.maticvigil.com", Some(137))),
        ("arbitrum", NetworkProfile::new("https://arb1.arbitrum.io/rpc", Some(42161))),
        ("optimism", NetworkProfile::new("https://mainnet.optimism.io", Some(10))),
        ("fantom", NetworkProfile::new("https://rpcapi.fantom.network", Some(250))),
        ("metis", NetworkProfile::new("https://andromeda.metis.io/?owner=1088", Some(1088))),
        // public infura endpoint
        (
            "goerli",
            NetworkProfile::new(
                "https://goerli.infura.io/v3/9aa3d95b3bc440fa88ea12eaa4456161",
                Some(5),
            ),
        ),
        (
            "bsc-testnet",
            NetworkProfile::new("https://data-seed-prebsc-1-s1.binance.org:8545/", Some(97)),
        ),
        (
            "bscTestnet",
            NetworkProfile::new("https://data-seed-prebsc-1-s1.binance.org:8545/", Some(97)),
        ),
        (
            "fuji",
            NetworkProfile::new("https://api.avax-test.network/ext/bc/C/rpc", Some(43113)),
        ),
        (
            "avalancheFujiTestnet",
            NetworkProfile::new("https://api.avax-test.network/ext/bc/C/rpc", Some(43113)),
        ),
        ("mumbai", NetworkProfile::new("https://rpc-mumbai.maticvigil.com/", Some(80001))),
        (
            "polygonMumbai",
            NetworkProfile::new("https://rpc-mumbai.maticvigil.com/", Some(80001)),
        ),
        (
            "arbitrum-goerli",
            NetworkProfile::new("https://goerli-rollup.arbitrum.io/rpc/", Some(421613)),
        ),
        (
            "arbitrumGoerli",
            NetworkProfile::new("https://goerli-rollup.arbitrum.io/rpc/", Some(421613)),
        ),
        ("optimism-goerli", NetworkProfile::new("https://goerli.optimism.io/", Some(420))),
        (
            "fantom-testnet",
            NetworkProfile::new("https://rpc.ankr.com/fantom_testnet", Some(4002)),
        ),
        (
            "moonbaseAlpha",
            NetworkProfile::new("https://rpc.api.moonbase.moonbeam.network", Some(1287)),
        ),
    ]
    .into_iter()
    .collect()
}

/// Look up a network, preferring `overrides` (typically from the config file)
/// over the built-in table.
///
/// Override keys may have been lowercased by the config loader, so they also
/// match case-insensitively.
pub fn find_network(
    name: &str,
    overrides: &BTreeMap<String, NetworkProfile>,
) -> Option<NetworkProfile> {
    overrides
        .get(name)
        .or_else(|| {
            overrides
                .iter()
                .find(|(key, _)| key.eq_ignore_ascii_case(name))
                .map(|(_, profile)| profile)
        })
        .cloned()
        .or_else(|| builtin_networks().remove(name))
}

/// Built-in networks with `overrides` applied, keyed by name.
pub fn all_networks(overrides: &BTreeMap<String, NetworkProfile>) -> BTreeMap<String, NetworkProfile> {
    let mut networks = builtin_networks()
        .into_iter()
        .map(|(name, profile)| (name.to_string(), profile))
        .collect::<BTreeMap<_, _>>();

    networks.extend(overrides.clone());
    networks
}

// ----------------------------------- tests -----------------------------------
