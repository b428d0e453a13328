use {
    crate::{RegistryError, addresses},
    alloy::primitives::Address,
    std::borrow::Cow,
};

/// Parameters needed to deploy a contract bound to the LayerZero endpoint of
/// one network.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeploymentConfig {
    /// Name of the network, as selected with `--network`.
    pub network_name: &'static str,
    /// LayerZero chain id of the network.
    pub cross_chain_id: u16,
    /// The endpoint contract passed to the deployed contract's constructor.
    pub endpoint_address: Address,
}

impl DeploymentConfig {
    pub const fn new(
        network_name: &'static str,
        cross_chain_id: u16,
        endpoint_address: Address,
    ) -> Self {
        Self {
            network_name,
            cross_chain_id,
            endpoint_address,
        }
    }
}

/// Networks the `RankerDaoBridge` contract can be deployed to.
pub const RANKER_DAO_BRIDGE: &[DeploymentConfig] = &[
    DeploymentConfig::new(
        "goerli",
        addresses::goerli::LZ_CHAIN_ID,
        addresses::goerli::LZ_ENDPOINT,
    ),
    DeploymentConfig::new(
        "bscTestnet",
        addresses::bsc_testnet::LZ_CHAIN_ID,
        addresses::bsc_testnet::LZ_ENDPOINT,
    ),
    DeploymentConfig::new(
        "polygonMumbai",
        addresses::polygon_mumbai::LZ_CHAIN_ID,
        addresses::polygon_mumbai::LZ_ENDPOINT,
    ),
    DeploymentConfig::new(
        "avalancheFujiTestnet",
        addresses::avalanche_fuji::LZ_CHAIN_ID,
        addresses::avalanche_fuji::LZ_ENDPOINT,
    ),
    DeploymentConfig::new(
        "arbitrumGoerli",
        addresses::arbitrum_goerli::LZ_CHAIN_ID,
        addresses::arbitrum_goerli::LZ_ENDPOINT,
    ),
    DeploymentConfig::new(
        "moonbaseAlpha",
        addresses::moonbase_alpha::LZ_CHAIN_ID,
        addresses::moonbase_alpha::LZ_ENDPOINT,
    ),
];

/// Networks the `TestMessaging` contract can be deployed to.
pub const TEST_MESSAGING: &[DeploymentConfig] = &[
    DeploymentConfig::new(
        "goerli",
        addresses::goerli::LZ_CHAIN_ID,
        addresses::goerli::LZ_ENDPOINT,
    ),
    DeploymentConfig::new(
        "bsc-testnet",
        addresses::bsc_testnet::LZ_CHAIN_ID,
        addresses::bsc_testnet::LZ_ENDPOINT,
    ),
];

const _: () = assert!(
    has_valid_entries(RANKER_DAO_BRIDGE),
    "`RANKER_DAO_BRIDGE` has a duplicate network name or a zero chain id"
);

const _: () = assert!(
    has_valid_entries(TEST_MESSAGING),
    "`TEST_MESSAGING` has a duplicate network name or a zero chain id"
);

/// An immutable, ordered table of deployment configs, keyed by network name.
///
/// Network names are unique: the built-in tables are checked at compile time,
/// and [`ConfigRegistry::new`] rejects duplicates at runtime.
#[derive(Debug, Clone)]
pub struct ConfigRegistry {
    entries: Cow<'static, [DeploymentConfig]>,
}

impl ConfigRegistry {
    pub fn new<I>(entries: I) -> Result<Self, RegistryError>
    where
        I: IntoIterator<Item = DeploymentConfig>,
    {
        let entries = entries.into_iter().collect::<Vec<_>>();

        for (index, entry) in entries.iter().enumerate() {
            if entry.cross_chain_id == 0 {
                return Err(RegistryError::ZeroChainId {
                    network: entry.network_name.to_string(),
                });
            }

            if entries[..index]
                .iter()
                .any(|other| other.network_name == entry.network_name)
            {
                return Err(RegistryError::DuplicateNetwork {
                    network: entry.network_name.to_string(),
                });
            }
        }

        Ok(Self {
            entries: Cow::Owned(entries),
        })
    }

    /// Wrap one of the compile-time checked tables.
    pub const fn from_static(entries: &'static [DeploymentConfig]) -> Self {
        Self {
            entries: Cow::Borrowed(entries),
        }
    }

    pub fn ranker_dao_bridge() -> Self {
        Self::from_static(RANKER_DAO_BRIDGE)
    }

    pub fn test_messaging() -> Self {
        Self::from_static(TEST_MESSAGING)
    }

    pub fn get(&self, network_name: &str) -> Option<&DeploymentConfig> {
        self.entries
            .iter()
            .find(|entry| entry.network_name == network_name)
    }

    pub fn entries(&self) -> &[DeploymentConfig] {
        &self.entries
    }

    pub fn network_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|entry| entry.network_name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

const fn str_eq(a: &str, b: &str) -> bool {
    let (a, b) = (a.as_bytes(), b.as_bytes());

    if a.len() != b.len() {
        return false;
    }

    let mut i = 0;
    while i < a.len() {
        if a[i] != b[i] {
            return false;
        }
        i += 1;
    }

    true
}

const fn has_valid_entries(entries: &[DeploymentConfig]) -> bool {
    let mut i = 0;
    while i < entries.len() {
        if entries[i].cross_chain_id == 0 {
            return false;
        }

        let mut j = i + 1;
        while j < entries.len() {
            if str_eq(entries[i].network_name, entries[j].network_name) {
                return false;
            }
            j += 1;
        }

        i += 1;
    }

    true
}

// ----------------------------------- tests -----------------------------------

#[cfg(test)]
mod tests {
    use {super::*, alloy::primitives::address, assertor::*};

    const ENDPOINT: Address = address!("bfD2135BFfbb0B5378b56643c2Df8a87552Bfa23");

    #[test]
    fn builtin_tables_keep_declaration_order() {
        let names = ConfigRegistry::ranker_dao_bridge()
            .network_names()
            .collect::<Vec<_>>();

        assert_that!(names).contains_exactly_in_order(vec![
            "goerli",
            "bscTestnet",
            "polygonMumbai",
            "avalancheFujiTestnet",
            "arbitrumGoerli",
            "moonbaseAlpha",
        ]);

        let names = ConfigRegistry::test_messaging()
            .network_names()
            .collect::<Vec<_>>();

        assert_that!(names).contains_exactly_in_order(vec!["goerli", "bsc-testnet"]);
    }

    #[test]
    fn builtin_tables_are_valid() {
        assert!(has_valid_entries(RANKER_DAO_BRIDGE));
        assert!(has_valid_entries(TEST_MESSAGING));
    }

    #[test]
    fn duplicate_network_is_rejected() {
        let result = ConfigRegistry::new([
            DeploymentConfig::new("goerli", 10121, ENDPOINT),
            DeploymentConfig::new("fuji", 10106, ENDPOINT),
            DeploymentConfig::new("goerli", 10999, Address::ZERO),
        ]);

        assert!(matches!(
            result,
            Err(RegistryError::DuplicateNetwork { network }) if network == "goerli"
        ));
    }

    #[test]
    fn names_differing_in_case_are_distinct() {
        let registry = ConfigRegistry::new([
            DeploymentConfig::new("goerli", 10121, ENDPOINT),
            DeploymentConfig::new("Goerli", 10121, ENDPOINT),
        ])
        .unwrap();

        assert_that!(registry.len()).is_equal_to(2);
    }

    #[test]
    fn zero_chain_id_is_rejected() {
        let result = ConfigRegistry::new([DeploymentConfig::new("goerli", 0, ENDPOINT)]);

        assert!(matches!(result, Err(RegistryError::ZeroChainId { .. })));
    }

    #[test]
    fn const_validation_catches_duplicates() {
        const DUPLICATED: &[DeploymentConfig] = &[
            DeploymentConfig::new("goerli", 10121, ENDPOINT),
            DeploymentConfig::new("goerli", 10121, ENDPOINT),
        ];

        assert!(!has_valid_entries(DUPLICATED));
        assert!(!str_eq("goerli", "goerlj"));
        assert!(str_eq("bsc-testnet", "bsc-testnet"));
    }

    #[test]
    fn get_returns_registered_values() {
        let registry = ConfigRegistry::ranker_dao_bridge();

        let config = registry.get("moonbaseAlpha").unwrap();

        assert_that!(config.cross_chain_id).is_equal_to(10126);
        assert_that!(config.endpoint_address)
            .is_equal_to(address!("b23b28012ee92E8dE39DEb57Af31722223034747"));
        assert!(registry.get("moonbase").is_none());
    }
}
