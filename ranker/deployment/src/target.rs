use {
    crate::ConfigRegistry,
    serde::{Deserialize, Serialize},
    std::{fmt, str::FromStr},
};

/// The contracts this tool knows how to deploy. Each comes with its own table
/// of supported networks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TargetContract {
    #[default]
    RankerDaoBridge,
    TestMessaging,
}

impl TargetContract {
    pub const ALL: [TargetContract; 2] = [Self::RankerDaoBridge, Self::TestMessaging];

    /// Name of the contract in the compiled artifacts.
    pub const fn contract_name(self) -> &'static str {
        match self {
            Self::RankerDaoBridge => "RankerDaoBridge",
            Self::TestMessaging => "TestMessaging",
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::RankerDaoBridge => "ranker-dao-bridge",
            Self::TestMessaging => "test-messaging",
        }
    }

    pub fn registry(self) -> ConfigRegistry {
        match self {
            Self::RankerDaoBridge => ConfigRegistry::ranker_dao_bridge(),
            Self::TestMessaging => ConfigRegistry::test_messaging(),
        }
    }
}

impl fmt::Display for TargetContract {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TargetContract {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|target| target.as_str() == s || target.contract_name() == s)
            .ok_or_else(|| {
                format!("unknown contract `{s}`, expected `ranker-dao-bridge` or `test-messaging`")
            })
    }
}

// ----------------------------------- tests -----------------------------------
