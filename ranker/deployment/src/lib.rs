/// LayerZero endpoint contracts and chain ids, per network.
///
/// Cross-chain ids are the messaging protocol's own numbering, not the
/// networks' native EVM chain ids.
pub mod addresses {
    pub mod goerli {
        use alloy::primitives::{Address, address};

        pub const LZ_CHAIN_ID: u16 = 10121;
        pub const LZ_ENDPOINT: Address = address!("bfD2135BFfbb0B5378b56643c2Df8a87552Bfa23");
    }

    pub mod bsc_testnet {
        use alloy::primitives::{Address, address};

        pub const LZ_CHAIN_ID: u16 = 10102;
        pub const LZ_ENDPOINT: Address = address!("6Fcb97553D41516Cb228ac03FdC8B9a0a9df04A1");
    }

    pub mod polygon_mumbai {
        use alloy::primitives::{Address, address};

        pub const LZ_CHAIN_ID: u16 = 10109;
        pub const LZ_ENDPOINT: Address = address!("f69186dfBa60DdB133E91E9A4B5673624293d8F8");
    }

    pub mod avalanche_fuji {
        use alloy::primitives::{Address, address};

        pub const LZ_CHAIN_ID: u16 = 10106;
        pub const LZ_ENDPOINT: Address = address!("93f54D755A063cE7bB9e6Ac47Eccc8e33411d706");
    }

    pub mod arbitrum_goerli {
        use alloy::primitives::{Address, address};

        pub const LZ_CHAIN_ID: u16 = 10143;
        pub const LZ_ENDPOINT: Address = address!("6aB5Ae6822647046626e83ee6dB8187151E1d5ab");
    }

    pub mod moonbase_alpha {
        use alloy::primitives::{Address, address};

        pub const LZ_CHAIN_ID: u16 = 10126;
        pub const LZ_ENDPOINT: Address = address!("b23b28012ee92E8dE39DEb57Af31722223034747");
    }
}

pub mod artifact;
pub mod chain;
mod error;
pub mod network;
pub mod orchestrator;
pub mod registry;
pub mod report;
pub mod resolver;
pub mod signers;
pub mod target;
pub mod verify;

pub use {
    artifact::ContractArtifact,
    chain::{AlloyChainClient, ChainClient, Confirmation, Submission},
    error::*,
    network::NetworkProfile,
    orchestrator::{
        DeploymentResult, DeploymentSettings, Orchestrator, RunOutcome, RunState,
        VerificationOutcome,
    },
    registry::{ConfigRegistry, DeploymentConfig},
    resolver::{ConfigurationNotFound, resolve, resolve_or_report},
    target::TargetContract,
    verify::{EtherscanVerifier, NoVerifier, VerificationRequest, Verifier},
};
