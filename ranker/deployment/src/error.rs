use {
    alloy::primitives::{Address, TxHash},
    std::path::PathBuf,
    thiserror::Error,
};

pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("network `{network}` is registered more than once")]
    DuplicateNetwork { network: String },

    #[error("network `{network}` has a zero cross-chain id")]
    ZeroChainId { network: String },
}

#[derive(Debug, Error)]
pub enum ArtifactError {
    #[error("failed to read artifact `{path}`")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse artifact `{path}`")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("artifact of `{contract}` has no creation bytecode; is it abstract?")]
    EmptyBytecode { contract: String },

    #[error("constructor of `{contract}` must take a single `address`, found ({found})")]
    UnexpectedConstructor { contract: String, found: String },

    #[error("no build-info recorded for `{contract}`")]
    MissingBuildInfo { contract: String },
}

#[derive(Debug, Error)]
pub enum SignerError {
    #[error(transparent)]
    Local(#[from] alloy::signers::local::LocalSignerError),

    #[error("at least one account must be derived from the mnemonic")]
    NoAccounts,
}

#[derive(Debug, Error)]
pub enum ChainError {
    #[error(transparent)]
    Transport(#[from] alloy::transports::TransportError),

    #[error(transparent)]
    PendingTransaction(#[from] alloy::providers::PendingTransactionError),
}

#[derive(Debug, Error)]
pub enum VerifyError {
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error(transparent)]
    Artifact(#[from] ArtifactError),

    #[error(transparent)]
    Url(#[from] url::ParseError),

    #[error("no verification API known for network `{network}`")]
    UnsupportedNetwork { network: String },

    #[error("verification API key for `{network}` not set; export `{env}`")]
    MissingApiKey { network: String, env: String },

    #[error("verification rejected: {message}: {result}")]
    Rejected { message: String, result: String },
}

#[derive(Debug, Error)]
pub enum DeployError {
    #[error("deployer is signer #{index} but only {available} signer(s) are available")]
    PreconditionViolated { index: usize, available: usize },

    #[error("failed to query the chain id of `{network}`")]
    ChainQuery {
        network: String,
        #[source]
        source: BoxError,
    },

    #[error("network `{network}` reports chain id {actual}, expected {expected}")]
    ChainIdMismatch {
        network: String,
        expected: u64,
        actual: u64,
    },

    #[error("failed to deploy `{contract}` to `{network}` from {signer}")]
    Submission {
        contract: String,
        network: String,
        signer: Address,
        #[source]
        source: BoxError,
    },

    #[error(
        "lost track of deployment tx {tx_hash} of `{contract}` on `{network}` (sent by {signer}); its outcome is unknown, check the chain before re-running"
    )]
    Confirmation {
        contract: String,
        network: String,
        signer: Address,
        tx_hash: TxHash,
        #[source]
        source: BoxError,
    },

    #[error("deployment tx {tx_hash} of `{contract}` on `{network}` reverted")]
    Reverted {
        contract: String,
        network: String,
        tx_hash: TxHash,
    },
}
