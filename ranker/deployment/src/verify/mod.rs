use {
    alloy::primitives::{Address, Bytes},
    async_trait::async_trait,
    std::{convert::Infallible, path::PathBuf},
};

mod etherscan;

pub use etherscan::*;

/// Everything an explorer needs to match deployed bytecode with its source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationRequest {
    pub network: String,
    pub address: Address,
    /// `<source>:<contract>`
    pub contract: String,
    pub constructor_args: Bytes,
    pub build_info: Option<PathBuf>,
}

#[async_trait]
pub trait Verifier {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Submit the contract's source for verification. Returns an identifier
    /// of the submission as given by the service.
    async fn verify(&self, request: &VerificationRequest) -> Result<String, Self::Error>;
}

/// Stand-in verifier type for orchestrators with verification disabled.
/// Cannot be constructed.
#[derive(Debug, Clone, Copy)]
pub enum NoVerifier {}

#[async_trait]
impl Verifier for NoVerifier {
    type Error = Infallible;

    async fn verify(&self, _request: &VerificationRequest) -> Result<String, Self::Error> {
        match *self {}
    }
}
