use {
    crate::{
        ChainClient, ConfigRegistry, ConfigurationNotFound, ContractArtifact, DeployError,
        DeploymentConfig, NoVerifier, VerificationRequest, Verifier, report, resolve_or_report,
    },
    alloy::{
        primitives::{Address, TxHash},
        signers::local::PrivateKeySigner,
    },
    std::fmt,
    tracing::{debug, error, info, warn},
};

/// The deployer is the second derived account. The first one is kept for
/// ownership and admin roles.
pub const DEFAULT_DEPLOYER_INDEX: usize = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeploymentSettings {
    /// Position of the deploying account in the signer list.
    pub deployer_index: usize,
    /// Number of blocks, counting the including one, to wait for.
    pub confirmations: u64,
    /// Native chain id the RPC must report. Unchecked if `None`.
    pub expected_chain_id: Option<u64>,
}

impl Default for DeploymentSettings {
    fn default() -> Self {
        Self {
            deployer_index: DEFAULT_DEPLOYER_INDEX,
            confirmations: 1,
            expected_chain_id: None,
        }
    }
}

/// Where a run stands.
///
/// `Idle → Resolved → SignerSelected → Submitted → Confirmed →
/// (Verified | VerificationSkipped | VerificationFailed) → Done`, or
/// `Idle → Aborted` when the network has no configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Idle,
    Resolved,
    SignerSelected,
    Submitted,
    Confirmed,
    Verified,
    VerificationSkipped,
    VerificationFailed,
    Done,
    Aborted,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerificationOutcome {
    /// Accepted by the explorer, which identifies the submission by `guid`.
    Verified { guid: String },
    Skipped,
    Failed { reason: String },
}

impl VerificationOutcome {
    pub fn state(&self) -> RunState {
        match self {
            VerificationOutcome::Verified { .. } => RunState::Verified,
            VerificationOutcome::Skipped => RunState::VerificationSkipped,
            VerificationOutcome::Failed { .. } => RunState::VerificationFailed,
        }
    }
}

impl fmt::Display for VerificationOutcome {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            VerificationOutcome::Verified { guid } => write!(f, "verified ({guid})"),
            VerificationOutcome::Skipped => write!(f, "skipped"),
            VerificationOutcome::Failed { reason } => write!(f, "failed: {reason}"),
        }
    }
}

/// A confirmed deployment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeploymentResult {
    pub network: String,
    pub cross_chain_id: u16,
    pub endpoint: Address,
    /// `<source>:<contract>`
    pub contract: String,
    pub deployer: Address,
    pub contract_address: Address,
    pub tx_hash: TxHash,
    pub block_number: Option<u64>,
    pub gas_used: u64,
    pub verification: VerificationOutcome,
    pub state: RunState,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// Nothing was deployed, as the network has no configuration.
    NotFound(ConfigurationNotFound),
    Deployed(DeploymentResult),
}

impl RunOutcome {
    pub fn state(&self) -> RunState {
        match self {
            RunOutcome::NotFound(_) => RunState::Aborted,
            RunOutcome::Deployed(result) => result.state,
        }
    }
}

/// Drives one contract deployment: pick the deployer, submit, wait for
/// confirmation, then optionally verify the source.
pub struct Orchestrator<C, V = NoVerifier> {
    chain: C,
    verifier: Option<V>,
    settings: DeploymentSettings,
}

impl<C> Orchestrator<C>
where
    C: ChainClient,
{
    pub fn new(chain: C, settings: DeploymentSettings) -> Self {
        Self {
            chain,
            verifier: None,
            settings,
        }
    }
}

impl<C, V> Orchestrator<C, V>
where
    C: ChainClient,
    V: Verifier,
{
    pub fn with_verifier<W>(self, verifier: W) -> Orchestrator<C, W>
    where
        W: Verifier,
    {
        self.with_optional_verifier(Some(verifier))
    }

    /// Verification is skipped when `verifier` is `None`.
    pub fn with_optional_verifier<W>(self, verifier: Option<W>) -> Orchestrator<C, W>
    where
        W: Verifier,
    {
        Orchestrator {
            chain: self.chain,
            verifier,
            settings: self.settings,
        }
    }

    pub fn settings(&self) -> &DeploymentSettings {
        &self.settings
    }

    pub fn chain(&self) -> &C {
        &self.chain
    }

    /// Resolve `active_network` against `registry` and deploy if it matches.
    ///
    /// An unknown network isn't an error: it's reported and nothing else
    /// happens.
    pub async fn run(
        &self,
        active_network: &str,
        registry: &ConfigRegistry,
        artifact: &ContractArtifact,
        signers: &[PrivateKeySigner],
    ) -> Result<RunOutcome, DeployError> {
        match resolve_or_report(active_network, registry) {
            Ok(config) => {
                let result = self.deploy(&config, artifact, signers).await?;
                Ok(RunOutcome::Deployed(result))
            },
            Err(not_found) => Ok(RunOutcome::NotFound(not_found)),
        }
    }

    /// Deploy `artifact` bound to the endpoint of an already resolved
    /// `config`.
    pub async fn deploy(
        &self,
        config: &DeploymentConfig,
        artifact: &ContractArtifact,
        signers: &[PrivateKeySigner],
    ) -> Result<DeploymentResult, DeployError> {
        let network = config.network_name;
        let contract = artifact.fully_qualified_name();
        let mut state = RunState::Resolved;

        let signer = self.select_signer(signers)?;
        let deployer = signer.address();
        advance(&mut state, RunState::SignerSelected);

        report::config_table(config, &artifact.contract_name, deployer).printstd();

        if let Some(expected) = self.settings.expected_chain_id {
            self.check_chain_id(network, expected).await?;
        }

        println!("Deploying {} to {network}...", artifact.contract_name);
        let submission = self
            .chain
            .submit_deployment(signer, artifact.deploy_code(config.endpoint_address))
            .await
            .map_err(|err| {
                error!(network, %deployer, %contract, "Deployment submission failed: {err}");
                DeployError::Submission {
                    contract: contract.clone(),
                    network: network.to_string(),
                    signer: deployer,
                    source: Box::new(err),
                }
            })?;
        advance(&mut state, RunState::Submitted);

        println!(
            "{} address: {} (tx hash: {})",
            artifact.contract_name, submission.contract_address, submission.tx_hash
        );
        info!(
            network,
            contract_address = %submission.contract_address,
            tx_hash = %submission.tx_hash,
            "Deployment submitted"
        );

        let confirmations = self.settings.confirmations.max(1);
        println!("Waiting for {confirmations} confirmation(s)...");
        let confirmation = self
            .chain
            .wait_for_confirmation(submission.tx_hash, confirmations)
            .await
            .map_err(|err| {
                error!(
                    network,
                    %deployer,
                    tx_hash = %submission.tx_hash,
                    "Lost track of the deployment transaction: {err}"
                );
                DeployError::Confirmation {
                    contract: contract.clone(),
                    network: network.to_string(),
                    signer: deployer,
                    tx_hash: submission.tx_hash,
                    source: Box::new(err),
                }
            })?;

        if !confirmation.success {
            return Err(DeployError::Reverted {
                contract,
                network: network.to_string(),
                tx_hash: submission.tx_hash,
            });
        }

        let contract_address = match confirmation.contract_address {
            Some(address) if address != submission.contract_address => {
                warn!(
                    expected = %submission.contract_address,
                    actual = %address,
                    "Receipt reports a different contract address"
                );
                address
            },
            Some(address) => address,
            None => submission.contract_address,
        };
        advance(&mut state, RunState::Confirmed);

        println!(
            "Done! {} confirmed in block {}",
            artifact.contract_name,
            confirmation
                .block_number
                .map_or_else(|| "?".to_string(), |n| n.to_string())
        );

        let verification = self
            .verify_source(VerificationRequest {
                network: network.to_string(),
                address: contract_address,
                contract: contract.clone(),
                constructor_args: artifact.constructor_args(config.endpoint_address),
                build_info: artifact.build_info.clone(),
            })
            .await;
        advance(&mut state, verification.state());
        advance(&mut state, RunState::Done);

        Ok(DeploymentResult {
            network: network.to_string(),
            cross_chain_id: config.cross_chain_id,
            endpoint: config.endpoint_address,
            contract,
            deployer,
            contract_address,
            tx_hash: submission.tx_hash,
            block_number: confirmation.block_number,
            gas_used: confirmation.gas_used,
            verification,
            state,
        })
    }

    fn select_signer<'a>(
        &self,
        signers: &'a [PrivateKeySigner],
    ) -> Result<&'a PrivateKeySigner, DeployError> {
        let index = self.settings.deployer_index;

        signers
            .get(index)
            .ok_or(DeployError::PreconditionViolated {
                index,
                available: signers.len(),
            })
    }

    async fn check_chain_id(&self, network: &str, expected: u64) -> Result<(), DeployError> {
        let actual = self
            .chain
            .chain_id()
            .await
            .map_err(|err| DeployError::ChainQuery {
                network: network.to_string(),
                source: Box::new(err),
            })?;

        if actual != expected {
            return Err(DeployError::ChainIdMismatch {
                network: network.to_string(),
                expected,
                actual,
            });
        }

        debug!(network, chain_id = actual, "Chain id matches");

        Ok(())
    }

    /// Never fails: the deployment is confirmed by now, whatever happens here.
    async fn verify_source(&self, request: VerificationRequest) -> VerificationOutcome {
        let Some(verifier) = &self.verifier else {
            info!("Verification disabled, skipping");
            return VerificationOutcome::Skipped;
        };

        println!("Verifying {} at {}...", request.contract, request.address);

        match verifier.verify(&request).await {
            Ok(guid) => {
                println!("Done! Verification submitted, guid: {guid}");
                VerificationOutcome::Verified { guid }
            },
            Err(err) => {
                warn!(
                    contract = %request.contract,
                    address = %request.address,
                    "Verification failed: {err}"
                );
                println!("Verification failed: {err}");
                VerificationOutcome::Failed {
                    reason: err.to_string(),
                }
            },
        }
    }
}

fn advance(state: &mut RunState, next: RunState) {
    debug!(from = ?state, to = ?next, "Deployment run state changed");
    *state = next;
}
