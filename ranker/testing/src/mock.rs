use {
    alloy::{
        primitives::{Address, Bytes, TxHash, address},
        signers::local::PrivateKeySigner,
    },
    async_trait::async_trait,
    ranker_deployment::{
        ChainClient, Confirmation, ContractArtifact, Submission, VerificationRequest, Verifier,
    },
    std::sync::{Arc, Mutex},
};

/// Address of the first contract deployed by the first account of the
/// default mnemonic on a fresh dev chain.
pub const MOCK_CONTRACT_ADDRESS: Address = address!("5FbDB2315678afecb367f032d93F642f64180aa3");

pub const MOCK_CHAIN_ID: u64 = 31337;

/// A call received by one of the mocks, in the order received.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    ChainId,
    Submit { from: Address, code: Bytes },
    Wait { tx_hash: TxHash, confirmations: u64 },
    Verify { address: Address, contract: String },
}

impl Call {
    /// Whether the call touches the chain, as opposed to reading from it or
    /// talking to an explorer.
    pub fn is_on_chain(&self) -> bool {
        matches!(self, Call::Submit { .. } | Call::Wait { .. })
    }
}

/// Shared between a chain mock and a verifier mock, so that the relative
/// order of their calls can be checked.
#[derive(Debug, Clone, Default)]
pub struct CallLog(Arc<Mutex<Vec<Call>>>);

impl CallLog {
    pub fn record(&self, call: Call) {
        self.0.lock().unwrap().push(call);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.0.lock().unwrap().clone()
    }

    pub fn on_chain_calls(&self) -> usize {
        self.calls().iter().filter(|call| call.is_on_chain()).count()
    }

    /// Position of the first call matching `predicate`.
    pub fn position<F>(&self, predicate: F) -> Option<usize>
    where
        F: Fn(&Call) -> bool,
    {
        self.calls().iter().position(predicate)
    }
}

#[derive(Debug, thiserror::Error)]
#[error("mock failure: {0}")]
pub struct MockError(pub String);

/// Where [`MockChainClient`] should go wrong.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ChainFailure {
    #[default]
    Never,
    /// The node rejects the transaction.
    Submit,
    /// Waiting for the receipt errors out.
    Wait,
    /// The transaction is included but reverts.
    Revert,
}

#[derive(Debug, Clone)]
pub struct MockChainClient {
    log: CallLog,
    chain_id: u64,
    contract_address: Address,
    /// Address the receipt reports, if it differs from `contract_address`.
    receipt_address: Option<Address>,
    tx_hash: TxHash,
    failure: ChainFailure,
}

impl Default for MockChainClient {
    fn default() -> Self {
        Self::new()
    }
}

impl MockChainClient {
    pub fn new() -> Self {
        Self {
            log: CallLog::default(),
            chain_id: MOCK_CHAIN_ID,
            contract_address: MOCK_CONTRACT_ADDRESS,
            receipt_address: None,
            tx_hash: TxHash::repeat_byte(0x11),
            failure: ChainFailure::Never,
        }
    }

    pub fn with_call_log(mut self, log: CallLog) -> Self {
        self.log = log;
        self
    }

    pub fn with_chain_id(mut self, chain_id: u64) -> Self {
        self.chain_id = chain_id;
        self
    }

    pub fn with_contract_address(mut self, contract_address: Address) -> Self {
        self.contract_address = contract_address;
        self
    }

    /// Make the receipt disagree with the address computed at submission.
    pub fn with_receipt_address(mut self, receipt_address: Address) -> Self {
        self.receipt_address = Some(receipt_address);
        self
    }

    pub fn failing_on(mut self, failure: ChainFailure) -> Self {
        self.failure = failure;
        self
    }

    pub fn call_log(&self) -> &CallLog {
        &self.log
    }

    pub fn tx_hash(&self) -> TxHash {
        self.tx_hash
    }
}

#[async_trait]
impl ChainClient for MockChainClient {
    type Error = MockError;

    async fn chain_id(&self) -> Result<u64, Self::Error> {
        self.log.record(Call::ChainId);

        Ok(self.chain_id)
    }

    async fn submit_deployment(
        &self,
        signer: &PrivateKeySigner,
        code: Bytes,
    ) -> Result<Submission, Self::Error> {
        self.log.record(Call::Submit {
            from: signer.address(),
            code,
        });

        if self.failure == ChainFailure::Submit {
            return Err(MockError("insufficient funds for gas * price + value".to_string()));
        }

        Ok(Submission {
            tx_hash: self.tx_hash,
            contract_address: self.contract_address,
        })
    }

    async fn wait_for_confirmation(
        &self,
        tx_hash: TxHash,
        confirmations: u64,
    ) -> Result<Confirmation, Self::Error> {
        self.log.record(Call::Wait {
            tx_hash,
            confirmations,
        });

        if self.failure == ChainFailure::Wait {
            return Err(MockError("connection reset by peer".to_string()));
        }

        Ok(Confirmation {
            tx_hash,
            block_number: Some(1),
            gas_used: 1_234_567,
            success: self.failure != ChainFailure::Revert,
            contract_address: Some(self.receipt_address.unwrap_or(self.contract_address)),
        })
    }
}

#[derive(Debug, Clone)]
pub struct MockVerifier {
    log: CallLog,
    outcome: Result<String, String>,
}

impl MockVerifier {
    pub fn succeeding(guid: &str) -> Self {
        Self {
            log: CallLog::default(),
            outcome: Ok(guid.to_string()),
        }
    }

    pub fn failing(reason: &str) -> Self {
        Self {
            log: CallLog::default(),
            outcome: Err(reason.to_string()),
        }
    }

    pub fn with_call_log(mut self, log: CallLog) -> Self {
        self.log = log;
        self
    }

    pub fn call_log(&self) -> &CallLog {
        &self.log
    }
}

#[async_trait]
impl Verifier for MockVerifier {
    type Error = MockError;

    async fn verify(&self, request: &VerificationRequest) -> Result<String, Self::Error> {
        self.log.record(Call::Verify {
            address: request.address,
            contract: request.contract.clone(),
        });

        self.outcome.clone().map_err(MockError)
    }
}

/// A minimal artifact of a contract whose constructor takes the endpoint.
pub fn mock_artifact(contract_name: &str) -> ContractArtifact {
    let json = format!(
        r#"{{
            "contractName": "{contract_name}",
            "sourceName": "contracts/{contract_name}.sol",
            "abi": [
                {{
                    "type": "constructor",
                    "stateMutability": "nonpayable",
                    "inputs": [{{ "name": "_endpoint", "type": "address", "internalType": "address" }}]
                }}
            ],
            "bytecode": "0x6080604052348015600f57600080fd5b50"
        }}"#
    );

    ContractArtifact::from_json(&json).unwrap()
}
