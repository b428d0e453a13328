use {
    crate::ChainError,
    alloy::{
        network::{EthereumWallet, TransactionBuilder},
        primitives::{Address, Bytes, TxHash},
        providers::{PendingTransactionBuilder, Provider, ProviderBuilder},
        rpc::types::TransactionRequest,
        signers::local::PrivateKeySigner,
    },
    async_trait::async_trait,
    tracing::debug,
    url::Url,
};

/// A deployment transaction accepted by the node, not yet confirmed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Submission {
    pub tx_hash: TxHash,
    /// Address the contract is created at, derived from the sender and nonce.
    pub contract_address: Address,
}

/// A transaction included in a block with the requested depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Confirmation {
    pub tx_hash: TxHash,
    pub block_number: Option<u64>,
    pub gas_used: u64,
    /// `false` if the creation reverted.
    pub success: bool,
    /// Contract address as reported by the receipt.
    pub contract_address: Option<Address>,
}

/// The node-facing side of a deployment.
#[async_trait]
pub trait ChainClient {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Native chain id reported by the node.
    async fn chain_id(&self) -> Result<u64, Self::Error>;

    /// Sign and send a contract creation transaction carrying `code`.
    ///
    /// Returns as soon as the node accepts the transaction.
    async fn submit_deployment(
        &self,
        signer: &PrivateKeySigner,
        code: Bytes,
    ) -> Result<Submission, Self::Error>;

    /// Wait until `tx_hash` is included with `confirmations` blocks on top of
    /// (and including) its block. Imposes no deadline of its own.
    async fn wait_for_confirmation(
        &self,
        tx_hash: TxHash,
        confirmations: u64,
    ) -> Result<Confirmation, Self::Error>;
}

/// [`ChainClient`] talking JSON-RPC over HTTP.
#[derive(Debug, Clone)]
pub struct AlloyChainClient {
    rpc_url: Url,
    /// Fixed legacy gas price in wei. Left to the node when unset.
    gas_price: Option<u128>,
}

impl AlloyChainClient {
    pub fn new(rpc_url: Url) -> Self {
        Self {
            rpc_url,
            gas_price: None,
        }
    }

    pub fn with_gas_price(mut self, gas_price: Option<u128>) -> Self {
        self.gas_price = gas_price;
        self
    }

    pub fn rpc_url(&self) -> &Url {
        &self.rpc_url
    }
}

#[async_trait]
impl ChainClient for AlloyChainClient {
    type Error = ChainError;

    async fn chain_id(&self) -> Result<u64, Self::Error> {
        let provider = ProviderBuilder::new().connect_http(self.rpc_url.clone());

        Ok(provider.get_chain_id().await?)
    }

    async fn submit_deployment(
        &self,
        signer: &PrivateKeySigner,
        code: Bytes,
    ) -> Result<Submission, Self::Error> {
        let from = signer.address();

        let provider = ProviderBuilder::new()
            .wallet(EthereumWallet::new(signer.clone()))
            .connect_http(self.rpc_url.clone());

        // Pin the nonce so the contract address is known before inclusion.
        // Counted at `pending`, so transactions still in the mempool aren't
        // replaced.
        let nonce = provider.get_transaction_count(from).pending().await?;
        debug!(%from, nonce, "Fetched deployer nonce");

        let mut tx = TransactionRequest::default()
            .with_from(from)
            .with_nonce(nonce)
            .with_deploy_code(code);

        if let Some(gas_price) = self.gas_price {
            tx = tx.with_gas_price(gas_price);
        }

        let pending = provider.send_transaction(tx).await?;

        Ok(Submission {
            tx_hash: *pending.tx_hash(),
            contract_address: from.create(nonce),
        })
    }

    async fn wait_for_confirmation(
        &self,
        tx_hash: TxHash,
        confirmations: u64,
    ) -> Result<Confirmation, Self::Error> {
        let provider = ProviderBuilder::new().connect_http(self.rpc_url.clone());

        let receipt = PendingTransactionBuilder::new(provider.root().clone(), tx_hash)
            .with_required_confirmations(confirmations)
            .with_timeout(None)
            .get_receipt()
            .await?;

        Ok(Confirmation {
            tx_hash: receipt.transaction_hash,
            block_number: receipt.block_number,
            gas_used: receipt.gas_used,
            success: receipt.status(),
            contract_address: receipt.contract_address,
        })
    }
}

// ----------------------------------- tests -----------------------------------
