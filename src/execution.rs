// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Execution-layer RPC client
//!
//! Wraps an Alloy provider behind the [`ExecutionApi`] trait and converts
//! RPC response types into the domain types the reward engine consumes.
//! Every call is bounded by a fixed deadline (5 seconds by default); a
//! deadline cancels only the individual call, never the whole request.

use std::future::IntoFuture;
use std::time::Duration;

use alloy_network::{Ethereum, TransactionResponse};
use alloy_primitives::{B256, TxHash};
use alloy_provider::{Provider, ProviderBuilder, RootProvider};
use alloy_rpc_client::ClientBuilder;
use alloy_rpc_types::{Block, BlockNumberOrTag, Transaction, TransactionTrait};
use async_trait::async_trait;
use url::Url;

use crate::errors::ExecutionApiError;
use crate::types::block::{BlockTransaction, ExecutionBlock, TxReceipt};

/// Default per-call deadline for execution RPC operations.
pub const DEFAULT_CALL_TIMEOUT: Duration = Duration::from_secs(5);

/// Read operations against the execution layer
///
/// The production implementation is [`EthClient`]; tests substitute a
/// mock.
#[async_trait]
pub trait ExecutionApi: Send + Sync {
    /// Fetch a block, with its full transaction list, by hash
    async fn block_by_hash(&self, hash: B256) -> Result<ExecutionBlock, ExecutionApiError>;

    /// Fetch a block, with its full transaction list, by number
    async fn block_by_number(&self, number: u64) -> Result<ExecutionBlock, ExecutionApiError>;

    /// Fetch the receipt for a transaction
    async fn transaction_receipt(&self, tx_hash: TxHash) -> Result<TxReceipt, ExecutionApiError>;
}

/// Execution RPC client over an Alloy provider
///
/// # Examples
///
/// ```rust,ignore
/// use slotscan::{EthClient, ExecutionApi};
/// use url::Url;
///
/// let client = EthClient::from_url(Url::parse("https://eth.llamarpc.com")?);
/// let block = client.block_by_number(19_992_375).await?;
/// ```
#[derive(Debug, Clone)]
pub struct EthClient<P> {
    provider: P,
    call_timeout: Duration,
}

impl EthClient<RootProvider<Ethereum>> {
    /// Create a client over a plain HTTP provider
    ///
    /// We disable recommended fillers to get a `RootProvider`: this client
    /// only reads, so nonce/gas fillers have nothing to do.
    pub fn from_url(url: Url) -> Self {
        let client = ClientBuilder::default().http(url);
        let provider = ProviderBuilder::new()
            .disable_recommended_fillers()
            .network::<Ethereum>()
            .connect_client(client);

        Self::new(provider)
    }
}

impl<P> EthClient<P> {
    /// Wrap an existing provider with the default 5-second call deadline
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            call_timeout: DEFAULT_CALL_TIMEOUT,
        }
    }

    /// Override the per-call deadline
    pub fn with_call_timeout(mut self, call_timeout: Duration) -> Self {
        self.call_timeout = call_timeout;
        self
    }

    /// Run `fut` under this client's deadline, mapping both timeout and
    /// RPC failure into [`ExecutionApiError`].
    async fn with_deadline<T, E, F>(
        &self,
        operation: &'static str,
        fut: F,
    ) -> Result<T, ExecutionApiError>
    where
        E: std::error::Error + Send + Sync + 'static,
        F: IntoFuture<Output = Result<T, E>>,
        F::IntoFuture: Send,
    {
        tokio::time::timeout(self.call_timeout, fut)
            .await
            .map_err(|_| ExecutionApiError::deadline_exceeded(operation))?
            .map_err(|e| ExecutionApiError::rpc(operation, e))
    }
}

fn convert_transaction(tx: Transaction) -> BlockTransaction {
    BlockTransaction {
        hash: tx.tx_hash(),
        from: tx.from(),
        to: tx.to(),
        value: tx.value(),
        gas_price: TransactionResponse::gas_price(&tx),
    }
}

fn convert_block(block: Block) -> ExecutionBlock {
    ExecutionBlock {
        number: block.header.number,
        fee_recipient: block.header.beneficiary,
        base_fee_per_gas: block.header.base_fee_per_gas.map(u128::from),
        gas_used: block.header.gas_used,
        transactions: block
            .transactions
            .into_transactions()
            .map(convert_transaction)
            .collect(),
    }
}

#[async_trait]
impl<P> ExecutionApi for EthClient<P>
where
    P: Provider<Ethereum>,
{
    async fn block_by_hash(&self, hash: B256) -> Result<ExecutionBlock, ExecutionApiError> {
        let block = self
            .with_deadline(
                "get_block_by_hash",
                self.provider.get_block_by_hash(hash).full(),
            )
            .await?
            .ok_or_else(|| ExecutionApiError::BlockNotFound {
                block_hash: format!("{hash:#x}"),
            })?;

        Ok(convert_block(block))
    }

    async fn block_by_number(&self, number: u64) -> Result<ExecutionBlock, ExecutionApiError> {
        let block = self
            .with_deadline(
                "get_block_by_number",
                self.provider
                    .get_block_by_number(BlockNumberOrTag::Number(number))
                    .full(),
            )
            .await?
            .ok_or(ExecutionApiError::BlockNumberNotFound {
                block_number: number,
            })?;

        Ok(convert_block(block))
    }

    async fn transaction_receipt(&self, tx_hash: TxHash) -> Result<TxReceipt, ExecutionApiError> {
        let receipt = self
            .with_deadline(
                "get_transaction_receipt",
                self.provider.get_transaction_receipt(tx_hash),
            )
            .await?
            .ok_or_else(|| ExecutionApiError::ReceiptNotFound {
                tx_hash: format!("{tx_hash:#x}"),
            })?;

        Ok(TxReceipt {
            transaction_hash: receipt.transaction_hash,
            gas_used: receipt.gas_used,
            effective_gas_price: receipt.effective_gas_price,
        })
    }
}
