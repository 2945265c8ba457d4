// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Concurrent transaction-fee aggregation
//!
//! Sums `gas_used * effective_gas_price` across a block's transactions.
//! Receipts come from the shared receipt cache, falling back to the
//! execution client on a miss; fetched receipts are cached before the fee
//! is reported, so repeated queries for the same block only pay the
//! network cost once.
//!
//! Concurrency is throttled by batching: one in-flight lookup per
//! transaction within a batch of [`FEE_BATCH_SIZE`], and a strict barrier
//! between batches. The batch size bounds simultaneous RPC calls; it is a
//! throttle, not a correctness requirement, and the final sum is invariant
//! to completion order.

use std::sync::Arc;

use alloy_primitives::TxHash;
use futures::future::join_all;
use tracing::warn;

use crate::cache::SlotCache;
use crate::execution::ExecutionApi;
use crate::spans;
use crate::types::block::{BlockTransaction, TxReceipt};
use crate::types::reward::FeeTotal;
use crate::types::wei::WeiAmount;

/// Number of receipt lookups allowed in flight at once.
pub const FEE_BATCH_SIZE: usize = 10;

/// Aggregates transaction fees for a block with bounded concurrency
///
/// # Examples
///
/// ```rust,ignore
/// use slotscan::{FeeAggregator, SlotCache};
///
/// let aggregator = FeeAggregator::new(execution, Arc::new(SlotCache::new()));
/// let fees = aggregator.total_fees(&block.transactions).await;
/// if fees.is_degraded() {
///     eprintln!("{} receipts missing; total understated", fees.failed_lookups);
/// }
/// ```
#[derive(Debug)]
pub struct FeeAggregator<E> {
    execution: Arc<E>,
    receipt_cache: Arc<SlotCache<TxHash, TxReceipt>>,
    batch_size: usize,
}

impl<E> FeeAggregator<E>
where
    E: ExecutionApi,
{
    /// Create an aggregator sharing the given execution client and receipt
    /// cache
    pub fn new(execution: Arc<E>, receipt_cache: Arc<SlotCache<TxHash, TxReceipt>>) -> Self {
        Self {
            execution,
            receipt_cache,
            batch_size: FEE_BATCH_SIZE,
        }
    }

    /// Override the concurrency throttle (minimum 1)
    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size.max(1);
        self
    }

    /// Total fee paid across `transactions`
    ///
    /// A transaction whose receipt cannot be fetched contributes zero and
    /// is counted in [`FeeTotal::failed_lookups`]; the aggregation itself
    /// never fails.
    pub async fn total_fees(&self, transactions: &[BlockTransaction]) -> FeeTotal {
        let span = spans::total_fees(transactions.len());
        let _guard = span.enter();

        let mut total = WeiAmount::ZERO;
        let mut failed_lookups = 0;

        for batch in transactions.chunks(self.batch_size) {
            // One lookup per transaction in the batch; the join is a strict
            // barrier, so at most batch_size calls are ever in flight.
            let fees = join_all(batch.iter().map(|tx| self.transaction_fee(tx))).await;

            for fee in fees {
                match fee {
                    Some(fee) => total = total + fee,
                    None => failed_lookups += 1,
                }
            }
        }

        if failed_lookups > 0 {
            warn!(
                failed_lookups,
                transactions = transactions.len(),
                "Fee total is degraded: some receipt lookups failed and contributed zero"
            );
        }

        FeeTotal {
            total,
            failed_lookups,
        }
    }

    /// Fee for one transaction, `None` when its receipt lookup failed
    async fn transaction_fee(&self, tx: &BlockTransaction) -> Option<WeiAmount> {
        if let Some(receipt) = self.receipt_cache.get(&tx.hash) {
            return Some(receipt.fee());
        }

        match self.execution.transaction_receipt(tx.hash).await {
            Ok(receipt) => {
                self.receipt_cache.insert(tx.hash, receipt);
                Some(receipt.fee())
            }
            Err(e) => {
                warn!(
                    tx_hash = %tx.hash,
                    error = %e,
                    "Receipt lookup failed, counting zero fee for transaction"
                );
                None
            }
        }
    }
}
