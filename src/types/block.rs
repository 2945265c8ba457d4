// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Domain types for execution-layer chain data
//!
//! These are the minimal projections of upstream RPC responses that the
//! reward engine needs; the chain clients convert at their boundary. All
//! values are immutable once fetched: they describe finalized history.

use alloy_primitives::{Address, TxHash, U256};

use super::wei::WeiAmount;

/// An execution-layer block with its full transaction list
///
/// Owned transiently by the request that fetched it; never cached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionBlock {
    /// Block number
    pub number: u64,
    /// Coinbase / fee recipient of the block
    pub fee_recipient: Address,
    /// Base fee per gas in wei; `None` for blocks that predate the London
    /// fee-market upgrade
    pub base_fee_per_gas: Option<u128>,
    /// Total gas used by the block
    pub gas_used: u64,
    /// Transactions in block order
    pub transactions: Vec<BlockTransaction>,
}

/// A single transaction as included in a block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockTransaction {
    /// Transaction hash
    pub hash: TxHash,
    /// Sender address
    pub from: Address,
    /// Recipient address; `None` for contract creation
    pub to: Option<Address>,
    /// Transferred value in wei
    pub value: U256,
    /// Gas price in wei; `None` for EIP-1559 transactions without an
    /// explicit price
    pub gas_price: Option<u128>,
}

/// The fee-relevant fields of a transaction receipt
///
/// One per transaction, keyed by transaction hash. A receipt for a finalized
/// transaction never changes, so cached receipts are valid for the lifetime
/// of the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TxReceipt {
    /// Hash of the transaction this receipt belongs to
    pub transaction_hash: TxHash,
    /// Gas consumed by the transaction
    pub gas_used: u64,
    /// Effective price paid per gas unit, in wei
    pub effective_gas_price: u128,
}

impl TxReceipt {
    /// Total fee paid for this transaction: `gas_used * effective_gas_price`
    pub fn fee(&self) -> WeiAmount {
        WeiAmount::new(U256::from(self.gas_used).saturating_mul(U256::from(
            self.effective_gas_price,
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_receipt_fee_is_gas_times_price() {
        let receipt = TxReceipt {
            transaction_hash: TxHash::ZERO,
            gas_used: 21_000,
            effective_gas_price: 30_000_000_000,
        };
        assert_eq!(
            receipt.fee(),
            WeiAmount::new(U256::from(630_000_000_000_000u64))
        );
    }

    #[test]
    fn test_receipt_fee_zero_gas() {
        let receipt = TxReceipt {
            transaction_hash: TxHash::ZERO,
            gas_used: 0,
            effective_gas_price: 30_000_000_000,
        };
        assert!(receipt.fee().is_zero());
    }
}
