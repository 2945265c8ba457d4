//! Error types for execution-layer RPC operations.
//!
//! This module provides error types for block and receipt retrieval from an
//! execution client. Every call carries a fixed deadline, so a dedicated
//! timeout variant exists alongside the usual transport failures.

/// Errors that can occur during execution-layer RPC operations.
///
/// # Examples
///
/// ```rust,ignore
/// use slotscan::{EthClient, ExecutionApiError};
///
/// match client.transaction_receipt(tx_hash).await {
///     Ok(receipt) => println!("gas used: {}", receipt.gas_used),
///     Err(ExecutionApiError::DeadlineExceeded { operation }) => {
///         eprintln!("{operation} timed out");
///     }
///     Err(e) => eprintln!("Other error: {}", e),
/// }
/// ```
#[derive(Debug, thiserror::Error)]
pub enum ExecutionApiError {
    /// The RPC call itself failed (network error, provider downtime, or a
    /// provider-side error response).
    #[error("Execution RPC call failed during {operation}")]
    Rpc {
        /// Description of the operation that failed
        operation: String,
        /// The underlying provider error
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The call did not complete within its deadline.
    ///
    /// Deadlines cancel only the individual call; sibling lookups proceed.
    #[error("Execution RPC call exceeded its deadline during {operation}")]
    DeadlineExceeded {
        /// Description of the operation that timed out
        operation: String,
    },

    /// Block was not found for the given hash.
    ///
    /// This is distinct from an RPC failure: the call succeeded but the
    /// provider has no block under that hash.
    #[error("Block not found: {block_hash}")]
    BlockNotFound {
        /// The block hash that wasn't found
        block_hash: String,
    },

    /// Block was not found at the given number.
    #[error("Block not found: {block_number}")]
    BlockNumberNotFound {
        /// The block number that wasn't found
        block_number: u64,
    },

    /// Receipt was not found for a transaction.
    #[error("Receipt not found for transaction: {tx_hash}")]
    ReceiptNotFound {
        /// The transaction hash whose receipt wasn't found
        tx_hash: String,
    },
}

impl ExecutionApiError {
    /// Helper to create an `Rpc` error from any error type.
    pub fn rpc(
        operation: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        ExecutionApiError::Rpc {
            operation: operation.into(),
            source: Box::new(source),
        }
    }

    /// Helper to create a `DeadlineExceeded` error.
    pub fn deadline_exceeded(operation: impl Into<String>) -> Self {
        ExecutionApiError::DeadlineExceeded {
            operation: operation.into(),
        }
    }
}
