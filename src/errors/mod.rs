//! Error types for the slotscan library.
//!
//! This module provides strongly-typed errors for all public APIs in
//! slotscan. It follows a hybrid approach:
//!
//! - **Module-specific errors** for fine-grained error handling
//!   (`ConsensusApiError`, `ExecutionApiError`, etc.)
//! - **Unified error type** ([`SlotscanError`]) for convenience when you
//!   don't need to distinguish between error sources
//!
//! # Architecture
//!
//! Each collaborator has its own error type:
//! - [`ConsensusApiError`] - Errors from the beacon REST client
//! - [`ExecutionApiError`] - Errors from the execution RPC client
//! - [`RewardError`] - Errors from reward computation (wraps the above)
//! - [`BuilderRegistryError`] - Fatal startup errors loading the registry
//!
//! Two conditions are intentionally NOT errors anywhere in this hierarchy:
//! a skipped slot (a first-class outcome) and a single failed receipt
//! lookup during fee aggregation (logged, counted, and zero-substituted).

mod consensus;
mod execution;
mod registry;
mod reward;

pub use consensus::ConsensusApiError;
pub use execution::ExecutionApiError;
pub use registry::BuilderRegistryError;
pub use reward::RewardError;

/// Unified error type for all slotscan operations.
///
/// This enum wraps all module-specific error types, providing a convenient
/// way to handle errors when you don't need to distinguish between sources.
/// All module-specific error types automatically convert via `From`, so `?`
/// propagates naturally.
#[derive(Debug, thiserror::Error)]
pub enum SlotscanError {
    /// Error from the consensus-layer REST client.
    #[error("Consensus API error: {0}")]
    Consensus(#[from] ConsensusApiError),

    /// Error from the execution-layer RPC client.
    #[error("Execution API error: {0}")]
    Execution(#[from] ExecutionApiError),

    /// Error from reward computation.
    #[error("Reward computation error: {0}")]
    Reward(#[from] RewardError),

    /// Error loading the builder registry.
    #[error("Builder registry error: {0}")]
    Registry(#[from] BuilderRegistryError),
}
