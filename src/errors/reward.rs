//! Error types for reward computation.

use super::{ConsensusApiError, ExecutionApiError};

/// Errors that can occur while computing the reward for a slot.
///
/// Both variants are upstream failures surfaced by a collaborator; the
/// engine adds no failure modes of its own. A skipped slot is not an error
/// and is reported through [`SlotStatus::Skipped`](crate::SlotStatus)
/// instead.
#[derive(Debug, thiserror::Error)]
pub enum RewardError {
    /// The consensus client failed while resolving the slot.
    #[error("Consensus API error: {0}")]
    Consensus(#[from] ConsensusApiError),

    /// The execution client failed while fetching the block.
    #[error("Execution API error: {0}")]
    Execution(#[from] ExecutionApiError),
}
