//! OpenTelemetry span creation helpers for slotscan operations.
//!
//! This module provides span creation functions following an orthogonal design pattern
//! where telemetry concerns are separated from business logic. Instead of using
//! `#[instrument]` attributes directly on functions, each instrumented operation has
//! a corresponding span helper function in this module.
//!
//! Usage pattern:
//! ```rust,ignore
//! pub async fn my_operation(&self, param: Type) -> Result<T> {
//!     let span = spans::my_operation(param_value);
//!     let _guard = span.enter();
//!     // Business logic here
//! }
//! ```

use tracing::Span;

/// Create span for computing the reward for a slot.
///
/// This is the main public API entry point for reward queries.
///
/// Parent: None (root span for this operation)
/// Children: total_fees span, RPC calls for slot and block resolution
#[inline]
pub(crate) fn reward_for_slot(slot: u64) -> Span {
    tracing::info_span!("slotscan.reward_for_slot", slot = slot,)
}

/// Create span for aggregating transaction fees over a block.
///
/// Parent: reward_for_slot span
/// Children: receipt lookups (one per transaction)
#[inline]
pub(crate) fn total_fees(transaction_count: usize) -> Span {
    tracing::debug_span!(
        "slotscan.total_fees",
        transaction_count = transaction_count,
    )
}

/// Create span for resolving sync-committee duties for a slot.
///
/// Parent: None (root span for this operation)
/// Children: committee and roster lookups (joined pair)
#[inline]
pub(crate) fn duties_for_slot(slot: u64) -> Span {
    tracing::info_span!("slotscan.duties_for_slot", slot = slot,)
}
