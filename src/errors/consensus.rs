//! Error types for consensus-layer (beacon) REST operations.
//!
//! This module provides error types for the beacon API client. A skipped
//! slot is deliberately NOT an error (the client models it as a distinct
//! outcome), so every variant here represents a genuine upstream failure.

/// Errors that can occur when querying the consensus-layer REST API.
///
/// This error type captures transport failures, unexpected response shapes,
/// and non-404 error statuses embedded in beacon API response bodies.
///
/// # Examples
///
/// ```rust,ignore
/// use slotscan::{BeaconClient, ConsensusApiError};
///
/// match client.head_slot().await {
///     Ok(slot) => println!("head at {slot}"),
///     Err(ConsensusApiError::Transport { operation, .. }) => {
///         eprintln!("beacon node unreachable during {operation}");
///     }
///     Err(e) => eprintln!("Other error: {}", e),
/// }
/// ```
#[derive(Debug, thiserror::Error)]
pub enum ConsensusApiError {
    /// The HTTP request to the beacon node failed.
    ///
    /// This covers connection failures, DNS errors, and any other
    /// transport-level problem.
    #[error("Beacon API request failed during {operation}")]
    Transport {
        /// Description of the operation that failed (e.g., "head slot")
        operation: String,
        /// The underlying HTTP client error
        #[source]
        source: reqwest::Error,
    },

    /// The response body did not match the expected schema.
    ///
    /// This occurs when the beacon node returns a payload that decodes
    /// neither as the expected data shape nor as an embedded error body.
    #[error("Unexpected beacon API response shape for {operation}: {details}")]
    UnexpectedShape {
        /// Description of the operation whose response failed to decode
        operation: String,
        /// Details about the decode failure
        details: String,
    },

    /// The beacon node reported an error status in its response body.
    ///
    /// Embedded 404s are handled by the client as not-found outcomes and
    /// never reach this variant.
    #[error("Beacon API returned status {code} for {operation}: {message}")]
    ErrorStatus {
        /// Description of the operation
        operation: String,
        /// The status code embedded in the response body
        code: u16,
        /// The message embedded in the response body
        message: String,
    },
}

impl ConsensusApiError {
    /// Helper to create a `Transport` error.
    pub fn transport(operation: impl Into<String>, source: reqwest::Error) -> Self {
        ConsensusApiError::Transport {
            operation: operation.into(),
            source,
        }
    }

    /// Helper to create an `UnexpectedShape` error.
    pub fn unexpected_shape(operation: impl Into<String>, details: impl Into<String>) -> Self {
        ConsensusApiError::UnexpectedShape {
            operation: operation.into(),
            details: details.into(),
        }
    }
}
