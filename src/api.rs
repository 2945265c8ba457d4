// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! HTTP API surface
//!
//! Two read-only query endpoints plus a health probe:
//!
//! - `GET /blockreward/{slot}`: producer reward and MEV status for a slot
//! - `GET /syncduties/{slot}`: pubkeys with sync-committee duty for a slot
//! - `GET /health`
//!
//! Status mapping: a malformed or future slot is the caller's error (400),
//! a skipped slot is 404, and any upstream failure is 500. Internal error
//! detail is logged, never returned to the caller.

use std::collections::HashSet;
use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use tracing::error;

use crate::consensus::ConsensusApi;
use crate::duties::{pubkeys_on_duty, SyncDutiesService};
use crate::execution::ExecutionApi;
use crate::reward::RewardCalculator;
use crate::types::reward::{RewardBreakdown, SlotStatus};

/// Shared application state: the engine and its collaborators
pub struct AppState<C, E> {
    /// Reward computation engine
    pub calculator: RewardCalculator<C, E>,
    /// Sync-committee duty service
    pub duties: SyncDutiesService<C>,
    /// Consensus client, used directly for the head-slot guard
    pub consensus: Arc<C>,
}

/// Error body returned to callers: `{"msg": "..."}`
#[derive(Debug, Serialize)]
struct ErrorBody {
    msg: &'static str,
}

/// A caller-facing error with its transport status
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    msg: &'static str,
}

impl ApiError {
    fn bad_request(msg: &'static str) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            msg,
        }
    }

    fn not_found(msg: &'static str) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            msg,
        }
    }

    fn internal(msg: &'static str) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            msg,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(ErrorBody { msg: self.msg })).into_response()
    }
}

/// Build the application router over the given state
pub fn router<C, E>(state: Arc<AppState<C, E>>) -> Router
where
    C: ConsensusApi + 'static,
    E: ExecutionApi + 'static,
{
    Router::new()
        .route("/blockreward/{slot}", get(block_reward::<C, E>))
        .route("/syncduties/{slot}", get(sync_duties::<C, E>))
        .route("/health", get(health))
        .with_state(state)
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Parse the slot path segment; anything but a non-negative integer is the
/// caller's error.
fn parse_slot(raw: &str) -> Result<u64, ApiError> {
    raw.parse::<u64>()
        .map_err(|_| ApiError::bad_request("Invalid slot"))
}

async fn head_slot_guard<C: ConsensusApi>(consensus: &C) -> Result<u64, ApiError> {
    consensus.head_slot().await.map_err(|e| {
        error!(error = %e, "Could not resolve head slot");
        ApiError::internal("Could not get head slot")
    })
}

async fn block_reward<C, E>(
    State(state): State<Arc<AppState<C, E>>>,
    Path(slot): Path<String>,
) -> Result<Json<RewardBreakdown>, ApiError>
where
    C: ConsensusApi + 'static,
    E: ExecutionApi + 'static,
{
    let slot = parse_slot(&slot)?;

    let head_slot = head_slot_guard(state.consensus.as_ref()).await?;
    if slot > head_slot {
        return Err(ApiError::bad_request("Slot is in the future"));
    }

    match state.calculator.reward_for_slot(slot).await {
        Ok(SlotStatus::Proposed(breakdown)) => Ok(Json(breakdown)),
        Ok(SlotStatus::Skipped) => Err(ApiError::not_found("Slot does not exist or was skipped")),
        Err(e) => {
            error!(slot, error = %e, "Reward computation failed");
            Err(ApiError::internal("Could not get reward for slot"))
        }
    }
}

async fn sync_duties<C, E>(
    State(state): State<Arc<AppState<C, E>>>,
    Path(slot): Path<String>,
) -> Result<Json<Vec<String>>, ApiError>
where
    C: ConsensusApi + 'static,
    E: ExecutionApi + 'static,
{
    let slot = parse_slot(&slot)?;

    let head_slot = head_slot_guard(state.consensus.as_ref()).await?;

    // Committee and roster resolve as a concurrent pair.
    let (committee, roster) = tokio::join!(
        state.duties.committee_for_slot(slot),
        state.duties.roster_for_slot(slot)
    );

    let committee: HashSet<String> = committee.map_err(|e| {
        error!(slot, error = %e, "Sync committee lookup failed");
        ApiError::internal("Could not get sync committee for slot")
    })?;

    // An empty committee for a slot past the head means the slot does not
    // exist yet, not that nobody is on duty.
    if committee.is_empty() && slot > head_slot {
        return Err(ApiError::bad_request("Slot is too far in the future"));
    }

    let roster = roster.map_err(|e| {
        error!(slot, error = %e, "Validator roster lookup failed");
        ApiError::internal("Could not get validators for slot")
    })?;

    Ok(Json(pubkeys_on_duty(&committee, &roster)))
}
