// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Consensus-layer (beacon) REST client
//!
//! Wraps the four beacon API endpoints slotscan consumes behind the
//! [`ConsensusApi`] trait: head block, block by slot, sync committees by
//! state, and validator roster by state. Each response is decoded into an
//! explicit schema struct per endpoint, so a malformed payload surfaces as
//! a single typed error instead of a runtime fault deep in a handler.
//!
//! The beacon API reports "not found" as a `{code, message}` body rather
//! than only an HTTP status. For block-by-slot lookups an embedded 404 is
//! a first-class outcome (a skipped slot, normal in a slot-based chain)
//! and is never treated as an error here.

use alloy_primitives::B256;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::debug;
use url::Url;

use crate::errors::ConsensusApiError;

/// Outcome of resolving a slot to an execution block hash
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotLookup {
    /// The slot contains a block with the given execution payload hash
    Proposed(B256),
    /// The slot was skipped; no block was proposed
    Missed,
}

/// A validator as returned by the roster endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidatorInfo {
    /// Validator index, decimal string as the beacon API renders it
    pub index: String,
    /// BLS public key, `0x`-prefixed hex
    pub pubkey: String,
}

/// Read operations against the consensus layer
///
/// The production implementation is [`BeaconClient`]; tests substitute a
/// mock. Consumers are generic over the trait, no object safety needed.
#[async_trait]
pub trait ConsensusApi: Send + Sync {
    /// Slot number of the canonical chain head
    async fn head_slot(&self) -> Result<u64, ConsensusApiError>;

    /// Execution block hash for a slot, or [`SlotLookup::Missed`] when the
    /// slot was skipped
    async fn block_hash_for_slot(&self, slot: u64) -> Result<SlotLookup, ConsensusApiError>;

    /// Validator indices holding sync-committee duty for the state at
    /// `slot`
    ///
    /// An upstream not-found yields an empty list. The empty list is also
    /// what an (hypothetical) empty committee would return; the two are
    /// deliberately not distinguished.
    async fn sync_committee(&self, slot: u64) -> Result<Vec<String>, ConsensusApiError>;

    /// Full validator roster for the state at `slot`
    async fn validators(&self, slot: u64) -> Result<Vec<ValidatorInfo>, ConsensusApiError>;
}

/// Either the expected payload of an endpoint or an embedded error body.
///
/// The beacon API embeds error statuses in the response body; decoding
/// tries the success shape first, then the error shape.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum BeaconResponse<T> {
    Data(T),
    Error(BeaconErrorBody),
}

/// Error body of a failed beacon API call: `{"code": 404, "message": ...}`
#[derive(Debug, Deserialize)]
struct BeaconErrorBody {
    code: u16,
    #[serde(default)]
    message: String,
}

#[derive(Debug, Deserialize)]
struct HeadEnvelope {
    data: HeadData,
}

#[derive(Debug, Deserialize)]
struct HeadData {
    message: HeadMessage,
}

#[derive(Debug, Deserialize)]
struct HeadMessage {
    slot: String,
}

#[derive(Debug, Deserialize)]
struct BlockEnvelope {
    data: BlockData,
}

#[derive(Debug, Deserialize)]
struct BlockData {
    message: BlockMessage,
}

#[derive(Debug, Deserialize)]
struct BlockMessage {
    body: BlockBody,
}

#[derive(Debug, Deserialize)]
struct BlockBody {
    execution_payload: ExecutionPayload,
}

#[derive(Debug, Deserialize)]
struct ExecutionPayload {
    block_hash: B256,
}

#[derive(Debug, Deserialize)]
struct SyncCommitteesEnvelope {
    data: SyncCommitteesData,
}

#[derive(Debug, Deserialize)]
struct SyncCommitteesData {
    validators: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct ValidatorsEnvelope {
    data: Vec<ValidatorRecord>,
}

#[derive(Debug, Deserialize)]
struct ValidatorRecord {
    index: String,
    validator: ValidatorKeys,
}

#[derive(Debug, Deserialize)]
struct ValidatorKeys {
    pubkey: String,
}

/// HTTP client for a beacon node's REST API
///
/// # Examples
///
/// ```rust,ignore
/// use slotscan::{BeaconClient, ConsensusApi};
/// use url::Url;
///
/// let client = BeaconClient::new(Url::parse("http://localhost:5052")?);
/// let head = client.head_slot().await?;
/// ```
#[derive(Debug, Clone)]
pub struct BeaconClient {
    http: reqwest::Client,
    base_url: Url,
}

impl BeaconClient {
    /// Create a client for the beacon node at `base_url`
    pub fn new(base_url: Url) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{path}", self.base_url.as_str().trim_end_matches('/'))
    }

    /// Fetch `path` and decode it as either `T` or an embedded error body.
    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        operation: &'static str,
    ) -> Result<BeaconResponse<T>, ConsensusApiError> {
        let url = self.endpoint(path);
        debug!(url = %url, operation, "Beacon API request");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| ConsensusApiError::transport(operation, e))?;

        let payload = response
            .bytes()
            .await
            .map_err(|e| ConsensusApiError::transport(operation, e))?;

        serde_json::from_slice(&payload)
            .map_err(|e| ConsensusApiError::unexpected_shape(operation, e.to_string()))
    }
}

#[async_trait]
impl ConsensusApi for BeaconClient {
    async fn head_slot(&self) -> Result<u64, ConsensusApiError> {
        const OPERATION: &str = "head slot";

        let envelope: HeadEnvelope = match self
            .get_json("eth/v2/beacon/blocks/head", OPERATION)
            .await?
        {
            BeaconResponse::Data(envelope) => envelope,
            BeaconResponse::Error(body) => {
                return Err(ConsensusApiError::ErrorStatus {
                    operation: OPERATION.to_string(),
                    code: body.code,
                    message: body.message,
                });
            }
        };

        envelope.data.message.slot.parse::<u64>().map_err(|e| {
            ConsensusApiError::unexpected_shape(OPERATION, format!("non-numeric slot: {e}"))
        })
    }

    async fn block_hash_for_slot(&self, slot: u64) -> Result<SlotLookup, ConsensusApiError> {
        const OPERATION: &str = "block by slot";

        let path = format!("eth/v2/beacon/blocks/{slot}");
        match self.get_json::<BlockEnvelope>(&path, OPERATION).await? {
            BeaconResponse::Data(envelope) => Ok(SlotLookup::Proposed(
                envelope.data.message.body.execution_payload.block_hash,
            )),
            // An embedded 404 means the slot was skipped, not that the
            // call failed.
            BeaconResponse::Error(body) if body.code == 404 => Ok(SlotLookup::Missed),
            BeaconResponse::Error(body) => Err(ConsensusApiError::ErrorStatus {
                operation: OPERATION.to_string(),
                code: body.code,
                message: body.message,
            }),
        }
    }

    async fn sync_committee(&self, slot: u64) -> Result<Vec<String>, ConsensusApiError> {
        const OPERATION: &str = "sync committees";

        let path = format!("eth/v1/beacon/states/{slot}/sync_committees");
        match self
            .get_json::<SyncCommitteesEnvelope>(&path, OPERATION)
            .await?
        {
            BeaconResponse::Data(envelope) => Ok(envelope.data.validators),
            BeaconResponse::Error(body) if body.code == 404 => Ok(Vec::new()),
            BeaconResponse::Error(body) => Err(ConsensusApiError::ErrorStatus {
                operation: OPERATION.to_string(),
                code: body.code,
                message: body.message,
            }),
        }
    }

    async fn validators(&self, slot: u64) -> Result<Vec<ValidatorInfo>, ConsensusApiError> {
        const OPERATION: &str = "validator roster";

        let path = format!("eth/v1/beacon/states/{slot}/validators");
        match self
            .get_json::<ValidatorsEnvelope>(&path, OPERATION)
            .await?
        {
            BeaconResponse::Data(envelope) => Ok(envelope
                .data
                .into_iter()
                .map(|record| ValidatorInfo {
                    index: record.index,
                    pubkey: record.validator.pubkey,
                })
                .collect()),
            BeaconResponse::Error(body) => Err(ConsensusApiError::ErrorStatus {
                operation: OPERATION.to_string(),
                code: body.code,
                message: body.message,
            }),
        }
    }
}
