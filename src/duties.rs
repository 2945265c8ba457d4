// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Sync-committee duty lookups
//!
//! Resolves which validators hold sync-committee duty for a slot. This is
//! a thin layer: two cache-checked beacon lookups (the committee's
//! validator indices and the full validator roster for the slot's state)
//! joined by pure set membership to translate indices into public keys.
//!
//! The committee and roster fetches for one request run as exactly two
//! concurrent tasks, joined before the cross-reference proceeds.

use std::collections::HashSet;
use std::sync::Arc;

use crate::cache::SlotCache;
use crate::consensus::{ConsensusApi, ValidatorInfo};
use crate::errors::ConsensusApiError;
use crate::spans;

/// Translate a committee's validator indices into public keys via the
/// roster: pure set membership plus a join, preserving roster order
pub fn pubkeys_on_duty(committee: &HashSet<String>, roster: &[ValidatorInfo]) -> Vec<String> {
    roster
        .iter()
        .filter(|validator| committee.contains(&validator.index))
        .map(|validator| validator.pubkey.clone())
        .collect()
}

/// Looks up sync-committee duties per slot, caching per-slot results
///
/// A committee or roster for a finalized slot never changes, so both
/// caches hold their entries for the lifetime of the process.
///
/// Note: an upstream "committee not found" is cached as an empty set,
/// indistinguishable from a (hypothetical) empty committee. Callers that
/// care combine the empty set with a head-slot check.
#[derive(Debug)]
pub struct SyncDutiesService<C> {
    consensus: Arc<C>,
    committee_cache: Arc<SlotCache<u64, HashSet<String>>>,
    roster_cache: Arc<SlotCache<u64, Vec<ValidatorInfo>>>,
}

impl<C> SyncDutiesService<C>
where
    C: ConsensusApi,
{
    /// Create a service over the given consensus client and caches
    pub fn new(
        consensus: Arc<C>,
        committee_cache: Arc<SlotCache<u64, HashSet<String>>>,
        roster_cache: Arc<SlotCache<u64, Vec<ValidatorInfo>>>,
    ) -> Self {
        Self {
            consensus,
            committee_cache,
            roster_cache,
        }
    }

    /// Public keys of the validators with sync-committee duty in `slot`
    pub async fn duties_for_slot(&self, slot: u64) -> Result<Vec<String>, ConsensusApiError> {
        let span = spans::duties_for_slot(slot);
        let _guard = span.enter();

        let (committee, roster) = tokio::join!(
            self.committee_for_slot(slot),
            self.roster_for_slot(slot)
        );
        let (committee, roster) = (committee?, roster?);

        Ok(pubkeys_on_duty(&committee, &roster))
    }

    /// Validator indices of the sync committee for `slot`
    ///
    /// An upstream not-found yields (and caches) an empty set.
    pub async fn committee_for_slot(
        &self,
        slot: u64,
    ) -> Result<HashSet<String>, ConsensusApiError> {
        if let Some(committee) = self.committee_cache.get(&slot) {
            return Ok(committee);
        }

        let committee: HashSet<String> =
            self.consensus.sync_committee(slot).await?.into_iter().collect();
        self.committee_cache.insert(slot, committee.clone());

        Ok(committee)
    }

    /// Full validator roster for the state at `slot`
    pub async fn roster_for_slot(
        &self,
        slot: u64,
    ) -> Result<Vec<ValidatorInfo>, ConsensusApiError> {
        if let Some(roster) = self.roster_cache.get(&slot) {
            return Ok(roster);
        }

        let roster = self.consensus.validators(slot).await?;
        self.roster_cache.insert(slot, roster.clone());

        Ok(roster)
    }
}
