// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Result types for slot reward queries

use serde::{Deserialize, Serialize};

use super::wei::{GweiAmount, WeiAmount};

/// The reward a block producer received for one slot
///
/// Wire field names (`status`, `blockReward`, `mevReward`) are fixed; they
/// are what existing consumers of the endpoint already parse.
///
/// # Examples
///
/// ```
/// use slotscan::{GweiAmount, RewardBreakdown};
///
/// let breakdown = RewardBreakdown {
///     mev: true,
///     block_reward: GweiAmount::new(113_757_939),
///     mev_reward: GweiAmount::new(105_971_629),
/// };
/// let json = serde_json::to_value(&breakdown).unwrap();
/// assert_eq!(json["status"], true);
/// assert_eq!(json["blockReward"], 113_757_939);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewardBreakdown {
    /// Whether the block was produced by a known MEV builder
    #[serde(rename = "status")]
    pub mev: bool,
    /// Net producer reward in gwei: tips minus burn plus any static subsidy
    #[serde(rename = "blockReward")]
    pub block_reward: GweiAmount,
    /// The MEV payment in gwei; zero when no qualifying payment was found
    #[serde(rename = "mevReward")]
    pub mev_reward: GweiAmount,
}

impl RewardBreakdown {
    /// An all-zero, non-MEV breakdown (the skipped-slot value)
    pub const fn zero() -> Self {
        Self {
            mev: false,
            block_reward: GweiAmount::ZERO,
            mev_reward: GweiAmount::ZERO,
        }
    }
}

/// Outcome of resolving a slot to a reward
///
/// A skipped slot is a legitimate, expected condition in a slot-based chain
/// (a missed proposal), distinct from any error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotStatus {
    /// The slot contains a block with the given reward breakdown
    Proposed(RewardBreakdown),
    /// No block was proposed for this slot
    Skipped,
}

impl SlotStatus {
    /// Returns true for a skipped slot
    pub fn is_skipped(&self) -> bool {
        matches!(self, Self::Skipped)
    }

    /// The breakdown for a proposed slot, or the zero breakdown for a
    /// skipped one
    pub fn breakdown(&self) -> RewardBreakdown {
        match self {
            Self::Proposed(breakdown) => *breakdown,
            Self::Skipped => RewardBreakdown::zero(),
        }
    }
}

/// Aggregate transaction fees for a block, with partial-failure accounting
///
/// `failed_lookups` counts transactions whose receipt could not be fetched;
/// each contributed zero to `total`. Callers can use it to distinguish a
/// fully accurate total from a degraded one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FeeTotal {
    /// Sum of `gas_used * effective_gas_price` across all transactions
    pub total: WeiAmount,
    /// Number of transactions whose receipt lookup failed
    pub failed_lookups: usize,
}

impl FeeTotal {
    /// True when at least one receipt lookup failed and the total
    /// understates the true fees
    pub fn is_degraded(&self) -> bool {
        self.failed_lookups > 0
    }
}
