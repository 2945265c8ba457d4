// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Strong types for native currency amounts
//!
//! This module provides newtype wrappers for wei- and gwei-denominated
//! values so reward arithmetic cannot silently mix the two denominations.

use alloy_primitives::U256;
use serde::{Deserialize, Serialize};
use std::ops::Add;

/// Number of wei per gwei (10^9).
const WEI_PER_GWEI: u64 = 1_000_000_000;

/// An amount of native currency (ETH) in wei
///
/// All intermediate reward arithmetic happens in wei; only the final,
/// caller-facing values are converted to gwei.
///
/// # Examples
///
/// ```
/// use alloy_primitives::U256;
/// use slotscan::WeiAmount;
///
/// let fee = WeiAmount::new(U256::from(21_000u64) * U256::from(30_000_000_000u64));
/// assert!(!fee.is_zero());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct WeiAmount(U256);

impl WeiAmount {
    /// Zero wei amount
    pub const ZERO: Self = Self(U256::ZERO);

    /// Create a new wei amount
    pub const fn new(wei: U256) -> Self {
        Self(wei)
    }

    /// Get the inner U256 value (in wei)
    pub const fn as_u256(&self) -> U256 {
        self.0
    }

    /// Check if the amount is zero
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Saturating subtraction; clamps at zero instead of wrapping.
    pub fn saturating_sub(self, rhs: Self) -> Self {
        Self(self.0.saturating_sub(rhs.0))
    }

    /// Convert to gwei using integer division, truncating any sub-gwei
    /// remainder
    ///
    /// Truncation is deliberate: downstream consumers are gwei-denominated
    /// and expect whole-number values.
    ///
    /// # Examples
    ///
    /// ```
    /// use alloy_primitives::U256;
    /// use slotscan::{GweiAmount, WeiAmount};
    ///
    /// let amount = WeiAmount::new(U256::from(5_999_999_999u64));
    /// assert_eq!(amount.to_gwei(), GweiAmount::new(5));
    /// ```
    pub fn to_gwei(&self) -> GweiAmount {
        let gwei = self.0 / U256::from(WEI_PER_GWEI);
        // A gwei value that overflows u128 would imply more ETH than exists;
        // saturate rather than panic.
        GweiAmount::new(gwei.try_into().unwrap_or(u128::MAX))
    }
}

impl From<u64> for WeiAmount {
    fn from(value: u64) -> Self {
        Self(U256::from(value))
    }
}

impl From<U256> for WeiAmount {
    fn from(value: U256) -> Self {
        Self(value)
    }
}

impl Add for WeiAmount {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0.saturating_add(rhs.0))
    }
}

impl std::fmt::Display for WeiAmount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} wei", self.0)
    }
}

/// An amount of native currency in gwei (10^9 wei)
///
/// This is the denomination of all caller-facing reward values. Serializes
/// as a bare JSON number.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default, Hash,
)]
#[serde(transparent)]
pub struct GweiAmount(u128);

impl GweiAmount {
    /// Zero gwei amount
    pub const ZERO: Self = Self(0);

    /// Create a new gwei amount
    pub const fn new(gwei: u128) -> Self {
        Self(gwei)
    }

    /// Get the inner value (in gwei)
    pub const fn as_u128(&self) -> u128 {
        self.0
    }

    /// Check if the amount is zero
    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl From<u64> for GweiAmount {
    fn from(value: u64) -> Self {
        Self(value as u128)
    }
}

impl std::fmt::Display for GweiAmount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} gwei", self.0)
    }
}
