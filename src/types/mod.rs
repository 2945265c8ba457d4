// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Strong types for type safety across slotscan.
//!
//! This module provides the domain model shared by the reward engine and
//! its collaborators:
//! - Wei and gwei amounts
//! - Execution-layer blocks, transactions, and receipts
//! - Reward results and fee aggregation totals

pub mod block;
pub mod reward;
pub mod wei;

// Note: Public types are re-exported from lib.rs, not here
