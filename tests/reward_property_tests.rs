// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Property-based tests for reward arithmetic

mod helpers;

use std::sync::Arc;

use alloy_primitives::U256;
use proptest::prelude::*;

use helpers::{receipt, transaction, MockExecution, UNKNOWN_PROPOSER};
use slotscan::{static_subsidy, FeeAggregator, GweiAmount, SlotCache, WeiAmount};

proptest! {
    /// Every block maps to one of the four known subsidy constants.
    #[test]
    fn subsidy_is_always_a_known_constant(block_number in 0u64..30_000_000) {
        let eth = |n: u64| U256::from(n) * U256::from(10u64).pow(U256::from(18u64));
        let subsidy = static_subsidy(block_number).as_u256();
        prop_assert!(
            subsidy == U256::ZERO
                || subsidy == eth(5)
                || subsidy == eth(3)
                || subsidy == eth(2)
        );
    }

    /// From block 1 on, the subsidy never increases as the chain grows.
    #[test]
    fn subsidy_is_non_increasing_after_genesis(
        earlier in 1u64..30_000_000,
        gap in 0u64..10_000_000,
    ) {
        let later = earlier.saturating_add(gap);
        prop_assert!(static_subsidy(earlier) >= static_subsidy(later));
    }

    /// Gwei conversion truncates: any sub-gwei remainder is discarded.
    #[test]
    fn gwei_conversion_truncates(whole_gwei in 0u64..u64::MAX / 2, remainder in 0u64..1_000_000_000) {
        let wei = U256::from(whole_gwei) * U256::from(1_000_000_000u64) + U256::from(remainder);
        prop_assert_eq!(
            WeiAmount::new(wei).to_gwei(),
            GweiAmount::new(whole_gwei as u128)
        );
    }

    /// The aggregate fee total is invariant to transaction order.
    #[test]
    fn fee_total_is_order_invariant(gas_values in prop::collection::vec(1u64..1_000_000, 1..40)) {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .build()
            .unwrap();

        runtime.block_on(async {
            let mut execution = MockExecution::default();
            let mut txs = Vec::new();
            for (i, gas) in gas_values.iter().enumerate() {
                let n = (i + 1) as u8;
                execution.receipts.insert(
                    helpers::tx_hash(n),
                    receipt(n, *gas, 1_000_000_000),
                );
                txs.push(transaction(n, UNKNOWN_PROPOSER, U256::ZERO));
            }
            let execution = Arc::new(execution);

            let forward = FeeAggregator::new(Arc::clone(&execution), Arc::new(SlotCache::new()))
                .total_fees(&txs)
                .await;

            txs.reverse();
            let backward = FeeAggregator::new(execution, Arc::new(SlotCache::new()))
                .total_fees(&txs)
                .await;

            prop_assert_eq!(forward.total, backward.total);
            Ok(())
        })?;
    }
}
