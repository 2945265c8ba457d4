// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Test helpers for slotscan integration tests
//!
//! Provides mock implementations of the chain client traits to enable
//! testing without real beacon or execution nodes, plus a canned mainnet
//! scenario whose reward values are known.

#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use alloy_primitives::{address, Address, B256, TxHash, U256};
use async_trait::async_trait;

use slotscan::{
    AppState, BlockTransaction, BuilderRegistry, ConsensusApi, ConsensusApiError, ExecutionApi,
    ExecutionApiError, ExecutionBlock, RewardCalculator, SlotCache, SlotLookup, SyncDutiesService,
    TxReceipt, ValidatorInfo,
};

/// beaverbuild's fee recipient, registered in the test registry
pub const BEAVERBUILD: Address = address!("95222290dd7278aa3ddd389cc1e1d165cc4bafe5");
/// Titan Builder's fee recipient, registered in the test registry
pub const TITAN: Address = address!("4838b106fce9647bdf1e7877bf73ce8b0bad5f97");
/// A fee recipient absent from the registry
pub const UNKNOWN_PROPOSER: Address = address!("aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa");

/// Mock ConsensusApi serving canned slot, committee, and roster data
///
/// Slots absent from the map resolve as skipped. Call counters let tests
/// assert how often the caches fall through to the client.
#[derive(Default)]
pub struct MockConsensus {
    pub head: u64,
    pub slots: HashMap<u64, B256>,
    pub committees: HashMap<u64, Vec<String>>,
    pub rosters: HashMap<u64, Vec<ValidatorInfo>>,
    pub head_fails: bool,
    pub committee_calls: AtomicUsize,
    pub roster_calls: AtomicUsize,
}

impl MockConsensus {
    pub fn new(head: u64) -> Self {
        Self {
            head,
            ..Default::default()
        }
    }

    pub fn with_block(mut self, slot: u64, block_hash: B256) -> Self {
        self.slots.insert(slot, block_hash);
        self
    }

    pub fn with_committee(mut self, slot: u64, indices: &[&str]) -> Self {
        self.committees
            .insert(slot, indices.iter().map(|s| s.to_string()).collect());
        self
    }

    pub fn with_roster(mut self, slot: u64, roster: Vec<ValidatorInfo>) -> Self {
        self.rosters.insert(slot, roster);
        self
    }

    pub fn with_failing_head(mut self) -> Self {
        self.head_fails = true;
        self
    }
}

#[async_trait]
impl ConsensusApi for MockConsensus {
    async fn head_slot(&self) -> Result<u64, ConsensusApiError> {
        if self.head_fails {
            return Err(ConsensusApiError::unexpected_shape(
                "head slot",
                "mock failure",
            ));
        }
        Ok(self.head)
    }

    async fn block_hash_for_slot(&self, slot: u64) -> Result<SlotLookup, ConsensusApiError> {
        Ok(match self.slots.get(&slot) {
            Some(hash) => SlotLookup::Proposed(*hash),
            None => SlotLookup::Missed,
        })
    }

    async fn sync_committee(&self, slot: u64) -> Result<Vec<String>, ConsensusApiError> {
        self.committee_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.committees.get(&slot).cloned().unwrap_or_default())
    }

    async fn validators(&self, slot: u64) -> Result<Vec<ValidatorInfo>, ConsensusApiError> {
        self.roster_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.rosters.get(&slot).cloned().unwrap_or_default())
    }
}

/// Mock ExecutionApi serving canned blocks and receipts
#[derive(Default)]
pub struct MockExecution {
    pub blocks_by_hash: HashMap<B256, ExecutionBlock>,
    pub blocks_by_number: HashMap<u64, ExecutionBlock>,
    pub receipts: HashMap<TxHash, TxReceipt>,
    pub failing_receipts: HashSet<TxHash>,
    pub receipt_calls: AtomicUsize,
}

impl MockExecution {
    pub fn with_block(mut self, block_hash: B256, block: ExecutionBlock) -> Self {
        self.blocks_by_number.insert(block.number, block.clone());
        self.blocks_by_hash.insert(block_hash, block);
        self
    }

    pub fn with_receipt(mut self, receipt: TxReceipt) -> Self {
        self.receipts.insert(receipt.transaction_hash, receipt);
        self
    }

    pub fn with_failing_receipt(mut self, tx_hash: TxHash) -> Self {
        self.failing_receipts.insert(tx_hash);
        self
    }
}

#[async_trait]
impl ExecutionApi for MockExecution {
    async fn block_by_hash(&self, hash: B256) -> Result<ExecutionBlock, ExecutionApiError> {
        self.blocks_by_hash
            .get(&hash)
            .cloned()
            .ok_or_else(|| ExecutionApiError::BlockNotFound {
                block_hash: format!("{hash:#x}"),
            })
    }

    async fn block_by_number(&self, number: u64) -> Result<ExecutionBlock, ExecutionApiError> {
        self.blocks_by_number
            .get(&number)
            .cloned()
            .ok_or(ExecutionApiError::BlockNumberNotFound {
                block_number: number,
            })
    }

    async fn transaction_receipt(&self, tx_hash: TxHash) -> Result<TxReceipt, ExecutionApiError> {
        self.receipt_calls.fetch_add(1, Ordering::SeqCst);
        if self.failing_receipts.contains(&tx_hash) {
            return Err(ExecutionApiError::deadline_exceeded(
                "get_transaction_receipt",
            ));
        }
        self.receipts
            .get(&tx_hash)
            .copied()
            .ok_or_else(|| ExecutionApiError::ReceiptNotFound {
                tx_hash: format!("{tx_hash:#x}"),
            })
    }
}

/// Registry containing only the builders the scenario blocks use
pub fn test_registry() -> BuilderRegistry {
    BuilderRegistry::from_entries([
        (
            "0x95222290dd7278aa3ddd389cc1e1d165cc4bafe5".to_string(),
            "beaverbuild".to_string(),
        ),
        (
            "0x4838b106fce9647bdf1e7877bf73ce8b0bad5f97".to_string(),
            "Titan Builder".to_string(),
        ),
    ])
}

pub fn tx_hash(n: u8) -> TxHash {
    B256::repeat_byte(n)
}

pub fn block_hash(n: u8) -> B256 {
    B256::repeat_byte(n)
}

/// A value of `gwei` gwei plus `extra_wei` wei, for truncation cases
pub fn gwei_value(gwei: u64, extra_wei: u64) -> U256 {
    U256::from(gwei) * U256::from(1_000_000_000u64) + U256::from(extra_wei)
}

pub fn transaction(n: u8, from: Address, value: U256) -> BlockTransaction {
    BlockTransaction {
        hash: tx_hash(n),
        from,
        to: Some(Address::ZERO),
        value,
        gas_price: None,
    }
}

pub fn receipt(n: u8, gas_used: u64, effective_gas_price: u128) -> TxReceipt {
    TxReceipt {
        transaction_hash: tx_hash(n),
        gas_used,
        effective_gas_price,
    }
}

/// The slots and blocks the canned scenario serves.
pub const HEAD_SLOT: u64 = 9_300_000;
pub const MEV_SLOT: u64 = 9_197_117;
pub const MEV_NO_TRANSFER_SLOT: u64 = 9_197_118;
pub const PLAIN_SLOT: u64 = 9_197_120;
pub const SKIPPED_SLOT: u64 = 9_208_672;

/// A wired-up engine over the canned scenario
pub struct Scenario {
    pub consensus: Arc<MockConsensus>,
    pub execution: Arc<MockExecution>,
    pub receipt_cache: Arc<SlotCache<TxHash, TxReceipt>>,
}

impl Scenario {
    pub fn calculator(&self) -> RewardCalculator<MockConsensus, MockExecution> {
        RewardCalculator::new(
            Arc::clone(&self.consensus),
            Arc::clone(&self.execution),
            Arc::new(test_registry()),
            Arc::clone(&self.receipt_cache),
        )
    }

    pub fn state(&self) -> Arc<AppState<MockConsensus, MockExecution>> {
        let duties = SyncDutiesService::new(
            Arc::clone(&self.consensus),
            Arc::new(SlotCache::new()),
            Arc::new(SlotCache::new()),
        );
        Arc::new(AppState {
            calculator: self.calculator(),
            duties,
            consensus: Arc::clone(&self.consensus),
        })
    }
}

/// Build the canned mainnet scenario.
///
/// Expected outcomes, all in gwei:
/// - slot 9197117 -> reward 113757939, mevReward 105971629, mev = true
/// - slot 9197118 -> reward 18717163, mevReward 0, mev = true
///   (builder-built block without a qualifying builder transfer)
/// - slot 9197120 -> reward 4699116, mevReward 0, mev = false
/// - slot 9208672 -> skipped
/// - block 15537300 -> reward 2117027595 (pre-merge, era subsidy 2 ETH)
/// - block 4360100 -> reward 5181177404 (frontier era, subsidy 5 ETH)
/// - block 7280900 -> reward 2000000000 (era-2 block without transactions)
pub fn mainnet_scenario() -> Scenario {
    // Slot 9197117: beaverbuild block with two builder payments. Fees sum
    // to 153,757,939.123 gwei against 40,000,000 gwei burnt.
    let mev_block = ExecutionBlock {
        number: 19_992_375,
        fee_recipient: BEAVERBUILD,
        base_fee_per_gas: Some(4_000_000_000),
        gas_used: 10_000_000,
        transactions: vec![
            transaction(0x01, UNKNOWN_PROPOSER, U256::from(1u64)),
            transaction(0x02, UNKNOWN_PROPOSER, U256::from(2u64)),
            // the proposer payment, plus sub-gwei dust that must truncate
            transaction(0x03, BEAVERBUILD, gwei_value(105_971_629, 456_789)),
            // a second, smaller builder payment; only the largest counts
            transaction(0x04, BEAVERBUILD, gwei_value(50_000_000, 0)),
        ],
    };

    // Slot 9197118: Titan block whose transactions contain nothing sent by
    // the builder itself.
    let mev_no_transfer_block = ExecutionBlock {
        number: 19_992_376,
        fee_recipient: TITAN,
        base_fee_per_gas: Some(3_000_000_000),
        gas_used: 6_000_000,
        transactions: vec![transaction(0x07, UNKNOWN_PROPOSER, U256::from(7u64))],
    };

    // Slot 9197120: vanilla proposer. Includes a large self-transfer from
    // the (unregistered) fee recipient, which must not count as MEV.
    let plain_block = ExecutionBlock {
        number: 19_992_378,
        fee_recipient: UNKNOWN_PROPOSER,
        base_fee_per_gas: Some(2_000_000_000),
        gas_used: 5_000_000,
        transactions: vec![
            transaction(0x05, Address::ZERO, U256::from(5u64)),
            transaction(0x06, UNKNOWN_PROPOSER, gwei_value(999_000_000_000, 0)),
        ],
    };

    // Pre-merge era blocks, queried by number.
    let era2_block = ExecutionBlock {
        number: 15_537_300,
        fee_recipient: UNKNOWN_PROPOSER,
        base_fee_per_gas: Some(50_000_000_000),
        gas_used: 10_000_000,
        transactions: vec![transaction(0x08, Address::ZERO, U256::ZERO)],
    };
    let frontier_block = ExecutionBlock {
        number: 4_360_100,
        fee_recipient: UNKNOWN_PROPOSER,
        base_fee_per_gas: None,
        gas_used: 7_000_000,
        transactions: vec![transaction(0x09, Address::ZERO, U256::ZERO)],
    };
    let empty_era2_block = ExecutionBlock {
        number: 7_280_900,
        fee_recipient: UNKNOWN_PROPOSER,
        base_fee_per_gas: None,
        gas_used: 0,
        transactions: Vec::new(),
    };

    let consensus = MockConsensus::new(HEAD_SLOT)
        .with_block(MEV_SLOT, block_hash(0x17))
        .with_block(MEV_NO_TRANSFER_SLOT, block_hash(0x18))
        .with_block(PLAIN_SLOT, block_hash(0x20));

    let execution = MockExecution::default()
        .with_block(block_hash(0x17), mev_block)
        .with_block(block_hash(0x18), mev_no_transfer_block)
        .with_block(block_hash(0x20), plain_block)
        .with_block(block_hash(0x30), era2_block)
        .with_block(block_hash(0x31), frontier_block)
        .with_block(block_hash(0x32), empty_era2_block)
        .with_receipt(receipt(0x01, 1_000_000, 100_000_000_000))
        .with_receipt(receipt(0x02, 1_000_000, 49_557_939_123))
        .with_receipt(receipt(0x03, 21_000, 100_000_000_000))
        .with_receipt(receipt(0x04, 21_000, 100_000_000_000))
        .with_receipt(receipt(0x05, 1_000_000, 14_678_116_500))
        .with_receipt(receipt(0x06, 21_000, 1_000_000_000))
        .with_receipt(receipt(0x07, 1_000_000, 36_717_163_000))
        .with_receipt(receipt(0x08, 1_000_000, 617_027_595_000))
        .with_receipt(receipt(0x09, 1_000_000, 181_177_404_000));

    Scenario {
        consensus: Arc::new(consensus),
        execution: Arc::new(execution),
        receipt_cache: Arc::new(SlotCache::new()),
    }
}
