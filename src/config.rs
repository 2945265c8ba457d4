// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Configuration for slotscan
//!
//! This module provides the configuration for slotscan's upstream
//! endpoints, the builder registry location, and the tuning knobs of the
//! fee aggregation path.
//!
//! # Example
//!
//! ```rust
//! use slotscan::SlotscanConfig;
//! use std::time::Duration;
//! use url::Url;
//!
//! let config = SlotscanConfig::new(
//!     Url::parse("http://localhost:5052").unwrap(),
//!     Url::parse("http://localhost:8545").unwrap(),
//! )
//! .with_receipt_timeout(Duration::from_secs(10))
//! .with_api_port(9000);
//!
//! assert_eq!(config.api_port, 9000);
//! ```

use std::path::PathBuf;
use std::time::Duration;

use url::Url;

use crate::execution::DEFAULT_CALL_TIMEOUT;
use crate::fees::FEE_BATCH_SIZE;

/// Default path of the builder registry file.
pub const DEFAULT_BUILDERS_PATH: &str = "builders.json";

/// Default port the API listens on.
pub const DEFAULT_API_PORT: u16 = 8080;

/// Configuration for slotscan
///
/// Controls the upstream endpoints, the builder registry location, and the
/// fee-aggregation throttle. Construct with [`SlotscanConfig::new`] and
/// adjust with the `with_*` builder methods.
#[derive(Debug, Clone)]
pub struct SlotscanConfig {
    /// Base URL of the beacon node REST API
    pub consensus_url: Url,

    /// URL of the execution-layer JSON-RPC endpoint
    pub execution_rpc_url: Url,

    /// Path to the builder registry JSON file
    /// Default: `builders.json` in the working directory
    pub builders_path: PathBuf,

    /// Number of receipt lookups in flight at once during fee aggregation
    /// Default: 10
    pub fee_batch_size: usize,

    /// Deadline for each execution RPC call
    /// Default: 5 seconds
    pub receipt_timeout: Duration,

    /// Port the HTTP API listens on
    /// Default: 8080
    pub api_port: u16,
}

impl SlotscanConfig {
    /// Create a config with defaults for everything but the endpoints
    pub fn new(consensus_url: Url, execution_rpc_url: Url) -> Self {
        Self {
            consensus_url,
            execution_rpc_url,
            builders_path: PathBuf::from(DEFAULT_BUILDERS_PATH),
            fee_batch_size: FEE_BATCH_SIZE,
            receipt_timeout: DEFAULT_CALL_TIMEOUT,
            api_port: DEFAULT_API_PORT,
        }
    }

    /// Override the builder registry path
    #[must_use]
    pub fn with_builders_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.builders_path = path.into();
        self
    }

    /// Override the fee-aggregation batch size (minimum 1)
    #[must_use]
    pub fn with_fee_batch_size(mut self, batch_size: usize) -> Self {
        self.fee_batch_size = batch_size.max(1);
        self
    }

    /// Override the execution RPC deadline
    #[must_use]
    pub fn with_receipt_timeout(mut self, timeout: Duration) -> Self {
        self.receipt_timeout = timeout;
        self
    }

    /// Override the API port
    #[must_use]
    pub fn with_api_port(mut self, port: u16) -> Self {
        self.api_port = port;
        self
    }
}
