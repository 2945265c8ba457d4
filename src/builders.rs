// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Known MEV builder registry
//!
//! A static mapping from lowercase fee-recipient address to builder display
//! name, loaded once at process start from a JSON file:
//!
//! ```json
//! {
//!   "0x95222290dd7278aa3ddd389cc1e1d165cc4bafe5": "beaverbuild",
//!   "0x1f9090aae28b8a3dceadf281b0f12828e676c326": "rsync-builder"
//! }
//! ```
//!
//! MEV detection is pure membership on the lowercased fee recipient of a
//! block. The registry is read-only after load and needs no locking.

use std::collections::HashMap;
use std::path::Path;

use alloy_primitives::Address;
use tracing::info;

use crate::errors::BuilderRegistryError;

/// Registry of known MEV builder fee-recipient addresses
///
/// Failure to load the backing file at startup is fatal: the process cannot
/// answer reward queries without knowing which producers are builders.
///
/// # Examples
///
/// ```
/// use alloy_primitives::address;
/// use slotscan::BuilderRegistry;
///
/// let registry = BuilderRegistry::from_entries([(
///     "0x95222290dd7278aa3ddd389cc1e1d165cc4bafe5".to_string(),
///     "beaverbuild".to_string(),
/// )]);
///
/// let builder = address!("95222290DD7278Aa3Ddd389Cc1E1d165CC4BAfe5");
/// assert!(registry.is_known(&builder));
/// ```
#[derive(Debug, Clone, Default)]
pub struct BuilderRegistry {
    builders: HashMap<String, String>,
}

impl BuilderRegistry {
    /// Load the registry from a JSON file of lowercase address to name
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or does not parse as a
    /// JSON object of strings. Callers should treat either as fatal.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, BuilderRegistryError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| BuilderRegistryError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let builders: HashMap<String, String> =
            serde_json::from_str(&raw).map_err(|source| BuilderRegistryError::Malformed {
                path: path.to_path_buf(),
                source,
            })?;

        info!(
            builders = builders.len(),
            path = %path.display(),
            "Loaded builder registry"
        );

        Ok(Self { builders })
    }

    /// Build a registry from in-memory entries
    ///
    /// Keys must already be lowercase `0x`-prefixed hex addresses, as in
    /// the backing file.
    pub fn from_entries(entries: impl IntoIterator<Item = (String, String)>) -> Self {
        Self {
            builders: entries.into_iter().collect(),
        }
    }

    /// True when the address belongs to a known builder
    pub fn is_known(&self, fee_recipient: &Address) -> bool {
        self.builders.contains_key(&Self::key(fee_recipient))
    }

    /// Display name of the builder behind an address, if known
    pub fn label(&self, fee_recipient: &Address) -> Option<&str> {
        self.builders.get(&Self::key(fee_recipient)).map(|s| s.as_str())
    }

    /// Number of registered builders
    pub fn len(&self) -> usize {
        self.builders.len()
    }

    /// True when no builders are registered
    pub fn is_empty(&self) -> bool {
        self.builders.is_empty()
    }

    fn key(address: &Address) -> String {
        format!("{address:#x}")
    }
}
