// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Asset registry and selection-key resolution
//!
//! The registry is loaded once per session from chain-registry style asset
//! lists and is read-only afterwards. Resolution maps a selection key
//! (`"{chain_name}-{identity}"`) to its [`AssetDescriptor`].
//!
//! # Example
//!
//! ```rust
//! use cosmos_multisend::{AssetRegistry, TransferKind};
//!
//! let registry = AssetRegistry::from_json(r#"[
//!     {
//!         "chain_name": "cosmoshub",
//!         "assets": [{
//!             "base": "uatom",
//!             "display": "atom",
//!             "symbol": "ATOM",
//!             "denom_units": [
//!                 {"denom": "uatom", "exponent": 0},
//!                 {"denom": "atom", "exponent": 6}
//!             ]
//!         }]
//!     }
//! ]"#).unwrap();
//!
//! let atom = registry.resolve("cosmoshub-uatom").unwrap();
//! assert_eq!(atom.kind, TransferKind::Native);
//! assert_eq!(atom.exponent.as_u8(), 6);
//! ```

mod asset_list;

pub use asset_list::{AssetList, Counterparty, DenomUnit, RegistryAsset, Trace};

use tracing::{debug, warn};

use crate::errors::{RegistryError, ResolutionError};
use crate::types::asset::AssetDescriptor;

/// Read-only list of transferable assets across chains
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssetRegistry {
    assets: Vec<AssetDescriptor>,
}

impl AssetRegistry {
    /// Build a registry from descriptors, keeping their order
    pub fn new(assets: Vec<AssetDescriptor>) -> Self {
        Self { assets }
    }

    /// Build a registry from chain-registry asset lists
    ///
    /// Assets whose display unit is missing or out of range are skipped with a
    /// warning.
    pub fn from_asset_lists(lists: &[AssetList]) -> Self {
        let mut assets = Vec::new();
        for list in lists {
            for asset in &list.assets {
                match asset.to_descriptor(&list.chain_name) {
                    Some(descriptor) => assets.push(descriptor),
                    None => warn!(
                        chain_name = %list.chain_name,
                        base = %asset.base,
                        display = %asset.display,
                        "Skipping asset without a usable display denom unit"
                    ),
                }
            }
        }
        debug!(
            chains = lists.len(),
            assets = assets.len(),
            "Loaded asset registry"
        );
        Self { assets }
    }

    /// Decode a JSON array of asset lists
    pub fn from_json(json: &str) -> Result<Self, RegistryError> {
        let lists: Vec<AssetList> = serde_json::from_str(json)?;
        Ok(Self::from_asset_lists(&lists))
    }

    /// Resolve a selection key to its asset
    ///
    /// The first asset whose key matches wins; duplicate identities within a
    /// chain are a registry data problem and are not detected here.
    pub fn resolve(&self, selection_key: &str) -> Result<&AssetDescriptor, ResolutionError> {
        resolve_asset(selection_key, &self.assets)
            .ok_or_else(|| ResolutionError::unknown_asset(selection_key))
    }

    /// All assets, in registry order
    pub fn assets(&self) -> &[AssetDescriptor] {
        &self.assets
    }

    /// Assets listed for one chain
    pub fn chain_assets<'a>(
        &'a self,
        chain_name: &'a str,
    ) -> impl Iterator<Item = &'a AssetDescriptor> + 'a {
        self.assets
            .iter()
            .filter(move |asset| asset.chain_name == chain_name)
    }

    /// Number of assets
    pub fn len(&self) -> usize {
        self.assets.len()
    }

    /// Check if the registry has no assets
    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }
}

/// Find the first asset whose selection key equals `selection_key`
pub fn resolve_asset<'a>(
    selection_key: &str,
    assets: &'a [AssetDescriptor],
) -> Option<&'a AssetDescriptor> {
    assets
        .iter()
        .find(|asset| asset.key().matches(selection_key))
}
