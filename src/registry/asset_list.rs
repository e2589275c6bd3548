// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Chain-registry `assetlist.json` model
//!
//! Only the fields the engine needs are modeled; everything else in the
//! registry files is ignored by serde.

use serde::{Deserialize, Serialize};

use crate::types::asset::AssetDescriptor;
use crate::types::tokens::Exponent;

/// Assets listed for one chain
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetList {
    /// Registry chain name
    pub chain_name: String,
    /// Listed assets
    #[serde(default)]
    pub assets: Vec<RegistryAsset>,
}

/// One entry of an asset list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryAsset {
    /// Base denomination
    pub base: String,
    /// Display denomination; must appear in `denom_units`
    pub display: String,
    /// Ticker
    pub symbol: String,
    /// Human-readable name
    #[serde(default)]
    pub name: Option<String>,
    /// Token contract address, for CW20 assets
    #[serde(default)]
    pub address: Option<String>,
    /// Units the asset can be expressed in
    #[serde(default)]
    pub denom_units: Vec<DenomUnit>,
    /// Provenance, e.g. IBC transfer from another chain
    #[serde(default)]
    pub traces: Vec<Trace>,
}

/// A named unit with its exponent relative to the base denom
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DenomUnit {
    /// Unit denomination
    pub denom: String,
    /// Decimal places relative to the base unit
    pub exponent: u32,
}

/// One hop in an asset's provenance
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trace {
    /// Where the asset came from
    #[serde(default)]
    pub counterparty: Option<Counterparty>,
}

/// Origin side of a trace
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Counterparty {
    /// Base denom on the origin chain
    #[serde(default)]
    pub base_denom: Option<String>,
}

impl RegistryAsset {
    /// Exponent of the display unit, if the registry lists a usable one
    ///
    /// Exponents above `u8::MAX` are treated as missing.
    pub fn display_exponent(&self) -> Option<Exponent> {
        self.denom_units
            .iter()
            .find(|unit| unit.denom == self.display)
            .and_then(|unit| u8::try_from(unit.exponent).ok())
            .map(Exponent::new)
    }

    /// Base denom on the origin chain, from the first trace
    pub fn origin_denom(&self) -> Option<&str> {
        self.traces
            .first()
            .and_then(|trace| trace.counterparty.as_ref())
            .and_then(|counterparty| counterparty.base_denom.as_deref())
    }

    /// Convert into a descriptor for `chain_name`
    ///
    /// Returns `None` when the display unit is missing or its exponent is out
    /// of range.
    pub fn to_descriptor(&self, chain_name: &str) -> Option<AssetDescriptor> {
        let exponent = self.display_exponent()?;
        let descriptor = match &self.address {
            Some(address) => AssetDescriptor::contract(
                chain_name,
                address,
                &self.base,
                &self.display,
                exponent,
                &self.symbol,
            ),
            None => AssetDescriptor::native(
                chain_name,
                &self.base,
                &self.display,
                exponent,
                &self.symbol,
            ),
        };
        let descriptor = match &self.name {
            Some(name) => descriptor.with_name(name),
            None => descriptor,
        };
        Some(match self.origin_denom() {
            Some(origin) => descriptor.with_origin_denom(origin),
            None => descriptor,
        })
    }
}
