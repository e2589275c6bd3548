// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Asset descriptor and identity types

use serde::{Deserialize, Serialize};

use super::tokens::Exponent;

/// How an asset moves on-chain
///
/// Decided once per descriptor: an asset either has a governing contract
/// (CW20) or it is a bank-module coin.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TransferKind {
    /// Chain-native coin, sent with `cosmos.bank.v1beta1.MsgSend`
    Native,
    /// CW20 token, sent by executing `transfer` on the token contract
    Contract {
        /// Token contract address
        address: String,
    },
}

impl TransferKind {
    /// Short name for logs and spans
    pub fn name(&self) -> &'static str {
        match self {
            Self::Native => "native",
            Self::Contract { .. } => "contract",
        }
    }
}

/// A transferable asset as listed in the asset registry
///
/// Descriptors are owned by the [`AssetRegistry`](crate::AssetRegistry) and
/// handed out by shared reference, so the exponent cannot change once the
/// registry is loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetDescriptor {
    /// Registry chain name, e.g. `cosmoshub`
    pub chain_name: String,
    /// Canonical on-chain denomination (`uatom`, `ibc/...`, `cw20:juno1...`)
    pub base_denom: String,
    /// Native coin or contract token
    pub kind: TransferKind,
    /// Display denomination, e.g. `atom`
    pub display_denom: String,
    /// Decimal places between base and display units
    pub exponent: Exponent,
    /// Ticker shown next to amounts
    pub symbol: String,
    /// Human-readable asset name
    pub name: String,
    /// Base denom on the origin chain for IBC-transferred assets
    pub origin_denom: Option<String>,
}

impl AssetDescriptor {
    /// Describe a native (bank) asset
    pub fn native(
        chain_name: impl Into<String>,
        base_denom: impl Into<String>,
        display_denom: impl Into<String>,
        exponent: Exponent,
        symbol: impl Into<String>,
    ) -> Self {
        let symbol = symbol.into();
        Self {
            chain_name: chain_name.into(),
            base_denom: base_denom.into(),
            kind: TransferKind::Native,
            display_denom: display_denom.into(),
            exponent,
            name: symbol.clone(),
            symbol,
            origin_denom: None,
        }
    }

    /// Describe a CW20 contract token
    pub fn contract(
        chain_name: impl Into<String>,
        contract_address: impl Into<String>,
        base_denom: impl Into<String>,
        display_denom: impl Into<String>,
        exponent: Exponent,
        symbol: impl Into<String>,
    ) -> Self {
        let mut asset = Self::native(chain_name, base_denom, display_denom, exponent, symbol);
        asset.kind = TransferKind::Contract {
            address: contract_address.into(),
        };
        asset
    }

    /// Set the human-readable name
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the origin-chain base denom of an IBC asset
    #[must_use]
    pub fn with_origin_denom(mut self, origin_denom: impl Into<String>) -> Self {
        self.origin_denom = Some(origin_denom.into());
        self
    }

    /// Token contract address, for contract-governed assets
    pub fn contract_address(&self) -> Option<&str> {
        match &self.kind {
            TransferKind::Native => None,
            TransferKind::Contract { address } => Some(address),
        }
    }

    /// Per-chain identity token
    ///
    /// The contract address if there is one, else the IBC origin denom,
    /// else the base denom.
    pub fn identity(&self) -> &str {
        self.contract_address()
            .or(self.origin_denom.as_deref())
            .unwrap_or(&self.base_denom)
    }

    /// Composite (chain, identity) key
    pub fn key(&self) -> AssetKey {
        AssetKey::new(&self.chain_name, self.identity())
    }

    /// Selection key string, `"{chain_name}-{identity}"`
    pub fn selection_key(&self) -> String {
        self.key().to_string()
    }
}

/// Composite identity of an asset across all chains
///
/// Renders as the selection key `"{chain_name}-{identity}"`. Chain names may
/// themselves contain `-`, so keys are compared whole rather than split.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AssetKey {
    /// Registry chain name
    pub chain_name: String,
    /// Identity token, unique within the chain's asset list
    pub identity: String,
}

impl AssetKey {
    /// Create a key from its parts
    pub fn new(chain_name: impl Into<String>, identity: impl Into<String>) -> Self {
        Self {
            chain_name: chain_name.into(),
            identity: identity.into(),
        }
    }

    /// Check whether this key renders as the given selection key
    pub fn matches(&self, selection_key: &str) -> bool {
        selection_key
            .strip_prefix(self.chain_name.as_str())
            .and_then(|rest| rest.strip_prefix('-'))
            .is_some_and(|identity| identity == self.identity)
    }
}

impl std::fmt::Display for AssetKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.chain_name, self.identity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn atom() -> AssetDescriptor {
        AssetDescriptor::native("cosmoshub", "uatom", "atom", Exponent::MICRO, "ATOM")
    }

    #[test]
    fn test_native_identity_is_base_denom() {
        let asset = atom();
        assert_eq!(asset.identity(), "uatom");
        assert_eq!(asset.selection_key(), "cosmoshub-uatom");
        assert_eq!(asset.contract_address(), None);
        assert_eq!(asset.kind.name(), "native");
    }

    #[test]
    fn test_contract_identity_is_address() {
        let asset = AssetDescriptor::contract(
            "juno",
            "juno1contract",
            "cw20:juno1contract",
            "neta",
            Exponent::MICRO,
            "NETA",
        );
        assert_eq!(asset.identity(), "juno1contract");
        assert_eq!(asset.selection_key(), "juno-juno1contract");
        assert_eq!(asset.kind.name(), "contract");
    }

    #[test]
    fn test_ibc_identity_is_origin_denom() {
        let asset = AssetDescriptor::native(
            "osmosis",
            "ibc/27394FB092D2ECCD56123C74F36E4C1F926001CEADA9CA97EA622B25F41E5EB2",
            "atom",
            Exponent::MICRO,
            "ATOM",
        )
        .with_origin_denom("uatom");
        assert_eq!(asset.selection_key(), "osmosis-uatom");
    }

    #[test]
    fn test_contract_address_wins_over_origin_denom() {
        let asset = AssetDescriptor::contract(
            "juno",
            "juno1abc",
            "cw20:juno1abc",
            "x",
            Exponent::MICRO,
            "X",
        )
        .with_origin_denom("ux");
        assert_eq!(asset.identity(), "juno1abc");
    }

    #[test]
    fn test_key_matches_with_dashed_chain_name() {
        let key = AssetKey::new("crypto-org", "basecro");
        assert_eq!(key.to_string(), "crypto-org-basecro");
        assert!(key.matches("crypto-org-basecro"));
        assert!(!key.matches("crypto-org-basecr"));
        assert!(!key.matches("crypto-basecro"));
    }

    #[test]
    fn test_kind_serialization() {
        let json = serde_json::to_value(TransferKind::Contract {
            address: "juno1abc".into(),
        })
        .unwrap();
        assert_eq!(json, serde_json::json!({"type": "contract", "address": "juno1abc"}));
    }
}
