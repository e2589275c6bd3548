// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Coin, gas and fee types
//!
//! A fee is a gas limit that grows linearly with the number of transfers
//! plus a flat fee amount. There is no gas-price or congestion estimation.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::tokens::BaseAmount;

/// An amount of a single denomination, as in `cosmos.base.v1beta1.Coin`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coin {
    /// Base denomination
    pub denom: String,
    /// Amount in base units
    pub amount: BaseAmount,
}

impl Coin {
    /// Create a coin
    pub fn new(denom: impl Into<String>, amount: BaseAmount) -> Self {
        Self {
            denom: denom.into(),
            amount,
        }
    }
}

impl std::fmt::Display for Coin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.amount, self.denom)
    }
}

/// Gas limit for a transaction
///
/// Serialized as a decimal string, like the `gas` field of an amino `StdFee`.
///
/// # Examples
///
/// ```
/// use cosmos_multisend::GasLimit;
///
/// let per_send = GasLimit::new(30_000);
/// assert_eq!(per_send.scaled(3), GasLimit::new(90_000));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct GasLimit(u64);

impl GasLimit {
    /// Create a gas limit
    pub const fn new(gas: u64) -> Self {
        Self(gas)
    }

    /// Get the inner u64 value
    pub const fn as_u64(&self) -> u64 {
        self.0
    }

    /// Gas for `count` operations at this per-operation limit
    ///
    /// Saturates instead of overflowing.
    pub fn scaled(&self, count: usize) -> Self {
        let count = u64::try_from(count).unwrap_or(u64::MAX);
        Self(self.0.saturating_mul(count))
    }
}

impl std::fmt::Display for GasLimit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for GasLimit {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0.to_string())
    }
}

impl<'de> Deserialize<'de> for GasLimit {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map(Self).map_err(serde::de::Error::custom)
    }
}

/// Transaction fee: coins paid plus gas limit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fee {
    /// Fee coins (a single coin for batches built by this crate)
    pub amount: Vec<Coin>,
    /// Gas limit
    pub gas: GasLimit,
}

impl Fee {
    /// Fee paying a single coin
    pub fn single(coin: Coin, gas: GasLimit) -> Self {
        Self {
            amount: vec![coin],
            gas,
        }
    }
}
