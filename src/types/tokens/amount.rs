// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Base-unit token amount type

use std::ops::Add;
use std::str::FromStr;

use bigdecimal::num_bigint::BigInt;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::errors::AmountError;

/// Token amount in base units (never negative, arbitrary precision)
///
/// This is the integer amount the chain stores and transfers, e.g. `uatom`
/// for ATOM. It serializes as a decimal string, matching how Cosmos SDK
/// coins and CW20 `Uint128` values travel over the wire.
///
/// Use [`from_base`](crate::from_base) to render it in display units and
/// [`to_base`](crate::to_base) to produce one from user input.
///
/// # Examples
///
/// ```
/// use cosmos_multisend::BaseAmount;
///
/// let amount: BaseAmount = "1500000".parse().unwrap();
/// assert_eq!(amount.to_string(), "1500000");
/// assert!("-5".parse::<BaseAmount>().is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BaseAmount(BigInt);

impl BaseAmount {
    /// Zero base units
    pub fn zero() -> Self {
        Self(BigInt::from(0u8))
    }

    /// Wrap an integer that is already known to be non-negative
    pub(crate) fn from_non_negative(value: BigInt) -> Self {
        debug_assert!(value >= BigInt::from(0u8));
        Self(value)
    }

    /// Borrow the inner integer
    pub fn as_bigint(&self) -> &BigInt {
        &self.0
    }

    /// Check if the amount is zero
    pub fn is_zero(&self) -> bool {
        self.0 == BigInt::from(0u8)
    }
}

impl FromStr for BaseAmount {
    type Err = AmountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
            return Err(AmountError::invalid_base_amount(s));
        }
        trimmed
            .parse::<BigInt>()
            .map(Self)
            .map_err(|_| AmountError::invalid_base_amount(s))
    }
}

impl From<u64> for BaseAmount {
    fn from(value: u64) -> Self {
        Self(BigInt::from(value))
    }
}

impl From<u128> for BaseAmount {
    fn from(value: u128) -> Self {
        Self(BigInt::from(value))
    }
}

impl Add for BaseAmount {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl std::iter::Sum for BaseAmount {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), Add::add)
    }
}

impl std::fmt::Display for BaseAmount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for BaseAmount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0.to_string())
    }
}

impl<'de> Deserialize<'de> for BaseAmount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
