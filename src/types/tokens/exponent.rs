// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Denomination exponent type

use serde::{Deserialize, Serialize};

/// Number of decimal places between an asset's base and display units
///
/// Taken from the registry's `denom_units` entry for the display denom.
/// Common values on Cosmos chains:
/// - Native staking tokens (`uatom`, `uosmo`, `ujuno`): 6
/// - EVM-derived tokens (`aevmos`, `inj`): 18
/// - Unit-less tokens: 0
///
/// # Examples
///
/// ```
/// use cosmos_multisend::Exponent;
///
/// let atom = Exponent::MICRO;
/// assert_eq!(atom.as_u8(), 6);
/// assert!(Exponent::new(0).is_identity());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Exponent(u8);

impl Exponent {
    /// Micro-denominated tokens (`u` prefix, 6 decimals)
    pub const MICRO: Self = Self(6);

    /// Atto-denominated tokens (`a` prefix, 18 decimals)
    pub const ATTO: Self = Self(18);

    /// Create a new exponent
    pub const fn new(exponent: u8) -> Self {
        Self(exponent)
    }

    /// Get the inner u8 value
    pub const fn as_u8(&self) -> u8 {
        self.0
    }

    /// True when base and display units are the same (exponent 0)
    pub const fn is_identity(&self) -> bool {
        self.0 == 0
    }
}

impl From<u8> for Exponent {
    fn from(value: u8) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for Exponent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "10^{}", self.0)
    }
}
