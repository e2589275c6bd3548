// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Balance snapshot type

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::asset::AssetDescriptor;
use super::tokens::BaseAmount;
use crate::units::from_base;

/// Balance of one account in one asset at a point in time
///
/// Snapshots are replaced wholesale when the account or asset changes; they
/// are never merged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalanceSnapshot {
    /// Account the balance belongs to
    pub account: String,
    /// Asset the balance is denominated in
    pub asset: AssetDescriptor,
    /// Balance in base units
    pub amount: BaseAmount,
    /// When the balance was published
    pub fetched_at: DateTime<Utc>,
}

impl BalanceSnapshot {
    /// Snapshot for a freshly fetched balance
    pub fn new(account: impl Into<String>, asset: AssetDescriptor, amount: BaseAmount) -> Self {
        Self {
            account: account.into(),
            asset,
            amount,
            fetched_at: Utc::now(),
        }
    }

    /// Zero balance, published when the real one cannot be fetched
    pub fn zero(account: impl Into<String>, asset: AssetDescriptor) -> Self {
        Self::new(account, asset, BaseAmount::zero())
    }

    /// Balance in display units, e.g. `"12.5"`
    pub fn display_amount(&self) -> String {
        from_base(&self.amount, self.asset.exponent)
    }
}

impl std::fmt::Display for BalanceSnapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.display_amount(), self.asset.symbol)
    }
}
