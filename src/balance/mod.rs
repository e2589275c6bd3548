// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Balance lookups for the selected asset
//!
//! Each lookup moves the published state `Idle -> Querying -> Resolved` (or
//! `Failed`). Lookups are identified by a monotonically increasing request
//! id; when a lookup finishes after a newer one has begun, its result is
//! dropped, so the published balance always belongs to the latest request
//! regardless of arrival order.
//!
//! Failures never escape: they are logged and published as a zero balance.
//!
//! # Example
//!
//! ```rust,ignore
//! use cosmos_multisend::{BalanceDispatcher, BalanceState};
//!
//! let dispatcher = BalanceDispatcher::new(query_factory, config);
//! let mut states = dispatcher.subscribe();
//!
//! dispatcher.refresh("cosmos1alice", &atom, session_endpoint.as_deref()).await;
//! if let BalanceState::Resolved(snapshot) = &*states.borrow_and_update() {
//!     println!("balance: {snapshot}");
//! }
//! ```

mod dispatcher;
mod endpoint;

pub use dispatcher::BalanceDispatcher;
pub use endpoint::resolve_query_endpoint;

use crate::types::asset::AssetDescriptor;
use crate::types::balance::BalanceSnapshot;

/// Published balance state
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum BalanceState {
    /// Nothing selected
    #[default]
    Idle,
    /// A lookup is in flight
    Querying {
        /// Request the lookup belongs to
        request_id: u64,
        /// Account being looked up
        account: String,
        /// Asset being looked up
        asset: AssetDescriptor,
    },
    /// The latest lookup succeeded
    Resolved(BalanceSnapshot),
    /// The latest lookup failed; the snapshot holds a zero balance
    Failed {
        /// Zero balance for the account and asset
        snapshot: BalanceSnapshot,
        /// Why the lookup failed
        reason: String,
    },
}

impl BalanceState {
    /// Balance to display, if the latest lookup has finished
    pub fn snapshot(&self) -> Option<&BalanceSnapshot> {
        match self {
            Self::Resolved(snapshot) | Self::Failed { snapshot, .. } => Some(snapshot),
            Self::Idle | Self::Querying { .. } => None,
        }
    }

    /// Check if a lookup is in flight
    pub fn is_querying(&self) -> bool {
        matches!(self, Self::Querying { .. })
    }
}

/// Identity of one balance lookup, returned by
/// [`BalanceDispatcher::begin`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BalanceTicket {
    /// Request id; higher ids supersede lower ones
    pub id: u64,
    /// Account to look up, trimmed
    pub account: String,
    /// Asset to look up
    pub asset: AssetDescriptor,
}

/// What happened to a lookup's result
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// Published as the current balance
    Resolved(BalanceSnapshot),
    /// The lookup failed and a zero balance was published
    Failed(BalanceSnapshot),
    /// A newer lookup began first; nothing was published
    Superseded,
}

impl RefreshOutcome {
    /// Published snapshot, unless the result was superseded
    pub fn snapshot(&self) -> Option<&BalanceSnapshot> {
        match self {
            Self::Resolved(snapshot) | Self::Failed(snapshot) => Some(snapshot),
            Self::Superseded => None,
        }
    }
}
