// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Transfer batches
//!
//! A batch is everything a signer needs to pay N recipients in one
//! transaction: the operations, the fee and the memo. Native assets become N
//! bank sends; contract assets become one multi-call of N CW20 transfers.
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use cosmos_multisend::{AssetDescriptor, BatchBuilder, Exponent, MultisendConfig, Recipient};
//!
//! let builder = BatchBuilder::new(Arc::new(MultisendConfig::default()));
//! let atom = AssetDescriptor::native("cosmoshub", "uatom", "atom", Exponent::MICRO, "ATOM");
//! let recipients = [
//!     Recipient::new("cosmos1bob", "1.5"),
//!     Recipient::new("cosmos1carol", "0.25"),
//! ];
//!
//! let batch = builder.build(&atom, &recipients, "cosmos1alice").unwrap();
//! assert_eq!(batch.recipient_count(), 2);
//! assert_eq!(batch.fee.gas.as_u64(), 60_000);
//! ```

mod builder;

pub use builder::BatchBuilder;

use serde::{Deserialize, Serialize};

use crate::types::fees::Fee;
use crate::types::messages::{MsgSend, MultiCall};

/// Operations of a batch, by transfer kind
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "operations", rename_all = "snake_case")]
pub enum BatchOperations {
    /// One bank send per recipient
    Bank(Vec<MsgSend>),
    /// One multi-call with one transfer per recipient
    Contract(MultiCall),
}

impl BatchOperations {
    /// Number of recipients paid
    pub fn len(&self) -> usize {
        match self {
            Self::Bank(messages) => messages.len(),
            Self::Contract(multi_call) => multi_call.calls.len(),
        }
    }

    /// Check if no recipient is paid
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A fully built, ready-to-sign transfer batch
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferBatch {
    /// Chain the batch targets
    pub chain_name: String,
    /// Paying account
    pub sender: String,
    /// Operations in recipient order
    pub operations: BatchOperations,
    /// Fee for the whole transaction
    pub fee: Fee,
    /// Memo attached to the transaction
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memo: Option<String>,
}

impl TransferBatch {
    /// Number of recipients paid by this batch
    pub fn recipient_count(&self) -> usize {
        self.operations.len()
    }

    /// Memo to broadcast with, empty when none is set
    pub fn memo_or_empty(&self) -> &str {
        self.memo.as_deref().unwrap_or_default()
    }
}
