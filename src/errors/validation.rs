// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Errors from validating recipients before a batch is built.
//!
//! Batches are all-or-nothing: one bad recipient fails the whole build, and
//! the error carries that recipient's position so the caller can point at it.

use super::AmountError;

/// Errors that can occur while validating a transfer request.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// The recipient list is empty.
    #[error("At least one recipient is required")]
    NoRecipients,

    /// No sender address is available.
    #[error("Sender address is empty")]
    MissingSender,

    /// A recipient has no address.
    #[error("Recipient #{index} has an empty address")]
    EmptyAddress {
        /// Zero-based position in the recipient list
        index: usize,
    },

    /// A recipient's amount could not be converted to base units.
    #[error("Recipient #{index} has an invalid amount: {source}")]
    InvalidAmount {
        /// Zero-based position in the recipient list
        index: usize,
        /// Why the amount was rejected
        #[source]
        source: AmountError,
    },

    /// The last remaining recipient cannot be removed.
    #[error("Cannot remove the last recipient")]
    LastRecipient,

    /// A recipient index is past the end of the list.
    #[error("Recipient index {index} is out of range (len {len})")]
    IndexOutOfRange {
        /// Requested index
        index: usize,
        /// Current list length
        len: usize,
    },
}

impl ValidationError {
    /// Create an `InvalidAmount` error for a recipient.
    pub fn invalid_amount(index: usize, source: AmountError) -> Self {
        Self::InvalidAmount { index, source }
    }

    /// Position of the offending recipient, if the error concerns one.
    pub fn recipient_index(&self) -> Option<usize> {
        match self {
            Self::EmptyAddress { index } | Self::InvalidAmount { index, .. } => Some(*index),
            _ => None,
        }
    }
}
