// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Errors from signing and broadcasting a batch.
//!
//! Submissions are never retried automatically: a broadcast that failed on
//! the client side may still have reached the mempool, and resending it can
//! duplicate every transfer in the batch.

use super::{ClientError, SessionError};

/// Errors that can occur while submitting a transfer batch.
#[derive(Debug, thiserror::Error)]
pub enum SubmissionError {
    /// The wallet could not provide a signing client.
    #[error("Signer unavailable: {0}")]
    Signer(#[from] SessionError),

    /// The signing client failed to sign or broadcast the batch.
    #[error("Broadcast on {chain_name} failed: {source}")]
    Broadcast {
        /// Chain the batch was sent to
        chain_name: String,
        /// Verbatim failure from the signing client
        #[source]
        source: ClientError,
    },
}

impl SubmissionError {
    /// Create a `Broadcast` error.
    pub fn broadcast(chain_name: impl Into<String>, source: ClientError) -> Self {
        Self::Broadcast {
            chain_name: chain_name.into(),
            source,
        }
    }
}
