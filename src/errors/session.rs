// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Errors reported by the wallet session collaborator.

/// Errors that can occur while talking to the wallet session.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// The wallet refused or failed to connect.
    #[error("Wallet connection failed: {reason}")]
    ConnectionFailed {
        /// Reason reported by the wallet
        reason: String,
    },

    /// The wallet could not switch to the requested chain.
    #[error("Failed to switch active chain to {chain_name}: {reason}")]
    ChainSwitchFailed {
        /// Requested chain
        chain_name: String,
        /// Reason reported by the wallet
        reason: String,
    },

    /// The wallet cannot provide a signer for the active chain.
    #[error("Signing capability unavailable: {reason}")]
    SignerUnavailable {
        /// Reason reported by the wallet
        reason: String,
    },
}

impl SessionError {
    /// Create a `ConnectionFailed` error.
    pub fn connection_failed(reason: impl Into<String>) -> Self {
        Self::ConnectionFailed {
            reason: reason.into(),
        }
    }

    /// Create a `ChainSwitchFailed` error.
    pub fn chain_switch_failed(chain_name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::ChainSwitchFailed {
            chain_name: chain_name.into(),
            reason: reason.into(),
        }
    }

    /// Create a `SignerUnavailable` error.
    pub fn signer_unavailable(reason: impl Into<String>) -> Self {
        Self::SignerUnavailable {
            reason: reason.into(),
        }
    }
}
