// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Errors from balance queries.
//!
//! These never reach the caller: the balance dispatcher logs them and
//! publishes a zero balance instead.

use super::{AmountError, ClientError};

/// Errors that can occur while fetching a balance.
#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    /// Neither the session nor the configuration yielded a usable endpoint.
    #[error("No usable query endpoint for chain {chain_name}: {reason}")]
    Endpoint {
        /// Chain whose endpoint could not be resolved
        chain_name: String,
        /// Why resolution failed
        reason: String,
    },

    /// No account is connected to query for.
    #[error("No connected account on chain {chain_name}")]
    MissingAccount {
        /// Chain the balance was requested on
        chain_name: String,
    },

    /// The query client failed.
    #[error("Balance query failed: {0}")]
    Client(#[from] ClientError),

    /// The contract query could not be encoded.
    #[error("Failed to encode balance query: {0}")]
    Encode(#[from] serde_json::Error),

    /// The query succeeded but the balance could not be read from it.
    #[error("Malformed balance response: {details}")]
    MalformedResponse {
        /// What was wrong with the response
        details: String,
    },

    /// The returned balance was not a base-unit integer.
    #[error("Invalid balance amount: {0}")]
    Amount(#[from] AmountError),
}

impl QueryError {
    /// Create an `Endpoint` error.
    pub fn endpoint(chain_name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Endpoint {
            chain_name: chain_name.into(),
            reason: reason.into(),
        }
    }

    /// Create a `MalformedResponse` error.
    pub fn malformed_response(details: impl Into<String>) -> Self {
        Self::MalformedResponse {
            details: details.into(),
        }
    }
}
