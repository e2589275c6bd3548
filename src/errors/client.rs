// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Shared error type for chain query and signing collaborators.
//!
//! Implementations of [`ChainQueryClient`](crate::ChainQueryClient) and
//! [`SigningClient`](crate::SigningClient) report their failures with this
//! type so the engine can log and surface them without knowing which RPC
//! stack sits underneath.

/// Errors reported by chain clients.
///
/// # Examples
///
/// ```rust
/// use cosmos_multisend::ClientError;
///
/// let error = ClientError::rejected(5, "insufficient funds");
/// assert_eq!(
///     error.to_string(),
///     "Transaction rejected with code 5: insufficient funds"
/// );
/// ```
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The request never produced a chain response (network, timeout, TLS).
    #[error("Chain request failed during {operation}")]
    Transport {
        /// Description of the operation that failed
        operation: String,
        /// The underlying transport error
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The chain processed the request and refused it.
    #[error("Transaction rejected with code {code}: {log}")]
    Rejected {
        /// ABCI response code
        code: u32,
        /// Raw log returned by the node
        log: String,
    },

    /// The chain answered with something the client could not interpret.
    #[error("Malformed chain response: {details}")]
    MalformedResponse {
        /// What was wrong with the response
        details: String,
    },
}

impl ClientError {
    /// Helper to create a `Transport` error from any error type.
    pub fn transport(
        operation: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Transport {
            operation: operation.into(),
            source: Box::new(source),
        }
    }

    /// Helper to create a `Rejected` error.
    pub fn rejected(code: u32, log: impl Into<String>) -> Self {
        Self::Rejected {
            code,
            log: log.into(),
        }
    }

    /// Helper to create a `MalformedResponse` error.
    pub fn malformed_response(details: impl Into<String>) -> Self {
        Self::MalformedResponse {
            details: details.into(),
        }
    }
}
