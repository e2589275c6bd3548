// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for the multisend engine.
//!
//! Each stage of a transfer has its own error type so callers can react to
//! exactly the failures that stage can produce:
//!
//! - [`AmountError`] - display/base unit conversion failures
//! - [`ResolutionError`] - no asset selected, or the selection key is unknown
//! - [`RegistryError`] - the asset registry could not be decoded
//! - [`QueryError`] - balance lookups (always absorbed into a zero balance)
//! - [`ValidationError`] - recipients rejected before any network call
//! - [`SubmissionError`] - signing or broadcast failed
//!
//! Collaborator failures are described by [`ClientError`] (chain clients) and
//! [`SessionError`] (wallet session).
//!
//! [`MultisendError`] unifies the user-facing ones for callers that only need
//! a single error type.
//!
//! # Propagation policy
//!
//! Only validation and submission failures should reach the user as alerts.
//! A resolution failure means "no asset selected" and should disable actions
//! rather than raise an alert. Query failures never leave the balance
//! dispatcher.

mod amount;
mod client;
mod query;
mod registry;
mod resolution;
mod session;
mod submission;
mod validation;

pub use amount::AmountError;
pub use client::ClientError;
pub use query::QueryError;
pub use registry::RegistryError;
pub use resolution::ResolutionError;
pub use session::SessionError;
pub use submission::SubmissionError;
pub use validation::ValidationError;

/// Unified error type for engine operations.
///
/// Every module-specific error that can escape the engine converts into
/// `MultisendError` via `From`, so `?` works across stages.
///
/// # Examples
///
/// ```rust,ignore
/// use cosmos_multisend::{MultisendEngine, MultisendError};
///
/// async fn send_all(
///     engine: &MultisendEngine,
///     recipients: &Recipients,
/// ) -> Result<(), MultisendError> {
///     let receipt = engine.send(recipients.as_slice()).await?;
///     println!("sent: {}", receipt.transaction_hash);
///     Ok(())
/// }
/// ```
#[derive(Debug, thiserror::Error)]
pub enum MultisendError {
    /// No asset is selected or the selection key is unknown.
    #[error("Asset resolution error: {0}")]
    Resolution(#[from] ResolutionError),

    /// The wallet session failed while switching chains or connecting.
    #[error("Wallet session error: {0}")]
    Session(#[from] SessionError),

    /// The recipient list was rejected before anything was broadcast.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Signing or broadcasting the batch failed.
    #[error("Submission error: {0}")]
    Submission(#[from] SubmissionError),
}

impl MultisendError {
    /// Whether this error should be shown to the user as a failure
    /// notification.
    ///
    /// Resolution failures only block actions; session failures are reported
    /// by the wallet layer itself.
    pub fn is_user_visible(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::Submission(_))
    }
}
