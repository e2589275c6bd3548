// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Span creation helpers for multisend operations.
//!
//! Telemetry is kept out of the business logic: each instrumented operation
//! has a span helper here, and the operation attaches it to its future.
//!
//! Usage pattern:
//! ```rust,ignore
//! use tracing::Instrument;
//!
//! pub async fn my_operation(&self, param: &str) -> Result<T, E> {
//!     async move {
//!         // Business logic here
//!     }
//!     .instrument(spans::my_operation(param))
//!     .await
//! }
//! ```

use tracing::{Level, Span};

/// Create span for selecting an asset and binding the session to its chain.
///
/// Parent: None (root span for this operation)
/// Children: refresh_balance span
#[inline]
pub(crate) fn select_asset(selection_key: &str) -> Span {
    tracing::span!(
        Level::INFO,
        "multisend.select_asset",
        selection_key = %selection_key,
    )
}

/// Create span for recomputing the balance of the current context.
///
/// Parent: select_asset span, or None when triggered directly
/// Children: fetch_balance span
#[inline]
pub(crate) fn refresh_balance(chain_name: &str) -> Span {
    tracing::debug_span!("multisend.refresh_balance", chain_name = %chain_name)
}

/// Create span for one balance query.
///
/// Parent: refresh_balance span
/// Children: None
#[inline]
pub(crate) fn fetch_balance(request_id: u64, chain_name: &str, kind: &str) -> Span {
    tracing::debug_span!(
        "multisend.fetch_balance",
        request_id = request_id,
        chain_name = %chain_name,
        kind = %kind,
    )
}

/// Create span for validating recipients and building a batch.
///
/// Parent: send span
/// Children: None
#[inline]
pub(crate) fn build_batch(chain_name: &str, kind: &str, recipient_count: usize) -> Span {
    tracing::debug_span!(
        "multisend.build_batch",
        chain_name = %chain_name,
        kind = %kind,
        recipient_count = recipient_count,
    )
}

/// Create span for sending a batch end to end.
///
/// Parent: None (root span for this operation)
/// Children: build_batch, submit_batch spans
#[inline]
pub(crate) fn send(chain_name: &str, recipient_count: usize) -> Span {
    tracing::span!(
        Level::INFO,
        "multisend.send",
        chain_name = %chain_name,
        recipient_count = recipient_count,
    )
}

/// Create span for signing and broadcasting a batch.
///
/// Parent: send span
/// Children: None
#[inline]
pub(crate) fn submit_batch(chain_name: &str, operation_count: usize) -> Span {
    tracing::info_span!(
        "multisend.submit_batch",
        chain_name = %chain_name,
        operation_count = operation_count,
    )
}
