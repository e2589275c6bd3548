// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Errors from resolving a selection key to an asset.

/// Errors that can occur when no concrete asset is available.
///
/// Both variants mean "no asset selected" from the caller's point of view:
/// downstream actions (balance display, submission) stay disabled.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolutionError {
    /// No asset has been selected yet.
    #[error("No asset selected")]
    NoAssetSelected,

    /// The selection key does not match any asset in the registry.
    #[error("Unknown asset: {key}")]
    UnknownAsset {
        /// The selection key that was not found
        key: String,
    },
}

impl ResolutionError {
    /// Create an `UnknownAsset` error for a selection key.
    pub fn unknown_asset(key: impl Into<String>) -> Self {
        Self::UnknownAsset { key: key.into() }
    }
}
