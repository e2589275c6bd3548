// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Errors from loading the asset registry.

/// Errors that can occur while decoding asset lists.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// The registry JSON could not be decoded.
    #[error("Failed to decode asset registry")]
    Decode(#[from] serde_json::Error),
}
