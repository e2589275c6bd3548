// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Strong types shared across the engine.
//!
//! - Assets, their transfer kind and selection keys
//! - Token amounts and exponents
//! - Recipients
//! - Coins, gas limits and fees
//! - Bank and CW20 message payloads
//! - Balance snapshots and submission receipts

pub mod asset;
pub mod balance;
pub mod fees;
pub mod messages;
pub mod receipt;
pub mod recipient;
pub mod tokens;

// Note: Public types are re-exported from lib.rs, not here
