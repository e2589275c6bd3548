// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Well-known gas units, fee defaults and public endpoints
//!
//! This module centralizes magic constants used throughout the crate.

/// Gas budgeted per bank `MsgSend` in a native batch
pub const GAS_PER_BANK_SEND: u64 = 30_000;

/// Gas budgeted per CW20 `transfer` execution in a contract batch
pub const GAS_PER_CONTRACT_CALL: u64 = 120_000;

/// Flat fee amount (in the fee denom's base units) charged per batch
pub const DEFAULT_FEE_AMOUNT: u64 = 2_000;

/// Public RPC directory; `{RPC_DIRECTORY}{chain_name}` proxies a chain's RPC
pub const RPC_DIRECTORY: &str = "https://rpc.cosmos.directory/";

/// Block explorer; `{EXPLORER_BASE}{chain_name}/{tx_hash}` shows a transaction
pub const EXPLORER_BASE: &str = "https://mintscan.io/";

/// Native fee denominations of CosmWasm chains that commonly host CW20 tokens
pub mod fee_denoms {
    /// Juno
    pub const JUNO: (&str, &str) = ("juno", "ujuno");
    /// Osmosis
    pub const OSMOSIS: (&str, &str) = ("osmosis", "uosmo");
    /// Terra (phoenix)
    pub const TERRA2: (&str, &str) = ("terra2", "uluna");
    /// Neutron
    pub const NEUTRON: (&str, &str) = ("neutron", "untrn");
    /// Stargaze
    pub const STARGAZE: (&str, &str) = ("stargaze", "ustars");

    /// All of the above
    pub const ALL: [(&str, &str); 5] = [JUNO, OSMOSIS, TERRA2, NEUTRON, STARGAZE];
}
