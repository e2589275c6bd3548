// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! On-chain message payloads produced by the batch builder
//!
//! These mirror the JSON shapes the chain clients expect: bank `MsgSend`
//! values for native coins and CW20 execute/query messages for contract
//! tokens.

use serde::{Deserialize, Serialize};

use super::fees::Coin;
use super::tokens::BaseAmount;

/// `cosmos.bank.v1beta1.MsgSend`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MsgSend {
    /// Sender address
    pub from_address: String,
    /// Recipient address
    pub to_address: String,
    /// Coins to transfer
    pub amount: Vec<Coin>,
}

/// CW20 execute message
///
/// Only `transfer` is produced by this crate. Serializes to the contract's
/// JSON schema: `{"transfer":{"recipient":"...","amount":"..."}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Cw20ExecuteMsg {
    /// Move tokens from the sender to `recipient`
    Transfer {
        /// Recipient address
        recipient: String,
        /// Amount in base units
        amount: BaseAmount,
    },
}

/// CW20 smart query, `{"balance":{"address":"..."}}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Cw20QueryMsg {
    /// Balance of `address` under the token contract
    Balance {
        /// Account to look up
        address: String,
    },
}

/// Response to [`Cw20QueryMsg::Balance`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cw20BalanceResponse {
    /// Balance in base units
    pub balance: BaseAmount,
}

/// One contract execution inside a multi-call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractCall {
    /// Contract to execute
    pub contract_address: String,
    /// Execute message
    pub msg: Cw20ExecuteMsg,
}

/// Several contract executions signed and broadcast as one transaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MultiCall {
    /// Executions, in order
    pub calls: Vec<ContractCall>,
}
