// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Chain client seams
//!
//! The engine never talks to a node directly. It goes through these traits,
//! which an application implements on top of whatever RPC and signing stack
//! it uses (gRPC, Tendermint RPC, a browser wallet bridge, ...).
//!
//! # Example: Implementing ChainQueryClient over an LCD REST endpoint
//!
//! ```rust,ignore
//! use async_trait::async_trait;
//! use cosmos_multisend::{ChainQueryClient, ClientError};
//!
//! struct LcdClient {
//!     http: reqwest::Client,
//!     base: url::Url,
//! }
//!
//! #[async_trait]
//! impl ChainQueryClient for LcdClient {
//!     async fn query_native_balance(
//!         &self,
//!         address: &str,
//!         denom: &str,
//!     ) -> Result<String, ClientError> {
//!         let url = self.base.join(&format!(
//!             "cosmos/bank/v1beta1/balances/{address}/by_denom?denom={denom}"
//!         )).map_err(|e| ClientError::transport("build balance url", e))?;
//!         let body: serde_json::Value = self.http.get(url).send().await
//!             .map_err(|e| ClientError::transport("bank balance", e))?
//!             .json().await
//!             .map_err(|e| ClientError::transport("bank balance body", e))?;
//!         body["balance"]["amount"]
//!             .as_str()
//!             .map(str::to_owned)
//!             .ok_or_else(|| ClientError::malformed_response("missing balance.amount"))
//!     }
//!
//!     async fn query_smart_contract(
//!         &self,
//!         contract_address: &str,
//!         query: &serde_json::Value,
//!     ) -> Result<serde_json::Value, ClientError> {
//!         // base64-encode `query` and GET /cosmwasm/wasm/v1/contract/{addr}/smart/{query}
//!         todo!()
//!     }
//! }
//! ```

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::errors::ClientError;
use crate::types::fees::Fee;
use crate::types::messages::{ContractCall, MsgSend};

/// Read-only chain queries
///
/// A client is built per query from a resolved endpoint by a
/// [`QueryClientFactory`].
#[async_trait]
pub trait ChainQueryClient: Send + Sync {
    /// Bank balance of `address` in `denom`, as a base-unit integer string
    async fn query_native_balance(&self, address: &str, denom: &str)
        -> Result<String, ClientError>;

    /// Run a CosmWasm smart query and return the decoded JSON response
    async fn query_smart_contract(
        &self,
        contract_address: &str,
        query: &serde_json::Value,
    ) -> Result<serde_json::Value, ClientError>;
}

/// Builds query clients for an endpoint
#[async_trait]
pub trait QueryClientFactory: Send + Sync {
    /// Connect a query client to `endpoint`
    async fn connect(&self, endpoint: &Url) -> Result<Box<dyn ChainQueryClient>, ClientError>;
}

/// Result of a successful broadcast
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BroadcastResponse {
    /// Transaction hash
    pub transaction_hash: String,
    /// Block height the transaction was included at, when known
    pub height: Option<u64>,
}

/// Signs and broadcasts transactions for the connected account
///
/// Implementations must make a single broadcast attempt per call. The
/// engine never retries, and neither should the client: a timed-out
/// broadcast may still land on chain.
#[async_trait]
pub trait SigningClient: Send + Sync {
    /// Sign and broadcast bank sends in one transaction
    async fn sign_and_broadcast(
        &self,
        sender: &str,
        messages: &[MsgSend],
        fee: &Fee,
        memo: &str,
    ) -> Result<BroadcastResponse, ClientError>;

    /// Sign and broadcast several contract executions in one transaction
    async fn execute_multiple(
        &self,
        sender: &str,
        calls: &[ContractCall],
        fee: &Fee,
        memo: &str,
    ) -> Result<BroadcastResponse, ClientError>;
}
