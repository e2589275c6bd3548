// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Test helpers for cosmos-multisend integration tests
//!
//! Provides mock implementations of the wallet, query and signing seams so
//! engine flows can be tested without a chain.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use cosmos_multisend::{
    AssetDescriptor, AssetRegistry, BroadcastResponse, ChainQueryClient, ClientError,
    ContractCall, Exponent, Fee, MsgSend, QueryClientFactory, SessionError, SigningClient,
    WalletSession,
};
use tokio::sync::Notify;
use url::Url;

/// Registry with a native and a CW20 asset on cosmoshub, plus native JUNO
#[allow(dead_code)]
pub fn test_registry() -> AssetRegistry {
    AssetRegistry::new(vec![
        AssetDescriptor::native("cosmoshub", "uatom", "atom", Exponent::MICRO, "ATOM"),
        AssetDescriptor::contract(
            "cosmoshub",
            "wasm1abc",
            "cw20:wasm1abc",
            "abc",
            Exponent::MICRO,
            "ABC",
        ),
        AssetDescriptor::native("juno", "ujuno", "juno", Exponent::MICRO, "JUNO"),
    ])
}

/// Shared state behind [`MockQueryFactory`] and the clients it hands out
#[derive(Default)]
struct QueryState {
    native: HashMap<(String, String), String>,
    contract: HashMap<(String, String), serde_json::Value>,
    fail_with: Option<String>,
    gates: HashMap<String, Arc<Notify>>,
    endpoints: Mutex<Vec<Url>>,
    contract_queries: Mutex<Vec<(String, serde_json::Value)>>,
}

/// Mock QueryClientFactory with canned balances
///
/// # Example
///
/// ```rust,ignore
/// let factory = MockQueryFactory::new()
///     .with_native_balance("cosmos1alice", "uatom", "1500000")
///     .with_gate("cosmos1slow", gate.clone());
/// ```
#[derive(Default)]
pub struct MockQueryFactory {
    state: Arc<QueryState>,
}

#[allow(dead_code)]
impl MockQueryFactory {
    /// Create a factory with no balances
    pub fn new() -> Self {
        Self::default()
    }

    fn state_mut(&mut self) -> &mut QueryState {
        Arc::get_mut(&mut self.state).expect("configure the mock before sharing it")
    }

    /// Answer bank queries for `(address, denom)` with `amount`
    pub fn with_native_balance(mut self, address: &str, denom: &str, amount: &str) -> Self {
        self.state_mut()
            .native
            .insert((address.to_string(), denom.to_string()), amount.to_string());
        self
    }

    /// Answer CW20 balance queries for `(contract, address)` with `response`
    pub fn with_contract_response(
        mut self,
        contract: &str,
        address: &str,
        response: serde_json::Value,
    ) -> Self {
        self.state_mut()
            .contract
            .insert((contract.to_string(), address.to_string()), response);
        self
    }

    /// Fail every query with a transport error
    pub fn failing(mut self, reason: &str) -> Self {
        self.state_mut().fail_with = Some(reason.to_string());
        self
    }

    /// Hold queries for `address` until `gate` is notified
    pub fn with_gate(mut self, address: &str, gate: Arc<Notify>) -> Self {
        self.state_mut().gates.insert(address.to_string(), gate);
        self
    }

    /// Endpoints clients were built for, in order
    pub fn endpoints(&self) -> Vec<Url> {
        self.state.endpoints.lock().unwrap().clone()
    }

    /// Smart queries issued, as `(contract, query)`
    pub fn contract_queries(&self) -> Vec<(String, serde_json::Value)> {
        self.state.contract_queries.lock().unwrap().clone()
    }
}

#[async_trait]
impl QueryClientFactory for MockQueryFactory {
    async fn connect(&self, endpoint: &Url) -> Result<Box<dyn ChainQueryClient>, ClientError> {
        self.state.endpoints.lock().unwrap().push(endpoint.clone());
        Ok(Box::new(MockQueryClient {
            state: Arc::clone(&self.state),
        }))
    }
}

struct MockQueryClient {
    state: Arc<QueryState>,
}

impl MockQueryClient {
    async fn wait_for_gate(&self, address: &str) {
        if let Some(gate) = self.state.gates.get(address) {
            gate.notified().await;
        }
    }

    fn check_failure(&self, operation: &str) -> Result<(), ClientError> {
        match &self.state.fail_with {
            Some(reason) => Err(ClientError::transport(
                operation,
                std::io::Error::new(std::io::ErrorKind::ConnectionRefused, reason.clone()),
            )),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl ChainQueryClient for MockQueryClient {
    async fn query_native_balance(
        &self,
        address: &str,
        denom: &str,
    ) -> Result<String, ClientError> {
        self.wait_for_gate(address).await;
        self.check_failure("bank balance")?;
        Ok(self
            .state
            .native
            .get(&(address.to_string(), denom.to_string()))
            .cloned()
            .unwrap_or_else(|| "0".to_string()))
    }

    async fn query_smart_contract(
        &self,
        contract_address: &str,
        query: &serde_json::Value,
    ) -> Result<serde_json::Value, ClientError> {
        self.state
            .contract_queries
            .lock()
            .unwrap()
            .push((contract_address.to_string(), query.clone()));

        let address = query["balance"]["address"].as_str().unwrap_or_default();
        self.wait_for_gate(address).await;
        self.check_failure("smart query")?;
        self.state
            .contract
            .get(&(contract_address.to_string(), address.to_string()))
            .cloned()
            .ok_or_else(|| ClientError::malformed_response("no such balance"))
    }
}

/// A broadcast recorded by [`MockSigningClient`]
#[derive(Debug, Clone, PartialEq, Eq)]
#[allow(dead_code)]
pub enum RecordedBroadcast {
    /// `sign_and_broadcast` call
    Bank {
        sender: String,
        messages: Vec<MsgSend>,
        fee: Fee,
        memo: String,
    },
    /// `execute_multiple` call
    Contract {
        sender: String,
        calls: Vec<ContractCall>,
        fee: Fee,
        memo: String,
    },
}

/// Mock SigningClient that records every broadcast
#[allow(dead_code)]
pub struct MockSigningClient {
    transaction_hash: String,
    reject: Option<(u32, String)>,
    broadcasts: Mutex<Vec<RecordedBroadcast>>,
}

#[allow(dead_code)]
impl MockSigningClient {
    /// Succeed with `transaction_hash`
    pub fn new(transaction_hash: &str) -> Self {
        Self {
            transaction_hash: transaction_hash.to_string(),
            reject: None,
            broadcasts: Mutex::new(Vec::new()),
        }
    }

    /// Reject every broadcast with `code` and `log`
    pub fn rejecting(code: u32, log: &str) -> Self {
        Self {
            reject: Some((code, log.to_string())),
            ..Self::new("")
        }
    }

    /// Broadcasts made so far
    pub fn broadcasts(&self) -> Vec<RecordedBroadcast> {
        self.broadcasts.lock().unwrap().clone()
    }

    fn respond(&self, broadcast: RecordedBroadcast) -> Result<BroadcastResponse, ClientError> {
        self.broadcasts.lock().unwrap().push(broadcast);
        match &self.reject {
            Some((code, log)) => Err(ClientError::rejected(*code, log.clone())),
            None => Ok(BroadcastResponse {
                transaction_hash: self.transaction_hash.clone(),
                height: Some(42),
            }),
        }
    }
}

#[async_trait]
impl SigningClient for MockSigningClient {
    async fn sign_and_broadcast(
        &self,
        sender: &str,
        messages: &[MsgSend],
        fee: &Fee,
        memo: &str,
    ) -> Result<BroadcastResponse, ClientError> {
        self.respond(RecordedBroadcast::Bank {
            sender: sender.to_string(),
            messages: messages.to_vec(),
            fee: fee.clone(),
            memo: memo.to_string(),
        })
    }

    async fn execute_multiple(
        &self,
        sender: &str,
        calls: &[ContractCall],
        fee: &Fee,
        memo: &str,
    ) -> Result<BroadcastResponse, ClientError> {
        self.respond(RecordedBroadcast::Contract {
            sender: sender.to_string(),
            calls: calls.to_vec(),
            fee: fee.clone(),
            memo: memo.to_string(),
        })
    }
}

/// Mock WalletSession that records the calls it receives
#[allow(dead_code)]
pub struct MockWalletSession {
    account: Mutex<Option<String>>,
    endpoint: Option<String>,
    signer: Option<Arc<MockSigningClient>>,
    fail_switch: bool,
    calls: Mutex<Vec<String>>,
}

#[allow(dead_code)]
impl MockWalletSession {
    /// Session connected as `account`, signing with `signer`
    pub fn new(account: &str, signer: Arc<MockSigningClient>) -> Self {
        Self {
            account: Mutex::new(Some(account.to_string())),
            endpoint: None,
            signer: Some(signer),
            fail_switch: false,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Session with no connected account and no signer
    pub fn disconnected() -> Self {
        Self {
            account: Mutex::new(None),
            endpoint: None,
            signer: None,
            fail_switch: false,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Offer `endpoint` as the query endpoint
    pub fn with_endpoint(mut self, endpoint: &str) -> Self {
        self.endpoint = Some(endpoint.to_string());
        self
    }

    /// Fail every chain switch
    pub fn failing_switch(mut self) -> Self {
        self.fail_switch = true;
        self
    }

    /// Change the connected account
    pub fn set_account(&self, account: Option<&str>) {
        *self.account.lock().unwrap() = account.map(str::to_string);
    }

    /// Calls received so far, e.g. `["switch:juno", "connect", "account"]`
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: impl Into<String>) {
        self.calls.lock().unwrap().push(call.into());
    }
}

#[async_trait]
impl WalletSession for MockWalletSession {
    async fn connect(&self) -> Result<(), SessionError> {
        self.record("connect");
        Ok(())
    }

    async fn switch_active_chain(&self, chain_name: &str) -> Result<(), SessionError> {
        self.record(format!("switch:{chain_name}"));
        if self.fail_switch {
            return Err(SessionError::chain_switch_failed(chain_name, "user rejected"));
        }
        Ok(())
    }

    async fn current_account_address(&self) -> Option<String> {
        self.record("account");
        self.account.lock().unwrap().clone()
    }

    async fn query_endpoint(&self) -> Option<String> {
        self.record("endpoint");
        self.endpoint.clone()
    }

    async fn signing_client(&self) -> Result<Arc<dyn SigningClient>, SessionError> {
        self.record("signer");
        match &self.signer {
            Some(signer) => Ok(Arc::clone(signer) as Arc<dyn SigningClient>),
            None => Err(SessionError::signer_unavailable("wallet not connected")),
        }
    }
}
