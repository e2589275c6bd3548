// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Wallet session seam and the explicit transfer context
//!
//! The wallet owns connection state, the active chain and the signer. The
//! engine reads that state once per action into a [`TransferContext`] and
//! passes the context down, instead of consulting the wallet from deep
//! inside balance or batch code.

use std::sync::Arc;

use async_trait::async_trait;

use crate::client::SigningClient;
use crate::errors::SessionError;
use crate::types::asset::AssetDescriptor;

/// Wallet connection owned by the application
#[async_trait]
pub trait WalletSession: Send + Sync {
    /// Connect (or reconnect) the wallet on the active chain
    async fn connect(&self) -> Result<(), SessionError>;

    /// Make `chain_name` the active chain; resolves once the switch is done
    async fn switch_active_chain(&self, chain_name: &str) -> Result<(), SessionError>;

    /// Address of the connected account on the active chain
    async fn current_account_address(&self) -> Option<String>;

    /// Query endpoint preferred by the wallet for the active chain
    async fn query_endpoint(&self) -> Option<String>;

    /// Signer for the connected account
    async fn signing_client(&self) -> Result<Arc<dyn SigningClient>, SessionError>;
}

/// Active chain, account and asset for one flow
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferContext {
    /// Selected asset
    pub asset: AssetDescriptor,
    /// Connected account on the asset's chain, if any
    pub account: Option<String>,
}

impl TransferContext {
    /// Create a context
    pub fn new(asset: AssetDescriptor, account: Option<String>) -> Self {
        Self { asset, account }
    }

    /// Chain the context is bound to
    pub fn chain_name(&self) -> &str {
        &self.asset.chain_name
    }

    /// Connected account, ignoring blank addresses
    pub fn account(&self) -> Option<&str> {
        self.account.as_deref().filter(|a| !a.trim().is_empty())
    }
}
