// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Multisend engine
//!
//! Ties asset resolution, the wallet session, balance lookups, batch
//! building and submission together around one [`TransferContext`].
//!
//! The engine never recomputes anything on its own. Callers invoke
//! [`select_asset`](MultisendEngine::select_asset) when the selection
//! changes, [`reload_account`](MultisendEngine::reload_account) when the
//! wallet account changes, and [`refresh_balance`](MultisendEngine::refresh_balance)
//! whenever they want a fresh balance.
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use cosmos_multisend::{MultisendConfig, MultisendEngine, Recipients};
//!
//! let mut engine = MultisendEngine::new(
//!     Arc::new(MultisendConfig::default()),
//!     registry,
//!     wallet_session,
//!     query_factory,
//! );
//!
//! engine.select_asset("juno-juno1neta").await?;
//!
//! let mut recipients = Recipients::new();
//! recipients.set_address(0, "juno1bob")?;
//! recipients.set_amount(0, "12.5")?;
//!
//! let receipt = engine.send(recipients.as_slice()).await?;
//! println!("{}", engine.explorer_url(&receipt)?);
//! ```

use std::sync::Arc;

use tokio::sync::watch;
use tracing::{info, Instrument};
use url::Url;

use crate::balance::{BalanceDispatcher, BalanceState, RefreshOutcome};
use crate::batch::{BatchBuilder, TransferBatch};
use crate::client::QueryClientFactory;
use crate::config::MultisendConfig;
use crate::errors::{MultisendError, ResolutionError, SubmissionError};
use crate::registry::AssetRegistry;
use crate::session::{TransferContext, WalletSession};
use crate::spans;
use crate::submit::submit;
use crate::types::receipt::TransferReceipt;
use crate::types::recipient::{Recipient, Recipients};

/// Asset-agnostic multisend engine
pub struct MultisendEngine {
    config: Arc<MultisendConfig>,
    registry: AssetRegistry,
    session: Arc<dyn WalletSession>,
    balances: BalanceDispatcher,
    builder: BatchBuilder,
    context: Option<TransferContext>,
}

impl MultisendEngine {
    /// Create an engine with no asset selected
    pub fn new(
        config: Arc<MultisendConfig>,
        registry: AssetRegistry,
        session: Arc<dyn WalletSession>,
        query_factory: Arc<dyn QueryClientFactory>,
    ) -> Self {
        Self {
            balances: BalanceDispatcher::new(query_factory, Arc::clone(&config)),
            builder: BatchBuilder::new(Arc::clone(&config)),
            config,
            registry,
            session,
            context: None,
        }
    }

    /// Select the asset named by `selection_key` and bind the session to it
    ///
    /// Switches the wallet to the asset's chain, connects, reads the account
    /// and only then refreshes the balance. Any previous selection is
    /// dropped first, so a failure here leaves no asset selected.
    ///
    /// Takes `&mut self`, so a refresh still pending on this engine must be
    /// dropped before switching. Dropping its future cancels the query, and
    /// the reset here supersedes whatever request id it held.
    pub async fn select_asset(&mut self, selection_key: &str) -> Result<(), MultisendError> {
        self.context = None;
        self.balances.reset();

        let span = spans::select_asset(selection_key);
        let context = async {
            let asset = self.registry.resolve(selection_key)?.clone();
            self.session.switch_active_chain(&asset.chain_name).await?;
            self.session.connect().await?;
            let account = self.session.current_account_address().await;
            info!(
                chain_name = %asset.chain_name,
                kind = asset.kind.name(),
                account = ?account,
                "Asset selected"
            );
            Ok::<_, MultisendError>(TransferContext::new(asset, account))
        }
        .instrument(span)
        .await?;

        self.context = Some(context);
        self.refresh_balance().await;
        Ok(())
    }

    /// Re-read the connected account and refresh the balance
    ///
    /// Call when the wallet reports an account change.
    pub async fn reload_account(&mut self) -> Option<RefreshOutcome> {
        let account = self.session.current_account_address().await;
        let context = self.context.as_mut()?;
        context.account = account;
        self.refresh_balance().await
    }

    /// Recompute the balance for the current context
    ///
    /// Returns `None` (and publishes `Idle`) when no asset is selected.
    pub async fn refresh_balance(&self) -> Option<RefreshOutcome> {
        let Some(context) = &self.context else {
            self.balances.reset();
            return None;
        };

        let span = spans::refresh_balance(context.chain_name());
        let outcome = async {
            let ticket = self
                .balances
                .begin(context.account().unwrap_or_default(), &context.asset);
            let endpoint = self.session.query_endpoint().await;
            self.balances.fetch(ticket, endpoint.as_deref()).await
        }
        .instrument(span)
        .await;
        Some(outcome)
    }

    /// Validate `recipients` and build the batch for the current context
    ///
    /// Performs no network access.
    pub fn build_batch(&self, recipients: &[Recipient]) -> Result<TransferBatch, MultisendError> {
        let context = self.context.as_ref().ok_or(ResolutionError::NoAssetSelected)?;
        Ok(self.builder.build(
            &context.asset,
            recipients,
            context.account().unwrap_or_default(),
        )?)
    }

    /// Build, sign and broadcast a batch paying `recipients`
    ///
    /// Validation happens before the signer is requested, so an invalid
    /// list never touches the network.
    pub async fn send(&self, recipients: &[Recipient]) -> Result<TransferReceipt, MultisendError> {
        let context = self.context.as_ref().ok_or(ResolutionError::NoAssetSelected)?;
        let span = spans::send(context.chain_name(), recipients.len());
        async {
            let batch = self.build_batch(recipients)?;
            let signer = self
                .session
                .signing_client()
                .await
                .map_err(SubmissionError::from)?;
            Ok::<_, MultisendError>(submit(&batch, signer.as_ref()).await?)
        }
        .instrument(span)
        .await
    }

    /// Sum of `recipients` in display units of the selected asset
    pub fn total_display(&self, recipients: &Recipients) -> Option<String> {
        let context = self.context.as_ref()?;
        Some(recipients.total_display(context.asset.exponent))
    }

    /// Explorer page for a receipt
    pub fn explorer_url(&self, receipt: &TransferReceipt) -> Result<Url, url::ParseError> {
        receipt.explorer_url(&self.config.explorer_base)
    }

    /// Receive balance state changes
    pub fn subscribe_balance(&self) -> watch::Receiver<BalanceState> {
        self.balances.subscribe()
    }

    /// Currently published balance state
    pub fn balance(&self) -> BalanceState {
        self.balances.current()
    }

    /// Current context, if an asset is selected
    pub fn context(&self) -> Option<&TransferContext> {
        self.context.as_ref()
    }

    /// Asset registry
    pub fn registry(&self) -> &AssetRegistry {
        &self.registry
    }

    /// Active configuration
    pub fn config(&self) -> &MultisendConfig {
        &self.config
    }
}
