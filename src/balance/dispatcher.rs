// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Balance query dispatcher

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tokio::sync::watch;
use tracing::{debug, warn, Instrument};

use super::endpoint::resolve_query_endpoint;
use super::{BalanceState, BalanceTicket, RefreshOutcome};
use crate::client::QueryClientFactory;
use crate::config::MultisendConfig;
use crate::errors::QueryError;
use crate::spans;
use crate::types::asset::{AssetDescriptor, TransferKind};
use crate::types::balance::BalanceSnapshot;
use crate::types::messages::{Cw20BalanceResponse, Cw20QueryMsg};
use crate::types::tokens::BaseAmount;

/// Fetches balances through the right query path and publishes the latest
///
/// # Thread Safety
///
/// `begin` and the publish step of `fetch` both run under the watch
/// channel's write lock, so the "is this still the latest request" check
/// cannot interleave with a new request being issued.
pub struct BalanceDispatcher {
    factory: Arc<dyn QueryClientFactory>,
    config: Arc<MultisendConfig>,
    latest: AtomicU64,
    state: watch::Sender<BalanceState>,
}

impl BalanceDispatcher {
    /// Create a dispatcher in the `Idle` state
    pub fn new(factory: Arc<dyn QueryClientFactory>, config: Arc<MultisendConfig>) -> Self {
        let (state, _) = watch::channel(BalanceState::Idle);
        Self {
            factory,
            config,
            latest: AtomicU64::new(0),
            state,
        }
    }

    /// Receive every published state change
    pub fn subscribe(&self) -> watch::Receiver<BalanceState> {
        self.state.subscribe()
    }

    /// Currently published state
    pub fn current(&self) -> BalanceState {
        self.state.borrow().clone()
    }

    /// Id of the most recently issued request
    pub fn latest_request_id(&self) -> u64 {
        self.latest.load(Ordering::SeqCst)
    }

    /// Start a lookup for `(account, asset)` and publish `Querying`
    ///
    /// Any lookup begun earlier is superseded from this point on.
    pub fn begin(&self, account: &str, asset: &AssetDescriptor) -> BalanceTicket {
        let account = account.trim().to_string();
        let mut request_id = 0;
        self.state.send_modify(|state| {
            request_id = self.latest.fetch_add(1, Ordering::SeqCst) + 1;
            *state = BalanceState::Querying {
                request_id,
                account: account.clone(),
                asset: asset.clone(),
            };
        });
        debug!(
            request_id,
            chain_name = %asset.chain_name,
            identity = %asset.identity(),
            "Balance lookup started"
        );
        BalanceTicket {
            id: request_id,
            account,
            asset: asset.clone(),
        }
    }

    /// Run the lookup for `ticket` and publish its result if still current
    ///
    /// `session_endpoint` is the endpoint the wallet offers for the asset's
    /// chain; see [`resolve_query_endpoint`] for the fallback order.
    pub async fn fetch(
        &self,
        ticket: BalanceTicket,
        session_endpoint: Option<&str>,
    ) -> RefreshOutcome {
        let span = spans::fetch_balance(
            ticket.id,
            &ticket.asset.chain_name,
            ticket.asset.kind.name(),
        );
        let result = self.query(&ticket, session_endpoint).instrument(span).await;

        let (next, outcome) = match result {
            Ok(amount) => {
                let snapshot = BalanceSnapshot::new(&ticket.account, ticket.asset.clone(), amount);
                (
                    BalanceState::Resolved(snapshot.clone()),
                    RefreshOutcome::Resolved(snapshot),
                )
            }
            Err(e) => {
                warn!(
                    request_id = ticket.id,
                    chain_name = %ticket.asset.chain_name,
                    account = %ticket.account,
                    error = %e,
                    "Balance lookup failed, publishing zero"
                );
                let snapshot = BalanceSnapshot::zero(&ticket.account, ticket.asset.clone());
                (
                    BalanceState::Failed {
                        snapshot: snapshot.clone(),
                        reason: e.to_string(),
                    },
                    RefreshOutcome::Failed(snapshot),
                )
            }
        };

        let published = self.state.send_if_modified(|state| {
            if self.latest.load(Ordering::SeqCst) != ticket.id {
                return false;
            }
            *state = next;
            true
        });

        if published {
            outcome
        } else {
            debug!(
                request_id = ticket.id,
                latest = self.latest_request_id(),
                "Discarding superseded balance result"
            );
            RefreshOutcome::Superseded
        }
    }

    /// Begin and fetch in one step
    pub async fn refresh(
        &self,
        account: &str,
        asset: &AssetDescriptor,
        session_endpoint: Option<&str>,
    ) -> RefreshOutcome {
        let ticket = self.begin(account, asset);
        self.fetch(ticket, session_endpoint).await
    }

    /// Return to `Idle`, superseding any lookup in flight
    pub fn reset(&self) {
        self.state.send_modify(|state| {
            self.latest.fetch_add(1, Ordering::SeqCst);
            *state = BalanceState::Idle;
        });
    }

    async fn query(
        &self,
        ticket: &BalanceTicket,
        session_endpoint: Option<&str>,
    ) -> Result<BaseAmount, QueryError> {
        let asset = &ticket.asset;
        if ticket.account.is_empty() {
            return Err(QueryError::MissingAccount {
                chain_name: asset.chain_name.clone(),
            });
        }

        let endpoint = resolve_query_endpoint(&self.config, &asset.chain_name, session_endpoint)?;
        debug!(endpoint = %endpoint, "Querying balance");
        let client = self.factory.connect(&endpoint).await?;

        match &asset.kind {
            TransferKind::Native => {
                let raw = client
                    .query_native_balance(&ticket.account, &asset.base_denom)
                    .await?;
                Ok(raw.parse()?)
            }
            TransferKind::Contract { address } => {
                let query = serde_json::to_value(Cw20QueryMsg::Balance {
                    address: ticket.account.clone(),
                })?;
                let response = client.query_smart_contract(address, &query).await?;
                let decoded: Cw20BalanceResponse = serde_json::from_value(response)
                    .map_err(|e| QueryError::malformed_response(e.to_string()))?;
                Ok(decoded.balance)
            }
        }
    }
}

impl std::fmt::Debug for BalanceDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BalanceDispatcher")
            .field("latest", &self.latest)
            .field("state", &*self.state.borrow())
            .finish_non_exhaustive()
    }
}
