// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Asset-agnostic multi-recipient transfers for Cosmos chains
//!
//! Given a selected asset, a list of `(address, amount)` recipients and a
//! connected account, the engine:
//!
//! - resolves the asset's on-chain identity and decimal exponent from a
//!   chain-registry asset list ([`AssetRegistry`])
//! - looks up the account's balance through the bank module or the CW20
//!   contract ([`BalanceDispatcher`])
//! - converts display amounts to base units and back exactly ([`to_base`],
//!   [`from_base`])
//! - builds one transaction paying everyone: N bank sends for native
//!   tokens, or one multi-call of N CW20 transfers ([`BatchBuilder`])
//! - signs, broadcasts once and reports the transaction hash ([`submit`])
//!
//! Wallet, RPC and signing stacks stay outside the crate behind the
//! [`WalletSession`], [`QueryClientFactory`] and [`SigningClient`] traits.
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use cosmos_multisend::{
//!     AssetDescriptor, BatchBuilder, BatchOperations, Exponent, MultisendConfig, Recipients,
//! };
//!
//! let neta = AssetDescriptor::contract(
//!     "juno", "juno1neta", "cw20:juno1neta", "neta", Exponent::MICRO, "NETA",
//! );
//!
//! let mut recipients = Recipients::new();
//! recipients.set_address(0, "juno1bob").unwrap();
//! recipients.set_amount(0, "2.5").unwrap();
//! let index = recipients.push_blank();
//! recipients.set_address(index, "juno1carol").unwrap();
//! recipients.set_amount(index, "0.5").unwrap();
//! assert_eq!(recipients.total_display(neta.exponent), "3");
//!
//! let builder = BatchBuilder::new(Arc::new(MultisendConfig::default()));
//! let batch = builder.build(&neta, recipients.as_slice(), "juno1alice").unwrap();
//! assert!(matches!(batch.operations, BatchOperations::Contract(_)));
//! assert_eq!(batch.fee.gas.as_u64(), 240_000);
//! ```

pub mod balance;
pub mod batch;
pub mod bootstrap;
pub mod client;
pub mod config;
pub mod engine;
pub mod errors;
pub mod registry;
pub mod session;
pub mod submit;
pub mod types;
pub mod units;

mod spans;

pub use balance::{
    resolve_query_endpoint, BalanceDispatcher, BalanceState, BalanceTicket, RefreshOutcome,
};
pub use batch::{BatchBuilder, BatchOperations, TransferBatch};
pub use client::{BroadcastResponse, ChainQueryClient, QueryClientFactory, SigningClient};
pub use config::{ChainConfig, MultisendConfig, MultisendConfigBuilder};
pub use engine::MultisendEngine;
pub use errors::{
    AmountError, ClientError, MultisendError, QueryError, RegistryError, ResolutionError,
    SessionError, SubmissionError, ValidationError,
};
pub use registry::{resolve_asset, AssetList, AssetRegistry, RegistryAsset};
pub use session::{TransferContext, WalletSession};
pub use submit::submit;
pub use types::asset::{AssetDescriptor, AssetKey, TransferKind};
pub use types::balance::BalanceSnapshot;
pub use types::fees::{Coin, Fee, GasLimit};
pub use types::messages::{
    ContractCall, Cw20BalanceResponse, Cw20ExecuteMsg, Cw20QueryMsg, MsgSend, MultiCall,
};
pub use types::receipt::TransferReceipt;
pub use types::recipient::{Recipient, Recipients};
pub use types::tokens::{BaseAmount, Exponent};
pub use units::{canonicalize, from_base, to_base, to_base_lenient};
