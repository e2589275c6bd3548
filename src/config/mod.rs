// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Configuration for fees, endpoints and explorer links
//!
//! # Example: Using defaults
//!
//! ```rust
//! use cosmos_multisend::MultisendConfig;
//!
//! // 30k gas per bank send, 120k per contract call, flat 2000 fee,
//! // fee denoms preset for common CosmWasm chains
//! let config = MultisendConfig::default();
//! assert_eq!(config.fee_denom("juno", "cw20:juno1token"), "ujuno");
//! ```
//!
//! # Example: Custom configuration
//!
//! ```rust
//! use cosmos_multisend::{BaseAmount, MultisendConfigBuilder};
//!
//! let config = MultisendConfigBuilder::with_defaults()
//!     .fee_amount(BaseAmount::from(5_000u64))
//!     .chain_fee_denom("akash", "uakt")
//!     .memo("payroll")
//!     .build();
//! assert_eq!(config.fee_amount("akash"), BaseAmount::from(5_000u64));
//! ```

use std::collections::HashMap;

use url::Url;

use crate::types::fees::GasLimit;
use crate::types::tokens::BaseAmount;

pub mod constants;

/// Configuration for batch fees and network endpoints
///
/// Use [`MultisendConfigBuilder`] for a fluent API to construct instances.
#[derive(Debug, Clone)]
pub struct MultisendConfig {
    /// Gas per `MsgSend` in a native batch
    /// Default: 30 000
    pub gas_per_bank_send: GasLimit,

    /// Gas per CW20 `transfer` in a contract batch
    /// Default: 120 000
    pub gas_per_contract_call: GasLimit,

    /// Flat fee amount per batch, in base units of the fee denom
    /// Default: 2000
    pub fee_amount: BaseAmount,

    /// Public RPC directory used when the wallet offers no endpoint
    /// Default: `https://rpc.cosmos.directory/`
    pub rpc_directory: String,

    /// Block explorer base for receipt links
    /// Default: `https://mintscan.io/`
    pub explorer_base: String,

    /// Memo attached to every batch
    /// Default: None
    pub memo: Option<String>,

    /// Chain-specific overrides, keyed by registry chain name
    pub chain_overrides: HashMap<String, ChainConfig>,
}

/// Chain-specific configuration overrides
#[derive(Debug, Clone, Default)]
pub struct ChainConfig {
    /// Denom fees are paid in (otherwise the transferred asset's base denom)
    pub fee_denom: Option<String>,

    /// Override the flat fee amount for this chain
    pub fee_amount: Option<BaseAmount>,

    /// Query endpoint to use when the wallet offers none
    pub query_endpoint: Option<Url>,
}

impl Default for MultisendConfig {
    fn default() -> Self {
        Self::with_common_defaults()
    }
}

impl MultisendConfig {
    /// Create config with fee denoms preset for common CosmWasm chains
    ///
    /// CW20 assets have no bank denom to pay fees in, so chains that host
    /// them get their native fee denom preset.
    pub fn with_common_defaults() -> Self {
        let mut config = Self::minimal();
        for (chain_name, denom) in constants::fee_denoms::ALL {
            config.set_chain_override(
                chain_name,
                ChainConfig {
                    fee_denom: Some(denom.to_string()),
                    ..ChainConfig::default()
                },
            );
        }
        config
    }

    /// Create config with no chain overrides
    ///
    /// Fees are paid in the transferred asset's base denom on every chain.
    pub fn minimal() -> Self {
        Self {
            gas_per_bank_send: GasLimit::new(constants::GAS_PER_BANK_SEND),
            gas_per_contract_call: GasLimit::new(constants::GAS_PER_CONTRACT_CALL),
            fee_amount: BaseAmount::from(constants::DEFAULT_FEE_AMOUNT),
            rpc_directory: constants::RPC_DIRECTORY.to_string(),
            explorer_base: constants::EXPLORER_BASE.to_string(),
            memo: None,
            chain_overrides: HashMap::new(),
        }
    }

    /// Get the fee denom for a chain
    ///
    /// Returns the chain override if set, otherwise `asset_base_denom`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use cosmos_multisend::MultisendConfig;
    ///
    /// let config = MultisendConfig::minimal();
    /// assert_eq!(config.fee_denom("cosmoshub", "uatom"), "uatom");
    /// ```
    pub fn fee_denom(&self, chain_name: &str, asset_base_denom: &str) -> String {
        self.chain_overrides
            .get(chain_name)
            .and_then(|c| c.fee_denom.clone())
            .unwrap_or_else(|| asset_base_denom.to_string())
    }

    /// Get the effective flat fee amount for a chain
    pub fn fee_amount(&self, chain_name: &str) -> BaseAmount {
        self.chain_overrides
            .get(chain_name)
            .and_then(|c| c.fee_amount.clone())
            .unwrap_or_else(|| self.fee_amount.clone())
    }

    /// Get the configured query endpoint for a chain, if any
    pub fn query_endpoint(&self, chain_name: &str) -> Option<&Url> {
        self.chain_overrides
            .get(chain_name)
            .and_then(|c| c.query_endpoint.as_ref())
    }

    /// Public directory endpoint for a chain: `{rpc_directory}{chain_name}`
    ///
    /// # Example
    ///
    /// ```rust
    /// use cosmos_multisend::MultisendConfig;
    ///
    /// let config = MultisendConfig::default();
    /// let url = config.directory_endpoint("osmosis").unwrap();
    /// assert_eq!(url.as_str(), "https://rpc.cosmos.directory/osmosis");
    /// ```
    pub fn directory_endpoint(&self, chain_name: &str) -> Result<Url, url::ParseError> {
        let directory = if self.rpc_directory.ends_with('/') {
            Url::parse(&self.rpc_directory)?
        } else {
            Url::parse(&format!("{}/", self.rpc_directory))?
        };
        directory.join(chain_name)
    }

    /// Set chain-specific override
    pub fn set_chain_override(&mut self, chain_name: impl Into<String>, config: ChainConfig) {
        self.chain_overrides.insert(chain_name.into(), config);
    }
}

/// Builder for [`MultisendConfig`]
///
/// # Example
///
/// ```rust
/// use cosmos_multisend::{GasLimit, MultisendConfigBuilder};
///
/// let config = MultisendConfigBuilder::new()
///     .gas_per_bank_send(GasLimit::new(40_000))
///     .rpc_directory("https://rpc.example.org/")
///     .build();
/// assert_eq!(config.gas_per_bank_send, GasLimit::new(40_000));
/// ```
pub struct MultisendConfigBuilder {
    config: MultisendConfig,
}

impl Default for MultisendConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl MultisendConfigBuilder {
    /// Create a new builder with minimal defaults
    pub fn new() -> Self {
        Self {
            config: MultisendConfig::minimal(),
        }
    }

    /// Start with common defaults
    ///
    /// Initializes the builder with the same defaults as
    /// [`MultisendConfig::with_common_defaults`].
    pub fn with_defaults() -> Self {
        Self {
            config: MultisendConfig::with_common_defaults(),
        }
    }

    /// Set gas per bank send
    pub fn gas_per_bank_send(mut self, gas: GasLimit) -> Self {
        self.config.gas_per_bank_send = gas;
        self
    }

    /// Set gas per contract call
    pub fn gas_per_contract_call(mut self, gas: GasLimit) -> Self {
        self.config.gas_per_contract_call = gas;
        self
    }

    /// Set the global flat fee amount
    pub fn fee_amount(mut self, amount: BaseAmount) -> Self {
        self.config.fee_amount = amount;
        self
    }

    /// Set the RPC directory used for fallback endpoints
    pub fn rpc_directory(mut self, directory: impl Into<String>) -> Self {
        self.config.rpc_directory = directory.into();
        self
    }

    /// Set the explorer base for receipt links
    pub fn explorer_base(mut self, base: impl Into<String>) -> Self {
        self.config.explorer_base = base.into();
        self
    }

    /// Set the memo attached to every batch
    pub fn memo(mut self, memo: impl Into<String>) -> Self {
        self.config.memo = Some(memo.into());
        self
    }

    /// Add chain-specific configuration
    pub fn chain_config(mut self, chain_name: impl Into<String>, config: ChainConfig) -> Self {
        self.config.set_chain_override(chain_name, config);
        self
    }

    /// Convenience: set the fee denom for a specific chain
    ///
    /// Keeps any other override already present for the chain.
    pub fn chain_fee_denom(
        mut self,
        chain_name: impl Into<String>,
        denom: impl Into<String>,
    ) -> Self {
        self.config
            .chain_overrides
            .entry(chain_name.into())
            .or_default()
            .fee_denom = Some(denom.into());
        self
    }

    /// Convenience: set the query endpoint for a specific chain
    pub fn chain_query_endpoint(mut self, chain_name: impl Into<String>, endpoint: Url) -> Self {
        self.config
            .chain_overrides
            .entry(chain_name.into())
            .or_default()
            .query_endpoint = Some(endpoint);
        self
    }

    /// Build the final configuration
    pub fn build(self) -> MultisendConfig {
        self.config
    }
}
