// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Batch construction from a recipient list

use std::sync::Arc;

use tracing::debug;

use super::{BatchOperations, TransferBatch};
use crate::config::MultisendConfig;
use crate::errors::ValidationError;
use crate::spans;
use crate::types::asset::{AssetDescriptor, TransferKind};
use crate::types::fees::{Coin, Fee, GasLimit};
use crate::types::messages::{ContractCall, Cw20ExecuteMsg, MsgSend, MultiCall};
use crate::types::recipient::Recipient;
use crate::types::tokens::BaseAmount;
use crate::units::to_base;

/// Builds transfer batches using the configured gas and fee settings
#[derive(Debug, Clone)]
pub struct BatchBuilder {
    config: Arc<MultisendConfig>,
}

impl BatchBuilder {
    /// Create a builder
    pub fn new(config: Arc<MultisendConfig>) -> Self {
        Self { config }
    }

    /// Validate `recipients` and build the batch paying them from `sender`
    ///
    /// Validation is all-or-nothing and stops at the first bad entry. No
    /// network access happens here.
    ///
    /// # Errors
    ///
    /// - [`ValidationError::MissingSender`] if `sender` is blank
    /// - [`ValidationError::NoRecipients`] if `recipients` is empty
    /// - [`ValidationError::EmptyAddress`] for a recipient without address
    /// - [`ValidationError::InvalidAmount`] for an amount that is not a
    ///   non-negative decimal
    pub fn build(
        &self,
        asset: &AssetDescriptor,
        recipients: &[Recipient],
        sender: &str,
    ) -> Result<TransferBatch, ValidationError> {
        let span = spans::build_batch(&asset.chain_name, asset.kind.name(), recipients.len());
        let _guard = span.enter();

        let sender = sender.trim();
        if sender.is_empty() {
            return Err(ValidationError::MissingSender);
        }
        if recipients.is_empty() {
            return Err(ValidationError::NoRecipients);
        }

        let transfers = validate(recipients, asset)?;

        let (operations, per_operation) = match &asset.kind {
            TransferKind::Native => (
                bank_sends(sender, &asset.base_denom, transfers),
                self.config.gas_per_bank_send,
            ),
            TransferKind::Contract { address } => (
                contract_transfers(address, transfers),
                self.config.gas_per_contract_call,
            ),
        };

        let gas = per_operation.scaled(operations.len());
        let fee = self.fee(asset, gas);
        debug!(
            operations = operations.len(),
            gas = %gas,
            fee = %fee.amount.iter().map(Coin::to_string).collect::<Vec<_>>().join(","),
            "Built transfer batch"
        );

        Ok(TransferBatch {
            chain_name: asset.chain_name.clone(),
            sender: sender.to_string(),
            operations,
            fee,
            memo: self.config.memo.clone(),
        })
    }

    /// Flat fee for `asset`'s chain with the given gas limit
    pub fn fee(&self, asset: &AssetDescriptor, gas: GasLimit) -> Fee {
        let chain_name = &asset.chain_name;
        Fee::single(
            Coin::new(
                self.config.fee_denom(chain_name, &asset.base_denom),
                self.config.fee_amount(chain_name),
            ),
            gas,
        )
    }
}

/// Trimmed addresses paired with base-unit amounts, in input order
fn validate(
    recipients: &[Recipient],
    asset: &AssetDescriptor,
) -> Result<Vec<(String, BaseAmount)>, ValidationError> {
    recipients
        .iter()
        .enumerate()
        .map(|(index, recipient)| {
            let address = recipient.address.trim();
            if address.is_empty() {
                return Err(ValidationError::EmptyAddress { index });
            }
            let amount = to_base(&recipient.amount, asset.exponent)
                .map_err(|e| ValidationError::invalid_amount(index, e))?;
            Ok((address.to_string(), amount))
        })
        .collect()
}

fn bank_sends(sender: &str, denom: &str, transfers: Vec<(String, BaseAmount)>) -> BatchOperations {
    BatchOperations::Bank(
        transfers
            .into_iter()
            .map(|(to_address, amount)| MsgSend {
                from_address: sender.to_string(),
                to_address,
                amount: vec![Coin::new(denom, amount)],
            })
            .collect(),
    )
}

fn contract_transfers(
    contract_address: &str,
    transfers: Vec<(String, BaseAmount)>,
) -> BatchOperations {
    BatchOperations::Contract(MultiCall {
        calls: transfers
            .into_iter()
            .map(|(recipient, amount)| ContractCall {
                contract_address: contract_address.to_string(),
                msg: Cw20ExecuteMsg::Transfer { recipient, amount },
            })
            .collect(),
    })
}
