// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Submission receipt type

use serde::{Deserialize, Serialize};
use url::Url;

/// Reference to a broadcast transfer batch
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferReceipt {
    /// Chain the batch was broadcast on
    pub chain_name: String,
    /// Transaction hash reported by the signing client
    pub transaction_hash: String,
    /// Number of recipients paid by the transaction
    pub recipient_count: usize,
}

impl TransferReceipt {
    /// Explorer page for the transaction: `{explorer_base}/{chain_name}/{hash}`
    ///
    /// # Examples
    ///
    /// ```
    /// use cosmos_multisend::TransferReceipt;
    ///
    /// let receipt = TransferReceipt {
    ///     chain_name: "juno".into(),
    ///     transaction_hash: "ABC123".into(),
    ///     recipient_count: 2,
    /// };
    /// let url = receipt.explorer_url("https://mintscan.io").unwrap();
    /// assert_eq!(url.as_str(), "https://mintscan.io/juno/ABC123");
    /// ```
    pub fn explorer_url(&self, explorer_base: &str) -> Result<Url, url::ParseError> {
        let base = if explorer_base.ends_with('/') {
            Url::parse(explorer_base)?
        } else {
            Url::parse(&format!("{explorer_base}/"))?
        };
        base.join(&format!("{}/{}", self.chain_name, self.transaction_hash))
    }
}
