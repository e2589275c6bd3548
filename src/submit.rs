// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Signing and broadcasting a built batch

use tracing::{error, info, Instrument};

use crate::batch::{BatchOperations, TransferBatch};
use crate::client::SigningClient;
use crate::errors::SubmissionError;
use crate::spans;
use crate::types::receipt::TransferReceipt;

/// Sign and broadcast `batch` with `signer`
///
/// Makes exactly one broadcast attempt. A failure is returned with the
/// signer's error attached unchanged.
pub async fn submit(
    batch: &TransferBatch,
    signer: &dyn SigningClient,
) -> Result<TransferReceipt, SubmissionError> {
    let span = spans::submit_batch(&batch.chain_name, batch.recipient_count());
    async move {
        let memo = batch.memo_or_empty();
        let result = match &batch.operations {
            BatchOperations::Bank(messages) => {
                signer
                    .sign_and_broadcast(&batch.sender, messages, &batch.fee, memo)
                    .await
            }
            BatchOperations::Contract(multi_call) => {
                signer
                    .execute_multiple(&batch.sender, &multi_call.calls, &batch.fee, memo)
                    .await
            }
        };

        match result {
            Ok(response) => {
                info!(
                    tx_hash = %response.transaction_hash,
                    height = ?response.height,
                    recipients = batch.recipient_count(),
                    "Transfer batch broadcast"
                );
                Ok(TransferReceipt {
                    chain_name: batch.chain_name.clone(),
                    transaction_hash: response.transaction_hash,
                    recipient_count: batch.recipient_count(),
                })
            }
            Err(e) => {
                error!(error = %e, "Transfer batch broadcast failed");
                Err(SubmissionError::broadcast(&batch.chain_name, e))
            }
        }
    }
    .instrument(span)
    .await
}
