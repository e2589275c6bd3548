use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context;
use dotenvy::dotenv;
use serde::Serialize;
use tracing::info;

use crate::{
    batch::{BatchBuilder, TransferBatch},
    config::{MultisendConfig, MultisendConfigBuilder},
    registry::AssetRegistry,
    types::{recipient::Recipients, tokens::BaseAmount},
};

/// Main entry point for the dry-run planner.
///
/// Loads the registry and recipients named by the environment, builds the
/// batch without touching the network and prints it as JSON on stdout.
pub async fn run() -> anyhow::Result<()> {
    // Load environment variables
    dotenv().ok();

    let settings = PlannerSettings::from_vars(|key| dotenvy::var(key).ok())?;

    let registry = load_registry(&settings.registry_path).await?;
    let recipients = load_recipients(&settings.recipients_path).await?;
    info!(
        assets = registry.len(),
        recipients = recipients.len(),
        "Loaded planner inputs"
    );

    let plan = plan_transfer(
        &registry,
        &settings.selection_key,
        &recipients,
        &settings.sender,
        Arc::new(settings.config()),
    )?;

    println!("{}", serde_json::to_string_pretty(&plan)?);
    Ok(())
}

/// Planner inputs read from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannerSettings {
    /// `MULTISEND_REGISTRY`: JSON array of chain-registry asset lists
    pub registry_path: PathBuf,
    /// `MULTISEND_RECIPIENTS`: JSON array of `{address, amount}`
    pub recipients_path: PathBuf,
    /// `MULTISEND_ASSET`: selection key, e.g. `cosmoshub-uatom`
    pub selection_key: String,
    /// `MULTISEND_SENDER`: paying account
    pub sender: String,
    /// `MULTISEND_FEE_AMOUNT`: flat fee override in base units
    pub fee_amount: Option<BaseAmount>,
    /// `MULTISEND_MEMO`: memo attached to the batch
    pub memo: Option<String>,
}

impl PlannerSettings {
    /// Read settings through `var`, which returns a variable's value if set.
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let required = |key: &str| {
            var(key)
                .filter(|value| !value.trim().is_empty())
                .with_context(|| format!("{key} must be set"))
        };

        let fee_amount = var("MULTISEND_FEE_AMOUNT")
            .map(|raw| raw.parse::<BaseAmount>())
            .transpose()
            .context("Invalid MULTISEND_FEE_AMOUNT")?;

        Ok(Self {
            registry_path: required("MULTISEND_REGISTRY")?.into(),
            recipients_path: required("MULTISEND_RECIPIENTS")?.into(),
            selection_key: required("MULTISEND_ASSET")?,
            sender: required("MULTISEND_SENDER")?,
            fee_amount,
            memo: var("MULTISEND_MEMO").filter(|memo| !memo.is_empty()),
        })
    }

    /// Configuration with the overrides applied on top of common defaults.
    pub fn config(&self) -> MultisendConfig {
        let mut builder = MultisendConfigBuilder::with_defaults();
        if let Some(fee_amount) = &self.fee_amount {
            builder = builder.fee_amount(fee_amount.clone());
        }
        if let Some(memo) = &self.memo {
            builder = builder.memo(memo.clone());
        }
        builder.build()
    }
}

/// Load an asset registry from a JSON file.
pub async fn load_registry(path: &Path) -> anyhow::Result<AssetRegistry> {
    let json = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read registry {}", path.display()))?;
    AssetRegistry::from_json(&json)
        .with_context(|| format!("Failed to decode registry {}", path.display()))
}

/// Load a recipient list from a JSON file.
pub async fn load_recipients(path: &Path) -> anyhow::Result<Recipients> {
    let json = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read recipients {}", path.display()))?;
    serde_json::from_str(&json)
        .with_context(|| format!("Failed to decode recipients {}", path.display()))
}

/// A batch as it would be signed, with the exact total it transfers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransferPlan {
    /// Selection key of the asset
    pub selection_key: String,
    /// Asset ticker
    pub symbol: String,
    /// Sum of all amounts in display units
    pub total: String,
    /// Sum of all amounts in base units
    pub total_base: BaseAmount,
    /// The batch to sign
    pub batch: TransferBatch,
}

/// Resolve the asset and build its batch.
pub fn plan_transfer(
    registry: &AssetRegistry,
    selection_key: &str,
    recipients: &Recipients,
    sender: &str,
    config: Arc<MultisendConfig>,
) -> anyhow::Result<TransferPlan> {
    let asset = registry.resolve(selection_key)?;
    let batch = BatchBuilder::new(config).build(asset, recipients.as_slice(), sender)?;

    Ok(TransferPlan {
        selection_key: asset.selection_key(),
        symbol: asset.symbol.clone(),
        total: recipients.total_display(asset.exponent),
        total_base: recipients.total(asset.exponent),
        batch,
    })
}
