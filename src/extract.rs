//! Parameter extraction from free-text messages.
//!
//! A field extractor turns one message field into one line of text via a
//! single-purpose model instruction, stopping generation at the first
//! newline. Composite extractors sequence field extractors into the
//! parameter bundle one action needs, resolving coin symbols against the
//! capability collaborator. Resolution failures short-circuit here: a bundle
//! never reaches an invoker with a required field unresolved.

use std::sync::Arc;
use tracing::debug;

use crate::error::{PluginError, PluginResult};
use crate::prompts;
use crate::runtime::{IAgentRuntime, ModelParams, ModelType};
use crate::services::{CoinMetadata, SuiService};

/// Extract a single field as one trimmed line of text.
///
/// No retries and no validation beyond trimming; an empty result is turned
/// into an error by [`require`], which callers apply per field.
pub async fn extract_field(
    runtime: &dyn IAgentRuntime,
    field: &'static str,
    instruction: String,
) -> PluginResult<String> {
    let output = runtime
        .use_model(
            ModelType::TextMedium,
            ModelParams::with_prompt(instruction).with_stop("\n"),
        )
        .await?;
    let text = output
        .as_text()
        .ok_or_else(|| PluginError::ModelError("expected text output".to_string()))?;
    let value = text.trim().to_string();
    debug!(field, value = %value, "extracted field");
    Ok(value)
}

/// Treat an empty extracted value as a failure for the named field.
fn require(field: &'static str, value: String) -> PluginResult<String> {
    if value.is_empty() {
        Err(PluginError::EmptyExtraction(field))
    } else {
        Ok(value)
    }
}

/// Extract a single field and fail closed if it comes back empty.
pub async fn extract_required(
    runtime: &dyn IAgentRuntime,
    field: &'static str,
    instruction: String,
) -> PluginResult<String> {
    require(field, extract_field(runtime, field, instruction).await?)
}

/// Convert a human-readable amount to base units given coin decimals.
pub fn to_base_units(amount: &str, decimals: u8) -> PluginResult<u128> {
    let value: f64 = amount
        .parse()
        .map_err(|_| PluginError::InvalidAmount(amount.to_string()))?;
    if !value.is_finite() || value < 0.0 {
        return Err(PluginError::InvalidAmount(amount.to_string()));
    }
    Ok((value * 10f64.powi(decimals as i32)).round() as u128)
}

/// Parameter bundle for the Suilend lending actions.
#[derive(Debug, Clone)]
pub struct LendingParams {
    pub address: String,
    pub amount: String,
    pub coin_symbol: String,
    pub coin_type: String,
    pub metadata: CoinMetadata,
}

impl LendingParams {
    /// Amount in base units of the resolved coin.
    pub fn amount_base_units(&self) -> PluginResult<u128> {
        to_base_units(&self.amount, self.metadata.decimals)
    }
}

/// Extract address, amount and coin symbol for a lending action, then
/// resolve the symbol and fetch its metadata.
///
/// The fields are independent; they are extracted sequentially for log
/// readability. An unresolvable symbol fails closed.
pub async fn extract_lending_params(
    runtime: &dyn IAgentRuntime,
    service: &Arc<dyn SuiService>,
    text: &str,
) -> PluginResult<LendingParams> {
    let address = require(
        "address",
        extract_field(runtime, "address", prompts::extract_address_prompt(text)).await?,
    )?;
    let amount = require(
        "amount",
        extract_field(runtime, "amount", prompts::extract_amount_prompt(text)).await?,
    )?;
    let coin_symbol = require(
        "coin symbol",
        extract_field(
            runtime,
            "coin_symbol",
            prompts::extract_coin_symbol_prompt(text),
        )
        .await?,
    )?;

    let coin_type = service
        .resolve_symbol(&coin_symbol)
        .ok_or_else(|| PluginError::UnknownCoinSymbol(coin_symbol.clone()))?;
    debug!(%coin_type, "resolved coin symbol");

    let metadata = service.coin_metadata(&coin_type).await?;

    Ok(LendingParams {
        address,
        amount,
        coin_symbol,
        coin_type,
        metadata,
    })
}

/// Parameter bundle for a token swap.
#[derive(Debug, Clone)]
pub struct SwapParams {
    pub address: String,
    pub amount: String,
    pub from_symbol: String,
    pub to_symbol: String,
    pub from_coin_type: String,
    pub to_coin_type: String,
    pub from_metadata: CoinMetadata,
    pub to_metadata: CoinMetadata,
}

impl SwapParams {
    /// Input amount in base units of the source coin.
    pub fn amount_base_units(&self) -> PluginResult<u128> {
        to_base_units(&self.amount, self.from_metadata.decimals)
    }
}

/// Extract and resolve both legs of a swap. Either symbol failing to
/// resolve fails the whole bundle.
pub async fn extract_swap_params(
    runtime: &dyn IAgentRuntime,
    service: &Arc<dyn SuiService>,
    text: &str,
) -> PluginResult<SwapParams> {
    let address = require(
        "address",
        extract_field(runtime, "address", prompts::extract_address_prompt(text)).await?,
    )?;
    let amount = require(
        "amount",
        extract_field(runtime, "amount", prompts::extract_amount_prompt(text)).await?,
    )?;
    let from_symbol = require(
        "source coin symbol",
        extract_field(
            runtime,
            "from_symbol",
            prompts::extract_coin_symbol_prompt(text),
        )
        .await?,
    )?;
    let to_symbol = require(
        "destination coin symbol",
        extract_field(
            runtime,
            "to_symbol",
            prompts::extract_target_coin_symbol_prompt(text),
        )
        .await?,
    )?;

    let from_coin_type = service
        .resolve_symbol(&from_symbol)
        .ok_or_else(|| PluginError::UnknownCoinSymbol(from_symbol.clone()))?;
    let to_coin_type = service
        .resolve_symbol(&to_symbol)
        .ok_or_else(|| PluginError::UnknownCoinSymbol(to_symbol.clone()))?;

    let from_metadata = service.coin_metadata(&from_coin_type).await?;
    let to_metadata = service.coin_metadata(&to_coin_type).await?;

    Ok(SwapParams {
        address,
        amount,
        from_symbol,
        to_symbol,
        from_coin_type,
        to_coin_type,
        from_metadata,
        to_metadata,
    })
}

/// Parameter bundle for a native SUI transfer.
#[derive(Debug, Clone)]
pub struct TransferParams {
    pub sender: String,
    pub recipient: String,
    pub amount: String,
}

/// Extract sender, recipient and amount for a transfer.
pub async fn extract_transfer_params(
    runtime: &dyn IAgentRuntime,
    text: &str,
) -> PluginResult<TransferParams> {
    let sender = require(
        "sender address",
        extract_field(runtime, "sender", prompts::extract_address_prompt(text)).await?,
    )?;
    let recipient = require(
        "recipient address",
        extract_field(
            runtime,
            "recipient",
            prompts::extract_recipient_prompt(text),
        )
        .await?,
    )?;
    let amount = require(
        "amount",
        extract_field(runtime, "amount", prompts::extract_amount_prompt(text)).await?,
    )?;

    Ok(TransferParams {
        sender,
        recipient,
        amount,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_units_scale_by_decimals() {
        assert_eq!(to_base_units("1", 9).unwrap(), 1_000_000_000);
        assert_eq!(to_base_units("0.5", 6).unwrap(), 500_000);
        assert_eq!(to_base_units("2.25", 2).unwrap(), 225);
    }

    #[test]
    fn bad_amounts_fail_closed() {
        assert!(to_base_units("one", 9).is_err());
        assert!(to_base_units("-1", 9).is_err());
        assert!(to_base_units("", 9).is_err());
    }

    #[test]
    fn require_rejects_empty_values() {
        assert!(require("amount", String::new()).is_err());
        assert_eq!(require("amount", "1".to_string()).unwrap(), "1");
    }
}
