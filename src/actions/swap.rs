//! SWAP_TOKEN action implementation.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;

use crate::error::PluginResult;
use crate::extract::extract_swap_params;
use crate::runtime::IAgentRuntime;
use crate::services::SuiService;
use crate::types::{Memory, Reply, State, SuiActionTag};

use super::Action;

/// Action for swapping one token for another via the DEX aggregator.
pub struct SwapAction {
    service: Arc<dyn SuiService>,
}

impl SwapAction {
    pub fn new(service: Arc<dyn SuiService>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl Action for SwapAction {
    fn name(&self) -> &'static str {
        "SWAP_TOKEN"
    }

    fn similes(&self) -> &'static [&'static str] {
        &["SWAP_TOKENS"]
    }

    fn description(&self) -> &'static str {
        "Swap from any token to another token"
    }

    async fn execute(
        &self,
        runtime: Arc<dyn IAgentRuntime>,
        message: &Memory,
        _state: Option<&State>,
    ) -> PluginResult<Reply> {
        info!("Starting SWAP_TOKEN handler");

        let params =
            extract_swap_params(runtime.as_ref(), &self.service, &message.content.text).await?;

        // Minimum-out is left at zero; slippage control is the aggregator's.
        let result = self
            .service
            .swap(
                &params.from_coin_type,
                params.amount_base_units()?,
                0,
                &params.to_coin_type,
                &params.address,
            )
            .await?;

        Ok(Reply::new(format!(
            "Successfully swapped {} {} to {}",
            params.amount, params.from_metadata.symbol, params.to_metadata.symbol
        ))
        .with_action(SuiActionTag::SwapToken.as_str())
        .with_param("from_token", serde_json::to_value(&params.from_metadata)?)
        .with_param("destination_token", serde_json::to_value(&params.to_metadata)?)
        .with_param("amount", params.amount.clone())
        .with_param("txBytes", result.tx_bytes_base64))
    }
}
