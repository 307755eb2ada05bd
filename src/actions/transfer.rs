//! SEND_TOKEN action implementation.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;

use crate::error::PluginResult;
use crate::extract::{extract_transfer_params, to_base_units};
use crate::registry::SUI_DECIMALS;
use crate::runtime::IAgentRuntime;
use crate::services::SuiService;
use crate::types::{Memory, Reply, State, SuiActionTag};

use super::Action;

/// Action for transferring native SUI to another address.
pub struct TransferAction {
    service: Arc<dyn SuiService>,
}

impl TransferAction {
    pub fn new(service: Arc<dyn SuiService>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl Action for TransferAction {
    fn name(&self) -> &'static str {
        "SEND_TOKEN"
    }

    fn similes(&self) -> &'static [&'static str] {
        &[
            "TRANSFER_TOKEN",
            "TRANSFER_TOKENS",
            "SEND_TOKENS",
            "SEND_SUI",
            "PAY",
        ]
    }

    fn description(&self) -> &'static str {
        "Transfer tokens from address to another address"
    }

    async fn execute(
        &self,
        runtime: Arc<dyn IAgentRuntime>,
        message: &Memory,
        _state: Option<&State>,
    ) -> PluginResult<Reply> {
        info!("Starting SEND_TOKEN handler");

        let params = extract_transfer_params(runtime.as_ref(), &message.content.text).await?;
        let amount_base_units = to_base_units(&params.amount, SUI_DECIMALS)?;

        let result = self
            .service
            .transfer(amount_base_units, &params.sender, &params.recipient)
            .await?;

        Ok(Reply::new(format!(
            "Successfully transferred {} SUI to {}",
            params.amount, params.recipient
        ))
        .with_action(SuiActionTag::TransferToken.as_str())
        .with_param("amount", params.amount.clone())
        .with_param("recipient", params.recipient.clone())
        .with_param("txBytes", result.tx_bytes_base64))
    }
}
