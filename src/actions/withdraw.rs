//! WITHDRAW_TOKEN action implementation.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;

use crate::error::PluginResult;
use crate::extract::extract_lending_params;
use crate::runtime::IAgentRuntime;
use crate::services::SuiService;
use crate::types::{Memory, Reply, State, SuiActionTag};

use super::Action;

/// Action for withdrawing a deposited token from the Suilend lending market.
pub struct WithdrawAction {
    service: Arc<dyn SuiService>,
}

impl WithdrawAction {
    pub fn new(service: Arc<dyn SuiService>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl Action for WithdrawAction {
    fn name(&self) -> &'static str {
        "WITHDRAW_TOKEN"
    }

    fn similes(&self) -> &'static [&'static str] {
        &["WITHDRAW_TOKENS"]
    }

    fn description(&self) -> &'static str {
        "Withdraw a token from the suilend protocol"
    }

    async fn execute(
        &self,
        runtime: Arc<dyn IAgentRuntime>,
        message: &Memory,
        _state: Option<&State>,
    ) -> PluginResult<Reply> {
        info!("Starting WITHDRAW_TOKEN handler");

        let params =
            extract_lending_params(runtime.as_ref(), &self.service, &message.content.text).await?;

        let result = self
            .service
            .withdraw(&params.coin_type, params.amount_base_units()?, &params.address)
            .await?;

        Ok(Reply::new(format!(
            "Successfully withdrew {} {} from suilend",
            params.amount, params.coin_symbol
        ))
        .with_action(SuiActionTag::WithdrawTokenSuilend.as_str())
        .with_param("coinMetadata", serde_json::to_value(&params.metadata)?)
        .with_param("amount", params.amount.clone())
        .with_param("txBytes", result.tx_bytes_base64))
    }
}
