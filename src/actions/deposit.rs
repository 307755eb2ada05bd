//! DEPOSIT_TOKEN action implementation.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;

use crate::error::PluginResult;
use crate::extract::extract_lending_params;
use crate::runtime::IAgentRuntime;
use crate::services::SuiService;
use crate::types::{Memory, Reply, State, SuiActionTag};

use super::Action;

/// Action for depositing a token into the Suilend lending market.
pub struct DepositAction {
    service: Arc<dyn SuiService>,
}

impl DepositAction {
    pub fn new(service: Arc<dyn SuiService>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl Action for DepositAction {
    fn name(&self) -> &'static str {
        "DEPOSIT_TOKEN"
    }

    fn similes(&self) -> &'static [&'static str] {
        &["DEPOSIT_TOKENS"]
    }

    fn description(&self) -> &'static str {
        "Deposit a token to the suilend protocol"
    }

    async fn execute(
        &self,
        runtime: Arc<dyn IAgentRuntime>,
        message: &Memory,
        _state: Option<&State>,
    ) -> PluginResult<Reply> {
        info!("Starting DEPOSIT_TOKEN handler");

        let params =
            extract_lending_params(runtime.as_ref(), &self.service, &message.content.text).await?;

        let result = self
            .service
            .deposit(&params.coin_type, params.amount_base_units()?, &params.address)
            .await?;

        Ok(Reply::new(format!(
            "Successfully deposited {} {} to suilend",
            params.amount, params.coin_symbol
        ))
        .with_action(SuiActionTag::DepositTokenSuilend.as_str())
        .with_content("coin_type", params.coin_type.clone())
        .with_content("amount", params.amount.clone())
        .with_param("txBytes", result.tx_bytes_base64))
    }
}
