//! BORROW_TOKEN action implementation.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;

use crate::error::PluginResult;
use crate::extract::extract_lending_params;
use crate::runtime::IAgentRuntime;
use crate::services::SuiService;
use crate::types::{Memory, Reply, State, SuiActionTag};

use super::Action;

/// Action for borrowing a token against a Suilend obligation.
pub struct BorrowAction {
    service: Arc<dyn SuiService>,
}

impl BorrowAction {
    pub fn new(service: Arc<dyn SuiService>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl Action for BorrowAction {
    fn name(&self) -> &'static str {
        "BORROW_TOKEN"
    }

    fn similes(&self) -> &'static [&'static str] {
        &["BORROW_TOKENS"]
    }

    fn description(&self) -> &'static str {
        "Borrow a token from the suilend protocol"
    }

    async fn execute(
        &self,
        runtime: Arc<dyn IAgentRuntime>,
        message: &Memory,
        _state: Option<&State>,
    ) -> PluginResult<Reply> {
        info!("Starting BORROW_TOKEN handler");

        let params =
            extract_lending_params(runtime.as_ref(), &self.service, &message.content.text).await?;
        let amount_base_units = params.amount_base_units()?;

        let result = self
            .service
            .borrow(&params.coin_type, amount_base_units, &params.address)
            .await?;

        Ok(Reply::new(format!(
            "Successfully borrowed {} {} from suilend",
            params.amount, params.coin_symbol
        ))
        .with_action(SuiActionTag::BorrowTokenSuilend.as_str())
        .with_content("coinMetadata", serde_json::to_value(&params.metadata)?)
        .with_content("amount", amount_base_units.to_string())
        .with_content("txBytes", result.tx_bytes_base64))
    }
}
