//! GET_BALANCE action implementation.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;

use crate::error::PluginResult;
use crate::extract::extract_required;
use crate::prompts;
use crate::runtime::IAgentRuntime;
use crate::services::SuiService;
use crate::types::{Memory, Reply, State, SuiActionTag};

use super::Action;

/// Action for looking up the native SUI balance of an address.
pub struct GetBalanceAction {
    service: Arc<dyn SuiService>,
}

impl GetBalanceAction {
    pub fn new(service: Arc<dyn SuiService>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl Action for GetBalanceAction {
    fn name(&self) -> &'static str {
        "GET_BALANCE"
    }

    fn similes(&self) -> &'static [&'static str] {
        &["CHECK_BALANCE"]
    }

    fn description(&self) -> &'static str {
        "Get the balance from address"
    }

    async fn execute(
        &self,
        runtime: Arc<dyn IAgentRuntime>,
        message: &Memory,
        _state: Option<&State>,
    ) -> PluginResult<Reply> {
        info!("Starting GET_BALANCE handler");

        let address = extract_required(
            runtime.as_ref(),
            "address",
            prompts::extract_address_prompt(&message.content.text),
        )
        .await?;

        let balance = self.service.balance(&address, None).await?;
        let balance_value = serde_json::to_value(&balance)?;

        Ok(Reply::new("Successfully get the balance from address")
            .with_action(SuiActionTag::GetBalance.as_str())
            .with_content("balance", balance_value.clone())
            .with_param("balance", balance_value))
    }
}
