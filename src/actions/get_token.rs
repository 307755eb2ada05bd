//! GET_METADATA_TOKEN action implementation.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;

use crate::error::{PluginError, PluginResult};
use crate::extract::extract_required;
use crate::prompts;
use crate::runtime::IAgentRuntime;
use crate::services::SuiService;
use crate::types::{Memory, Reply, State, SuiActionTag};

use super::Action;

/// Action for looking up on-chain metadata of a token by symbol.
pub struct GetTokenAction {
    service: Arc<dyn SuiService>,
}

impl GetTokenAction {
    pub fn new(service: Arc<dyn SuiService>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl Action for GetTokenAction {
    fn name(&self) -> &'static str {
        "GET_METADATA_TOKEN"
    }

    fn similes(&self) -> &'static [&'static str] {
        &["GET_TOKEN_METADATA", "TOKEN_INFO"]
    }

    fn description(&self) -> &'static str {
        "Get the token metadata"
    }

    async fn execute(
        &self,
        runtime: Arc<dyn IAgentRuntime>,
        message: &Memory,
        _state: Option<&State>,
    ) -> PluginResult<Reply> {
        info!("Starting GET_METADATA_TOKEN handler");

        let coin_symbol = extract_required(
            runtime.as_ref(),
            "coin_symbol",
            prompts::extract_coin_symbol_prompt(&message.content.text),
        )
        .await?;

        let coin_type = self
            .service
            .resolve_symbol(&coin_symbol)
            .ok_or_else(|| PluginError::UnknownCoinSymbol(coin_symbol.clone()))?;

        let metadata = self.service.coin_metadata(&coin_type).await?;
        let token = serde_json::to_value(&metadata)?;

        Ok(Reply::new("Successfully get the token metadata")
            .with_action(SuiActionTag::GetMetadataToken.as_str())
            .with_content("coin_type", coin_type.clone())
            .with_param("token", token))
    }
}
