//! GET_PORTFOLIO action implementation.

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

/// Action for fetching the DeFi portfolio held by an address.
pub struct GetPortfolioAction {
    service: Arc<dyn SuiService>,
}

impl GetPortfolioAction {
    pub fn new(service: Arc<dyn SuiService>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl Action for GetPortfolioAction {
    fn name(&self) -> &'static str {
        "GET_PORTFOLIO"
    }

    fn similes(&self) -> &'static [&'static str] {
        &["CHECK_PORTFOLIO"]
    }

    fn description(&self) -> &'static str {
        "Get the portfolio from address"
    }

    async fn execute(
        &self,
        runtime: Arc<dyn IAgentRuntime>,
        message: &Memory,
        _state: Option<&State>,
    ) -> PluginResult<Reply> {
        info!("Starting GET_PORTFOLIO handler");

        let address = extract_required(
            runtime.as_ref(),
            "address",
            prompts::extract_address_prompt(&message.content.text),
        )
        .await?;

        let portfolio = self.service.defi_portfolio(&address).await?;

        Ok(Reply::new("Successfully get the portfolio from address")
            .with_action(SuiActionTag::GetPortfolio.as_str())
            .with_content("portfolio", portfolio.clone())
            .with_param("portfolio", portfolio))
    }
}
