//! CURRENT_NEWS action implementation.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;

use crate::error::PluginResult;
use crate::extract::extract_required;
use crate::prompts;
use crate::runtime::IAgentRuntime;
use crate::services::NewsFeed;
use crate::types::{Memory, Reply, State, SuiActionTag};

use super::Action;

/// Action for fetching a digest of current news on a topic.
pub struct CurrentNewsAction {
    news: Arc<dyn NewsFeed>,
}

impl CurrentNewsAction {
    pub fn new(news: Arc<dyn NewsFeed>) -> Self {
        Self { news }
    }
}

#[async_trait]
impl Action for CurrentNewsAction {
    fn name(&self) -> &'static str {
        "CURRENT_NEWS"
    }

    fn similes(&self) -> &'static [&'static str] {
        &["NEWS", "GET_NEWS", "LATEST_NEWS"]
    }

    fn description(&self) -> &'static str {
        "Get the current news for a search term if asked by the user"
    }

    async fn execute(
        &self,
        runtime: Arc<dyn IAgentRuntime>,
        message: &Memory,
        _state: Option<&State>,
    ) -> PluginResult<Reply> {
        info!("Starting CURRENT_NEWS handler");

        let search_term = extract_required(
            runtime.as_ref(),
            "search_term",
            prompts::extract_search_term_prompt(&message.content.text),
        )
        .await?;

        let digest = self.news.current_news(&search_term).await?;

        Ok(Reply::new(format!(
            "Here are the current news for {search_term}:\n{digest}"
        ))
        .with_action(SuiActionTag::CurrentNewsResponse.as_str())
        .with_param("search_term", search_term))
    }
}
