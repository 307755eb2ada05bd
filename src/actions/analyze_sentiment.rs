//! ANALYZE_SENTIMENT action implementation.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;

use crate::error::PluginResult;
use crate::extract::extract_required;
use crate::prompts;
use crate::runtime::IAgentRuntime;
use crate::types::{Memory, Reply, State, SuiActionTag};

use super::Action;

/// Action that classifies the sentiment of the incoming message.
pub struct AnalyzeSentimentAction;

impl AnalyzeSentimentAction {
    pub fn new() -> Self {
        Self
    }
}

impl Default for AnalyzeSentimentAction {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Action for AnalyzeSentimentAction {
    fn name(&self) -> &'static str {
        "ANALYZE_SENTIMENT"
    }

    fn similes(&self) -> &'static [&'static str] {
        &["SENTIMENT", "CLASSIFY_SENTIMENT"]
    }

    fn description(&self) -> &'static str {
        "Analyze the sentiment of the message"
    }

    async fn execute(
        &self,
        runtime: Arc<dyn IAgentRuntime>,
        message: &Memory,
        _state: Option<&State>,
    ) -> PluginResult<Reply> {
        info!("Starting ANALYZE_SENTIMENT handler");

        let label = extract_required(
            runtime.as_ref(),
            "sentiment",
            prompts::analyze_sentiment_prompt(&message.content.text),
        )
        .await?;

        Ok(Reply::new(label.clone())
            .with_action(SuiActionTag::FilterTweets.as_str())
            .with_param("sentiment", label))
    }
}
