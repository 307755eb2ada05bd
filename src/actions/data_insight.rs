//! DATA_INSIGHT action implementation.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::info;

use crate::error::{PluginError, PluginResult};
use crate::extract::extract_required;
use crate::prompts;
use crate::runtime::IAgentRuntime;
use crate::services::{collect_post_texts, VaultStore};
use crate::types::{Memory, Reply, State, SuiActionTag};

use super::Action;

/// Action that answers a question against posts collected in the user's
/// storage vault.
pub struct DataInsightAction {
    vault: Arc<dyn VaultStore>,
}

impl DataInsightAction {
    pub fn new(vault: Arc<dyn VaultStore>) -> Self {
        Self { vault }
    }
}

#[async_trait]
impl Action for DataInsightAction {
    fn name(&self) -> &'static str {
        "DATA_INSIGHT"
    }

    fn similes(&self) -> &'static [&'static str] {
        &["GIVE_INSIGHT", "ANALYZE_DATA"]
    }

    fn description(&self) -> &'static str {
        "Give an insight about the data stored in the vault"
    }

    async fn execute(
        &self,
        runtime: Arc<dyn IAgentRuntime>,
        message: &Memory,
        _state: Option<&State>,
    ) -> PluginResult<Reply> {
        info!("Starting DATA_INSIGHT handler");

        let address = runtime
            .get_setting("TUSKY_USER_ADDRESS")
            .ok_or_else(|| PluginError::Internal("TUSKY_USER_ADDRESS is not set".to_string()))?;

        let documents = self.vault.fetch_user_documents(&address).await?;
        let posts = collect_post_texts(&documents);
        if posts.is_empty() {
            return Err(PluginError::Internal(
                "no posts found in the vault".to_string(),
            ));
        }

        let answer = extract_required(
            runtime.as_ref(),
            "insight",
            prompts::analyze_post_prompt(&message.content.text, &posts.join("\n")),
        )
        .await?;

        Ok(Reply::new(answer.clone())
            .with_action(SuiActionTag::InsightData.as_str())
            .with_param("insight", answer))
    }
}
