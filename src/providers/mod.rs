//! Providers module for the elizaOS Sui Plugin.
//!
//! Providers inject context into the agent's prompt composition. They must
//! never fail the turn: a provider that cannot read its backing store
//! degrades to a neutral fallback text.

mod random_emotion;
mod user_data;

pub use random_emotion::RandomEmotionProvider;
pub use user_data::{UserDataCompletionProvider, UserDataProvider};

use async_trait::async_trait;

use crate::error::PluginResult;
use crate::runtime::IAgentRuntime;
use crate::types::{Memory, ProviderResult, State};

/// Trait that all providers must implement.
#[async_trait]
pub trait Provider: Send + Sync {
    /// Get the provider name.
    fn name(&self) -> &'static str;

    /// Get provider description.
    fn description(&self) -> &'static str;

    /// Whether this provider is dynamic (changes frequently).
    fn is_dynamic(&self) -> bool {
        true
    }

    /// Get the provider context.
    async fn get(
        &self,
        runtime: &dyn IAgentRuntime,
        message: &Memory,
        state: Option<&State>,
    ) -> PluginResult<ProviderResult>;
}
