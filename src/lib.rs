//! elizaOS Sui Plugin - Rust implementation.
//!
//! This crate gives an elizaOS agent a Sui DeFi surface: token transfers,
//! DEX swaps, Suilend lending, balance and portfolio lookups, plus news and
//! vault-data analysis actions and a profile-memory evaluator/provider pair.
//!
//! Actions follow one pipeline: validate the inbound message, extract a
//! parameter bundle through the runtime's model, invoke a capability
//! collaborator, and hand exactly one reply to the runtime callback.
//!
//! # Usage
//!
//! ```rust,ignore
//! use elizaos_plugin_sui::SuiPlugin;
//!
//! let plugin = SuiPlugin::new(sui_service, vault_store, news_feed);
//! runtime.register_plugin(plugin).await?;
//! ```

pub mod actions;
pub mod error;
pub mod evaluators;
pub mod extract;
pub mod prompts;
pub mod providers;
pub mod registry;
pub mod runtime;
pub mod services;
pub mod types;

use std::sync::Arc;
use tracing::info;

use actions::{
    Action, AnalyzeSentimentAction, BorrowAction, CurrentNewsAction, DataInsightAction,
    DepositAction, GetBalanceAction, GetPortfolioAction, GetTokenAction, RepayAction, SwapAction,
    TransferAction, WithdrawAction,
};
use evaluators::{Evaluator, UserDataEvaluator};
use providers::{Provider, RandomEmotionProvider, UserDataCompletionProvider, UserDataProvider};
use services::{NewsFeed, SuiService, VaultStore};

pub use error::{PluginError, PluginResult};
pub use runtime::IAgentRuntime;

/// The Sui Plugin.
///
/// Capability collaborators are injected once at construction; every action
/// holds its own handle, so the plugin carries no global state.
pub struct SuiPlugin {
    /// Plugin name
    pub name: &'static str,
    /// Plugin description
    pub description: &'static str,
    /// Available actions
    pub actions: Vec<Box<dyn Action>>,
    /// Available providers
    pub providers: Vec<Box<dyn Provider>>,
    /// Available evaluators
    pub evaluators: Vec<Box<dyn Evaluator>>,
}

impl SuiPlugin {
    /// Create the plugin with its capability collaborators.
    pub fn new(
        service: Arc<dyn SuiService>,
        vault: Arc<dyn VaultStore>,
        news: Arc<dyn NewsFeed>,
    ) -> Self {
        let actions: Vec<Box<dyn Action>> = vec![
            Box::new(TransferAction::new(service.clone())),
            Box::new(SwapAction::new(service.clone())),
            Box::new(DepositAction::new(service.clone())),
            Box::new(WithdrawAction::new(service.clone())),
            Box::new(BorrowAction::new(service.clone())),
            Box::new(RepayAction::new(service.clone())),
            Box::new(GetBalanceAction::new(service.clone())),
            Box::new(GetPortfolioAction::new(service.clone())),
            Box::new(GetTokenAction::new(service)),
            Box::new(CurrentNewsAction::new(news)),
            Box::new(DataInsightAction::new(vault)),
            Box::new(AnalyzeSentimentAction::new()),
        ];

        let providers: Vec<Box<dyn Provider>> = vec![
            Box::new(UserDataProvider),
            Box::new(UserDataCompletionProvider),
            Box::new(RandomEmotionProvider),
        ];

        let evaluators: Vec<Box<dyn Evaluator>> = vec![Box::new(UserDataEvaluator)];

        Self {
            name: "sui",
            description: "Sui DeFi plugin: transfers, swaps, Suilend lending, portfolio lookups, \
                          news and vault-data analysis, and user profile memory",
            actions,
            providers,
            evaluators,
        }
    }

    /// Initialize the plugin with a runtime.
    pub async fn init(&self, runtime: Arc<dyn IAgentRuntime>) -> PluginResult<()> {
        info!(
            agent = runtime.agent_name(),
            actions = self.actions.len(),
            providers = self.providers.len(),
            evaluators = self.evaluators.len(),
            "Sui plugin initialized"
        );
        Ok(())
    }

    /// Get the plugin name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Get the plugin description.
    pub fn description(&self) -> &'static str {
        self.description
    }

    /// Get all actions.
    pub fn actions(&self) -> &[Box<dyn Action>] {
        &self.actions
    }

    /// Get all providers.
    pub fn providers(&self) -> &[Box<dyn Provider>] {
        &self.providers
    }

    /// Get all evaluators.
    pub fn evaluators(&self) -> &[Box<dyn Evaluator>] {
        &self.evaluators
    }

    /// Find an action by name or simile.
    pub fn get_action(&self, name: &str) -> Option<&dyn Action> {
        self.actions
            .iter()
            .find(|a| a.name() == name || a.similes().contains(&name))
            .map(|a| a.as_ref())
    }

    /// Find a provider by name.
    pub fn get_provider(&self, name: &str) -> Option<&dyn Provider> {
        self.providers
            .iter()
            .find(|p| p.name() == name)
            .map(|p| p.as_ref())
    }

    /// Find an evaluator by name.
    pub fn get_evaluator(&self, name: &str) -> Option<&dyn Evaluator> {
        self.evaluators
            .iter()
            .find(|e| e.name() == name)
            .map(|e| e.as_ref())
    }
}
