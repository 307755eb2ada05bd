//! Evaluators module for the elizaOS Sui Plugin.
//!
//! Evaluators run after the conversational turn and persist what they learn
//! through the runtime cache; they never reply to the user.

mod user_data;

pub use user_data::{
    profile_cache_key, UserDataEvaluator, UserProfile, PROFILE_TTL, USER_DATA_NAMESPACE,
};

use async_trait::async_trait;
use serde_json::{Map, Value};

use crate::error::PluginResult;
use crate::runtime::IAgentRuntime;
use crate::types::{Memory, State};

/// Trait that all evaluators must implement.
#[async_trait]
pub trait Evaluator: Send + Sync {
    /// Get the evaluator name.
    fn name(&self) -> &'static str;

    /// Get evaluator description.
    fn description(&self) -> &'static str;

    /// Validate whether evaluation can be performed.
    async fn validate(&self, runtime: &dyn IAgentRuntime, message: &Memory) -> bool;

    /// Perform the evaluation.
    async fn evaluate(
        &self,
        runtime: &dyn IAgentRuntime,
        message: &Memory,
        state: Option<&State>,
    ) -> PluginResult<EvaluatorResult>;
}

/// Outcome of one evaluator run.
#[derive(Debug, Clone)]
pub struct EvaluatorResult {
    /// Short status message
    pub message: String,
    /// Structured details about what the run changed
    pub details: Map<String, Value>,
}

impl EvaluatorResult {
    /// Create a result with only a status message.
    pub fn pass(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            details: Map::new(),
        }
    }

    /// Add a detail entry.
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }
}
