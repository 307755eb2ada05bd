//! Runtime trait definitions for the elizaOS plugin system.
//!
//! This module defines the contract between the plugin and the agent
//! runtime: model inference, settings, and the keyed cache store. The
//! runtime implements these traits; the plugin only consumes them.

use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use uuid::Uuid;

use crate::error::PluginResult;

/// The agent runtime interface, as seen by this plugin.
#[async_trait]
pub trait IAgentRuntime: Send + Sync {
    /// Get the agent's unique identifier.
    fn agent_id(&self) -> Uuid;

    /// Get the agent's display name.
    fn agent_name(&self) -> &str;

    /// Get a setting value.
    fn get_setting(&self, key: &str) -> Option<String>;

    /// Use a model for inference.
    async fn use_model(
        &self,
        model_type: ModelType,
        params: ModelParams,
    ) -> PluginResult<ModelOutput>;

    /// Get the keyed cache store.
    fn cache(&self) -> Arc<dyn CacheStore>;
}

/// Keyed cache store injected by the runtime.
///
/// Keys are namespaced explicitly; entries expire after the given TTL.
/// Per-key only, not transactional across keys.
#[async_trait]
pub trait CacheStore: Send + Sync {
    /// Read a value, or `None` if absent or expired.
    async fn get(&self, namespace: &str, key: &str) -> PluginResult<Option<Value>>;

    /// Write a value with a time-to-live.
    async fn set(&self, namespace: &str, key: &str, value: Value, ttl: Duration)
        -> PluginResult<()>;
}

/// Model classes available in the runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelType {
    /// Small text generation model
    TextSmall,
    /// Medium text generation model
    TextMedium,
    /// Large text generation model
    TextLarge,
    /// Structured (JSON object) generation model
    ObjectMedium,
}

/// Parameters for model calls.
#[derive(Debug, Clone, Default)]
pub struct ModelParams {
    /// Text prompt for the model
    pub prompt: String,
    /// Stop sequences; generation halts at the first occurrence
    pub stop: Vec<String>,
    /// Additional parameters
    pub options: HashMap<String, Value>,
}

impl ModelParams {
    /// Create params with just a prompt.
    pub fn with_prompt(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            ..Default::default()
        }
    }

    /// Add a stop sequence.
    pub fn with_stop(mut self, stop: impl Into<String>) -> Self {
        self.stop.push(stop.into());
        self
    }
}

/// Output from a model call.
#[derive(Debug, Clone)]
pub enum ModelOutput {
    /// Text output
    Text(String),
    /// Structured output
    Structured(Value),
}

impl ModelOutput {
    /// Get as text, if this is a text output.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Get as a structured value, parsing text output as JSON if needed.
    pub fn as_structured(&self) -> Option<Value> {
        match self {
            Self::Structured(v) => Some(v.clone()),
            Self::Text(s) => serde_json::from_str(strip_json_fence(s)).ok(),
        }
    }
}

/// Strip a ```json ... ``` markdown fence, if present. Models asked for a
/// JSON object frequently wrap it in one.
fn strip_json_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let without_open = trimmed
        .strip_prefix("```json")
        .or_else(|| trimmed.strip_prefix("```"))
        .unwrap_or(trimmed);
    without_open.strip_suffix("```").unwrap_or(without_open).trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn structured_output_parses_fenced_json_text() {
        let output = ModelOutput::Text("```json\n{\"name\": \"John\"}\n```".to_string());
        let value = output.as_structured().unwrap();
        assert_eq!(value["name"], "John");
    }

    #[test]
    fn structured_output_passes_through_value() {
        let output = ModelOutput::Structured(serde_json::json!({"a": 1}));
        assert_eq!(output.as_structured().unwrap()["a"], 1);
    }

    #[test]
    fn non_json_text_is_not_structured() {
        let output = ModelOutput::Text("plain answer".to_string());
        assert!(output.as_structured().is_none());
    }
}
