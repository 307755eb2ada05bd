//! Core types for the elizaOS Sui Plugin.
//!
//! Messages are created by the runtime per conversational turn and are
//! read-only here; replies are built once per action dispatch.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;
use uuid::Uuid;

/// Content of an inbound message.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Content {
    /// The text content
    pub text: String,
    /// Upstream action tag, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
    /// Originating client (discord, telegram, ...)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

/// An inbound message memory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Memory {
    /// Unique identifier
    pub id: Uuid,
    /// Message content
    pub content: Content,
    /// User that sent the message
    pub user_id: Uuid,
    /// Room the message belongs to
    pub room_id: Uuid,
    /// Agent the message was addressed to
    pub agent_id: Uuid,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl Memory {
    /// Build a message memory with fresh ids, mostly useful in tests.
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            content: Content {
                text: text.into(),
                action: None,
                source: None,
            },
            user_id: Uuid::new_v4(),
            room_id: Uuid::new_v4(),
            agent_id: Uuid::new_v4(),
            created_at: Utc::now(),
        }
    }
}

/// Opaque state composed by the runtime and passed through to handlers.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct State {
    #[serde(default)]
    pub values: HashMap<String, Value>,
}

/// Outbound reply passed to the runtime callback.
///
/// Exactly one reply is produced per action dispatch, on both the success
/// and the failure path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reply {
    /// Human-readable reply text
    pub text: String,
    /// Structured content echoed back to the conversation
    #[serde(default)]
    pub content: Map<String, Value>,
    /// Parameters for downstream consumers (e.g. transaction bytes to sign)
    #[serde(default)]
    pub params: Map<String, Value>,
    /// Action tag identifying which pipeline produced the reply
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
}

impl Reply {
    /// Create a reply with only text.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            content: Map::new(),
            params: Map::new(),
            action: None,
        }
    }

    /// Set the action tag.
    pub fn with_action(mut self, action: impl Into<String>) -> Self {
        self.action = Some(action.into());
        self
    }

    /// Add a content entry.
    pub fn with_content(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.content.insert(key.into(), value.into());
        self
    }

    /// Add a params entry.
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }
}

/// Result from a provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderResult {
    /// Text context to include in prompts
    pub text: String,
    /// Key-value pairs of provider values
    #[serde(default)]
    pub values: HashMap<String, Value>,
}

impl ProviderResult {
    /// Create a new provider result.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            values: HashMap::new(),
        }
    }

    /// Add a value to the result.
    pub fn with_value(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }
}

/// Action tags attached to outbound replies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SuiActionTag {
    TransferToken,
    SwapToken,
    DepositTokenSuilend,
    WithdrawTokenSuilend,
    BorrowTokenSuilend,
    RepayTokenSuilend,
    GetBalance,
    GetPortfolio,
    GetMetadataToken,
    CurrentNewsResponse,
    InsightData,
    FilterTweets,
}

impl SuiActionTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TransferToken => "TRANSFER_TOKEN",
            Self::SwapToken => "SWAP_TOKEN",
            Self::DepositTokenSuilend => "DEPOSIT_TOKEN_SUILEND",
            Self::WithdrawTokenSuilend => "WITHDRAW_TOKEN_SUILEND",
            Self::BorrowTokenSuilend => "BORROW_TOKEN_SUILEND",
            Self::RepayTokenSuilend => "REPAY_TOKEN_SUILEND",
            Self::GetBalance => "GET_BALANCE",
            Self::GetPortfolio => "GET_PORTFOLIO",
            Self::GetMetadataToken => "GET_METADATA_TOKEN",
            Self::CurrentNewsResponse => "CURRENT_NEWS_RESPONSE",
            Self::InsightData => "INSIGHT_DATA",
            Self::FilterTweets => "FILTER_TWEETS",
        }
    }
}
