//! Shared test doubles: a scriptable runtime, an in-memory cache, and
//! canned capability collaborators.
#![allow(dead_code)]

use async_trait::async_trait;
use serde_json::Value;
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use uuid::Uuid;

use elizaos_plugin_sui::error::{PluginError, PluginResult};
use elizaos_plugin_sui::runtime::{CacheStore, IAgentRuntime, ModelOutput, ModelParams, ModelType};
use elizaos_plugin_sui::services::{
    Balance, CoinMetadata, NewsFeed, ServiceError, SuiNetwork, SuiService, TxPayload,
    VaultDocument, VaultStore,
};
use elizaos_plugin_sui::types::Reply;

/// In-memory cache keyed by (namespace, key). TTLs are accepted and ignored.
#[derive(Default)]
pub struct MemoryCache {
    entries: Mutex<HashMap<(String, String), Value>>,
    pub fail: Mutex<bool>,
}

impl MemoryCache {
    pub fn set_failing(&self, fail: bool) {
        *self.fail.lock().unwrap() = fail;
    }
}

#[async_trait]
impl CacheStore for MemoryCache {
    async fn get(&self, namespace: &str, key: &str) -> PluginResult<Option<Value>> {
        if *self.fail.lock().unwrap() {
            return Err(PluginError::Cache("cache offline".to_string()));
        }
        Ok(self
            .entries
            .lock()
            .unwrap()
            .get(&(namespace.to_string(), key.to_string()))
            .cloned())
    }

    async fn set(
        &self,
        namespace: &str,
        key: &str,
        value: Value,
        _ttl: Duration,
    ) -> PluginResult<()> {
        if *self.fail.lock().unwrap() {
            return Err(PluginError::Cache("cache offline".to_string()));
        }
        self.entries
            .lock()
            .unwrap()
            .insert((namespace.to_string(), key.to_string()), value);
        Ok(())
    }
}

/// Runtime double that replays scripted model outputs in order.
pub struct MockRuntime {
    agent_id: Uuid,
    agent_name: String,
    settings: HashMap<String, String>,
    outputs: Mutex<VecDeque<ModelOutput>>,
    pub prompts: Mutex<Vec<String>>,
    pub cache: Arc<MemoryCache>,
}

impl MockRuntime {
    pub fn new() -> Self {
        Self {
            agent_id: Uuid::new_v4(),
            agent_name: "Eliza".to_string(),
            settings: HashMap::new(),
            outputs: Mutex::new(VecDeque::new()),
            prompts: Mutex::new(Vec::new()),
            cache: Arc::new(MemoryCache::default()),
        }
    }

    pub fn with_setting(mut self, key: &str, value: &str) -> Self {
        self.settings.insert(key.to_string(), value.to_string());
        self
    }

    /// Queue a text output for the next model call.
    pub fn script_text(&self, text: &str) {
        self.outputs
            .lock()
            .unwrap()
            .push_back(ModelOutput::Text(text.to_string()));
    }

    /// Queue a structured output for the next model call.
    pub fn script_structured(&self, value: Value) {
        self.outputs
            .lock()
            .unwrap()
            .push_back(ModelOutput::Structured(value));
    }
}

#[async_trait]
impl IAgentRuntime for MockRuntime {
    fn agent_id(&self) -> Uuid {
        self.agent_id
    }

    fn agent_name(&self) -> &str {
        &self.agent_name
    }

    fn get_setting(&self, key: &str) -> Option<String> {
        self.settings.get(key).cloned()
    }

    async fn use_model(
        &self,
        _model_type: ModelType,
        params: ModelParams,
    ) -> PluginResult<ModelOutput> {
        self.prompts.lock().unwrap().push(params.prompt);
        self.outputs
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| PluginError::ModelError("no scripted output left".to_string()))
    }

    fn cache(&self) -> Arc<dyn CacheStore> {
        self.cache.clone()
    }
}

/// Chain collaborator double. Builders return a fixed payload, or an RPC
/// error when `fail_rpc` is set.
pub struct MockSuiService {
    pub fail_rpc: bool,
}

impl MockSuiService {
    pub fn new() -> Self {
        Self { fail_rpc: false }
    }

    pub fn failing() -> Self {
        Self { fail_rpc: true }
    }

    fn payload(&self, message: &str) -> Result<TxPayload, ServiceError> {
        if self.fail_rpc {
            return Err(ServiceError::Rpc(
                "connect error: fullnode.mainnet.sui.io refused".to_string(),
            ));
        }
        Ok(TxPayload {
            tx_bytes_base64: "AAECAwQ=".to_string(),
            message: message.to_string(),
        })
    }
}

#[async_trait]
impl SuiService for MockSuiService {
    fn network(&self) -> SuiNetwork {
        SuiNetwork::Mainnet
    }

    async fn balance(
        &self,
        _address: &str,
        coin_type: Option<&str>,
    ) -> Result<Balance, ServiceError> {
        if self.fail_rpc {
            return Err(ServiceError::Rpc("node unreachable".to_string()));
        }
        Ok(Balance {
            coin_type: coin_type.unwrap_or("0x2::sui::SUI").to_string(),
            total_balance: "5000000000".to_string(),
            coin_object_count: 2,
        })
    }

    async fn all_balances(&self, address: &str) -> Result<Vec<Balance>, ServiceError> {
        Ok(vec![self.balance(address, None).await?])
    }

    async fn defi_portfolio(&self, _address: &str) -> Result<Value, ServiceError> {
        if self.fail_rpc {
            return Err(ServiceError::Rpc("node unreachable".to_string()));
        }
        Ok(serde_json::json!({"suilend": {"deposits": [], "borrows": []}}))
    }

    async fn coin_metadata(&self, coin_type: &str) -> Result<CoinMetadata, ServiceError> {
        if self.fail_rpc {
            return Err(ServiceError::Rpc("node unreachable".to_string()));
        }
        if coin_type.ends_with("::sui::SUI") {
            Ok(CoinMetadata {
                symbol: "SUI".to_string(),
                name: "Sui".to_string(),
                decimals: 9,
            })
        } else {
            Ok(CoinMetadata {
                symbol: "USDC".to_string(),
                name: "USD Coin".to_string(),
                decimals: 6,
            })
        }
    }

    async fn transfer(&self, _: u128, _: &str, _: &str) -> Result<TxPayload, ServiceError> {
        self.payload("transfer built")
    }

    async fn swap(
        &self,
        _: &str,
        _: u128,
        _: u128,
        _: &str,
        _: &str,
    ) -> Result<TxPayload, ServiceError> {
        self.payload("swap built")
    }

    async fn deposit(&self, _: &str, _: u128, _: &str) -> Result<TxPayload, ServiceError> {
        self.payload("deposit built")
    }

    async fn withdraw(&self, _: &str, _: u128, _: &str) -> Result<TxPayload, ServiceError> {
        self.payload("withdraw built")
    }

    async fn borrow(&self, _: &str, _: u128, _: &str) -> Result<TxPayload, ServiceError> {
        self.payload("borrow built")
    }

    async fn repay(&self, _: &str, _: u128, _: &str) -> Result<TxPayload, ServiceError> {
        self.payload("repay built")
    }
}

/// Vault double returning a fixed set of post documents.
pub struct MockVault {
    pub documents: Vec<VaultDocument>,
}

impl MockVault {
    pub fn with_posts(posts: &[&str]) -> Self {
        let data = Value::Array(
            posts
                .iter()
                .map(|p| serde_json::json!({"text": p}))
                .collect(),
        );
        Self {
            documents: vec![VaultDocument {
                id: "doc-1".to_string(),
                name: Some("posts.json".to_string()),
                data,
            }],
        }
    }
}

#[async_trait]
impl VaultStore for MockVault {
    async fn fetch_user_documents(&self, _address: &str) -> Result<Vec<VaultDocument>, ServiceError> {
        Ok(self.documents.clone())
    }
}

/// News double returning a fixed digest.
pub struct MockNews;

#[async_trait]
impl NewsFeed for MockNews {
    async fn current_news(&self, search_term: &str) -> Result<String, ServiceError> {
        Ok(format!("{search_term}: markets steady\nhttps://example.com/a"))
    }
}

/// Collect replies delivered through the dispatch callback.
pub fn reply_sink() -> (
    Arc<Mutex<Vec<Reply>>>,
    elizaos_plugin_sui::actions::HandlerCallback,
) {
    let replies: Arc<Mutex<Vec<Reply>>> = Arc::new(Mutex::new(Vec::new()));
    let sink = replies.clone();
    let callback: elizaos_plugin_sui::actions::HandlerCallback =
        Box::new(move |reply| sink.lock().unwrap().push(reply));
    (replies, callback)
}
