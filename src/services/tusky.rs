//! Tusky vault client.
//!
//! Tusky is the file-storage collaborator: vaults are secure containers for
//! files, folders group a user's files inside a vault. The insight pipeline
//! only needs to list the files under the configured folder and pull each
//! file's JSON payload.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

use super::{ServiceError, VaultStore};

/// Configuration for the Tusky API, read from runtime settings.
#[derive(Debug, Clone)]
pub struct TuskyConfig {
    /// API base URL, e.g. `https://api.tusky.io`
    pub api_url: String,
    pub api_key: String,
    /// Vault holding the collected user data
    pub vault_id: String,
    /// Parent folder for per-user folders
    pub parent_id: String,
}

/// One stored file together with its fetched payload.
#[derive(Debug, Clone, Deserialize)]
pub struct VaultDocument {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    /// File payload; a JSON array of posts for data files
    #[serde(default)]
    pub data: Value,
}

#[derive(Debug, Deserialize)]
struct FileList {
    items: Vec<FileEntry>,
}

#[derive(Debug, Deserialize)]
struct FileEntry {
    id: String,
    #[serde(default)]
    name: Option<String>,
}

/// reqwest-backed [`VaultStore`] implementation.
pub struct TuskyClient {
    http: reqwest::Client,
    config: TuskyConfig,
}

impl TuskyClient {
    pub fn new(config: TuskyConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    async fn list_files(&self) -> Result<Vec<FileEntry>, ServiceError> {
        let url = format!(
            "{}/files?vaultId={}&parentId={}",
            self.config.api_url, self.config.vault_id, self.config.parent_id
        );
        let response = self
            .http
            .get(&url)
            .header("Api-Key", &self.config.api_key)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(ServiceError::Http(response.status().as_u16()));
        }
        let list: FileList = response.json().await?;
        Ok(list.items)
    }

    async fn fetch_data(&self, file_id: &str) -> Result<Value, ServiceError> {
        let url = format!("{}/files/{}/data", self.config.api_url, file_id);
        let response = self
            .http
            .get(&url)
            .header("Api-Key", &self.config.api_key)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(ServiceError::Http(response.status().as_u16()));
        }
        Ok(response.json().await?)
    }
}

#[async_trait]
impl VaultStore for TuskyClient {
    async fn fetch_user_documents(
        &self,
        address: &str,
    ) -> Result<Vec<VaultDocument>, ServiceError> {
        let entries = self.list_files().await?;
        debug!(count = entries.len(), %address, "listed vault files");

        let mut documents = Vec::with_capacity(entries.len());
        for entry in entries {
            match self.fetch_data(&entry.id).await {
                Ok(data) => documents.push(VaultDocument {
                    id: entry.id,
                    name: entry.name,
                    data,
                }),
                // A single unreadable file should not sink the whole digest.
                Err(err) => warn!(file_id = %entry.id, error = %err, "skipping vault file"),
            }
        }
        Ok(documents)
    }
}

/// Flatten vault documents into the post texts they contain.
///
/// Data files hold an array of `{ "text": ... }` records; anything else
/// (status messages, malformed entries) is ignored.
pub(crate) fn collect_post_texts(documents: &[VaultDocument]) -> Vec<String> {
    let mut texts = Vec::new();
    for document in documents {
        if let Value::Array(items) = &document.data {
            for item in items {
                if let Some(text) = item.get("text").and_then(Value::as_str) {
                    if !text.is_empty() {
                        texts.push(text.to_string());
                    }
                }
            }
        }
    }
    texts
}
