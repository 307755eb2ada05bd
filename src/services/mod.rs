//! Capability collaborator boundaries.
//!
//! `SuiService` wraps the chain-side capabilities (transaction builders,
//! balance and portfolio lookups); the routing, pricing and transaction
//! construction logic lives behind it, not here. `VaultStore` and `NewsFeed`
//! are the HTTP collaborators used by the analysis actions; reqwest-backed
//! implementations live in this module's submodules.

mod news;
mod tusky;

pub use news::NewsApiClient;
pub use tusky::{TuskyClient, TuskyConfig, VaultDocument};
pub(crate) use tusky::collect_post_texts;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::registry;

/// Errors surfaced by capability collaborators.
///
/// Each variant is a distinct failure kind so handlers can render a
/// user-facing message without echoing collaborator internals.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The aggregator found no route between the two coin types.
    #[error("no swap route found")]
    NoRouteFound,

    /// The wallet does not hold enough of the input coin.
    #[error("insufficient funds")]
    InsufficientFunds,

    /// The coin type is not listed by the collaborator.
    #[error("unknown coin type: {0}")]
    UnknownCoinType(String),

    /// The lending market has no obligation for this address.
    #[error("obligation not found")]
    ObligationNotFound,

    /// An address failed collaborator-side validation.
    #[error("invalid address: {0}")]
    InvalidAddress(String),

    /// An HTTP collaborator returned a non-success status.
    #[error("http status {0}")]
    Http(u16),

    /// Transport-level failure talking to a collaborator.
    #[error("rpc failure: {0}")]
    Rpc(String),
}

impl ServiceError {
    /// Sanitized user-facing description of the failure.
    pub fn user_message(&self) -> String {
        match self {
            Self::NoRouteFound => "No swap route was found for that pair.".to_string(),
            Self::InsufficientFunds => {
                "The wallet doesn't hold enough funds for that.".to_string()
            }
            Self::UnknownCoinType(coin_type) => {
                format!("That coin isn't listed: {coin_type}.")
            }
            Self::ObligationNotFound => {
                "No lending account was found for that address.".to_string()
            }
            Self::InvalidAddress(_) => "That address doesn't look valid.".to_string(),
            Self::Http(_) | Self::Rpc(_) => {
                "The service is unreachable right now. Please try again later.".to_string()
            }
        }
    }
}

impl From<reqwest::Error> for ServiceError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => Self::Http(status.as_u16()),
            None => Self::Rpc(err.to_string()),
        }
    }
}

/// A built, unsigned transaction ready to hand back to the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TxPayload {
    /// Base64-encoded transaction bytes
    pub tx_bytes_base64: String,
    /// Builder status message
    pub message: String,
}

/// On-chain metadata of a coin type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoinMetadata {
    pub symbol: String,
    pub name: String,
    pub decimals: u8,
}

/// Balance of one coin type held by an address.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Balance {
    pub coin_type: String,
    /// Total balance in base units
    pub total_balance: String,
    pub coin_object_count: u32,
}

/// Sui network selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SuiNetwork {
    Mainnet,
    Testnet,
    Devnet,
    Localnet,
}

/// The chain capability collaborator.
///
/// Every operation takes resolved identifiers (coin-type string, amount in
/// base units, address string) and returns a fully-populated payload or a
/// typed error. Invocations are not idempotent: each call may construct a new
/// transaction, so callers must not retry blindly on timeout.
#[async_trait]
pub trait SuiService: Send + Sync {
    /// The network this service talks to.
    fn network(&self) -> SuiNetwork;

    /// Explorer link for a transaction digest.
    fn transaction_link(&self, digest: &str) -> String {
        match self.network() {
            SuiNetwork::Mainnet => format!("https://suivision.xyz/txblock/{digest}"),
            SuiNetwork::Testnet => format!("https://testnet.suivision.xyz/txblock/{digest}"),
            SuiNetwork::Devnet => format!("https://devnet.suivision.xyz/txblock/{digest}"),
            SuiNetwork::Localnet => format!("localhost : {digest}"),
        }
    }

    /// Resolve a ticker symbol to a canonical coin type.
    ///
    /// Defaults to the static mainnet registry.
    fn resolve_symbol(&self, symbol: &str) -> Option<String> {
        registry::coin_type_for_symbol(symbol).map(str::to_string)
    }

    /// Balance of one coin type (native SUI when `coin_type` is `None`).
    async fn balance(
        &self,
        address: &str,
        coin_type: Option<&str>,
    ) -> Result<Balance, ServiceError>;

    /// All coin balances held by an address.
    async fn all_balances(&self, address: &str) -> Result<Vec<Balance>, ServiceError>;

    /// DeFi portfolio summary for an address.
    async fn defi_portfolio(&self, address: &str) -> Result<serde_json::Value, ServiceError>;

    /// On-chain metadata for a coin type.
    async fn coin_metadata(&self, coin_type: &str) -> Result<CoinMetadata, ServiceError>;

    /// Build a native SUI transfer transaction.
    async fn transfer(
        &self,
        amount_base_units: u128,
        sender: &str,
        recipient: &str,
    ) -> Result<TxPayload, ServiceError>;

    /// Build a swap transaction via the DEX aggregator.
    async fn swap(
        &self,
        from_coin_type: &str,
        amount_base_units: u128,
        min_amount_out: u128,
        to_coin_type: &str,
        address: &str,
    ) -> Result<TxPayload, ServiceError>;

    /// Build a Suilend deposit transaction, creating the obligation if needed.
    async fn deposit(
        &self,
        coin_type: &str,
        amount_base_units: u128,
        address: &str,
    ) -> Result<TxPayload, ServiceError>;

    /// Build a Suilend withdraw transaction.
    async fn withdraw(
        &self,
        coin_type: &str,
        amount_base_units: u128,
        address: &str,
    ) -> Result<TxPayload, ServiceError>;

    /// Build a Suilend borrow transaction.
    async fn borrow(
        &self,
        coin_type: &str,
        amount_base_units: u128,
        address: &str,
    ) -> Result<TxPayload, ServiceError>;

    /// Build a Suilend repay transaction.
    async fn repay(
        &self,
        coin_type: &str,
        amount_base_units: u128,
        address: &str,
    ) -> Result<TxPayload, ServiceError>;
}

/// File-storage vault collaborator (user data documents).
#[async_trait]
pub trait VaultStore: Send + Sync {
    /// Fetch the documents stored for a user address.
    async fn fetch_user_documents(
        &self,
        address: &str,
    ) -> Result<Vec<VaultDocument>, ServiceError>;
}

/// News collaborator.
#[async_trait]
pub trait NewsFeed: Send + Sync {
    /// Fetch a short digest of current news for a search term.
    async fn current_news(&self, search_term: &str) -> Result<String, ServiceError>;
}
