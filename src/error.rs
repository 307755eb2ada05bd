//! Error types for the elizaOS Sui Plugin.

use thiserror::Error;

use crate::services::ServiceError;

/// Plugin-specific errors.
#[derive(Debug, Error)]
pub enum PluginError {
    /// Model call failed.
    #[error("Model error: {0}")]
    ModelError(String),

    /// A field extraction produced an empty value.
    #[error("Could not extract {0} from the message")]
    EmptyExtraction(&'static str),

    /// A coin symbol did not resolve to a known coin type.
    #[error("Unknown coin symbol: {0}")]
    UnknownCoinSymbol(String),

    /// An amount could not be parsed as a number.
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    /// A capability invocation failed.
    #[error("Service error: {0}")]
    Service(#[from] ServiceError),

    /// Cache read or write failed.
    #[error("Cache error: {0}")]
    Cache(String),

    /// Internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type for plugin operations.
pub type PluginResult<T> = Result<T, PluginError>;

impl PluginError {
    /// User-facing message for a failure reply.
    ///
    /// Raw collaborator errors carry internal detail (endpoints, object ids,
    /// stack text) and are never echoed back to the user; they go to the logs.
    pub fn user_message(&self) -> String {
        match self {
            Self::ModelError(_) => {
                "I couldn't understand the request right now. Please try again.".to_string()
            }
            Self::EmptyExtraction(field) => {
                format!("I couldn't find the {field} in your message. Could you restate it?")
            }
            Self::UnknownCoinSymbol(symbol) => {
                format!("I don't recognize the coin symbol \"{symbol}\".")
            }
            Self::InvalidAmount(_) => {
                "The amount doesn't look like a valid number.".to_string()
            }
            Self::Service(err) => err.user_message(),
            Self::Cache(_) | Self::Internal(_) => {
                "Something went wrong on my side. Please try again.".to_string()
            }
        }
    }
}

impl From<serde_json::Error> for PluginError {
    fn from(err: serde_json::Error) -> Self {
        Self::Internal(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_messages_do_not_leak_internal_detail() {
        let err = PluginError::Service(ServiceError::Rpc(
            "connect error: dns lookup failed for fullnode.mainnet.sui.io:443".to_string(),
        ));
        let msg = err.user_message();
        assert!(!msg.contains("fullnode"));
        assert!(!msg.is_empty());

        let err = PluginError::Cache("redis timeout at 10.0.0.3".to_string());
        assert!(!err.user_message().contains("10.0.0.3"));
    }

    #[test]
    fn unknown_symbol_names_the_symbol() {
        let err = PluginError::UnknownCoinSymbol("FAKE".to_string());
        assert!(err.user_message().contains("FAKE"));
    }
}
