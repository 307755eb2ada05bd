//! Actions module for the elizaOS Sui Plugin.
//!
//! Every action runs the same pipeline: validate the message, extract its
//! parameter bundle through the model, invoke one capability collaborator,
//! and format one reply. [`dispatch`] owns the pipeline's termination
//! discipline: a run either skips silently (validation filter) or invokes
//! the runtime callback exactly once, on success and on failure alike.

mod analyze_sentiment;
mod borrow;
mod current_news;
mod data_insight;
mod deposit;
mod get_balance;
mod get_portfolio;
mod get_token;
mod repay;
mod swap;
mod transfer;
mod withdraw;

pub use analyze_sentiment::AnalyzeSentimentAction;
pub use borrow::BorrowAction;
pub use current_news::CurrentNewsAction;
pub use data_insight::DataInsightAction;
pub use deposit::DepositAction;
pub use get_balance::GetBalanceAction;
pub use get_portfolio::GetPortfolioAction;
pub use get_token::GetTokenAction;
pub use repay::RepayAction;
pub use swap::SwapAction;
pub use transfer::TransferAction;
pub use withdraw::WithdrawAction;

use async_trait::async_trait;
use std::sync::Arc;
use tracing::error;

use crate::error::PluginResult;
use crate::runtime::IAgentRuntime;
use crate::types::{Memory, Reply, State};

/// Trait that all actions must implement.
#[async_trait]
pub trait Action: Send + Sync {
    /// Get the action name.
    fn name(&self) -> &'static str;

    /// Get action similes (alternative names).
    fn similes(&self) -> &'static [&'static str];

    /// Get action description.
    fn description(&self) -> &'static str;

    /// Pre-dispatch filter. A `false` here skips the action silently; it is
    /// not a user-visible error.
    async fn validate(&self, _runtime: &dyn IAgentRuntime, message: &Memory) -> bool {
        has_text(message)
    }

    /// Run extraction and capability invocation, producing the success reply.
    async fn execute(
        &self,
        runtime: Arc<dyn IAgentRuntime>,
        message: &Memory,
        state: Option<&State>,
    ) -> PluginResult<Reply>;
}

/// Callback sink for outbound replies.
pub type HandlerCallback = Box<dyn Fn(Reply) + Send + Sync>;

/// Terminal state of one action dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchStatus {
    /// Validation filtered the message; no callback fired.
    Skipped,
    /// The success reply was delivered.
    Replied,
    /// A failure reply was delivered.
    Failed,
}

/// Default validation predicate: the message has non-whitespace text.
pub fn has_text(message: &Memory) -> bool {
    !message.content.text.trim().is_empty()
}

/// Drive one action through validate, execute and reply.
///
/// The callback fires exactly once unless the run is skipped. Failure
/// replies carry the sanitized user message; the raw error goes to the log.
pub async fn dispatch(
    action: &dyn Action,
    runtime: Arc<dyn IAgentRuntime>,
    message: &Memory,
    state: Option<&State>,
    callback: &HandlerCallback,
) -> DispatchStatus {
    if !action.validate(runtime.as_ref(), message).await {
        return DispatchStatus::Skipped;
    }

    match action.execute(runtime, message, state).await {
        Ok(reply) => {
            callback(reply);
            DispatchStatus::Replied
        }
        Err(err) => {
            error!(action = action.name(), error = %err, "action failed");
            let reply = Reply::new(err.user_message())
                .with_action(action.name())
                .with_content("error", err.user_message());
            callback(reply);
            DispatchStatus::Failed
        }
    }
}
