//! End-to-end dispatch tests: message in, extraction through the scripted
//! model, capability invocation against doubles, one reply out.

mod common;

use std::sync::Arc;

use anyhow::Result;
use pretty_assertions::assert_eq;

use common::{reply_sink, MockNews, MockRuntime, MockSuiService, MockVault};
use elizaos_plugin_sui::actions::{
    dispatch, AnalyzeSentimentAction, CurrentNewsAction, DataInsightAction, DepositAction,
    DispatchStatus, GetBalanceAction, SwapAction, TransferAction,
};
use elizaos_plugin_sui::types::Memory;

#[tokio::test]
async fn blank_message_is_skipped_without_callback() -> Result<()> {
    let runtime = Arc::new(MockRuntime::new());
    let action = DepositAction::new(Arc::new(MockSuiService::new()));
    let (replies, callback) = reply_sink();

    let status = dispatch(
        &action,
        runtime,
        &Memory::from_text("   \n\t"),
        None,
        &callback,
    )
    .await;

    assert_eq!(status, DispatchStatus::Skipped);
    assert!(replies.lock().unwrap().is_empty());
    Ok(())
}

#[tokio::test]
async fn deposit_builds_transaction_and_replies_once() -> Result<()> {
    let runtime = Arc::new(MockRuntime::new());
    runtime.script_text("0xa11ce");
    runtime.script_text("1.5");
    runtime.script_text("SUI");

    let action = DepositAction::new(Arc::new(MockSuiService::new()));
    let (replies, callback) = reply_sink();

    let status = dispatch(
        &action,
        runtime,
        &Memory::from_text("deposit 1.5 SUI from 0xa11ce into suilend"),
        None,
        &callback,
    )
    .await;

    assert_eq!(status, DispatchStatus::Replied);
    let replies = replies.lock().unwrap();
    assert_eq!(replies.len(), 1);
    assert_eq!(replies[0].text, "Successfully deposited 1.5 SUI to suilend");
    assert_eq!(replies[0].action.as_deref(), Some("DEPOSIT_TOKEN_SUILEND"));
    assert_eq!(replies[0].params["txBytes"], "AAECAwQ=");
    Ok(())
}

#[tokio::test]
async fn unknown_symbol_fails_with_one_reply() -> Result<()> {
    let runtime = Arc::new(MockRuntime::new());
    runtime.script_text("0xa11ce");
    runtime.script_text("10");
    runtime.script_text("FAKE");

    let action = DepositAction::new(Arc::new(MockSuiService::new()));
    let (replies, callback) = reply_sink();

    let status = dispatch(
        &action,
        runtime,
        &Memory::from_text("deposit 10 FAKE"),
        None,
        &callback,
    )
    .await;

    assert_eq!(status, DispatchStatus::Failed);
    let replies = replies.lock().unwrap();
    assert_eq!(replies.len(), 1);
    assert!(replies[0].text.contains("FAKE"));
    assert_eq!(replies[0].action.as_deref(), Some("DEPOSIT_TOKEN"));
    assert!(replies[0].content.contains_key("error"));
    Ok(())
}

#[tokio::test]
async fn rpc_failure_is_sanitized_in_the_reply() -> Result<()> {
    let runtime = Arc::new(MockRuntime::new());
    runtime.script_text("0xa11ce");
    runtime.script_text("1");
    runtime.script_text("SUI");

    let action = DepositAction::new(Arc::new(MockSuiService::failing()));
    let (replies, callback) = reply_sink();

    let status = dispatch(
        &action,
        runtime,
        &Memory::from_text("deposit 1 SUI"),
        None,
        &callback,
    )
    .await;

    assert_eq!(status, DispatchStatus::Failed);
    let replies = replies.lock().unwrap();
    assert_eq!(replies.len(), 1);
    assert_eq!(
        replies[0].text,
        "The service is unreachable right now. Please try again later."
    );
    assert!(!replies[0].text.contains("fullnode"));
    Ok(())
}

#[tokio::test]
async fn transfer_reports_amount_and_recipient() -> Result<()> {
    let runtime = Arc::new(MockRuntime::new());
    runtime.script_text("0xa11ce");
    runtime.script_text("0xb0b");
    runtime.script_text("2");

    let action = TransferAction::new(Arc::new(MockSuiService::new()));
    let (replies, callback) = reply_sink();

    let status = dispatch(
        &action,
        runtime,
        &Memory::from_text("send 2 SUI from 0xa11ce to 0xb0b"),
        None,
        &callback,
    )
    .await;

    assert_eq!(status, DispatchStatus::Replied);
    let replies = replies.lock().unwrap();
    assert_eq!(replies[0].text, "Successfully transferred 2 SUI to 0xb0b");
    assert_eq!(replies[0].params["recipient"], "0xb0b");
    Ok(())
}

#[tokio::test]
async fn swap_names_both_legs() -> Result<()> {
    let runtime = Arc::new(MockRuntime::new());
    runtime.script_text("0xa11ce");
    runtime.script_text("1");
    runtime.script_text("SUI");
    runtime.script_text("USDC");

    let action = SwapAction::new(Arc::new(MockSuiService::new()));
    let (replies, callback) = reply_sink();

    let status = dispatch(
        &action,
        runtime,
        &Memory::from_text("swap 1 SUI for USDC"),
        None,
        &callback,
    )
    .await;

    assert_eq!(status, DispatchStatus::Replied);
    let replies = replies.lock().unwrap();
    assert_eq!(replies[0].text, "Successfully swapped 1 SUI to USDC");
    assert_eq!(replies[0].params["txBytes"], "AAECAwQ=");
    Ok(())
}

#[tokio::test]
async fn empty_address_extraction_fails_the_lookup() -> Result<()> {
    let runtime = Arc::new(MockRuntime::new());
    runtime.script_text("   ");

    let action = GetBalanceAction::new(Arc::new(MockSuiService::new()));
    let (replies, callback) = reply_sink();

    let status = dispatch(
        &action,
        runtime,
        &Memory::from_text("what's my balance?"),
        None,
        &callback,
    )
    .await;

    assert_eq!(status, DispatchStatus::Failed);
    let replies = replies.lock().unwrap();
    assert_eq!(replies.len(), 1);
    assert!(replies[0].text.contains("address"));
    Ok(())
}

#[tokio::test]
async fn current_news_formats_the_digest() -> Result<()> {
    let runtime = Arc::new(MockRuntime::new());
    runtime.script_text("bitcoin");

    let action = CurrentNewsAction::new(Arc::new(MockNews));
    let (replies, callback) = reply_sink();

    let status = dispatch(
        &action,
        runtime,
        &Memory::from_text("any news about bitcoin?"),
        None,
        &callback,
    )
    .await;

    assert_eq!(status, DispatchStatus::Replied);
    let replies = replies.lock().unwrap();
    assert!(replies[0]
        .text
        .starts_with("Here are the current news for bitcoin:"));
    assert!(replies[0].text.contains("markets steady"));
    Ok(())
}

#[tokio::test]
async fn data_insight_answers_from_vault_posts() -> Result<()> {
    let runtime =
        Arc::new(MockRuntime::new().with_setting("TUSKY_USER_ADDRESS", "0xa11ce"));
    runtime.script_text("Most posts are about the market.");

    let vault = MockVault::with_posts(&["markets are up today", "new suilend pool launched"]);
    let action = DataInsightAction::new(Arc::new(vault));
    let (replies, callback) = reply_sink();

    let status = dispatch(
        &action,
        runtime.clone(),
        &Memory::from_text("what are the posts about?"),
        None,
        &callback,
    )
    .await;

    assert_eq!(status, DispatchStatus::Replied);
    let replies = replies.lock().unwrap();
    assert_eq!(replies[0].text, "Most posts are about the market.");
    assert_eq!(replies[0].action.as_deref(), Some("INSIGHT_DATA"));

    // The analysis prompt carries the collected posts.
    let prompts = runtime.prompts.lock().unwrap();
    assert!(prompts[0].contains("markets are up today"));
    assert!(prompts[0].contains("new suilend pool launched"));
    Ok(())
}

#[tokio::test]
async fn data_insight_without_configured_address_fails_cleanly() -> Result<()> {
    let runtime = Arc::new(MockRuntime::new());
    let vault = MockVault::with_posts(&["a post"]);
    let action = DataInsightAction::new(Arc::new(vault));
    let (replies, callback) = reply_sink();

    let status = dispatch(
        &action,
        runtime,
        &Memory::from_text("what are the posts about?"),
        None,
        &callback,
    )
    .await;

    assert_eq!(status, DispatchStatus::Failed);
    let replies = replies.lock().unwrap();
    assert_eq!(replies.len(), 1);
    assert!(!replies[0].text.contains("TUSKY_USER_ADDRESS"));
    Ok(())
}

#[tokio::test]
async fn sentiment_label_becomes_the_reply() -> Result<()> {
    let runtime = Arc::new(MockRuntime::new());
    runtime.script_text("positive");

    let action = AnalyzeSentimentAction::new();
    let (replies, callback) = reply_sink();

    let status = dispatch(
        &action,
        runtime,
        &Memory::from_text("sui is doing great this week"),
        None,
        &callback,
    )
    .await;

    assert_eq!(status, DispatchStatus::Replied);
    let replies = replies.lock().unwrap();
    assert_eq!(replies[0].text, "positive");
    assert_eq!(replies[0].params["sentiment"], "positive");
    Ok(())
}
