//! RANDOM_EMOTION provider implementation.

use async_trait::async_trait;
use rand::seq::SliceRandom;

use crate::error::PluginResult;
use crate::runtime::IAgentRuntime;
use crate::types::{Memory, ProviderResult, State};

use super::Provider;

const EMOTIONS: &[(&str, &str)] = &[
    ("happy", "is feeling a sense of joy and contentment."),
    ("sad", "feels a deep sense of sorrow and loss."),
    ("angry", "feels a surge of frustration and irritation."),
    ("surprised", "feels astonished and caught off guard."),
    ("scared", "feels a sense of fear and apprehension."),
    ("excited", "feels a thrill of anticipation and eagerness."),
    ("calm", "feels a state of tranquility and peace."),
];

/// Provider that colors the agent with a random emotion each turn.
pub struct RandomEmotionProvider;

#[async_trait]
impl Provider for RandomEmotionProvider {
    fn name(&self) -> &'static str {
        "RANDOM_EMOTION"
    }

    fn description(&self) -> &'static str {
        "A randomly selected emotional state for the agent"
    }

    async fn get(
        &self,
        runtime: &dyn IAgentRuntime,
        _message: &Memory,
        _state: Option<&State>,
    ) -> PluginResult<ProviderResult> {
        // EMOTIONS is non-empty, so choose cannot return None.
        let (emotion, text) = EMOTIONS
            .choose(&mut rand::thread_rng())
            .copied()
            .unwrap_or(EMOTIONS[0]);

        Ok(
            ProviderResult::new(format!("{} {}", runtime.agent_name(), text))
                .with_value("emotion", emotion),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_emotion_has_a_description() {
        for (emotion, text) in EMOTIONS {
            assert!(!emotion.is_empty());
            assert!(text.starts_with("is ") || text.starts_with("feels "));
        }
    }
}
