//! GET_USER_DATA evaluator implementation.
//!
//! Builds up a per-user profile (name, location, occupation) from what the
//! user states about themselves, one conversational turn at a time. The
//! profile lives in the runtime cache under an explicit namespace and key;
//! fields are only ever filled when empty, so re-running the evaluator over
//! the same turn is idempotent. Concurrent turns for the same user may race
//! on the cache entry; last write wins per field set.

use async_trait::async_trait;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, info, warn};

use crate::error::{PluginError, PluginResult};
use crate::prompts;
use crate::runtime::{IAgentRuntime, ModelParams, ModelType};
use crate::types::{Memory, State};

use super::{Evaluator, EvaluatorResult};

/// Cache namespace holding user profiles.
pub const USER_DATA_NAMESPACE: &str = "user_data";

/// How long a stored profile stays alive without being refreshed.
pub const PROFILE_TTL: Duration = Duration::from_secs(7 * 24 * 60 * 60);

/// Cache key of one user's profile.
pub fn profile_cache_key(agent_name: &str, user_id: &uuid::Uuid) -> String {
    format!("{agent_name}/{user_id}")
}

/// Stored profile of one user.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct UserProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub occupation: Option<String>,
    /// Unix millis of the last field change
    #[serde(default)]
    pub last_updated: i64,
}

impl UserProfile {
    /// Names of the fields still unknown.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.name.is_none() {
            missing.push("name");
        }
        if self.location.is_none() {
            missing.push("location");
        }
        if self.occupation.is_none() {
            missing.push("occupation");
        }
        missing
    }

    /// Whether every tracked field is known.
    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }

    /// Fill empty fields from an extraction, returning the fields that
    /// changed. Known fields are never overwritten.
    pub fn merge(&mut self, extracted: &UserProfile) -> Vec<&'static str> {
        let mut changed = Vec::new();
        if self.name.is_none() {
            if let Some(name) = nonempty(&extracted.name) {
                self.name = Some(name);
                changed.push("name");
            }
        }
        if self.location.is_none() {
            if let Some(location) = nonempty(&extracted.location) {
                self.location = Some(location);
                changed.push("location");
            }
        }
        if self.occupation.is_none() {
            if let Some(occupation) = nonempty(&extracted.occupation) {
                self.occupation = Some(occupation);
                changed.push("occupation");
            }
        }
        if !changed.is_empty() {
            self.last_updated = Utc::now().timestamp_millis();
        }
        changed
    }
}

fn nonempty(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Evaluator that extracts and stores user profile fields.
pub struct UserDataEvaluator;

impl UserDataEvaluator {
    async fn load_profile(
        &self,
        runtime: &dyn IAgentRuntime,
        key: &str,
    ) -> PluginResult<UserProfile> {
        let cached = runtime.cache().get(USER_DATA_NAMESPACE, key).await?;
        match cached {
            Some(value) => Ok(serde_json::from_value(value)?),
            None => Ok(UserProfile::default()),
        }
    }
}

#[async_trait]
impl Evaluator for UserDataEvaluator {
    fn name(&self) -> &'static str {
        "GET_USER_DATA"
    }

    fn description(&self) -> &'static str {
        "Extract the user's name, location and occupation from the conversation"
    }

    /// Runs only while the profile is incomplete. A cache failure here skips
    /// the evaluation rather than failing the turn.
    async fn validate(&self, runtime: &dyn IAgentRuntime, message: &Memory) -> bool {
        if message.content.text.trim().is_empty() {
            return false;
        }
        let key = profile_cache_key(runtime.agent_name(), &message.user_id);
        match self.load_profile(runtime, &key).await {
            Ok(profile) => !profile.is_complete(),
            Err(err) => {
                warn!(error = %err, "profile cache unavailable, skipping evaluation");
                false
            }
        }
    }

    async fn evaluate(
        &self,
        runtime: &dyn IAgentRuntime,
        message: &Memory,
        _state: Option<&State>,
    ) -> PluginResult<EvaluatorResult> {
        let key = profile_cache_key(runtime.agent_name(), &message.user_id);
        let mut profile = self.load_profile(runtime, &key).await?;

        let output = runtime
            .use_model(
                ModelType::ObjectMedium,
                ModelParams::with_prompt(prompts::extract_user_data_prompt(&message.content.text)),
            )
            .await?;
        let value = output
            .as_structured()
            .ok_or_else(|| PluginError::ModelError("expected a JSON object".to_string()))?;
        let extracted: UserProfile = serde_json::from_value(value)?;

        let changed = profile.merge(&extracted);
        if changed.is_empty() {
            debug!(%key, "no new profile fields in this turn");
            return Ok(EvaluatorResult::pass("No new user data")
                .with_detail("missing", missing_json(&profile)));
        }

        runtime
            .cache()
            .set(
                USER_DATA_NAMESPACE,
                &key,
                serde_json::to_value(&profile)?,
                PROFILE_TTL,
            )
            .await?;
        info!(%key, updated = ?changed, "stored user profile fields");

        Ok(EvaluatorResult::pass("Updated user data")
            .with_detail(
                "updated",
                changed
                    .iter()
                    .map(|f| serde_json::Value::from(*f))
                    .collect::<Vec<_>>(),
            )
            .with_detail("missing", missing_json(&profile)))
    }
}

fn missing_json(profile: &UserProfile) -> Vec<serde_json::Value> {
    profile
        .missing_fields()
        .iter()
        .map(|f| serde_json::Value::from(*f))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extracted(name: Option<&str>, location: Option<&str>, occupation: Option<&str>) -> UserProfile {
        UserProfile {
            name: name.map(str::to_string),
            location: location.map(str::to_string),
            occupation: occupation.map(str::to_string),
            last_updated: 0,
        }
    }

    #[test]
    fn merge_fills_only_empty_fields() {
        let mut profile = UserProfile {
            name: Some("John Smith".to_string()),
            ..Default::default()
        };
        let changed = profile.merge(&extracted(Some("Jane Doe"), Some("Seattle"), None));
        assert_eq!(changed, vec!["location"]);
        assert_eq!(profile.name.as_deref(), Some("John Smith"));
        assert_eq!(profile.location.as_deref(), Some("Seattle"));
    }

    #[test]
    fn merge_is_idempotent() {
        let mut profile = UserProfile::default();
        let update = extracted(Some("John"), Some("Seattle"), Some("engineer"));
        assert_eq!(profile.merge(&update).len(), 3);
        assert!(profile.merge(&update).is_empty());
        assert!(profile.is_complete());
    }

    #[test]
    fn merge_ignores_whitespace_values() {
        let mut profile = UserProfile::default();
        let changed = profile.merge(&extracted(Some("   "), None, Some("nurse")));
        assert_eq!(changed, vec!["occupation"]);
        assert!(profile.name.is_none());
    }

    #[test]
    fn missing_fields_track_completeness() {
        let mut profile = UserProfile::default();
        assert_eq!(profile.missing_fields(), vec!["name", "location", "occupation"]);
        profile.name = Some("John".to_string());
        assert_eq!(profile.missing_fields(), vec!["location", "occupation"]);
    }

    #[test]
    fn cache_key_combines_agent_and_user() {
        let user = uuid::Uuid::nil();
        assert_eq!(
            profile_cache_key("Eliza", &user),
            format!("Eliza/{user}")
        );
    }
}
