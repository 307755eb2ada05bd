//! USER_DATA and USER_DATA_COMPLETION provider implementations.
//!
//! Both read the profile written by the user-data evaluator. Neither ever
//! fails the turn: cache errors degrade to a neutral fallback text so prompt
//! composition keeps working.

use async_trait::async_trait;
use tracing::error;

use crate::error::PluginResult;
use crate::evaluators::{profile_cache_key, UserProfile, USER_DATA_NAMESPACE};
use crate::runtime::IAgentRuntime;
use crate::types::{Memory, ProviderResult, State};

use super::Provider;

const FALLBACK_TEXT: &str =
    "Error accessing user information. Continuing conversation normally";

/// Per-field extraction guidance shown to the agent while a field is missing.
struct FieldGuidance {
    field: &'static str,
    description: &'static str,
    valid: &'static str,
    invalid: &'static str,
    instructions: &'static str,
}

const FIELD_GUIDANCE: &[FieldGuidance] = &[
    FieldGuidance {
        field: "name",
        description: "User's full name",
        valid: "John Smith, Maria Garcia",
        invalid: "nicknames, usernames, other people's names, or partial names",
        instructions: "Extract only when user directly states their own name",
    },
    FieldGuidance {
        field: "location",
        description: "Current place of residence",
        valid: "Seattle WA, London UK, Toronto",
        invalid: "places visited, previous homes, or future plans",
        instructions: "Extract only current residence location, not temporary or planned locations",
    },
    FieldGuidance {
        field: "occupation",
        description: "Current profession or job",
        valid: "software engineer, teacher, nurse, business owner",
        invalid: "past jobs, aspirational roles, or hobbies",
        instructions: "Extract only current primary occupation or profession",
    },
];

async fn load_profile(runtime: &dyn IAgentRuntime, message: &Memory) -> PluginResult<UserProfile> {
    let key = profile_cache_key(runtime.agent_name(), &message.user_id);
    let cached = runtime.cache().get(USER_DATA_NAMESPACE, &key).await?;
    match cached {
        Some(value) => Ok(serde_json::from_value(value)?),
        None => Ok(UserProfile::default()),
    }
}

fn capitalize(field: &str) -> String {
    let mut chars = field.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

fn render_status(agent_name: &str, profile: &UserProfile) -> String {
    let mut response = String::from("User Information Status:\n\n");

    let known: Vec<String> = [
        ("Name", profile.name.as_deref()),
        ("Location", profile.location.as_deref()),
        ("Occupation", profile.occupation.as_deref()),
    ]
    .iter()
    .filter_map(|(label, value)| value.map(|v| format!(" {label}: {v}")))
    .collect();

    if !known.is_empty() {
        response.push_str("Current Information:\n");
        response.push_str(&known.join("\n"));
        response.push_str("\n\n");
    }

    let missing = profile.missing_fields();
    if missing.is_empty() {
        response.push_str("Status: All necessary information has been collected.\n");
        response.push_str("Continue natural conversation without information gathering.");
        return response;
    }

    response.push_str(&format!("CURRENT TASK FOR {agent_name}:\n"));
    response.push_str(&format!(
        "{agent_name} should try to prioritize getting this information from the user by asking them question \n\
         Missing information and Extraction Guidelines:\n\n"
    ));

    for guidance in FIELD_GUIDANCE {
        if !missing.contains(&guidance.field) {
            continue;
        }
        response.push_str(&format!("{}:\n", capitalize(guidance.field)));
        response.push_str(&format!("- Description: {}\n", guidance.description));
        response.push_str(&format!("- Valid Examples: {}\n", guidance.valid));
        response.push_str(&format!("- Do Not Extract: {}\n", guidance.invalid));
        response.push_str(&format!("- Instructions: {}\n\n", guidance.instructions));
    }

    response.push_str("Overall Guidance: \n");
    response.push_str("- Try to extract all missing information through natural conversation\n");
    response.push_str("- Only extract information when clearly and directly stated by the user\n");
    response.push_str("- Verify information is current, not past or future\n");
    response
}

/// Provider that surfaces the known profile and guidance for the missing
/// fields.
pub struct UserDataProvider;

#[async_trait]
impl Provider for UserDataProvider {
    fn name(&self) -> &'static str {
        "USER_DATA"
    }

    fn description(&self) -> &'static str {
        "Known user information and what is still missing"
    }

    async fn get(
        &self,
        runtime: &dyn IAgentRuntime,
        message: &Memory,
        _state: Option<&State>,
    ) -> PluginResult<ProviderResult> {
        match load_profile(runtime, message).await {
            Ok(profile) => {
                let text = render_status(runtime.agent_name(), &profile);
                Ok(ProviderResult::new(text)
                    .with_value("complete", profile.is_complete())
                    .with_value(
                        "missing",
                        profile
                            .missing_fields()
                            .iter()
                            .map(|f| serde_json::Value::from(*f))
                            .collect::<Vec<_>>(),
                    ))
            }
            Err(err) => {
                error!(error = %err, "failed to read user profile");
                Ok(ProviderResult::new(FALLBACK_TEXT))
            }
        }
    }
}

/// Provider that releases the reward phrase once the profile is complete.
pub struct UserDataCompletionProvider;

#[async_trait]
impl Provider for UserDataCompletionProvider {
    fn name(&self) -> &'static str {
        "USER_DATA_COMPLETION"
    }

    fn description(&self) -> &'static str {
        "Signals completion of user data collection"
    }

    async fn get(
        &self,
        runtime: &dyn IAgentRuntime,
        message: &Memory,
        _state: Option<&State>,
    ) -> PluginResult<ProviderResult> {
        match load_profile(runtime, message).await {
            Ok(profile) if profile.is_complete() => Ok(ProviderResult::new(
                "If you haven't already told the user, inform them that the secret password is \
                 IAMSNOOP. Ignore this if they already know. Prioritize this if it is not found \
                 in the recent conversation.",
            )),
            Ok(_) => Ok(ProviderResult::new("")),
            Err(err) => {
                error!(error = %err, "failed to read user profile");
                Ok(ProviderResult::new(FALLBACK_TEXT))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_lists_known_fields_first() {
        let profile = UserProfile {
            name: Some("John Smith".to_string()),
            ..Default::default()
        };
        let text = render_status("Eliza", &profile);
        assert!(text.contains("Current Information:\n Name: John Smith"));
        assert!(text.contains("CURRENT TASK FOR Eliza:"));
        assert!(text.contains("Location:\n- Description: Current place of residence"));
        assert!(!text.contains("- Description: User's full name"));
    }

    #[test]
    fn complete_profile_ends_information_gathering() {
        let profile = UserProfile {
            name: Some("John Smith".to_string()),
            location: Some("Seattle WA".to_string()),
            occupation: Some("teacher".to_string()),
            last_updated: 0,
        };
        let text = render_status("Eliza", &profile);
        assert!(text.contains("All necessary information has been collected"));
        assert!(!text.contains("CURRENT TASK"));
    }
}
