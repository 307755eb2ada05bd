//! Prompt templates for field extraction and analysis.
//!
//! Each single-field instruction asks the model for the bare value and
//! nothing else; generation is stopped at the first newline by the caller.

/// Instruction to extract a wallet address from a message.
pub fn extract_address_prompt(text: &str) -> String {
    format!(
        r#"Extract only the address from this message: "{text}"
Rules:
- Return ONLY the address without any explanation
- Do not include quotes or punctuation
- Do not include phrases like "I think" or "the address is""#
    )
}

/// Instruction to extract a coin symbol from a message.
pub fn extract_coin_symbol_prompt(text: &str) -> String {
    format!(
        r#"Extract only the coin symbol from this message: "{text}"
Rules:
- Return ONLY the coin symbol without any explanation
- Do not include quotes or punctuation
- Do not include phrases like "I think" or "the coin symbol is""#
    )
}

/// Instruction to extract an amount from a message.
pub fn extract_amount_prompt(text: &str) -> String {
    format!(
        r#"Extract only the amount from this message: "{text}"
Rules:
- Return ONLY the amount without any explanation
- Do not include quotes or punctuation
- Do not include phrases like "I think" or "the amount is""#
    )
}

/// Instruction to extract the destination coin symbol of a swap.
pub fn extract_target_coin_symbol_prompt(text: &str) -> String {
    format!(
        r#"Extract only the coin symbol the user wants to receive from this swap message: "{text}"
Rules:
- Return ONLY the coin symbol without any explanation
- Do not include quotes or punctuation
- Do not include phrases like "I think" or "the coin symbol is""#
    )
}

/// Instruction to extract the recipient address of a transfer.
pub fn extract_recipient_prompt(text: &str) -> String {
    format!(
        r#"Extract only the recipient address from this transfer message: "{text}"
Rules:
- Return ONLY the address without any explanation
- Do not include quotes or punctuation
- Do not include phrases like "I think" or "the address is""#
    )
}

/// Instruction to extract a news search term from a message.
pub fn extract_search_term_prompt(text: &str) -> String {
    format!(
        r#"Extract only the search term from this message: "{text}"
Rules:
- Return ONLY the search term without any explanation
- Do not include quotes or punctuation
- Do not include phrases like "I think" or "the search term is""#
    )
}

/// Instruction to classify the sentiment of a message.
pub fn analyze_sentiment_prompt(text: &str) -> String {
    format!(
        r#"Classify the sentiment of this text as positive, negative, or neutral: "{text}"
Rules:
- Return ONLY one word: positive, negative, or neutral
- Do not include any explanation"#
    )
}

/// Instruction to answer a question against a corpus of collected posts.
pub fn analyze_post_prompt(question: &str, posts: &str) -> String {
    format!(
        r#"You are given a collection of posts:
{posts}

Answer this question about the posts: "{question}"
Rules:
- Answer in a single line
- Base the answer only on the posts above"#
    )
}

/// Instruction to extract user profile fields from a conversation turn.
///
/// The model must return a JSON object containing only fields that are
/// explicitly and currently stated by the user about themselves.
pub fn extract_user_data_prompt(text: &str) -> String {
    format!(
        r#"Analyze the following conversation to extract personal information.
Only extract information when it is explicitly and clearly stated by the user about themselves.

Conversation:
{text}

Return a JSON object containing only the fields where information was clearly found:
{{
    "name": "extracted full name if stated",
    "location": "extracted current residence if stated",
    "occupation": "extracted current occupation if stated"
}}

Only include fields where information is explicitly stated and current.
Omit fields if information is unclear, hypothetical, or about others."#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompts_embed_the_message_text() {
        let p = extract_address_prompt("send to 0xabc");
        assert!(p.contains("0xabc"));
        assert!(p.contains("Return ONLY the address"));
    }
}
