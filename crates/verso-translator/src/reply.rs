use serde_json::Value;
use verso_types::WordGloss;

use crate::EnrichError;

/// Remove an optional markdown code fence around a model reply
pub fn strip_code_fence(content: &str) -> &str {
    let mut content = content.trim();

    if let Some(rest) = content.strip_prefix("```json") {
        content = rest;
    }
    if let Some(rest) = content.strip_prefix("```") {
        content = rest;
    }
    if let Some(rest) = content.strip_suffix("```") {
        content = rest;
    }

    content.trim()
}

/// Parse a model reply into a gloss.
///
/// The reply must be a JSON object (optionally fenced). Missing keys become
/// empty strings; anything else that deviates is a parse failure.
pub fn parse_reply(content: &str) -> Result<WordGloss, EnrichError> {
    let value: Value = serde_json::from_str(strip_code_fence(content))
        .map_err(|e| EnrichError::Parse(e.to_string()))?;

    let Value::Object(object) = value else {
        return Err(EnrichError::Parse("reply is not a JSON object".to_string()));
    };

    let field = |key: &str| match object.get(key) {
        None => Ok(String::new()),
        Some(Value::String(text)) => Ok(text.clone()),
        Some(other) => Err(EnrichError::Parse(format!(
            "`{key}` is not a string: {other}"
        ))),
    };

    Ok(WordGloss {
        translation: field("translation")?,
        explanation: field("explanation")?,
    })
}
