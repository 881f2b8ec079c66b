//! Pure response classification.
//!
//! Turns an HTTP status plus raw body into a [`Verdict`]. Nothing here does
//! I/O, so every rule is testable against canned responses.

use serde_json::Value;

use crate::catalog::ResponseShape;
use crate::constants::PREVIEW_MAX_CHARS;

pub const MODEL_NOT_FOUND: &str = "model not found";
pub const AUTHENTICATION_FAILED: &str = "authentication failed";
pub const BAD_REQUEST: &str = "bad request";

/// Substrings in a 400 message that mean the model wants reasoning-style
/// parameters.
const ALTERNATE_PARAM_TRIGGERS: &[&str] = &["max_completion_tokens", "temperature"];

/// Outcome of classifying one response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Accepted {
        preview: Option<String>,
        model_returned: Option<String>,
    },
    Rejected {
        error: String,
    },
}

pub fn classify(status: u16, body: &str, shape: ResponseShape) -> Verdict {
    match status {
        200 => {
            let parsed: Option<Value> = serde_json::from_str(body).ok();
            Verdict::Accepted {
                preview: parsed.as_ref().and_then(|v| extract_preview(v, shape)),
                model_returned: parsed
                    .as_ref()
                    .and_then(|v| v["model"].as_str())
                    .map(String::from),
            }
        }
        404 => rejected(MODEL_NOT_FOUND),
        401 => rejected(AUTHENTICATION_FAILED),
        400 => rejected(&error_message(body).unwrap_or_else(|| BAD_REQUEST.to_string())),
        other => rejected(&format!("HTTP {other}")),
    }
}

fn rejected(error: &str) -> Verdict {
    Verdict::Rejected {
        error: error.to_string(),
    }
}

/// Extracts `error.message` from an error body.
///
/// Returns `None` for bodies that are not JSON or carry no message.
pub fn error_message(body: &str) -> Option<String> {
    let parsed: Value = serde_json::from_str(body).ok()?;
    parsed["error"]["message"]
        .as_str()
        .filter(|m| !m.is_empty())
        .map(String::from)
}

/// Whether a 400 message asks for the reasoning-model parameter shape.
pub fn needs_alternate_params(message: &str) -> bool {
    ALTERNATE_PARAM_TRIGGERS
        .iter()
        .any(|trigger| message.contains(trigger))
}

/// Pulls the generated text out of a successful response, truncated to
/// [`PREVIEW_MAX_CHARS`] characters.
pub fn extract_preview(body: &Value, shape: ResponseShape) -> Option<String> {
    let text = match shape {
        ResponseShape::ContentBlocks => body["content"][0]["text"].as_str(),
        ResponseShape::ChatChoices => body["choices"][0]["message"]["content"].as_str(),
    }?;
    Some(text.chars().take(PREVIEW_MAX_CHARS).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_200_chat_choices() {
        let body = json!({
            "model": "gpt-4o-2024-08-06",
            "choices": [{ "message": { "role": "assistant", "content": "OK" } }]
        })
        .to_string();
        assert_eq!(
            classify(200, &body, ResponseShape::ChatChoices),
            Verdict::Accepted {
                preview: Some("OK".to_string()),
                model_returned: Some("gpt-4o-2024-08-06".to_string()),
            }
        );
    }

    #[test]
    fn test_200_content_blocks() {
        let body = json!({
            "model": "claude-3-5-sonnet-20241022",
            "content": [{ "type": "text", "text": "OK" }]
        })
        .to_string();
        let Verdict::Accepted { preview, .. } = classify(200, &body, ResponseShape::ContentBlocks)
        else {
            panic!("expected accepted");
        };
        assert_eq!(preview.as_deref(), Some("OK"));
    }

    #[test]
    fn test_200_with_unparseable_body_is_still_valid() {
        assert_eq!(
            classify(200, "not json", ResponseShape::ChatChoices),
            Verdict::Accepted {
                preview: None,
                model_returned: None,
            }
        );
    }

    #[test]
    fn test_preview_truncated_by_chars() {
        let long = "é".repeat(80);
        let body = json!({ "choices": [{ "message": { "content": long } }] });
        let preview = extract_preview(&body, ResponseShape::ChatChoices).unwrap();
        assert_eq!(preview.chars().count(), 50);
    }

    #[test]
    fn test_status_errors() {
        let shape = ResponseShape::ChatChoices;
        assert_eq!(classify(404, "{}", shape), rejected("model not found"));
        assert_eq!(classify(401, "", shape), rejected("authentication failed"));
        assert_eq!(classify(429, "{}", shape), rejected("HTTP 429"));
        assert_eq!(classify(500, "oops", shape), rejected("HTTP 500"));
    }

    #[test]
    fn test_400_uses_provider_message() {
        let body = json!({ "error": { "message": "Invalid model name" } }).to_string();
        assert_eq!(
            classify(400, &body, ResponseShape::ChatChoices),
            rejected("Invalid model name")
        );
    }

    #[test]
    fn test_400_malformed_body_falls_back() {
        assert_eq!(
            classify(400, "<html>Bad Request</html>", ResponseShape::ChatChoices),
            rejected("bad request")
        );
        assert_eq!(
            classify(400, r#"{"error":"flat string"}"#, ResponseShape::ChatChoices),
            rejected("bad request")
        );
    }

    #[test]
    fn test_needs_alternate_params() {
        assert!(needs_alternate_params("Unsupported parameter: 'temperature'"));
        assert!(needs_alternate_params(
            "Unsupported parameter: 'max_tokens' is not supported with this model. Use 'max_completion_tokens' instead."
        ));
        assert!(!needs_alternate_params("The model `gpt-6` does not exist"));
    }
}
