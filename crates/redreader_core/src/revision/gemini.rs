//! Gemini REST implementation of the revision gateway.

use super::{RevisionGateway, RevisionKind};
use crate::config::Config;
use crate::error::ReaderError;
use crate::text::truncate_chars;
use reqwest::blocking::Client;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use std::time::Instant;
use tracing::{debug, error};

/// Calls `{api_base}/{model}:generateContent` with a blocking client.
#[derive(Debug, Clone)]
pub struct GeminiGateway {
    client: Client,
    api_key: String,
    model: String,
    api_base: String,
}

impl GeminiGateway {
    /// Build a gateway for `api_key` using the model, base URL and timeout
    /// from `config`.
    ///
    /// # Errors
    /// Returns the `reqwest` error when the HTTP client cannot be built.
    pub fn new(api_key: impl Into<String>, config: &Config) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(config.request_timeout())
            .build()?;
        Ok(Self {
            client,
            api_key: api_key.into(),
            model: config.model.clone(),
            api_base: config.api_base.trim_end_matches('/').to_string(),
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/{}:generateContent", self.api_base, self.model)
    }

    fn send_request(
        &self,
        kind: RevisionKind,
        body: &GenerateContentRequest,
    ) -> Result<Option<String>, ReaderError> {
        let response = self
            .client
            .post(self.endpoint())
            .query(&[("key", self.api_key.as_str())])
            .json(body)
            .send()
            .map_err(|err| {
                ReaderError::revision(kind, format!("Gemini API request failed: {}", err))
            })?;

        let status = response.status();
        if !status.is_success() {
            let body_text = response
                .text()
                .unwrap_or_else(|_| "Failed to read Gemini error body".to_string());
            return Err(ReaderError::revision(
                kind,
                error_message_for_response(status, &body_text),
            ));
        }

        let parsed: GenerateContentResponse = response.json().map_err(|err| {
            ReaderError::revision(kind, format!("Failed to parse Gemini response: {}", err))
        })?;
        Ok(extract_text_response(parsed))
    }
}

impl RevisionGateway for GeminiGateway {
    fn revise(&self, kind: RevisionKind, text: &str) -> Result<String, ReaderError> {
        let started = Instant::now();
        let request = build_request(kind, text);
        let result = self.send_request(kind, &request);
        debug!(
            kind = ?kind,
            elapsed_ms = started.elapsed().as_secs_f64() * 1000.0,
            ok = result.is_ok(),
            "gemini revision finished"
        );
        match result {
            Ok(Some(reply)) if !reply.trim().is_empty() => Ok(reply),
            Ok(_) => Ok(kind.empty_reply_fallback(text)),
            Err(err) => {
                error!("{}", err);
                Err(err)
            }
        }
    }
}

fn build_request(kind: RevisionKind, text: &str) -> GenerateContentRequest {
    let prompt = format!(
        "{}\n\nText:\n{}",
        kind.instruction(),
        truncate_chars(text, kind.input_limit())
    );
    GenerateContentRequest {
        contents: vec![Content {
            role: "user".to_string(),
            parts: vec![Part { text: prompt }],
        }],
    }
}

fn error_message_for_response(status: StatusCode, body: &str) -> String {
    if let Ok(wrapper) = serde_json::from_str::<ErrorWrapper>(body) {
        let detail = wrapper
            .error
            .message
            .or(wrapper.error.status)
            .unwrap_or_else(|| body.to_string());
        return format!("Gemini API error ({}): {}", status, detail);
    }
    if body.trim().is_empty() {
        return format!(
            "Gemini API error ({})",
            status.canonical_reason().unwrap_or("request failed")
        );
    }
    format!("Gemini API error ({}): {}", status, body.trim())
}

fn extract_text_response(response: GenerateContentResponse) -> Option<String> {
    let parts = response
        .candidates?
        .into_iter()
        .next()?
        .content?
        .parts;
    let text: String = parts.into_iter().filter_map(|part| part.text).collect();
    Some(text)
}

#[derive(Debug, Serialize, Deserialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    role: String,
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    candidates: Option<Vec<Candidate>>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<ContentResponse>,
}

#[derive(Deserialize)]
struct ContentResponse {
    parts: Vec<PartResponse>,
}

#[derive(Deserialize)]
struct PartResponse {
    text: Option<String>,
}

#[derive(Deserialize)]
struct ErrorWrapper {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
    status: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_carries_instruction_and_truncated_text() {
        let long = "x".repeat(12_000);
        let request = build_request(RevisionKind::Simplify, &long);
        let prompt = &request.contents[0].parts[0].text;
        assert!(prompt.starts_with("Rewrite the following text"));
        assert!(prompt.ends_with(&"x".repeat(10_000)));
        assert!(!prompt.contains(&"x".repeat(10_001)));

        let clean = build_request(RevisionKind::Clean, &long);
        assert!(!clean.contents[0].parts[0].text.contains(&"x".repeat(8_001)));
    }

    #[test]
    fn request_serializes_to_generate_content_shape() {
        let value = serde_json::to_value(build_request(RevisionKind::Summarize, "hi"))
            .expect("serialize");
        assert_eq!(value["contents"][0]["role"], "user");
        assert!(value["contents"][0]["parts"][0]["text"]
            .as_str()
            .expect("text")
            .ends_with("Text:\nhi"));
    }

    #[test]
    fn response_text_joins_first_candidate_parts() {
        let parsed: GenerateContentResponse = serde_json::from_str(
            r#"{"candidates":[{"content":{"parts":[{"text":"one "},{"text":"two"}]}},
                {"content":{"parts":[{"text":"ignored"}]}}]}"#,
        )
        .expect("parse");
        assert_eq!(extract_text_response(parsed).as_deref(), Some("one two"));

        let empty: GenerateContentResponse = serde_json::from_str("{}").expect("parse");
        assert_eq!(extract_text_response(empty), None);
    }

    #[test]
    fn error_message_prefers_api_error_detail() {
        let message = error_message_for_response(
            StatusCode::FORBIDDEN,
            r#"{"error":{"code":403,"message":"API key not valid","status":"PERMISSION_DENIED"}}"#,
        );
        assert!(message.contains("API key not valid"), "got {}", message);
        assert!(message.contains("403"), "got {}", message);

        let bare = error_message_for_response(StatusCode::BAD_GATEWAY, "  ");
        assert_eq!(bare, "Gemini API error (Bad Gateway)");
    }
}
