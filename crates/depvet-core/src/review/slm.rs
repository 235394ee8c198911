//! Blocking client for the SLM review endpoint.
//!
//! Speaks the Ollama-style chat API: one non-streamed request with
//! zero-temperature decoding and a JSON render format, one bounded attempt,
//! no retry. Every failure mode is a typed [`ReviewError`] whose display
//! string becomes the `unknown` verdict's explanation.

use std::time::Duration;

use reqwest::StatusCode;
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::review::ReviewConfig;
use crate::review::model::{RiskLevel, Verdict};
use crate::signals::model::FileSignals;

/// Hard ceiling on the review call; on expiry the call is abandoned and
/// surfaces as a transport error.
pub const REVIEW_TIMEOUT: Duration = Duration::from_secs(120);

const BODY_PREVIEW_LIMIT: usize = 200;

#[derive(Debug, Error)]
pub enum ReviewError {
    #[error("SLM call failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("SLM HTTP {status}: {body}")]
    BadStatus { status: StatusCode, body: String },
    #[error("SLM returned malformed JSON: {0}")]
    MalformedResponse(#[from] serde_json::Error),
    #[error("SLM response carried no message content")]
    MissingContent,
    #[error("SLM returned invalid risk level {0:?}")]
    InvalidRisk(String),
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    stream: bool,
    options: ChatOptions,
    messages: [ChatMessage<'a>; 1],
    format: &'a str,
}

#[derive(Serialize)]
struct ChatOptions {
    temperature: f32,
    num_ctx: u32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    message: Option<ChatMessageBody>,
}

#[derive(Deserialize)]
struct ChatMessageBody {
    #[serde(default)]
    content: String,
}

/// Verdict exactly as the model emits it, before validation.
/// All three keys are required; a missing key is a malformed response.
#[derive(Deserialize)]
struct RawVerdict {
    risk: String,
    issues: Vec<String>,
    explanation: String,
}

/// Send the candidate snippet for review and validate the reply.
pub fn request_review(
    candidate: &FileSignals,
    config: &ReviewConfig,
) -> Result<Verdict, ReviewError> {
    let url = format!("{}/api/chat", config.base_url.trim_end_matches('/'));
    let prompt = build_prompt(&candidate.snippet);
    let request = ChatRequest {
        model: &config.model,
        stream: false,
        options: ChatOptions {
            temperature: 0.0,
            num_ctx: 4096,
        },
        messages: [ChatMessage {
            role: "user",
            content: &prompt,
        }],
        format: "json",
    };

    let client = Client::builder().timeout(REVIEW_TIMEOUT).build()?;
    let response = client.post(url).json(&request).send()?;
    let status = response.status();
    let body = response.text()?;
    if !status.is_success() {
        return Err(ReviewError::BadStatus {
            status,
            body: preview(&body),
        });
    }

    let parsed: ChatResponse = serde_json::from_str(&body)?;
    let content = parsed.message.map(|m| m.content).unwrap_or_default();
    let content = content.trim();
    if content.is_empty() {
        return Err(ReviewError::MissingContent);
    }

    let raw: RawVerdict = serde_json::from_str(strip_code_fence(content))?;
    let risk = RiskLevel::parse(&raw.risk).ok_or(ReviewError::InvalidRisk(raw.risk))?;

    Ok(Verdict {
        risk,
        issues: raw.issues,
        explanation: raw.explanation,
    })
}

fn build_prompt(snippet: &str) -> String {
    format!(
        r#"You are a security code reviewer for supply-chain risks.
Analyze the dependency snippet BELOW and return ONLY strict JSON:

{{
  "risk": "low|medium|high",
  "issues": ["short issue 1", "short issue 2"],
  "explanation": "2-4 sentences, one paragraph"
}}

Consider behaviors like:
- environment variable access
- network egress (HTTP/HTTPS/net) on import
- use of obfuscation (base64) or dynamic code (eval/new Function)
- child process usage

Code:
---
{snippet}
---"#
    )
}

/// Strip a leading markdown code fence, including a language-tag line.
///
/// Models occasionally wrap the requested JSON in ``` fences despite the
/// strict-JSON instruction; the payload inside is still valid.
fn strip_code_fence(text: &str) -> &str {
    let Some(rest) = text.strip_prefix("```") else {
        return text;
    };
    let rest = rest.trim_end_matches('`');
    match rest.split_once('\n') {
        Some((_tag, body)) => body.trim(),
        None => rest.trim(),
    }
}

fn preview(body: &str) -> String {
    body.chars().take(BODY_PREVIEW_LIMIT).collect()
}
