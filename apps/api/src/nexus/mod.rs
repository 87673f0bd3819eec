/// Nexus client — the single point of entry for all completion calls.
///
/// ARCHITECTURAL RULE: no other module may reach the Nexus endpoint directly.
/// All LLM interactions go through `CompletionBackend`, so tests and flows
/// never need live credentials.
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

pub mod decode;
pub mod prompts;

/// Default generation model, overridable per call and via NEXUS_MODEL.
pub const DEFAULT_MODEL: &str = "nova-micro";

/// Hard cap on outbound prompt size. Prompts are advisory context, so
/// overlong ones are truncated rather than rejected.
pub const MAX_PROMPT_CHARS: usize = 5000;

#[derive(Debug, Error)]
pub enum CompletionError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("completion endpoint error (status {status}): {message}")]
    Api { status: u16, message: String },
}

/// Per-call knobs for `CompletionBackend::complete`.
#[derive(Debug, Clone, Default)]
pub struct CompletionOptions {
    /// Overrides the client's configured model when set.
    pub model: Option<String>,
}

/// The two transport shapes the endpoint is known to produce: a structured
/// chat-completion envelope, or the generation text as the raw body.
/// A closed set — decoding matches exhaustively, no type probing.
#[derive(Debug, Clone)]
pub enum RawCompletion {
    Text(String),
    Envelope(Envelope),
}

#[derive(Debug, Clone, Deserialize)]
pub struct Envelope {
    pub choices: Vec<Choice>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Choice {
    pub message: ChoiceMessage,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChoiceMessage {
    pub content: String,
}

#[derive(Debug, Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct NexusErrorBody {
    error: NexusErrorDetail,
}

#[derive(Debug, Deserialize)]
struct NexusErrorDetail {
    message: String,
}

/// Seam between the flows and the remote endpoint. `NexusClient` is the
/// production implementation; tests inject scripted fakes.
#[async_trait]
pub trait CompletionBackend: Send + Sync {
    async fn complete(
        &self,
        prompt: &str,
        options: &CompletionOptions,
    ) -> Result<RawCompletion, CompletionError>;
}

/// HTTP client for the Nexus completion endpoint.
///
/// One best-effort request per call: no retry, no backoff, no intrinsic
/// timeout. Callers wanting bounded latency wrap the call themselves, and
/// dropping the returned future aborts the in-flight request.
#[derive(Clone)]
pub struct NexusClient {
    client: Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl NexusClient {
    pub fn new(base_url: String, api_key: String, model: String) -> Self {
        Self {
            client: Client::new(),
            base_url,
            api_key,
            model,
        }
    }
}

#[async_trait]
impl CompletionBackend for NexusClient {
    async fn complete(
        &self,
        prompt: &str,
        options: &CompletionOptions,
    ) -> Result<RawCompletion, CompletionError> {
        let prompt = truncate_chars(prompt, MAX_PROMPT_CHARS);
        let model = options.model.as_deref().unwrap_or(&self.model);

        let request_body = CompletionRequest {
            model,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
        };

        debug!(model, prompt_chars = prompt.chars().count(), "calling Nexus");

        let response = self
            .client
            .post(&self.base_url)
            .bearer_auth(&self.api_key)
            .header("content-type", "application/json")
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            // Prefer the endpoint's structured error message over the raw body.
            let message = serde_json::from_str::<NexusErrorBody>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            let message = if message.trim().is_empty() {
                "completion request failed".to_string()
            } else {
                message
            };
            return Err(CompletionError::Api {
                status: status.as_u16(),
                message,
            });
        }

        // Simplified deployments return the generation text as the raw body.
        Ok(match serde_json::from_str::<Envelope>(&body) {
            Ok(envelope) => RawCompletion::Envelope(envelope),
            Err(_) => RawCompletion::Text(body),
        })
    }
}

/// Truncates to at most `max` characters, respecting char boundaries.
pub fn truncate_chars(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    #[test]
    fn test_truncate_chars_short_input_unchanged() {
        assert_eq!(truncate_chars("hello", 10), "hello");
    }

    #[test]
    fn test_truncate_chars_cuts_at_limit() {
        assert_eq!(truncate_chars("hello world", 5), "hello");
    }

    #[test]
    fn test_truncate_chars_respects_multibyte_boundaries() {
        assert_eq!(truncate_chars("héllo wörld", 6), "héllo ");
        assert_eq!(truncate_chars("日本語テスト", 3), "日本語");
    }

    fn test_client(server: &MockServer) -> NexusClient {
        NexusClient::new(
            server.url("/"),
            "test-key".to_string(),
            DEFAULT_MODEL.to_string(),
        )
    }

    #[tokio::test]
    async fn test_complete_parses_envelope_response() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/")
                .header("authorization", "Bearer test-key")
                .json_body_partial(r#"{"model": "nova-micro"}"#);
            then.status(200).json_body(json!({
                "choices": [{"message": {"content": "{\"ok\": true}"}}]
            }));
        });

        let raw = test_client(&server)
            .complete("analyze this resume", &CompletionOptions::default())
            .await
            .unwrap();

        mock.assert();
        match raw {
            RawCompletion::Envelope(envelope) => {
                assert_eq!(envelope.choices[0].message.content, "{\"ok\": true}");
            }
            RawCompletion::Text(_) => panic!("expected envelope"),
        }
    }

    #[tokio::test]
    async fn test_complete_treats_non_envelope_body_as_text() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/");
            then.status(200).body("{\"matchScore\": 82}");
        });

        let raw = test_client(&server)
            .complete("prompt", &CompletionOptions::default())
            .await
            .unwrap();

        match raw {
            RawCompletion::Text(text) => assert_eq!(text, "{\"matchScore\": 82}"),
            RawCompletion::Envelope(_) => panic!("expected bare text"),
        }
    }

    #[tokio::test]
    async fn test_complete_surfaces_structured_error_message() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/");
            then.status(401)
                .json_body(json!({"error": {"message": "invalid api key"}}));
        });

        let err = test_client(&server)
            .complete("prompt", &CompletionOptions::default())
            .await
            .unwrap_err();

        match err {
            CompletionError::Api { status, message } => {
                assert_eq!(status, 401);
                assert_eq!(message, "invalid api key");
            }
            CompletionError::Http(_) => panic!("expected api error"),
        }
    }

    #[tokio::test]
    async fn test_complete_falls_back_to_raw_error_body() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/");
            then.status(503).body("upstream overloaded");
        });

        let err = test_client(&server)
            .complete("prompt", &CompletionOptions::default())
            .await
            .unwrap_err();

        match err {
            CompletionError::Api { status, message } => {
                assert_eq!(status, 503);
                assert_eq!(message, "upstream overloaded");
            }
            CompletionError::Http(_) => panic!("expected api error"),
        }
    }

    #[tokio::test]
    async fn test_complete_generic_message_for_empty_error_body() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path("/");
            then.status(500);
        });

        let err = test_client(&server)
            .complete("prompt", &CompletionOptions::default())
            .await
            .unwrap_err();

        match err {
            CompletionError::Api { status, message } => {
                assert_eq!(status, 500);
                assert_eq!(message, "completion request failed");
            }
            CompletionError::Http(_) => panic!("expected api error"),
        }
    }

    #[tokio::test]
    async fn test_complete_truncates_prompt_before_sending() {
        let server = MockServer::start();
        // Exact body match: anything other than the truncated prompt misses
        // the mock and fails the call.
        let mock = server.mock(|when, then| {
            when.method(POST).path("/").json_body(json!({
                "model": "nova-micro",
                "messages": [{"role": "user", "content": "x".repeat(MAX_PROMPT_CHARS)}]
            }));
            then.status(200).body("ok");
        });

        let long_prompt = "x".repeat(MAX_PROMPT_CHARS + 1000);
        test_client(&server)
            .complete(&long_prompt, &CompletionOptions::default())
            .await
            .unwrap();

        mock.assert();
    }

    #[tokio::test]
    async fn test_complete_honors_model_override() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(POST)
                .path("/")
                .json_body_partial(r#"{"model": "nova-lite"}"#);
            then.status(200).body("ok");
        });

        let options = CompletionOptions {
            model: Some("nova-lite".to_string()),
        };
        test_client(&server).complete("prompt", &options).await.unwrap();

        mock.assert();
    }
}
