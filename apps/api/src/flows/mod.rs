// Analysis flows. Each flow is one linear pipeline:
// validate input → build prompt → complete → decode → validate output.
// All completion calls go through nexus::CompletionBackend — no direct
// HTTP calls here.

pub mod handlers;
pub mod job_recommendations;
pub mod prompts;
pub mod rejection_analysis;
pub mod resume_match;

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::errors::AppError;
use crate::nexus::decode::decode;
use crate::nexus::{CompletionBackend, CompletionOptions};
use crate::validate::Validate;

/// Runs one flow end to end. Linear, no retries: a single malformed
/// generation is a terminated failure, surfaced for the caller to decide
/// on retry policy.
///
/// Failure taxonomy, in pipeline order: `InvalidInput` before any network
/// call, `Completion`/`Decode` for the upstream leg, `InvalidModelOutput`
/// when decoded JSON does not deserialize into or validate as the flow's
/// output type.
pub(crate) async fn run_flow<I, O>(
    flow: &'static str,
    input: &I,
    build_prompt: impl Fn(&I) -> String,
    backend: &dyn CompletionBackend,
) -> Result<O, AppError>
where
    I: Validate,
    O: DeserializeOwned + Validate,
{
    input.validate()?;

    let prompt = build_prompt(input);
    debug!(flow, prompt_chars = prompt.chars().count(), "prompt built");

    let raw = backend.complete(&prompt, &CompletionOptions::default()).await?;
    let value = decode(&raw)?;

    let output: O = serde_json::from_value(value)
        .map_err(|e| AppError::InvalidModelOutput(e.to_string()))?;
    output
        .validate()
        .map_err(|e| AppError::InvalidModelOutput(e.to_string()))?;

    debug!(flow, "flow completed");
    Ok(output)
}

#[cfg(test)]
pub(crate) mod testing {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;

    use crate::nexus::{
        Choice, ChoiceMessage, CompletionBackend, CompletionError, CompletionOptions, Envelope,
        RawCompletion,
    };

    /// Fake backend returning a canned completion and counting invocations.
    pub(crate) struct ScriptedBackend {
        raw: RawCompletion,
        pub calls: AtomicUsize,
    }

    impl ScriptedBackend {
        pub fn text(payload: &str) -> Self {
            Self {
                raw: RawCompletion::Text(payload.to_string()),
                calls: AtomicUsize::new(0),
            }
        }

        pub fn envelope(content: &str) -> Self {
            Self {
                raw: RawCompletion::Envelope(Envelope {
                    choices: vec![Choice {
                        message: ChoiceMessage {
                            content: content.to_string(),
                        },
                    }],
                }),
                calls: AtomicUsize::new(0),
            }
        }

        pub fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl CompletionBackend for ScriptedBackend {
        async fn complete(
            &self,
            _prompt: &str,
            _options: &CompletionOptions,
        ) -> Result<RawCompletion, CompletionError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.raw.clone())
        }
    }

    /// Fake backend that always fails at the transport boundary.
    pub(crate) struct FailingBackend;

    #[async_trait]
    impl CompletionBackend for FailingBackend {
        async fn complete(
            &self,
            _prompt: &str,
            _options: &CompletionOptions,
        ) -> Result<RawCompletion, CompletionError> {
            Err(CompletionError::Api {
                status: 503,
                message: "service unavailable".to_string(),
            })
        }
    }
}
