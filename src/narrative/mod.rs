//! Patient-facing narrative over the structured reasoning outputs.
//!
//! The text generator is an untrusted collaborator: its reply is parsed
//! against a fixed `SUMMARY:` / `KEY POINTS:` layout and any failure falls
//! back to a template built from the rule-based results. `narrate` never
//! fails and never returns empty text.

pub mod fallback;
pub mod mock;
pub mod ollama;
pub mod parser;
pub mod prompt;

use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::enums::Locale;
use crate::reasoning::{PipelineOutcome, ReasoningExplanation};

pub use mock::{FailingTextGenerator, MockTextGenerator};
pub use ollama::OllamaClient;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ServiceError {
    #[error("Cannot connect to text generation service at {0}")]
    Connection(String),

    #[error("Text generation service returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Request timed out after {0}s")]
    Timeout(u64),

    #[error("HTTP client error: {0}")]
    Http(String),

    #[error("Response parsing error: {0}")]
    ResponseParsing(String),

    #[error("Text generation service unavailable")]
    Unavailable,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    pub system_prompt: String,
    pub user_prompt: String,
    pub temperature: f32,
    pub max_tokens: u32,
    pub timeout: Duration,
}

/// Blocking text completion. One attempt per call; callers own retries.
pub trait TextGenerator {
    fn complete(&self, request: &CompletionRequest) -> Result<String, ServiceError>;
}

/// Sampling and deadline settings applied to every narrative request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationOptions {
    pub temperature: f32,
    pub max_tokens: u32,
    pub timeout: Duration,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            temperature: 0.7,
            max_tokens: 1500,
            timeout: Duration::from_secs(30),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NarrativeSource {
    Generated,
    Fallback,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Narrative {
    pub summary: String,
    pub key_points: Vec<String>,
    pub source: NarrativeSource,
}

pub fn narrate(
    generator: &dyn TextGenerator,
    outcome: &PipelineOutcome,
    explanation: &ReasoningExplanation,
    locale: Locale,
    options: &GenerationOptions,
) -> Narrative {
    let request = CompletionRequest {
        system_prompt: prompt::system_prompt(locale).to_string(),
        user_prompt: prompt::user_prompt(outcome, explanation, locale),
        temperature: options.temperature,
        max_tokens: options.max_tokens,
        timeout: options.timeout,
    };

    match generator.complete(&request) {
        Ok(text) => match parser::parse_response(&text) {
            Some(parsed) => {
                tracing::debug!(key_points = parsed.key_points.len(), "Narrative generated");
                Narrative {
                    summary: parsed.summary,
                    key_points: parsed.key_points,
                    source: NarrativeSource::Generated,
                }
            }
            None => {
                tracing::warn!("Narrative response was empty, using fallback");
                fallback::fallback_narrative(outcome, locale)
            }
        },
        Err(e) => {
            tracing::warn!(error = %e, "Narrative generation failed, using fallback");
            fallback::fallback_narrative(outcome, locale)
        }
    }
}
