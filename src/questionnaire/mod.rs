//! Conditional cancer screening questionnaire.
//!
//! - `types`: question definitions, answers, answer set
//! - `catalog`: the immutable question catalog (standard or JSON)
//! - `engine`: visibility, next question, progress
//! - `session`: the per-consultation state machine

pub mod catalog;
pub mod engine;
pub mod session;
pub mod types;

use thiserror::Error;

pub use catalog::QuestionCatalog;
pub use engine::{applicable_questions, next_question, progress, Progress};
pub use session::{ConsultationSession, SubmitOutcome};
pub use types::{
    AnswerRecord, AnswerSet, AnswerType, AnswerValue, ChoiceOption, LocalizedText,
    QuestionDefinition,
};

#[derive(Error, Debug)]
pub enum QuestionnaireError {
    #[error("Invalid answer for {question_id}: {reason}")]
    InvalidAnswer { question_id: String, reason: String },

    #[error("Session is terminal; no active question")]
    SessionTerminal,

    #[error("Answer references unknown question: {0}")]
    UnknownQuestion(String),

    #[error("Failed to load question catalog {0}: {1}")]
    CatalogLoad(String, String),

    #[error("Failed to parse question catalog: {0}")]
    CatalogParse(String),

    #[error("Invalid question catalog: {0}")]
    InvalidCatalog(String),
}
