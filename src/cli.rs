//! Command-line driver: replay a JSON answer file through a session and
//! print the consultation report.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::{Parser, Subcommand};
use serde_json::{Map, Value};
use thiserror::Error;

use crate::config::EngineConfig;
use crate::consultation::{self, ConsultationError};
use crate::knowledge::{KnowledgeBase, KnowledgeError};
use crate::models::enums::Locale;
use crate::narrative::{FailingTextGenerator, OllamaClient, ServiceError, TextGenerator};
use crate::questionnaire::{AnswerType, ConsultationSession, QuestionCatalog, QuestionnaireError};

#[derive(Parser, Debug)]
#[command(name = "oncoscreen")]
#[command(about = "Explainable cancer-risk consultation engine")]
#[command(version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run a consultation from a JSON object of question id → answer
    Consult {
        answers: PathBuf,

        /// Report language (en, bn). Defaults to ONCOSCREEN_LOCALE
        #[arg(long)]
        locale: Option<String>,

        /// Question catalog JSON replacing the built-in questionnaire
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Skip the text generation service and use the template narrative
        #[arg(long)]
        offline: bool,

        /// Write the report here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print the question catalog as JSON
    Questions {
        #[arg(long)]
        catalog: Option<PathBuf>,
    },

    /// Write the built-in knowledge tables as JSON into a directory.
    /// Defaults to ~/OncoScreen/knowledge, which consultations then load.
    ExportKnowledge { dir: Option<PathBuf> },
}

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Failed to read {path}: {reason}")]
    Read { path: String, reason: String },

    #[error("Failed to write {path}: {reason}")]
    Write { path: String, reason: String },

    #[error("Answer file must be a JSON object: {0}")]
    AnswerFormat(String),

    #[error("No answer provided for applicable question {0}")]
    MissingAnswer(String),

    #[error("Unknown locale: {0}")]
    Locale(String),

    #[error("No home directory; pass a knowledge directory explicitly")]
    NoDataDir,

    #[error(transparent)]
    Questionnaire(#[from] QuestionnaireError),

    #[error(transparent)]
    Knowledge(#[from] KnowledgeError),

    #[error(transparent)]
    Service(#[from] ServiceError),

    #[error(transparent)]
    Consultation(#[from] ConsultationError),
}

pub fn execute(args: Args, config: &EngineConfig) -> Result<(), CliError> {
    match args.command {
        Command::Consult {
            answers,
            locale,
            catalog,
            offline,
            output,
        } => {
            let locale = match locale {
                Some(raw) => Locale::parse_lenient(&raw).ok_or(CliError::Locale(raw))?,
                None => config.locale,
            };
            let catalog = load_catalog(catalog.as_deref())?;
            let knowledge = match config.knowledge_source() {
                Some(dir) => {
                    tracing::info!(dir = %dir.display(), "Loading knowledge tables");
                    KnowledgeBase::load(&dir)?
                }
                None => KnowledgeBase::standard(),
            };

            let raw = read_file(&answers)?;
            let map: Map<String, Value> =
                serde_json::from_str(&raw).map_err(|e| CliError::AnswerFormat(e.to_string()))?;
            let session = replay_answers(&catalog, locale, &map)?;

            let generator: Box<dyn TextGenerator> = if offline {
                Box::new(FailingTextGenerator::default())
            } else {
                Box::new(OllamaClient::new(&config.ollama_url, &config.model)?)
            };

            let report = consultation::run_consultation(
                Arc::new(knowledge),
                &catalog,
                &session,
                generator.as_ref(),
                locale,
                &config.generation,
            )?;
            emit(&report.to_json()?, output.as_deref())
        }
        Command::Questions { catalog } => {
            let catalog = load_catalog(catalog.as_deref())?;
            emit(&catalog.to_json()?, None)
        }
        Command::ExportKnowledge { dir } => {
            let dir = dir.or_else(crate::config::default_knowledge_dir).ok_or(CliError::NoDataDir)?;
            std::fs::create_dir_all(&dir).map_err(|e| CliError::Write {
                path: dir.display().to_string(),
                reason: e.to_string(),
            })?;
            KnowledgeBase::standard().export(&dir)?;
            tracing::info!(dir = %dir.display(), "Knowledge tables exported");
            Ok(())
        }
    }
}

/// Drive a fresh session with the answers in `map`, in questionnaire order.
///
/// Values may be canonical option values, localized labels, booleans or
/// numbers. Keys for questions that never become applicable are ignored.
/// A missing free-text answer is submitted as empty text.
pub fn replay_answers(
    catalog: &QuestionCatalog,
    locale: Locale,
    map: &Map<String, Value>,
) -> Result<ConsultationSession, CliError> {
    let mut session = ConsultationSession::new(locale);
    while let Some(question) = session.current_question(catalog) {
        let raw = match map.get(&question.id) {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Bool(b)) => (if *b { "yes" } else { "no" }).to_string(),
            Some(Value::Number(n)) => n.to_string(),
            Some(other) => {
                return Err(CliError::AnswerFormat(format!("{}: unsupported value {other}", question.id)))
            }
            None if question.answer_type == AnswerType::FreeText => String::new(),
            None => return Err(CliError::MissingAnswer(question.id.clone())),
        };
        session.submit_raw(catalog, &raw)?;
    }
    Ok(session)
}

fn load_catalog(path: Option<&Path>) -> Result<QuestionCatalog, CliError> {
    Ok(match path {
        Some(path) => QuestionCatalog::load(path)?,
        None => QuestionCatalog::standard(),
    })
}

fn read_file(path: &Path) -> Result<String, CliError> {
    std::fs::read_to_string(path).map_err(|e| CliError::Read {
        path: path.display().to_string(),
        reason: e.to_string(),
    })
}

fn emit(json: &str, output: Option<&Path>) -> Result<(), CliError> {
    match output {
        Some(path) => std::fs::write(path, json).map_err(|e| CliError::Write {
            path: path.display().to_string(),
            reason: e.to_string(),
        }),
        None => {
            println!("{json}");
            Ok(())
        }
    }
}
