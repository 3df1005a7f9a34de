//! Immutable cancer knowledge base.
//!
//! Built once (either [`KnowledgeBase::standard`] or [`KnowledgeBase::load`]
//! from a directory of JSON tables) and shared behind an `Arc` by every
//! reasoning engine. Nothing mutates it after construction.

pub mod guidelines;
pub mod risk_factors;
pub mod symptoms;

use std::collections::BTreeSet;
use std::path::Path;

use regex::Regex;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::models::enums::CancerType;

pub use guidelines::{DiagnosticTestTable, ScreeningGuideline, SpecialistTable};
pub use risk_factors::{RiskCondition, RiskFactor};
pub use symptoms::SymptomDefinition;

#[derive(Error, Debug)]
pub enum KnowledgeError {
    #[error("Failed to load knowledge table {0}: {1}")]
    Load(String, String),

    #[error("Failed to parse knowledge table {0}: {1}")]
    Parse(String, String),

    #[error("Invalid knowledge base: {0}")]
    Invalid(String),
}

pub const SYMPTOMS_FILE: &str = "symptoms.json";
pub const RISK_FACTORS_FILE: &str = "risk_factors.json";
pub const GUIDELINES_FILE: &str = "screening_guidelines.json";
pub const DIAGNOSTIC_TESTS_FILE: &str = "diagnostic_tests.json";
pub const SPECIALISTS_FILE: &str = "specialists.json";

#[derive(Debug, Clone, PartialEq)]
pub struct KnowledgeBase {
    pub symptoms: Vec<SymptomDefinition>,
    pub risk_factors: Vec<RiskFactor>,
    pub guidelines: Vec<ScreeningGuideline>,
    pub diagnostic_tests: DiagnosticTestTable,
    pub specialists: SpecialistTable,
}

impl KnowledgeBase {
    /// The built-in tables.
    pub fn standard() -> Self {
        Self {
            symptoms: symptoms::standard_symptoms(),
            risk_factors: risk_factors::standard_risk_factors(),
            guidelines: guidelines::standard_guidelines(),
            diagnostic_tests: guidelines::standard_diagnostic_tests(),
            specialists: guidelines::standard_specialists(),
        }
    }

    /// Load every table from `dir` and validate the result.
    pub fn load(dir: &Path) -> Result<Self, KnowledgeError> {
        let kb = Self {
            symptoms: read_table(dir, SYMPTOMS_FILE)?,
            risk_factors: read_table(dir, RISK_FACTORS_FILE)?,
            guidelines: read_table(dir, GUIDELINES_FILE)?,
            diagnostic_tests: read_table(dir, DIAGNOSTIC_TESTS_FILE)?,
            specialists: read_table(dir, SPECIALISTS_FILE)?,
        };
        kb.validate()?;

        tracing::debug!(
            dir = %dir.display(),
            symptoms = kb.symptoms.len(),
            risk_factors = kb.risk_factors.len(),
            guidelines = kb.guidelines.len(),
            "Knowledge base loaded"
        );
        Ok(kb)
    }

    /// Write the tables as pretty JSON, one file each. Inverse of [`load`](Self::load).
    pub fn export(&self, dir: &Path) -> Result<(), KnowledgeError> {
        write_table(dir, SYMPTOMS_FILE, &self.symptoms)?;
        write_table(dir, RISK_FACTORS_FILE, &self.risk_factors)?;
        write_table(dir, GUIDELINES_FILE, &self.guidelines)?;
        write_table(dir, DIAGNOSTIC_TESTS_FILE, &self.diagnostic_tests)?;
        write_table(dir, SPECIALISTS_FILE, &self.specialists)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<(), KnowledgeError> {
        let mut keys = BTreeSet::new();
        for s in &self.symptoms {
            if !keys.insert(s.key.as_str()) {
                return Err(KnowledgeError::Invalid(format!("duplicate symptom key {}", s.key)));
            }
            if !(1..=10).contains(&s.urgency_weight) {
                return Err(KnowledgeError::Invalid(format!(
                    "symptom {} urgency weight {} outside 1-10",
                    s.key, s.urgency_weight
                )));
            }
            if s.keywords.is_empty() {
                return Err(KnowledgeError::Invalid(format!("symptom {} has no keywords", s.key)));
            }
            if let Some(Err(e)) = s.patterns.iter().map(|p| Regex::new(p)).find(Result::is_err) {
                return Err(KnowledgeError::Invalid(format!("symptom {} pattern: {e}", s.key)));
            }
        }

        let mut keys = BTreeSet::new();
        for f in &self.risk_factors {
            if !keys.insert(f.key.as_str()) {
                return Err(KnowledgeError::Invalid(format!("duplicate risk factor key {}", f.key)));
            }
            if !(0.0..=1.0).contains(&f.weight) {
                return Err(KnowledgeError::Invalid(format!(
                    "risk factor {} weight {} outside 0-1",
                    f.key, f.weight
                )));
            }
        }

        let mut cancers = BTreeSet::new();
        for g in &self.guidelines {
            if g.cancer_type == CancerType::Unknown || !cancers.insert(g.cancer_type) {
                return Err(KnowledgeError::Invalid(format!(
                    "bad or duplicate screening guideline for {}",
                    g.cancer_type
                )));
            }
        }

        Ok(())
    }

    pub fn guideline_for(&self, cancer: CancerType) -> Option<&ScreeningGuideline> {
        self.guidelines.iter().find(|g| g.cancer_type == cancer)
    }

    pub fn risk_factor(&self, key: &str) -> Option<&RiskFactor> {
        self.risk_factors.iter().find(|f| f.key == key)
    }

    pub fn tests_for(&self, cancer: CancerType) -> &[String] {
        self.diagnostic_tests.tests_for(cancer)
    }

    pub fn specialist_for(&self, cancer: CancerType) -> &str {
        self.specialists.specialist_for(cancer)
    }
}

impl Default for KnowledgeBase {
    fn default() -> Self {
        Self::standard()
    }
}

fn read_table<T: DeserializeOwned>(dir: &Path, file: &str) -> Result<T, KnowledgeError> {
    let path = dir.join(file);
    let json = std::fs::read_to_string(&path)
        .map_err(|e| KnowledgeError::Load(path.display().to_string(), e.to_string()))?;
    serde_json::from_str(&json).map_err(|e| KnowledgeError::Parse(file.into(), e.to_string()))
}

fn write_table<T: serde::Serialize>(dir: &Path, file: &str, value: &T) -> Result<(), KnowledgeError> {
    let path = dir.join(file);
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| KnowledgeError::Parse(file.into(), e.to_string()))?;
    std::fs::write(&path, json)
        .map_err(|e| KnowledgeError::Load(path.display().to_string(), e.to_string()))
}
