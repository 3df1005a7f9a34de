use std::borrow::Cow;
use std::collections::{BTreeMap, BTreeSet};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::enums::Locale;

/// Canonical values stored for yes/no answers and matched by visibility constraints.
pub const YES: &str = "yes";
pub const NO: &str = "no";

/// Display text in every supported locale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedText {
    pub en: String,
    pub bn: String,
}

impl LocalizedText {
    pub fn new(en: &str, bn: &str) -> Self {
        Self {
            en: en.into(),
            bn: bn.into(),
        }
    }

    pub fn get(&self, locale: Locale) -> &str {
        match locale {
            Locale::English => &self.en,
            Locale::Bengali => &self.bn,
        }
    }

    /// Exact match against any locale's text, ignoring case and surrounding whitespace.
    pub fn matches(&self, raw: &str) -> bool {
        let raw = raw.trim();
        self.en.eq_ignore_ascii_case(raw) || self.bn == raw
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AnswerType {
    YesNo,
    SingleChoice,
    FreeText,
    NumericScale { min: i64, max: i64 },
}

impl AnswerType {
    pub fn name(&self) -> &'static str {
        match self {
            Self::YesNo => "yes_no",
            Self::SingleChoice => "single_choice",
            Self::FreeText => "free_text",
            Self::NumericScale { .. } => "numeric_scale",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChoiceOption {
    /// Canonical key, locale independent.
    pub value: String,
    pub label: LocalizedText,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionDefinition {
    pub id: String,
    pub prompt: LocalizedText,
    pub answer_type: AnswerType,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<ChoiceOption>,
    /// Conjunction of `field id → allowed canonical values`. Empty means always shown.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub conditions: BTreeMap<String, BTreeSet<String>>,
}

impl QuestionDefinition {
    pub fn option(&self, value: &str) -> Option<&ChoiceOption> {
        self.options.iter().find(|o| o.value == value)
    }

    /// English label of a canonical option value, or the value itself when unknown.
    pub fn option_label<'a>(&'a self, value: &'a str) -> &'a str {
        self.option(value).map(|o| o.label.en.as_str()).unwrap_or(value)
    }

    /// Reason string when `value` does not fit this question.
    pub fn check_answer(&self, value: &AnswerValue) -> Result<(), String> {
        match (&self.answer_type, value) {
            (AnswerType::YesNo, AnswerValue::YesNo(_)) => Ok(()),
            (AnswerType::SingleChoice, AnswerValue::Choice(v)) => {
                if self.option(v).is_some() {
                    Ok(())
                } else {
                    Err(format!("'{v}' is not an option"))
                }
            }
            (AnswerType::FreeText, AnswerValue::Text(_)) => Ok(()),
            (AnswerType::NumericScale { min, max }, AnswerValue::Scale(n)) => {
                if (*min..=*max).contains(n) {
                    Ok(())
                } else {
                    Err(format!("{n} outside {min}-{max}"))
                }
            }
            (expected, got) => Err(format!(
                "expected {} answer, got {}",
                expected.name(),
                got.kind()
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum AnswerValue {
    YesNo(bool),
    Choice(String),
    Text(String),
    Scale(i64),
}

impl AnswerValue {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::YesNo(_) => "yes_no",
            Self::Choice(_) => "choice",
            Self::Text(_) => "text",
            Self::Scale(_) => "scale",
        }
    }

    /// The string visibility constraints compare against.
    pub fn canonical(&self) -> Cow<'_, str> {
        match self {
            Self::YesNo(true) => Cow::Borrowed(YES),
            Self::YesNo(false) => Cow::Borrowed(NO),
            Self::Choice(v) | Self::Text(v) => Cow::Borrowed(v.as_str()),
            Self::Scale(n) => Cow::Owned(n.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerRecord {
    pub question_id: String,
    pub value: AnswerValue,
    pub answer_type: AnswerType,
    pub captured_at: DateTime<Utc>,
}

/// Answers in insertion order. Re-answering a question replaces its record in place.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerSet {
    records: Vec<AnswerRecord>,
}

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, record: AnswerRecord) {
        match self
            .records
            .iter_mut()
            .find(|r| r.question_id == record.question_id)
        {
            Some(existing) => *existing = record,
            None => self.records.push(record),
        }
    }

    /// Convenience for tests and programmatic callers: stamp with the current time.
    pub fn set(&mut self, question_id: &str, value: AnswerValue, answer_type: AnswerType) {
        self.insert(AnswerRecord {
            question_id: question_id.into(),
            value,
            answer_type,
            captured_at: Utc::now(),
        });
    }

    pub fn remove(&mut self, question_id: &str) -> Option<AnswerRecord> {
        let idx = self.records.iter().position(|r| r.question_id == question_id)?;
        Some(self.records.remove(idx))
    }

    pub fn get(&self, question_id: &str) -> Option<&AnswerRecord> {
        self.records.iter().find(|r| r.question_id == question_id)
    }

    pub fn value(&self, question_id: &str) -> Option<&AnswerValue> {
        self.get(question_id).map(|r| &r.value)
    }

    pub fn contains(&self, question_id: &str) -> bool {
        self.get(question_id).is_some()
    }

    /// True only for an explicit "yes".
    pub fn is_yes(&self, question_id: &str) -> bool {
        matches!(self.value(question_id), Some(AnswerValue::YesNo(true)))
    }

    pub fn choice(&self, question_id: &str) -> Option<&str> {
        match self.value(question_id) {
            Some(AnswerValue::Choice(v)) => Some(v),
            _ => None,
        }
    }

    pub fn text(&self, question_id: &str) -> Option<&str> {
        match self.value(question_id) {
            Some(AnswerValue::Text(v)) => Some(v),
            _ => None,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &AnswerRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }
}
