use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::enums::Locale;
use crate::normalizer;

use super::catalog::QuestionCatalog;
use super::engine::{self, Progress};
use super::types::{AnswerRecord, AnswerSet, AnswerValue, QuestionDefinition};
use super::QuestionnaireError;

/// What the caller should do after a successful submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SubmitOutcome {
    Next { question_id: String, progress: Progress },
    Terminal,
}

/// One caller-owned consultation. Serializable as-is for export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsultationSession {
    pub id: Uuid,
    pub locale: Locale,
    pub answers: AnswerSet,
    pub cursor: usize,
    pub terminal: bool,
    pub started_at: DateTime<Utc>,
}

impl ConsultationSession {
    pub fn new(locale: Locale) -> Self {
        Self {
            id: Uuid::new_v4(),
            locale,
            answers: AnswerSet::new(),
            cursor: 0,
            terminal: false,
            started_at: Utc::now(),
        }
    }

    pub fn is_terminal(&self) -> bool {
        self.terminal
    }

    pub fn current_question<'c>(&self, catalog: &'c QuestionCatalog) -> Option<&'c QuestionDefinition> {
        if self.terminal {
            return None;
        }
        engine::next_question(catalog, &self.answers, self.cursor)
    }

    pub fn progress(&self, catalog: &QuestionCatalog) -> Progress {
        engine::progress(catalog, &self.answers, self.cursor)
    }

    pub fn applicable_count(&self, catalog: &QuestionCatalog) -> usize {
        engine::applicable_questions(catalog, &self.answers).len()
    }

    /// Answer the active question and advance.
    pub fn submit_answer(
        &mut self,
        catalog: &QuestionCatalog,
        value: AnswerValue,
    ) -> Result<SubmitOutcome, QuestionnaireError> {
        let question = self.active_question(catalog)?;
        question
            .check_answer(&value)
            .map_err(|reason| QuestionnaireError::InvalidAnswer {
                question_id: question.id.clone(),
                reason,
            })?;

        self.answers.insert(AnswerRecord {
            question_id: question.id.clone(),
            value,
            answer_type: question.answer_type,
            captured_at: Utc::now(),
        });
        self.cursor += 1;

        Ok(self.settle(catalog))
    }

    /// Parse a raw, possibly localized, string against the active question and submit it.
    pub fn submit_raw(
        &mut self,
        catalog: &QuestionCatalog,
        raw: &str,
    ) -> Result<SubmitOutcome, QuestionnaireError> {
        let question = self.active_question(catalog)?;
        let value = normalizer::parse_answer(question, raw)?;
        self.submit_answer(catalog, value)
    }

    /// Overwrite an earlier answer.
    ///
    /// Answers to questions the revision hides are dropped, and the cursor
    /// moves to the first applicable question without an answer. The session
    /// becomes terminal again only if none remain. Downstream reasoning is not rerun.
    pub fn revise_answer(
        &mut self,
        catalog: &QuestionCatalog,
        question_id: &str,
        value: AnswerValue,
    ) -> Result<SubmitOutcome, QuestionnaireError> {
        let question = catalog
            .get(question_id)
            .ok_or_else(|| QuestionnaireError::UnknownQuestion(question_id.into()))?;
        if !engine::is_visible(question, &self.answers) {
            return Err(QuestionnaireError::InvalidAnswer {
                question_id: question_id.into(),
                reason: "question is not applicable to current answers".into(),
            });
        }
        question
            .check_answer(&value)
            .map_err(|reason| QuestionnaireError::InvalidAnswer {
                question_id: question_id.into(),
                reason,
            })?;

        self.answers.insert(AnswerRecord {
            question_id: question_id.into(),
            value,
            answer_type: question.answer_type,
            captured_at: Utc::now(),
        });
        self.prune_hidden(catalog);

        let applicable = engine::applicable_questions(catalog, &self.answers);
        self.cursor = applicable
            .iter()
            .position(|q| !self.answers.contains(&q.id))
            .unwrap_or(applicable.len());
        self.terminal = false;

        Ok(self.settle(catalog))
    }

    /// Clear answers, cursor and terminal flag. The id and locale are kept.
    pub fn reset(&mut self) {
        self.answers.clear();
        self.cursor = 0;
        self.terminal = false;
        self.started_at = Utc::now();
    }

    /// Every record must reference a catalog question.
    pub fn validate(&self, catalog: &QuestionCatalog) -> Result<(), QuestionnaireError> {
        match self.answers.iter().find(|r| !catalog.contains(&r.question_id)) {
            Some(r) => Err(QuestionnaireError::UnknownQuestion(r.question_id.clone())),
            None => Ok(()),
        }
    }

    fn active_question<'c>(
        &mut self,
        catalog: &'c QuestionCatalog,
    ) -> Result<&'c QuestionDefinition, QuestionnaireError> {
        if self.terminal {
            return Err(QuestionnaireError::SessionTerminal);
        }
        match engine::next_question(catalog, &self.answers, self.cursor) {
            Some(q) => Ok(q),
            None => {
                self.terminal = true;
                Err(QuestionnaireError::SessionTerminal)
            }
        }
    }

    fn settle(&mut self, catalog: &QuestionCatalog) -> SubmitOutcome {
        let applicable = engine::applicable_questions(catalog, &self.answers);
        match applicable.get(self.cursor) {
            Some(next) => SubmitOutcome::Next {
                question_id: next.id.clone(),
                progress: engine::progress(catalog, &self.answers, self.cursor),
            },
            None => {
                self.terminal = true;
                tracing::debug!(
                    session_id = %self.id,
                    answered = self.answers.len(),
                    "Questionnaire complete"
                );
                SubmitOutcome::Terminal
            }
        }
    }

    fn prune_hidden(&mut self, catalog: &QuestionCatalog) {
        loop {
            let hidden: Vec<String> = self
                .answers
                .iter()
                .filter(|r| {
                    catalog
                        .get(&r.question_id)
                        .is_some_and(|q| !engine::is_visible(q, &self.answers))
                })
                .map(|r| r.question_id.clone())
                .collect();
            if hidden.is_empty() {
                break;
            }
            for id in hidden {
                self.answers.remove(&id);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::questionnaire::types::AnswerType;

    fn answer_for(question: &QuestionDefinition) -> AnswerValue {
        match question.id.as_str() {
            "age_group" => AnswerValue::Choice("51_60".into()),
            "gender" => AnswerValue::Choice("female".into()),
            _ => match question.answer_type {
                AnswerType::YesNo => AnswerValue::YesNo(false),
                AnswerType::SingleChoice => AnswerValue::Choice(question.options[0].value.clone()),
                AnswerType::FreeText => AnswerValue::Text("routine check".into()),
                AnswerType::NumericScale { min, .. } => AnswerValue::Scale(min),
            },
        }
    }

    #[test]
    fn terminal_exactly_after_last_applicable_answer() {
        let catalog = QuestionCatalog::standard();
        let mut session = ConsultationSession::new(Locale::English);
        let mut submitted = 0;

        loop {
            let q = session.current_question(&catalog).unwrap().clone();
            let outcome = session.submit_answer(&catalog, answer_for(&q)).unwrap();
            submitted += 1;
            if outcome == SubmitOutcome::Terminal {
                break;
            }
            assert!(!session.is_terminal());
        }

        // 51-60 female sees every question except the three male-only ones.
        assert_eq!(submitted, 28);
        assert_eq!(submitted, session.applicable_count(&catalog));
        assert!(session.is_terminal());
        assert!(session.current_question(&catalog).is_none());
    }

    #[test]
    fn submit_after_terminal_is_rejected() {
        let catalog = QuestionCatalog::new(vec![QuestionCatalog::standard()
            .get("persistent_cough")
            .unwrap()
            .clone()])
        .unwrap();
        let mut session = ConsultationSession::new(Locale::English);
        assert_eq!(
            session.submit_answer(&catalog, AnswerValue::YesNo(true)).unwrap(),
            SubmitOutcome::Terminal
        );
        let err = session.submit_answer(&catalog, AnswerValue::YesNo(true)).unwrap_err();
        assert!(matches!(err, QuestionnaireError::SessionTerminal));
    }

    #[test]
    fn empty_catalog_is_immediately_terminal_on_submit() {
        let catalog = QuestionCatalog::new(Vec::new()).unwrap();
        let mut session = ConsultationSession::new(Locale::English);
        assert!(session.submit_answer(&catalog, AnswerValue::YesNo(true)).is_err());
        assert!(session.is_terminal());
    }

    #[test]
    fn invalid_answer_does_not_advance() {
        let catalog = QuestionCatalog::standard();
        let mut session = ConsultationSession::new(Locale::English);
        let err = session
            .submit_answer(&catalog, AnswerValue::Choice("ninety".into()))
            .unwrap_err();
        match err {
            QuestionnaireError::InvalidAnswer { question_id, .. } => assert_eq!(question_id, "age_group"),
            other => panic!("unexpected {other}"),
        }
        assert_eq!(session.cursor, 0);
        assert!(session.answers.is_empty());
    }

    #[test]
    fn submit_raw_accepts_localized_labels() {
        let catalog = QuestionCatalog::standard();
        let mut session = ConsultationSession::new(Locale::Bengali);
        session.submit_raw(&catalog, "৬০ এর উপরে").unwrap();
        session.submit_raw(&catalog, "Male").unwrap();
        assert_eq!(session.answers.choice("age_group"), Some("over_60"));
        assert_eq!(session.answers.choice("gender"), Some("male"));
    }

    #[test]
    fn submit_raw_rejects_unparseable() {
        let catalog = QuestionCatalog::standard();
        let mut session = ConsultationSession::new(Locale::English);
        assert!(matches!(
            session.submit_raw(&catalog, "somewhere around forty"),
            Err(QuestionnaireError::InvalidAnswer { .. })
        ));
    }

    #[test]
    fn revise_gender_prunes_hidden_answers_and_reopens() {
        let catalog = QuestionCatalog::standard();
        let mut session = ConsultationSession::new(Locale::English);
        while let Some(q) = session.current_question(&catalog).cloned() {
            let value = if q.id == "breast_changes" {
                AnswerValue::YesNo(true)
            } else {
                answer_for(&q)
            };
            session.submit_answer(&catalog, value).unwrap();
        }
        assert!(session.is_terminal());
        assert!(session.answers.is_yes("breast_changes"));

        let outcome = session
            .revise_answer(&catalog, "gender", AnswerValue::Choice("male".into()))
            .unwrap();
        assert!(!session.answers.contains("breast_changes"));
        assert!(!session.answers.contains("mammogram_test"));
        match outcome {
            SubmitOutcome::Next { question_id, .. } => assert_eq!(question_id, "prostate_symptoms"),
            SubmitOutcome::Terminal => panic!("male-only questions should reopen the session"),
        }
        assert!(!session.is_terminal());
    }

    #[test]
    fn revise_unknown_question_is_error() {
        let catalog = QuestionCatalog::standard();
        let mut session = ConsultationSession::new(Locale::English);
        assert!(matches!(
            session.revise_answer(&catalog, "shoe_size", AnswerValue::Scale(9)),
            Err(QuestionnaireError::UnknownQuestion(_))
        ));
    }

    #[test]
    fn validate_flags_foreign_records() {
        let catalog = QuestionCatalog::standard();
        let mut session = ConsultationSession::new(Locale::English);
        session
            .answers
            .set("shoe_size", AnswerValue::Scale(9), AnswerType::NumericScale { min: 1, max: 20 });
        assert!(matches!(
            session.validate(&catalog),
            Err(QuestionnaireError::UnknownQuestion(id)) if id == "shoe_size"
        ));
    }

    #[test]
    fn reset_clears_state() {
        let catalog = QuestionCatalog::standard();
        let mut session = ConsultationSession::new(Locale::English);
        session.submit_raw(&catalog, "41-50").unwrap();
        session.reset();
        assert!(session.answers.is_empty());
        assert_eq!(session.cursor, 0);
        assert_eq!(session.current_question(&catalog).unwrap().id, "age_group");
    }

    #[test]
    fn session_serializes_with_string_enums() {
        let catalog = QuestionCatalog::standard();
        let mut session = ConsultationSession::new(Locale::Bengali);
        session.submit_raw(&catalog, "Under 30").unwrap();
        let json = serde_json::to_value(&session).unwrap();
        assert_eq!(json["locale"], "bn");
        assert_eq!(json["answers"][0]["value"]["value"], "under_30");
        let back: ConsultationSession = serde_json::from_value(json).unwrap();
        assert_eq!(back, session);
    }
}
