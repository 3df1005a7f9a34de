//! End-to-end consultation: a terminal questionnaire session in, a report out.

use std::collections::BTreeSet;
use std::sync::Arc;
use std::time::Instant;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::knowledge::KnowledgeBase;
use crate::messages;
use crate::models::enums::{Locale, RedFlag, UrgencyLevel};
use crate::narrative::{self, GenerationOptions, Narrative, TextGenerator};
use crate::normalizer;
use crate::questionnaire::{AnswerSet, ConsultationSession, QuestionCatalog, QuestionnaireError};
use crate::reasoning::{PipelineOutcome, ReasoningEngine, ReasoningExplanation};
use crate::synthesizer::{self, CarePlan, Recommendations};

#[derive(Error, Debug)]
pub enum ConsultationError {
    #[error("Consultation has unanswered applicable questions")]
    SessionIncomplete,

    #[error(transparent)]
    Questionnaire(#[from] QuestionnaireError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompletionStatus {
    Complete,
    InProgress,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskSummary {
    pub high_risk_symptoms: bool,
    pub red_flags: BTreeSet<RedFlag>,
    pub family_history_present: bool,
    /// Raw option value, `"unknown"` when unanswered.
    pub smoking_status: String,
    pub cancer_history: bool,
    /// No overdue routine screening.
    pub screening_compliance: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsultationSummary {
    pub session_id: Uuid,
    pub consultation_date: DateTime<Utc>,
    pub locale: Locale,
    pub questions_answered: usize,
    pub applicable_questions: usize,
    pub completion_status: CompletionStatus,
    pub screening_gaps: Vec<String>,
    pub risk_summary: RiskSummary,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsultationReport {
    pub session_id: Uuid,
    pub locale: Locale,
    pub urgency: UrgencyLevel,
    /// Rule-based stage outputs, English.
    pub outcome: PipelineOutcome,
    /// Synthesized recommendations in the report locale.
    pub recommendations: Recommendations,
    /// Preventive, lifestyle and follow-up plan in the report locale.
    pub care_plan: CarePlan,
    pub narrative: Narrative,
    pub explanation: ReasoningExplanation,
    pub summary: ConsultationSummary,
    pub generated_at: DateTime<Utc>,
}

impl ConsultationReport {
    pub fn to_json(&self) -> Result<String, ConsultationError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Run the full consultation for a terminal session.
///
/// The narrative step cannot fail: service errors fall back to the
/// template narrative.
pub fn run_consultation(
    knowledge: Arc<KnowledgeBase>,
    catalog: &QuestionCatalog,
    session: &ConsultationSession,
    generator: &dyn TextGenerator,
    locale: Locale,
    options: &GenerationOptions,
) -> Result<ConsultationReport, ConsultationError> {
    let start = Instant::now();

    session.validate(catalog)?;
    if !session.is_terminal() || session.current_question(catalog).is_some() {
        return Err(ConsultationError::SessionIncomplete);
    }

    let normalized = normalizer::normalize(catalog, &session.answers);

    let mut engine = ReasoningEngine::new(knowledge);
    let outcome = engine.run_pipeline(&normalized.symptoms, &normalized.patient);
    let explanation = engine.get_reasoning_explanation();

    let synthesized = synthesizer::synthesize(&outcome, &normalized.patient, &session.answers);
    let recommendations = messages::localize_recommendations(&synthesized, locale);
    let care_plan = messages::localize_care_plan(
        &synthesizer::care_plan(&outcome, &normalized.patient, &session.answers),
        locale,
    );
    let narrative = narrative::narrate(generator, &outcome, &explanation, locale, options);
    let summary = consultation_summary(catalog, session);

    tracing::info!(
        session_id = %session.id,
        urgency = outcome.urgency.as_str(),
        answered = summary.questions_answered,
        recommendations = recommendations.total_items(),
        care_plan_items = care_plan.total_items(),
        narrative_source = ?narrative.source,
        processing_ms = start.elapsed().as_millis() as u64,
        "Consultation complete"
    );

    Ok(ConsultationReport {
        session_id: session.id,
        locale,
        urgency: outcome.urgency,
        outcome,
        recommendations,
        care_plan,
        narrative,
        explanation,
        summary,
        generated_at: Utc::now(),
    })
}

/// Snapshot of a session; valid for in-progress sessions too.
pub fn consultation_summary(catalog: &QuestionCatalog, session: &ConsultationSession) -> ConsultationSummary {
    let answers = &session.answers;
    let screening_gaps: Vec<String> = synthesizer::screening_gaps(answers)
        .iter()
        .filter_map(|gap| gap.overdue_label())
        .map(String::from)
        .collect();

    let risk_summary = RiskSummary {
        high_risk_symptoms: has_high_risk_symptoms(answers),
        red_flags: normalizer::red_flags(answers),
        family_history_present: answers.choice("family_history").is_some_and(|v| v != "none"),
        smoking_status: answers.choice("smoking_status").unwrap_or("unknown").to_string(),
        cancer_history: normalizer::has_cancer_history(answers),
        screening_compliance: screening_gaps.is_empty(),
    };

    ConsultationSummary {
        session_id: session.id,
        consultation_date: Utc::now(),
        locale: session.locale,
        questions_answered: answers.len(),
        applicable_questions: session.applicable_count(catalog),
        completion_status: if session.is_terminal() {
            CompletionStatus::Complete
        } else {
            CompletionStatus::InProgress
        },
        screening_gaps,
        risk_summary,
    }
}

/// Bleeding or weight-loss flags, or serious swallowing trouble.
fn has_high_risk_symptoms(answers: &AnswerSet) -> bool {
    [RedFlag::BloodInSputum, RedFlag::UnusualBleeding, RedFlag::UnexplainedWeightLoss]
        .iter()
        .any(|flag| answers.is_yes(flag.as_str()))
        || matches!(
            answers.choice("swallowing_difficulties"),
            Some("difficulty_swallowing" | "multiple")
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::narrative::{FailingTextGenerator, MockTextGenerator, NarrativeSource, ServiceError};
    use crate::questionnaire::{AnswerType, AnswerValue, QuestionDefinition, SubmitOutcome};
    use crate::reasoning::recommendations::{EMERGENCY_URGENCY, SCHEDULE_PRIMARY_CARE};

    fn complete_session(overrides: &[(&str, AnswerValue)]) -> (QuestionCatalog, ConsultationSession) {
        let catalog = QuestionCatalog::standard();
        let mut session = ConsultationSession::new(Locale::English);
        while let Some(q) = session.current_question(&catalog).cloned() {
            let value = overrides
                .iter()
                .find(|(id, _)| *id == q.id)
                .map(|(_, v)| v.clone())
                .unwrap_or_else(|| neutral_answer(&q));
            if session.submit_answer(&catalog, value).unwrap() == SubmitOutcome::Terminal {
                break;
            }
        }
        (catalog, session)
    }

    fn neutral_answer(q: &QuestionDefinition) -> AnswerValue {
        match q.answer_type {
            AnswerType::YesNo => AnswerValue::YesNo(false),
            AnswerType::SingleChoice => AnswerValue::Choice(q.options[0].value.clone()),
            AnswerType::FreeText => AnswerValue::Text(String::new()),
            AnswerType::NumericScale { min, .. } => AnswerValue::Scale(min),
        }
    }

    fn choice(v: &str) -> AnswerValue {
        AnswerValue::Choice(v.into())
    }

    fn run(session: &ConsultationSession, catalog: &QuestionCatalog, generator: &dyn TextGenerator) -> ConsultationReport {
        run_consultation(
            Arc::new(KnowledgeBase::standard()),
            catalog,
            session,
            generator,
            Locale::English,
            &GenerationOptions::default(),
        )
        .unwrap()
    }

    #[test]
    fn incomplete_session_is_rejected() {
        let catalog = QuestionCatalog::standard();
        let session = ConsultationSession::new(Locale::English);
        let err = run_consultation(
            Arc::new(KnowledgeBase::standard()),
            &catalog,
            &session,
            &FailingTextGenerator::default(),
            Locale::English,
            &GenerationOptions::default(),
        )
        .unwrap_err();
        assert!(matches!(err, ConsultationError::SessionIncomplete));
    }

    #[test]
    fn critical_answers_produce_critical_report() {
        let (catalog, session) = complete_session(&[
            ("age_group", choice("over_60")),
            ("gender", choice("male")),
            ("persistent_cough", AnswerValue::YesNo(true)),
            ("blood_in_sputum", AnswerValue::YesNo(true)),
            ("smoking_status", choice("current_heavy")),
        ]);
        let report = run(&session, &catalog, &FailingTextGenerator::new(ServiceError::Timeout(30)));

        assert_eq!(report.urgency, UrgencyLevel::Critical);
        assert_eq!(report.narrative.source, NarrativeSource::Fallback);
        assert!(report
            .recommendations
            .immediate_actions
            .contains(&"Seek immediate medical attention".to_string()));
        assert!(report.summary.risk_summary.high_risk_symptoms);
        assert_eq!(report.summary.risk_summary.smoking_status, "current_heavy");
        assert_eq!(report.explanation.reasoning_steps, 5);
    }

    #[test]
    fn quiet_answers_produce_low_report() {
        let (catalog, session) = complete_session(&[
            ("age_group", choice("under_30")),
            ("gender", choice("female")),
        ]);
        let report = run(&session, &catalog, &MockTextGenerator::new("SUMMARY: All clear for now."));

        assert_eq!(report.urgency, UrgencyLevel::Low);
        assert_eq!(report.narrative.source, NarrativeSource::Generated);
        assert_eq!(report.summary.completion_status, CompletionStatus::Complete);
        assert!(!report.summary.risk_summary.high_risk_symptoms);
        assert!(report.recommendations.total_items() > 0);
    }

    #[test]
    fn summary_reports_gaps_and_counts() {
        let (catalog, session) = complete_session(&[
            ("age_group", choice("51_60")),
            ("gender", choice("female")),
            ("mammogram_test", choice("never")),
            ("colonoscopy_test", choice("never")),
            ("family_history", choice("one_member")),
        ]);
        let summary = consultation_summary(&catalog, &session);

        assert_eq!(summary.questions_answered, summary.applicable_questions);
        assert!(summary.screening_gaps.contains(&"Mammogram screening overdue".to_string()));
        assert!(summary.screening_gaps.contains(&"Colorectal screening overdue".to_string()));
        assert!(!summary.risk_summary.screening_compliance);
        assert!(summary.risk_summary.family_history_present);
    }

    #[test]
    fn in_progress_summary() {
        let catalog = QuestionCatalog::standard();
        let mut session = ConsultationSession::new(Locale::Bengali);
        session.submit_raw(&catalog, "41-50").unwrap();
        let summary = consultation_summary(&catalog, &session);

        assert_eq!(summary.completion_status, CompletionStatus::InProgress);
        assert_eq!(summary.questions_answered, 1);
        assert_eq!(summary.risk_summary.smoking_status, "unknown");
        assert_eq!(summary.locale, Locale::Bengali);
    }

    #[test]
    fn bengali_report_localizes_recommendations() {
        let (catalog, session) = complete_session(&[("blood_in_sputum", AnswerValue::YesNo(true))]);
        let report = run_consultation(
            Arc::new(KnowledgeBase::standard()),
            &catalog,
            &session,
            &FailingTextGenerator::default(),
            Locale::Bengali,
            &GenerationOptions::default(),
        )
        .unwrap();

        assert!(report
            .recommendations
            .immediate_actions
            .contains(&"অবিলম্বে চিকিৎসা সহায়তা নিন".to_string()));
        // Mean urgency is below the emergency threshold, so stage 4 itself
        // only schedules a visit; the red flag escalates the synthesized set.
        assert!(report.outcome.symptoms.urgency_score < EMERGENCY_URGENCY);
        assert!(report
            .outcome
            .recommendations
            .immediate_actions
            .contains(&SCHEDULE_PRIMARY_CARE.to_string()));
    }

    #[test]
    fn report_carries_localized_care_plan() {
        let (catalog, session) = complete_session(&[
            ("family_history", choice("one_member")),
            ("blood_in_sputum", AnswerValue::YesNo(true)),
        ]);
        let english = run(&session, &catalog, &FailingTextGenerator::default());
        assert_eq!(english.care_plan.follow_up.immediate[0], "Get a medical evaluation today");
        assert_eq!(english.care_plan.risk_reduction.primary_prevention[0], "Consider genetic counseling");

        let bengali = run_consultation(
            Arc::new(KnowledgeBase::standard()),
            &catalog,
            &session,
            &FailingTextGenerator::default(),
            Locale::Bengali,
            &GenerationOptions::default(),
        )
        .unwrap();
        assert_eq!(bengali.care_plan.total_items(), english.care_plan.total_items());
        assert_eq!(bengali.care_plan.risk_reduction.primary_prevention[0], "জেনেটিক কাউন্সেলিং বিবেচনা করুন");
    }

    #[test]
    fn report_serializes() {
        let (catalog, session) = complete_session(&[]);
        let report = run(&session, &catalog, &FailingTextGenerator::default());
        let json = report.to_json().unwrap();
        assert!(json.contains("\"completion_status\": \"complete\""));
        assert!(json.contains("\"narrative\""));
        assert!(json.contains("\"care_plan\""));
    }
}
