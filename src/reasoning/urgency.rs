use crate::models::enums::UrgencyLevel;
use crate::models::patient::PatientAttributes;

use super::types::{RiskAssessment, StageResult, SymptomAnalysis};

/// Stage 5. First matching rule wins, from CRITICAL down.
pub fn evaluate(
    symptoms: &SymptomAnalysis,
    risk: &RiskAssessment,
    patient: &PatientAttributes,
) -> StageResult<UrgencyLevel> {
    let urgency = symptoms.urgency_score;
    let high_risk = risk.high_risk_cancers.len();

    let (level, reason) = if symptoms.requires_immediate_attention {
        (UrgencyLevel::Critical, "symptoms require immediate attention".to_string())
    } else if patient.has_red_flag() {
        let flags: Vec<&str> = patient.red_flags.iter().map(|f| f.as_str()).collect();
        (UrgencyLevel::Critical, format!("red flag symptoms reported: {}", flags.join(", ")))
    } else if urgency >= 8.0 {
        (UrgencyLevel::Critical, format!("symptom urgency {urgency:.2} is at least 8"))
    } else if urgency >= 6.0 {
        (UrgencyLevel::High, format!("symptom urgency {urgency:.2} is at least 6"))
    } else if high_risk > 2 {
        (UrgencyLevel::High, format!("{high_risk} high-risk cancer types"))
    } else if patient.cancer_history && urgency >= 4.0 {
        (
            UrgencyLevel::High,
            format!("previous cancer history with symptom urgency {urgency:.2}"),
        )
    } else if urgency >= 4.0 {
        (UrgencyLevel::Moderate, format!("symptom urgency {urgency:.2} is at least 4"))
    } else if high_risk >= 1 {
        (UrgencyLevel::Moderate, format!("{high_risk} high-risk cancer type(s)"))
    } else {
        (UrgencyLevel::Low, "no urgency criteria met".to_string())
    };

    StageResult::new(level, format!("Urgency level {level}: {reason}"))
}
