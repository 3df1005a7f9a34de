use crate::knowledge::KnowledgeBase;

use super::types::{DifferentialDiagnosis, RecommendationSet, RiskAssessment, StageResult, SymptomAnalysis};

pub const EMERGENCY_URGENCY: f64 = 8.0;
pub const PROMPT_URGENCY: f64 = 6.0;

pub const SEEK_IMMEDIATE_ATTENTION: &str = "Seek immediate medical attention";
pub const SCHEDULE_PRIMARY_CARE: &str = "Schedule appointment with primary care physician within 1-2 weeks";
pub const ROUTINE_CHECKUP: &str = "Continue routine health check-ups and age-appropriate screenings";

pub const EMERGENCY_SIGNS: [&str; 4] = [
    "Severe unexplained pain",
    "Significant bleeding",
    "Difficulty breathing",
    "Loss of consciousness",
];

pub const LIFESTYLE_MODIFICATIONS: [&str; 7] = [
    "Maintain a healthy diet rich in fruits and vegetables",
    "Exercise regularly (at least 150 minutes per week)",
    "Maintain a healthy weight",
    "Limit alcohol consumption",
    "Avoid tobacco products",
    "Protect skin from excessive sun exposure",
    "Get recommended cancer screenings",
];

pub const FOLLOW_UP_EMERGENCY: [&str; 2] = [
    "Immediate medical evaluation",
    "Follow-up within 1 week after initial consultation",
];

pub const FOLLOW_UP_ELEVATED: [&str; 3] = [
    "Medical evaluation within 1-2 weeks",
    "Follow-up in 1 month",
    "Regular monitoring every 3-6 months",
];

pub const FOLLOW_UP_ROUTINE: [&str; 2] = [
    "Routine check-up in 3-6 months",
    "Annual comprehensive health screening",
];

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Stage 4. Rule-based action plan from the first three stages.
pub fn generate(
    kb: &KnowledgeBase,
    symptoms: &SymptomAnalysis,
    risk: &RiskAssessment,
    diagnosis: &DifferentialDiagnosis,
) -> StageResult<RecommendationSet> {
    let urgency = symptoms.urgency_score;
    let mut lines = Vec::new();
    let mut set = RecommendationSet::default();

    if urgency >= EMERGENCY_URGENCY {
        set.immediate_actions.push(SEEK_IMMEDIATE_ATTENTION.to_string());
        set.emergency_signs = owned(&EMERGENCY_SIGNS);
        lines.push(format!("Urgency {urgency:.2} requires immediate attention"));
    } else if urgency >= PROMPT_URGENCY {
        set.immediate_actions.push(SCHEDULE_PRIMARY_CARE.to_string());
        lines.push(format!("Urgency {urgency:.2} requires a prompt appointment"));
    } else {
        set.immediate_actions.push(ROUTINE_CHECKUP.to_string());
        lines.push(format!("Urgency {urgency:.2} allows routine follow-up"));
    }

    if let Some(top) = &diagnosis.most_likely_diagnosis {
        set.diagnostic_tests = kb.tests_for(top.cancer_type).to_vec();
        lines.push(format!("Diagnostic tests selected for {}", top.cancer_type.label()));
    }

    for cancer in &risk.high_risk_cancers {
        let specialist = kb.specialist_for(*cancer).to_string();
        if !set.specialist_referrals.contains(&specialist) {
            set.specialist_referrals.push(specialist);
        }
    }
    if !set.specialist_referrals.is_empty() {
        lines.push(format!("Specialist referrals: {}", set.specialist_referrals.join(", ")));
    }

    set.screening_recommendations = risk.recommended_screenings.clone();
    set.lifestyle_modifications = owned(&LIFESTYLE_MODIFICATIONS);
    set.follow_up_schedule = if urgency >= EMERGENCY_URGENCY {
        owned(&FOLLOW_UP_EMERGENCY)
    } else if urgency >= PROMPT_URGENCY || !risk.high_risk_cancers.is_empty() {
        owned(&FOLLOW_UP_ELEVATED)
    } else {
        owned(&FOLLOW_UP_ROUTINE)
    };

    StageResult::new(set, lines.join(". "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::enums::Gender;
    use crate::models::patient::{PatientAttributes, SymptomReport};
    use crate::reasoning::{diagnosis, risk, symptoms};

    fn run(description: &str, patient: &PatientAttributes) -> RecommendationSet {
        let kb = KnowledgeBase::standard();
        let s = symptoms::analyze(&kb, &SymptomReport::new(description, 5, "weeks")).output;
        let r = risk::assess(&kb, patient).output;
        let d = diagnosis::differentiate(&kb, &s, &r).output;
        generate(&kb, &s, &r, &d).output
    }

    #[test]
    fn emergency_urgency_lists_signs() {
        let rec = run("blood in sputum", &PatientAttributes::default());
        assert_eq!(rec.immediate_actions, vec![SEEK_IMMEDIATE_ATTENTION.to_string()]);
        assert_eq!(rec.emergency_signs.len(), 4);
        assert_eq!(rec.follow_up_schedule, owned(&FOLLOW_UP_EMERGENCY));
    }

    #[test]
    fn prompt_urgency_schedules_primary_care() {
        let rec = run("persistent cough", &PatientAttributes::default());
        assert_eq!(rec.immediate_actions, vec![SCHEDULE_PRIMARY_CARE.to_string()]);
        assert!(rec.emergency_signs.is_empty());
        assert_eq!(rec.follow_up_schedule, owned(&FOLLOW_UP_ELEVATED));
        assert_eq!(rec.diagnostic_tests[0], "Chest CT scan");
    }

    #[test]
    fn routine_without_symptoms_or_risk() {
        let rec = run("", &PatientAttributes::default());
        assert_eq!(rec.immediate_actions, vec![ROUTINE_CHECKUP.to_string()]);
        assert!(rec.diagnostic_tests.is_empty());
        assert!(rec.specialist_referrals.is_empty());
        assert_eq!(rec.follow_up_schedule, owned(&FOLLOW_UP_ROUTINE));
        assert_eq!(rec.lifestyle_modifications.len(), 7);
    }

    #[test]
    fn high_risk_cancers_bring_specialists_and_elevated_follow_up() {
        let patient = PatientAttributes {
            age: 40,
            gender: Gender::Male,
            smoking: true,
            ..Default::default()
        };
        let rec = run("", &patient);
        assert_eq!(
            rec.specialist_referrals,
            vec![
                "Pulmonologist or Thoracic Oncologist".to_string(),
                "Gastroenterologist or Colorectal Surgeon".to_string(),
                "Gynecologic Oncologist".to_string(),
            ]
        );
        assert_eq!(rec.follow_up_schedule, owned(&FOLLOW_UP_ELEVATED));
    }
}
