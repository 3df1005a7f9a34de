//! Final recommendation set: the rule-based stage 4 plan merged with
//! answer-driven screening gaps, lifestyle advice, referrals, emergency
//! signs and personalized advice. The longer-horizon [`CarePlan`] lives in
//! [`care_plan`].

pub mod care_plan;

use serde::{Deserialize, Serialize};

use crate::models::enums::{CancerType, Gender};
use crate::models::patient::PatientAttributes;
use crate::questionnaire::AnswerSet;
use crate::reasoning::recommendations::{EMERGENCY_URGENCY, PROMPT_URGENCY, ROUTINE_CHECKUP};
use crate::reasoning::PipelineOutcome;

pub use care_plan::{care_plan, CarePlan};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendations {
    pub immediate_actions: Vec<String>,
    pub diagnostic_tests: Vec<String>,
    pub screening_recommendations: Vec<String>,
    pub lifestyle_modifications: Vec<String>,
    pub follow_up_schedule: Vec<String>,
    pub specialist_referrals: Vec<String>,
    pub emergency_signs: Vec<String>,
    pub personalized_advice: Vec<String>,
}

impl Recommendations {
    /// Every category, in display order, with its item list.
    pub fn categories(&self) -> [(&'static str, &[String]); 8] {
        [
            ("immediate_actions", self.immediate_actions.as_slice()),
            ("diagnostic_tests", self.diagnostic_tests.as_slice()),
            ("screening_recommendations", self.screening_recommendations.as_slice()),
            ("lifestyle_modifications", self.lifestyle_modifications.as_slice()),
            ("follow_up_schedule", self.follow_up_schedule.as_slice()),
            ("specialist_referrals", self.specialist_referrals.as_slice()),
            ("emergency_signs", self.emergency_signs.as_slice()),
            ("personalized_advice", self.personalized_advice.as_slice()),
        ]
    }

    pub fn total_items(&self) -> usize {
        self.categories().iter().map(|(_, items)| items.len()).sum()
    }
}

/// Order-preserving list with set semantics.
#[derive(Default)]
struct Items(Vec<String>);

impl Items {
    fn push(&mut self, item: impl Into<String>) {
        let item = item.into();
        if !self.0.contains(&item) {
            self.0.push(item);
        }
    }

    fn extend<I, S>(&mut self, items: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for item in items {
            self.push(item);
        }
    }

    fn into_vec(self) -> Vec<String> {
        self.0
    }
}

// ── Screening gaps ──────────────────────────────────────────

/// An overdue or never-done screening, read straight from the answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScreeningGap {
    Mammogram,
    PapSmear,
    HpvTest,
    Prostate,
    Colorectal,
    Hepatitis,
}

impl ScreeningGap {
    pub fn recommendation(&self) -> &'static str {
        match self {
            Self::Mammogram => "Get mammogram screening (annually)",
            Self::PapSmear => "Get Pap smear test",
            Self::HpvTest => "Get HPV testing",
            Self::Prostate => "Get prostate screening (PSA test)",
            Self::Colorectal => "Get colorectal screening (colonoscopy or FIT test)",
            Self::Hepatitis => "Get Hepatitis B and C screening",
        }
    }

    /// Summary label for routine screenings. Never-done tests have none.
    pub fn overdue_label(&self) -> Option<&'static str> {
        match self {
            Self::Mammogram => Some("Mammogram screening overdue"),
            Self::PapSmear => Some("Pap smear screening overdue"),
            Self::Prostate => Some("Prostate screening overdue"),
            Self::Colorectal => Some("Colorectal screening overdue"),
            Self::HpvTest | Self::Hepatitis => None,
        }
    }
}

fn age_41_plus(answers: &AnswerSet) -> bool {
    matches!(answers.choice("age_group"), Some("41_50" | "51_60" | "over_60"))
}

fn age_51_plus(answers: &AnswerSet) -> bool {
    matches!(answers.choice("age_group"), Some("51_60" | "over_60"))
}

fn answered_one_of(answers: &AnswerSet, id: &str, values: &[&str]) -> bool {
    answers.choice(id).is_some_and(|v| values.contains(&v))
}

pub fn screening_gaps(answers: &AnswerSet) -> Vec<ScreeningGap> {
    let mut gaps = Vec::new();
    match answers.choice("gender") {
        Some("female") => {
            if age_41_plus(answers)
                && answered_one_of(answers, "mammogram_test", &["never", "over_3_years"])
            {
                gaps.push(ScreeningGap::Mammogram);
            }
            if answered_one_of(answers, "pap_smear_test", &["never", "over_5_years"]) {
                gaps.push(ScreeningGap::PapSmear);
            }
            if answered_one_of(answers, "hpv_status", &["never_tested"]) {
                gaps.push(ScreeningGap::HpvTest);
            }
        }
        Some("male") => {
            if age_51_plus(answers)
                && answered_one_of(answers, "prostate_screening", &["never", "over_3_years"])
            {
                gaps.push(ScreeningGap::Prostate);
            }
        }
        _ => {}
    }
    if age_41_plus(answers) && answered_one_of(answers, "colonoscopy_test", &["never", "overdue"]) {
        gaps.push(ScreeningGap::Colorectal);
    }
    if answered_one_of(answers, "hepatitis_status", &["never_tested"]) {
        gaps.push(ScreeningGap::Hepatitis);
    }
    gaps
}

// ── Answer-driven content ───────────────────────────────────

pub const EMERGENCY_ACTIONS: [&str; 3] = [
    "Seek immediate medical attention",
    "Go to nearest hospital or contact emergency department",
    "Prepare a list of symptoms and bring it to the healthcare provider",
];

pub const PROMPT_ACTIONS: [&str; 2] = [
    "Schedule appointment with healthcare provider within 1-2 weeks",
    "Monitor and record your symptoms",
];

pub const GENERAL_EMERGENCY_SIGNS: [&str; 7] = [
    "Severe pain that is worsening",
    "Excessive bleeding",
    "Shortness of breath or chest pressure",
    "Loss of consciousness or severe dizziness",
    "Rapid weight loss (5+ kg per month)",
    "High fever with chills",
    "Difficulty swallowing or speaking",
];

const FEMALE_EMERGENCY_SIGNS: [&str; 2] = [
    "Rapidly growing breast lump",
    "Abnormally heavy menstrual bleeding",
];

const MALE_EMERGENCY_SIGNS: [&str; 2] = ["Blood in urine", "Sudden testicular pain or swelling"];

const SMOKING_ADVICE: [&str; 3] = [
    "Quit smoking - this is the most important step",
    "Seek medical help for smoking cessation",
    "Consider nicotine replacement therapy",
];

const ALCOHOL_ADVICE: [&str; 2] = [
    "Reduce or stop alcohol consumption",
    "Consider alcohol counseling if needed",
];

const DIET_ADVICE: [&str; 4] = [
    "Adopt a healthy diet",
    "Eat plenty of fruits and vegetables",
    "Avoid processed foods",
    "Include whole grains and lean proteins",
];

const EXERCISE_ADVICE: [&str; 3] = [
    "Start regular exercise routine",
    "Aim for at least 150 minutes of moderate exercise per week",
    "Start slowly and gradually increase intensity",
];

const SUN_ADVICE: [&str; 3] = [
    "Use sunscreen when going outdoors",
    "Wear protective clothing",
    "Avoid sun exposure between 10 AM and 4 PM",
];

fn lifestyle_additions(patient: &PatientAttributes, answers: &AnswerSet) -> Items {
    let mut items = Items::default();
    if patient.smoking {
        items.extend(SMOKING_ADVICE);
    }
    if patient.heavy_drinking {
        items.extend(ALCOHOL_ADVICE);
    }
    if answered_one_of(answers, "diet_quality", &["poor", "very_poor"]) {
        items.extend(DIET_ADVICE);
    }
    if answered_one_of(answers, "exercise_frequency", &["never", "rarely"]) {
        items.extend(EXERCISE_ADVICE);
    }
    if patient.excessive_sun_exposure {
        items.extend(SUN_ADVICE);
    }
    items
}

/// Cancer types covered by a symptom-specific referral.
const REFERRED_BY_SYMPTOM: [CancerType; 5] = [
    CancerType::Breast,
    CancerType::Prostate,
    CancerType::Lung,
    CancerType::Colorectal,
    CancerType::Skin,
];

fn answer_referrals(outcome: &PipelineOutcome, patient: &PatientAttributes, answers: &AnswerSet) -> Items {
    let mut items = Items::default();
    if answers.is_yes("breast_changes") {
        items.push("Consult breast specialist or oncologist");
    }
    if answered_one_of(answers, "prostate_symptoms", &["multiple", "blood_in_urine"]) {
        items.push("Consult urologist");
    }
    if answers.is_yes("persistent_cough") || answers.is_yes("blood_in_sputum") {
        items.push("Consult pulmonologist or chest specialist");
    }
    if answers.is_yes("bowel_changes")
        || answered_one_of(answers, "swallowing_difficulties", &["multiple", "abdominal_pain"])
    {
        items.push("Consult gastroenterologist");
    }
    if answers.is_yes("skin_changes") {
        items.push("Consult dermatologist");
    }
    let other_cancer = outcome
        .risk
        .high_risk_cancers
        .iter()
        .chain(&outcome.symptoms.possible_cancer_types)
        .any(|c| !REFERRED_BY_SYMPTOM.contains(c));
    if other_cancer {
        items.push("Consult oncologist (cancer specialist)");
    }
    if patient.cancer_history {
        items.push("Continue regular follow-up with your oncologist");
    }
    items
}

fn personalized_advice(patient: &PatientAttributes) -> Items {
    let mut items = Items::default();
    if patient.cancer_history {
        items.extend([
            "Regular follow-up is crucial given your cancer history",
            "Stay vigilant for new or changing symptoms",
            "Maintain regular contact with your oncologist",
        ]);
    }
    if patient.chronic_diseases {
        items.extend([
            "Proper management of chronic diseases helps in cancer prevention",
            "Continue regular medications and follow medical advice",
        ]);
    }
    if patient.hepatitis_positive {
        items.extend([
            "Hepatitis positive status increases liver cancer risk",
            "Get regular liver function tests",
            "Avoid alcohol completely",
        ]);
    }
    if patient.hpv_positive {
        items.extend([
            "HPV positive status increases cervical cancer risk",
            "Get regular Pap smear tests",
            "Practice safe sexual relationships",
        ]);
    }
    if patient.family_history_cancer {
        items.extend([
            "Consider genetic counseling given family cancer history",
            "Consider starting screening earlier than recommended age",
        ]);
    }
    if patient.occupational_exposure {
        items.extend([
            "Inform your healthcare provider about occupational exposures",
            "Follow workplace safety guidelines",
            "Get regular health monitoring",
        ]);
    }
    items
}

// ── Synthesis ───────────────────────────────────────────────

pub fn synthesize(
    outcome: &PipelineOutcome,
    patient: &PatientAttributes,
    answers: &AnswerSet,
) -> Recommendations {
    let plan = &outcome.recommendations;
    let urgency = outcome.symptoms.urgency_score;

    let mut immediate = Items::default();
    if urgency >= EMERGENCY_URGENCY || patient.has_red_flag() {
        immediate.extend(EMERGENCY_ACTIONS);
    } else if urgency >= PROMPT_URGENCY {
        immediate.extend(PROMPT_ACTIONS);
    }
    let escalated = !immediate.0.is_empty();
    immediate.extend(
        plan.immediate_actions
            .iter()
            .filter(|a| !(escalated && a.as_str() == ROUTINE_CHECKUP))
            .cloned(),
    );

    let mut tests = Items::default();
    tests.extend(plan.diagnostic_tests.iter().cloned());
    tests.extend(outcome.diagnosis.recommended_tests.iter().cloned());

    let mut screenings = Items::default();
    screenings.extend(plan.screening_recommendations.iter().cloned());
    screenings.extend(screening_gaps(answers).iter().map(|g| g.recommendation()));

    let mut lifestyle = lifestyle_additions(patient, answers);
    lifestyle.extend(plan.lifestyle_modifications.iter().cloned());

    let mut follow_up = Items::default();
    follow_up.extend(plan.follow_up_schedule.iter().cloned());

    let mut referrals = Items::default();
    referrals.extend(plan.specialist_referrals.iter().cloned());
    referrals.extend(answer_referrals(outcome, patient, answers).into_vec());

    let mut emergency = Items::default();
    emergency.extend(plan.emergency_signs.iter().cloned());
    emergency.extend(GENERAL_EMERGENCY_SIGNS);
    match patient.gender {
        Gender::Female => emergency.extend(FEMALE_EMERGENCY_SIGNS),
        Gender::Male => emergency.extend(MALE_EMERGENCY_SIGNS),
        Gender::Other => {}
    }

    let recommendations = Recommendations {
        immediate_actions: immediate.into_vec(),
        diagnostic_tests: tests.into_vec(),
        screening_recommendations: screenings.into_vec(),
        lifestyle_modifications: lifestyle.into_vec(),
        follow_up_schedule: follow_up.into_vec(),
        specialist_referrals: referrals.into_vec(),
        emergency_signs: emergency.into_vec(),
        personalized_advice: personalized_advice(patient).into_vec(),
    };

    tracing::debug!(
        items = recommendations.total_items(),
        referrals = recommendations.specialist_referrals.len(),
        "Recommendations synthesized"
    );

    recommendations
}
