//! Raw answer parsing and answer-set normalization.
//!
//! The only place where localized answer text is interpreted. Downstream
//! stages see canonical booleans, enums and numbers.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::models::enums::{Gender, RedFlag, SymptomPattern};
use crate::models::patient::{PatientAttributes, SymptomReport};
use crate::questionnaire::types::{AnswerSet, AnswerType, AnswerValue, QuestionDefinition};
use crate::questionnaire::{QuestionCatalog, QuestionnaireError};

const YES_WORDS: &[&str] = &["yes", "y", "true", "হ্যাঁ", "হ্যা"];
const NO_WORDS: &[&str] = &["no", "n", "false", "না"];

/// Age assumed when the age group is unanswered or unrecognized.
pub const DEFAULT_AGE: i32 = 40;
pub const NO_SYMPTOMS_DESCRIPTION: &str = "No specific symptoms reported";

// ── Raw answer parsing ──────────────────────────────────────

/// Interpret `raw` as an answer to `question`. Accepts canonical values and
/// labels in any supported locale.
pub fn parse_answer(question: &QuestionDefinition, raw: &str) -> Result<AnswerValue, QuestionnaireError> {
    let trimmed = raw.trim();
    let invalid = |reason: String| QuestionnaireError::InvalidAnswer {
        question_id: question.id.clone(),
        reason,
    };

    match question.answer_type {
        AnswerType::YesNo => {
            let lower = trimmed.to_lowercase();
            if YES_WORDS.contains(&lower.as_str()) {
                Ok(AnswerValue::YesNo(true))
            } else if NO_WORDS.contains(&lower.as_str()) {
                Ok(AnswerValue::YesNo(false))
            } else {
                Err(invalid(format!("'{trimmed}' is not yes or no")))
            }
        }
        AnswerType::SingleChoice => question
            .options
            .iter()
            .find(|o| o.value == trimmed || o.label.matches(trimmed))
            .map(|o| AnswerValue::Choice(o.value.clone()))
            .ok_or_else(|| invalid(format!("'{trimmed}' matches no option"))),
        AnswerType::FreeText => Ok(AnswerValue::Text(trimmed.to_string())),
        AnswerType::NumericScale { .. } => to_ascii_digits(trimmed)
            .parse::<i64>()
            .map(AnswerValue::Scale)
            .map_err(|_| invalid(format!("'{trimmed}' is not a number"))),
    }
}

fn to_ascii_digits(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            '০'..='৯' => char::from(b'0' + (c as u32 - '০' as u32) as u8),
            other => other,
        })
        .collect()
}

// ── Answer set normalization ────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizedConsultation {
    pub patient: PatientAttributes,
    pub symptoms: SymptomReport,
}

pub fn normalize(catalog: &QuestionCatalog, answers: &AnswerSet) -> NormalizedConsultation {
    let patient = patient_attributes(answers);
    let symptoms = SymptomReport {
        description: symptom_description(catalog, answers),
        severity: symptom_severity(answers),
        duration: symptom_duration(answers),
        pattern: symptom_pattern(answers),
    };

    tracing::debug!(
        age = patient.age,
        gender = patient.gender.as_str(),
        red_flags = patient.red_flags.len(),
        severity = symptoms.severity,
        pattern = symptoms.pattern.as_str(),
        "Answers normalized"
    );

    NormalizedConsultation { patient, symptoms }
}

pub fn patient_attributes(answers: &AnswerSet) -> PatientAttributes {
    let choice = |id: &str| answers.choice(id);
    let answered_other_than_none = |id: &str| choice(id).is_some_and(|v| v != "none");

    PatientAttributes {
        age: age_from_group(choice("age_group")),
        gender: match choice("gender") {
            Some("male") => Gender::Male,
            Some("female") => Gender::Female,
            _ => Gender::Other,
        },
        smoking: matches!(choice("smoking_status"), Some("current_light" | "current_heavy")),
        heavy_drinking: matches!(choice("alcohol_consumption"), Some("heavy" | "daily")),
        family_history_cancer: answered_other_than_none("family_history"),
        excessive_sun_exposure: choice("sun_exposure") == Some("excessive"),
        occupational_exposure: answered_other_than_none("occupational_exposure"),
        chronic_diseases: answered_other_than_none("chronic_diseases"),
        cancer_history: has_cancer_history(answers),
        hepatitis_positive: is_hepatitis_positive(answers),
        hpv_positive: choice("hpv_status") == Some("positive"),
        red_flags: red_flags(answers),
    }
}

pub fn age_from_group(group: Option<&str>) -> i32 {
    match group {
        Some("under_30") => 25,
        Some("30_40") => 35,
        Some("41_50") => 45,
        Some("51_60") => 55,
        Some("over_60") => 70,
        _ => DEFAULT_AGE,
    }
}

pub fn has_cancer_history(answers: &AnswerSet) -> bool {
    answers
        .choice("cancer_diagnosis")
        .is_some_and(|v| v.starts_with("yes"))
}

pub fn is_hepatitis_positive(answers: &AnswerSet) -> bool {
    answers
        .choice("hepatitis_status")
        .is_some_and(|v| v.starts_with("positive"))
}

pub fn red_flags(answers: &AnswerSet) -> BTreeSet<RedFlag> {
    RedFlag::all()
        .iter()
        .copied()
        .filter(|flag| answers.is_yes(flag.as_str()))
        .collect()
}

// ── Symptom report ──────────────────────────────────────────

/// Yes/no symptom questions with their descriptive phrase and severity weight.
const YES_NO_SYMPTOMS: &[(&str, &str, i32)] = &[
    ("persistent_cough", "persistent cough lasting more than 3 weeks", 6),
    ("blood_in_sputum", "blood in sputum/coughed up phlegm", 9),
    ("unexplained_weight_loss", "unexplained weight loss of more than 5kg in 6 months", 8),
    ("unusual_lumps", "unusual lumps or masses anywhere on body", 7),
    ("breast_changes", "breast changes including lumps, dimpling, or nipple discharge", 7),
    ("unusual_bleeding", "unusual vaginal bleeding or discharge", 8),
    ("persistent_fatigue", "persistent extreme fatigue and weakness", 4),
    ("skin_changes", "changes in moles or new skin spots", 5),
    ("persistent_pain", "persistent worsening pain", 6),
    ("bowel_changes", "persistent changes in bowel habits", 6),
    ("testicular_lumps", "testicular lumps, swelling, or changes", 7),
];

const SWALLOWING_WEIGHTS: &[(&str, i32)] = &[
    ("difficulty_swallowing", 8),
    ("multiple", 7),
    ("abdominal_pain", 6),
    ("indigestion", 4),
];

const PROSTATE_WEIGHTS: &[(&str, i32)] = &[
    ("blood_in_urine", 8),
    ("multiple", 7),
    ("difficulty_urinating", 6),
    ("frequent_urination", 4),
];

/// Choice answer other than "none", if any.
fn positive_choice<'a>(answers: &'a AnswerSet, id: &str) -> Option<&'a str> {
    answers.choice(id).filter(|v| *v != "none")
}

pub fn symptom_description(catalog: &QuestionCatalog, answers: &AnswerSet) -> String {
    let mut parts = Vec::new();

    if let Some(concern) = answers.text("main_concern").filter(|t| !t.trim().is_empty()) {
        parts.push(format!("Main concern: {}", concern.trim()));
    }

    let label = |id: &str, value: &str| -> String {
        catalog
            .get(id)
            .map(|q| q.option_label(value).to_string())
            .unwrap_or_else(|| value.to_string())
    };
    if let Some(v) = positive_choice(answers, "swallowing_difficulties") {
        parts.push(format!("digestive issues: {}", label("swallowing_difficulties", v)));
    }
    if let Some(v) = positive_choice(answers, "prostate_symptoms") {
        parts.push(format!("prostate-related symptoms: {}", label("prostate_symptoms", v)));
    }

    parts.extend(
        YES_NO_SYMPTOMS
            .iter()
            .filter(|(id, _, _)| answers.is_yes(id))
            .map(|(_, phrase, _)| phrase.to_string()),
    );

    if parts.is_empty() {
        NO_SYMPTOMS_DESCRIPTION.to_string()
    } else {
        parts.join(". ")
    }
}

/// Mean weight of reported symptoms, floored, capped at 10. 1 when none are reported.
/// Cancer history (+2) and hepatitis (+1) raise the total only when symptoms exist.
pub fn symptom_severity(answers: &AnswerSet) -> i32 {
    let mut total = 0;
    let mut count = 0;

    for (id, _, weight) in YES_NO_SYMPTOMS {
        if answers.is_yes(id) {
            total += weight;
            count += 1;
        }
    }
    for (id, table) in [
        ("swallowing_difficulties", SWALLOWING_WEIGHTS),
        ("prostate_symptoms", PROSTATE_WEIGHTS),
    ] {
        if let Some(v) = answers.choice(id) {
            if let Some((_, weight)) = table.iter().find(|(key, _)| *key == v) {
                total += weight;
                count += 1;
            }
        }
    }

    if count == 0 {
        return 1;
    }
    if has_cancer_history(answers) {
        total += 2;
    }
    if is_hepatitis_positive(answers) {
        total += 1;
    }
    (total / count).min(10)
}

pub fn symptom_duration(answers: &AnswerSet) -> String {
    const INDICATORS: &[(&str, &str)] = &[
        ("weeks", "weeks"),
        ("months", "months"),
        ("years", "chronic"),
        ("recent", "recent"),
        ("sudden", "acute"),
    ];

    let concern = answers.text("main_concern").unwrap_or_default().to_lowercase();
    if let Some((_, duration)) = INDICATORS.iter().find(|(kw, _)| concern.contains(kw)) {
        return duration.to_string();
    }

    let any_yes = |ids: &[&str]| ids.iter().any(|id| answers.is_yes(id));
    if any_yes(&["blood_in_sputum", "unusual_bleeding", "testicular_lumps"]) {
        "acute".into()
    } else if any_yes(&["persistent_cough", "persistent_fatigue", "bowel_changes"]) {
        "chronic".into()
    } else {
        "unknown".into()
    }
}

pub fn symptom_pattern(answers: &AnswerSet) -> SymptomPattern {
    let yes = |id: &str| answers.is_yes(id);
    let categories = [
        (SymptomPattern::Respiratory, yes("persistent_cough") || yes("blood_in_sputum")),
        (
            SymptomPattern::Gastrointestinal,
            yes("bowel_changes") || positive_choice(answers, "swallowing_difficulties").is_some(),
        ),
        (
            SymptomPattern::Genitourinary,
            positive_choice(answers, "prostate_symptoms").is_some() || yes("unusual_bleeding"),
        ),
        (
            SymptomPattern::Systemic,
            yes("unexplained_weight_loss") || yes("persistent_fatigue"),
        ),
        (
            SymptomPattern::Localized,
            ["unusual_lumps", "breast_changes", "skin_changes", "testicular_lumps"]
                .iter()
                .any(|id| answers.is_yes(id)),
        ),
    ];

    let active: Vec<SymptomPattern> = categories
        .iter()
        .filter(|(_, on)| *on)
        .map(|(p, _)| *p)
        .collect();

    match active.as_slice() {
        [] => SymptomPattern::Minimal,
        [single] => *single,
        [_, _] => SymptomPattern::BiSystem,
        _ => SymptomPattern::MultiSystem,
    }
}
