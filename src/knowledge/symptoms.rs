use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::models::enums::CancerType;

/// A symptom the analyzer can detect in a free-text description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SymptomDefinition {
    pub key: String,
    pub name: String,
    pub cancer_types: Vec<CancerType>,
    /// Static urgency weight, 1-10.
    pub urgency_weight: u8,
    /// Phrases in every supported locale. Matched as lowercase substrings.
    pub keywords: Vec<String>,
    /// Regular expressions for phrasings a fixed keyword cannot pin down,
    /// such as a quantity between two words.
    #[serde(default)]
    pub patterns: Vec<String>,
    #[serde(default)]
    pub associated_symptoms: Vec<String>,
}

impl SymptomDefinition {
    /// Case-insensitive keyword or pattern match. Negations ("no cough") still match.
    pub fn is_mentioned_in(&self, description_lower: &str) -> bool {
        self.keywords
            .iter()
            .any(|kw| description_lower.contains(&kw.to_lowercase()))
            || self.patterns.iter().any(|p| pattern_matches(&self.key, p, description_lower))
    }
}

fn pattern_matches(key: &str, pattern: &str, text: &str) -> bool {
    match Regex::new(pattern) {
        Ok(re) => re.is_match(text),
        Err(e) => {
            tracing::warn!(symptom = key, pattern, error = %e, "Invalid symptom pattern ignored");
            false
        }
    }
}

fn symptom(
    key: &str,
    name: &str,
    urgency_weight: u8,
    cancer_types: &[CancerType],
    keywords: &[&str],
    associated: &[&str],
) -> SymptomDefinition {
    SymptomDefinition {
        key: key.into(),
        name: name.into(),
        cancer_types: cancer_types.to_vec(),
        urgency_weight,
        keywords: keywords.iter().map(|s| s.to_string()).collect(),
        patterns: Vec::new(),
        associated_symptoms: associated.iter().map(|s| s.to_string()).collect(),
    }
}

/// "lost 8kg", "lost 10 pounds", "lost a lot of weight". Not "lost my appetite".
const LOST_WEIGHT_PATTERN: &str =
    r"\blost\s+(?:\d+(?:\.\d+)?\s*(?:kg|kgs|kilos?|kilograms?|lbs?|pounds)\b|(?:a\s+lot\s+of\s+|some\s+|much\s+)?weight\b)";

// ── Standard symptom table ──────────────────────────────────

pub fn standard_symptoms() -> Vec<SymptomDefinition> {
    use CancerType::*;

    vec![
        symptom(
            "persistent_cough",
            "Persistent Cough",
            7,
            &[Lung],
            &["cough", "coughing", "কাশি"],
            &["blood_in_sputum", "chest_pain", "shortness_of_breath"],
        ),
        symptom(
            "blood_in_sputum",
            "Blood in Sputum",
            9,
            &[Lung],
            &[
                "blood in sputum",
                "blood in my sputum",
                "bloody sputum",
                "blood-stained sputum",
                "coughing blood",
                "coughing up blood",
                "coughed up blood",
                "কফে রক্ত",
                "কফের সাথে রক্ত",
            ],
            &["persistent_cough", "chest_pain", "shortness_of_breath"],
        ),
        symptom(
            "breast_lump",
            "Breast Lump",
            8,
            &[Breast],
            &["breast lump", "breast mass", "lump in my breast", "breast changes", "স্তনে গাঁট"],
            &["nipple_discharge", "breast_pain", "skin_changes"],
        ),
        symptom(
            "blood_in_stool",
            "Blood in Stool",
            8,
            &[Colorectal],
            &["blood in stool", "bloody stool", "মলে রক্ত"],
            &["abdominal_pain", "weight_loss", "change_in_bowel_habits"],
        ),
        symptom(
            "bowel_habit_changes",
            "Bowel Habit Changes",
            6,
            &[Colorectal],
            &["bowel habits", "bowel changes", "constipation", "diarrhea", "মলত্যাগ"],
            &["blood_in_stool", "abdominal_pain"],
        ),
        SymptomDefinition {
            patterns: vec![LOST_WEIGHT_PATTERN.to_string()],
            ..symptom(
                "unexplained_weight_loss",
                "Unexplained Weight Loss",
                6,
                &[Lung, Stomach, Liver, Blood],
                &["weight loss", "losing weight", "lost weight", "ওজন কমা"],
                &["fatigue", "loss_of_appetite", "night_sweats"],
            )
        },
        symptom(
            "persistent_fatigue",
            "Persistent Fatigue",
            5,
            &[Blood, Liver],
            &["fatigue", "exhausted", "extremely tired", "always tired", "weakness", "ক্লান্তি"],
            &["weakness", "pale_skin", "shortness_of_breath"],
        ),
        symptom(
            "unusual_bleeding",
            "Unusual Bleeding",
            7,
            &[Cervical],
            &["bleeding", "blood", "রক্তপাত"],
            &["pelvic_pain", "irregular_periods", "post_coital_bleeding"],
        ),
        symptom(
            "swallowing_difficulty",
            "Difficulty Swallowing",
            7,
            &[Stomach],
            &["difficulty swallowing", "trouble swallowing", "indigestion", "গিলতে অসুবিধা"],
            &["abdominal_pain", "weight_loss"],
        ),
        symptom(
            "urinary_symptoms",
            "Urinary Symptoms",
            7,
            &[Prostate],
            &["blood in urine", "difficulty urinating", "frequent urination", "প্রস্রাব"],
            &["pelvic_pain", "back_pain"],
        ),
        symptom(
            "skin_changes",
            "Skin Changes",
            6,
            &[Skin],
            &["skin changes", "mole", "ত্বকের পরিবর্তন"],
            &["mole_changes", "new_growths", "non_healing_sores"],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn find(key: &str) -> SymptomDefinition {
        standard_symptoms()
            .into_iter()
            .find(|s| s.key == key)
            .unwrap()
    }

    #[test]
    fn keys_are_unique() {
        let symptoms = standard_symptoms();
        let mut keys: Vec<_> = symptoms.iter().map(|s| s.key.clone()).collect();
        keys.sort();
        keys.dedup();
        assert_eq!(keys.len(), symptoms.len());
    }

    #[test]
    fn weights_within_scale() {
        for s in standard_symptoms() {
            assert!((1..=10).contains(&s.urgency_weight), "{}", s.key);
            assert!(!s.cancer_types.is_empty(), "{}", s.key);
            assert!(!s.cancer_types.contains(&CancerType::Unknown));
        }
    }

    #[test]
    fn matches_case_insensitively() {
        let cough = find("persistent_cough");
        assert!(cough.is_mentioned_in(&"Dry COUGH at night".to_lowercase()));
        assert!(!cough.is_mentioned_in("headache"));
    }

    #[test]
    fn matches_bengali_keyword() {
        let cough = find("persistent_cough");
        assert!(cough.is_mentioned_in("আমার কাশি আছে"));
    }

    #[test]
    fn negation_still_matches() {
        let cough = find("persistent_cough");
        assert!(cough.is_mentioned_in("no cough at all"));
    }

    #[test]
    fn mild_tiredness_is_not_fatigue() {
        let fatigue = find("persistent_fatigue");
        assert!(!fatigue.is_mentioned_in("i feel fine, just a little tired"));
        assert!(fatigue.is_mentioned_in("i am always tired"));
    }

    #[test]
    fn weight_loss_phrasings() {
        let weight = find("unexplained_weight_loss");
        assert!(weight.is_mentioned_in("i have lost 8kg in two months"));
        assert!(weight.is_mentioned_in("lost 10 pounds since spring"));
        assert!(weight.is_mentioned_in("i lost a lot of weight"));
        assert!(weight.is_mentioned_in("steady weight loss"));
    }

    #[test]
    fn lost_without_quantity_is_not_weight_loss() {
        let weight = find("unexplained_weight_loss");
        assert!(!weight.is_mentioned_in("i have lost my appetite a bit"));
        assert!(!weight.is_mentioned_in("i lost 2 days of work"));
    }

    #[test]
    fn plain_sputum_is_not_blood() {
        let sputum = find("blood_in_sputum");
        assert!(!sputum.is_mentioned_in("i have a mild cough with clear sputum"));
        assert!(sputum.is_mentioned_in("bloody sputum this morning"));
        assert!(sputum.is_mentioned_in("i keep coughing up blood"));
    }

    #[test]
    fn invalid_pattern_never_matches() {
        let mut cough = find("persistent_cough");
        cough.keywords.clear();
        cough.patterns = vec!["(unclosed".into()];
        assert!(!cough.is_mentioned_in("cough"));
    }
}
