use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use super::types::{AnswerType, ChoiceOption, LocalizedText, QuestionDefinition, NO, YES};
use super::QuestionnaireError;

/// Immutable, ordered question catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionCatalog {
    questions: Vec<QuestionDefinition>,
}

impl QuestionCatalog {
    pub fn new(questions: Vec<QuestionDefinition>) -> Result<Self, QuestionnaireError> {
        let catalog = Self { questions };
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn from_json(json: &str) -> Result<Self, QuestionnaireError> {
        let questions: Vec<QuestionDefinition> = serde_json::from_str(json)
            .map_err(|e| QuestionnaireError::CatalogParse(e.to_string()))?;
        Self::new(questions)
    }

    pub fn load(path: &Path) -> Result<Self, QuestionnaireError> {
        let json = std::fs::read_to_string(path).map_err(|e| {
            QuestionnaireError::CatalogLoad(path.display().to_string(), e.to_string())
        })?;
        Self::from_json(&json)
    }

    pub fn to_json(&self) -> Result<String, QuestionnaireError> {
        serde_json::to_string_pretty(&self.questions)
            .map_err(|e| QuestionnaireError::CatalogParse(e.to_string()))
    }

    /// Unique ids; single-choice questions carry options; constraints point at
    /// existing questions and, for closed answer types, at values those questions can produce.
    pub fn validate(&self) -> Result<(), QuestionnaireError> {
        let mut seen = BTreeSet::new();
        for q in &self.questions {
            if !seen.insert(q.id.as_str()) {
                return Err(QuestionnaireError::InvalidCatalog(format!("duplicate question id {}", q.id)));
            }
            if q.answer_type == AnswerType::SingleChoice && q.options.is_empty() {
                return Err(QuestionnaireError::InvalidCatalog(format!("{} has no options", q.id)));
            }
        }

        for q in &self.questions {
            for (field, allowed) in &q.conditions {
                let target = self.get(field).ok_or_else(|| {
                    QuestionnaireError::InvalidCatalog(format!(
                        "{} depends on unknown question {}",
                        q.id, field
                    ))
                })?;
                for value in allowed {
                    let valid = match target.answer_type {
                        AnswerType::SingleChoice => target.option(value).is_some(),
                        AnswerType::YesNo => value == YES || value == NO,
                        _ => true,
                    };
                    if !valid {
                        return Err(QuestionnaireError::InvalidCatalog(format!(
                            "{} constraint on {} uses unknown value {}",
                            q.id, field, value
                        )));
                    }
                }
            }
        }
        Ok(())
    }

    pub fn get(&self, id: &str) -> Option<&QuestionDefinition> {
        self.questions.iter().find(|q| q.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    pub fn questions(&self) -> &[QuestionDefinition] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// The bilingual cancer screening questionnaire.
    pub fn standard() -> Self {
        Self {
            questions: standard_questions(),
        }
    }
}

impl Default for QuestionCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

// ── Builders ────────────────────────────────────────────────

struct Q(QuestionDefinition);

impl Q {
    fn base(id: &str, en: &str, bn: &str, answer_type: AnswerType) -> Self {
        Self(QuestionDefinition {
            id: id.into(),
            prompt: LocalizedText::new(en, bn),
            answer_type,
            options: Vec::new(),
            conditions: BTreeMap::new(),
        })
    }

    fn yes_no(id: &str, en: &str, bn: &str) -> Self {
        Self::base(id, en, bn, AnswerType::YesNo)
    }

    fn text(id: &str, en: &str, bn: &str) -> Self {
        Self::base(id, en, bn, AnswerType::FreeText)
    }

    fn choice(id: &str, en: &str, bn: &str, options: &[(&str, &str, &str)]) -> Self {
        let mut q = Self::base(id, en, bn, AnswerType::SingleChoice);
        q.0.options = options
            .iter()
            .map(|(value, en, bn)| ChoiceOption {
                value: (*value).into(),
                label: LocalizedText::new(en, bn),
            })
            .collect();
        q
    }

    fn when(mut self, field: &str, allowed: &[&str]) -> Self {
        self.0
            .conditions
            .insert(field.into(), allowed.iter().map(|s| s.to_string()).collect());
        self
    }

    fn build(self) -> QuestionDefinition {
        self.0
    }
}

const AGE_30_PLUS: &[&str] = &["30_40", "41_50", "51_60", "over_60"];
const AGE_41_PLUS: &[&str] = &["41_50", "51_60", "over_60"];
const AGE_51_PLUS: &[&str] = &["51_60", "over_60"];

const SCREENING_RECENCY_3Y: &[(&str, &str, &str)] = &[
    ("never", "Never had one", "কখনো করাইনি"),
    ("within_1_year", "Within last year", "গত এক বছরের মধ্যে"),
    ("1_2_years", "1-2 years ago", "১-২ বছর আগে"),
    ("2_3_years", "2-3 years ago", "২-৩ বছর আগে"),
    ("over_3_years", "More than 3 years ago", "৩ বছরের বেশি আগে"),
];

fn standard_questions() -> Vec<QuestionDefinition> {
    vec![
        // Demographics
        Q::choice(
            "age_group",
            "What is your age group?",
            "আপনার বয়স কত?",
            &[
                ("under_30", "Under 30", "৩০ এর নিচে"),
                ("30_40", "30-40", "৩০-৪০"),
                ("41_50", "41-50", "৪১-৫০"),
                ("51_60", "51-60", "৫১-৬০"),
                ("over_60", "Over 60", "৬০ এর উপরে"),
            ],
        )
        .build(),
        Q::choice(
            "gender",
            "What is your gender?",
            "আপনার লিঙ্গ কী?",
            &[
                ("male", "Male", "পুরুষ"),
                ("female", "Female", "মহিলা"),
                ("other", "Other", "অন্যান্য"),
            ],
        )
        .build(),
        Q::text(
            "main_concern",
            "What is your main health concern today?",
            "আজ আপনার প্রধান স্বাস্থ্য সমস্যা কী?",
        )
        .build(),
        // History
        Q::choice(
            "cancer_diagnosis",
            "Have you ever been diagnosed with cancer?",
            "আপনার কি কখনো ক্যান্সার ধরা পড়েছে?",
            &[
                ("no", "No", "না"),
                ("yes_in_treatment", "Yes - currently in treatment", "হ্যাঁ - বর্তমানে চিকিৎসা চলছে"),
                ("yes_treatment_completed", "Yes - treatment completed", "হ্যাঁ - চিকিৎসা সম্পন্ন"),
                ("yes_monitoring", "Yes - under monitoring", "হ্যাঁ - পর্যবেক্ষণে আছি"),
            ],
        )
        .build(),
        Q::choice(
            "chronic_diseases",
            "Do you have any of these chronic diseases?",
            "আপনার কি এই দীর্ঘমেয়াদী রোগগুলির কোনটি আছে?",
            &[
                ("none", "None", "কিছু নেই"),
                ("diabetes", "Diabetes", "ডায়াবেটিস"),
                ("hypertension", "Hypertension", "উচ্চ রক্তচাপ"),
                ("heart_disease", "Heart disease", "হৃদরোগ"),
                ("multiple", "Multiple conditions", "একাধিক রোগ"),
            ],
        )
        .build(),
        Q::choice(
            "hepatitis_status",
            "Have you been tested for Hepatitis B or C?",
            "আপনার কি হেপাটাইটিস বি বা সি পরীক্ষা করানো হয়েছে?",
            &[
                ("never_tested", "Never tested", "কখনো পরীক্ষা করাইনি"),
                ("negative", "Tested - Negative", "পরীক্ষা করেছি - নেগেটিভ"),
                ("positive_hep_b", "Tested - Positive for Hep B", "পরীক্ষা করেছি - হেপ বি পজিটিভ"),
                ("positive_hep_c", "Tested - Positive for Hep C", "পরীক্ষা করেছি - হেপ সি পজিটিভ"),
                ("positive_both", "Tested - Positive for both", "পরীক্ষা করেছি - দুটোই পজিটিভ"),
            ],
        )
        .build(),
        // General symptoms
        Q::yes_no(
            "persistent_cough",
            "Do you have a persistent cough that has lasted more than 3 weeks?",
            "আপনার কি ৩ সপ্তাহের বেশি সময় ধরে ক্রমাগত কাশি আছে?",
        )
        .build(),
        Q::yes_no(
            "blood_in_sputum",
            "Have you noticed blood in your sputum (coughed up phlegm)?",
            "আপনি কি আপনার কফে রক্ত দেখেছেন?",
        )
        .build(),
        Q::yes_no(
            "unexplained_weight_loss",
            "Have you lost more than 5 kg (11 lbs) in the past 6 months without trying?",
            "গত ৬ মাসে আপনার কি চেষ্টা ছাড়াই ৫ কেজির বেশি ওজন কমেছে?",
        )
        .build(),
        Q::yes_no(
            "unusual_lumps",
            "Have you found any unusual lumps or masses anywhere on your body?",
            "আপনি কি আপনার শরীরের কোথাও অস্বাভাবিক গাঁট বা পিণ্ড পেয়েছেন?",
        )
        .build(),
        Q::yes_no(
            "persistent_fatigue",
            "Do you feel extremely tired or weak most of the time?",
            "আপনি কি বেশিরভাগ সময় অত্যধিক ক্লান্ত বা দুর্বল বোধ করেন?",
        )
        .build(),
        Q::yes_no(
            "skin_changes",
            "Have you noticed any changes in moles or new spots on your skin?",
            "আপনি কি আপনার তিলে কোন পরিবর্তন বা ত্বকে নতুন দাগ লক্ষ্য করেছেন?",
        )
        .build(),
        Q::yes_no(
            "persistent_pain",
            "Do you have persistent pain that doesn't go away and gets worse?",
            "আপনার কি এমন ব্যথা আছে যা যায় না এবং খারাপ হচ্ছে?",
        )
        .build(),
        Q::yes_no(
            "bowel_changes",
            "Have you noticed persistent changes in your bowel habits?",
            "আপনি কি আপনার মলত্যাগের অভ্যাসে স্থায়ী পরিবর্তন লক্ষ্য করেছেন?",
        )
        .build(),
        Q::choice(
            "swallowing_difficulties",
            "Do you have indigestion, difficulties in swallowing, or persistent abdominal pain?",
            "আপনার কি বদহজম, গিলতে অসুবিধা, বা ক্রমাগত পেটে ব্যথা আছে?",
            &[
                ("none", "None", "কিছু নেই"),
                ("indigestion", "Indigestion", "বদহজম"),
                ("difficulty_swallowing", "Difficulty swallowing", "গিলতে অসুবিধা"),
                ("abdominal_pain", "Abdominal pain", "পেটে ব্যথা"),
                ("multiple", "Multiple symptoms", "একাধিক লক্ষণ"),
            ],
        )
        .build(),
        // Female only
        Q::yes_no(
            "breast_changes",
            "Have you noticed any changes in your breast(s) - lumps, dimpling, or nipple discharge?",
            "আপনি কি আপনার স্তনে কোন পরিবর্তন লক্ষ্য করেছেন - গাঁট, চামড়া কুঁচকে যাওয়া, বা বোঁটা থেকে স্রাব?",
        )
        .when("gender", &["female"])
        .build(),
        Q::yes_no(
            "unusual_bleeding",
            "Have you experienced any unusual vaginal bleeding or discharge?",
            "আপনার কি কোন অস্বাভাবিক যোনি রক্তপাত বা স্রাব হয়েছে?",
        )
        .when("gender", &["female"])
        .build(),
        Q::choice(
            "pap_smear_test",
            "When was your last Pap smear test?",
            "আপনার সর্বশেষ প্যাপ স্মিয়ার পরীক্ষা কবে হয়েছিল?",
            &[
                ("never", "Never had one", "কখনো করাইনি"),
                ("within_1_year", "Within last year", "গত এক বছরের মধ্যে"),
                ("1_3_years", "1-3 years ago", "১-৩ বছর আগে"),
                ("3_5_years", "3-5 years ago", "৩-৫ বছর আগে"),
                ("over_5_years", "More than 5 years ago", "৫ বছরের বেশি আগে"),
            ],
        )
        .when("gender", &["female"])
        .when("age_group", AGE_30_PLUS)
        .build(),
        Q::choice(
            "mammogram_test",
            "When was your last mammogram?",
            "আপনার সর্বশেষ ম্যামোগ্রাম কবে হয়েছিল?",
            SCREENING_RECENCY_3Y,
        )
        .when("gender", &["female"])
        .when("age_group", AGE_41_PLUS)
        .build(),
        Q::choice(
            "hpv_status",
            "Have you been tested for HPV (Human Papillomavirus)?",
            "আপনার কি HPV (হিউম্যান প্যাপিলোমাভাইরাস) পরীক্ষা করানো হয়েছে?",
            &[
                ("never_tested", "Never tested", "কখনো পরীক্ষা করাইনি"),
                ("negative", "Tested - Negative", "পরীক্ষা করেছি - নেগেটিভ"),
                ("positive", "Tested - Positive", "পরীক্ষা করেছি - পজিটিভ"),
                ("unknown_result", "Don't know results", "ফলাফল জানি না"),
            ],
        )
        .when("gender", &["female"])
        .build(),
        // Male only
        Q::choice(
            "prostate_symptoms",
            "Do you have any urinary problems or prostate-related symptoms?",
            "আপনার কি প্রস্রাবের সমস্যা বা প্রোস্টেট সংক্রান্ত লক্ষণ আছে?",
            &[
                ("none", "No symptoms", "কোন লক্ষণ নেই"),
                ("frequent_urination", "Frequent urination", "ঘন ঘন প্রস্রাব"),
                ("difficulty_urinating", "Difficulty urinating", "প্রস্রাবে অসুবিধা"),
                ("blood_in_urine", "Blood in urine", "প্রস্রাবে রক্ত"),
                ("multiple", "Multiple symptoms", "একাধিক লক্ষণ"),
            ],
        )
        .when("gender", &["male"])
        .when("age_group", AGE_41_PLUS)
        .build(),
        Q::choice(
            "prostate_screening",
            "When was your last prostate screening (PSA test or digital rectal exam)?",
            "আপনার সর্বশেষ প্রোস্টেট স্ক্রিনিং (PSA পরীক্ষা বা ডিজিটাল রেক্টাল পরীক্ষা) কবে হয়েছিল?",
            SCREENING_RECENCY_3Y,
        )
        .when("gender", &["male"])
        .when("age_group", AGE_51_PLUS)
        .build(),
        Q::yes_no(
            "testicular_lumps",
            "Have you noticed any lumps, swelling, or changes in your testicles?",
            "আপনি কি আপনার অণ্ডকোষে কোন গাঁট, ফোলা বা পরিবর্তন লক্ষ্য করেছেন?",
        )
        .when("gender", &["male"])
        .build(),
        // Screening history
        Q::choice(
            "colonoscopy_test",
            "Have you had a colonoscopy or stool test for colorectal cancer screening?",
            "আপনার কি কোলোরেক্টাল ক্যান্সার স্ক্রিনিংয়ের জন্য কোলনোস্কোপি বা মল পরীক্ষা করানো হয়েছে?",
            &[
                ("never", "Never had screening", "কখনো স্ক্রিনিং করাইনি"),
                ("colonoscopy_10_years", "Colonoscopy within 10 years", "১০ বছরের মধ্যে কোলনোস্কোপি"),
                ("stool_test_1_year", "Stool test within 1 year", "১ বছরের মধ্যে মল পরীক্ষা"),
                ("both", "Both tests done", "দুটো পরীক্ষাই করেছি"),
                ("overdue", "Screening overdue", "স্ক্রিনিং সময় পার হয়েছে"),
            ],
        )
        .when("age_group", AGE_41_PLUS)
        .build(),
        // Risk factors
        Q::choice(
            "smoking_status",
            "What is your smoking history?",
            "আপনার ধূমপানের ইতিহাস কী?",
            &[
                ("never", "Never smoked", "কখনো ধূমপান করিনি"),
                ("former_over_5_years", "Former smoker (quit >5 years)", "আগে করতাম (৫+ বছর ছেড়েছি)"),
                ("former_under_5_years", "Former smoker (quit <5 years)", "আগে করতাম (<৫ বছর ছেড়েছি)"),
                ("current_light", "Current light smoker", "এখন হালকা ধূমপান করি"),
                ("current_heavy", "Current heavy smoker", "এখন ভারী ধূমপান করি"),
            ],
        )
        .build(),
        Q::choice(
            "alcohol_consumption",
            "How often do you consume alcohol?",
            "আপনি কত ঘন ঘন মদ্যপান করেন?",
            &[
                ("never", "Never", "কখনো না"),
                ("occasional", "Occasionally (1-2 drinks/week)", "মাঝে মাঝে (সপ্তাহে ১-২ ড্রিংক)"),
                ("regular", "Regularly (3-7 drinks/week)", "নিয়মিত (সপ্তাহে ৩-৭ ড্রিংক)"),
                ("heavy", "Heavily (>7 drinks/week)", "বেশি (সপ্তাহে ৭+ ড্রিংক)"),
                ("daily", "Daily consumption", "প্রতিদিন"),
            ],
        )
        .build(),
        Q::choice(
            "family_history",
            "Has anyone in your immediate family (parents, siblings, children) had cancer?",
            "আপনার নিকট পরিবারে (বাবা-মা, ভাইবোন, সন্তান) কি কেউ ক্যান্সারে আক্রান্ত হয়েছেন?",
            &[
                ("none", "No family history", "কোন পারিবারিক ইতিহাস নেই"),
                ("one_member", "One family member", "একজন পরিবারের সদস্য"),
                ("multiple_members", "Multiple family members", "একাধিক পরিবারের সদস্য"),
                ("multiple_generations", "Multiple generations affected", "একাধিক প্রজন্ম আক্রান্ত"),
            ],
        )
        .build(),
        Q::choice(
            "sun_exposure",
            "How much time do you spend in the sun without protection?",
            "আপনি কত সময় সুরক্ষা ছাড়াই রোদে থাকেন?",
            &[
                ("minimal", "Minimal exposure", "খুব কম"),
                ("moderate_protected", "Moderate with protection", "মাঝারি (সুরক্ষা সহ)"),
                ("frequent", "Frequent exposure", "ঘন ঘন"),
                ("excessive", "Excessive unprotected exposure", "অতিরিক্ত (সুরক্ষা ছাড়া)"),
            ],
        )
        .build(),
        Q::choice(
            "occupational_exposure",
            "Have you been exposed to chemicals, radiation, or asbestos at work?",
            "আপনি কি কর্মক্ষেত্রে রাসায়নিক, বিকিরণ বা অ্যাসবেস্টসের সংস্পর্শে এসেছেন?",
            &[
                ("none", "No occupational exposure", "কোন পেশাগত এক্সপোজার নেই"),
                ("chemical", "Chemical exposure", "রাসায়নিক এক্সপোজার"),
                ("radiation", "Radiation exposure", "বিকিরণ এক্সপোজার"),
                ("asbestos", "Asbestos exposure", "অ্যাসবেস্টস এক্সপোজার"),
                ("multiple", "Multiple exposures", "একাধিক এক্সপোজার"),
            ],
        )
        .build(),
        // Lifestyle
        Q::choice(
            "diet_quality",
            "How would you rate your diet quality?",
            "আপনি আপনার খাদ্যের মান কীভাবে মূল্যায়ন করবেন?",
            &[
                ("very_healthy", "Very healthy (lots of fruits/vegetables)", "খুব স্বাস্থ্যকর (প্রচুর ফল/সবজি)"),
                ("moderately_healthy", "Moderately healthy", "মধ্যম স্বাস্থ্যকর"),
                ("average", "Average", "গড়"),
                ("poor", "Poor (processed foods)", "খারাপ (প্রক্রিয়াজাত খাবার)"),
                ("very_poor", "Very poor", "খুব খারাপ"),
            ],
        )
        .build(),
        Q::choice(
            "exercise_frequency",
            "How often do you exercise?",
            "আপনি কত ঘন ঘন ব্যায়াম করেন?",
            &[
                ("daily", "Daily vigorous exercise", "প্রতিদিন জোরালো ব্যায়াম"),
                ("3_4_weekly", "3-4 times per week", "সপ্তাহে ৩-৪ বার"),
                ("1_2_weekly", "1-2 times per week", "সপ্তাহে ১-২ বার"),
                ("rarely", "Rarely", "কদাচিৎ"),
                ("never", "Never", "কখনো না"),
            ],
        )
        .build(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_catalog_is_valid() {
        let catalog = QuestionCatalog::standard();
        catalog.validate().unwrap();
        assert_eq!(catalog.len(), 31);
        assert_eq!(catalog.questions()[0].id, "age_group");
        assert_eq!(catalog.questions()[30].id, "exercise_frequency");
    }

    #[test]
    fn every_prompt_is_bilingual() {
        for q in QuestionCatalog::standard().questions() {
            assert!(!q.prompt.en.is_empty() && !q.prompt.bn.is_empty(), "{}", q.id);
            for o in &q.options {
                assert!(!o.label.en.is_empty() && !o.label.bn.is_empty(), "{}", q.id);
            }
        }
    }

    #[test]
    fn json_round_trip_preserves_catalog() {
        let catalog = QuestionCatalog::standard();
        let json = catalog.to_json().unwrap();
        assert_eq!(QuestionCatalog::from_json(&json).unwrap(), catalog);
    }

    #[test]
    fn rejects_duplicate_ids() {
        let q = QuestionCatalog::standard().questions()[0].clone();
        let err = QuestionCatalog::new(vec![q.clone(), q]).unwrap_err();
        assert!(matches!(err, QuestionnaireError::InvalidCatalog(_)));
    }

    #[test]
    fn rejects_constraint_on_missing_question() {
        let q = Q::yes_no("a", "A?", "A?").when("gender", &["female"]).build();
        assert!(QuestionCatalog::new(vec![q]).is_err());
    }

    #[test]
    fn rejects_constraint_with_unknown_value() {
        let gender = QuestionCatalog::standard().get("gender").unwrap().clone();
        let q = Q::yes_no("a", "A?", "A?").when("gender", &["Female"]).build();
        assert!(QuestionCatalog::new(vec![gender, q]).is_err());
    }

    #[test]
    fn malformed_json_is_parse_error() {
        let err = QuestionCatalog::from_json("{not json").unwrap_err();
        assert!(matches!(err, QuestionnaireError::CatalogParse(_)));
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        std::fs::write(&path, QuestionCatalog::standard().to_json().unwrap()).unwrap();
        assert_eq!(QuestionCatalog::load(&path).unwrap().len(), 31);
        assert!(matches!(
            QuestionCatalog::load(&dir.path().join("missing.json")),
            Err(QuestionnaireError::CatalogLoad(_, _))
        ));
    }
}
