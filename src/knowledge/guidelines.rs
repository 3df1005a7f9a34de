use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::enums::{CancerType, Gender};

/// Population screening schedule for one cancer type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreeningGuideline {
    pub cancer_type: CancerType,
    pub start_age: u32,
    #[serde(default)]
    pub high_risk_start_age: Option<u32>,
    pub frequency: String,
    #[serde(default)]
    pub high_risk_frequency: Option<String>,
    pub method: String,
    #[serde(default)]
    pub alternative: Option<String>,
    /// Empty means every gender.
    #[serde(default)]
    pub genders: Vec<Gender>,
}

impl ScreeningGuideline {
    /// High-risk start age applies only when the guideline defines one.
    pub fn start_age_for(&self, elevated_risk: bool) -> u32 {
        match (elevated_risk, self.high_risk_start_age) {
            (true, Some(age)) => age,
            _ => self.start_age,
        }
    }

    pub fn applies_to_gender(&self, gender: Gender) -> bool {
        self.genders.is_empty() || self.genders.contains(&gender)
    }

    /// "Breast Cancer: mammography annually". Elevated risk swaps in the
    /// high-risk interval when one is defined.
    pub fn describe(&self, elevated_risk: bool) -> String {
        let frequency = match (elevated_risk, &self.high_risk_frequency) {
            (true, Some(f)) => f,
            _ => &self.frequency,
        };
        format!("{}: {} {}", self.cancer_type.label(), self.method, frequency)
    }
}

/// Cancer type → diagnostic work-up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagnosticTestTable {
    pub by_cancer: BTreeMap<CancerType, Vec<String>>,
    pub default: Vec<String>,
}

impl DiagnosticTestTable {
    pub fn tests_for(&self, cancer: CancerType) -> &[String] {
        self.by_cancer
            .get(&cancer)
            .map(Vec::as_slice)
            .unwrap_or(&self.default)
    }
}

/// Cancer type → referral specialist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecialistTable {
    pub by_cancer: BTreeMap<CancerType, String>,
    pub default: String,
}

impl SpecialistTable {
    pub fn specialist_for(&self, cancer: CancerType) -> &str {
        self.by_cancer
            .get(&cancer)
            .map(String::as_str)
            .unwrap_or(&self.default)
    }
}

// ── Standard tables ─────────────────────────────────────────

pub fn standard_guidelines() -> Vec<ScreeningGuideline> {
    vec![
        ScreeningGuideline {
            cancer_type: CancerType::Breast,
            start_age: 40,
            high_risk_start_age: Some(30),
            frequency: "annually".into(),
            high_risk_frequency: None,
            method: "mammography".into(),
            alternative: None,
            genders: vec![Gender::Female],
        },
        ScreeningGuideline {
            cancer_type: CancerType::Cervical,
            start_age: 21,
            high_risk_start_age: None,
            frequency: "every 3 years".into(),
            high_risk_frequency: Some("annually".into()),
            method: "pap smear".into(),
            alternative: None,
            genders: vec![Gender::Female],
        },
        ScreeningGuideline {
            cancer_type: CancerType::Colorectal,
            start_age: 45,
            high_risk_start_age: None,
            frequency: "every 10 years".into(),
            high_risk_frequency: None,
            method: "colonoscopy".into(),
            alternative: Some("FIT test annually".into()),
            genders: Vec::new(),
        },
        ScreeningGuideline {
            cancer_type: CancerType::Prostate,
            start_age: 50,
            high_risk_start_age: Some(45),
            frequency: "annually".into(),
            high_risk_frequency: None,
            method: "PSA test".into(),
            alternative: None,
            genders: vec![Gender::Male],
        },
    ]
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub fn standard_diagnostic_tests() -> DiagnosticTestTable {
    use CancerType::*;

    let by_cancer = BTreeMap::from([
        (Breast, strings(&["Mammography", "Breast MRI", "Biopsy", "Ultrasound"])),
        (Lung, strings(&["Chest CT scan", "PET scan", "Bronchoscopy", "Sputum cytology"])),
        (Colorectal, strings(&["Colonoscopy", "CEA blood test", "CT scan", "FIT test"])),
        (Prostate, strings(&["PSA blood test", "Digital rectal exam", "Prostate MRI", "Biopsy"])),
        (Cervical, strings(&["Pap smear", "HPV test", "Colposcopy", "Cervical biopsy"])),
        (Liver, strings(&["Liver ultrasound", "CT scan", "MRI", "Alpha-fetoprotein test"])),
        (Stomach, strings(&["Upper endoscopy", "CT scan", "Barium swallow", "H. pylori test"])),
        (Skin, strings(&["Dermoscopy", "Skin biopsy", "Full body skin exam"])),
        (Blood, strings(&["Complete blood count", "Bone marrow biopsy", "Flow cytometry", "Genetic tests"])),
    ]);

    DiagnosticTestTable {
        by_cancer,
        default: strings(&["General blood tests", "Imaging studies"]),
    }
}

pub fn standard_specialists() -> SpecialistTable {
    use CancerType::*;

    let by_cancer = BTreeMap::from([
        (Breast, "Oncologist or Breast Surgeon".to_string()),
        (Lung, "Pulmonologist or Thoracic Oncologist".to_string()),
        (Colorectal, "Gastroenterologist or Colorectal Surgeon".to_string()),
        (Prostate, "Urologist or Urologic Oncologist".to_string()),
        (Cervical, "Gynecologic Oncologist".to_string()),
        (Liver, "Hepatologist or Liver Surgeon".to_string()),
        (Stomach, "Gastroenterologist or Surgical Oncologist".to_string()),
        (Skin, "Dermatologist or Dermatologic Surgeon".to_string()),
        (Blood, "Hematologist or Hematologic Oncologist".to_string()),
    ]);

    SpecialistTable {
        by_cancer,
        default: "Oncologist".into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn guideline(cancer: CancerType) -> ScreeningGuideline {
        standard_guidelines()
            .into_iter()
            .find(|g| g.cancer_type == cancer)
            .unwrap()
    }

    #[test]
    fn high_risk_start_only_when_defined() {
        let breast = guideline(CancerType::Breast);
        assert_eq!(breast.start_age_for(false), 40);
        assert_eq!(breast.start_age_for(true), 30);

        let colorectal = guideline(CancerType::Colorectal);
        assert_eq!(colorectal.start_age_for(true), 45);
    }

    #[test]
    fn gender_gating() {
        assert!(!guideline(CancerType::Breast).applies_to_gender(Gender::Male));
        assert!(guideline(CancerType::Prostate).applies_to_gender(Gender::Male));
        assert!(guideline(CancerType::Colorectal).applies_to_gender(Gender::Other));
    }

    #[test]
    fn describe_uses_label_method_frequency() {
        assert_eq!(
            guideline(CancerType::Breast).describe(false),
            "Breast Cancer: mammography annually"
        );
        assert_eq!(
            guideline(CancerType::Cervical).describe(true),
            "Cervical Cancer: pap smear annually"
        );
    }

    #[test]
    fn unknown_cancer_falls_back_to_defaults() {
        let tests = standard_diagnostic_tests();
        assert_eq!(
            tests.tests_for(CancerType::Unknown),
            &["General blood tests".to_string(), "Imaging studies".to_string()]
        );
        assert_eq!(standard_specialists().specialist_for(CancerType::Unknown), "Oncologist");
    }

    #[test]
    fn every_known_cancer_has_tests_and_specialist() {
        let tests = standard_diagnostic_tests();
        let specialists = standard_specialists();
        for cancer in CancerType::all().iter().filter(|c| **c != CancerType::Unknown) {
            assert!(tests.by_cancer.contains_key(cancer), "{cancer}");
            assert!(specialists.by_cancer.contains_key(cancer), "{cancer}");
        }
    }

    #[test]
    fn tables_round_trip_through_json_with_string_keys() {
        let tests = standard_diagnostic_tests();
        let json = serde_json::to_value(&tests).unwrap();
        assert!(json["by_cancer"]["lung_cancer"].is_array());
        let back: DiagnosticTestTable = serde_json::from_value(json).unwrap();
        assert_eq!(back, tests);
    }
}
