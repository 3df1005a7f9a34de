use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::enums::{Gender, RedFlag, SymptomPattern};

/// Normalized demographics and risk flags consumed by risk assessment.
///
/// `age` keeps whatever the caller supplied. Negative values are tolerated
/// and read through [`PatientAttributes::effective_age`], which floors at 0.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PatientAttributes {
    pub age: i32,
    pub gender: Gender,
    pub smoking: bool,
    pub heavy_drinking: bool,
    pub family_history_cancer: bool,
    pub excessive_sun_exposure: bool,
    pub occupational_exposure: bool,
    pub chronic_diseases: bool,
    pub cancer_history: bool,
    pub hepatitis_positive: bool,
    pub hpv_positive: bool,
    pub red_flags: BTreeSet<RedFlag>,
}

impl PatientAttributes {
    pub fn effective_age(&self) -> u32 {
        self.age.max(0) as u32
    }

    pub fn has_red_flag(&self) -> bool {
        !self.red_flags.is_empty()
    }
}

/// Free-text symptom description plus the hints attached to every matched symptom.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymptomReport {
    pub description: String,
    pub severity: i32,
    pub duration: String,
    pub pattern: SymptomPattern,
}

impl SymptomReport {
    pub fn new(description: impl Into<String>, severity: i32, duration: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            severity,
            duration: duration.into(),
            pattern: SymptomPattern::Minimal,
        }
    }

    /// Severity clamped into 1..=10.
    pub fn clamped_severity(&self) -> u8 {
        self.severity.clamp(1, 10) as u8
    }
}
