use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("Invalid enum value for {field}: {value}")]
    InvalidEnum { field: String, value: String },
}

/// Macro to generate enum with as_str + std::str::FromStr pattern.
/// The serialized form is the same string as `as_str`.
macro_rules! str_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $s:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(#[serde(rename = $s)] $variant),+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $s),+
                }
            }

            /// All variants in declaration order.
            pub fn all() -> &'static [Self] {
                &[$(Self::$variant),+]
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = ModelError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($s => Ok(Self::$variant)),+,
                    _ => Err(ModelError::InvalidEnum {
                        field: stringify!($name).into(),
                        value: s.into(),
                    }),
                }
            }
        }
    };
}

str_enum!(
    /// Join key between symptoms, risk factors, screening guidelines and diagnoses.
    CancerType {
        Breast => "breast_cancer",
        Lung => "lung_cancer",
        Colorectal => "colorectal_cancer",
        Prostate => "prostate_cancer",
        Cervical => "cervical_cancer",
        Liver => "liver_cancer",
        Stomach => "stomach_cancer",
        Skin => "skin_cancer",
        Blood => "blood_cancer",
        Unknown => "unknown",
    }
);

impl CancerType {
    /// Human-readable label, e.g. "Breast Cancer".
    pub fn label(&self) -> &'static str {
        match self {
            Self::Breast => "Breast Cancer",
            Self::Lung => "Lung Cancer",
            Self::Colorectal => "Colorectal Cancer",
            Self::Prostate => "Prostate Cancer",
            Self::Cervical => "Cervical Cancer",
            Self::Liver => "Liver Cancer",
            Self::Stomach => "Stomach Cancer",
            Self::Skin => "Skin Cancer",
            Self::Blood => "Blood Cancer",
            Self::Unknown => "Unknown",
        }
    }
}

str_enum!(RiskLevel {
    Low => "low",
    Moderate => "moderate",
    High => "high",
    Critical => "critical",
});

impl RiskLevel {
    /// Categorize a normalized risk score. The score is clamped to [0, 1] first.
    pub fn from_score(score: f64) -> Self {
        let score = clamp_unit(score);
        if score >= 0.8 {
            Self::Critical
        } else if score >= 0.6 {
            Self::High
        } else if score >= 0.3 {
            Self::Moderate
        } else {
            Self::Low
        }
    }

    pub fn is_elevated(&self) -> bool {
        matches!(self, Self::High | Self::Critical)
    }
}

str_enum!(Gender {
    Male => "male",
    Female => "female",
    Other => "other",
});

impl Default for Gender {
    fn default() -> Self {
        Self::Other
    }
}

str_enum!(
    /// Display language. The reasoning core never branches on it.
    Locale {
        English => "en",
        Bengali => "bn",
    }
);

impl Default for Locale {
    fn default() -> Self {
        Self::English
    }
}

impl Locale {
    /// Lenient parse used at the configuration edge ("en", "English", "bn", "Bengali").
    pub fn parse_lenient(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "en" | "english" => Some(Self::English),
            "bn" | "bengali" | "bangla" => Some(Self::Bengali),
            _ => None,
        }
    }
}

str_enum!(ReasoningStage {
    SymptomAnalysis => "symptom_analysis",
    RiskAssessment => "risk_assessment",
    DifferentialDiagnosis => "differential_diagnosis",
    RecommendationGeneration => "recommendation_generation",
    UrgencyEvaluation => "urgency_evaluation",
});

impl ReasoningStage {
    /// Title case label, e.g. "Symptom Analysis".
    pub fn title(&self) -> &'static str {
        match self {
            Self::SymptomAnalysis => "Symptom Analysis",
            Self::RiskAssessment => "Risk Assessment",
            Self::DifferentialDiagnosis => "Differential Diagnosis",
            Self::RecommendationGeneration => "Recommendation Generation",
            Self::UrgencyEvaluation => "Urgency Evaluation",
        }
    }
}

str_enum!(UrgencyLevel {
    Low => "LOW",
    Moderate => "MODERATE",
    High => "HIGH",
    Critical => "CRITICAL",
});

str_enum!(ConfidenceLabel {
    Low => "Low",
    Moderate => "Moderate",
    High => "High",
});

impl ConfidenceLabel {
    /// >0.7 High, >0.4 Moderate, else Low. Scores above 1.0 are legal here.
    pub fn from_probability(probability: f64) -> Self {
        if probability > 0.7 {
            Self::High
        } else if probability > 0.4 {
            Self::Moderate
        } else {
            Self::Low
        }
    }
}

str_enum!(
    /// Body systems implicated by the questionnaire symptom answers.
    SymptomPattern {
        Minimal => "minimal",
        Respiratory => "respiratory",
        Gastrointestinal => "gastrointestinal",
        Genitourinary => "genitourinary",
        Systemic => "systemic",
        Localized => "localized",
        BiSystem => "bi-system",
        MultiSystem => "multi-system",
    }
);

str_enum!(
    /// High-risk symptom answers that force a CRITICAL urgency.
    RedFlag {
        BloodInSputum => "blood_in_sputum",
        UnusualBleeding => "unusual_bleeding",
        UnexplainedWeightLoss => "unexplained_weight_loss",
        PersistentPain => "persistent_pain",
        BreastChanges => "breast_changes",
        TesticularLumps => "testicular_lumps",
    }
);

/// Clamp into [0, 1]; NaN maps to 0.
pub fn clamp_unit(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn cancer_type_serializes_as_string_name() {
        let json = serde_json::to_string(&CancerType::Lung).unwrap();
        assert_eq!(json, "\"lung_cancer\"");
        let back: CancerType = serde_json::from_str("\"skin_cancer\"").unwrap();
        assert_eq!(back, CancerType::Skin);
    }

    #[test]
    fn from_str_rejects_free_labels() {
        assert_eq!(CancerType::from_str("breast_cancer").unwrap(), CancerType::Breast);
        let err = CancerType::from_str("pancreatic_cancer").unwrap_err();
        assert_eq!(
            err,
            ModelError::InvalidEnum {
                field: "CancerType".into(),
                value: "pancreatic_cancer".into()
            }
        );
    }

    #[test]
    fn risk_level_boundaries_are_exact() {
        assert_eq!(RiskLevel::from_score(0.8), RiskLevel::Critical);
        assert_eq!(RiskLevel::from_score(0.7999), RiskLevel::High);
        assert_eq!(RiskLevel::from_score(0.6), RiskLevel::High);
        assert_eq!(RiskLevel::from_score(0.5999), RiskLevel::Moderate);
        assert_eq!(RiskLevel::from_score(0.3), RiskLevel::Moderate);
        assert_eq!(RiskLevel::from_score(0.2999), RiskLevel::Low);
    }

    #[test]
    fn risk_level_clamps_out_of_range() {
        assert_eq!(RiskLevel::from_score(4.2), RiskLevel::Critical);
        assert_eq!(RiskLevel::from_score(-1.0), RiskLevel::Low);
        assert_eq!(RiskLevel::from_score(f64::NAN), RiskLevel::Low);
    }

    #[test]
    fn confidence_label_thresholds_are_strict() {
        assert_eq!(ConfidenceLabel::from_probability(0.7), ConfidenceLabel::Moderate);
        assert_eq!(ConfidenceLabel::from_probability(0.71), ConfidenceLabel::High);
        assert_eq!(ConfidenceLabel::from_probability(0.4), ConfidenceLabel::Low);
        assert_eq!(ConfidenceLabel::from_probability(1.2), ConfidenceLabel::High);
    }

    #[test]
    fn urgency_level_ordering() {
        assert!(UrgencyLevel::Low < UrgencyLevel::Moderate);
        assert!(UrgencyLevel::High < UrgencyLevel::Critical);
        assert_eq!(UrgencyLevel::Critical.as_str(), "CRITICAL");
    }

    #[test]
    fn locale_lenient_parse() {
        assert_eq!(Locale::parse_lenient("English"), Some(Locale::English));
        assert_eq!(Locale::parse_lenient(" bn "), Some(Locale::Bengali));
        assert_eq!(Locale::parse_lenient("fr"), None);
    }
}
