use serde::{Deserialize, Serialize};

use crate::models::enums::CancerType;
use crate::models::patient::PatientAttributes;

/// Typed predicate over normalized patient attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RiskCondition {
    Smoking,
    HeavyDrinking,
    FamilyHistory,
    /// Strictly older than `years`.
    AgeOver { years: u32 },
    HpvPositive,
    HepatitisPositive,
    ExcessiveSunExposure,
    OccupationalExposure,
}

impl RiskCondition {
    pub fn is_met(&self, patient: &PatientAttributes) -> bool {
        match self {
            Self::Smoking => patient.smoking,
            Self::HeavyDrinking => patient.heavy_drinking,
            Self::FamilyHistory => patient.family_history_cancer,
            Self::AgeOver { years } => patient.effective_age() > *years,
            Self::HpvPositive => patient.hpv_positive,
            Self::HepatitisPositive => patient.hepatitis_positive,
            Self::ExcessiveSunExposure => patient.excessive_sun_exposure,
            Self::OccupationalExposure => patient.occupational_exposure,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskFactor {
    pub key: String,
    pub name: String,
    /// Contribution to every listed cancer's score, 0.0-1.0.
    pub weight: f64,
    pub cancer_types: Vec<CancerType>,
    pub condition: RiskCondition,
}

impl RiskFactor {
    pub fn applies_to(&self, patient: &PatientAttributes) -> bool {
        self.condition.is_met(patient)
    }
}

fn factor(
    key: &str,
    name: &str,
    weight: f64,
    cancer_types: &[CancerType],
    condition: RiskCondition,
) -> RiskFactor {
    RiskFactor {
        key: key.into(),
        name: name.into(),
        weight,
        cancer_types: cancer_types.to_vec(),
        condition,
    }
}

pub fn standard_risk_factors() -> Vec<RiskFactor> {
    use CancerType::*;

    vec![
        factor("smoking", "Smoking", 0.9, &[Lung, Cervical, Colorectal], RiskCondition::Smoking),
        factor(
            "family_history",
            "Family History",
            0.7,
            &[Breast, Colorectal, Prostate],
            RiskCondition::FamilyHistory,
        ),
        factor(
            "age_over_50",
            "Age over 50",
            0.6,
            &[Breast, Colorectal, Prostate],
            RiskCondition::AgeOver { years: 50 },
        ),
        factor(
            "alcohol_consumption",
            "Heavy Alcohol Consumption",
            0.5,
            &[Liver, Breast, Colorectal],
            RiskCondition::HeavyDrinking,
        ),
        factor("hpv_infection", "HPV Infection", 0.8, &[Cervical], RiskCondition::HpvPositive),
        factor(
            "hepatitis_infection",
            "Hepatitis B/C Infection",
            0.8,
            &[Liver],
            RiskCondition::HepatitisPositive,
        ),
        factor(
            "sun_exposure",
            "Excessive Sun Exposure",
            0.7,
            &[Skin],
            RiskCondition::ExcessiveSunExposure,
        ),
        factor(
            "occupational_exposure",
            "Occupational Exposure",
            0.4,
            &[Lung, Blood, Skin],
            RiskCondition::OccupationalExposure,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn age_condition_is_strict() {
        let cond = RiskCondition::AgeOver { years: 50 };
        let mut patient = PatientAttributes {
            age: 50,
            ..Default::default()
        };
        assert!(!cond.is_met(&patient));
        patient.age = 51;
        assert!(cond.is_met(&patient));
    }

    #[test]
    fn negative_age_never_over() {
        let cond = RiskCondition::AgeOver { years: 0 };
        let patient = PatientAttributes {
            age: -5,
            ..Default::default()
        };
        assert!(!cond.is_met(&patient));
    }

    #[test]
    fn weights_in_unit_range() {
        for f in standard_risk_factors() {
            assert!(f.weight > 0.0 && f.weight <= 1.0, "{}", f.key);
        }
    }

    #[test]
    fn no_factor_applies_to_default_patient() {
        let patient = PatientAttributes::default();
        assert!(standard_risk_factors().iter().all(|f| !f.applies_to(&patient)));
    }

    #[test]
    fn condition_json_shape() {
        let json = serde_json::to_value(RiskCondition::AgeOver { years: 50 }).unwrap();
        assert_eq!(json, serde_json::json!({"kind": "age_over", "years": 50}));
    }
}
