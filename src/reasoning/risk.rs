use std::collections::BTreeMap;

use crate::knowledge::KnowledgeBase;
use crate::models::enums::{clamp_unit, CancerType, RiskLevel};
use crate::models::patient::PatientAttributes;

use super::symptoms::join_labels;
use super::types::{CancerRisk, RiskAssessment, StageResult};

/// Stage 2. Sum applicable factor weights per cancer type.
pub fn assess(kb: &KnowledgeBase, patient: &PatientAttributes) -> StageResult<RiskAssessment> {
    let applicable: Vec<_> = kb
        .risk_factors
        .iter()
        .filter(|f| f.applies_to(patient))
        .collect();

    let mut lines: Vec<String> = applicable
        .iter()
        .map(|f| format!("Risk factor identified: {} (weight: {})", f.name, f.weight))
        .collect();

    let mut risks = BTreeMap::new();
    for &cancer in CancerType::all() {
        if cancer == CancerType::Unknown {
            continue;
        }
        let contributing: Vec<_> = applicable
            .iter()
            .filter(|f| f.cancer_types.contains(&cancer))
            .collect();
        let raw: f64 = contributing.iter().map(|f| f.weight).sum();
        let risk_score = clamp_unit(raw);
        if risk_score <= 0.0 {
            continue;
        }
        let risk_level = RiskLevel::from_score(risk_score);
        lines.push(format!("{}: risk score {risk_score:.2} ({risk_level})", cancer.as_str()));
        risks.insert(
            cancer,
            CancerRisk {
                risk_score,
                risk_level,
                contributing_factors: contributing.iter().map(|f| f.name.clone()).collect(),
            },
        );
    }

    let overall_risk_score = clamp_unit(applicable.iter().map(|f| f.weight).sum());
    let high_risk_cancers: Vec<CancerType> = risks
        .iter()
        .filter(|(_, r)| r.risk_level.is_elevated())
        .map(|(c, _)| *c)
        .collect();
    let recommended_screenings = screenings(kb, patient, &risks);

    if applicable.is_empty() {
        lines.push("No risk factors present".to_string());
    }
    lines.push(format!("Overall risk score: {overall_risk_score:.2}"));
    lines.push(format!("High-risk cancer types: {}", join_labels(&high_risk_cancers)));

    StageResult::new(
        RiskAssessment {
            overall_risk_score,
            cancer_specific_risks: risks,
            high_risk_cancers,
            recommended_screenings,
        },
        lines.join(". "),
    )
}

/// Guideline-backed screenings for the cancers carrying any risk. Elevated
/// risk moves the start age earlier and may tighten the interval.
fn screenings(
    kb: &KnowledgeBase,
    patient: &PatientAttributes,
    risks: &BTreeMap<CancerType, CancerRisk>,
) -> Vec<String> {
    let age = patient.effective_age();
    risks
        .iter()
        .filter_map(|(cancer, risk)| {
            let guideline = kb.guideline_for(*cancer)?;
            let elevated = risk.risk_level.is_elevated();
            if !guideline.applies_to_gender(patient.gender) || age < guideline.start_age_for(elevated) {
                return None;
            }
            Some(guideline.describe(elevated))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::enums::Gender;

    fn patient(age: i32, gender: Gender) -> PatientAttributes {
        PatientAttributes {
            age,
            gender,
            ..Default::default()
        }
    }

    #[test]
    fn no_factors_no_risks() {
        let r = assess(&KnowledgeBase::standard(), &patient(30, Gender::Male)).output;
        assert_eq!(r.overall_risk_score, 0.0);
        assert!(r.cancer_specific_risks.is_empty());
        assert!(r.high_risk_cancers.is_empty());
        assert!(r.recommended_screenings.is_empty());
    }

    #[test]
    fn smoker_with_family_history() {
        let mut p = patient(55, Gender::Male);
        p.smoking = true;
        p.family_history_cancer = true;
        let r = assess(&KnowledgeBase::standard(), &p).output;

        let lung = &r.cancer_specific_risks[&CancerType::Lung];
        assert!((lung.risk_score - 0.9).abs() < 1e-9);
        assert_eq!(lung.risk_level, RiskLevel::Critical);

        // smoking + family + age = 2.2, clamped
        let colorectal = &r.cancer_specific_risks[&CancerType::Colorectal];
        assert_eq!(colorectal.risk_score, 1.0);
        assert_eq!(colorectal.contributing_factors.len(), 3);

        assert_eq!(r.overall_risk_score, 1.0);
        assert!(r.high_risk_cancers.contains(&CancerType::Prostate));
    }

    #[test]
    fn scores_stay_in_unit_interval() {
        let p = PatientAttributes {
            age: 90,
            gender: Gender::Female,
            smoking: true,
            heavy_drinking: true,
            family_history_cancer: true,
            excessive_sun_exposure: true,
            occupational_exposure: true,
            hepatitis_positive: true,
            hpv_positive: true,
            ..Default::default()
        };
        let r = assess(&KnowledgeBase::standard(), &p).output;
        assert!((0.0..=1.0).contains(&r.overall_risk_score));
        for risk in r.cancer_specific_risks.values() {
            assert!((0.0..=1.0).contains(&risk.risk_score));
        }
    }

    #[test]
    fn negative_age_is_clamped() {
        let r = assess(&KnowledgeBase::standard(), &patient(-10, Gender::Female)).output;
        assert!(r.cancer_specific_risks.is_empty());
    }

    #[test]
    fn elevated_risk_uses_high_risk_start_age() {
        let mut p = patient(46, Gender::Male);
        p.family_history_cancer = true;
        let r = assess(&KnowledgeBase::standard(), &p).output;
        // Prostate 0.7 is high; high-risk start 45 applies
        assert!(r
            .recommended_screenings
            .iter()
            .any(|s| s.starts_with("Prostate Cancer:")));
        // Colorectal 0.7 high; normal start 45 applies with no high-risk start
        assert!(r
            .recommended_screenings
            .iter()
            .any(|s| s.starts_with("Colorectal Cancer:")));
    }

    #[test]
    fn moderate_risk_waits_for_normal_start_age() {
        let mut p = patient(46, Gender::Male);
        p.occupational_exposure = true;
        p.heavy_drinking = true;
        let r = assess(&KnowledgeBase::standard(), &p).output;
        assert_eq!(r.cancer_specific_risks[&CancerType::Colorectal].risk_level, RiskLevel::Moderate);
        assert!(r.recommended_screenings.iter().any(|s| s.starts_with("Colorectal Cancer:")));
        assert!(!r.recommended_screenings.iter().any(|s| s.starts_with("Prostate Cancer:")));
    }

    #[test]
    fn screenings_respect_gender() {
        let mut p = patient(45, Gender::Male);
        p.heavy_drinking = true;
        let r = assess(&KnowledgeBase::standard(), &p).output;
        assert!(r.cancer_specific_risks.contains_key(&CancerType::Breast));
        assert!(!r.recommended_screenings.iter().any(|s| s.starts_with("Breast Cancer:")));
    }

    #[test]
    fn high_risk_frequency_replaces_interval() {
        let mut p = patient(30, Gender::Female);
        p.hpv_positive = true;
        let r = assess(&KnowledgeBase::standard(), &p).output;
        let cervical = r
            .recommended_screenings
            .iter()
            .find(|s| s.starts_with("Cervical Cancer:"))
            .unwrap();
        assert!(cervical.ends_with("annually"));
    }
}
