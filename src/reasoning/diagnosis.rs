use std::collections::BTreeMap;

use crate::knowledge::KnowledgeBase;
use crate::models::enums::{CancerType, ConfidenceLabel};

use super::types::{
    DiagnosisEntry, DifferentialDiagnosis, MostLikelyDiagnosis, RiskAssessment, StageResult,
    SymptomAnalysis,
};

pub const SYMPTOM_CONTRIBUTION: f64 = 0.6;
pub const RISK_CONTRIBUTION: f64 = 0.4;
pub const MAX_DIAGNOSES: usize = 5;
/// Entries whose test lists feed `recommended_tests`.
pub const TESTED_DIAGNOSES: usize = 3;
pub const IMMEDIATE_EVALUATION_SCORE: f64 = 0.8;

pub const SYMPTOM_EVIDENCE: &str = "Symptom pattern consistent with this cancer type";

/// Stage 3. Rank cancer types by combined symptom and risk evidence.
pub fn differentiate(
    kb: &KnowledgeBase,
    symptoms: &SymptomAnalysis,
    risk: &RiskAssessment,
) -> StageResult<DifferentialDiagnosis> {
    let mut scores: BTreeMap<CancerType, f64> = BTreeMap::new();
    for cancer in &symptoms.possible_cancer_types {
        *scores.entry(*cancer).or_default() += SYMPTOM_CONTRIBUTION;
    }
    for (cancer, cancer_risk) in &risk.cancer_specific_risks {
        *scores.entry(*cancer).or_default() += RISK_CONTRIBUTION * cancer_risk.risk_score;
    }

    let mut ranked: Vec<(CancerType, f64)> = scores.into_iter().collect();
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

    let requires_immediate_evaluation = ranked.iter().any(|(_, p)| *p > IMMEDIATE_EVALUATION_SCORE);

    let entries: Vec<DiagnosisEntry> = ranked
        .iter()
        .take(MAX_DIAGNOSES)
        .enumerate()
        .map(|(i, (cancer, probability))| DiagnosisEntry {
            rank: i + 1,
            cancer_type: *cancer,
            probability: *probability,
            confidence: ConfidenceLabel::from_probability(*probability),
            supporting_evidence: evidence(*cancer, symptoms, risk),
        })
        .collect();

    let mut recommended_tests: Vec<String> = Vec::new();
    for entry in entries.iter().take(TESTED_DIAGNOSES) {
        for test in kb.tests_for(entry.cancer_type) {
            if !recommended_tests.contains(test) {
                recommended_tests.push(test.clone());
            }
        }
    }

    let most_likely_diagnosis = entries.first().map(|e| MostLikelyDiagnosis {
        cancer_type: e.cancer_type,
        probability: e.probability,
    });

    let mut lines: Vec<String> = entries
        .iter()
        .map(|e| {
            format!(
                "Rank {}: {} with probability {:.2} ({} confidence)",
                e.rank,
                e.cancer_type.as_str(),
                e.probability,
                e.confidence
            )
        })
        .collect();
    if entries.is_empty() {
        lines.push("No cancer types supported by symptoms or risk factors".to_string());
    }
    if requires_immediate_evaluation {
        lines.push("At least one diagnosis scores above the immediate evaluation threshold".to_string());
    }

    StageResult::new(
        DifferentialDiagnosis {
            differential_diagnoses: entries,
            most_likely_diagnosis,
            requires_immediate_evaluation,
            recommended_tests,
        },
        lines.join(". "),
    )
}

fn evidence(cancer: CancerType, symptoms: &SymptomAnalysis, risk: &RiskAssessment) -> Vec<String> {
    let mut out = Vec::new();
    if symptoms.possible_cancer_types.contains(&cancer) {
        out.push(SYMPTOM_EVIDENCE.to_string());
    }
    if let Some(r) = risk.cancer_specific_risks.get(&cancer) {
        out.extend(r.contributing_factors.iter().map(|f| format!("Risk factor: {f}")));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::enums::Gender;
    use crate::models::patient::{PatientAttributes, SymptomReport};
    use crate::reasoning::{risk, symptoms};

    fn run(description: &str, patient: &PatientAttributes) -> DifferentialDiagnosis {
        let kb = KnowledgeBase::standard();
        let s = symptoms::analyze(&kb, &SymptomReport::new(description, 5, "weeks")).output;
        let r = risk::assess(&kb, patient).output;
        differentiate(&kb, &s, &r).output
    }

    #[test]
    fn symptoms_and_risk_add_up() {
        let patient = PatientAttributes {
            age: 60,
            gender: Gender::Male,
            smoking: true,
            ..Default::default()
        };
        let d = run("persistent cough", &patient);
        let top = &d.differential_diagnoses[0];
        assert_eq!(top.cancer_type, CancerType::Lung);
        assert!((top.probability - (0.6 + 0.4 * 0.9)).abs() < 1e-9);
        assert_eq!(top.confidence, ConfidenceLabel::High);
        assert!(d.requires_immediate_evaluation);
        assert_eq!(
            top.supporting_evidence,
            vec![SYMPTOM_EVIDENCE.to_string(), "Risk factor: Smoking".to_string()]
        );
        assert_eq!(d.most_likely_diagnosis.unwrap().cancer_type, CancerType::Lung);
    }

    #[test]
    fn ties_break_by_cancer_order() {
        let d = run("weight loss", &PatientAttributes::default());
        let order: Vec<_> = d.differential_diagnoses.iter().map(|e| e.cancer_type).collect();
        assert_eq!(
            order,
            vec![CancerType::Lung, CancerType::Liver, CancerType::Stomach, CancerType::Blood]
        );
        assert!(d.differential_diagnoses.iter().all(|e| e.confidence == ConfidenceLabel::Moderate));
        assert!(!d.requires_immediate_evaluation);
    }

    #[test]
    fn at_most_five_and_tests_from_top_three() {
        let patient = PatientAttributes {
            age: 60,
            gender: Gender::Female,
            smoking: true,
            family_history_cancer: true,
            heavy_drinking: true,
            ..Default::default()
        };
        let d = run("cough, weight loss, fatigue, bleeding, mole", &patient);
        assert_eq!(d.differential_diagnoses.len(), MAX_DIAGNOSES);
        let kb = KnowledgeBase::standard();
        for entry in d.differential_diagnoses.iter().take(TESTED_DIAGNOSES) {
            for test in kb.tests_for(entry.cancer_type) {
                assert!(d.recommended_tests.contains(test));
            }
        }
        let unique: std::collections::BTreeSet<_> = d.recommended_tests.iter().collect();
        assert_eq!(unique.len(), d.recommended_tests.len());
    }

    #[test]
    fn empty_inputs_give_empty_diagnosis() {
        let d = run("nothing to report", &PatientAttributes::default());
        assert!(d.differential_diagnoses.is_empty());
        assert!(d.most_likely_diagnosis.is_none());
        assert!(d.recommended_tests.is_empty());
        assert!(!d.requires_immediate_evaluation);
    }

    #[test]
    fn probability_is_not_renormalized() {
        let patient = PatientAttributes {
            age: 60,
            gender: Gender::Male,
            family_history_cancer: true,
            smoking: true,
            ..Default::default()
        };
        let d = run("bowel changes", &patient);
        let top = &d.differential_diagnoses[0];
        assert_eq!(top.cancer_type, CancerType::Colorectal);
        assert!((top.probability - 1.0).abs() < 1e-9);
        let total: f64 = d.differential_diagnoses.iter().map(|e| e.probability).sum();
        assert!(total > 1.0);
    }
}
