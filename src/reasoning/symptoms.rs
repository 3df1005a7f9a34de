use std::collections::{BTreeMap, BTreeSet};

use crate::knowledge::KnowledgeBase;
use crate::models::enums::CancerType;
use crate::models::patient::SymptomReport;

use super::types::{StageResult, SymptomAnalysis, SymptomObservation};

/// Mean urgency at or above this flags the analysis for immediate attention.
pub const IMMEDIATE_ATTENTION_URGENCY: f64 = 7.0;

/// Stage 1. Keyword match of the description against the symptom table.
pub fn analyze(kb: &KnowledgeBase, report: &SymptomReport) -> StageResult<SymptomAnalysis> {
    let description = report.description.to_lowercase();
    let severity = report.clamped_severity();

    let mut identified = Vec::new();
    let mut cancer_types = BTreeSet::new();
    let mut details = BTreeMap::new();
    let mut urgency_total = 0u32;
    let mut lines = Vec::new();

    for symptom in kb.symptoms.iter().filter(|s| s.is_mentioned_in(&description)) {
        identified.push(symptom.name.clone());
        cancer_types.extend(symptom.cancer_types.iter().copied());
        urgency_total += u32::from(symptom.urgency_weight);
        details.insert(
            symptom.key.clone(),
            SymptomObservation {
                severity,
                duration: report.duration.clone(),
                urgency: symptom.urgency_weight,
                associated_symptoms: symptom.associated_symptoms.clone(),
            },
        );
        lines.push(format!(
            "Identified symptom: {} with urgency score {}",
            symptom.name, symptom.urgency_weight
        ));
    }

    let urgency_score = if identified.is_empty() {
        0.0
    } else {
        f64::from(urgency_total) / identified.len() as f64
    };
    let possible_cancer_types: Vec<CancerType> = cancer_types.into_iter().collect();

    if identified.is_empty() {
        lines.push("No known symptoms identified in the description".to_string());
    }
    lines.push(format!("Average urgency score: {urgency_score:.2}"));
    lines.push(format!(
        "Possible cancer types based on symptoms: {}",
        join_labels(&possible_cancer_types)
    ));

    StageResult::new(
        SymptomAnalysis {
            identified_symptoms: identified,
            urgency_score,
            requires_immediate_attention: urgency_score >= IMMEDIATE_ATTENTION_URGENCY,
            possible_cancer_types,
            symptom_details: details,
        },
        lines.join(". "),
    )
}

pub(crate) fn join_labels(types: &[CancerType]) -> String {
    if types.is_empty() {
        return "none".to_string();
    }
    types.iter().map(|t| t.label()).collect::<Vec<_>>().join(", ")
}
