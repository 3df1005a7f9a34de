use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::enums::{CancerType, ConfidenceLabel, ReasoningStage, RiskLevel, UrgencyLevel};

// ═══════════════════════════════════════════
// Stage outputs
// ═══════════════════════════════════════════

/// Per-analysis observation of one matched symptom.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymptomObservation {
    pub severity: u8,
    pub duration: String,
    pub urgency: u8,
    /// Related symptom keys worth asking about next.
    pub associated_symptoms: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SymptomAnalysis {
    /// Display names in knowledge-base order.
    pub identified_symptoms: Vec<String>,
    /// Mean static urgency of matched symptoms; 0 when none matched.
    pub urgency_score: f64,
    pub possible_cancer_types: Vec<CancerType>,
    pub requires_immediate_attention: bool,
    pub symptom_details: BTreeMap<String, SymptomObservation>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CancerRisk {
    pub risk_score: f64,
    pub risk_level: RiskLevel,
    pub contributing_factors: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub overall_risk_score: f64,
    /// Only cancers with a score above zero.
    pub cancer_specific_risks: BTreeMap<CancerType, CancerRisk>,
    pub high_risk_cancers: Vec<CancerType>,
    pub recommended_screenings: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagnosisEntry {
    pub rank: usize,
    pub cancer_type: CancerType,
    /// Raw sum of symptom and risk contributions. May exceed 1.0.
    pub probability: f64,
    pub confidence: ConfidenceLabel,
    pub supporting_evidence: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MostLikelyDiagnosis {
    pub cancer_type: CancerType,
    pub probability: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DifferentialDiagnosis {
    pub differential_diagnoses: Vec<DiagnosisEntry>,
    pub most_likely_diagnosis: Option<MostLikelyDiagnosis>,
    pub requires_immediate_evaluation: bool,
    pub recommended_tests: Vec<String>,
}

/// Rule-based recommendations from stage 4.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationSet {
    pub immediate_actions: Vec<String>,
    pub diagnostic_tests: Vec<String>,
    pub screening_recommendations: Vec<String>,
    pub lifestyle_modifications: Vec<String>,
    pub follow_up_schedule: Vec<String>,
    pub specialist_referrals: Vec<String>,
    pub emergency_signs: Vec<String>,
}

/// Everything the five stages produced, in order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineOutcome {
    pub symptoms: SymptomAnalysis,
    pub risk: RiskAssessment,
    pub diagnosis: DifferentialDiagnosis,
    pub recommendations: RecommendationSet,
    pub urgency: UrgencyLevel,
}

/// A stage result plus the rationale recorded in the trace.
#[derive(Debug, Clone, PartialEq)]
pub struct StageResult<T> {
    pub output: T,
    pub rationale: String,
}

impl<T> StageResult<T> {
    pub fn new(output: T, rationale: String) -> Self {
        Self { output, rationale }
    }
}

/// Fixed confidence recorded for each stage.
pub fn stage_confidence(stage: ReasoningStage) -> f64 {
    match stage {
        ReasoningStage::SymptomAnalysis => 0.80,
        ReasoningStage::RiskAssessment => 0.85,
        ReasoningStage::DifferentialDiagnosis => 0.75,
        ReasoningStage::RecommendationGeneration => 0.90,
        ReasoningStage::UrgencyEvaluation => 0.85,
    }
}

// ═══════════════════════════════════════════
// Trace
// ═══════════════════════════════════════════

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReasoningTraceEntry {
    pub stage: ReasoningStage,
    pub input: serde_json::Value,
    pub rationale: String,
    pub output: serde_json::Value,
    pub confidence: f64,
    pub timestamp: DateTime<Utc>,
}

impl ReasoningTraceEntry {
    /// Structural equality ignoring the timestamp.
    pub fn same_outcome(&self, other: &Self) -> bool {
        self.stage == other.stage
            && self.input == other.input
            && self.rationale == other.rationale
            && self.output == other.output
            && self.confidence == other.confidence
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepDetail {
    pub step: ReasoningStage,
    pub reasoning: String,
    pub confidence: f64,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReasoningExplanation {
    pub reasoning_steps: usize,
    pub confidence_scores: Vec<f64>,
    /// Mean of the step confidences; 0 for an empty trace.
    pub overall_confidence: f64,
    pub step_details: Vec<StepDetail>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportedStep {
    pub step: ReasoningStage,
    pub reasoning: String,
    pub confidence: f64,
    pub timestamp: DateTime<Utc>,
    pub input_keys: Vec<String>,
    pub output_keys: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraceExport {
    pub trace_length: usize,
    pub exported_at: DateTime<Utc>,
    pub steps: Vec<ExportedStep>,
}
