use std::sync::Arc;
use std::time::Instant;

use chrono::Utc;
use serde::Serialize;
use serde_json::{json, Value};

use crate::knowledge::KnowledgeBase;
use crate::models::enums::{ReasoningStage, UrgencyLevel};
use crate::models::patient::{PatientAttributes, SymptomReport};

use super::types::{
    stage_confidence, DifferentialDiagnosis, ExportedStep, PipelineOutcome, ReasoningExplanation,
    ReasoningTraceEntry, RecommendationSet, RiskAssessment, StageResult, StepDetail,
    SymptomAnalysis, TraceExport,
};
use super::{diagnosis, recommendations, risk, symptoms, urgency};

/// Five-stage clinical reasoning over one consultation. Stages are pure
/// functions of their inputs and the knowledge base; the engine only adds
/// the audit trace.
pub struct ReasoningEngine {
    knowledge: Arc<KnowledgeBase>,
    trace: Vec<ReasoningTraceEntry>,
}

impl ReasoningEngine {
    pub fn new(knowledge: Arc<KnowledgeBase>) -> Self {
        Self {
            knowledge,
            trace: Vec::new(),
        }
    }

    pub fn knowledge(&self) -> &KnowledgeBase {
        &self.knowledge
    }

    pub fn trace(&self) -> &[ReasoningTraceEntry] {
        &self.trace
    }

    pub fn reset_trace(&mut self) {
        self.trace.clear();
    }

    pub fn analyze_symptoms(&mut self, report: &SymptomReport) -> SymptomAnalysis {
        let result = symptoms::analyze(&self.knowledge, report);
        tracing::debug!(
            identified = result.output.identified_symptoms.len(),
            urgency = result.output.urgency_score,
            immediate = result.output.requires_immediate_attention,
            "Symptom analysis complete"
        );
        self.record(ReasoningStage::SymptomAnalysis, to_value(report), result)
    }

    pub fn assess_risk_factors(&mut self, patient: &PatientAttributes) -> RiskAssessment {
        let result = risk::assess(&self.knowledge, patient);
        tracing::debug!(
            overall = result.output.overall_risk_score,
            cancers = result.output.cancer_specific_risks.len(),
            high_risk = result.output.high_risk_cancers.len(),
            "Risk assessment complete"
        );
        self.record(ReasoningStage::RiskAssessment, to_value(patient), result)
    }

    pub fn generate_differential_diagnosis(
        &mut self,
        symptoms: &SymptomAnalysis,
        risk: &RiskAssessment,
    ) -> DifferentialDiagnosis {
        let result = diagnosis::differentiate(&self.knowledge, symptoms, risk);
        tracing::debug!(
            candidates = result.output.differential_diagnoses.len(),
            immediate = result.output.requires_immediate_evaluation,
            "Differential diagnosis complete"
        );
        let input = json!({
            "symptoms_analysis": to_value(symptoms),
            "risk_assessment": to_value(risk),
        });
        self.record(ReasoningStage::DifferentialDiagnosis, input, result)
    }

    pub fn generate_recommendations(
        &mut self,
        symptoms: &SymptomAnalysis,
        risk: &RiskAssessment,
        diagnosis: &DifferentialDiagnosis,
    ) -> RecommendationSet {
        let result = recommendations::generate(&self.knowledge, symptoms, risk, diagnosis);
        tracing::debug!(
            tests = result.output.diagnostic_tests.len(),
            referrals = result.output.specialist_referrals.len(),
            "Recommendations generated"
        );
        let input = json!({
            "symptoms_analysis": to_value(symptoms),
            "risk_assessment": to_value(risk),
            "differential_diagnosis": to_value(diagnosis),
        });
        self.record(ReasoningStage::RecommendationGeneration, input, result)
    }

    pub fn evaluate_urgency(
        &mut self,
        symptoms: &SymptomAnalysis,
        risk: &RiskAssessment,
        patient: &PatientAttributes,
    ) -> UrgencyLevel {
        let result = urgency::evaluate(symptoms, risk, patient);
        tracing::debug!(level = %result.output, "Urgency evaluated");
        let input = json!({
            "symptoms_analysis": to_value(symptoms),
            "risk_assessment": to_value(risk),
            "patient": to_value(patient),
        });
        self.record(ReasoningStage::UrgencyEvaluation, input, result)
    }

    /// All five stages in order. Appends five trace entries.
    pub fn run_pipeline(
        &mut self,
        report: &SymptomReport,
        patient: &PatientAttributes,
    ) -> PipelineOutcome {
        let start = Instant::now();

        let symptoms = self.analyze_symptoms(report);
        let risk = self.assess_risk_factors(patient);
        let diagnosis = self.generate_differential_diagnosis(&symptoms, &risk);
        let recommendations = self.generate_recommendations(&symptoms, &risk, &diagnosis);
        let urgency = self.evaluate_urgency(&symptoms, &risk, patient);

        tracing::info!(
            urgency = %urgency,
            symptoms = symptoms.identified_symptoms.len(),
            high_risk = risk.high_risk_cancers.len(),
            processing_ms = start.elapsed().as_millis() as u64,
            "Reasoning pipeline complete"
        );

        PipelineOutcome {
            symptoms,
            risk,
            diagnosis,
            recommendations,
            urgency,
        }
    }

    pub fn get_reasoning_explanation(&self) -> ReasoningExplanation {
        let confidence_scores: Vec<f64> = self.trace.iter().map(|t| t.confidence).collect();
        let overall_confidence = if confidence_scores.is_empty() {
            0.0
        } else {
            confidence_scores.iter().sum::<f64>() / confidence_scores.len() as f64
        };
        ReasoningExplanation {
            reasoning_steps: self.trace.len(),
            confidence_scores,
            overall_confidence,
            step_details: self
                .trace
                .iter()
                .map(|t| StepDetail {
                    step: t.stage,
                    reasoning: t.rationale.clone(),
                    confidence: t.confidence,
                    timestamp: t.timestamp,
                })
                .collect(),
        }
    }

    pub fn export_trace(&self) -> TraceExport {
        TraceExport {
            trace_length: self.trace.len(),
            exported_at: Utc::now(),
            steps: self
                .trace
                .iter()
                .map(|t| ExportedStep {
                    step: t.stage,
                    reasoning: t.rationale.clone(),
                    confidence: t.confidence,
                    timestamp: t.timestamp,
                    input_keys: object_keys(&t.input),
                    output_keys: object_keys(&t.output),
                })
                .collect(),
        }
    }

    fn record<T: Serialize>(&mut self, stage: ReasoningStage, input: Value, result: StageResult<T>) -> T {
        self.trace.push(ReasoningTraceEntry {
            stage,
            input,
            rationale: result.rationale,
            output: to_value(&result.output),
            confidence: stage_confidence(stage),
            timestamp: Utc::now(),
        });
        result.output
    }
}

/// Trace snapshots are best-effort; the stage types all serialize cleanly.
fn to_value<T: Serialize>(value: &T) -> Value {
    serde_json::to_value(value).unwrap_or(Value::Null)
}

fn object_keys(value: &Value) -> Vec<String> {
    match value {
        Value::Object(map) => map.keys().cloned().collect(),
        _ => Vec::new(),
    }
}
