//! Five-stage clinical reasoning with an audit trace.
//!
//! Stages run strictly in order, each a pure function of its inputs and the
//! knowledge base:
//! 1. `symptoms`: keyword match, mean urgency, implicated cancer types
//! 2. `risk`: per-cancer factor sums, levels, screening eligibility
//! 3. `diagnosis`: ranked differential with evidence and work-up tests
//! 4. `recommendations`: rule-based action plan
//! 5. `urgency`: overall triage level
//!
//! `engine::ReasoningEngine` threads them together and records one trace
//! entry per stage call.

pub mod diagnosis;
pub mod engine;
pub mod recommendations;
pub mod risk;
pub mod symptoms;
pub mod types;
pub mod urgency;

pub use engine::ReasoningEngine;
pub use types::{
    CancerRisk, DiagnosisEntry, DifferentialDiagnosis, MostLikelyDiagnosis, PipelineOutcome,
    ReasoningExplanation, ReasoningTraceEntry, RecommendationSet, RiskAssessment,
    SymptomAnalysis, SymptomObservation, TraceExport,
};
