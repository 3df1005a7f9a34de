use crate::messages;
use crate::models::enums::Locale;
use crate::reasoning::PipelineOutcome;

use super::{Narrative, NarrativeSource};

const MAX_TEST_POINTS: usize = 3;

struct Template {
    urgency: &'static str,
    symptoms: &'static str,
    no_symptoms: &'static str,
    consideration: &'static str,
    disclaimer: &'static str,
    test_prefix: &'static str,
}

const ENGLISH: Template = Template {
    urgency: "Preliminary urgency level",
    symptoms: "Symptoms identified from your answers",
    no_symptoms: "No specific warning symptoms were identified from your answers.",
    consideration: "The strongest consideration in this analysis is",
    disclaimer: "This is a preliminary assessment, not a diagnosis. Please consult a qualified oncologist \
for diagnosis and treatment planning.",
    test_prefix: "Recommended test",
};

const BENGALI: Template = Template {
    urgency: "প্রাথমিক জরুরি মাত্রা",
    symptoms: "আপনার উত্তর থেকে চিহ্নিত লক্ষণ",
    no_symptoms: "আপনার উত্তর থেকে কোনো নির্দিষ্ট সতর্কতামূলক লক্ষণ পাওয়া যায়নি।",
    consideration: "এই বিশ্লেষণে সবচেয়ে গুরুত্বপূর্ণ বিবেচনা",
    disclaimer: "এটি একটি প্রাথমিক মূল্যায়ন, রোগ নির্ণয় নয়। রোগ নির্ণয় ও চিকিৎসা পরিকল্পনার জন্য \
একজন যোগ্য অনকোলজিস্টের পরামর্শ নিন।",
    test_prefix: "প্রস্তাবিত পরীক্ষা",
};

fn template(locale: Locale) -> &'static Template {
    match locale {
        Locale::English => &ENGLISH,
        Locale::Bengali => &BENGALI,
    }
}

/// Template narrative built only from the rule-based results.
pub fn fallback_narrative(outcome: &PipelineOutcome, locale: Locale) -> Narrative {
    let t = template(locale);
    let mut paragraphs = vec![format!(
        "{}: {}.",
        t.urgency,
        messages::urgency_label(outcome.urgency, locale)
    )];

    let symptoms = &outcome.symptoms.identified_symptoms;
    if symptoms.is_empty() {
        paragraphs.push(t.no_symptoms.to_string());
    } else {
        let names: Vec<&str> = symptoms.iter().map(|s| messages::translate(s, locale)).collect();
        paragraphs.push(format!("{}: {}.", t.symptoms, names.join(", ")));
    }

    if let Some(top) = outcome.diagnosis.most_likely_diagnosis {
        paragraphs.push(format!(
            "{} {} ({:.2}).",
            t.consideration,
            messages::cancer_label(top.cancer_type, locale),
            top.probability
        ));
    }
    paragraphs.push(t.disclaimer.to_string());

    let recs = &outcome.recommendations;
    let mut key_points = messages::translate_all(&recs.immediate_actions, locale);
    key_points.extend(
        recs.diagnostic_tests
            .iter()
            .take(MAX_TEST_POINTS)
            .map(|test| format!("{}: {}", t.test_prefix, messages::translate(test, locale))),
    );
    key_points.extend(messages::translate_all(&recs.follow_up_schedule, locale).into_iter().take(1));

    Narrative {
        summary: paragraphs.join("\n\n"),
        key_points,
        source: NarrativeSource::Fallback,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::knowledge::KnowledgeBase;
    use crate::models::patient::{PatientAttributes, SymptomReport};
    use crate::reasoning::ReasoningEngine;

    fn run(description: &str) -> PipelineOutcome {
        let mut engine = ReasoningEngine::new(Arc::new(KnowledgeBase::standard()));
        engine.run_pipeline(&SymptomReport::new(description, 5, "weeks"), &PatientAttributes::default())
    }

    #[test]
    fn english_fallback_mentions_findings() {
        let n = fallback_narrative(&run("persistent cough"), Locale::English);
        assert_eq!(n.source, NarrativeSource::Fallback);
        assert!(n.summary.starts_with("Preliminary urgency level:"));
        assert!(n.summary.contains("Persistent Cough"));
        assert!(n.summary.contains("Lung Cancer"));
        assert!(n.summary.contains("qualified oncologist"));
        assert!(n.key_points.iter().any(|p| p.starts_with("Recommended test: ")));
    }

    #[test]
    fn no_symptoms_still_has_summary() {
        let n = fallback_narrative(&run(""), Locale::English);
        assert!(n.summary.contains("No specific warning symptoms"));
        assert!(!n.key_points.is_empty());
    }

    #[test]
    fn bengali_fallback_is_translated() {
        let n = fallback_narrative(&run("blood in sputum"), Locale::Bengali);
        assert!(n.summary.contains("জরুরি"));
        assert!(n.key_points.contains(&"অবিলম্বে চিকিৎসা সহায়তা নিন".to_string()));
        assert!(!n.summary.contains("qualified oncologist"));
    }
}
