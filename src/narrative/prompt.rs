use std::collections::BTreeSet;
use std::fmt::Write;

use crate::models::enums::Locale;
use crate::reasoning::{PipelineOutcome, ReasoningExplanation};

const SYSTEM_PROMPT_EN: &str = "You are an experienced oncologist explaining a preliminary cancer risk \
assessment to a patient. Use empathetic, clear language and base every statement on the analysis you \
are given. Never contradict the urgency level, emergency signs or screening schedule in the analysis. \
Always state that this is a preliminary assessment and that a qualified oncologist must be consulted \
for diagnosis and treatment planning.";

const SYSTEM_PROMPT_BN: &str = "আপনি একজন অভিজ্ঞ ক্যান্সার বিশেষজ্ঞ যিনি রোগীকে বাংলায় একটি প্রাথমিক \
ক্যান্সার ঝুঁকি মূল্যায়ন ব্যাখ্যা করছেন। সহানুভূতিশীল ও স্পষ্ট ভাষা ব্যবহার করুন এবং প্রদত্ত বিশ্লেষণের \
উপর ভিত্তি করে কথা বলুন। বিশ্লেষণের জরুরি মাত্রা, জরুরি লক্ষণ বা স্ক্রিনিং সময়সূচির বিরোধিতা করবেন না। \
সর্বদা উল্লেখ করুন যে এটি প্রাথমিক মূল্যায়ন এবং চূড়ান্ত রোগ নির্ণয়ের জন্য একজন যোগ্য অনকোলজিস্টের \
পরামর্শ প্রয়োজন।";

pub fn system_prompt(locale: Locale) -> &'static str {
    match locale {
        Locale::English => SYSTEM_PROMPT_EN,
        Locale::Bengali => SYSTEM_PROMPT_BN,
    }
}

fn language_name(locale: Locale) -> &'static str {
    match locale {
        Locale::English => "English",
        Locale::Bengali => "Bengali",
    }
}

/// Step-numbered trace followed by the stage outputs as JSON and the reply layout.
pub fn user_prompt(outcome: &PipelineOutcome, explanation: &ReasoningExplanation, locale: Locale) -> String {
    let mut prompt = String::from("REASONING TRACE:\n\n");
    for (i, step) in explanation.step_details.iter().enumerate() {
        let _ = writeln!(prompt, "Step {}: {}", i + 1, step.step.title());
        let _ = writeln!(prompt, "Reasoning: {}", step.reasoning);
        let _ = writeln!(prompt, "Confidence: {:.2}\n", step.confidence);
    }

    let related: BTreeSet<&str> = outcome
        .symptoms
        .symptom_details
        .values()
        .flat_map(|d| d.associated_symptoms.iter().map(String::as_str))
        .collect();
    if !related.is_empty() {
        let related: Vec<&str> = related.into_iter().collect();
        let _ = writeln!(prompt, "RELATED SYMPTOMS TO ASK ABOUT: {}\n", related.join(", "));
    }

    let analysis = serde_json::to_string_pretty(outcome).unwrap_or_default();
    let _ = write!(
        prompt,
        "ANALYSIS RESULTS:\n{analysis}\n\n\
         Explain the findings, the risk assessment, the recommended next steps, when to seek \
         immediate care, and preventive measures. Respond in {} using exactly this layout:\n\n\
         SUMMARY:\n<two to four short paragraphs>\n\n\
         KEY POINTS:\n- <point>\n- <point>\n",
        language_name(locale)
    );
    prompt
}
