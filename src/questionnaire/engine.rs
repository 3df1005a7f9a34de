//! Visibility and progress. Everything here is recomputed from the answer
//! set on each call; no visibility state is cached between calls.

use serde::{Deserialize, Serialize};

use super::catalog::QuestionCatalog;
use super::types::{AnswerSet, QuestionDefinition};

/// A question is shown iff every constraint is satisfied. An unanswered
/// prerequisite fails its constraint.
pub fn is_visible(question: &QuestionDefinition, answers: &AnswerSet) -> bool {
    question.conditions.iter().all(|(field, allowed)| {
        answers
            .value(field)
            .is_some_and(|v| allowed.contains(&*v.canonical()))
    })
}

/// Applicable questions in catalog order.
pub fn applicable_questions<'c>(
    catalog: &'c QuestionCatalog,
    answers: &AnswerSet,
) -> Vec<&'c QuestionDefinition> {
    catalog
        .questions()
        .iter()
        .filter(|q| is_visible(q, answers))
        .collect()
}

/// The question at `cursor` in the applicable list, or `None` when terminal.
pub fn next_question<'c>(
    catalog: &'c QuestionCatalog,
    answers: &AnswerSet,
    cursor: usize,
) -> Option<&'c QuestionDefinition> {
    applicable_questions(catalog, answers).get(cursor).copied()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Progress {
    /// 1-based number of the question being asked.
    pub current_question: usize,
    pub total_questions: usize,
    pub percentage: f64,
    pub remaining: usize,
}

pub fn progress(catalog: &QuestionCatalog, answers: &AnswerSet, cursor: usize) -> Progress {
    let total = applicable_questions(catalog, answers).len();
    let completed = cursor.min(total);
    let percentage = if total == 0 {
        100.0
    } else {
        completed as f64 / total as f64 * 100.0
    };
    Progress {
        current_question: completed + 1,
        total_questions: total,
        percentage,
        remaining: total - completed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::questionnaire::types::{AnswerType, AnswerValue};

    fn choose(answers: &mut AnswerSet, id: &str, value: &str) {
        answers.set(id, AnswerValue::Choice(value.into()), AnswerType::SingleChoice);
    }

    fn ids<'a>(qs: &[&'a QuestionDefinition]) -> Vec<&'a str> {
        qs.iter().map(|q| q.id.as_str()).collect()
    }

    #[test]
    fn unanswered_prerequisite_hides_gated_questions() {
        let catalog = QuestionCatalog::standard();
        let applicable = applicable_questions(&catalog, &AnswerSet::new());
        let ids = ids(&applicable);
        assert!(!ids.contains(&"breast_changes"));
        assert!(!ids.contains(&"testicular_lumps"));
        assert!(!ids.contains(&"colonoscopy_test"));
        assert_eq!(applicable.len(), 22);
    }

    #[test]
    fn gender_change_recomputes_visibility() {
        let catalog = QuestionCatalog::standard();
        let mut answers = AnswerSet::new();
        choose(&mut answers, "age_group", "51_60");
        choose(&mut answers, "gender", "male");

        let male = ids(&applicable_questions(&catalog, &answers));
        for female_only in ["breast_changes", "unusual_bleeding", "pap_smear_test", "mammogram_test", "hpv_status"] {
            assert!(!male.contains(&female_only), "{female_only}");
        }
        assert!(male.contains(&"prostate_screening"));

        choose(&mut answers, "gender", "female");
        let female = ids(&applicable_questions(&catalog, &answers));
        for female_only in ["breast_changes", "unusual_bleeding", "pap_smear_test", "mammogram_test", "hpv_status"] {
            assert!(female.contains(&female_only), "{female_only}");
        }
        for male_only in ["prostate_symptoms", "prostate_screening", "testicular_lumps"] {
            assert!(!female.contains(&male_only), "{male_only}");
        }
    }

    #[test]
    fn age_gates_compose_with_gender() {
        let catalog = QuestionCatalog::standard();
        let mut answers = AnswerSet::new();
        choose(&mut answers, "gender", "female");
        choose(&mut answers, "age_group", "30_40");
        let list = ids(&applicable_questions(&catalog, &answers));
        assert!(list.contains(&"pap_smear_test"));
        assert!(!list.contains(&"mammogram_test"));
        assert!(!list.contains(&"colonoscopy_test"));
    }

    #[test]
    fn applicable_counts_by_profile() {
        let catalog = QuestionCatalog::standard();
        let cases = [
            ("under_30", "male", 23),
            ("over_60", "male", 26),
            ("under_30", "female", 25),
            ("51_60", "female", 28),
            ("under_30", "other", 22),
        ];
        for (age, gender, expected) in cases {
            let mut answers = AnswerSet::new();
            choose(&mut answers, "age_group", age);
            choose(&mut answers, "gender", gender);
            assert_eq!(applicable_questions(&catalog, &answers).len(), expected, "{age}/{gender}");
        }
    }

    #[test]
    fn recomputation_is_stable() {
        let catalog = QuestionCatalog::standard();
        let mut answers = AnswerSet::new();
        choose(&mut answers, "age_group", "41_50");
        choose(&mut answers, "gender", "female");
        assert_eq!(
            applicable_questions(&catalog, &answers),
            applicable_questions(&catalog, &answers)
        );
    }

    #[test]
    fn next_question_terminal_past_end() {
        let catalog = QuestionCatalog::standard();
        let answers = AnswerSet::new();
        assert_eq!(next_question(&catalog, &answers, 0).unwrap().id, "age_group");
        assert!(next_question(&catalog, &answers, 22).is_none());
    }

    #[test]
    fn progress_percentages() {
        let catalog = QuestionCatalog::standard();
        let answers = AnswerSet::new();
        let p = progress(&catalog, &answers, 11);
        assert_eq!(p.current_question, 12);
        assert_eq!(p.total_questions, 22);
        assert_eq!(p.remaining, 11);
        assert!((p.percentage - 50.0).abs() < 1e-9);
    }

    #[test]
    fn empty_catalog_progress_is_complete() {
        let catalog = QuestionCatalog::new(Vec::new()).unwrap();
        let p = progress(&catalog, &AnswerSet::new(), 0);
        assert_eq!(p.total_questions, 0);
        assert_eq!(p.percentage, 100.0);
        assert_eq!(p.remaining, 0);
    }
}
