//! Longer-horizon care plan built from the answers: preventive care, risk
//! reduction by prevention tier, nutrition, exercise, stress management and
//! a follow-up plan split into immediate, short and long term.

use serde::{Deserialize, Serialize};

use crate::models::enums::{Gender, UrgencyLevel};
use crate::models::patient::PatientAttributes;
use crate::questionnaire::AnswerSet;
use crate::reasoning::PipelineOutcome;

use super::{answered_one_of, screening_gaps, Items};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreventiveCarePlan {
    pub primary_prevention: Vec<String>,
    pub secondary_prevention: Vec<String>,
    pub lifestyle_modifications: Vec<String>,
    pub regular_monitoring: Vec<String>,
}

/// Primary avoids disease, secondary catches it early, tertiary limits
/// recurrence and complications.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskReductionStrategies {
    pub primary_prevention: Vec<String>,
    pub secondary_prevention: Vec<String>,
    pub tertiary_prevention: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NutritionalGuidance {
    pub foods_to_include: Vec<String>,
    pub foods_to_limit: Vec<String>,
    pub supplements: Vec<String>,
    pub meal_planning: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExercisePlan {
    pub cardio: Vec<String>,
    pub strength: Vec<String>,
    pub flexibility: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FollowUpPlan {
    pub immediate: Vec<String>,
    pub short_term: Vec<String>,
    pub long_term: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarePlan {
    pub preventive_care: PreventiveCarePlan,
    pub risk_reduction: RiskReductionStrategies,
    pub nutrition: NutritionalGuidance,
    pub exercise: ExercisePlan,
    pub stress_management: Vec<String>,
    pub follow_up: FollowUpPlan,
}

impl CarePlan {
    /// Every list in display order, named `section.list`.
    pub fn sections(&self) -> [(&'static str, &[String]); 18] {
        [
            ("preventive_care.primary_prevention", self.preventive_care.primary_prevention.as_slice()),
            ("preventive_care.secondary_prevention", self.preventive_care.secondary_prevention.as_slice()),
            ("preventive_care.lifestyle_modifications", self.preventive_care.lifestyle_modifications.as_slice()),
            ("preventive_care.regular_monitoring", self.preventive_care.regular_monitoring.as_slice()),
            ("risk_reduction.primary_prevention", self.risk_reduction.primary_prevention.as_slice()),
            ("risk_reduction.secondary_prevention", self.risk_reduction.secondary_prevention.as_slice()),
            ("risk_reduction.tertiary_prevention", self.risk_reduction.tertiary_prevention.as_slice()),
            ("nutrition.foods_to_include", self.nutrition.foods_to_include.as_slice()),
            ("nutrition.foods_to_limit", self.nutrition.foods_to_limit.as_slice()),
            ("nutrition.supplements", self.nutrition.supplements.as_slice()),
            ("nutrition.meal_planning", self.nutrition.meal_planning.as_slice()),
            ("exercise.cardio", self.exercise.cardio.as_slice()),
            ("exercise.strength", self.exercise.strength.as_slice()),
            ("exercise.flexibility", self.exercise.flexibility.as_slice()),
            ("stress_management", self.stress_management.as_slice()),
            ("follow_up.immediate", self.follow_up.immediate.as_slice()),
            ("follow_up.short_term", self.follow_up.short_term.as_slice()),
            ("follow_up.long_term", self.follow_up.long_term.as_slice()),
        ]
    }

    pub fn total_items(&self) -> usize {
        self.sections().iter().map(|(_, items)| items.len()).sum()
    }

    /// The same plan with every item rewritten by `f`.
    pub fn map_items(&self, f: impl Fn(&str) -> String) -> Self {
        let m = |items: &[String]| items.iter().map(|s| f(s.as_str())).collect::<Vec<_>>();
        Self {
            preventive_care: PreventiveCarePlan {
                primary_prevention: m(&self.preventive_care.primary_prevention),
                secondary_prevention: m(&self.preventive_care.secondary_prevention),
                lifestyle_modifications: m(&self.preventive_care.lifestyle_modifications),
                regular_monitoring: m(&self.preventive_care.regular_monitoring),
            },
            risk_reduction: RiskReductionStrategies {
                primary_prevention: m(&self.risk_reduction.primary_prevention),
                secondary_prevention: m(&self.risk_reduction.secondary_prevention),
                tertiary_prevention: m(&self.risk_reduction.tertiary_prevention),
            },
            nutrition: NutritionalGuidance {
                foods_to_include: m(&self.nutrition.foods_to_include),
                foods_to_limit: m(&self.nutrition.foods_to_limit),
                supplements: m(&self.nutrition.supplements),
                meal_planning: m(&self.nutrition.meal_planning),
            },
            exercise: ExercisePlan {
                cardio: m(&self.exercise.cardio),
                strength: m(&self.exercise.strength),
                flexibility: m(&self.exercise.flexibility),
            },
            stress_management: m(&self.stress_management),
            follow_up: FollowUpPlan {
                immediate: m(&self.follow_up.immediate),
                short_term: m(&self.follow_up.short_term),
                long_term: m(&self.follow_up.long_term),
            },
        }
    }
}

// ── Rule tables ─────────────────────────────────────────────

pub const BASE_PRIMARY_PREVENTION: [&str; 3] = [
    "Maintain a healthy diet",
    "Exercise regularly",
    "Avoid smoking and tobacco use",
];

pub const BASE_SECONDARY_PREVENTION: [&str; 2] =
    ["Get age-appropriate regular screenings", "Annual health checkups"];

pub const PREVENTIVE_LIFESTYLE: [&str; 2] =
    ["Maintain adequate sleep habits", "Manage stress effectively"];

pub const BASE_MONITORING: [&str; 1] = ["Regular follow-ups with healthcare provider"];

const HEPATITIS_B_VACCINE: &str = "Ask your doctor about Hepatitis B vaccination";
const HPV_VACCINE: &str = "Ask your doctor about HPV vaccination";
const CATCH_UP_SCREENING: &str = "Catch up on overdue screenings first";
const BREAST_SELF_EXAM: &str = "Perform a monthly breast self-examination";
const SKIN_SELF_EXAM: &str = "Check your skin monthly for new or changing moles";
const TESTICULAR_SELF_EXAM: &str = "Perform a monthly testicular self-examination";

const FAMILY_HISTORY_STRATEGIES: [&str; 3] = [
    "Consider genetic counseling",
    "Inform healthcare providers about family history",
    "Start screening earlier than recommended age",
];

const OCCUPATIONAL_STRATEGIES: [&str; 3] = [
    "Use protective equipment at workplace",
    "Get regular occupational health checkups",
    "Be aware of workplace hazardous substances",
];

pub const EARLY_DETECTION: &str = "Report new or persistent symptoms to your doctor promptly";
const COMPLETE_TESTS: &str = "Complete the recommended diagnostic tests without delay";
const LIVER_SURVEILLANCE: &str = "Get a liver ultrasound and AFP blood test every 6 months";
const CERVICAL_SURVEILLANCE: &str = "Get Pap smear and HPV co-testing on schedule";

const SURVIVORSHIP_STRATEGIES: [&str; 3] = [
    "Follow your survivorship care plan",
    "Attend every scheduled surveillance visit",
    "Report possible recurrence symptoms early",
];

const CHRONIC_DISEASE_CONTROL: &str = "Keep chronic conditions under regular medical control";

pub const FOODS_TO_INCLUDE: [&str; 5] = [
    "Colorful fruits and vegetables (especially dark greens and orange)",
    "Whole grains (brown rice, oats, quinoa)",
    "Lean proteins (fish, poultry, legumes)",
    "Nuts and seeds",
    "Olive oil and other healthy fats",
];

pub const FOODS_TO_LIMIT: [&str; 5] = [
    "Processed meats (sausages, ham, bacon)",
    "Excessive sugary foods and drinks",
    "Trans fat containing foods",
    "High sodium foods",
    "Fried and fatty foods",
];

const FOOD_FIRST: &str = "Prefer nutrients from food over high-dose supplements";
const ASK_MULTIVITAMIN: &str = "Ask your doctor whether a daily multivitamin is appropriate";
const HERBAL_CAUTION: &str = "Check with your doctor before taking herbal supplements";

pub const BASE_MEAL_PLANNING: [&str; 2] = [
    "Fill half your plate with vegetables and fruits",
    "Plan weekly meals to limit processed food",
];

const COOK_AT_HOME: &str = "Cook at home more often";
const SWAP_ALCOHOL: &str = "Replace alcoholic drinks with water or unsweetened drinks";

const BEGINNER_CARDIO: [&str; 3] = [
    "Start with 15-20 minutes of walking daily",
    "Gradually increase to 30 minutes",
    "Aim for 3-4 days of cardio per week",
];

const BEGINNER_STRENGTH: [&str; 3] = [
    "Light weight training 2 days per week",
    "Bodyweight exercises (push-ups, squats)",
    "Gradually increase intensity",
];

const BUILDING_CARDIO: [&str; 2] = [
    "Aim for at least 150 minutes of moderate exercise per week",
    "Add one or two more sessions each week",
];

const ACTIVE_CARDIO: [&str; 3] = [
    "150 minutes of moderate-intensity exercise per week",
    "Add running, cycling, or swimming",
    "High-intensity intervals 2-3 times per week",
];

const REGULAR_STRENGTH: &str = "Include strength training exercises 2 days per week";
const STRETCHING: &str = "Stretch major muscle groups after each session";

const OLDER_ADULT_FLEXIBILITY: [&str; 2] = [
    "Add balance exercises to prevent falls",
    "Prefer low-impact activities such as walking or swimming",
];

pub const STRESS_MANAGEMENT: [&str; 7] = [
    "Practice 10-15 minutes of meditation or deep breathing daily",
    "Ensure adequate sleep (7-8 hours)",
    "Spend quality time with family and friends",
    "Engage in hobbies and recreational activities",
    "Consider professional counseling if needed",
    "Spend time in nature regularly",
    "Keep a journal for emotional expression",
];

const CRITICAL_IMMEDIATE: [&str; 3] = [
    "Get a medical evaluation today",
    "Prepare a list of symptoms",
    "Know nearest emergency hospital location",
];

const HIGH_IMMEDIATE: [&str; 3] = [
    "See a doctor within 24-48 hours",
    "Prepare a list of symptoms",
    "Know nearest emergency hospital location",
];

const MODERATE_SHORT_TERM: [&str; 3] = [
    "See a doctor within 1-2 weeks",
    "Monthly follow-ups",
    "Monitor symptom changes",
];

pub const LONG_TERM: [&str; 3] = [
    "Annual comprehensive health checkup",
    "Regular cancer screenings",
    "Monitor lifestyle improvements",
];

// ── Sections ────────────────────────────────────────────────

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn preventive_care(patient: &PatientAttributes, answers: &AnswerSet) -> PreventiveCarePlan {
    let mut primary = Items::default();
    primary.extend(BASE_PRIMARY_PREVENTION);
    if answered_one_of(answers, "hepatitis_status", &["never_tested", "negative"]) {
        primary.push(HEPATITIS_B_VACCINE);
    }
    if answered_one_of(answers, "age_group", &["under_30", "30_40"])
        && answered_one_of(answers, "hpv_status", &["never_tested", "negative"])
    {
        primary.push(HPV_VACCINE);
    }

    let mut secondary = Items::default();
    if !screening_gaps(answers).is_empty() {
        secondary.push(CATCH_UP_SCREENING);
    }
    secondary.extend(BASE_SECONDARY_PREVENTION);

    let mut monitoring = Items::default();
    monitoring.extend(BASE_MONITORING);
    match patient.gender {
        Gender::Female => monitoring.push(BREAST_SELF_EXAM),
        Gender::Male if answered_one_of(answers, "age_group", &["under_30", "30_40"]) => {
            monitoring.push(TESTICULAR_SELF_EXAM)
        }
        _ => {}
    }
    if patient.excessive_sun_exposure || answers.is_yes("skin_changes") {
        monitoring.push(SKIN_SELF_EXAM);
    }

    PreventiveCarePlan {
        primary_prevention: primary.into_vec(),
        secondary_prevention: secondary.into_vec(),
        lifestyle_modifications: strings(&PREVENTIVE_LIFESTYLE),
        regular_monitoring: monitoring.into_vec(),
    }
}

fn risk_reduction(outcome: &PipelineOutcome, patient: &PatientAttributes) -> RiskReductionStrategies {
    let mut primary = Items::default();
    if patient.family_history_cancer {
        primary.extend(FAMILY_HISTORY_STRATEGIES);
    }
    if patient.occupational_exposure {
        primary.extend(OCCUPATIONAL_STRATEGIES);
    }

    let mut secondary = Items::default();
    secondary.push(EARLY_DETECTION);
    if outcome.urgency >= UrgencyLevel::High || patient.has_red_flag() {
        secondary.push(COMPLETE_TESTS);
    }
    if patient.hepatitis_positive {
        secondary.push(LIVER_SURVEILLANCE);
    }
    if patient.hpv_positive {
        secondary.push(CERVICAL_SURVEILLANCE);
    }

    let mut tertiary = Items::default();
    if patient.cancer_history {
        tertiary.extend(SURVIVORSHIP_STRATEGIES);
    }
    if patient.chronic_diseases {
        tertiary.push(CHRONIC_DISEASE_CONTROL);
    }

    RiskReductionStrategies {
        primary_prevention: primary.into_vec(),
        secondary_prevention: secondary.into_vec(),
        tertiary_prevention: tertiary.into_vec(),
    }
}

fn nutrition(patient: &PatientAttributes, answers: &AnswerSet) -> NutritionalGuidance {
    let poor_diet = answered_one_of(answers, "diet_quality", &["poor", "very_poor"]);

    let mut supplements = Items::default();
    supplements.push(FOOD_FIRST);
    if poor_diet {
        supplements.push(ASK_MULTIVITAMIN);
    }
    if patient.hepatitis_positive || patient.heavy_drinking {
        supplements.push(HERBAL_CAUTION);
    }

    let mut meals = Items::default();
    meals.extend(BASE_MEAL_PLANNING);
    if poor_diet {
        meals.push(COOK_AT_HOME);
    }
    if patient.heavy_drinking {
        meals.push(SWAP_ALCOHOL);
    }

    NutritionalGuidance {
        foods_to_include: strings(&FOODS_TO_INCLUDE),
        foods_to_limit: strings(&FOODS_TO_LIMIT),
        supplements: supplements.into_vec(),
        meal_planning: meals.into_vec(),
    }
}

/// Keyed on exercise frequency, then trimmed for adults over 60.
/// An unanswered frequency is planned as a beginner.
fn exercise(answers: &AnswerSet) -> ExercisePlan {
    let over_60 = answers.choice("age_group") == Some("over_60");

    let mut cardio = Items::default();
    let mut strength = Items::default();
    match answers.choice("exercise_frequency") {
        Some("daily" | "3_4_weekly") => {
            let intense = |s: &str| over_60 && s.starts_with("High-intensity");
            cardio.extend(ACTIVE_CARDIO.iter().filter(|s| !intense(s)).copied());
            strength.push(REGULAR_STRENGTH);
        }
        Some("1_2_weekly") => {
            cardio.extend(BUILDING_CARDIO);
            strength.push(REGULAR_STRENGTH);
        }
        _ => {
            cardio.extend(BEGINNER_CARDIO);
            strength.extend(BEGINNER_STRENGTH);
        }
    }

    let mut flexibility = Items::default();
    flexibility.push(STRETCHING);
    if over_60 {
        flexibility.extend(OLDER_ADULT_FLEXIBILITY);
    }

    ExercisePlan {
        cardio: cardio.into_vec(),
        strength: strength.into_vec(),
        flexibility: flexibility.into_vec(),
    }
}

fn follow_up(urgency: UrgencyLevel) -> FollowUpPlan {
    FollowUpPlan {
        immediate: match urgency {
            UrgencyLevel::Critical => strings(&CRITICAL_IMMEDIATE),
            UrgencyLevel::High => strings(&HIGH_IMMEDIATE),
            _ => Vec::new(),
        },
        short_term: match urgency {
            UrgencyLevel::Moderate => strings(&MODERATE_SHORT_TERM),
            _ => Vec::new(),
        },
        long_term: strings(&LONG_TERM),
    }
}

/// Assemble the care plan. Pure: the same answers always give the same plan.
pub fn care_plan(outcome: &PipelineOutcome, patient: &PatientAttributes, answers: &AnswerSet) -> CarePlan {
    let plan = CarePlan {
        preventive_care: preventive_care(patient, answers),
        risk_reduction: risk_reduction(outcome, patient),
        nutrition: nutrition(patient, answers),
        exercise: exercise(answers),
        stress_management: strings(&STRESS_MANAGEMENT),
        follow_up: follow_up(outcome.urgency),
    };
    tracing::debug!(items = plan.total_items(), urgency = outcome.urgency.as_str(), "Care plan built");
    plan
}
