//! The fixed onboarding questionnaire.
//!
//! Defined once, never mutated at runtime. Step order matters: the flow walks
//! this list linearly.

use serde::Serialize;

/// How a question is answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionKind {
    /// Free-text fields (the name step).
    Text,
    /// Exactly one option.
    Single,
    /// One or more options, toggled.
    Multi,
}

/// One selectable option of a choice question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuizOption {
    pub value: &'static str,
    pub label: &'static str,
}

/// One step of the questionnaire.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct QuizQuestion {
    /// Answer key, also the preference field this step feeds.
    pub key: &'static str,
    pub prompt: &'static str,
    pub kind: QuestionKind,
    pub options: &'static [QuizOption],
}

const HOME_TYPE_OPTIONS: &[QuizOption] = &[
    QuizOption { value: "house", label: "House" },
    QuizOption { value: "apartment", label: "Apartment" },
    QuizOption { value: "condo", label: "Condo" },
    QuizOption { value: "other", label: "Other" },
];

const APPLIANCE_OPTIONS: &[QuizOption] = &[
    QuizOption { value: "washer", label: "Washing Machine" },
    QuizOption { value: "dryer", label: "Dryer" },
    QuizOption { value: "dishwasher", label: "Dishwasher" },
    QuizOption { value: "ev_charger", label: "EV Charger" },
];

const RENEWABLE_OPTIONS: &[QuizOption] = &[
    QuizOption { value: "solar", label: "Solar Panels" },
    QuizOption { value: "home_battery", label: "Home Battery" },
    QuizOption { value: "none", label: "None" },
];

const USAGE_PATTERN_OPTIONS: &[QuizOption] = &[
    QuizOption { value: "morning", label: "Morning Heavy (5am-9am)" },
    QuizOption { value: "daytime", label: "Daytime (9am-5pm)" },
    QuizOption { value: "evening", label: "Evening Heavy (5pm-10pm)" },
    QuizOption { value: "night", label: "Night (10pm-5am)" },
];

const INTEREST_OPTIONS: &[QuizOption] = &[
    QuizOption { value: "scheduling", label: "Smart Scheduling" },
    QuizOption { value: "analysis", label: "Usage Analysis" },
    QuizOption { value: "community", label: "Community Sharing" },
    QuizOption { value: "savings", label: "Cost Savings" },
];

const QUESTIONS: &[QuizQuestion] = &[
    QuizQuestion {
        key: "name",
        prompt: "Welcome! Let's get to know you better",
        kind: QuestionKind::Text,
        options: &[],
    },
    QuizQuestion {
        key: "homeType",
        prompt: "What type of home do you live in?",
        kind: QuestionKind::Single,
        options: HOME_TYPE_OPTIONS,
    },
    QuizQuestion {
        key: "appliances",
        prompt: "Which major appliances do you own?",
        kind: QuestionKind::Multi,
        options: APPLIANCE_OPTIONS,
    },
    QuizQuestion {
        key: "renewables",
        prompt: "Do you have any renewable energy sources?",
        kind: QuestionKind::Multi,
        options: RENEWABLE_OPTIONS,
    },
    QuizQuestion {
        key: "usagePattern",
        prompt: "What is your typical energy usage pattern?",
        kind: QuestionKind::Multi,
        options: USAGE_PATTERN_OPTIONS,
    },
    QuizQuestion {
        key: "interests",
        prompt: "Which energy-saving features interest you?",
        kind: QuestionKind::Multi,
        options: INTEREST_OPTIONS,
    },
];

/// The ordered questionnaire.
pub fn questions() -> &'static [QuizQuestion] {
    QUESTIONS
}
