//! Onboarding questionnaire — static quiz definition and the flow state machine.

mod flow;
pub mod quiz;

pub use flow::{AdvanceOutcome, Answer, OnboardingAnswers, OnboardingFlow};
