//! Onboarding flow — a linear questionnaire state machine.
//!
//! Walks the fixed quiz one step at a time, accumulating answers. Validation
//! gates every forward move; going back is always allowed and never touches
//! the answers. Completing the final step merges the answers into the
//! preference record, flips the onboarding flag, and forwards the user home.

use std::collections::HashMap;

use serde::Serialize;
use tracing::info;

use crate::auth::NavTarget;
use crate::error::{OnboardingError, ValidationError};
use crate::latency::CommitTimer;
use crate::prefs::{HomeType, PreferenceRecord, PreferenceStore, storage_keys};

use super::quiz::{self, QuestionKind, QuizQuestion};

/// An accumulated answer for one question key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Answer {
    Single(String),
    Multi(Vec<String>),
}

/// Answers collected so far, keyed by question key. Names live in their own
/// fields (the name step has two inputs behind one key).
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OnboardingAnswers {
    pub first_name: String,
    pub last_name: String,
    #[serde(flatten)]
    selections: HashMap<String, Answer>,
}

impl OnboardingAnswers {
    fn single(&self, key: &str) -> Option<&str> {
        match self.selections.get(key) {
            Some(Answer::Single(value)) => Some(value),
            _ => None,
        }
    }

    fn multi(&self, key: &str) -> &[String] {
        match self.selections.get(key) {
            Some(Answer::Multi(values)) => values,
            _ => &[],
        }
    }

    fn set_single(&mut self, key: &str, value: String) {
        self.selections.insert(key.to_string(), Answer::Single(value));
    }

    /// Toggle membership: present values are removed, absent values appended.
    fn toggle_multi(&mut self, key: &str, value: &str) {
        let entry = self
            .selections
            .entry(key.to_string())
            .or_insert_with(|| Answer::Multi(Vec::new()));
        if let Answer::Multi(values) = entry {
            if let Some(pos) = values.iter().position(|v| v == value) {
                values.remove(pos);
            } else {
                values.push(value.to_string());
            }
        }
    }

    /// Convert the answers into a preference patch. Only answered keys are
    /// set, so the merge leaves unrelated stored fields alone.
    fn to_patch(&self) -> PreferenceRecord {
        let multi = |key: &str| {
            let values = self.multi(key);
            (!values.is_empty()).then(|| values.to_vec())
        };

        PreferenceRecord {
            first_name: (!self.first_name.is_empty()).then(|| self.first_name.clone()),
            last_name: (!self.last_name.is_empty()).then(|| self.last_name.clone()),
            home_type: self.single("homeType").and_then(|v| v.parse::<HomeType>().ok()),
            appliances: multi("appliances"),
            renewables: multi("renewables"),
            usage_pattern: multi("usagePattern"),
            interests: multi("interests"),
            ..Default::default()
        }
    }
}

/// Result of a successful Advance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdvanceOutcome {
    /// Moved to the next step.
    Advanced { step: usize },
    /// Final step passed validation; answers were persisted and the user is
    /// forwarded home.
    Completed { target: NavTarget, message: String },
}

/// The questionnaire state machine.
///
/// Holds the draft answers locally; nothing is written to the preference
/// store until the final Advance succeeds.
#[derive(Debug, Default)]
pub struct OnboardingFlow {
    step: usize,
    answers: OnboardingAnswers,
    completed: bool,
}

impl OnboardingFlow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index of the current step (0-based).
    pub fn step(&self) -> usize {
        self.step
    }

    /// Total number of steps.
    pub fn total_steps(&self) -> usize {
        quiz::questions().len()
    }

    /// The current question.
    pub fn current_question(&self) -> &'static QuizQuestion {
        &quiz::questions()[self.step]
    }

    /// Whether the flow has finished (observed externally via the flag; kept
    /// here only to refuse duplicate completion).
    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// Answers accumulated so far.
    pub fn answers(&self) -> &OnboardingAnswers {
        &self.answers
    }

    /// Reset to the first step with empty answers (fresh signup).
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Set the name fields (only valid on the text step).
    pub fn set_name(&mut self, first: &str, last: &str) -> Result<(), OnboardingError> {
        self.ensure_active()?;
        if self.current_question().kind != QuestionKind::Text {
            return Err(OnboardingError::WrongStepKind);
        }
        self.answers.first_name = first.trim().to_string();
        self.answers.last_name = last.trim().to_string();
        Ok(())
    }

    /// Select the answer for a single-select step, replacing any prior value.
    pub fn select(&mut self, value: &str) -> Result<(), OnboardingError> {
        self.ensure_active()?;
        let question = self.current_question();
        if question.kind != QuestionKind::Single {
            return Err(OnboardingError::WrongStepKind);
        }
        self.answers.set_single(question.key, value.to_string());
        Ok(())
    }

    /// Toggle a value on a multi-select step.
    pub fn toggle(&mut self, value: &str) -> Result<(), OnboardingError> {
        self.ensure_active()?;
        let question = self.current_question();
        if question.kind != QuestionKind::Multi {
            return Err(OnboardingError::WrongStepKind);
        }
        self.answers.toggle_multi(question.key, value);
        Ok(())
    }

    /// Move back one step. No validation, answers untouched, no-op at step 0.
    pub fn retreat(&mut self) -> Result<usize, OnboardingError> {
        self.ensure_active()?;
        if self.step > 0 {
            self.step -= 1;
        }
        Ok(self.step)
    }

    /// Validate the current step and move forward.
    ///
    /// On the last step, waits out the simulated delay, merges the answers
    /// into the stored record (patch semantics), sets the onboarding flag,
    /// and reports the home screen as the next destination. A completed flow
    /// refuses further advances, so the merge is applied exactly once.
    pub async fn advance(
        &mut self,
        store: &PreferenceStore,
        timer: &CommitTimer,
    ) -> Result<AdvanceOutcome, OnboardingError> {
        self.ensure_active()?;
        self.validate_current()?;

        if self.step + 1 < self.total_steps() {
            self.step += 1;
            return Ok(AdvanceOutcome::Advanced { step: self.step });
        }

        timer.pause().await;
        store.patch(self.answers.to_patch()).await?;
        store
            .set_flag(storage_keys::HAS_COMPLETED_ONBOARDING, true)
            .await?;
        self.completed = true;

        let first_name = self.answers.first_name.clone();
        info!(step = self.step, "Onboarding completed");

        Ok(AdvanceOutcome::Completed {
            target: NavTarget::Home,
            message: format!("Welcome to GridLocked, {first_name}!"),
        })
    }

    fn ensure_active(&self) -> Result<(), OnboardingError> {
        if self.completed {
            Err(OnboardingError::AlreadyCompleted)
        } else {
            Ok(())
        }
    }

    fn validate_current(&self) -> Result<(), ValidationError> {
        let question = self.current_question();
        match question.kind {
            QuestionKind::Text => {
                if self.answers.first_name.is_empty() || self.answers.last_name.is_empty() {
                    return Err(ValidationError::NameRequired);
                }
            }
            QuestionKind::Single => {
                if self.answers.single(question.key).is_none() {
                    return Err(ValidationError::SelectionRequired);
                }
            }
            QuestionKind::Multi => {
                if self.answers.multi(question.key).is_empty() {
                    return Err(ValidationError::AtLeastOneRequired);
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::store::MemoryStorage;

    fn store() -> PreferenceStore {
        PreferenceStore::new(Arc::new(MemoryStorage::new()))
    }

    fn timer() -> CommitTimer {
        CommitTimer::immediate()
    }

    /// Drive a flow through all six steps with representative answers.
    async fn complete_flow(flow: &mut OnboardingFlow, store: &PreferenceStore) -> AdvanceOutcome {
        flow.set_name("Ana", "Lee").unwrap();
        flow.advance(store, &timer()).await.unwrap();

        flow.select("condo").unwrap();
        flow.advance(store, &timer()).await.unwrap();

        flow.toggle("washer").unwrap();
        flow.advance(store, &timer()).await.unwrap();

        flow.toggle("solar").unwrap();
        flow.advance(store, &timer()).await.unwrap();

        flow.toggle("evening").unwrap();
        flow.advance(store, &timer()).await.unwrap();

        flow.toggle("savings").unwrap();
        flow.advance(store, &timer()).await.unwrap()
    }

    #[tokio::test]
    async fn empty_name_blocks_advance() {
        let store = store();
        let mut flow = OnboardingFlow::new();

        flow.set_name("", "Lee").unwrap();
        let err = flow.advance(&store, &timer()).await.unwrap_err();
        assert!(matches!(
            err,
            OnboardingError::Validation(ValidationError::NameRequired)
        ));

        // Step unchanged, nothing written.
        assert_eq!(flow.step(), 0);
        assert!(store.preferences().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn single_select_requires_a_value() {
        let store = store();
        let mut flow = OnboardingFlow::new();
        flow.set_name("Ana", "Lee").unwrap();
        flow.advance(&store, &timer()).await.unwrap();

        let err = flow.advance(&store, &timer()).await.unwrap_err();
        assert!(matches!(
            err,
            OnboardingError::Validation(ValidationError::SelectionRequired)
        ));
        assert_eq!(flow.step(), 1);
    }

    #[tokio::test]
    async fn multi_select_requires_at_least_one() {
        let store = store();
        let mut flow = OnboardingFlow::new();
        flow.set_name("Ana", "Lee").unwrap();
        flow.advance(&store, &timer()).await.unwrap();
        flow.select("house").unwrap();
        flow.advance(&store, &timer()).await.unwrap();

        let err = flow.advance(&store, &timer()).await.unwrap_err();
        assert!(matches!(
            err,
            OnboardingError::Validation(ValidationError::AtLeastOneRequired)
        ));
    }

    #[tokio::test]
    async fn repeated_failing_advance_never_skips_validation() {
        let store = store();
        let mut flow = OnboardingFlow::new();
        for _ in 0..3 {
            assert!(flow.advance(&store, &timer()).await.is_err());
            assert_eq!(flow.step(), 0);
        }
    }

    #[tokio::test]
    async fn single_select_overwrites_prior_value() {
        let store = store();
        let mut flow = OnboardingFlow::new();
        flow.set_name("Ana", "Lee").unwrap();
        flow.advance(&store, &timer()).await.unwrap();

        flow.select("house").unwrap();
        flow.select("condo").unwrap();
        assert_eq!(flow.answers().single("homeType"), Some("condo"));
    }

    #[tokio::test]
    async fn toggle_twice_round_trips() {
        let store = store();
        let mut flow = OnboardingFlow::new();
        flow.set_name("Ana", "Lee").unwrap();
        flow.advance(&store, &timer()).await.unwrap();
        flow.select("condo").unwrap();
        flow.advance(&store, &timer()).await.unwrap();

        flow.toggle("washer").unwrap();
        let before = flow.answers().multi("appliances").to_vec();

        flow.toggle("dryer").unwrap();
        flow.toggle("dryer").unwrap();
        assert_eq!(flow.answers().multi("appliances"), before.as_slice());
    }

    #[tokio::test]
    async fn retreat_keeps_answers_and_stops_at_zero() {
        let store = store();
        let mut flow = OnboardingFlow::new();
        flow.set_name("Ana", "Lee").unwrap();
        flow.advance(&store, &timer()).await.unwrap();
        flow.select("condo").unwrap();

        assert_eq!(flow.retreat().unwrap(), 0);
        assert_eq!(flow.retreat().unwrap(), 0);
        assert_eq!(flow.answers().first_name, "Ana");
        assert_eq!(flow.answers().single("homeType"), Some("condo"));
    }

    #[tokio::test]
    async fn completion_merges_answers_and_sets_flag() {
        let store = store();
        let mut flow = OnboardingFlow::new();

        let outcome = complete_flow(&mut flow, &store).await;
        match outcome {
            AdvanceOutcome::Completed { target, message } => {
                assert_eq!(target, NavTarget::Home);
                assert_eq!(message, "Welcome to GridLocked, Ana!");
            }
            other => panic!("expected completion, got {other:?}"),
        }

        let record = store.preferences().await.unwrap().unwrap();
        assert_eq!(record.first_name.as_deref(), Some("Ana"));
        assert_eq!(record.last_name.as_deref(), Some("Lee"));
        assert_eq!(record.home_type, Some(HomeType::Condo));
        assert_eq!(record.renewables.as_deref(), Some(&["solar".to_string()][..]));
        assert!(record.address.is_none());

        assert!(
            store
                .get_flag(storage_keys::HAS_COMPLETED_ONBOARDING)
                .await
                .unwrap()
        );
    }

    #[tokio::test]
    async fn completion_preserves_unrelated_stored_fields() {
        let store = store();
        store
            .patch(PreferenceRecord {
                city: Some("Milton".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();

        let mut flow = OnboardingFlow::new();
        complete_flow(&mut flow, &store).await;

        let record = store.preferences().await.unwrap().unwrap();
        assert_eq!(record.city.as_deref(), Some("Milton"));
        assert_eq!(record.first_name.as_deref(), Some("Ana"));
    }

    #[tokio::test]
    async fn advance_after_completion_is_rejected_without_remerge() {
        let store = store();
        let mut flow = OnboardingFlow::new();
        complete_flow(&mut flow, &store).await;

        // Mutate the stored record out from under the flow, then try again:
        // a second merge would clobber this edit.
        store
            .patch(PreferenceRecord {
                first_name: Some("Bea".to_string()),
                ..Default::default()
            })
            .await
            .unwrap();

        let err = flow.advance(&store, &timer()).await.unwrap_err();
        assert!(matches!(err, OnboardingError::AlreadyCompleted));

        let record = store.preferences().await.unwrap().unwrap();
        assert_eq!(record.first_name.as_deref(), Some("Bea"));
    }

    #[tokio::test]
    async fn wrong_step_kind_is_rejected() {
        let store = store();
        let mut flow = OnboardingFlow::new();

        assert!(matches!(
            flow.select("house"),
            Err(OnboardingError::WrongStepKind)
        ));
        assert!(matches!(
            flow.toggle("washer"),
            Err(OnboardingError::WrongStepKind)
        ));

        flow.set_name("Ana", "Lee").unwrap();
        flow.advance(&store, &timer()).await.unwrap();
        assert!(matches!(
            flow.set_name("Ana", "Lee"),
            Err(OnboardingError::WrongStepKind)
        ));
    }

    #[tokio::test]
    async fn reset_returns_to_initial_state() {
        let store = store();
        let mut flow = OnboardingFlow::new();
        complete_flow(&mut flow, &store).await;

        flow.reset();
        assert_eq!(flow.step(), 0);
        assert!(!flow.is_completed());
        assert!(flow.answers().first_name.is_empty());
    }
}
