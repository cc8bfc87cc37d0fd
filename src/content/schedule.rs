//! Appliance schedule book — seeded mock tasks plus per-session additions.
//!
//! The savings figures are rolled randomly at creation time; there is no
//! optimization engine behind the windows.

use chrono::{Duration, NaiveDate, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::ValidationError;

/// What a scheduled run optimizes for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskGoal {
    Economic,
    Carbon,
    Renewable,
}

/// Lifecycle of a scheduled run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    Scheduled,
    Completed,
    Failed,
}

/// Estimated savings attached to a task.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Saving {
    /// CAD.
    pub cost: f64,
    /// Grams of CO2.
    pub carbon: u32,
}

/// One scheduled appliance run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduledTask {
    pub id: Uuid,
    pub title: String,
    pub date: NaiveDate,
    pub time: String,
    pub appliance: String,
    pub goal: TaskGoal,
    pub status: TaskStatus,
    pub recurring: bool,
    pub saving: Saving,
}

/// Request payload for creating a task.
#[derive(Debug, Clone, Deserialize)]
pub struct NewTask {
    pub appliance: String,
    pub goal: TaskGoal,
    pub time: String,
    #[serde(default)]
    pub recurring: bool,
    pub date: Option<NaiveDate>,
}

/// In-memory schedule book, seeded with the sample tasks.
pub struct ScheduleBook {
    tasks: RwLock<Vec<ScheduledTask>>,
}

impl ScheduleBook {
    /// Seed with the three sample tasks (two today, one tomorrow).
    pub fn seeded() -> Self {
        let today = Utc::now().date_naive();
        let tomorrow = today + Duration::days(1);

        let tasks = vec![
            ScheduledTask {
                id: Uuid::new_v4(),
                title: "Charge EV".to_string(),
                date: today,
                time: "01:00 AM - 04:00 AM".to_string(),
                appliance: "Electric Vehicle".to_string(),
                goal: TaskGoal::Economic,
                status: TaskStatus::Scheduled,
                recurring: true,
                saving: Saving {
                    cost: 2.35,
                    carbon: 450,
                },
            },
            ScheduledTask {
                id: Uuid::new_v4(),
                title: "Run Dishwasher".to_string(),
                date: today,
                time: "02:00 AM - 03:30 AM".to_string(),
                appliance: "Dishwasher".to_string(),
                goal: TaskGoal::Carbon,
                status: TaskStatus::Scheduled,
                recurring: false,
                saving: Saving {
                    cost: 0.50,
                    carbon: 120,
                },
            },
            ScheduledTask {
                id: Uuid::new_v4(),
                title: "Charge Home Battery".to_string(),
                date: tomorrow,
                time: "12:00 PM - 03:00 PM".to_string(),
                appliance: "Home Battery".to_string(),
                goal: TaskGoal::Renewable,
                status: TaskStatus::Scheduled,
                recurring: false,
                saving: Saving {
                    cost: 1.15,
                    carbon: 350,
                },
            },
        ];

        Self {
            tasks: RwLock::new(tasks),
        }
    }

    /// Empty book (tests).
    pub fn empty() -> Self {
        Self {
            tasks: RwLock::new(Vec::new()),
        }
    }

    /// All tasks, oldest first.
    pub async fn all(&self) -> Vec<ScheduledTask> {
        self.tasks.read().await.clone()
    }

    /// Tasks on a given date.
    pub async fn on_date(&self, date: NaiveDate) -> Vec<ScheduledTask> {
        self.tasks
            .read()
            .await
            .iter()
            .filter(|t| t.date == date)
            .cloned()
            .collect()
    }

    /// Create a task. Appliance and time are required; savings estimates are
    /// rolled randomly.
    pub async fn create(&self, new: NewTask) -> Result<ScheduledTask, ValidationError> {
        if new.appliance.is_empty() || new.time.is_empty() {
            return Err(ValidationError::FieldsRequired);
        }

        let saving = {
            let mut rng = rand::thread_rng();
            Saving {
                cost: rng.gen_range(0.5..2.5),
                carbon: rng.gen_range(100..600),
            }
        };

        let task = ScheduledTask {
            id: Uuid::new_v4(),
            title: new.appliance.clone(),
            date: new.date.unwrap_or_else(|| Utc::now().date_naive()),
            time: new.time,
            appliance: new.appliance,
            goal: new.goal,
            status: TaskStatus::Scheduled,
            recurring: new.recurring,
            saving,
        };

        self.tasks.write().await.push(task.clone());
        Ok(task)
    }

    /// Delete a task. Returns false when the id is unknown.
    pub async fn delete(&self, id: Uuid) -> bool {
        let mut tasks = self.tasks.write().await;
        let before = tasks.len();
        tasks.retain(|t| t.id != id);
        tasks.len() != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_task(appliance: &str, time: &str) -> NewTask {
        NewTask {
            appliance: appliance.to_string(),
            goal: TaskGoal::Economic,
            time: time.to_string(),
            recurring: false,
            date: None,
        }
    }

    #[tokio::test]
    async fn seeded_book_has_sample_tasks() {
        let book = ScheduleBook::seeded();
        let tasks = book.all().await;
        assert_eq!(tasks.len(), 3);
        assert_eq!(tasks[0].title, "Charge EV");
        assert!(tasks[0].recurring);
    }

    #[tokio::test]
    async fn on_date_filters_by_day() {
        let book = ScheduleBook::seeded();
        let today = Utc::now().date_naive();
        assert_eq!(book.on_date(today).await.len(), 2);
        assert_eq!(book.on_date(today + Duration::days(1)).await.len(), 1);
        assert_eq!(book.on_date(today + Duration::days(30)).await.len(), 0);
    }

    #[tokio::test]
    async fn create_requires_appliance_and_time() {
        let book = ScheduleBook::empty();
        assert!(matches!(
            book.create(new_task("", "01:00 AM")).await,
            Err(ValidationError::FieldsRequired)
        ));
        assert!(matches!(
            book.create(new_task("Dishwasher", "")).await,
            Err(ValidationError::FieldsRequired)
        ));
        assert!(book.all().await.is_empty());
    }

    #[tokio::test]
    async fn create_rolls_savings_in_range() {
        let book = ScheduleBook::empty();
        let task = book
            .create(new_task("Dishwasher", "02:00 AM - 03:30 AM"))
            .await
            .unwrap();

        assert_eq!(task.status, TaskStatus::Scheduled);
        assert!(task.saving.cost >= 0.5 && task.saving.cost < 2.5);
        assert!(task.saving.carbon >= 100 && task.saving.carbon < 600);
        assert_eq!(book.all().await.len(), 1);
    }

    #[tokio::test]
    async fn delete_removes_only_the_given_task() {
        let book = ScheduleBook::seeded();
        let tasks = book.all().await;
        assert!(book.delete(tasks[0].id).await);
        assert_eq!(book.all().await.len(), 2);
        assert!(!book.delete(tasks[0].id).await);
    }
}
