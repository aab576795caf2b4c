use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Cents;

pub type GoalId = Uuid;

/// A named savings target with accumulated progress.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavingGoal {
    pub id: GoalId,
    pub name: String,
    pub target_amount: Cents,
    pub current_amount: Cents,
    pub created_at: DateTime<Utc>,
    /// Optional deadline, purely informational
    pub target_date: Option<DateTime<Utc>>,
}

impl SavingGoal {
    pub fn new(name: impl Into<String>, target_amount: Cents, created_at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            target_amount,
            current_amount: 0,
            created_at,
            target_date: None,
        }
    }

    pub fn with_target_date(mut self, target_date: DateTime<Utc>) -> Self {
        self.target_date = Some(target_date);
        self
    }

    pub fn with_current_amount(mut self, amount: Cents) -> Self {
        self.current_amount = amount;
        self
    }

    /// Fraction of the target reached, clamped to 1.0.
    /// Zero for a non-positive target.
    pub fn progress(&self) -> f64 {
        if self.target_amount <= 0 {
            return 0.0;
        }
        (self.current_amount as f64 / self.target_amount as f64).min(1.0)
    }

    pub fn is_completed(&self) -> bool {
        self.current_amount >= self.target_amount
    }

    /// Credit a contribution toward the target.
    pub fn add_funds(&mut self, amount: Cents) {
        self.current_amount += amount;
    }
}
