use thiserror::Error;

use crate::domain::GoalId;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Saving goal not found: {0}")]
    GoalNotFound(GoalId),

    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Invalid name: {0}")]
    InvalidName(String),
}
