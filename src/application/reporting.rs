use serde::{Deserialize, Serialize};

use crate::domain::{Cents, TREND_WEEKS};

/// This month's position against the monthly savings goal: the stat-card
/// bundle a dashboard renders in one pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlySummary {
    pub monthly_goal: Cents,
    /// Savings contributions recorded this calendar month
    pub saved: Cents,
    /// `saved / monthly_goal`, clamped to 1.0; 0 when the goal is unset
    pub progress: f64,
    /// Total spent this calendar month, as a positive number
    pub expenses: Cents,
}

/// Net balance change per week, oldest first, with the period mean.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyTrend {
    pub weeks: [Cents; TREND_WEEKS],
    pub average: Cents,
}
