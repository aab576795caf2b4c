use std::collections::HashMap;

use chrono::{DateTime, Datelike, Duration, Utc};
use serde::{Deserialize, Serialize};

use super::{Category, Cents, Transaction};

/// Number of weekly buckets in the balance trend.
pub const TREND_WEEKS: usize = 4;

/// How many categories the expense breakdown reports at most.
pub const BREAKDOWN_LIMIT: usize = 5;

/// Sum of every savings contribution ever recorded.
pub fn total_savings(transactions: &[Transaction]) -> Cents {
    transactions
        .iter()
        .filter(|t| t.is_saving())
        .map(|t| t.amount)
        .sum()
}

fn in_same_month(date: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    date.year() == now.year() && date.month() == now.month()
}

/// Savings contributions dated in the same calendar month as `now`.
pub fn savings_in_month(transactions: &[Transaction], now: DateTime<Utc>) -> Cents {
    transactions
        .iter()
        .filter(|t| t.is_saving() && in_same_month(t.date, now))
        .map(|t| t.amount)
        .sum()
}

/// Total spent, as a positive number, in the same calendar month as `now`.
pub fn expenses_in_month(transactions: &[Transaction], now: DateTime<Utc>) -> Cents {
    transactions
        .iter()
        .filter(|t| t.is_expense() && in_same_month(t.date, now))
        .map(|t| t.unsigned_amount())
        .sum()
}

/// Fraction of the monthly savings goal reached this month, clamped to 1.0.
/// A non-positive goal yields 0 rather than dividing by zero.
pub fn monthly_progress(
    transactions: &[Transaction],
    monthly_goal: Cents,
    now: DateTime<Utc>,
) -> f64 {
    if monthly_goal <= 0 {
        return 0.0;
    }
    let saved = savings_in_month(transactions, now);
    (saved as f64 / monthly_goal as f64).min(1.0)
}

/// One category's share of total spending.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySpending {
    pub category: Category,
    pub amount: Cents,
    /// Fraction of all expense spending, in 0.0..=1.0
    pub percentage: f64,
}

/// Group expenses by category, largest first, at most [`BREAKDOWN_LIMIT`]
/// entries. Empty when nothing has been spent. Order among equal amounts
/// is unspecified.
pub fn expenses_by_category(transactions: &[Transaction]) -> Vec<CategorySpending> {
    let mut totals: HashMap<Category, Cents> = HashMap::new();
    for tx in transactions.iter().filter(|t| t.is_expense()) {
        *totals.entry(tx.category).or_insert(0) += tx.unsigned_amount();
    }

    let overall: Cents = totals.values().sum();
    if overall <= 0 {
        return Vec::new();
    }

    let mut breakdown: Vec<CategorySpending> = totals
        .into_iter()
        .map(|(category, amount)| CategorySpending {
            category,
            amount,
            percentage: amount as f64 / overall as f64,
        })
        .collect();
    breakdown.sort_by(|a, b| b.amount.cmp(&a.amount));
    breakdown.truncate(BREAKDOWN_LIMIT);
    breakdown
}

/// Net balance change per week over the last [`TREND_WEEKS`] weeks, oldest
/// first. Windows are anchored at `now`: the bucket for offset `k` covers
/// `[now - (k+1) weeks, now - k weeks)`, so the final bucket ends at `now`.
pub fn weekly_balance_changes(
    transactions: &[Transaction],
    now: DateTime<Utc>,
) -> [Cents; TREND_WEEKS] {
    let mut weeks = [0; TREND_WEEKS];
    for (slot, offset) in (0..TREND_WEEKS as i64).rev().enumerate() {
        let start = now - Duration::weeks(offset + 1);
        let end = now - Duration::weeks(offset);
        weeks[slot] = transactions
            .iter()
            .filter(|t| t.date >= start && t.date < end)
            .map(|t| t.amount)
            .sum();
    }
    weeks
}

/// Arithmetic mean of the weekly changes, truncated to whole cents.
/// Zero when there are no buckets.
pub fn average_weekly_change(weeks: &[Cents]) -> Cents {
    if weeks.is_empty() {
        return 0;
    }
    weeks.iter().sum::<Cents>() / weeks.len() as i64
}
