// Allow dead_code because these helpers are used across different test files
// which are compiled separately
#![allow(dead_code)]

use chrono::{DateTime, Duration, NaiveDate, Utc};
use nestflow::application::TrackerService;
use nestflow::domain::{Category, Cents, Transaction};
use nestflow::storage::Store;

/// Fresh service over an empty store.
pub fn test_service() -> TrackerService {
    TrackerService::new(Store::new())
}

/// Helper to parse a date string into DateTime<Utc>
pub fn parse_date(date_str: &str) -> DateTime<Utc> {
    NaiveDate::parse_from_str(date_str, "%Y-%m-%d")
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
        .and_utc()
}

/// An expense dated `days_ago` relative to now, for back-filling the ledger.
pub fn expense_days_ago(amount: Cents, category: Category, days_ago: i64) -> Transaction {
    Transaction::expense(
        amount,
        format!("expense {days_ago} days ago"),
        category,
        Utc::now() - Duration::days(days_ago),
    )
}

/// A savings contribution dated `days_ago` relative to now.
pub fn saving_days_ago(amount: Cents, days_ago: i64) -> Transaction {
    Transaction::saving(
        amount,
        format!("saving {days_ago} days ago"),
        Utc::now() - Duration::days(days_ago),
    )
}
