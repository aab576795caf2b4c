use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Cents;

pub type TransactionId = Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    /// Money coming in (salary, bonuses)
    Income,
    /// Money going out; always stored with a negative amount
    Expense,
    /// Contributions toward savings, including goal funding
    Saving,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Income => "income",
            TransactionType::Expense => "expense",
            TransactionType::Saving => "saving",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "income" => Some(TransactionType::Income),
            "expense" => Some(TransactionType::Expense),
            "saving" => Some(TransactionType::Saving),
            _ => None,
        }
    }
}

impl std::fmt::Display for TransactionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Salary,
    Groceries,
    Entertainment,
    Transport,
    Savings,
    Bonus,
    Other,
}

impl Category {
    /// Every category, in display order. Entry forms iterate over this.
    pub const ALL: [Category; 7] = [
        Category::Salary,
        Category::Groceries,
        Category::Entertainment,
        Category::Transport,
        Category::Savings,
        Category::Bonus,
        Category::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Salary => "salary",
            Category::Groceries => "groceries",
            Category::Entertainment => "entertainment",
            Category::Transport => "transport",
            Category::Savings => "savings",
            Category::Bonus => "bonus",
            Category::Other => "other",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "salary" => Some(Category::Salary),
            "groceries" => Some(Category::Groceries),
            "entertainment" => Some(Category::Entertainment),
            "transport" => Some(Category::Transport),
            "savings" => Some(Category::Savings),
            "bonus" => Some(Category::Bonus),
            "other" => Some(Category::Other),
            _ => None,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single recorded money movement. Transactions are immutable once
/// recorded; the ledger only shrinks on a full reset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    pub id: TransactionId,
    /// Signed amount in cents. Negative exactly when this is an expense.
    pub amount: Cents,
    pub description: String,
    pub category: Category,
    /// When the movement happened
    pub date: DateTime<Utc>,
    pub transaction_type: TransactionType,
}

impl Transaction {
    fn record(
        amount: Cents,
        description: impl Into<String>,
        category: Category,
        date: DateTime<Utc>,
        transaction_type: TransactionType,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            amount,
            description: description.into(),
            category,
            date,
            transaction_type,
        }
    }

    /// Record an expense. The positive `amount` is stored negated.
    pub fn expense(
        amount: Cents,
        description: impl Into<String>,
        category: Category,
        date: DateTime<Utc>,
    ) -> Self {
        assert!(amount > 0, "Expense amount must be positive");
        Self::record(-amount, description, category, date, TransactionType::Expense)
    }

    /// Record a savings contribution. Always categorized as savings.
    pub fn saving(amount: Cents, description: impl Into<String>, date: DateTime<Utc>) -> Self {
        assert!(amount > 0, "Saving amount must be positive");
        Self::record(
            amount,
            description,
            Category::Savings,
            date,
            TransactionType::Saving,
        )
    }

    /// Record incoming money (salary, bonus).
    pub fn income(
        amount: Cents,
        description: impl Into<String>,
        category: Category,
        date: DateTime<Utc>,
    ) -> Self {
        assert!(amount > 0, "Income amount must be positive");
        Self::record(amount, description, category, date, TransactionType::Income)
    }

    pub fn is_expense(&self) -> bool {
        self.transaction_type == TransactionType::Expense
    }

    pub fn is_saving(&self) -> bool {
        self.transaction_type == TransactionType::Saving
    }

    /// Magnitude of the movement regardless of direction.
    pub fn unsigned_amount(&self) -> Cents {
        self.amount.abs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expense_stores_negated_amount() {
        let tx = Transaction::expense(5000, "Weekly shop", Category::Groceries, Utc::now());

        assert_eq!(tx.amount, -5000);
        assert_eq!(tx.unsigned_amount(), 5000);
        assert_eq!(tx.category, Category::Groceries);
        assert_eq!(tx.transaction_type, TransactionType::Expense);
        assert!(tx.is_expense());
    }

    #[test]
    fn test_saving_is_always_savings_category() {
        let tx = Transaction::saving(10_000, "Rainy day fund", Utc::now());

        assert_eq!(tx.amount, 10_000);
        assert_eq!(tx.category, Category::Savings);
        assert_eq!(tx.transaction_type, TransactionType::Saving);
        assert!(tx.is_saving());
    }

    #[test]
    fn test_income_keeps_positive_amount() {
        let tx = Transaction::income(250_000, "October salary", Category::Salary, Utc::now());

        assert_eq!(tx.amount, 250_000);
        assert_eq!(tx.transaction_type, TransactionType::Income);
        assert!(!tx.is_expense());
        assert!(!tx.is_saving());
    }

    #[test]
    #[should_panic(expected = "Expense amount must be positive")]
    fn test_expense_requires_positive_amount() {
        Transaction::expense(0, "nothing", Category::Other, Utc::now());
    }

    #[test]
    #[should_panic(expected = "Saving amount must be positive")]
    fn test_saving_requires_positive_amount() {
        Transaction::saving(-100, "nothing", Utc::now());
    }

    #[test]
    fn test_transaction_type_roundtrip() {
        for tt in [
            TransactionType::Income,
            TransactionType::Expense,
            TransactionType::Saving,
        ] {
            assert_eq!(TransactionType::from_str(tt.as_str()), Some(tt));
        }
        assert_eq!(TransactionType::from_str("transfer"), None);
    }

    #[test]
    fn test_category_roundtrip() {
        for category in Category::ALL {
            assert_eq!(Category::from_str(category.as_str()), Some(category));
        }
        assert_eq!(Category::from_str("rent"), None);
    }
}
