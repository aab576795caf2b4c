use chrono::{DateTime, Utc};
use log::{debug, info};

use crate::domain::{
    average_weekly_change, expenses_by_category, expenses_in_month, format_amount,
    monthly_progress, savings_in_month, total_savings, weekly_balance_changes, Category,
    CategorySpending, Cents, GoalId, SavingGoal, Transaction,
};
use crate::storage::{Store, StoreEvent};

use super::{AppError, MonthlySummary, WeeklyTrend};

/// Application service providing high-level operations over the in-memory
/// store. This is the primary interface for any client (UI layer, tests).
///
/// Amounts and names are validated here; the store assumes well-formed
/// input. Id-based operations return [`AppError::GoalNotFound`] for unknown
/// ids and leave the store untouched.
pub struct TrackerService {
    store: Store,
}

impl Default for TrackerService {
    fn default() -> Self {
        Self::new(Store::new())
    }
}

fn validate_amount(amount: Cents) -> Result<(), AppError> {
    if amount <= 0 {
        return Err(AppError::InvalidAmount(
            "Amount must be positive".to_string(),
        ));
    }
    Ok(())
}

impl TrackerService {
    /// Create a service over the given store.
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    /// Register a change observer on the underlying store.
    pub fn subscribe(&mut self, subscriber: impl FnMut(&StoreEvent) + 'static) {
        self.store.subscribe(subscriber);
    }

    // ========================
    // Transaction operations
    // ========================

    /// Record an expense dated now. `amount` is positive; the ledger stores
    /// it negated.
    pub fn add_expense(
        &mut self,
        amount: Cents,
        description: impl Into<String>,
        category: Category,
    ) -> Result<Transaction, AppError> {
        validate_amount(amount)?;

        let transaction = Transaction::expense(amount, description, category, Utc::now());
        self.store.insert_transaction(transaction.clone());
        debug!(
            "recorded expense of {} in {}",
            format_amount(amount),
            category
        );
        Ok(transaction)
    }

    /// Record a savings contribution dated now.
    pub fn add_saving(
        &mut self,
        amount: Cents,
        description: impl Into<String>,
    ) -> Result<Transaction, AppError> {
        validate_amount(amount)?;

        let transaction = Transaction::saving(amount, description, Utc::now());
        self.store.insert_transaction(transaction.clone());
        debug!("recorded saving of {}", format_amount(amount));
        Ok(transaction)
    }

    /// Record a pre-built transaction at the head of the ledger.
    pub fn record(&mut self, transaction: Transaction) {
        self.store.insert_transaction(transaction);
    }

    // ========================
    // Goal operations
    // ========================

    /// Create a saving goal. The goal starts with nothing saved toward it.
    pub fn add_goal(
        &mut self,
        name: impl Into<String>,
        target_amount: Cents,
        target_date: Option<DateTime<Utc>>,
    ) -> Result<SavingGoal, AppError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(AppError::InvalidName(
                "Goal name must not be empty".to_string(),
            ));
        }
        validate_amount(target_amount)?;

        let mut goal = SavingGoal::new(name, target_amount, Utc::now());
        if let Some(date) = target_date {
            goal = goal.with_target_date(date);
        }

        self.store.append_goal(goal.clone());
        debug!(
            "created goal '{}' with target {}",
            goal.name,
            format_amount(goal.target_amount)
        );
        Ok(goal)
    }

    /// Get a goal by id.
    pub fn get_goal(&self, id: GoalId) -> Result<&SavingGoal, AppError> {
        self.store.goal(id).ok_or(AppError::GoalNotFound(id))
    }

    /// Replace an existing goal with an edited copy (same id).
    pub fn update_goal(&mut self, goal: SavingGoal) -> Result<SavingGoal, AppError> {
        let id = goal.id;
        self.store
            .replace_goal(goal.clone())
            .ok_or(AppError::GoalNotFound(id))?;
        Ok(goal)
    }

    /// Credit `amount` toward a goal and mirror it in the ledger as a
    /// savings contribution ("Added to <goal name>").
    pub fn add_funds_to_goal(
        &mut self,
        goal_id: GoalId,
        amount: Cents,
    ) -> Result<SavingGoal, AppError> {
        validate_amount(amount)?;

        let mut goal = self
            .store
            .goal(goal_id)
            .cloned()
            .ok_or(AppError::GoalNotFound(goal_id))?;
        goal.add_funds(amount);
        let updated = goal.clone();

        let _ = self.store.replace_goal(goal);
        self.store.insert_transaction(Transaction::saving(
            amount,
            format!("Added to {}", updated.name),
            Utc::now(),
        ));

        debug!(
            "added {} to goal '{}' ({} of {})",
            format_amount(amount),
            updated.name,
            format_amount(updated.current_amount),
            format_amount(updated.target_amount)
        );
        Ok(updated)
    }

    /// Delete a goal, returning the removed record.
    pub fn delete_goal(&mut self, goal_id: GoalId) -> Result<SavingGoal, AppError> {
        let removed = self
            .store
            .remove_goal(goal_id)
            .ok_or(AppError::GoalNotFound(goal_id))?;
        debug!("deleted goal '{}'", removed.name);
        Ok(removed)
    }

    // ========================
    // Settings
    // ========================

    /// Change the monthly savings goal.
    pub fn set_monthly_goal(&mut self, amount: Cents) -> Result<(), AppError> {
        validate_amount(amount)?;
        self.store.set_monthly_goal(amount);
        debug!("monthly goal set to {}", format_amount(amount));
        Ok(())
    }

    pub fn complete_onboarding(&mut self) {
        self.store.complete_onboarding();
    }

    /// Drop every transaction and goal. The monthly goal and onboarding
    /// flag are kept.
    pub fn reset_progress(&mut self) {
        self.store.clear();
        info!("progress reset: ledger and goals cleared");
    }

    // ========================
    // Queries
    // ========================

    /// All transactions, newest first.
    pub fn transactions(&self) -> &[Transaction] {
        self.store.transactions()
    }

    /// The newest `limit` transactions (the dashboard activity feed).
    pub fn recent_transactions(&self, limit: usize) -> &[Transaction] {
        let transactions = self.store.transactions();
        &transactions[..limit.min(transactions.len())]
    }

    pub fn saving_goals(&self) -> &[SavingGoal] {
        self.store.goals()
    }

    pub fn active_goal_count(&self) -> usize {
        self.store.goals().len()
    }

    pub fn monthly_goal(&self) -> Cents {
        self.store.monthly_goal()
    }

    pub fn has_completed_onboarding(&self) -> bool {
        self.store.is_onboarding_complete()
    }

    /// Sum of every savings contribution ever recorded.
    pub fn total_savings(&self) -> Cents {
        total_savings(self.store.transactions())
    }

    /// Savings contributions recorded this calendar month.
    pub fn monthly_saved(&self) -> Cents {
        savings_in_month(self.store.transactions(), Utc::now())
    }

    /// Fraction of the monthly goal reached this month, clamped to 1.0.
    pub fn monthly_progress(&self) -> f64 {
        monthly_progress(
            self.store.transactions(),
            self.store.monthly_goal(),
            Utc::now(),
        )
    }

    /// Total spent this calendar month, as a positive number.
    pub fn monthly_expenses(&self) -> Cents {
        expenses_in_month(self.store.transactions(), Utc::now())
    }

    /// The stat-card bundle, computed against a single clock reading.
    pub fn monthly_summary(&self) -> MonthlySummary {
        let now = Utc::now();
        let transactions = self.store.transactions();
        let monthly_goal = self.store.monthly_goal();
        MonthlySummary {
            monthly_goal,
            saved: savings_in_month(transactions, now),
            progress: monthly_progress(transactions, monthly_goal, now),
            expenses: expenses_in_month(transactions, now),
        }
    }

    /// Spending grouped by category, largest first, top five.
    pub fn expenses_by_category(&self) -> Vec<CategorySpending> {
        expenses_by_category(self.store.transactions())
    }

    /// Net balance change per week over the last four weeks, oldest first.
    pub fn weekly_trend(&self) -> WeeklyTrend {
        let weeks = weekly_balance_changes(self.store.transactions(), Utc::now());
        WeeklyTrend {
            weeks,
            average: average_weekly_change(&weeks),
        }
    }
}
