use crate::domain::{Cents, GoalId, SavingGoal, Transaction, TransactionId};

/// Default monthly savings goal: $1000.00.
pub const DEFAULT_MONTHLY_GOAL: Cents = 100_000;

/// Change notification emitted after a mutation has been applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreEvent {
    TransactionAdded { id: TransactionId },
    GoalAdded { id: GoalId },
    GoalUpdated { id: GoalId },
    GoalDeleted { id: GoalId },
    MonthlyGoalChanged { amount: Cents },
    OnboardingCompleted,
    ProgressReset,
}

type Subscriber = Box<dyn FnMut(&StoreEvent)>;

/// Process-lifetime state of the tracker: the transaction ledger (newest
/// first), saving goals, the monthly goal scalar, and the onboarding flag.
/// Nothing is persisted; the ledger lives and dies with the process.
///
/// All mutations take `&mut self` and notify subscribers synchronously, so
/// there is exactly one writer at a time. The store is not `Sync` (observers
/// are boxed closures); wrap a shared instance in a mutex to move it across
/// threads.
pub struct Store {
    transactions: Vec<Transaction>,
    goals: Vec<SavingGoal>,
    monthly_goal: Cents,
    onboarding_complete: bool,
    subscribers: Vec<Subscriber>,
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

impl Store {
    pub fn new() -> Self {
        Self {
            transactions: Vec::new(),
            goals: Vec::new(),
            monthly_goal: DEFAULT_MONTHLY_GOAL,
            onboarding_complete: false,
            subscribers: Vec::new(),
        }
    }

    /// Register a change observer. Each store write produces exactly one
    /// event, delivered after the write is visible to queries.
    pub fn subscribe(&mut self, subscriber: impl FnMut(&StoreEvent) + 'static) {
        self.subscribers.push(Box::new(subscriber));
    }

    fn emit(&mut self, event: StoreEvent) {
        for subscriber in &mut self.subscribers {
            subscriber(&event);
        }
    }

    // ========================
    // Mutations
    // ========================

    /// Insert at the head: the ledger is ordered newest first.
    pub fn insert_transaction(&mut self, transaction: Transaction) {
        let id = transaction.id;
        self.transactions.insert(0, transaction);
        self.emit(StoreEvent::TransactionAdded { id });
    }

    pub fn append_goal(&mut self, goal: SavingGoal) {
        let id = goal.id;
        self.goals.push(goal);
        self.emit(StoreEvent::GoalAdded { id });
    }

    /// Replace the goal carrying the same id, returning the previous record.
    /// Leaves the store untouched (and emits nothing) for an unknown id.
    pub fn replace_goal(&mut self, goal: SavingGoal) -> Option<SavingGoal> {
        let id = goal.id;
        let slot = self.goals.iter_mut().find(|g| g.id == id)?;
        let previous = std::mem::replace(slot, goal);
        self.emit(StoreEvent::GoalUpdated { id });
        Some(previous)
    }

    pub fn remove_goal(&mut self, id: GoalId) -> Option<SavingGoal> {
        let index = self.goals.iter().position(|g| g.id == id)?;
        let removed = self.goals.remove(index);
        self.emit(StoreEvent::GoalDeleted { id });
        Some(removed)
    }

    pub fn set_monthly_goal(&mut self, amount: Cents) {
        self.monthly_goal = amount;
        self.emit(StoreEvent::MonthlyGoalChanged { amount });
    }

    pub fn complete_onboarding(&mut self) {
        self.onboarding_complete = true;
        self.emit(StoreEvent::OnboardingCompleted);
    }

    /// Drop all transactions and goals. The monthly goal and the onboarding
    /// flag survive a reset.
    pub fn clear(&mut self) {
        self.transactions.clear();
        self.goals.clear();
        self.emit(StoreEvent::ProgressReset);
    }

    // ========================
    // Queries
    // ========================

    /// All transactions, newest first.
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn goals(&self) -> &[SavingGoal] {
        &self.goals
    }

    pub fn goal(&self, id: GoalId) -> Option<&SavingGoal> {
        self.goals.iter().find(|g| g.id == id)
    }

    pub fn monthly_goal(&self) -> Cents {
        self.monthly_goal
    }

    pub fn is_onboarding_complete(&self) -> bool {
        self.onboarding_complete
    }
}
