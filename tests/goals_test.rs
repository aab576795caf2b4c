mod common;

use anyhow::Result;
use common::{parse_date, test_service};
use nestflow::application::AppError;
use nestflow::domain::{Category, SavingGoal, TransactionType};
use uuid::Uuid;

#[test]
fn test_add_goal_starts_empty_and_is_appended() -> Result<()> {
    let mut service = test_service();

    let first = service.add_goal("Emergency fund", 100_000, None)?;
    let second = service.add_goal("New bike", 45_000, Some(parse_date("2027-06-01")))?;

    let goals = service.saving_goals();
    assert_eq!(goals.len(), 2);
    // Goals keep creation order
    assert_eq!(goals[0].id, first.id);
    assert_eq!(goals[1].id, second.id);
    assert_eq!(goals[0].current_amount, 0);
    assert_eq!(goals[1].target_date, Some(parse_date("2027-06-01")));
    assert_eq!(service.active_goal_count(), 2);
    Ok(())
}

#[test]
fn test_add_goal_rejects_blank_names_and_bad_targets() {
    let mut service = test_service();

    assert!(matches!(
        service.add_goal("", 10_000, None),
        Err(AppError::InvalidName(_))
    ));
    assert!(matches!(
        service.add_goal("   ", 10_000, None),
        Err(AppError::InvalidName(_))
    ));
    assert!(matches!(
        service.add_goal("Valid name", 0, None),
        Err(AppError::InvalidAmount(_))
    ));
    assert!(service.saving_goals().is_empty());
}

#[test]
fn test_add_funds_credits_goal_and_mirrors_a_saving() -> Result<()> {
    let mut service = test_service();
    // A 1000.00 goal funded with 300.00 sits at 30%
    let goal = service.add_goal("Vacation", 100_000, None)?;

    let funded = service.add_funds_to_goal(goal.id, 30_000)?;

    assert_eq!(funded.current_amount, 30_000);
    assert_eq!(funded.progress(), 0.3);
    assert!(!funded.is_completed());

    // The stored goal matches the returned copy
    let stored = service.get_goal(goal.id)?;
    assert_eq!(stored.current_amount, 30_000);

    // Exactly one mirrored ledger entry, at the head
    let transactions = service.transactions();
    assert_eq!(transactions.len(), 1);
    assert_eq!(transactions[0].amount, 30_000);
    assert_eq!(transactions[0].transaction_type, TransactionType::Saving);
    assert_eq!(transactions[0].category, Category::Savings);
    assert_eq!(transactions[0].description, "Added to Vacation");
    Ok(())
}

#[test]
fn test_add_funds_accumulates_and_clamps_progress() -> Result<()> {
    let mut service = test_service();
    let goal = service.add_goal("Camera", 50_000, None)?;

    service.add_funds_to_goal(goal.id, 20_000)?;
    let funded = service.add_funds_to_goal(goal.id, 40_000)?;

    assert_eq!(funded.current_amount, 60_000);
    assert!(funded.is_completed());
    assert_eq!(funded.progress(), 1.0);
    assert_eq!(service.transactions().len(), 2);
    assert_eq!(service.total_savings(), 60_000);
    Ok(())
}

#[test]
fn test_operations_on_unknown_goals_change_nothing() -> Result<()> {
    let mut service = test_service();
    let goal = service.add_goal("Vacation", 100_000, None)?;
    let missing = Uuid::new_v4();

    assert!(matches!(
        service.add_funds_to_goal(missing, 30_000),
        Err(AppError::GoalNotFound(_))
    ));
    assert!(matches!(
        service.delete_goal(missing),
        Err(AppError::GoalNotFound(_))
    ));
    assert!(matches!(
        service.get_goal(missing),
        Err(AppError::GoalNotFound(_))
    ));

    // No ledger entry, no goal mutation
    assert!(service.transactions().is_empty());
    assert_eq!(service.saving_goals().len(), 1);
    assert_eq!(service.get_goal(goal.id)?.current_amount, 0);
    Ok(())
}

#[test]
fn test_add_funds_rejects_non_positive_amounts() -> Result<()> {
    let mut service = test_service();
    let goal = service.add_goal("Vacation", 100_000, None)?;

    assert!(matches!(
        service.add_funds_to_goal(goal.id, 0),
        Err(AppError::InvalidAmount(_))
    ));
    assert_eq!(service.get_goal(goal.id)?.current_amount, 0);
    assert!(service.transactions().is_empty());
    Ok(())
}

#[test]
fn test_update_goal_replaces_by_id() -> Result<()> {
    let mut service = test_service();
    let goal = service.add_goal("Vacatoin", 100_000, None)?;

    // Fix the typo and raise the target
    let mut edited = goal.clone();
    edited.name = "Vacation".to_string();
    edited.target_amount = 120_000;
    service.update_goal(edited)?;

    let stored = service.get_goal(goal.id)?;
    assert_eq!(stored.name, "Vacation");
    assert_eq!(stored.target_amount, 120_000);
    assert_eq!(service.saving_goals().len(), 1);
    Ok(())
}

#[test]
fn test_update_goal_with_unknown_id_fails() {
    let mut service = test_service();
    let detached = SavingGoal::new("Never added", 10_000, chrono::Utc::now());

    assert!(matches!(
        service.update_goal(detached),
        Err(AppError::GoalNotFound(_))
    ));
    assert!(service.saving_goals().is_empty());
}

#[test]
fn test_delete_goal_removes_only_that_goal() -> Result<()> {
    let mut service = test_service();
    let keep = service.add_goal("Keep me", 10_000, None)?;
    let doomed = service.add_goal("Drop me", 20_000, None)?;

    let removed = service.delete_goal(doomed.id)?;

    assert_eq!(removed.id, doomed.id);
    assert_eq!(service.saving_goals().len(), 1);
    assert_eq!(service.saving_goals()[0].id, keep.id);
    Ok(())
}

#[test]
fn test_deleting_a_goal_keeps_its_funding_history() -> Result<()> {
    let mut service = test_service();
    let goal = service.add_goal("Abandoned plan", 40_000, None)?;
    service.add_funds_to_goal(goal.id, 15_000)?;

    service.delete_goal(goal.id)?;

    // The contribution stays on the ledger
    assert_eq!(service.transactions().len(), 1);
    assert_eq!(service.total_savings(), 15_000);
    Ok(())
}
