use crate::core::errors::TripError;
use crate::core::services::BudgetService;
use crate::domain::budget::BudgetHealth;

#[test]
fn zero_target_suppresses_regardless_of_cost() {
    for cost in [0.0, 1.0, 10_000.0] {
        let classification = BudgetService::classify(cost, 0.0).unwrap();
        assert_eq!(classification.health, BudgetHealth::Suppressed);
        assert_eq!(classification.percent_used, None);
        assert_eq!(classification.overage, 0.0);
    }
}

#[test]
fn over_budget_reports_exact_overage() {
    let classification = BudgetService::classify(1_250.0, 1_000.0).unwrap();
    assert_eq!(classification.health, BudgetHealth::OverBudget);
    assert_eq!(classification.overage, 250.0);
    assert_eq!(classification.remaining, -250.0);
}

#[test]
fn ninety_percent_is_near_limit() {
    let classification = BudgetService::classify(90.0, 100.0).unwrap();
    assert_eq!(classification.health, BudgetHealth::NearLimit);
    assert_eq!(classification.percent_used, Some(90.0));
}

#[test]
fn exact_target_is_near_limit_not_over() {
    let classification = BudgetService::classify(100.0, 100.0).unwrap();
    assert_eq!(classification.health, BudgetHealth::NearLimit);
    assert_eq!(classification.percent_used, Some(100.0));
    assert_eq!(classification.overage, 0.0);
}

#[test]
fn just_past_target_is_over_budget() {
    let classification = BudgetService::classify(100.01, 100.0).unwrap();
    assert_eq!(classification.health, BudgetHealth::OverBudget);
}

#[test]
fn half_spent_is_on_track_with_headroom() {
    let classification = BudgetService::classify(50.0, 100.0).unwrap();
    assert_eq!(classification.health, BudgetHealth::OnTrack);
    assert_eq!(classification.remaining, 50.0);
    assert_eq!(classification.percent_used, Some(50.0));
}

#[test]
fn negative_amounts_are_rejected() {
    assert!(matches!(
        BudgetService::classify(-1.0, 100.0),
        Err(TripError::InvalidInput(_))
    ));
    assert!(matches!(
        BudgetService::classify(1.0, -100.0),
        Err(TripError::InvalidInput(_))
    ));
}

#[test]
fn non_finite_amounts_are_rejected() {
    assert!(BudgetService::classify(f64::NAN, 100.0).is_err());
    assert!(BudgetService::classify(f64::INFINITY, 100.0).is_err());
}
