//! Budget and progress derivations across a full planning scenario.

use trip_core::core::services::{BudgetService, ProgressService};
use trip_core::domain::budget::BudgetHealth;
use trip_core::domain::itinerary::default_catalog;

#[test]
fn a_trip_moves_through_the_catalog_as_savings_grow() {
    let catalog = default_catalog();
    assert_eq!(catalog[0].title, "Dream");
    assert_eq!(catalog[2].title, "Go");

    // Dreaming: a destination is picked but no savings target exists yet,
    // so the budget widget stays hidden.
    let dreaming = BudgetService::classify(1_800.0, 0.0).unwrap();
    assert_eq!(dreaming.health, BudgetHealth::Suppressed);
    let progress = ProgressService::render(catalog, 1, &[]).unwrap();
    assert_eq!(progress.fraction, 0.0);
    assert!(progress.steps[0].current);

    // Saving: a 2000 target against an 1800 estimate sits right at 90%.
    let saving = BudgetService::classify(1_800.0, 2_000.0).unwrap();
    assert_eq!(saving.health, BudgetHealth::NearLimit);
    assert_eq!(saving.percent_used, Some(90.0));
    let progress = ProgressService::render(catalog, 2, &[1]).unwrap();
    assert_eq!(progress.fraction, 0.5);
    assert!(progress.steps[0].completed);
    assert!(progress.steps[1].current);

    // Booking pushes the estimate past the target.
    let booked = BudgetService::classify(2_050.0, 2_000.0).unwrap();
    assert_eq!(booked.health, BudgetHealth::OverBudget);
    assert_eq!(booked.overage, 50.0);

    // Raising the target restores headroom.
    let rebudgeted = BudgetService::classify(2_050.0, 2_300.0).unwrap();
    assert_eq!(rebudgeted.health, BudgetHealth::OnTrack);
    assert_eq!(rebudgeted.remaining, 250.0);

    // Departure: every earlier step is done and the indicator is full.
    let progress = ProgressService::render(catalog, 3, &[1, 2]).unwrap();
    assert_eq!(progress.fraction, 1.0);
    assert!(progress.steps[2].current);
    assert!(progress.steps[..2].iter().all(|step| step.completed));
}
