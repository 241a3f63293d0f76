//! Classifies estimated trip cost against the traveler's savings target.

use crate::core::errors::{Result, TripError};
use crate::domain::budget::BudgetClassification;

/// Stateless budgeting helpers over caller-supplied figures.
pub struct BudgetService;

impl BudgetService {
    /// Classifies a cost/target pair into a budget standing.
    ///
    /// Inputs must be finite and non-negative; anything else is rejected
    /// instead of producing a nonsense classification.
    pub fn classify(estimated_cost: f64, savings_target: f64) -> Result<BudgetClassification> {
        Self::validate_amount("estimated cost", estimated_cost)?;
        Self::validate_amount("savings target", savings_target)?;
        Ok(BudgetClassification::from_parts(
            estimated_cost,
            savings_target,
        ))
    }

    fn validate_amount(label: &str, value: f64) -> Result<()> {
        if !value.is_finite() {
            return Err(TripError::InvalidInput(format!(
                "{label} must be a finite amount, got {value}"
            )));
        }
        if value < 0.0 {
            return Err(TripError::InvalidInput(format!(
                "{label} must not be negative, got {value}"
            )));
        }
        Ok(())
    }
}
