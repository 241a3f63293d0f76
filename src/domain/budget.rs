//! Budget standing derived from estimated cost vs. savings target.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Percentage of the savings target at which spending counts as near the limit.
pub const NEAR_LIMIT_THRESHOLD: f64 = 90.0;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
/// Describes how the estimated trip cost compares with the savings target.
pub enum BudgetHealth {
    OnTrack,
    NearLimit,
    OverBudget,
    /// No savings target set; the caller renders nothing.
    Suppressed,
}

impl fmt::Display for BudgetHealth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            BudgetHealth::OnTrack => "On Track",
            BudgetHealth::NearLimit => "Near Limit",
            BudgetHealth::OverBudget => "Over Budget",
            BudgetHealth::Suppressed => "Suppressed",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
/// Derived standing for a single cost/target pair. Recomputed per call.
pub struct BudgetClassification {
    pub estimated_cost: f64,
    pub savings_target: f64,
    /// Headroom left before the target is reached. Negative once past it.
    pub remaining: f64,
    /// Amount past the target. Zero unless over budget.
    pub overage: f64,
    pub percent_used: Option<f64>,
    pub health: BudgetHealth,
}

impl BudgetClassification {
    /// Derives the classification from a cost/target pair.
    ///
    /// A zero target suppresses the result rather than reporting 0% usage.
    /// Only a cost strictly above the target is over budget, so exact
    /// equality with the target (100%) stays `NearLimit`.
    pub fn from_parts(estimated_cost: f64, savings_target: f64) -> Self {
        if savings_target.abs() < f64::EPSILON {
            return Self {
                estimated_cost,
                savings_target,
                remaining: 0.0,
                overage: 0.0,
                percent_used: None,
                health: BudgetHealth::Suppressed,
            };
        }

        let percent_used = (estimated_cost / savings_target) * 100.0;
        let health = if estimated_cost > savings_target {
            BudgetHealth::OverBudget
        } else if percent_used >= NEAR_LIMIT_THRESHOLD {
            BudgetHealth::NearLimit
        } else {
            BudgetHealth::OnTrack
        };

        Self {
            estimated_cost,
            savings_target,
            remaining: savings_target - estimated_cost,
            overage: (estimated_cost - savings_target).max(0.0),
            percent_used: Some(percent_used),
            health,
        }
    }
}
