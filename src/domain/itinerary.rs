//! The fixed trip-planning step catalog and its derived render state.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
/// One entry in the ordered planning step catalog.
pub struct TripStep {
    /// 1-based position in the catalog. Dense by construction.
    pub index: u32,
    pub title: String,
    pub subtitle: String,
}

impl TripStep {
    pub fn new(index: u32, title: impl Into<String>, subtitle: impl Into<String>) -> Self {
        Self {
            index,
            title: title.into(),
            subtitle: subtitle.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
/// Render flags derived for a single catalog entry.
pub struct StepRenderState {
    pub index: u32,
    pub completed: bool,
    pub current: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
/// Per-step flags plus the overall indicator fill, in catalog order.
pub struct TripProgress {
    pub steps: Vec<StepRenderState>,
    /// Indicator fill in `[0, 1]`.
    pub fraction: f64,
}

static DEFAULT_CATALOG: Lazy<Vec<TripStep>> = Lazy::new(|| {
    vec![
        TripStep::new(1, "Dream", "Pick a destination and set a savings target"),
        TripStep::new(2, "Save & Book", "Track savings and lock in the bookings"),
        TripStep::new(3, "Go", "Pack up and enjoy the trip"),
    ]
});

/// Returns the built-in planning catalog. Defined once, never mutated.
pub fn default_catalog() -> &'static [TripStep] {
    &DEFAULT_CATALOG
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_catalog_is_dense_and_one_based() {
        let catalog = default_catalog();
        assert_eq!(catalog.len(), 3);
        for (position, step) in catalog.iter().enumerate() {
            assert_eq!(step.index, position as u32 + 1);
        }
    }
}
