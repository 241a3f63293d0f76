//! Derives per-step render state and the indicator fill for a trip.

use crate::core::errors::{Result, TripError};
use crate::domain::itinerary::{default_catalog, StepRenderState, TripProgress, TripStep};

/// Stateless progress derivation over a step catalog.
pub struct ProgressService;

impl ProgressService {
    /// Renders completed/current flags and the overall fill for each entry.
    ///
    /// The fill interpolates the current step across the catalog span and
    /// clamps to `[0, 1]`. A single-entry catalog always reads as complete;
    /// a current step outside the catalog marks no entry current.
    pub fn render(
        catalog: &[TripStep],
        current_step: u32,
        completed: &[u32],
    ) -> Result<TripProgress> {
        if catalog.is_empty() {
            return Err(TripError::InvalidInput("step catalog is empty".into()));
        }

        let steps = catalog
            .iter()
            .map(|entry| StepRenderState {
                index: entry.index,
                completed: completed.contains(&entry.index),
                current: entry.index == current_step,
            })
            .collect();

        let fraction = if catalog.len() == 1 {
            1.0
        } else {
            let span = (catalog.len() - 1) as f64;
            ((f64::from(current_step) - 1.0) / span).clamp(0.0, 1.0)
        };

        Ok(TripProgress { steps, fraction })
    }

    /// Renders against the built-in catalog.
    pub fn render_default(current_step: u32, completed: &[u32]) -> Result<TripProgress> {
        Self::render(default_catalog(), current_step, completed)
    }
}
