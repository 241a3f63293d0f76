#![doc(test(attr(deny(warnings))))]

//! Trip Core offers the budgeting, progress, and session primitives that
//! power the trip-planning front-end.

pub mod config;
pub mod core;
pub mod domain;
pub mod session;
pub mod utils;

pub use crate::core::errors::{Result, TripError};

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!(
            "Trip Core {} initialized.",
            utils::build_info::CORE_VERSION
        );
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
    }
}
