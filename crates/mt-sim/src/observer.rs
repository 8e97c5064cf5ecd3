//! Run observer trait for progress reporting and data collection.

use mt_core::TwinConfig;

use crate::{HealthRun, MaintenanceEvent, TickReport};

/// Callbacks invoked by [`DegradationEngine::run`][crate::DegradationEngine::run]
/// at key points in the tick loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.  Hooks return nothing and receive only
/// shared references: an observer can record the run but never steer it.
///
/// # Example: maintenance printer
///
/// ```rust,ignore
/// struct MaintenancePrinter;
///
/// impl TwinObserver for MaintenancePrinter {
///     fn on_maintenance(&mut self, event: &MaintenanceEvent) {
///         println!("{}: serviced back to {:.1}%", event.tick, event.health);
///     }
/// }
/// ```
pub trait TwinObserver {
    /// Called once before the first tick.
    fn on_run_start(&mut self, _config: &TwinConfig) {}

    /// Called after every tick, including the seeded first tick.
    fn on_tick_end(&mut self, _report: &TickReport<'_>) {}

    /// Called when maintenance fires, before `on_tick_end` for the same tick.
    fn on_maintenance(&mut self, _event: &MaintenanceEvent) {}

    /// Called once after the final tick with the frozen result.
    fn on_run_end(&mut self, _run: &HealthRun) {}
}

/// A [`TwinObserver`] that does nothing.  Use when you need to call `run` but
/// don't want callbacks.
pub struct NoopObserver;

impl TwinObserver for NoopObserver {}
