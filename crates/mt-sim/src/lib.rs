//! `mt-sim` — the degradation engine for motor_twin.
//!
//! # Tick loop
//!
//! ```text
//! tick 0:        health = 100, rul = 1000, Normal            (seeded, no draws)
//! for tick in 1..N:
//!   ① Stress   : StressAggregator on the tick's record     (1 Gaussian draw)
//!   ② Candidate: health[t−1] − degradation
//!   ③ Policy   : candidate < threshold ?
//!                    yes → health ~ U[min_recovery, ceiling]  (1 uniform draw)
//!                          ceiling = max(min_recovery, ceiling − step)
//!                    no  → health = candidate
//!   ④ RUL      : health / rate if rate > 0, else carry forward
//!   ⑤ Status   : Normal / Warning / Critical
//! ```
//!
//! Ticks are strictly sequential: each depends on the previous health and on
//! the ceiling left behind by every earlier intervention.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Runs the seeds of [`run_batch`] on Rayon's pool.       |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use mt_core::TwinConfig;
//! use mt_sensors::SyntheticSensors;
//! use mt_sim::{EngineBuilder, NoopObserver};
//!
//! let config = TwinConfig::default();
//! let stream = SyntheticSensors::new(config.sensor_seed, config.horizon_hours);
//! let run = EngineBuilder::new(config).build()?.run(stream, &mut NoopObserver);
//! println!("{} interventions", run.maintenance_events.len());
//! ```

pub mod batch;
pub mod builder;
pub mod engine;
pub mod error;
pub mod observer;
pub mod report;

#[cfg(test)]
mod tests;

pub use batch::{BatchSummary, run_batch};
pub use builder::EngineBuilder;
pub use engine::{DegradationEngine, INITIAL_HEALTH};
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, TwinObserver};
pub use report::{HealthRun, MaintenanceEvent, TickPhase, TickReport};
