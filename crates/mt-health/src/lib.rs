//! `mt-health` — the per-tick building blocks of the degradation model.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                      |
//! |-----------------|---------------------------------------------------------------|
//! | [`stress`]      | `StressAggregator`, `StressBreakdown`                         |
//! | [`maintenance`] | `MaintenancePolicy`, `HealthUpdate`, `Recovery`               |
//! | [`rul`]         | `DegradationRate`, `estimate_rul`, `initial_rul`              |
//! | [`status`]      | `HealthStatus` (Normal / Warning / Critical)                  |
//!
//! # Per-tick pipeline
//!
//! ```text
//! record ─▶ StressAggregator ─▶ candidate = health[t−1] − degradation
//!                                   │
//!                                   ▼
//!                          MaintenancePolicy ─▶ health[t]
//!                                   │
//!                   ┌───────────────┴───────────────┐
//!                   ▼                               ▼
//!           estimate_rul(health, rate)     HealthStatus::classify
//! ```
//!
//! Everything here is single-tick logic; the loop that threads state from
//! one tick to the next lives in `mt-sim`.

pub mod maintenance;
pub mod rul;
pub mod status;
pub mod stress;


pub use maintenance::{HealthUpdate, MaintenancePolicy, Recovery};
pub use rul::{DegradationRate, SEED_DEGRADATION_RATE, estimate_rul, initial_rul};
pub use status::HealthStatus;
pub use stress::{StressAggregator, StressBreakdown};
