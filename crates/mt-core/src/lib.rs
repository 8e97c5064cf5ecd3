//! `mt-core` — foundational types for the `motor_twin` degradation simulator.
//!
//! This crate is a dependency of every other `mt-*` crate.  It has no `mt-*`
//! dependencies and minimal external ones (`rand`, `rand_distr` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                                    |
//! |-----------------|-------------------------------------------------------------|
//! | [`time`]        | `Tick` (one simulated hour)                                 |
//! | [`rng`]         | `SimRng` — the single seeded source for one run             |
//! | [`config`]      | `TwinConfig`, `MaintenanceConfig`, `StressConfig`, `StatusBands` |
//! | [`error`]       | `MtError`, `MtResult`                                       |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to config and time types.   |
//!           | Required to load a `TwinConfig` from TOML.                 |

pub mod config;
pub mod error;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{MaintenanceConfig, StatusBands, StressConfig, TwinConfig};
pub use error::{MtError, MtResult};
pub use rng::SimRng;
pub use time::Tick;
