//! `mt-sensors` — the sensor stream feeding the degradation engine.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                  |
//! |---------------|-----------------------------------------------------------|
//! | [`record`]    | `SensorRecord`, `OperatingMode`                           |
//! | [`profile`]   | `ModeProfile` (per-mode signal shape), `ModeMix`          |
//! | [`synthetic`] | `SyntheticSensors` — seeded `Iterator<Item = SensorRecord>` |
//! | [`loader`]    | `load_records_csv`, `load_records_reader`                 |
//! | [`error`]     | `SensorError`, `SensorResult<T>`                          |
//!
//! The engine accepts any `IntoIterator<Item = SensorRecord>`, so a stream
//! can come from the synthesiser, a CSV file, or a hand-built `Vec`.

pub mod error;
pub mod loader;
pub mod profile;
pub mod record;
pub mod synthetic;

#[cfg(test)]
mod tests;

pub use error::{SensorError, SensorResult};
pub use loader::{load_records_csv, load_records_reader};
pub use profile::{ModeMix, ModeProfile};
pub use record::{OperatingMode, SensorRecord};
pub use synthetic::SyntheticSensors;
