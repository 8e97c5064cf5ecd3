//! `mt-output` — result sinks for motor_twin runs.
//!
//! Three backends are provided behind Cargo features:
//!
//! | Feature   | Backend | Files created                                                |
//! |-----------|---------|--------------------------------------------------------------|
//! | *(none)*  | CSV     | `motor_twin_output.csv`, `maintenance_events.csv`            |
//! | `sqlite`  | SQLite  | `motor_twin.db`                                              |
//! | `parquet` | Parquet | `motor_twin_output.parquet`, `maintenance_events.parquet`    |
//!
//! All backends implement [`OutputWriter`] and are driven by
//! [`TwinOutputObserver`], which implements `mt_sim::TwinObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use mt_output::{CsvWriter, TwinOutputObserver};
//!
//! let mut obs = TwinOutputObserver::new(CsvWriter::new(Path::new("./output"))?);
//! let run = engine.run(records, &mut obs);
//! if let Some(e) = obs.take_error() {
//!     eprintln!("output error: {e}");
//! }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(feature = "sqlite")]
pub mod sqlite;

#[cfg(feature = "parquet")]
pub mod parquet;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::TwinOutputObserver;
pub use row::{MaintenanceRow, TwinRow};
pub use writer::OutputWriter;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteWriter;

#[cfg(feature = "parquet")]
pub use parquet::ParquetWriter;
