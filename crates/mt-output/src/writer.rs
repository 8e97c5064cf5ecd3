//! The `OutputWriter` trait implemented by all backend writers.

use crate::{MaintenanceRow, OutputResult, TwinRow};

/// Trait implemented by the CSV, SQLite, and Parquet writers.
///
/// Errors surface through [`TwinOutputObserver::take_error`][crate::TwinOutputObserver::take_error]
/// when the writer is driven by the engine.
pub trait OutputWriter {
    /// Write one hourly row.
    fn write_row(&mut self, row: &TwinRow) -> OutputResult<()>;

    /// Write one maintenance intervention.
    fn write_maintenance(&mut self, row: &MaintenanceRow) -> OutputResult<()>;

    /// Flush and close all underlying handles.  Safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
