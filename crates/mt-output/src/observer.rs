//! `TwinOutputObserver<W>` — bridges `TwinObserver` to an `OutputWriter`.

use tracing::warn;

use mt_sim::{HealthRun, MaintenanceEvent, TickReport, TwinObserver};

use crate::row::{MaintenanceRow, TwinRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`TwinObserver`] that streams every tick and maintenance event to any
/// [`OutputWriter`] backend.
///
/// Observer hooks return nothing, so the first write error is stored and
/// later writes are skipped.  Check it with [`take_error`][Self::take_error]
/// after the run.
pub struct TwinOutputObserver<W: OutputWriter> {
    writer:     W,
    rows:       u64,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> TwinOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, rows: 0, last_error: None }
    }

    /// Take the stored write error, if any.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Hourly rows successfully handed to the writer.
    pub fn rows_written(&self) -> u64 {
        self.rows
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            if self.last_error.is_none() {
                warn!(error = %e, "output write failed; further rows are dropped");
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> TwinObserver for TwinOutputObserver<W> {
    fn on_tick_end(&mut self, report: &TickReport<'_>) {
        if self.last_error.is_some() {
            return;
        }
        let result = self.writer.write_row(&TwinRow::from_report(report));
        if result.is_ok() {
            self.rows += 1;
        }
        self.store_err(result);
    }

    fn on_maintenance(&mut self, event: &MaintenanceEvent) {
        if self.last_error.is_some() {
            return;
        }
        let result = self.writer.write_maintenance(&MaintenanceRow::from(event));
        self.store_err(result);
    }

    fn on_run_end(&mut self, _run: &HealthRun) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
