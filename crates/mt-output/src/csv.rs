//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `motor_twin_output.csv`
//! - `maintenance_events.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{MaintenanceRow, OutputResult, TwinRow};

pub const TWIN_FILE: &str = "motor_twin_output.csv";
pub const MAINTENANCE_FILE: &str = "maintenance_events.csv";

/// Column labels of the hourly file, in order.
pub const TWIN_HEADERS: [&str; 12] = [
    "Time (hrs)",
    "Mode",
    "Load (%)",
    "Ambient Temp (°C)",
    "Motor Temp (°C)",
    "RPM",
    "Current (A)",
    "Noise (dB)",
    "Vibration",
    "Health (%)",
    "RUL (hrs)",
    "Status",
];

pub const MAINTENANCE_HEADERS: [&str; 5] =
    ["Time (hrs)", "Candidate Health (%)", "Health (%)", "Ceiling Before (%)", "Ceiling After (%)"];

/// Writes a run to two CSV files.
pub struct CsvWriter {
    rows:        Writer<File>,
    maintenance: Writer<File>,
    finished:    bool,
}

impl CsvWriter {
    /// Create (or truncate) both files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut rows = Writer::from_path(dir.join(TWIN_FILE))?;
        rows.write_record(TWIN_HEADERS)?;

        let mut maintenance = Writer::from_path(dir.join(MAINTENANCE_FILE))?;
        maintenance.write_record(MAINTENANCE_HEADERS)?;

        Ok(Self {
            rows,
            maintenance,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_row(&mut self, row: &TwinRow) -> OutputResult<()> {
        self.rows.write_record(&[
            row.hour.to_string(),
            row.mode.to_string(),
            row.load.to_string(),
            row.ambient_temp.to_string(),
            row.motor_temp.to_string(),
            row.rpm.to_string(),
            row.current.to_string(),
            row.noise.to_string(),
            row.vibration.to_string(),
            row.health.to_string(),
            row.rul.to_string(),
            row.status.to_string(),
        ])?;
        Ok(())
    }

    fn write_maintenance(&mut self, row: &MaintenanceRow) -> OutputResult<()> {
        self.maintenance.write_record(&[
            row.hour.to_string(),
            row.candidate_health.to_string(),
            row.health.to_string(),
            row.ceiling_before.to_string(),
            row.ceiling_after.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.rows.flush()?;
        self.maintenance.flush()?;
        Ok(())
    }
}
