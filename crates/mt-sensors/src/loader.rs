//! CSV sensor-stream loader.
//!
//! # CSV format
//!
//! One row per simulated hour, in ascending `time` order:
//!
//! ```csv
//! time,mode,load,ambient_temp,motor_temp,rpm,current,noise,vibration
//! 0,idle,25.0,25.0,27.0,1275.0,1.95,40.0,0.1
//! 1,active,55.0,31.2,36.4,1424.8,2.86,45.3,0.47
//! ```
//!
//! **`mode`** is one of `idle`, `active`, `stressed` (case-insensitive).
//!
//! Rows are validated for strictly increasing `time` because the engine
//! consumes exactly one record per hour in order; it does not re-sort.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use mt_core::Tick;

use crate::{OperatingMode, SensorError, SensorRecord};

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct SensorCsvRecord {
    time:         u64,
    mode:         String,
    load:         f64,
    ambient_temp: f64,
    motor_temp:   f64,
    rpm:          f64,
    current:      f64,
    noise:        f64,
    vibration:    f64,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a sensor stream from a CSV file.
pub fn load_records_csv(path: &Path) -> Result<Vec<SensorRecord>, SensorError> {
    let file = std::fs::File::open(path)
        .map_err(SensorError::Io)?;
    load_records_reader(file)
}

/// Like [`load_records_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or piping telemetry in from
/// another process.
pub fn load_records_reader<R: Read>(reader: R) -> Result<Vec<SensorRecord>, SensorError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut records: Vec<SensorRecord> = Vec::new();

    for (line, result) in csv_reader.deserialize::<SensorCsvRecord>().enumerate() {
        let row = result.map_err(|e| SensorError::Parse(e.to_string()))?;

        if let Some(prev) = records.last() {
            if row.time <= prev.tick.0 {
                return Err(SensorError::Parse(format!(
                    "row {}: time {} does not follow time {}",
                    line + 1,
                    row.time,
                    prev.tick.0
                )));
            }
        }

        records.push(SensorRecord {
            tick:         Tick(row.time),
            mode:         row.mode.parse::<OperatingMode>()?,
            load:         row.load,
            ambient_temp: row.ambient_temp,
            motor_temp:   row.motor_temp,
            rpm:          row.rpm,
            current:      row.current,
            noise:        row.noise,
            vibration:    row.vibration,
        });
    }

    Ok(records)
}
