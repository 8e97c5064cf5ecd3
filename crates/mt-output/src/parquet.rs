//! Parquet output backend (feature `parquet`).
//!
//! Creates two files in the output directory:
//! - `motor_twin_output.parquet`
//! - `maintenance_events.parquet`
//!
//! Rows are buffered and written as one record batch per [`BATCH_ROWS`].

use std::fs::File;
use std::path::Path;
use std::sync::Arc;

use arrow::array::{Float64Builder, StringBuilder, UInt64Builder};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;
use parquet::basic::Compression;
use parquet::file::properties::WriterProperties;

use crate::writer::OutputWriter;
use crate::{MaintenanceRow, OutputResult, TwinRow};

pub const TWIN_FILE: &str = "motor_twin_output.parquet";
pub const MAINTENANCE_FILE: &str = "maintenance_events.parquet";

/// Hourly rows per record batch.
pub const BATCH_ROWS: usize = 8_192;

fn twin_schema() -> Arc<Schema> {
    Arc::new(Schema::new(vec![
        Field::new("hour",         DataType::UInt64,  false),
        Field::new("mode",         DataType::Utf8,    false),
        Field::new("load",         DataType::Float64, false),
        Field::new("ambient_temp", DataType::Float64, false),
        Field::new("motor_temp",   DataType::Float64, false),
        Field::new("rpm",          DataType::Float64, false),
        Field::new("current",      DataType::Float64, false),
        Field::new("noise",        DataType::Float64, false),
        Field::new("vibration",    DataType::Float64, false),
        Field::new("health",       DataType::Float64, false),
        Field::new("rul",          DataType::Float64, false),
        Field::new("status",       DataType::Utf8,    false),
    ]))
}

fn maintenance_schema() -> Arc<Schema> {
    Arc::new(Schema::new(vec![
        Field::new("hour",             DataType::UInt64,  false),
        Field::new("candidate_health", DataType::Float64, false),
        Field::new("health",           DataType::Float64, false),
        Field::new("ceiling_before",   DataType::Float64, false),
        Field::new("ceiling_after",    DataType::Float64, false),
    ]))
}

fn snappy_props() -> WriterProperties {
    WriterProperties::builder()
        .set_compression(Compression::SNAPPY)
        .build()
}

/// Column builder shorthand: one `Float64Builder` filled from `rows`.
fn f64_column<T>(rows: &[T], field: impl Fn(&T) -> f64) -> Float64Builder {
    let mut b = Float64Builder::with_capacity(rows.len());
    for row in rows {
        b.append_value(field(row));
    }
    b
}

/// Writes a run to two Parquet files.
///
/// `finish()` **must** be called to write the file footers; files written
/// without it cannot be opened by Parquet readers.
pub struct ParquetWriter {
    rows:         Option<ArrowWriter<File>>,
    maintenance:  Option<ArrowWriter<File>>,
    row_schema:   Arc<Schema>,
    maint_schema: Arc<Schema>,
    pending:      Vec<TwinRow>,
    events:       Vec<MaintenanceRow>,
}

impl ParquetWriter {
    /// Create both Parquet files in `dir`.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let row_schema = twin_schema();
        let maint_schema = maintenance_schema();

        let rows = ArrowWriter::try_new(
            File::create(dir.join(TWIN_FILE))?,
            Arc::clone(&row_schema),
            Some(snappy_props()),
        )?;
        let maintenance = ArrowWriter::try_new(
            File::create(dir.join(MAINTENANCE_FILE))?,
            Arc::clone(&maint_schema),
            Some(snappy_props()),
        )?;

        Ok(Self {
            rows:         Some(rows),
            maintenance:  Some(maintenance),
            row_schema,
            maint_schema,
            pending:      Vec::with_capacity(BATCH_ROWS),
            events:       Vec::new(),
        })
    }

    fn flush_rows(&mut self) -> OutputResult<()> {
        if self.pending.is_empty() {
            return Ok(());
        }
        let Some(writer) = self.rows.as_mut() else {
            return Ok(());
        };
        let rows = &self.pending;

        let mut hours = UInt64Builder::with_capacity(rows.len());
        let mut modes = StringBuilder::new();
        let mut statuses = StringBuilder::new();
        for row in rows {
            hours.append_value(row.hour);
            modes.append_value(row.mode.as_str());
            statuses.append_value(row.status.as_str());
        }

        let batch = RecordBatch::try_new(
            Arc::clone(&self.row_schema),
            vec![
                Arc::new(hours.finish()),
                Arc::new(modes.finish()),
                Arc::new(f64_column(rows, |r| r.load).finish()),
                Arc::new(f64_column(rows, |r| r.ambient_temp).finish()),
                Arc::new(f64_column(rows, |r| r.motor_temp).finish()),
                Arc::new(f64_column(rows, |r| r.rpm).finish()),
                Arc::new(f64_column(rows, |r| r.current).finish()),
                Arc::new(f64_column(rows, |r| r.noise).finish()),
                Arc::new(f64_column(rows, |r| r.vibration).finish()),
                Arc::new(f64_column(rows, |r| r.health).finish()),
                Arc::new(f64_column(rows, |r| r.rul).finish()),
                Arc::new(statuses.finish()),
            ],
        )?;
        writer.write(&batch)?;
        self.pending.clear();
        Ok(())
    }

    fn flush_events(&mut self) -> OutputResult<()> {
        if self.events.is_empty() {
            return Ok(());
        }
        let Some(writer) = self.maintenance.as_mut() else {
            return Ok(());
        };
        let events = &self.events;

        let mut hours = UInt64Builder::with_capacity(events.len());
        for e in events {
            hours.append_value(e.hour);
        }

        let batch = RecordBatch::try_new(
            Arc::clone(&self.maint_schema),
            vec![
                Arc::new(hours.finish()),
                Arc::new(f64_column(events, |e| e.candidate_health).finish()),
                Arc::new(f64_column(events, |e| e.health).finish()),
                Arc::new(f64_column(events, |e| e.ceiling_before).finish()),
                Arc::new(f64_column(events, |e| e.ceiling_after).finish()),
            ],
        )?;
        writer.write(&batch)?;
        self.events.clear();
        Ok(())
    }
}

impl OutputWriter for ParquetWriter {
    fn write_row(&mut self, row: &TwinRow) -> OutputResult<()> {
        self.pending.push(*row);
        if self.pending.len() >= BATCH_ROWS {
            self.flush_rows()?;
        }
        Ok(())
    }

    fn write_maintenance(&mut self, row: &MaintenanceRow) -> OutputResult<()> {
        self.events.push(*row);
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        self.flush_rows()?;
        self.flush_events()?;
        if let Some(w) = self.rows.take() {
            w.close()?;
        }
        if let Some(w) = self.maintenance.take() {
            w.close()?;
        }
        Ok(())
    }
}
