//! SQLite output backend (feature `sqlite`).
//!
//! Creates `motor_twin.db` in the output directory with two tables,
//! `twin_rows` and `maintenance_events`.  Hourly rows are buffered and
//! inserted in one transaction per [`COMMIT_EVERY`] rows.

use std::path::Path;

use rusqlite::Connection;

use crate::writer::OutputWriter;
use crate::{MaintenanceRow, OutputResult, TwinRow};

pub const DB_FILE: &str = "motor_twin.db";

/// Rows per insert transaction.
pub const COMMIT_EVERY: usize = 1_024;

/// Writes a run to an SQLite database.
pub struct SqliteWriter {
    conn:     Connection,
    pending:  Vec<TwinRow>,
    finished: bool,
}

impl SqliteWriter {
    /// Open (or create) `motor_twin.db` in `dir` and initialise the schema.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let conn = Connection::open(dir.join(DB_FILE))?;

        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA synchronous  = NORMAL;
             CREATE TABLE IF NOT EXISTS twin_rows (
                 hour         INTEGER PRIMARY KEY,
                 mode         TEXT    NOT NULL,
                 load         REAL    NOT NULL,
                 ambient_temp REAL    NOT NULL,
                 motor_temp   REAL    NOT NULL,
                 rpm          REAL    NOT NULL,
                 current      REAL    NOT NULL,
                 noise        REAL    NOT NULL,
                 vibration    REAL    NOT NULL,
                 health       REAL    NOT NULL,
                 rul          REAL    NOT NULL,
                 status       TEXT    NOT NULL
             );
             CREATE TABLE IF NOT EXISTS maintenance_events (
                 hour             INTEGER PRIMARY KEY,
                 candidate_health REAL NOT NULL,
                 health           REAL NOT NULL,
                 ceiling_before   REAL NOT NULL,
                 ceiling_after    REAL NOT NULL
             );",
        )?;

        Ok(Self {
            conn,
            pending:  Vec::with_capacity(COMMIT_EVERY),
            finished: false,
        })
    }

    fn flush_rows(&mut self) -> OutputResult<()> {
        if self.pending.is_empty() {
            return Ok(());
        }
        let tx = self.conn.unchecked_transaction()?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO twin_rows \
                 (hour, mode, load, ambient_temp, motor_temp, rpm, current, noise, vibration, health, rul, status) \
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)",
            )?;
            for row in &self.pending {
                stmt.execute(rusqlite::params![
                    row.hour as i64,
                    row.mode.as_str(),
                    row.load,
                    row.ambient_temp,
                    row.motor_temp,
                    row.rpm,
                    row.current,
                    row.noise,
                    row.vibration,
                    row.health,
                    row.rul,
                    row.status.as_str(),
                ])?;
            }
        }
        tx.commit()?;
        self.pending.clear();
        Ok(())
    }
}

impl OutputWriter for SqliteWriter {
    fn write_row(&mut self, row: &TwinRow) -> OutputResult<()> {
        self.pending.push(*row);
        if self.pending.len() >= COMMIT_EVERY {
            self.flush_rows()?;
        }
        Ok(())
    }

    fn write_maintenance(&mut self, row: &MaintenanceRow) -> OutputResult<()> {
        self.conn.execute(
            "INSERT INTO maintenance_events \
             (hour, candidate_health, health, ceiling_before, ceiling_after) \
             VALUES (?1, ?2, ?3, ?4, ?5)",
            rusqlite::params![
                row.hour as i64,
                row.candidate_health,
                row.health,
                row.ceiling_before,
                row.ceiling_after,
            ],
        )?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.flush_rows()?;
        self.finished = true;
        self.conn.execute_batch("PRAGMA wal_checkpoint(TRUNCATE);")?;
        Ok(())
    }
}
