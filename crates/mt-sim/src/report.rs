//! Per-tick reports and the frozen result of a run.

use mt_core::Tick;
use mt_health::{HealthStatus, Recovery, StressBreakdown};
use mt_sensors::SensorRecord;

// ── TickPhase ─────────────────────────────────────────────────────────────────

/// Which branch produced a tick's health.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum TickPhase {
    /// The initial tick: health 100, no computation.
    Seeded,
    /// Candidate health stayed at or above the threshold.
    Degrading,
    /// Candidate health fell below the threshold and maintenance fired.
    UnderMaintenance,
}

// ── MaintenanceEvent ──────────────────────────────────────────────────────────

/// One maintenance intervention.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct MaintenanceEvent {
    pub tick:             Tick,
    /// Health the tick would have had without maintenance.
    pub candidate_health: f64,
    /// Health after maintenance, in `[min_recovery, ceiling_before]`.
    pub health:           f64,
    pub ceiling_before:   f64,
    pub ceiling_after:    f64,
}

impl MaintenanceEvent {
    pub fn from_recovery(tick: Tick, r: &Recovery) -> Self {
        Self {
            tick,
            candidate_health: r.candidate,
            health:           r.health,
            ceiling_before:   r.ceiling_before,
            ceiling_after:    r.ceiling_after,
        }
    }
}

// ── TickReport ────────────────────────────────────────────────────────────────

/// Everything the engine computed for one tick, plus the source record for
/// passthrough to output sinks.
#[derive(Copy, Clone, Debug)]
pub struct TickReport<'a> {
    pub record:      &'a SensorRecord,
    pub phase:       TickPhase,
    /// All zero for the seeded tick.
    pub stress:      StressBreakdown,
    pub health:      f64,
    pub rul:         f64,
    pub status:      HealthStatus,
    /// Recovery ceiling after this tick.
    pub ceiling:     f64,
    pub maintenance: Option<MaintenanceEvent>,
}

impl TickReport<'_> {
    #[inline]
    pub fn tick(&self) -> Tick {
        self.record.tick
    }

    #[inline]
    pub fn degradation(&self) -> f64 {
        self.stress.total()
    }
}

// ── HealthRun ─────────────────────────────────────────────────────────────────

/// The frozen output of one engine run.
///
/// All per-tick vectors are aligned and have the same length (at least 1:
/// the seeded tick is always present).  `maintenance_events` is sparse and
/// strictly increasing in tick.
#[derive(Clone, Debug, PartialEq)]
pub struct HealthRun {
    pub ticks:              Vec<Tick>,
    pub health:             Vec<f64>,
    pub rul:                Vec<f64>,
    pub status:             Vec<HealthStatus>,
    /// Per-tick wear total; `0.0` at the seeded tick.
    pub degradation:        Vec<f64>,
    /// Recovery ceiling in force after each tick.
    pub recovery_ceiling:   Vec<f64>,
    pub maintenance_events: Vec<MaintenanceEvent>,
}

impl HealthRun {
    pub(crate) fn with_capacity(n: usize) -> Self {
        Self {
            ticks:              Vec::with_capacity(n),
            health:             Vec::with_capacity(n),
            rul:                Vec::with_capacity(n),
            status:             Vec::with_capacity(n),
            degradation:        Vec::with_capacity(n),
            recovery_ceiling:   Vec::with_capacity(n),
            maintenance_events: Vec::new(),
        }
    }

    pub(crate) fn push(&mut self, report: &TickReport<'_>) {
        self.push_values(
            report.tick(),
            report.health,
            report.rul,
            report.status,
            report.degradation(),
            report.ceiling,
        );
        if let Some(event) = report.maintenance {
            self.maintenance_events.push(event);
        }
    }

    /// Append one tick that has no source record (the seeded tick of an
    /// empty stream).
    pub(crate) fn push_values(
        &mut self,
        tick:        Tick,
        health:      f64,
        rul:         f64,
        status:      HealthStatus,
        degradation: f64,
        ceiling:     f64,
    ) {
        self.ticks.push(tick);
        self.health.push(health);
        self.rul.push(rul);
        self.status.push(status);
        self.degradation.push(degradation);
        self.recovery_ceiling.push(ceiling);
    }

    /// Number of ticks in the run.
    #[inline]
    pub fn len(&self) -> usize {
        self.ticks.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ticks.is_empty()
    }

    /// Hours at which maintenance fired.
    pub fn maintenance_ticks(&self) -> Vec<Tick> {
        self.maintenance_events.iter().map(|e| e.tick).collect()
    }

    pub fn final_health(&self) -> Option<f64> {
        self.health.last().copied()
    }

    pub fn final_rul(&self) -> Option<f64> {
        self.rul.last().copied()
    }

    /// Ticks spent in each status, as (normal, warning, critical).
    pub fn status_counts(&self) -> (usize, usize, usize) {
        self.status.iter().fold((0, 0, 0), |(n, w, c), s| match s {
            HealthStatus::Normal   => (n + 1, w, c),
            HealthStatus::Warning  => (n, w + 1, c),
            HealthStatus::Critical => (n, w, c + 1),
        })
    }
}
