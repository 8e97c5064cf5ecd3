//! Plain row types written by output backends.

use mt_health::HealthStatus;
use mt_sensors::OperatingMode;
use mt_sim::{MaintenanceEvent, TickReport};

/// One hour of the run: the sensor passthrough plus the computed health.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TwinRow {
    pub hour:         u64,
    pub mode:         OperatingMode,
    pub load:         f64,
    pub ambient_temp: f64,
    pub motor_temp:   f64,
    pub rpm:          f64,
    pub current:      f64,
    pub noise:        f64,
    pub vibration:    f64,
    pub health:       f64,
    pub rul:          f64,
    pub status:       HealthStatus,
}

impl TwinRow {
    pub fn from_report(report: &TickReport<'_>) -> Self {
        let r = report.record;
        Self {
            hour:         r.tick.0,
            mode:         r.mode,
            load:         r.load,
            ambient_temp: r.ambient_temp,
            motor_temp:   r.motor_temp,
            rpm:          r.rpm,
            current:      r.current,
            noise:        r.noise,
            vibration:    r.vibration,
            health:       report.health,
            rul:          report.rul,
            status:       report.status,
        }
    }
}

/// One maintenance intervention.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MaintenanceRow {
    pub hour:             u64,
    pub candidate_health: f64,
    pub health:           f64,
    pub ceiling_before:   f64,
    pub ceiling_after:    f64,
}

impl From<&MaintenanceEvent> for MaintenanceRow {
    fn from(e: &MaintenanceEvent) -> Self {
        Self {
            hour:             e.tick.0,
            candidate_health: e.candidate_health,
            health:           e.health,
            ceiling_before:   e.ceiling_before,
            ceiling_after:    e.ceiling_after,
        }
    }
}
