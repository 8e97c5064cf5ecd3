//! The per-hour sensor record consumed by the degradation engine.

use std::fmt;
use std::str::FromStr;

use mt_core::Tick;

use crate::SensorError;

// ── OperatingMode ─────────────────────────────────────────────────────────────

/// Operational regime of the motor during one hour.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum OperatingMode {
    Idle,
    Active,
    Stressed,
}

impl OperatingMode {
    pub const ALL: [OperatingMode; 3] = [Self::Idle, Self::Active, Self::Stressed];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Idle     => "idle",
            Self::Active   => "active",
            Self::Stressed => "stressed",
        }
    }
}

impl fmt::Display for OperatingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OperatingMode {
    type Err = SensorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "idle"     => Ok(Self::Idle),
            "active"   => Ok(Self::Active),
            "stressed" => Ok(Self::Stressed),
            other => Err(SensorError::Parse(format!(
                "invalid mode {other:?}: expected \"idle\", \"active\", or \"stressed\""
            ))),
        }
    }
}

// ── SensorRecord ──────────────────────────────────────────────────────────────

/// One hour of motor telemetry.
///
/// Records are plain `Copy` data: once produced they are never mutated, and
/// the engine passes them through untouched to the output sinks.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SensorRecord {
    pub tick:         Tick,
    pub mode:         OperatingMode,
    /// Load, percent of rated.
    pub load:         f64,
    /// Ambient temperature, °C.
    pub ambient_temp: f64,
    /// Winding temperature, °C.
    pub motor_temp:   f64,
    pub rpm:          f64,
    /// Supply current, A.
    pub current:      f64,
    /// Acoustic noise, dB.
    pub noise:        f64,
    pub vibration:    f64,
}
