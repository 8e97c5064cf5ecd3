//! Three-level health status.

use std::fmt;

use mt_core::StatusBands;

#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum HealthStatus {
    Normal,
    Warning,
    Critical,
}

impl HealthStatus {
    /// Classify `health` against `bands`.  Evaluated fresh every tick; there
    /// is no hysteresis.
    ///
    /// With the default bands: `> 75` Normal, `(50, 75]` Warning, `≤ 50` Critical.
    #[inline]
    pub fn classify(health: f64, bands: &StatusBands) -> Self {
        if health > bands.normal_above {
            Self::Normal
        } else if health > bands.warning_above {
            Self::Warning
        } else {
            Self::Critical
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Normal   => "Normal",
            Self::Warning  => "Warning",
            Self::Critical => "Critical",
        }
    }
}

impl fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
