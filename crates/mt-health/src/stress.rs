//! Per-tick stress aggregation.
//!
//! ```text
//! thermal    = max(0, motor_temp − 60) · 0.05
//! mechanical = vibration · 0.1 + (noise − 40) · 0.02      (may be negative)
//! electrical = max(0, current − 2.5)² · 0.4
//! degradation = thermal + mechanical + electrical + N(0, σ)
//! ```
//!
//! The total may be negative (a quiet hour plus an unlucky perturbation).
//! That is part of the model: [`DegradationRate`] tells the RUL estimator
//! whether the rate can be divided by.

use mt_core::{SimRng, StressConfig};
use mt_sensors::SensorRecord;

use crate::DegradationRate;

/// The three physical stress terms plus the stochastic wear term of one tick.
#[derive(Copy, Clone, PartialEq, Debug, Default)]
pub struct StressBreakdown {
    pub thermal:      f64,
    pub mechanical:   f64,
    pub electrical:   f64,
    pub perturbation: f64,
}

impl StressBreakdown {
    /// Health lost this tick.
    #[inline]
    pub fn total(&self) -> f64 {
        self.thermal + self.mechanical + self.electrical + self.perturbation
    }

    #[inline]
    pub fn rate(&self) -> DegradationRate {
        DegradationRate::from_total(self.total())
    }
}

/// Maps a sensor record to a [`StressBreakdown`].
#[derive(Clone, Debug)]
pub struct StressAggregator {
    config: StressConfig,
}

impl StressAggregator {
    pub fn new(config: StressConfig) -> Self {
        Self { config }
    }

    /// The deterministic part of the stress: every term except the
    /// perturbation, which is left at zero.
    pub fn assess(&self, record: &SensorRecord) -> StressBreakdown {
        let c = &self.config;
        let excess_current = (record.current - c.current_threshold_a).max(0.0);
        StressBreakdown {
            thermal:      (record.motor_temp - c.thermal_threshold_c).max(0.0) * c.thermal_coeff,
            mechanical:   record.vibration * c.vibration_coeff
                + (record.noise - c.noise_baseline_db) * c.noise_coeff,
            electrical:   excess_current * excess_current * c.current_coeff,
            perturbation: 0.0,
        }
    }

    /// Full stress for one tick.  Draws exactly one Gaussian from `rng`.
    pub fn aggregate(&self, record: &SensorRecord, rng: &mut SimRng) -> StressBreakdown {
        StressBreakdown {
            perturbation: rng.gaussian(0.0, self.config.perturbation_sigma),
            ..self.assess(record)
        }
    }
}
