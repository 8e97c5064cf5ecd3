//! Run configuration.
//!
//! Every tunable of the degradation model lives here so that nothing in the
//! engine is hard-coded.  Defaults reproduce the reference motor:
//!
//! | Key                          | Default |
//! |------------------------------|---------|
//! | `maintenance.threshold`      | 50      |
//! | `maintenance.min_recovery`   | 60      |
//! | `maintenance.max_recovery`   | 90      |
//! | `maintenance.decay_step`     | 0.5     |
//! | `horizon_hours`              | 10 000  |
//! | `seed` / `sensor_seed`       | 42      |
//!
//! With the `serde` feature every struct is `#[serde(default)]`, so a TOML
//! file only needs the keys it overrides.

use crate::{MtError, MtResult};

// ── MaintenanceConfig ─────────────────────────────────────────────────────────

/// Parameters of the maintenance policy.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MaintenanceConfig {
    /// Maintenance fires when candidate health drops strictly below this.
    pub threshold: f64,

    /// Floor of post-maintenance health and of the recovery ceiling.
    pub min_recovery: f64,

    /// Initial recovery ceiling.
    pub max_recovery: f64,

    /// How much the ceiling shrinks after each intervention.
    pub decay_step: f64,
}

impl Default for MaintenanceConfig {
    fn default() -> Self {
        Self {
            threshold:    50.0,
            min_recovery: 60.0,
            max_recovery: 90.0,
            decay_step:   0.5,
        }
    }
}

// ── StressConfig ──────────────────────────────────────────────────────────────

/// Coefficients of the per-tick stress model.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct StressConfig {
    /// Motor temperature (°C) below which there is no thermal wear.
    pub thermal_threshold_c: f64,
    pub thermal_coeff:       f64,

    pub vibration_coeff:     f64,
    /// Noise level (dB) at which the acoustic term is zero.
    pub noise_baseline_db:   f64,
    pub noise_coeff:         f64,

    /// Current (A) above which the quadratic electrical penalty applies.
    pub current_threshold_a: f64,
    pub current_coeff:       f64,

    /// Standard deviation of the zero-mean wear perturbation.  `0` disables
    /// the noise (the draw still happens).
    pub perturbation_sigma:  f64,
}

impl Default for StressConfig {
    fn default() -> Self {
        Self {
            thermal_threshold_c: 60.0,
            thermal_coeff:       0.05,
            vibration_coeff:     0.1,
            noise_baseline_db:   40.0,
            noise_coeff:         0.02,
            current_threshold_a: 2.5,
            current_coeff:       0.4,
            perturbation_sigma:  0.1,
        }
    }
}

// ── StatusBands ───────────────────────────────────────────────────────────────

/// Health thresholds for the Normal/Warning/Critical classification.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct StatusBands {
    /// Health strictly above this is Normal.
    pub normal_above:  f64,
    /// Health strictly above this (and not Normal) is Warning; the rest is Critical.
    pub warning_above: f64,
}

impl Default for StatusBands {
    fn default() -> Self {
        Self { normal_above: 75.0, warning_above: 50.0 }
    }
}

// ── TwinConfig ────────────────────────────────────────────────────────────────

/// Top-level simulation configuration.
///
/// Typically loaded from a TOML file by the application crate and passed to
/// the engine builder, which calls [`validate`][Self::validate].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TwinConfig {
    /// Number of simulated hours.  The engine never consumes more records
    /// than this.
    pub horizon_hours: u64,

    /// Seed of the engine RNG (wear noise and recovery draws).
    pub seed: u64,

    /// Seed of the synthetic sensor stream.  Kept separate so that re-running
    /// the engine with another seed reuses the same input.
    pub sensor_seed: u64,

    pub maintenance: MaintenanceConfig,
    pub stress:      StressConfig,
    pub status:      StatusBands,
}

impl Default for TwinConfig {
    fn default() -> Self {
        Self {
            horizon_hours: 10_000,
            seed:          42,
            sensor_seed:   42,
            maintenance:   MaintenanceConfig::default(),
            stress:        StressConfig::default(),
            status:        StatusBands::default(),
        }
    }
}

impl TwinConfig {
    /// Reject configurations that would break the engine's invariants.
    ///
    /// The engine performs no validation mid-loop, so everything it relies on
    /// is checked here.
    pub fn validate(&self) -> MtResult<()> {
        let m = &self.maintenance;
        let s = &self.stress;

        for (name, value) in [
            ("maintenance.threshold", m.threshold),
            ("maintenance.min_recovery", m.min_recovery),
            ("maintenance.max_recovery", m.max_recovery),
            ("maintenance.decay_step", m.decay_step),
            ("stress.thermal_threshold_c", s.thermal_threshold_c),
            ("stress.thermal_coeff", s.thermal_coeff),
            ("stress.vibration_coeff", s.vibration_coeff),
            ("stress.noise_baseline_db", s.noise_baseline_db),
            ("stress.noise_coeff", s.noise_coeff),
            ("stress.current_threshold_a", s.current_threshold_a),
            ("stress.current_coeff", s.current_coeff),
            ("stress.perturbation_sigma", s.perturbation_sigma),
            ("status.normal_above", self.status.normal_above),
            ("status.warning_above", self.status.warning_above),
        ] {
            if !value.is_finite() {
                return Err(MtError::Config(format!("{name} must be finite, got {value}")));
            }
        }

        if !(0.0..=100.0).contains(&m.threshold) {
            return Err(MtError::Config(format!(
                "maintenance.threshold {} is outside [0, 100]",
                m.threshold
            )));
        }
        if m.min_recovery > m.max_recovery {
            return Err(MtError::Config(format!(
                "maintenance.min_recovery {} exceeds maintenance.max_recovery {}",
                m.min_recovery, m.max_recovery
            )));
        }
        if m.decay_step < 0.0 {
            return Err(MtError::Config(format!(
                "maintenance.decay_step {} must not be negative",
                m.decay_step
            )));
        }
        if self.stress.perturbation_sigma < 0.0 {
            return Err(MtError::Config(format!(
                "stress.perturbation_sigma {} must not be negative",
                self.stress.perturbation_sigma
            )));
        }
        if self.status.warning_above > self.status.normal_above {
            return Err(MtError::Config(format!(
                "status.warning_above {} exceeds status.normal_above {}",
                self.status.warning_above, self.status.normal_above
            )));
        }
        Ok(())
    }
}
