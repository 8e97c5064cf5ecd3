//! Per-mode signal parameters and the mode mix.

use mt_core::Tick;

use crate::{OperatingMode, SensorError, SensorRecord, SensorResult};

/// Ambient temperature range (°C), shared by every mode.
pub const AMBIENT_RANGE_C: (f64, f64) = (25.0, 40.0);

/// Nominal speed at 50 % load.
pub const RPM_NOMINAL: f64 = 1400.0;
/// RPM gained per load-percent above 50 %.
pub const RPM_PER_LOAD_PCT: f64 = 5.0;

/// No-load current (A).
pub const CURRENT_BASE_A: f64 = 1.2;
/// Additional current (A) at 100 % load.
pub const CURRENT_FULL_LOAD_A: f64 = 3.0;

// ── ModeProfile ───────────────────────────────────────────────────────────────

/// Signal shape of one operating mode.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct ModeProfile {
    /// Load is drawn uniformly from this range (percent).
    pub load_range:     (f64, f64),
    /// Motor temperature rise above ambient (°C).
    pub temp_rise:      f64,
    pub vibration_base: f64,
    /// Base acoustic level (dB).
    pub noise_base:     f64,
}

impl ModeProfile {
    pub fn for_mode(mode: OperatingMode) -> Self {
        match mode {
            OperatingMode::Idle => Self {
                load_range:     (20.0, 30.0),
                temp_rise:      2.0,
                vibration_base: 0.1,
                noise_base:     40.0,
            },
            OperatingMode::Active => Self {
                load_range:     (40.0, 70.0),
                temp_rise:      5.0,
                vibration_base: 0.5,
                noise_base:     45.0,
            },
            OperatingMode::Stressed => Self {
                load_range:     (70.0, 100.0),
                temp_rise:      8.0,
                vibration_base: 0.9,
                noise_base:     50.0,
            },
        }
    }

    /// The noise-free reading for `mode` at `tick`: midpoint load, coolest
    /// ambient, no Gaussian terms.
    ///
    /// Used to build deterministic scenarios; individual fields can be
    /// overridden afterwards with struct-update syntax.
    pub fn baseline(mode: OperatingMode, tick: Tick) -> SensorRecord {
        let p = Self::for_mode(mode);
        let load = (p.load_range.0 + p.load_range.1) / 2.0;
        let ambient = AMBIENT_RANGE_C.0;
        SensorRecord {
            tick,
            mode,
            load,
            ambient_temp: ambient,
            motor_temp:   ambient + p.temp_rise,
            rpm:          rpm_for_load(load),
            current:      current_for_load(load),
            noise:        p.noise_base,
            vibration:    p.vibration_base,
        }
    }
}

/// Noise-free speed at `load` percent.
#[inline]
pub fn rpm_for_load(load: f64) -> f64 {
    RPM_NOMINAL + (load - 50.0) * RPM_PER_LOAD_PCT
}

/// Noise-free current draw at `load` percent.
#[inline]
pub fn current_for_load(load: f64) -> f64 {
    CURRENT_BASE_A + (load / 100.0) * CURRENT_FULL_LOAD_A
}

// ── ModeMix ───────────────────────────────────────────────────────────────────

/// Relative frequency of each mode, indexed like [`OperatingMode::ALL`].
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct ModeMix {
    weights: [f64; 3],
}

impl ModeMix {
    /// Validate and build a mix from idle/active/stressed weights.
    pub fn new(idle: f64, active: f64, stressed: f64) -> SensorResult<Self> {
        let weights = [idle, active, stressed];
        if weights.iter().any(|w| !w.is_finite() || *w < 0.0) {
            return Err(SensorError::Config(format!(
                "mode weights must be finite and non-negative, got {weights:?}"
            )));
        }
        if weights.iter().sum::<f64>() <= 0.0 {
            return Err(SensorError::Config("mode weights sum to zero".into()));
        }
        Ok(Self { weights })
    }

    /// Idle, active and stressed weights, in that order.
    #[inline]
    pub fn weights(&self) -> &[f64; 3] {
        &self.weights
    }

    /// A mix that only ever yields `mode`.
    pub fn only(mode: OperatingMode) -> Self {
        let mut weights = [0.0; 3];
        weights[mode as usize] = 1.0;
        Self { weights }
    }
}

impl Default for ModeMix {
    /// 20 % idle, 60 % active, 20 % stressed.
    fn default() -> Self {
        Self { weights: [0.2, 0.6, 0.2] }
    }
}
