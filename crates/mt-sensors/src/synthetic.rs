//! Synthetic sensor stream.
//!
//! Each hour picks an operating mode from a [`ModeMix`] and then draws the
//! seven readings around that mode's [`ModeProfile`]:
//!
//! ```text
//! load      ~ U(profile.load_range)
//! ambient   ~ U(25, 40)
//! motor     = ambient + profile.temp_rise + N(0, 1)
//! rpm       = 1400 + (load − 50)·5 + N(0, 15)
//! current   = 1.2 + (load / 100)·3 + N(0, 0.1)
//! noise     = profile.noise_base + N(0, 1)
//! vibration = profile.vibration_base + N(0, 0.1)
//! ```
//!
//! The stream owns its own [`SimRng`], so the sensor input for a given
//! `sensor_seed` is identical no matter how the engine is seeded.

use mt_core::{SimRng, Tick};

use crate::profile::{AMBIENT_RANGE_C, current_for_load, rpm_for_load};
use crate::{ModeMix, ModeProfile, OperatingMode, SensorRecord};

const MOTOR_TEMP_SIGMA: f64 = 1.0;
const RPM_SIGMA:        f64 = 15.0;
const CURRENT_SIGMA:    f64 = 0.1;
const NOISE_SIGMA:      f64 = 1.0;
const VIBRATION_SIGMA:  f64 = 0.1;

/// Lazily generated, finite stream of `SensorRecord`s for hours `0..hours`.
pub struct SyntheticSensors {
    rng:   SimRng,
    mix:   ModeMix,
    next:  u64,
    hours: u64,
}

impl SyntheticSensors {
    pub fn new(seed: u64, hours: u64) -> Self {
        Self {
            rng: SimRng::new(seed),
            mix: ModeMix::default(),
            next: 0,
            hours,
        }
    }

    /// Replace the default 20/60/20 mode mix.
    pub fn with_mix(mut self, mix: ModeMix) -> Self {
        self.mix = mix;
        self
    }

    fn draw(&mut self, tick: Tick) -> SensorRecord {
        let idx = self.rng.choose_weighted(self.mix.weights()).unwrap_or(1);
        let mode = OperatingMode::ALL[idx];
        let p = ModeProfile::for_mode(mode);

        let load = self.rng.uniform(p.load_range.0, p.load_range.1);
        let ambient_temp = self.rng.uniform(AMBIENT_RANGE_C.0, AMBIENT_RANGE_C.1);
        let motor_temp = ambient_temp + p.temp_rise + self.rng.gaussian(0.0, MOTOR_TEMP_SIGMA);
        let rpm = rpm_for_load(load) + self.rng.gaussian(0.0, RPM_SIGMA);
        let current = current_for_load(load) + self.rng.gaussian(0.0, CURRENT_SIGMA);
        let noise = self.rng.gaussian(p.noise_base, NOISE_SIGMA);
        let vibration = self.rng.gaussian(p.vibration_base, VIBRATION_SIGMA);

        SensorRecord {
            tick,
            mode,
            load,
            ambient_temp,
            motor_temp,
            rpm,
            current,
            noise,
            vibration,
        }
    }
}

impl Iterator for SyntheticSensors {
    type Item = SensorRecord;

    fn next(&mut self) -> Option<SensorRecord> {
        if self.next >= self.hours {
            return None;
        }
        let tick = Tick(self.next);
        self.next += 1;
        Some(self.draw(tick))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = (self.hours - self.next) as usize;
        (left, Some(left))
    }
}

impl ExactSizeIterator for SyntheticSensors {}
