//! Maintenance policy with a shrinking recovery ceiling.
//!
//! When candidate health falls strictly below the threshold the motor is
//! serviced: health is redrawn uniformly from `[min_recovery, ceiling]` and
//! the ceiling then drops by `decay_step`, never below `min_recovery`.  Each
//! intervention is therefore a little less restorative than the last.
//!
//! The ceiling is the only state that crosses ticks, so the policy must be
//! applied strictly in hour order.

use mt_core::{MaintenanceConfig, SimRng};

/// Details of one intervention.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Recovery {
    /// Health the tick would have had without maintenance.
    pub candidate:      f64,
    /// Health after maintenance.
    pub health:         f64,
    pub ceiling_before: f64,
    pub ceiling_after:  f64,
}

/// Outcome of applying the policy to one tick.
#[derive(Copy, Clone, PartialEq, Debug)]
pub enum HealthUpdate {
    /// No intervention; health is the candidate as-is.
    Degrading { health: f64 },
    /// Maintenance fired.
    Maintained(Recovery),
}

impl HealthUpdate {
    #[inline]
    pub fn health(&self) -> f64 {
        match self {
            Self::Degrading { health } => *health,
            Self::Maintained(r) => r.health,
        }
    }

    #[inline]
    pub fn recovery(&self) -> Option<&Recovery> {
        match self {
            Self::Degrading { .. } => None,
            Self::Maintained(r) => Some(r),
        }
    }
}

/// Stateful maintenance decision-maker for one run.
#[derive(Clone, Debug)]
pub struct MaintenancePolicy {
    threshold:     f64,
    min_recovery:  f64,
    ceiling:       f64,
    decay_step:    f64,
    interventions: u64,
}

impl MaintenancePolicy {
    /// Build a policy with the ceiling at `max_recovery`.
    ///
    /// Expects a validated config (`min_recovery ≤ max_recovery`); the
    /// ceiling is still floored so it can never start below `min_recovery`.
    pub fn new(config: &MaintenanceConfig) -> Self {
        Self {
            threshold:     config.threshold,
            min_recovery:  config.min_recovery,
            ceiling:       config.max_recovery.max(config.min_recovery),
            decay_step:    config.decay_step,
            interventions: 0,
        }
    }

    #[inline]
    pub fn min_recovery(&self) -> f64 {
        self.min_recovery
    }

    /// Current recovery ceiling.
    #[inline]
    pub fn ceiling(&self) -> f64 {
        self.ceiling
    }

    /// Number of interventions so far.
    #[inline]
    pub fn interventions(&self) -> u64 {
        self.interventions
    }

    /// `true` once the ceiling has decayed all the way to `min_recovery`.
    #[inline]
    pub fn at_floor(&self) -> bool {
        self.ceiling <= self.min_recovery
    }

    /// `true` if `candidate` would trigger maintenance.
    #[inline]
    pub fn triggers(&self, candidate: f64) -> bool {
        candidate < self.threshold
    }

    /// Decide this tick's health.  Draws one uniform from `rng` only when
    /// maintenance fires.
    pub fn apply(&mut self, candidate: f64, rng: &mut SimRng) -> HealthUpdate {
        if !self.triggers(candidate) {
            return HealthUpdate::Degrading { health: candidate };
        }

        let ceiling_before = self.ceiling;
        let health = rng.uniform(self.min_recovery, ceiling_before);
        self.ceiling = (ceiling_before - self.decay_step).max(self.min_recovery);
        self.interventions += 1;

        HealthUpdate::Maintained(Recovery {
            candidate,
            health,
            ceiling_before,
            ceiling_after: self.ceiling,
        })
    }
}
