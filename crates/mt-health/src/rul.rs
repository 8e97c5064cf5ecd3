//! Remaining-useful-life heuristic.
//!
//! `rul = health / rate` using the current tick's rate only.  The estimate is
//! unfiltered and jumps from tick to tick.  When the rate is not
//! strictly positive the previous estimate carries forward, so no division
//! by zero or negative RUL ever comes out of this rule.

/// Degradation rate used to seed the first RUL estimate (`100 / 0.1 = 1000`).
pub const SEED_DEGRADATION_RATE: f64 = 0.1;

/// Sign-tagged degradation of one tick.
#[derive(Copy, Clone, PartialEq, Debug)]
pub enum DegradationRate {
    /// Health is being lost at this many percent per hour.
    Positive(f64),
    /// No net wear (or net recovery) this tick.
    NonPositive,
}

impl DegradationRate {
    #[inline]
    pub fn from_total(total: f64) -> Self {
        if total > 0.0 {
            Self::Positive(total)
        } else {
            Self::NonPositive
        }
    }
}

/// RUL for the seeded first tick.
#[inline]
pub fn initial_rul(health: f64) -> f64 {
    health / SEED_DEGRADATION_RATE
}

/// RUL for tick `t` given `health[t]`, the tick's rate, and `rul[t − 1]`.
#[inline]
pub fn estimate_rul(health: f64, rate: DegradationRate, previous: f64) -> f64 {
    match rate {
        DegradationRate::Positive(r) => health / r,
        DegradationRate::NonPositive => previous,
    }
}
