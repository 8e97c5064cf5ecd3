//! Fluent builder for constructing a [`DegradationEngine`].

use mt_core::{SimRng, TwinConfig};
use mt_health::{MaintenancePolicy, StressAggregator};

use crate::{DegradationEngine, SimResult};

/// Fluent builder for [`DegradationEngine`].
///
/// # Required inputs
///
/// - [`TwinConfig`]: horizon, seed, maintenance, stress and status settings
///
/// # Optional inputs (have defaults)
///
/// | Method          | Default                              |
/// |-----------------|--------------------------------------|
/// | `.seed(s)`      | `config.seed`                        |
/// | `.rng(r)`       | `SimRng::new(seed)`                  |
/// | `.horizon(h)`   | `config.horizon_hours`               |
///
/// # Example
///
/// ```rust,ignore
/// let engine = EngineBuilder::new(TwinConfig::default())
///     .seed(7)
///     .build()?;
/// let run = engine.run(SyntheticSensors::new(42, 10_000), &mut NoopObserver);
/// ```
pub struct EngineBuilder {
    config: TwinConfig,
    rng:    Option<SimRng>,
}

impl EngineBuilder {
    pub fn new(config: TwinConfig) -> Self {
        Self { config, rng: None }
    }

    /// Override the engine seed.  Ignored if [`rng`][Self::rng] is also given.
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = seed;
        self
    }

    /// Inject an already-seeded RNG instead of building one from the seed.
    pub fn rng(mut self, rng: SimRng) -> Self {
        self.rng = Some(rng);
        self
    }

    /// Override the number of hours to simulate.
    pub fn horizon(mut self, hours: u64) -> Self {
        self.config.horizon_hours = hours;
        self
    }

    /// Validate the configuration and return a ready-to-run engine.
    pub fn build(self) -> SimResult<DegradationEngine> {
        self.config.validate()?;

        let rng = self.rng.unwrap_or_else(|| SimRng::new(self.config.seed));
        let stress = StressAggregator::new(self.config.stress.clone());
        let policy = MaintenancePolicy::new(&self.config.maintenance);

        Ok(DegradationEngine {
            config: self.config,
            stress,
            policy,
            rng,
        })
    }
}
