//! Multi-seed batches over one sensor stream.
//!
//! Each seed gets its own engine, so the runs are independent; with the
//! `parallel` feature they execute on Rayon's pool.  Results are returned in
//! seed order either way.

use mt_core::TwinConfig;
use mt_sensors::SensorRecord;

use crate::{EngineBuilder, HealthRun, NoopObserver, SimResult};

/// Run one engine per seed over the same `records`.
pub fn run_batch(
    config:  &TwinConfig,
    records: &[SensorRecord],
    seeds:   &[u64],
) -> SimResult<Vec<HealthRun>> {
    config.validate()?;

    let run_one = |seed: u64| -> SimResult<HealthRun> {
        let engine = EngineBuilder::new(config.clone()).seed(seed).build()?;
        Ok(engine.run(records.iter().copied(), &mut NoopObserver))
    };

    #[cfg(not(feature = "parallel"))]
    {
        seeds.iter().map(|&seed| run_one(seed)).collect()
    }

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;

        seeds.par_iter().map(|&seed| run_one(seed)).collect()
    }
}

// ── BatchSummary ──────────────────────────────────────────────────────────────

/// Aggregate statistics over a batch.
#[derive(Clone, Debug, PartialEq)]
pub struct BatchSummary {
    pub runs:                   usize,
    pub mean_interventions:     f64,
    pub min_interventions:      usize,
    pub max_interventions:      usize,
    pub mean_final_health:      f64,
    /// Mean of each run's earliest maintenance hour; `None` if no run was
    /// ever serviced.
    pub mean_first_maintenance: Option<f64>,
}

impl BatchSummary {
    /// Summarise `runs`.  Returns `None` for an empty batch.
    pub fn from_runs(runs: &[HealthRun]) -> Option<Self> {
        if runs.is_empty() {
            return None;
        }
        let n = runs.len() as f64;
        let counts: Vec<usize> = runs.iter().map(|r| r.maintenance_events.len()).collect();

        let firsts: Vec<f64> = runs
            .iter()
            .filter_map(|r| r.maintenance_events.first())
            .map(|e| e.tick.0 as f64)
            .collect();

        Some(Self {
            runs:                   runs.len(),
            mean_interventions:     counts.iter().sum::<usize>() as f64 / n,
            min_interventions:      counts.iter().copied().min().unwrap_or(0),
            max_interventions:      counts.iter().copied().max().unwrap_or(0),
            mean_final_health:      runs.iter().filter_map(HealthRun::final_health).sum::<f64>() / n,
            mean_first_maintenance: (!firsts.is_empty())
                .then(|| firsts.iter().sum::<f64>() / firsts.len() as f64),
        })
    }
}
