//! Integration tests for mt-sim.

use mt_core::{StressConfig, Tick, TwinConfig};
use mt_health::HealthStatus;
use mt_sensors::{ModeProfile, OperatingMode, SensorRecord, SyntheticSensors};

use crate::{EngineBuilder, HealthRun, NoopObserver};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Default config with the wear perturbation switched off.
fn quiet_config() -> TwinConfig {
    TwinConfig {
        stress: StressConfig { perturbation_sigma: 0.0, ..StressConfig::default() },
        ..TwinConfig::default()
    }
}

/// Idle baseline records with the given per-tick currents.
fn idle_with_currents(currents: &[f64]) -> Vec<SensorRecord> {
    currents
        .iter()
        .enumerate()
        .map(|(i, &current)| SensorRecord {
            current,
            ..ModeProfile::baseline(OperatingMode::Idle, Tick(i as u64))
        })
        .collect()
}

/// A record whose every stress term is exactly zero.
fn zero_stress(tick: u64) -> SensorRecord {
    SensorRecord {
        motor_temp: 45.0,
        vibration:  0.0,
        noise:      40.0,
        current:    2.0,
        ..ModeProfile::baseline(OperatingMode::Idle, Tick(tick))
    }
}

fn run_with(config: TwinConfig, records: Vec<SensorRecord>) -> HealthRun {
    EngineBuilder::new(config)
        .build()
        .unwrap()
        .run(records, &mut NoopObserver)
}

fn synthetic_run(seed: u64, hours: u64) -> HealthRun {
    let config = TwinConfig { seed, horizon_hours: hours, ..TwinConfig::default() };
    run_with(config, SyntheticSensors::new(42, hours).collect())
}

// ── EngineBuilder validation ──────────────────────────────────────────────────

#[cfg(test)]
mod builder_tests {
    use super::*;
    use crate::SimError;

    #[test]
    fn builds_with_defaults() {
        let engine = EngineBuilder::new(TwinConfig::default()).build().unwrap();
        assert_eq!(engine.policy().ceiling(), 90.0);
        assert_eq!(engine.policy().interventions(), 0);
    }

    #[test]
    fn inverted_recovery_range_is_config_error() {
        let mut cfg = TwinConfig::default();
        cfg.maintenance.min_recovery = 91.0;
        let result = EngineBuilder::new(cfg).build();
        assert!(matches!(result, Err(SimError::Config(_))));
    }

    #[test]
    fn threshold_out_of_range_is_config_error() {
        let mut cfg = TwinConfig::default();
        cfg.maintenance.threshold = 150.0;
        assert!(EngineBuilder::new(cfg).build().is_err());
    }

    #[test]
    fn nan_stress_coefficient_is_config_error() {
        let mut cfg = TwinConfig::default();
        cfg.stress.current_coeff = f64::NAN;
        assert!(matches!(EngineBuilder::new(cfg).build(), Err(SimError::Config(_))));
    }

    #[test]
    fn seed_override_applies() {
        let engine = EngineBuilder::new(TwinConfig::default()).seed(9).horizon(12).build().unwrap();
        assert_eq!(engine.config.seed, 9);
        assert_eq!(engine.config.horizon_hours, 12);
    }

    #[test]
    fn injected_rng_matches_seeded_rng() {
        let records: Vec<_> = SyntheticSensors::new(1, 300).collect();
        let a = EngineBuilder::new(TwinConfig::default())
            .rng(mt_core::SimRng::new(77))
            .build()
            .unwrap()
            .run(records.clone(), &mut NoopObserver);
        let b = EngineBuilder::new(TwinConfig::default())
            .seed(77)
            .build()
            .unwrap()
            .run(records, &mut NoopObserver);
        assert_eq!(a, b);
    }
}

// ── Initial conditions and degenerate horizons ────────────────────────────────

#[cfg(test)]
mod seed_tests {
    use super::*;
    use crate::TickPhase;

    #[test]
    fn initial_conditions() {
        let run = synthetic_run(42, 50);
        assert_eq!(run.health[0], 100.0);
        assert_eq!(run.rul[0], 1000.0);
        assert_eq!(run.status[0], HealthStatus::Normal);
        assert_eq!(run.degradation[0], 0.0);
        assert_eq!(run.recovery_ceiling[0], 90.0);
        assert!(run.maintenance_events.iter().all(|e| e.tick > Tick(0)));
    }

    #[test]
    fn empty_stream_returns_only_seed() {
        let run = run_with(TwinConfig::default(), vec![]);
        assert_eq!(run.len(), 1);
        assert_eq!(run.ticks, vec![Tick::ZERO]);
        assert_eq!(run.health, vec![100.0]);
        assert_eq!(run.rul, vec![1000.0]);
        assert!(run.maintenance_events.is_empty());
    }

    #[test]
    fn single_record_returns_only_seed() {
        let run = run_with(TwinConfig::default(), idle_with_currents(&[9.0]));
        assert_eq!(run.len(), 1);
        assert_eq!(run.health, vec![100.0]);
    }

    #[test]
    fn zero_horizon_returns_only_seed() {
        let cfg = TwinConfig { horizon_hours: 0, ..TwinConfig::default() };
        let run = run_with(cfg, SyntheticSensors::new(42, 10).collect());
        assert_eq!(run.len(), 1);
    }

    #[test]
    fn horizon_truncates_stream() {
        let cfg = TwinConfig { horizon_hours: 24, ..TwinConfig::default() };
        let run = run_with(cfg, SyntheticSensors::new(42, 100).collect());
        assert_eq!(run.len(), 24);
        assert_eq!(run.ticks.last(), Some(&Tick(23)));
    }

    #[test]
    fn first_report_is_seeded_phase() {
        struct FirstPhase(Option<TickPhase>);
        impl crate::TwinObserver for FirstPhase {
            fn on_tick_end(&mut self, report: &crate::TickReport<'_>) {
                self.0.get_or_insert(report.phase);
            }
        }
        let mut obs = FirstPhase(None);
        EngineBuilder::new(TwinConfig::default())
            .build()
            .unwrap()
            .run(SyntheticSensors::new(42, 5), &mut obs);
        assert_eq!(obs.0, Some(TickPhase::Seeded));
    }
}

// ── Run-wide properties ───────────────────────────────────────────────────────

#[cfg(test)]
mod property_tests {
    use super::*;

    #[test]
    fn same_seed_is_bit_identical() {
        let a = synthetic_run(42, 3_000);
        let b = synthetic_run(42, 3_000);
        assert_eq!(a, b);
    }

    #[test]
    fn different_seed_diverges() {
        let a = synthetic_run(1, 3_000);
        let b = synthetic_run(2, 3_000);
        assert_ne!(a.health, b.health);
    }

    #[test]
    fn series_are_aligned() {
        let run = synthetic_run(42, 1_000);
        assert_eq!(run.len(), 1_000);
        for len in [
            run.health.len(),
            run.rul.len(),
            run.status.len(),
            run.degradation.len(),
            run.recovery_ceiling.len(),
        ] {
            assert_eq!(len, run.len());
        }
    }

    #[test]
    fn synthetic_load_triggers_maintenance() {
        let run = synthetic_run(42, 2_000);
        assert!(!run.maintenance_events.is_empty(), "2000 h of mixed load should wear the motor out");
    }

    #[test]
    fn ceiling_is_monotone_and_floored() {
        let run = synthetic_run(7, 10_000);
        for w in run.recovery_ceiling.windows(2) {
            assert!(w[1] <= w[0], "ceiling rose: {w:?}");
        }
        assert!(run.recovery_ceiling.iter().all(|&c| c >= 60.0));
    }

    #[test]
    fn maintenance_results_are_bounded() {
        let run = synthetic_run(7, 10_000);
        for event in &run.maintenance_events {
            let i = event.tick.index();
            assert_eq!(run.health[i], event.health);
            assert!(event.candidate_health < 50.0);
            assert!(event.health >= 60.0 && event.health <= event.ceiling_before, "{event:?}");
            assert_eq!(event.ceiling_before, run.recovery_ceiling[i - 1]);
            assert_eq!(event.ceiling_after, run.recovery_ceiling[i]);
        }
    }

    #[test]
    fn maintenance_ticks_strictly_increase() {
        let run = synthetic_run(3, 10_000);
        let ticks = run.maintenance_ticks();
        assert!(ticks.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn health_never_below_threshold_after_policy() {
        let run = synthetic_run(11, 5_000);
        assert!(run.health.iter().all(|&h| h >= 50.0));
    }

    #[test]
    fn status_matches_threshold_map() {
        let run = synthetic_run(5, 5_000);
        for (&h, &s) in run.health.iter().zip(&run.status) {
            let expected = if h > 75.0 {
                HealthStatus::Normal
            } else if h > 50.0 {
                HealthStatus::Warning
            } else {
                HealthStatus::Critical
            };
            assert_eq!(s, expected, "health {h}");
        }
    }

    #[test]
    fn rul_follows_guarded_rule() {
        let run = synthetic_run(13, 5_000);
        for t in 1..run.len() {
            let d = run.degradation[t];
            if d > 0.0 {
                assert_eq!(run.rul[t], run.health[t] / d, "tick {t}");
            } else {
                assert_eq!(run.rul[t], run.rul[t - 1], "tick {t}");
            }
            assert!(run.rul[t] >= 0.0);
        }
    }
}

// ── Deterministic scenarios ───────────────────────────────────────────────────

#[cfg(test)]
mod scenario_tests {
    use super::*;

    #[test]
    fn forced_overcurrent_spikes_at_tick_3() {
        let run = run_with(quiet_config(), idle_with_currents(&[1.0, 1.0, 1.0, 6.0, 1.0]));
        assert_eq!(run.len(), 5);

        // Idle baseline wears 0.01 per hour (vibration only); 6 A adds 4.9.
        assert!((run.degradation[1] - 0.01).abs() < 1e-9);
        assert!((run.degradation[3] - 4.91).abs() < 1e-9);
        assert!(run.degradation[3] > 100.0 * run.degradation[2]);

        // Not enough to breach 50 from full health.
        assert!(run.maintenance_events.is_empty());
        assert!((run.health[3] - 95.07).abs() < 1e-9);
        assert!((run.rul[3] - run.health[3] / 4.91).abs() < 1e-6);
    }

    #[test]
    fn severe_overcurrent_forces_maintenance_at_tick_3() {
        // 14 A: (14 − 2.5)² · 0.4 = 52.9 → candidate ≈ 47.07 < 50.
        let run = run_with(quiet_config(), idle_with_currents(&[1.0, 1.0, 1.0, 14.0, 1.0]));
        assert_eq!(run.maintenance_ticks(), vec![Tick(3)]);

        let event = run.maintenance_events[0];
        assert!((event.candidate_health - 47.07).abs() < 1e-9);
        assert!(event.health >= 60.0 && event.health <= 90.0);
        assert_eq!(event.ceiling_after, 89.5);
        assert_eq!(run.recovery_ceiling, vec![90.0, 90.0, 90.0, 89.5, 89.5]);

        // Tick 4 wears normally from the recovered value.
        assert!((run.health[4] - (event.health - 0.01)).abs() < 1e-9);
    }

    #[test]
    fn never_breaches_threshold() {
        let records: Vec<_> = (0..200).map(zero_stress).collect();
        let run = run_with(quiet_config(), records);
        assert!(run.health.iter().all(|&h| h == 100.0));
        assert!(run.rul.iter().all(|&r| r == 1000.0));
        assert!(run.status.iter().all(|&s| s == HealthStatus::Normal));
        assert!(run.degradation.iter().all(|&d| d == 0.0));
        assert!(run.maintenance_events.is_empty());
    }

    #[test]
    fn negative_wear_raises_health_without_clamp() {
        // Silent motor: mechanical term is −0.2 per hour.
        let records: Vec<_> = (0..11)
            .map(|t| SensorRecord { noise: 30.0, ..zero_stress(t) })
            .collect();
        let run = run_with(quiet_config(), records);
        assert!((run.health[10] - 102.0).abs() < 1e-9);
        assert_eq!(run.rul[10], 1000.0, "non-positive wear carries RUL forward");
    }

    #[test]
    fn repeated_failures_drive_ceiling_to_floor() {
        // Every hour after the first is catastrophic.
        let records = idle_with_currents(&[30.0; 100]);
        let run = run_with(quiet_config(), records);
        assert_eq!(run.maintenance_events.len(), 99);
        assert_eq!(*run.recovery_ceiling.last().unwrap(), 60.0);
        let last = run.maintenance_events.last().unwrap();
        assert_eq!(last.health, 60.0);
    }
}

// ── Observer ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod observer_tests {
    use super::*;
    use crate::{MaintenanceEvent, TickPhase, TickReport, TwinObserver};

    #[derive(Default)]
    struct Recorder {
        starts:       usize,
        ticks:        usize,
        maintenance:  Vec<Tick>,
        under_maint:  usize,
        ends:         usize,
        final_len:    usize,
        order_ok:     bool,
        pending:      Option<Tick>,
    }

    impl TwinObserver for Recorder {
        fn on_run_start(&mut self, _config: &TwinConfig) {
            self.starts += 1;
            self.order_ok = true;
        }

        fn on_maintenance(&mut self, event: &MaintenanceEvent) {
            self.maintenance.push(event.tick);
            self.pending = Some(event.tick);
        }

        fn on_tick_end(&mut self, report: &TickReport<'_>) {
            self.ticks += 1;
            if report.phase == TickPhase::UnderMaintenance {
                self.under_maint += 1;
                if self.pending.take() != Some(report.tick()) {
                    self.order_ok = false;
                }
            }
        }

        fn on_run_end(&mut self, run: &HealthRun) {
            self.ends += 1;
            self.final_len = run.len();
        }
    }

    #[test]
    fn hooks_called_once_per_tick() {
        let mut obs = Recorder::default();
        let run = EngineBuilder::new(TwinConfig::default())
            .build()
            .unwrap()
            .run(SyntheticSensors::new(42, 4_000), &mut obs);

        assert_eq!(obs.starts, 1);
        assert_eq!(obs.ends, 1);
        assert_eq!(obs.ticks, 4_000);
        assert_eq!(obs.final_len, 4_000);
        assert_eq!(obs.maintenance, run.maintenance_ticks());
        assert_eq!(obs.under_maint, run.maintenance_events.len());
        assert!(obs.order_ok, "on_maintenance must precede on_tick_end for the same tick");
    }

    #[test]
    fn empty_stream_still_starts_and_ends() {
        let mut obs = Recorder::default();
        EngineBuilder::new(TwinConfig::default())
            .build()
            .unwrap()
            .run(Vec::new(), &mut obs);
        assert_eq!((obs.starts, obs.ticks, obs.ends), (1, 0, 1));
        assert_eq!(obs.final_len, 1, "the seeded tick has no record to report");
    }
}

// ── Batch ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod batch_tests {
    use super::*;
    use crate::{BatchSummary, run_batch};

    #[test]
    fn batch_matches_individual_runs() {
        let config = TwinConfig { horizon_hours: 1_500, ..TwinConfig::default() };
        let records: Vec<_> = SyntheticSensors::new(42, 1_500).collect();
        let seeds = [1, 2, 3, 4];

        let batch = run_batch(&config, &records, &seeds).unwrap();
        assert_eq!(batch.len(), 4);
        for (run, &seed) in batch.iter().zip(&seeds) {
            let solo = EngineBuilder::new(config.clone())
                .seed(seed)
                .build()
                .unwrap()
                .run(records.clone(), &mut NoopObserver);
            assert_eq!(run, &solo, "seed {seed}");
        }
    }

    #[test]
    fn batch_rejects_invalid_config() {
        let mut config = TwinConfig::default();
        config.maintenance.decay_step = -1.0;
        assert!(run_batch(&config, &[], &[1]).is_err());
    }

    #[test]
    fn summary_over_runs() {
        let records: Vec<_> = SyntheticSensors::new(42, 2_000).collect();
        let batch = run_batch(&TwinConfig::default(), &records, &[10, 20, 30]).unwrap();
        let summary = BatchSummary::from_runs(&batch).unwrap();
        assert_eq!(summary.runs, 3);
        assert!(summary.min_interventions <= summary.max_interventions);
        assert!(summary.mean_interventions >= summary.min_interventions as f64);
        assert!(summary.mean_first_maintenance.is_some());
        assert!(BatchSummary::from_runs(&[]).is_none());
    }
}
