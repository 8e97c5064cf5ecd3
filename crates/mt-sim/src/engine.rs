//! The `DegradationEngine` and its tick loop.

use tracing::{debug, info, warn};

use mt_core::{SimRng, Tick, TwinConfig};
use mt_health::{
    HealthStatus, HealthUpdate, MaintenancePolicy, StressAggregator, StressBreakdown,
    estimate_rul, initial_rul,
};
use mt_sensors::SensorRecord;

use crate::{HealthRun, MaintenanceEvent, TickPhase, TickReport, TwinObserver};

/// Health of a new motor.
pub const INITIAL_HEALTH: f64 = 100.0;

/// The degradation and maintenance state machine.
///
/// For every tick after the first:
///
/// 1. **Stress**: [`StressAggregator`] turns the record into a wear total
///    (one Gaussian draw).
/// 2. **Candidate**: `health[t − 1] − degradation`.
/// 3. **Policy**: [`MaintenancePolicy`] either keeps the candidate or
///    services the motor (one uniform draw, ceiling decays).
/// 4. **RUL**: `health / rate` when the rate is positive, else carry forward.
/// 5. **Status**: threshold map on the new health.
///
/// Tick 0 is seeded at health 100, RUL 1000, Normal, with no draws.
///
/// The engine owns its policy and RNG, and [`run`][Self::run] consumes it,
/// so a run's state cannot leak into another run.  Create via
/// [`EngineBuilder`][crate::EngineBuilder].
pub struct DegradationEngine {
    /// Validated configuration.
    pub config: TwinConfig,

    pub(crate) stress: StressAggregator,
    pub(crate) policy: MaintenancePolicy,
    pub(crate) rng:    SimRng,
}

/// Mutable state threaded from one tick to the next.
struct Carry {
    health:         f64,
    rul:            f64,
    floor_reported: bool,
}

impl DegradationEngine {
    // ── Public API ────────────────────────────────────────────────────────

    /// Read-only view of the maintenance policy (ceiling, intervention count).
    pub fn policy(&self) -> &MaintenancePolicy {
        &self.policy
    }

    /// Run over `records`, consuming at most `config.horizon_hours` of them
    /// in order, and return the frozen result.
    ///
    /// An empty stream yields only the seeded tick at hour 0.
    pub fn run<I, O>(mut self, records: I, observer: &mut O) -> HealthRun
    where
        I: IntoIterator<Item = SensorRecord>,
        O: TwinObserver,
    {
        let mut records = records
            .into_iter()
            .take(usize::try_from(self.config.horizon_hours).unwrap_or(usize::MAX));
        let mut run = HealthRun::with_capacity(records.size_hint().0.max(1));

        info!(
            seed    = self.config.seed,
            horizon = self.config.horizon_hours,
            "degradation run starting"
        );
        observer.on_run_start(&self.config);

        let mut carry = Carry {
            health:         INITIAL_HEALTH,
            rul:            initial_rul(INITIAL_HEALTH),
            floor_reported: self.policy.at_floor(),
        };
        let seed_status = self.classify(INITIAL_HEALTH);

        // ── Seeded tick ───────────────────────────────────────────────────
        match records.next() {
            None => {
                run.push_values(
                    Tick::ZERO,
                    carry.health,
                    carry.rul,
                    seed_status,
                    0.0,
                    self.policy.ceiling(),
                );
            }
            Some(first) => {
                let report = TickReport {
                    record:      &first,
                    phase:       TickPhase::Seeded,
                    stress:      StressBreakdown::default(),
                    health:      carry.health,
                    rul:         carry.rul,
                    status:      seed_status,
                    ceiling:     self.policy.ceiling(),
                    maintenance: None,
                };
                run.push(&report);
                observer.on_tick_end(&report);

                // ── Remaining ticks ───────────────────────────────────────
                for record in records {
                    let report = self.step(&record, &mut carry);
                    if let Some(event) = &report.maintenance {
                        observer.on_maintenance(event);
                    }
                    run.push(&report);
                    observer.on_tick_end(&report);
                }
            }
        }

        let (normal, warning, critical) = run.status_counts();
        info!(
            ticks         = run.len(),
            interventions = run.maintenance_events.len(),
            final_health  = carry.health,
            final_rul     = carry.rul,
            normal,
            warning,
            critical,
            "degradation run complete"
        );
        observer.on_run_end(&run);
        run
    }

    // ── Core tick processing ──────────────────────────────────────────────

    fn step<'r>(&mut self, record: &'r SensorRecord, carry: &mut Carry) -> TickReport<'r> {
        // ── ① stress (one Gaussian draw) ──────────────────────────────────
        let stress = self.stress.aggregate(record, &mut self.rng);

        // ── ② candidate, ③ policy (one uniform draw on maintenance) ──────
        let candidate = carry.health - stress.total();
        let update = self.policy.apply(candidate, &mut self.rng);
        let health = update.health();

        let (phase, maintenance) = match &update {
            HealthUpdate::Degrading { .. } => (TickPhase::Degrading, None),
            HealthUpdate::Maintained(recovery) => {
                let event = MaintenanceEvent::from_recovery(record.tick, recovery);
                debug!(
                    tick           = %record.tick,
                    candidate      = event.candidate_health,
                    recovered      = event.health,
                    ceiling_before = event.ceiling_before,
                    ceiling_after  = event.ceiling_after,
                    "maintenance performed"
                );
                if !carry.floor_reported && self.policy.at_floor() {
                    carry.floor_reported = true;
                    warn!(
                        tick          = %record.tick,
                        interventions = self.policy.interventions(),
                        floor         = self.policy.min_recovery(),
                        "recovery ceiling has decayed to its floor"
                    );
                }
                (TickPhase::UnderMaintenance, Some(event))
            }
        };

        // ── ④ RUL, ⑤ status ───────────────────────────────────────────────
        let rul = estimate_rul(health, stress.rate(), carry.rul);
        let status = self.classify(health);

        carry.health = health;
        carry.rul = rul;

        TickReport {
            record,
            phase,
            stress,
            health,
            rul,
            status,
            ceiling: self.policy.ceiling(),
            maintenance,
        }
    }

    #[inline]
    fn classify(&self, health: f64) -> HealthStatus {
        HealthStatus::classify(health, &self.config.status)
    }
}
