//! The `Facility` struct and its tick loop.

use bank_core::{RunConfig, StageId, Tick, UniformSource};
use tracing::{debug, info, trace};

use crate::customer::CustomerIds;
use crate::stage::Routing;
use crate::{Customer, FacilityObserver, Stage};

/// Live customer counts since the run started.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FacilityCounts {
    pub admitted: u64,
    pub exited:   u64,
    pub dropped:  u64,
}

/// The whole simulated bank.
///
/// `Facility<R>` owns every stage, the tick clock, the customer-id counter,
/// and the random source, and drives the per-tick sequence:
///
/// 1. **Admission**: draw `r1` then `r2`; if `r1 < r2`, admit one customer
///    and route it into stage 0.
/// 2. **Service**: for each stage in order, for each station in it, process
///    completed servers (forwarding to the next stage or exiting), then fill
///    idle servers from the queue.
/// 3. **Snapshot**: report occupancy to the observer on snapshot ticks.
///
/// Create via [`FacilityBuilder`][crate::FacilityBuilder].
pub struct Facility<R: UniformSource> {
    pub(crate) config: RunConfig,
    pub(crate) stages: Vec<Stage>,
    pub(crate) clock:  Tick,
    pub(crate) ids:    CustomerIds,
    pub(crate) counts: FacilityCounts,
    pub(crate) rng:    R,
}

impl<R: UniformSource> Facility<R> {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run ticks `1..config.tick_bound`, continuing from the current clock.
    pub fn run<O: FacilityObserver>(&mut self, observer: &mut O) {
        let end = self.config.end_tick();
        info!(
            stages = self.stages.len(),
            tick_bound = end.0,
            "facility run starting"
        );

        while self.clock.next() < end {
            self.step(observer);
        }

        observer.on_run_end(self.clock);
        info!(
            final_tick = self.clock.0,
            admitted = self.counts.admitted,
            exited = self.counts.exited,
            dropped = self.counts.dropped,
            in_system = self.in_system(),
            "facility run finished"
        );
    }

    /// Run exactly `n` ticks from the current position (ignores the bound).
    ///
    /// Useful for tests and incremental stepping.
    pub fn run_ticks<O: FacilityObserver>(&mut self, n: u64, observer: &mut O) {
        for _ in 0..n {
            self.step(observer);
        }
    }

    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    pub fn stages(&self) -> &[Stage] {
        &self.stages
    }

    /// The last processed tick; `Tick::ZERO` before the first step.
    pub fn clock(&self) -> Tick {
        self.clock
    }

    pub fn counts(&self) -> FacilityCounts {
        self.counts
    }

    /// Customers currently queued or in service anywhere.
    pub fn in_system(&self) -> usize {
        self.stages.iter().map(Stage::occupancy).sum()
    }

    // ── Core tick processing ──────────────────────────────────────────────

    fn step<O: FacilityObserver>(&mut self, observer: &mut O) {
        self.clock = self.clock.next();
        let now = self.clock;
        trace!(tick = now.0, "tick");
        observer.on_tick_start(now);

        // ── Admission ────────────────────────────────────────────────────
        //
        // Two independent draws compared with a strict `<`; this is not a
        // 50% coin flip once ties (e.g. a constant source) are possible.
        let r1 = self.rng.next_unit();
        let r2 = self.rng.next_unit();
        if r1 < r2 {
            self.admit(now, observer);
        }

        // ── Service ──────────────────────────────────────────────────────
        for index in 0..self.stages.len() {
            let (head, tail) = self.stages.split_at_mut(index + 1);
            let stage = &mut head[index];
            let mut next = tail.first_mut();

            for station in stage.stations_mut() {
                let done = station.process_completions(now, next.as_deref_mut(), &mut self.rng, observer);
                self.counts.exited += u64::from(done.exited);
                self.counts.dropped += u64::from(done.dropped);
                station.fill_from_queue(now);
            }
        }

        // ── Snapshot ─────────────────────────────────────────────────────
        if self.config.is_snapshot_tick(now) {
            observer.on_snapshot(now, &self.stages);
        }

        observer.on_tick_end(now);
    }

    fn admit<O: FacilityObserver>(&mut self, now: Tick, observer: &mut O) {
        let customer = Customer::enter(&mut self.ids, now, observer);
        let id = customer.id();
        self.counts.admitted += 1;

        // Stage 0 always exists: the builder rejects stage-less topologies.
        let entry = &mut self.stages[0];
        match entry.route(customer, &mut self.rng) {
            Routing::Queued { station } => {
                debug!(
                    customer = id.0,
                    station = entry.stations()[station].id(),
                    tick = now.0,
                    "customer admitted"
                );
            }
            Routing::Dropped(_) => {
                debug!(customer = id.0, tick = now.0, "admission draw selected no station");
                observer.on_customer_dropped(id, StageId(0), now);
                self.counts.dropped += 1;
            }
        }
    }
}
