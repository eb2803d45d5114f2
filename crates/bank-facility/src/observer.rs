//! Facility observer trait: the reporting sink for customer events and
//! occupancy snapshots.

use bank_core::{CustomerId, StageId, Tick};

use crate::Stage;

/// Callbacks invoked by [`Facility::run`][crate::Facility::run] at key points
/// in the tick loop.
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// # Example: exit counter
///
/// ```rust
/// use bank_core::{CustomerId, Tick};
/// use bank_facility::FacilityObserver;
///
/// struct ExitCounter(u32);
///
/// impl FacilityObserver for ExitCounter {
///     fn on_customer_exited(&mut self, _id: CustomerId, _tick: Tick) {
///         self.0 += 1;
///     }
/// }
/// ```
pub trait FacilityObserver {
    /// Called at the very start of each tick, before the admission test.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// A new customer was admitted.
    fn on_customer_entered(&mut self, _id: CustomerId, _tick: Tick) {}

    /// A customer finished service at the last stage and left.
    fn on_customer_exited(&mut self, _id: CustomerId, _tick: Tick) {}

    /// A weighted draw into `stage` selected no station; the customer is gone.
    fn on_customer_dropped(&mut self, _id: CustomerId, _stage: StageId, _tick: Tick) {}

    /// Called on snapshot ticks (every `config.snapshot_interval` ticks)
    /// with read-only access to every stage.
    fn on_snapshot(&mut self, _tick: Tick, _stages: &[Stage]) {}

    /// Called at the end of each tick.
    fn on_tick_end(&mut self, _tick: Tick) {}

    /// Called once after the final tick completes.
    fn on_run_end(&mut self, _final_tick: Tick) {}
}

/// A [`FacilityObserver`] that does nothing.
pub struct NoopObserver;

impl FacilityObserver for NoopObserver {}

impl<O: FacilityObserver + ?Sized> FacilityObserver for &mut O {
    fn on_tick_start(&mut self, tick: Tick) {
        (**self).on_tick_start(tick);
    }
    fn on_customer_entered(&mut self, id: CustomerId, tick: Tick) {
        (**self).on_customer_entered(id, tick);
    }
    fn on_customer_exited(&mut self, id: CustomerId, tick: Tick) {
        (**self).on_customer_exited(id, tick);
    }
    fn on_customer_dropped(&mut self, id: CustomerId, stage: StageId, tick: Tick) {
        (**self).on_customer_dropped(id, stage, tick);
    }
    fn on_snapshot(&mut self, tick: Tick, stages: &[Stage]) {
        (**self).on_snapshot(tick, stages);
    }
    fn on_tick_end(&mut self, tick: Tick) {
        (**self).on_tick_end(tick);
    }
    fn on_run_end(&mut self, final_tick: Tick) {
        (**self).on_run_end(final_tick);
    }
}

/// Fan out to two observers, first `A` then `B`.
impl<A: FacilityObserver, B: FacilityObserver> FacilityObserver for (A, B) {
    fn on_tick_start(&mut self, tick: Tick) {
        self.0.on_tick_start(tick);
        self.1.on_tick_start(tick);
    }
    fn on_customer_entered(&mut self, id: CustomerId, tick: Tick) {
        self.0.on_customer_entered(id, tick);
        self.1.on_customer_entered(id, tick);
    }
    fn on_customer_exited(&mut self, id: CustomerId, tick: Tick) {
        self.0.on_customer_exited(id, tick);
        self.1.on_customer_exited(id, tick);
    }
    fn on_customer_dropped(&mut self, id: CustomerId, stage: StageId, tick: Tick) {
        self.0.on_customer_dropped(id, stage, tick);
        self.1.on_customer_dropped(id, stage, tick);
    }
    fn on_snapshot(&mut self, tick: Tick, stages: &[Stage]) {
        self.0.on_snapshot(tick, stages);
        self.1.on_snapshot(tick, stages);
    }
    fn on_tick_end(&mut self, tick: Tick) {
        self.0.on_tick_end(tick);
        self.1.on_tick_end(tick);
    }
    fn on_run_end(&mut self, final_tick: Tick) {
        self.0.on_run_end(final_tick);
        self.1.on_run_end(final_tick);
    }
}

/// Optional observer: `None` ignores every callback.
impl<O: FacilityObserver> FacilityObserver for Option<O> {
    fn on_tick_start(&mut self, tick: Tick) {
        if let Some(o) = self {
            o.on_tick_start(tick);
        }
    }
    fn on_customer_entered(&mut self, id: CustomerId, tick: Tick) {
        if let Some(o) = self {
            o.on_customer_entered(id, tick);
        }
    }
    fn on_customer_exited(&mut self, id: CustomerId, tick: Tick) {
        if let Some(o) = self {
            o.on_customer_exited(id, tick);
        }
    }
    fn on_customer_dropped(&mut self, id: CustomerId, stage: StageId, tick: Tick) {
        if let Some(o) = self {
            o.on_customer_dropped(id, stage, tick);
        }
    }
    fn on_snapshot(&mut self, tick: Tick, stages: &[Stage]) {
        if let Some(o) = self {
            o.on_snapshot(tick, stages);
        }
    }
    fn on_tick_end(&mut self, tick: Tick) {
        if let Some(o) = self {
            o.on_tick_end(tick);
        }
    }
    fn on_run_end(&mut self, final_tick: Tick) {
        if let Some(o) = self {
            o.on_run_end(final_tick);
        }
    }
}
