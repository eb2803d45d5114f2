//! A single-occupancy service slot.

use bank_core::Tick;
use tracing::warn;

use crate::Customer;

#[derive(Debug, Default)]
pub struct Server {
    current:    Option<Customer>,
    started_at: Option<Tick>,
}

impl Server {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start serving `customer` at `now`.
    ///
    /// Callers must check [`is_busy`](Self::is_busy) first.  Assigning to a
    /// busy server replaces the current occupant, which is then lost.
    pub fn assign(&mut self, customer: Customer, now: Tick) {
        if let Some(previous) = &self.current {
            warn!(
                replaced = previous.id().0,
                by = customer.id().0,
                tick = now.0,
                "assign called on a busy server; occupant overwritten"
            );
        }
        self.current = Some(customer);
        self.started_at = Some(now);
    }

    #[inline]
    pub fn is_busy(&self) -> bool {
        self.current.is_some()
    }

    /// Release the customer once `service_ticks` have elapsed since service
    /// started.  The check is "at least", so a server that is not polled on
    /// the exact tick still completes on a later one.
    pub fn try_complete(&mut self, service_ticks: u64, now: Tick) -> Option<Customer> {
        let started = self.started_at?;
        if self.current.is_some() && now.since(started) >= service_ticks {
            self.started_at = None;
            return self.current.take();
        }
        None
    }

    pub fn occupant(&self) -> Option<&Customer> {
        self.current.as_ref()
    }

    pub fn started_at(&self) -> Option<Tick> {
        self.started_at
    }
}
