//! Customers and the per-facility id counter.

use bank_core::{CustomerId, Tick};

use crate::FacilityObserver;

/// The unit of work flowing through the facility.
///
/// Not `Clone`: a customer moves from queue to server to the next queue and
/// is never in two places at once.
#[derive(Debug, PartialEq, Eq)]
pub struct Customer {
    id:      CustomerId,
    arrival: Tick,
}

impl Customer {
    /// Admit a new customer, taking the next id from `ids`.
    ///
    /// Reports `on_customer_entered` to the observer.
    pub fn enter<O: FacilityObserver>(ids: &mut CustomerIds, arrival: Tick, observer: &mut O) -> Self {
        let customer = Customer { id: ids.next_id(), arrival };
        observer.on_customer_entered(customer.id, arrival);
        customer
    }

    /// Leave the facility.  Consumes the customer.
    pub fn exit<O: FacilityObserver>(self, now: Tick, observer: &mut O) {
        observer.on_customer_exited(self.id, now);
    }

    #[inline]
    pub fn id(&self) -> CustomerId {
        self.id
    }

    #[inline]
    pub fn arrival(&self) -> Tick {
        self.arrival
    }
}

/// Monotonic customer-number counter, owned by one facility.
#[derive(Debug, Default, Clone)]
pub struct CustomerIds {
    next: u32,
}

impl CustomerIds {
    pub fn new() -> Self {
        Self::default()
    }

    fn next_id(&mut self) -> CustomerId {
        let id = CustomerId(self.next);
        self.next += 1;
        id
    }
}
