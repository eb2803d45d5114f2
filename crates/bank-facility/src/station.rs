//! A named queue plus a fixed pool of servers.

use std::collections::VecDeque;

use bank_core::{Tick, UniformSource};
use tracing::debug;

use crate::stage::{Routing, Stage};
use crate::{Customer, FacilityObserver, Server};

/// Read-only occupancy report for one station.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationSnapshot {
    pub station_id:   String,
    pub queue_len:    usize,
    pub idle_servers: usize,
    pub busy_servers: usize,
}

/// What one [`Station::process_completions`] pass did.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Completions {
    /// Customers routed into the next stage's queues.
    pub forwarded: u32,
    /// Customers that left the facility.
    pub exited:    u32,
    /// Customers the next stage's draw failed to place.
    pub dropped:   u32,
}

#[derive(Debug)]
pub struct Station {
    id:            String,
    weight:        u32,
    service_ticks: u64,
    servers:       Vec<Server>,
    queue:         VecDeque<Customer>,
}

impl Station {
    /// Positivity of `weight`, `service_ticks` and `server_count` is checked by
    /// the topology validation, not here.
    pub fn new(id: impl Into<String>, weight: u32, service_ticks: u64, server_count: usize) -> Self {
        Self {
            id: id.into(),
            weight,
            service_ticks,
            servers: (0..server_count).map(|_| Server::new()).collect(),
            queue: VecDeque::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn weight(&self) -> u32 {
        self.weight
    }

    pub fn service_ticks(&self) -> u64 {
        self.service_ticks
    }

    pub fn servers(&self) -> &[Server] {
        &self.servers
    }

    pub fn queue_len(&self) -> usize {
        self.queue.len()
    }

    pub fn busy_servers(&self) -> usize {
        self.servers.iter().filter(|s| s.is_busy()).count()
    }

    /// Enqueue at the tail.
    pub fn route_in(&mut self, customer: Customer) {
        self.queue.push_back(customer);
    }

    /// One in-order pass over the pool: every free server takes the queue
    /// head, starting service at `now`.
    pub fn fill_from_queue(&mut self, now: Tick) {
        for server in &mut self.servers {
            if server.is_busy() {
                continue;
            }
            let Some(customer) = self.queue.pop_front() else {
                break;
            };
            server.assign(customer, now);
        }
    }

    /// Check every server for finished service, in pool order.
    ///
    /// With a `next` stage, a finished customer is routed into it by weighted
    /// draw and the pass stops: at most one customer is forwarded per station
    /// per tick, and servers after it wait for the next tick even if they are
    /// also done.  Without a `next` stage, finished customers exit and the
    /// pass continues.
    pub fn process_completions<R, O>(
        &mut self,
        now:      Tick,
        mut next: Option<&mut Stage>,
        rng:      &mut R,
        observer: &mut O,
    ) -> Completions
    where
        R: UniformSource,
        O: FacilityObserver,
    {
        let mut done = Completions::default();

        for server in &mut self.servers {
            let Some(customer) = server.try_complete(self.service_ticks, now) else {
                continue;
            };

            match next.as_deref_mut() {
                Some(stage) => {
                    let id = customer.id();
                    match stage.route(customer, rng) {
                        Routing::Queued { station } => {
                            debug!(
                                customer = id.0,
                                from = %self.id,
                                to = stage.stations()[station].id(),
                                tick = now.0,
                                "customer forwarded"
                            );
                            done.forwarded += 1;
                        }
                        Routing::Dropped(customer) => {
                            debug!(customer = id.0, stage = stage.id().0, tick = now.0, "draw selected no station");
                            observer.on_customer_dropped(customer.id(), stage.id(), now);
                            done.dropped += 1;
                        }
                    }
                    break;
                }
                None => {
                    customer.exit(now, observer);
                    done.exited += 1;
                }
            }
        }

        done
    }

    pub fn snapshot(&self) -> StationSnapshot {
        let busy = self.busy_servers();
        StationSnapshot {
            station_id:   self.id.clone(),
            queue_len:    self.queue.len(),
            idle_servers: self.servers.len() - busy,
            busy_servers: busy,
        }
    }
}
