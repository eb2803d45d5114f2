//! One routing step: a set of stations and the weighted draw between them.
//!
//! # Selection walk
//!
//! ```text
//! r   = rng.next_unit()
//! acc = 0
//! for station in stations (ascending weight):
//!     acc += station.weight / total_weight      (f32)
//!     if r <= acc: pick station
//! no pick → customer dropped
//! ```
//!
//! Stations are stably sorted by ascending weight at construction, so a draw
//! landing exactly on a boundary goes to the lighter station.  Because the
//! shares are summed in `f32`, the final `acc` can land just below 1.0 (twelve
//! weight-1 stations sum to `0.99999988`); a draw above it selects nothing
//! and the customer leaves the simulation.

use bank_core::{StageId, UniformSource};

use crate::{Customer, Station, StationSnapshot};

/// Outcome of routing a customer into a stage.
#[derive(Debug, PartialEq, Eq)]
pub enum Routing {
    /// Enqueued at the station with this index in [`Stage::stations`].
    Queued { station: usize },
    /// The draw fell past the last cumulative share.
    Dropped(Customer),
}

#[derive(Debug)]
pub struct Stage {
    id:           StageId,
    stations:     Vec<Station>,
    total_weight: u32,
}

impl Stage {
    pub fn new(id: StageId, mut stations: Vec<Station>) -> Self {
        stations.sort_by_key(Station::weight);
        let total_weight = stations.iter().map(Station::weight).sum();
        Self { id, stations, total_weight }
    }

    pub fn id(&self) -> StageId {
        self.id
    }

    /// Stations in ascending-weight order.
    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    pub(crate) fn stations_mut(&mut self) -> &mut [Station] {
        &mut self.stations
    }

    pub fn total_weight(&self) -> u32 {
        self.total_weight
    }

    /// Index of the first station whose cumulative share reaches `r`.
    pub fn select(&self, r: f32) -> Option<usize> {
        let total = self.total_weight as f32;
        let mut acc = 0.0_f32;
        for (i, station) in self.stations.iter().enumerate() {
            acc += station.weight() as f32 / total;
            if r <= acc {
                return Some(i);
            }
        }
        None
    }

    /// Draw once from `rng` and enqueue `customer` at the selected station.
    pub fn route<R: UniformSource>(&mut self, customer: Customer, rng: &mut R) -> Routing {
        match self.select(rng.next_unit()) {
            Some(station) => {
                self.stations[station].route_in(customer);
                Routing::Queued { station }
            }
            None => Routing::Dropped(customer),
        }
    }

    pub fn snapshot(&self) -> Vec<StationSnapshot> {
        self.stations.iter().map(Station::snapshot).collect()
    }

    /// Customers queued or in service anywhere in this stage.
    pub fn occupancy(&self) -> usize {
        self.stations
            .iter()
            .map(|s| s.queue_len() + s.busy_servers())
            .sum()
    }
}
