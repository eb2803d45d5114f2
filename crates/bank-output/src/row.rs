//! Plain data row types written by output backends.

use std::fmt;

/// Occupancy of one station at a given tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OccupancyRow {
    pub tick:         u64,
    pub stage:        u16,
    pub station_id:   String,
    pub queue_len:    u64,
    pub idle_servers: u64,
    pub busy_servers: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CustomerEvent {
    Entered,
    Exited,
    Dropped,
}

impl CustomerEvent {
    pub fn as_str(self) -> &'static str {
        match self {
            CustomerEvent::Entered => "entered",
            CustomerEvent::Exited  => "exited",
            CustomerEvent::Dropped => "dropped",
        }
    }
}

impl fmt::Display for CustomerEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One customer lifecycle event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CustomerEventRow {
    pub tick:        u64,
    pub customer_id: u32,
    pub event:       CustomerEvent,
    /// Stage whose draw failed; only set for `Dropped`.
    pub stage:       Option<u16>,
}
