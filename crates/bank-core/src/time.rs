//! Simulation time model.
//!
//! Time is a monotonically increasing integer `Tick`.  The facility's clock
//! starts at `Tick::ZERO`; the first processed tick is `Tick(1)` and the run
//! stops before `RunConfig::end_tick()`.

use std::fmt;

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute simulation tick counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// Return the tick `n` steps after `self`.
    #[inline]
    pub fn offset(self, n: u64) -> Tick {
        Tick(self.0 + n)
    }

    /// Ticks elapsed from `earlier` to `self`, saturating at zero.
    #[inline]
    pub fn since(self, earlier: Tick) -> u64 {
        self.0.saturating_sub(earlier.0)
    }

    #[inline]
    pub fn next(self) -> Tick {
        self.offset(1)
    }
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl std::ops::Sub for Tick {
    type Output = u64;
    #[inline]
    fn sub(self, rhs: Tick) -> u64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── RunConfig ─────────────────────────────────────────────────────────────────

/// Top-level run configuration.
///
/// Built by the application crate from command-line arguments and handed to
/// the facility builder.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunConfig {
    /// Exclusive upper bound of the tick loop.  Ticks `1..tick_bound` are
    /// processed, so a bound of 100 runs 99 ticks.
    pub tick_bound: u64,

    /// Seed for [`SimRng`](crate::SimRng).  The same seed and topology always
    /// produce identical runs.
    pub seed: u64,

    /// Emit an occupancy snapshot every N ticks.  1 = every tick; 0 disables
    /// snapshots entirely.
    pub snapshot_interval: u64,
}

impl RunConfig {
    pub fn new(tick_bound: u64, seed: u64) -> Self {
        Self { tick_bound, seed, snapshot_interval: 1 }
    }

    /// The tick at which the simulation ends (exclusive upper bound).
    #[inline]
    pub fn end_tick(&self) -> Tick {
        Tick(self.tick_bound)
    }

    /// Whether `tick` falls on a snapshot boundary.
    #[inline]
    pub fn is_snapshot_tick(&self, tick: Tick) -> bool {
        self.snapshot_interval > 0 && tick.0.is_multiple_of(self.snapshot_interval)
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self::new(100, 0)
    }
}
