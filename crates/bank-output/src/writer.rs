//! The `OutputWriter` trait implemented by backend writers.

use crate::{CustomerEventRow, OccupancyRow, OutputResult};

/// Errors are surfaced to the observer, which stores them for
/// [`FacilityOutputObserver::take_error`](crate::FacilityOutputObserver::take_error).
pub trait OutputWriter {
    /// Write one snapshot's worth of station rows.
    fn write_occupancy(&mut self, rows: &[OccupancyRow]) -> OutputResult<()>;

    /// Write one customer event.
    fn write_event(&mut self, row: &CustomerEventRow) -> OutputResult<()>;

    /// Flush all underlying handles.
    ///
    /// Idempotent; safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
