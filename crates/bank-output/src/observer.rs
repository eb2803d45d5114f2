//! `FacilityOutputObserver<W>` — bridges `FacilityObserver` to an `OutputWriter`.

use bank_core::{CustomerId, StageId, Tick};
use bank_facility::{FacilityObserver, Stage};

use crate::row::{CustomerEvent, CustomerEventRow, OccupancyRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`FacilityObserver`] that writes occupancy snapshots and customer events
/// to any [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because `FacilityObserver`
/// methods have no return value.  After `facility.run()` returns, check for
/// errors with [`take_error`][Self::take_error].
pub struct FacilityOutputObserver<W: OutputWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> FacilityOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, last_error: None }
    }

    /// Take the stored write error (if any) after `facility.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the run).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn event(&mut self, tick: Tick, id: CustomerId, event: CustomerEvent, stage: Option<StageId>) {
        let row = CustomerEventRow {
            tick:        tick.0,
            customer_id: id.0,
            event,
            stage:       stage.map(|s| s.0),
        };
        let result = self.writer.write_event(&row);
        self.store_err(result);
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                tracing::error!(error = %e, "output write failed");
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> FacilityObserver for FacilityOutputObserver<W> {
    fn on_customer_entered(&mut self, id: CustomerId, tick: Tick) {
        self.event(tick, id, CustomerEvent::Entered, None);
    }

    fn on_customer_exited(&mut self, id: CustomerId, tick: Tick) {
        self.event(tick, id, CustomerEvent::Exited, None);
    }

    fn on_customer_dropped(&mut self, id: CustomerId, stage: StageId, tick: Tick) {
        self.event(tick, id, CustomerEvent::Dropped, Some(stage));
    }

    fn on_snapshot(&mut self, tick: Tick, stages: &[Stage]) {
        let rows: Vec<OccupancyRow> = stages
            .iter()
            .flat_map(|stage| {
                stage.snapshot().into_iter().map(move |snap| OccupancyRow {
                    tick:         tick.0,
                    stage:        stage.id().0,
                    station_id:   snap.station_id,
                    queue_len:    snap.queue_len as u64,
                    idle_servers: snap.idle_servers as u64,
                    busy_servers: snap.busy_servers as u64,
                })
            })
            .collect();

        if !rows.is_empty() {
            let result = self.writer.write_occupancy(&rows);
            self.store_err(result);
        }
    }

    fn on_run_end(&mut self, _final_tick: Tick) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
