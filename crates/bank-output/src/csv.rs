//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `occupancy.csv`
//! - `customer_events.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{CustomerEventRow, OccupancyRow, OutputResult};

pub const OCCUPANCY_FILE: &str = "occupancy.csv";
pub const EVENTS_FILE: &str = "customer_events.csv";

/// Writes simulation output to two CSV files.
pub struct CsvWriter {
    occupancy: Writer<File>,
    events:    Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Create the two CSV files in `dir` (creating `dir` if needed) and write
    /// the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        std::fs::create_dir_all(dir)?;

        let mut occupancy = Writer::from_path(dir.join(OCCUPANCY_FILE))?;
        occupancy.write_record(["tick", "stage", "station_id", "queue_len", "idle_servers", "busy_servers"])?;

        let mut events = Writer::from_path(dir.join(EVENTS_FILE))?;
        events.write_record(["tick", "customer_id", "event", "stage"])?;

        Ok(Self {
            occupancy,
            events,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_occupancy(&mut self, rows: &[OccupancyRow]) -> OutputResult<()> {
        for row in rows {
            self.occupancy.write_record(&[
                row.tick.to_string(),
                row.stage.to_string(),
                row.station_id.clone(),
                row.queue_len.to_string(),
                row.idle_servers.to_string(),
                row.busy_servers.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_event(&mut self, row: &CustomerEventRow) -> OutputResult<()> {
        self.events.write_record(&[
            row.tick.to_string(),
            row.customer_id.to_string(),
            row.event.to_string(),
            row.stage.map(|s| s.to_string()).unwrap_or_default(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.occupancy.flush()?;
        self.events.flush()?;
        Ok(())
    }
}
