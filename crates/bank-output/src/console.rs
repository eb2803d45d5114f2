//! Live text rendering of a run.
//!
//! ```text
//! + Customer [0] entered at: 1
//!
//! {A [_0][_1]}
//! {B [_0][_2]} {C [_0][_3]}
//!
//! - Customer [0] exited at: 29
//!
//! ```
//!
//! Each snapshot prints one line per stage with a `{ID [queue][idle]}` group
//! per station, counts padded to width 2 with `_`, then a blank line.

use std::io::{self, Write};

use bank_core::{CustomerId, StageId, Tick};
use bank_facility::{FacilityObserver, Stage, StationSnapshot};

pub struct ConsoleRenderer<W: Write> {
    out:        W,
    last_error: Option<io::Error>,
}

impl ConsoleRenderer<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ConsoleRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out, last_error: None }
    }

    /// Take the first write error, if any.
    pub fn take_error(&mut self) -> Option<io::Error> {
        self.last_error.take()
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn emit(&mut self, text: &str) {
        if self.last_error.is_some() {
            return;
        }
        if let Err(e) = self.out.write_all(text.as_bytes()) {
            tracing::error!(error = %e, "console write failed");
            self.last_error = Some(e);
        }
    }
}

/// `{ID [qq][ii]} ` for one station.
pub fn render_station(snap: &StationSnapshot) -> String {
    format!("{{{} [{:_>2}][{:_>2}]}} ", snap.station_id, snap.queue_len, snap.idle_servers)
}

/// The full multi-line occupancy grid, including the trailing blank line.
pub fn render_stages(stages: &[Stage]) -> String {
    let mut text = String::new();
    for stage in stages {
        for snap in stage.snapshot() {
            text.push_str(&render_station(&snap));
        }
        text.push('\n');
    }
    text.push('\n');
    text
}

impl<W: Write> FacilityObserver for ConsoleRenderer<W> {
    fn on_customer_entered(&mut self, id: CustomerId, tick: Tick) {
        self.emit(&format!("+ Customer [{}] entered at: {}\n\n", id.0, tick.0));
    }

    fn on_customer_exited(&mut self, id: CustomerId, tick: Tick) {
        self.emit(&format!("- Customer [{}] exited at: {}\n\n", id.0, tick.0));
    }

    fn on_customer_dropped(&mut self, id: CustomerId, _stage: StageId, tick: Tick) {
        self.emit(&format!("x Customer [{}] dropped at: {}\n\n", id.0, tick.0));
    }

    fn on_snapshot(&mut self, _tick: Tick, stages: &[Stage]) {
        let text = render_stages(stages);
        self.emit(&text);
    }

    fn on_run_end(&mut self, _final_tick: Tick) {
        if self.last_error.is_some() {
            return;
        }
        if let Err(e) = self.out.flush() {
            tracing::error!(error = %e, "console flush failed");
            self.last_error = Some(e);
        }
    }
}
