//! `bank-output` — reporting sinks for the bank simulator.
//!
//! | Sink                        | Output                                          |
//! |-----------------------------|-------------------------------------------------|
//! | [`ConsoleRenderer`]         | Live text: customer events + occupancy grid      |
//! | [`FacilityOutputObserver`]  | Any [`OutputWriter`]; [`CsvWriter`] writes `occupancy.csv`, `customer_events.csv` |
//!
//! Both implement `bank_facility::FacilityObserver`; combine them with a tuple
//! `(console, csv)` to drive both from one run.
//!
//! # Usage
//!
//! ```rust,ignore
//! use bank_output::{ConsoleRenderer, CsvWriter, FacilityOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = (ConsoleRenderer::stdout(), FacilityOutputObserver::new(writer));
//! facility.run(&mut obs);
//! if let Some(e) = obs.1.take_error() { eprintln!("output error: {e}"); }
//! ```

pub mod console;
pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(test)]
mod tests;

pub use console::ConsoleRenderer;
pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::FacilityOutputObserver;
pub use row::{CustomerEvent, CustomerEventRow, OccupancyRow};
pub use writer::OutputWriter;
