//! `bank-facility` — the routing-and-service engine of the bank simulator.
//!
//! # Tick loop
//!
//! ```text
//! for tick in 1..config.tick_bound:
//!   ① Admission — if r1 < r2: new Customer → weighted draw into stage 0
//!   ② Service   — for each stage, for each station (ascending weight):
//!                   process_completions  → forward one to next stage (then
//!                                          stop this station) or exit
//!                   fill_from_queue      → idle servers take the queue head
//!   ③ Snapshot  — observer.on_snapshot(tick, &stages)
//! ```
//!
//! # Crate layout
//!
//! | Module         | Contents                                            |
//! |----------------|-----------------------------------------------------|
//! | [`customer`]   | `Customer`, `CustomerIds`                           |
//! | [`server`]     | `Server`                                            |
//! | [`station`]    | `Station`, `StationSnapshot`, `Completions`         |
//! | [`stage`]      | `Stage`, `Routing`, the weighted draw               |
//! | [`topology`]   | `Topology`, `StationConfig`, CSV loader             |
//! | [`builder`]    | `FacilityBuilder`                                   |
//! | [`facility`]   | `Facility`, `FacilityCounts`                        |
//! | [`observer`]   | `FacilityObserver`, `NoopObserver`                  |
//! | [`error`]      | `FacilityError`, `FacilityResult<T>`                |
//!
//! # Quick-start
//!
//! ```rust
//! use bank_core::{RunConfig, SimRng};
//! use bank_facility::{FacilityBuilder, NoopObserver};
//!
//! let config = RunConfig::new(200, 7);
//! let mut facility = FacilityBuilder::new(config.clone(), SimRng::new(config.seed))
//!     .build()
//!     .unwrap();
//! facility.run(&mut NoopObserver);
//! let counts = facility.counts();
//! assert_eq!(
//!     counts.admitted as usize,
//!     facility.in_system() + (counts.exited + counts.dropped) as usize,
//! );
//! ```

pub mod builder;
pub mod customer;
pub mod error;
pub mod facility;
pub mod observer;
pub mod server;
pub mod stage;
pub mod station;
pub mod topology;


pub use builder::FacilityBuilder;
pub use customer::{Customer, CustomerIds};
pub use error::{FacilityError, FacilityResult};
pub use facility::{Facility, FacilityCounts};
pub use observer::{FacilityObserver, NoopObserver};
pub use server::Server;
pub use stage::{Routing, Stage};
pub use station::{Completions, Station, StationSnapshot};
pub use topology::{StationConfig, Topology, load_topology_csv, load_topology_reader};
