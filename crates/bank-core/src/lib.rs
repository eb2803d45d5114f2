//! `bank-core` — foundational types for the bank queueing simulator.
//!
//! This crate is a dependency of every other `bank-*` crate.  It has no
//! `bank-*` dependencies and minimal external ones (only `rand`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                                   |
//! |-------------|------------------------------------------------------------|
//! | [`ids`]     | `CustomerId`, `StageId`                                    |
//! | [`time`]    | `Tick`, `RunConfig`                                        |
//! | [`rng`]     | `UniformSource` trait, `SimRng`, `ConstantSource`, `ScriptedSource` |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to ids, `Tick`, `RunConfig`. |

pub mod ids;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use ids::{CustomerId, StageId};
pub use rng::{ConstantSource, ScriptedSource, SimRng, UniformSource};
pub use time::{RunConfig, Tick};
