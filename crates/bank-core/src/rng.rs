//! Uniform random sources consumed by the routing engine.
//!
//! The facility only ever asks for one thing: a value in `[0, 1)`.  That
//! narrow seam is the [`UniformSource`] trait.  Production runs use
//! [`SimRng`] (a seeded `SmallRng`); tests inject [`ConstantSource`] or
//! [`ScriptedSource`] to pin every draw.
//!
//! Draws are `f32` because the station-selection walk accumulates shares in
//! single precision, and the drop edge case depends on that rounding.

use std::collections::VecDeque;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

// ── UniformSource ─────────────────────────────────────────────────────────────

/// A callable producing one uniform value in `[0, 1)` per invocation.
pub trait UniformSource {
    fn next_unit(&mut self) -> f32;
}

impl<S: UniformSource + ?Sized> UniformSource for &mut S {
    #[inline]
    fn next_unit(&mut self) -> f32 {
        (**self).next_unit()
    }
}

// ── SimRng ────────────────────────────────────────────────────────────────────

/// Deterministic simulation RNG.
///
/// Used only from the facility's single control thread.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }
}

impl UniformSource for SimRng {
    #[inline]
    fn next_unit(&mut self) -> f32 {
        self.0.r#gen::<f32>()
    }
}

// ── ConstantSource ────────────────────────────────────────────────────────────

/// Returns the same value on every draw.
///
/// `ConstantSource(0.0)` makes every admission test `0.0 < 0.0` false, so no
/// customer ever arrives.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ConstantSource(pub f32);

impl UniformSource for ConstantSource {
    #[inline]
    fn next_unit(&mut self) -> f32 {
        self.0
    }
}

// ── ScriptedSource ────────────────────────────────────────────────────────────

/// Replays a fixed sequence of draws, then returns `fallback` forever.
#[derive(Clone, Debug)]
pub struct ScriptedSource {
    script:   VecDeque<f32>,
    fallback: f32,
}

impl ScriptedSource {
    pub fn new(script: impl IntoIterator<Item = f32>, fallback: f32) -> Self {
        Self {
            script: script.into_iter().collect(),
            fallback,
        }
    }

    /// Draws left before the fallback takes over.
    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl UniformSource for ScriptedSource {
    fn next_unit(&mut self) -> f32 {
        self.script.pop_front().unwrap_or(self.fallback)
    }
}
