//! Randomness sources for deterministic combat resolution.
//!
//! The reducer never reaches for an ambient generator. Every probabilistic
//! decision consumes exactly one draw from a caller-supplied [`RandomSource`],
//! in a fixed order, so an encounter can be replayed from a recorded list of
//! draws.
//!
//! # Determinism
//!
//! Sources here are deterministic: the same recorded sequence always yields
//! the same values. Seeded generators live with the caller.

/// Largest value a sanitized draw may take (just below 1.0).
const MAX_UNIT: f64 = 1.0 - f64::EPSILON;

/// Supplies uniform values in `[0, 1)` on demand.
///
/// Implemented for any `FnMut() -> f64`, so tests can pass a closure.
pub trait RandomSource {
    /// Consume one value from the source.
    fn draw(&mut self) -> f64;
}

impl<F> RandomSource for F
where
    F: FnMut() -> f64,
{
    fn draw(&mut self) -> f64 {
        self()
    }
}

/// Clamp a raw draw into `[0, 1)`.
///
/// Non-finite values map to `0.0`. Keeps roll bounds intact even when a source
/// misbehaves.
#[inline]
pub fn unit(value: f64) -> f64 {
    if value.is_finite() {
        value.clamp(0.0, MAX_UNIT)
    } else {
        0.0
    }
}

/// `floor(draw * n)` for one sanitized draw.
#[inline]
pub fn scaled_floor(rng: &mut dyn RandomSource, n: u32) -> u32 {
    (unit(rng.draw()) * f64::from(n)).floor() as u32
}

/// Pick a uniformly random element using one draw.
///
/// Returns `None` for an empty slice without consuming a draw.
pub fn select_random<'a, T>(items: &'a [T], rng: &mut dyn RandomSource) -> Option<&'a T> {
    select_index(items.len(), rng).map(|index| &items[index])
}

/// Pick a uniformly random index in `0..len` using one draw.
pub fn select_index(len: usize, rng: &mut dyn RandomSource) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let index = (unit(rng.draw()) * len as f64).floor() as usize;
    Some(index.min(len - 1))
}

/// Replays a recorded sequence of draws.
///
/// Cycles back to the start when exhausted; an empty script yields `0.0`.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScriptedDraws {
    values: Vec<f64>,
    cursor: usize,
}

impl ScriptedDraws {
    pub fn new(values: impl Into<Vec<f64>>) -> Self {
        Self {
            values: values.into(),
            cursor: 0,
        }
    }

    /// Number of draws consumed so far.
    pub fn consumed(&self) -> usize {
        self.cursor
    }

    /// Draws left before the script starts cycling.
    pub fn remaining(&self) -> usize {
        self.values.len().saturating_sub(self.cursor)
    }

    pub fn is_exhausted(&self) -> bool {
        self.remaining() == 0
    }
}

impl RandomSource for ScriptedDraws {
    fn draw(&mut self) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value
    }
}
