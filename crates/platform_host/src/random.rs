//! Uniform random sampling used for cosmetic timing jitter.

use std::cell::Cell;

/// Source of uniform samples in `[0, 1)`.
pub trait RandomSource {
    /// Returns the next sample.
    fn next_unit(&self) -> f64;
}

#[derive(Debug, Clone, Default)]
/// Deterministic source that cycles through a fixed list of samples.
///
/// An empty list always yields `0.0`. Samples outside `[0, 1)` are clamped.
pub struct SequenceRandomSource {
    samples: Vec<f64>,
    cursor: Cell<usize>,
}

impl SequenceRandomSource {
    /// Creates a source cycling through `samples`.
    pub fn new(samples: Vec<f64>) -> Self {
        Self {
            samples,
            cursor: Cell::new(0),
        }
    }

    /// Creates a source that always returns `value`.
    pub fn constant(value: f64) -> Self {
        Self::new(vec![value])
    }
}

impl RandomSource for SequenceRandomSource {
    fn next_unit(&self) -> f64 {
        if self.samples.is_empty() {
            return 0.0;
        }
        let index = self.cursor.get() % self.samples.len();
        self.cursor.set(index + 1);
        self.samples[index].clamp(0.0, 1.0 - f64::EPSILON)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequence_source_cycles_and_clamps() {
        let source = SequenceRandomSource::new(vec![0.25, 2.0, -1.0]);
        assert_eq!(source.next_unit(), 0.25);
        assert!(source.next_unit() < 1.0);
        assert_eq!(source.next_unit(), 0.0);
        assert_eq!(source.next_unit(), 0.25);
    }

    #[test]
    fn empty_sequence_yields_zero() {
        let source = SequenceRandomSource::default();
        assert_eq!(source.next_unit(), 0.0);
    }
}
