//! Randomness source for the decorative parts of a plant layout.
//!
//! Branch length, branch tilt, leaves per group and the rainbow palette
//! choice all go through [`Jitter`], so callers decide whether a render is
//! random, seeded or fully stable.

use rand::Rng;
use std::ops::RangeInclusive;

pub trait Jitter {
    /// Uniform sample in `range`. An empty range yields its start.
    fn uniform(&mut self, range: RangeInclusive<f32>) -> f32;

    /// Uniform integer in `range`. An empty range yields its start.
    fn count(&mut self, range: RangeInclusive<usize>) -> usize;

    /// Index into a list of `len` choices. Returns `0` when `len == 0`.
    fn pick(&mut self, len: usize) -> usize;
}

impl<J: Jitter + ?Sized> Jitter for &mut J {
    fn uniform(&mut self, range: RangeInclusive<f32>) -> f32 {
        (**self).uniform(range)
    }

    fn count(&mut self, range: RangeInclusive<usize>) -> usize {
        (**self).count(range)
    }

    fn pick(&mut self, len: usize) -> usize {
        (**self).pick(len)
    }
}

/// [`Jitter`] backed by any [`Rng`].
#[derive(Debug)]
pub struct RandomJitter<R> {
    rng: R,
}

impl<R: Rng> RandomJitter<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl<R: Rng> Jitter for RandomJitter<R> {
    fn uniform(&mut self, range: RangeInclusive<f32>) -> f32 {
        let (lo, hi) = range.into_inner();
        if lo >= hi {
            return lo;
        }
        self.rng.random_range(lo..=hi)
    }

    fn count(&mut self, range: RangeInclusive<usize>) -> usize {
        let (lo, hi) = range.into_inner();
        if lo >= hi {
            return lo;
        }
        self.rng.random_range(lo..=hi)
    }

    fn pick(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        self.rng.random_range(0..len)
    }
}

/// [`Jitter`] that always answers the middle of each range and the first
/// choice of each list. Two renders of the same plant are then identical.
#[derive(Clone, Copy, Debug, Default)]
pub struct MidpointJitter;

impl Jitter for MidpointJitter {
    fn uniform(&mut self, range: RangeInclusive<f32>) -> f32 {
        let (lo, hi) = range.into_inner();
        if lo >= hi {
            return lo;
        }
        lo + (hi - lo) * 0.5
    }

    fn count(&mut self, range: RangeInclusive<usize>) -> usize {
        let (lo, hi) = range.into_inner();
        if lo >= hi {
            return lo;
        }
        lo + (hi - lo) / 2
    }

    fn pick(&mut self, _len: usize) -> usize {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn random_jitter_stays_inside_ranges() {
        let mut jitter = RandomJitter::new(StdRng::seed_from_u64(7));

        for _ in 0..500 {
            let v = jitter.uniform(20.0..=50.0);
            assert!((20.0..=50.0).contains(&v), "uniform out of range: {v}");

            let n = jitter.count(2..=4);
            assert!((2..=4).contains(&n), "count out of range: {n}");

            assert!(jitter.pick(4) < 4);
        }
    }

    #[test]
    fn random_jitter_covers_every_count() {
        let mut jitter = RandomJitter::new(StdRng::seed_from_u64(11));
        let mut seen = [false; 5];
        for _ in 0..200 {
            seen[jitter.count(2..=4)] = true;
        }
        assert_eq!(seen, [false, false, true, true, true]);
    }

    #[test]
    fn degenerate_ranges_do_not_panic() {
        let mut jitter = RandomJitter::new(StdRng::seed_from_u64(3));
        assert_eq!(jitter.uniform(5.0..=5.0), 5.0);
        assert_eq!(jitter.uniform(9.0..=1.0), 9.0);
        assert_eq!(jitter.count(3..=3), 3);
        assert_eq!(jitter.count(4..=2), 4);
        assert_eq!(jitter.pick(0), 0);
    }

    #[test]
    fn same_seed_gives_same_sequence() {
        let mut a = RandomJitter::new(StdRng::seed_from_u64(42));
        let mut b = RandomJitter::new(StdRng::seed_from_u64(42));
        for _ in 0..20 {
            assert_eq!(a.uniform(0.0..=1.0), b.uniform(0.0..=1.0));
        }
    }

    #[test]
    fn midpoint_jitter_answers_centres() {
        let mut jitter = MidpointJitter;
        assert_eq!(jitter.uniform(20.0..=50.0), 35.0);
        assert_eq!(jitter.uniform(20.0..=40.0), 30.0);
        assert_eq!(jitter.count(2..=4), 3);
        assert_eq!(jitter.pick(4), 0);
    }

    #[test]
    fn mutable_reference_forwards_to_inner_jitter() {
        fn sample(mut j: impl Jitter) -> usize {
            j.count(2..=4)
        }
        let mut jitter = MidpointJitter;
        assert_eq!(sample(&mut jitter), 3);
    }
}
