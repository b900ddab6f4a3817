//! Random parameter sampling.
//!
//! Every effect parameter is drawn fresh for every copy, so identical
//! settings never produce identical filter chains. The source of
//! randomness sits behind [`Sampler`] so tests can force exact draws
//! instead of asserting over distributions.

use std::collections::VecDeque;
use std::sync::Mutex;

use rand::Rng;

/// Source of randomness for effect parameters.
pub trait Sampler: Send + Sync {
    /// Draw a value uniformly from `[min, max]`.
    fn uniform(&self, min: f64, max: f64) -> f64;

    /// Fair coin flip.
    fn coin_flip(&self) -> bool;
}

/// Sampler backed by the thread-local RNG.
///
/// No seed control: repeated calls with the same settings yield
/// different values on every invocation.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRngSampler;

impl Sampler for ThreadRngSampler {
    fn uniform(&self, min: f64, max: f64) -> f64 {
        rand::rng().random_range(min..=max)
    }

    fn coin_flip(&self) -> bool {
        rand::rng().random_bool(0.5)
    }
}

/// Deterministic sampler replaying a scripted sequence of draws.
///
/// Used by tests to pin specific parameter values (e.g. forcing the
/// mirror coin flip to fail). Panics when a script runs out, so an
/// under-scripted test fails instead of passing on a quiet fallback.
#[derive(Debug, Default)]
pub struct ScriptedSampler {
    draws: Mutex<VecDeque<f64>>,
    flips: Mutex<VecDeque<bool>>,
}

impl ScriptedSampler {
    pub fn new(
        draws: impl IntoIterator<Item = f64>,
        flips: impl IntoIterator<Item = bool>,
    ) -> Self {
        Self {
            draws: Mutex::new(draws.into_iter().collect()),
            flips: Mutex::new(flips.into_iter().collect()),
        }
    }
}

impl Sampler for ScriptedSampler {
    fn uniform(&self, min: f64, max: f64) -> f64 {
        self.draws
            .lock()
            .expect("sampler lock poisoned")
            .pop_front()
            .unwrap_or_else(|| panic!("scripted draws exhausted for uniform({min}, {max})"))
    }

    fn coin_flip(&self) -> bool {
        self.flips
            .lock()
            .expect("sampler lock poisoned")
            .pop_front()
            .expect("scripted flips exhausted for coin_flip")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thread_rng_stays_in_range() {
        let sampler = ThreadRngSampler;
        for _ in 0..100 {
            let v = sampler.uniform(-0.08, 0.08);
            assert!((-0.08..=0.08).contains(&v));
        }
    }

    #[test]
    fn scripted_sampler_replays_draws_in_order() {
        let sampler = ScriptedSampler::new([1.5, 1.02], [true, false]);
        assert_eq!(sampler.uniform(0.0, 10.0), 1.5);
        assert_eq!(sampler.uniform(0.0, 10.0), 1.02);
        assert!(sampler.coin_flip());
        assert!(!sampler.coin_flip());
    }

    #[test]
    #[should_panic(expected = "scripted draws exhausted")]
    fn scripted_sampler_panics_when_draws_exhausted() {
        let sampler = ScriptedSampler::new([1.5], []);
        sampler.uniform(0.0, 10.0);
        sampler.uniform(0.0, 10.0);
    }

    #[test]
    #[should_panic(expected = "scripted flips exhausted")]
    fn scripted_sampler_panics_when_flips_exhausted() {
        let sampler = ScriptedSampler::default();
        sampler.coin_flip();
    }
}
