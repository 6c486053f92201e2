//! Seeded random engine wrapper for vertex sampling.
//!
//! This module provides [`VertexRng`], the engine every sampler instance
//! owns. It wraps a `StdRng` seeded once at construction and keeps the
//! seed around for diagnostics.

use rand::distributions::Distribution;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Vertex sampling random engine.
///
/// A thin wrapper over `StdRng` that is seeded exactly once. The 64-bit
/// seed is expanded into the generator's full internal state via a
/// SplitMix64-style mix, so nearby seeds (0, 1, 2, ...) still give
/// unrelated streams, and seed 0 is as valid as any other.
///
/// # Examples
///
/// ```rust
/// use vertexgen_sampler::rng::VertexRng;
///
/// let mut rng1 = VertexRng::from_seed(42);
/// let mut rng2 = VertexRng::from_seed(42);
///
/// // Same seed produces identical sequences
/// assert_eq!(rng1.gen_uniform_in(0.0, 1.0), rng2.gen_uniform_in(0.0, 1.0));
/// ```
pub struct VertexRng {
    /// The underlying generator.
    inner: StdRng,
    /// The seed used for initialisation (stored for reproducibility tracking).
    seed: u64,
}

impl VertexRng {
    /// Creates a new engine initialised with the given seed.
    ///
    /// The same seed will always produce the same sequence of draws.
    ///
    /// # Arguments
    ///
    /// * `seed` - 64-bit seed value for reproducibility
    ///
    /// # Examples
    ///
    /// ```rust
    /// use vertexgen_sampler::rng::VertexRng;
    ///
    /// let rng = VertexRng::from_seed(0);
    /// assert_eq!(rng.seed(), 0);
    /// ```
    #[inline]
    pub fn from_seed(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    /// Returns the seed used for initialisation.
    ///
    /// Useful for logging and for reproducing a run.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Draws a uniform value on the closed interval `[lo, hi]`.
    ///
    /// A degenerate interval (`lo == hi`) returns `lo` exactly; this is how
    /// zero-width box axes and zero time spreads behave. Callers must supply
    /// finite bounds with `lo <= hi`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use vertexgen_sampler::rng::VertexRng;
    ///
    /// let mut rng = VertexRng::from_seed(42);
    /// let value = rng.gen_uniform_in(-3.0, 3.0);
    /// assert!(value >= -3.0 && value <= 3.0);
    /// assert_eq!(rng.gen_uniform_in(5.0, 5.0), 5.0);
    /// ```
    #[inline]
    pub fn gen_uniform_in(&mut self, lo: f64, hi: f64) -> f64 {
        self.inner.gen_range(lo..=hi)
    }

    /// Draws one value from an arbitrary distribution.
    ///
    /// This is the hook the kernel uses for its cached distribution objects
    /// (weighted cell selection, time laws) so that every draw is accounted
    /// to this engine.
    #[inline]
    pub fn sample<T, D: Distribution<T>>(&mut self, distribution: &D) -> T {
        distribution.sample(&mut self.inner)
    }
}
