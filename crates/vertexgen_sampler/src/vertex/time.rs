//! Event time laws.
//!
//! A [`TimeLaw`] is the frozen distribution object behind a
//! [`TimeMode`](super::TimeMode): built once at configuration time,
//! sampled once per vertex. Both laws collapse to exactly `t0` when the
//! spread is zero.

use rand::distributions::Uniform;
use rand_distr::Normal;

use crate::rng::VertexRng;

use super::config::TimeMode;
use super::error::ConfigError;

/// Frozen event time distribution.
#[derive(Clone, Debug)]
pub(super) enum TimeLaw {
    /// Uniform on `[t0 - sigma_t, t0 + sigma_t]`, endpoints included.
    Uniform(Uniform<f64>),
    /// Gaussian with mean `t0` and standard deviation `sigma_t`.
    Gaussian(Normal<f64>),
}

impl TimeLaw {
    /// Builds the distribution for `mode` around `t0` with spread `sigma_t`.
    ///
    /// Callers guarantee `t0` finite and `sigma_t` finite and non-negative;
    /// a rejected spread still surfaces as [`ConfigError::InvalidSigma`]
    /// rather than a panic.
    pub(super) fn new(mode: TimeMode, t0: f64, sigma_t: f64) -> Result<Self, ConfigError> {
        match mode {
            TimeMode::Uniform => Ok(Self::Uniform(Uniform::new_inclusive(
                t0 - sigma_t,
                t0 + sigma_t,
            ))),
            TimeMode::Gaussian => Normal::new(t0, sigma_t)
                .map(Self::Gaussian)
                .map_err(|_| ConfigError::InvalidSigma { sigma_t }),
        }
    }

    /// Draws one event time, consuming one engine draw.
    #[inline]
    pub(super) fn draw(&self, rng: &mut VertexRng) -> f64 {
        match self {
            Self::Uniform(distribution) => rng.sample(distribution),
            Self::Gaussian(distribution) => rng.sample(distribution),
        }
    }
}
