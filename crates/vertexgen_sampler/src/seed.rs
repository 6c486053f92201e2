//! Named seed assignment for co-operating sampler instances.
//!
//! When several samplers run inside one job (one per event stream, say),
//! giving them the same seed would produce correlated vertices. The
//! [`SeedRegistry`] hands out one seed per label: an explicit seed from the
//! configuration is honoured as-is, otherwise a seed is derived from the
//! registry's base seed and the label. Derivation is pure, so the same base
//! seed and label always yield the same engine seed across runs.

use std::collections::BTreeMap;

use thiserror::Error;

/// Seed registry errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SeedError {
    /// A label was registered twice.
    #[error("seed label \"{label}\" is already registered")]
    DuplicateLabel {
        /// The label that collided.
        label: String,
    },
}

/// Per-run registry assigning one engine seed per label.
///
/// # Examples
///
/// ```rust
/// use vertexgen_sampler::seed::SeedRegistry;
///
/// let mut registry = SeedRegistry::new(42);
///
/// // Derived seeds are reproducible and label-specific.
/// let a = registry.register("beam", None).unwrap();
/// let b = registry.register("cosmics", None).unwrap();
/// assert_ne!(a, b);
///
/// // Explicit seeds from a configuration win over derivation.
/// let c = registry.register("calibration", Some(7)).unwrap();
/// assert_eq!(c, 7);
///
/// // Labels are unique within a registry.
/// assert!(registry.register("beam", None).is_err());
/// ```
#[derive(Clone, Debug)]
pub struct SeedRegistry {
    /// Seed all derivations mix from.
    base_seed: u64,
    /// Seeds handed out so far, by label.
    assigned: BTreeMap<String, u64>,
}

impl SeedRegistry {
    /// Creates a registry with the given base seed.
    #[inline]
    pub fn new(base_seed: u64) -> Self {
        Self {
            base_seed,
            assigned: BTreeMap::new(),
        }
    }

    /// Returns the base seed.
    #[inline]
    pub fn base_seed(&self) -> u64 {
        self.base_seed
    }

    /// Assigns a seed to `label` and records it.
    ///
    /// `explicit` takes precedence when present; otherwise the seed is
    /// derived from the base seed and the label.
    ///
    /// # Errors
    ///
    /// Returns [`SeedError::DuplicateLabel`] when the label already has a
    /// seed; re-registering silently would make it too easy to end up with
    /// two engines on one stream.
    pub fn register(&mut self, label: &str, explicit: Option<u64>) -> Result<u64, SeedError> {
        if self.assigned.contains_key(label) {
            return Err(SeedError::DuplicateLabel {
                label: label.to_string(),
            });
        }
        let seed = explicit.unwrap_or_else(|| derive_seed(self.base_seed, label));
        self.assigned.insert(label.to_string(), seed);
        Ok(seed)
    }

    /// Returns the seed previously assigned to `label`, if any.
    #[inline]
    pub fn lookup(&self, label: &str) -> Option<u64> {
        self.assigned.get(label).copied()
    }

    /// Iterates over `(label, seed)` pairs in label order.
    pub fn assignments(&self) -> impl Iterator<Item = (&str, u64)> {
        self.assigned.iter().map(|(label, seed)| (label.as_str(), *seed))
    }
}

/// Derives a label-specific seed from the base seed.
///
/// FNV-1a over the label bytes, then a SplitMix64 finalising mix folding in
/// the base seed. The mix keeps structurally similar labels ("tpc0",
/// "tpc1") from landing on nearby seeds.
fn derive_seed(base: u64, label: &str) -> u64 {
    let mut hash: u64 = 0xcbf2_9ce4_8422_2325;
    for byte in label.bytes() {
        hash ^= u64::from(byte);
        hash = hash.wrapping_mul(0x0000_0100_0000_01b3);
    }

    let mut z = base
        .wrapping_add(hash)
        .wrapping_add(0x9e37_79b9_7f4a_7c15);
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    z ^ (z >> 31)
}
