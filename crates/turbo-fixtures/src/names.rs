//! Unique product name generation.

use std::collections::HashSet;

use rand::Rng;

use crate::error::FixtureError;
use crate::tables::{NAME_MIDDLES, NAME_PREFIXES, NAME_SUFFIXES};

/// Default number of draws before a single name request gives up.
pub const DEFAULT_MAX_ATTEMPTS: usize = 10_000;

/// Draws `"{prefix}{middle} {suffix}"` names, never returning the same name twice.
///
/// The seen-name set belongs to this value, so two generators never
/// interfere with each other.
#[derive(Debug, Clone)]
pub struct NameGenerator {
    prefixes: &'static [&'static str],
    middles: &'static [&'static str],
    suffixes: &'static [&'static str],
    seen: HashSet<String>,
    max_attempts: usize,
}

impl NameGenerator {
    /// Create a generator over the built-in token pools.
    pub fn new() -> Self {
        Self::with_pools(NAME_PREFIXES, NAME_MIDDLES, NAME_SUFFIXES)
    }

    /// Create a generator over custom token pools.
    pub fn with_pools(
        prefixes: &'static [&'static str],
        middles: &'static [&'static str],
        suffixes: &'static [&'static str],
    ) -> Self {
        Self {
            prefixes,
            middles,
            suffixes,
            seen: HashSet::new(),
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }

    /// Set the draw limit for a single name.
    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts.max(1);
        self
    }

    /// Upper bound on distinct names the pools can form.
    pub fn capacity(&self) -> usize {
        self.prefixes.len() * self.middles.len() * self.suffixes.len()
    }

    /// Number of names handed out so far.
    pub fn produced(&self) -> usize {
        self.seen.len()
    }

    /// Draw names until an unused one comes up.
    ///
    /// Fails with [`FixtureError::NamePoolExhausted`] once every combination
    /// is taken or the attempt limit is hit.
    pub fn next_name<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<String, FixtureError> {
        let capacity = self.capacity();
        if self.seen.len() >= capacity {
            return Err(self.exhausted());
        }

        for _ in 0..self.max_attempts {
            let name = format!(
                "{}{} {}",
                self.prefixes[rng.gen_range(0..self.prefixes.len())],
                self.middles[rng.gen_range(0..self.middles.len())],
                self.suffixes[rng.gen_range(0..self.suffixes.len())],
            );
            if self.seen.insert(name.clone()) {
                return Ok(name);
            }
        }

        tracing::warn!(
            produced = self.seen.len(),
            attempts = self.max_attempts,
            "gave up drawing a unique product name"
        );
        Err(self.exhausted())
    }

    fn exhausted(&self) -> FixtureError {
        FixtureError::NamePoolExhausted {
            produced: self.seen.len(),
            capacity: self.capacity(),
        }
    }
}

impl Default for NameGenerator {
    fn default() -> Self {
        Self::new()
    }
}
