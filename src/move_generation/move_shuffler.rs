//! Randomised move ordering for tie-breaking.
//!
//! Search keeps the first of several equally scored moves, so shuffling the
//! generated list varies play without changing which scores are reachable.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::moves::checkers_move::Move;

/// Where the shuffler's seed comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedPolicy {
    /// Reproducible sequence; re-applied at the start of every search.
    Fixed(u64),
    /// Seeded once from the wall clock.
    Clock,
}

pub struct MoveShuffler {
    policy: SeedPolicy,
    rng: StdRng,
}

impl MoveShuffler {
    pub fn new(policy: SeedPolicy) -> Self {
        Self {
            policy,
            rng: StdRng::seed_from_u64(initial_seed(policy)),
        }
    }

    #[inline]
    pub fn policy(&self) -> SeedPolicy {
        self.policy
    }

    /// Restart a fixed sequence; clock-seeded shufflers keep their stream.
    pub fn reset(&mut self) {
        if let SeedPolicy::Fixed(seed) = self.policy {
            self.rng = StdRng::seed_from_u64(seed);
        }
    }

    pub fn shuffle(&mut self, moves: &mut [Move]) {
        moves.shuffle(&mut self.rng);
    }
}

fn initial_seed(policy: SeedPolicy) -> u64 {
    match policy {
        SeedPolicy::Fixed(seed) => seed,
        SeedPolicy::Clock => chrono::Utc::now().timestamp_micros() as u64,
    }
}
