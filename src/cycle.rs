//! State hashing and loop detection.
//!
//! The charge vector ranges over a finite space, so the stepped state
//! sequence is eventually periodic. [`find_loop`] hashes every state and
//! reports the tick spacing between the first repeated pair, which is the
//! frame count a host needs for a seamlessly looping animation.

use std::collections::HashMap;

use sha2::{Digest, Sha256};

use crate::error::SimError;
use crate::simulation::Simulation;

/// Digest of one charge state.
pub type StateHash = [u8; 32];

/// A detected repetition in the state sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Loop {
    /// Ticks between the two identical states.
    pub period: u64,
    /// Tick, counted from the starting state, at which the repeat was seen.
    pub detected_at: u64,
}

impl Simulation {
    /// Deterministic digest of the charge vector.
    ///
    /// Hashes the `(wire index, charge)` pair for every wire in index order,
    /// index as little-endian `u32`, so identical states always hash
    /// identically regardless of any other representation detail.
    pub fn state_hash(&self) -> StateHash {
        let mut hasher = Sha256::new();
        for (index, &charge) in self.charges().iter().enumerate() {
            hasher.update((index as u32).to_le_bytes());
            hasher.update([charge]);
        }
        hasher.finalize().into()
    }
}

/// Steps `sim` until a state repeats, returning the state the repeat was
/// detected at together with the loop description.
///
/// Termination is guaranteed by the finite state space; `max_ticks` is a
/// safety valve for hosts that would rather fail than wait out an
/// astronomically long period. `None` searches unbounded.
pub fn find_loop(
    mut sim: Simulation,
    max_ticks: Option<u64>,
) -> Result<(Simulation, Loop), SimError> {
    let mut seen: HashMap<StateHash, u64> = HashMap::new();
    let mut ticks: u64 = 0;
    loop {
        if let Some(budget) = max_ticks {
            if ticks >= budget {
                return Err(SimError::ExceededBudget(budget));
            }
        }
        sim = sim.step();
        ticks += 1;
        let hash = sim.state_hash();
        if let Some(&earlier) = seen.get(&hash) {
            let found = Loop {
                period: ticks - earlier,
                detected_at: ticks,
            };
            tracing::info!(
                period = found.period,
                tick = found.detected_at,
                state = %hex::encode(&hash[..8]),
                "state loop found"
            );
            return Ok((sim, found));
        }
        seen.insert(hash, ticks);
        if ticks % 100_000 == 0 {
            tracing::debug!(tick = ticks, "still searching for a state loop");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::PixelGrid;

    fn sim_from(cells: Vec<u8>, width: u32, height: u32) -> Simulation {
        Simulation::from_grid(&PixelGrid::new(width, height, cells).unwrap())
    }

    #[test]
    fn test_equal_states_hash_equal() {
        let a = sim_from(vec![3, 3, 3], 3, 1);
        let b = sim_from(vec![3, 3, 3], 3, 1);
        assert_eq!(a.state_hash(), b.state_hash());
    }

    #[test]
    fn test_differing_states_hash_differently() {
        let a = sim_from(vec![3, 3, 3], 3, 1);
        let decayed = a.step();
        assert_ne!(a.state_hash(), decayed.state_hash());
    }

    #[test]
    fn test_static_circuit_loops_with_period_one() {
        // No power source: the line decays to zero and then repeats itself
        // every tick.
        let (rest, found) = find_loop(sim_from(vec![7, 7, 7], 3, 1), Some(100)).unwrap();
        assert_eq!(found.period, 1);
        assert_eq!(rest.charges(), &[0]);
    }

    #[test]
    fn test_budget_exhaustion_is_an_error() {
        // Charge 6 needs six decay ticks before the state can repeat.
        let result = find_loop(sim_from(vec![7, 7, 7], 3, 1), Some(2));
        assert!(matches!(result, Err(SimError::ExceededBudget(2))));
    }
}
