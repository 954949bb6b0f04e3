//! Tick stepping of the circuit's charge state.
//!
//! A [`Simulation`] is one state of the charge vector plus a shared handle
//! on the immutable topology. Stepping is pure: every new charge is computed
//! from the previous state only, so a step can never observe a
//! partially-updated tick.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::builder::{self, Extraction};
use crate::circuit::{Circuit, WireId};
use crate::grid::{PixelGrid, MAX_CHARGE};

/// Charge state of every wire at one tick.
#[derive(Debug, Clone)]
pub struct Simulation {
    circuit: Arc<Circuit>,
    charges: Vec<u8>,
    tick: u64,
}

/// Serializable view of one simulation state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub tick: u64,
    pub charges: Vec<u8>,
}

impl Simulation {
    /// Extracts the circuit from `grid` and seeds the charge vector with the
    /// charges accumulated from the pixels' color classes.
    pub fn from_grid(grid: &PixelGrid) -> Simulation {
        let Extraction {
            circuit,
            initial_charges,
        } = builder::extract(grid);
        Simulation::new(Arc::new(circuit), initial_charges)
    }

    /// Starts at tick zero from an explicit charge vector, one entry per
    /// wire in index order.
    pub fn new(circuit: Arc<Circuit>, charges: Vec<u8>) -> Simulation {
        assert_eq!(
            charges.len(),
            circuit.wire_count(),
            "charge vector length must match the wire count"
        );
        assert!(
            charges.iter().all(|&charge| charge <= MAX_CHARGE),
            "charges must lie in 0..=MAX_CHARGE"
        );
        Simulation {
            circuit,
            charges,
            tick: 0,
        }
    }

    pub fn circuit(&self) -> &Circuit {
        &self.circuit
    }

    /// Charge of every wire, indexed by wire id.
    pub fn charges(&self) -> &[u8] {
        &self.charges
    }

    pub fn charge(&self, id: WireId) -> u8 {
        self.charges[id.0 as usize]
    }

    /// Ticks elapsed since the state this simulation was constructed from.
    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            tick: self.tick,
            charges: self.charges.clone(),
        }
    }

    /// Advances one tick, yielding a fresh state that shares the topology.
    ///
    /// Power sources ramp by one level per tick until saturation and never
    /// decrease. Every other wire ramps toward a strictly stronger traced
    /// source, decays by one level when its source is no stronger than
    /// itself, and holds in the dead-band where the source exceeds it by
    /// exactly one.
    pub fn step(&self) -> Simulation {
        let mut next = Vec::with_capacity(self.charges.len());
        for id in self.circuit.wire_ids() {
            let previous = self.charge(id);
            let charge = if self.circuit.wire(id).is_power_source {
                (previous + 1).min(MAX_CHARGE)
            } else {
                let (_, source) = self.trace_power_source(id);
                if source > previous + 1 {
                    previous + 1
                } else if source <= previous && previous > 0 {
                    previous - 1
                } else {
                    previous
                }
            };
            next.push(charge);
        }
        Simulation {
            circuit: Arc::clone(&self.circuit),
            charges: next,
            tick: self.tick + 1,
        }
    }

    /// Single-hop search for the strongest neighbor able to drive `id`
    /// through an open gate at this tick.
    ///
    /// A transistor whose base carries any charge is closed and contributes
    /// nothing. Through an open gate, a power-source neighbor wins outright;
    /// otherwise the strongest opposite input seen so far is kept. Falls
    /// back to the wire itself when nothing stronger is reachable — deeper
    /// influence propagates naturally over subsequent ticks.
    pub fn trace_power_source(&self, id: WireId) -> (WireId, u8) {
        let mut result = (id, self.charge(id));
        for &tid in &self.circuit.wire(id).transistors {
            let transistor = self.circuit.transistor(tid);
            if self.charge(transistor.base) > 0 {
                continue;
            }
            let other = transistor
                .other_input(id)
                .expect("transistor registered on a wire that is not one of its inputs");
            let other_charge = self.charge(other);
            if self.circuit.wire(other).is_power_source {
                return (other, other_charge);
            }
            if other_charge > result.1 {
                result = (other, other_charge);
            }
        }
        result
    }
}
