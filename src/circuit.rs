//! Immutable circuit topology: wires, transistors, and their adjacency.
//!
//! Everything here is built once by [`crate::builder::extract`] and read-only
//! afterwards. Wires and transistors live in flat arenas cross-referenced by
//! dense integer ids; only the charge vector held by the simulation varies
//! over time.

use serde::{Deserialize, Serialize};

/// Dense index of a wire within its circuit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct WireId(pub u32);

/// Dense index of a transistor within its circuit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TransistorId(pub u32);

/// Axis-aligned pixel rectangle: min corner inclusive, max corner exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bounds {
    pub min: (u32, u32),
    pub max: (u32, u32),
}

impl Bounds {
    /// The 1x1 rectangle covering a single pixel.
    pub fn of_pixel(x: u32, y: u32) -> Bounds {
        Bounds {
            min: (x, y),
            max: (x + 1, y + 1),
        }
    }

    /// Smallest rectangle covering both operands.
    pub fn union(self, other: Bounds) -> Bounds {
        Bounds {
            min: (self.min.0.min(other.min.0), self.min.1.min(other.min.1)),
            max: (self.max.0.max(other.max.0), self.max.1.max(other.max.1)),
        }
    }

    pub fn contains(&self, x: u32, y: u32) -> bool {
        x >= self.min.0 && x < self.max.0 && y >= self.min.1 && y < self.max.1
    }

    pub fn width(&self) -> u32 {
        self.max.0 - self.min.0
    }

    pub fn height(&self) -> u32 {
        self.max.1 - self.min.1
    }
}

/// One electrical node: a maximal connected set of conductive pixels.
///
/// Membership is fixed after extraction. `transistors` lists the gates this
/// wire terminates into as an *input*; a wire acting only as a base keeps an
/// empty list, since gating influence flows through inputs, not bases.
#[derive(Debug, Clone)]
pub struct Wire {
    pub pixels: Vec<(u32, u32)>,
    pub bounds: Bounds,
    pub is_power_source: bool,
    pub transistors: Vec<TransistorId>,
}

/// A gated junction occupying a single empty cell: `base` controls whether
/// `input_a` and `input_b` may influence each other.
///
/// The base wire may legitimately be the same node as one of the inputs;
/// that feedback arrangement is what makes blinker circuits oscillate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transistor {
    pub position: (u32, u32),
    pub base: WireId,
    pub input_a: WireId,
    pub input_b: WireId,
}

impl Transistor {
    /// The input on the far side of `wire`, if `wire` is one of the inputs.
    pub fn other_input(&self, wire: WireId) -> Option<WireId> {
        if wire == self.input_a {
            Some(self.input_b)
        } else if wire == self.input_b {
            Some(self.input_a)
        } else {
            None
        }
    }
}

/// The finished topology. Shared read-only by every simulation state.
#[derive(Debug, Clone, Default)]
pub struct Circuit {
    pub(crate) wires: Vec<Wire>,
    pub(crate) transistors: Vec<Transistor>,
}

impl Circuit {
    pub fn wires(&self) -> &[Wire] {
        &self.wires
    }

    pub fn transistors(&self) -> &[Transistor] {
        &self.transistors
    }

    pub fn wire(&self, id: WireId) -> &Wire {
        &self.wires[id.0 as usize]
    }

    pub fn transistor(&self, id: TransistorId) -> &Transistor {
        &self.transistors[id.0 as usize]
    }

    pub fn wire_count(&self) -> usize {
        self.wires.len()
    }

    pub fn transistor_count(&self) -> usize {
        self.transistors.len()
    }

    /// Wire ids in dense index order.
    pub fn wire_ids(&self) -> impl Iterator<Item = WireId> + '_ {
        (0..self.wires.len() as u32).map(WireId)
    }
}
