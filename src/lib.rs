//! # Wiresim
//!
//! An engine that reads a raster image as a schematic of a digital logic
//! circuit and simulates its electrical behavior tick by tick.
//!
//! Pixels encode the circuit by color and adjacency convention: conductive
//! classes form wires, a solid 2x2 block marks a permanent power source, a
//! one-pixel gap where four wires meet is a crossover, and a
//! three-of-four-neighbor footprint is a transistor whose base gates the two
//! perpendicular inputs. The simulation advances the per-wire charge vector
//! under a discrete propagation rule until the state sequence loops, which
//! it always eventually does.
//!
//! ## Architecture
//!
//! - **Extraction**: a union-find scan segments the grid into wires, then
//!   two passes over the empty cells resolve crossovers and transistors.
//! - **Stepping**: pure state transitions over an immutable, `Arc`-shared
//!   topology; every new charge reads only the previous tick.
//! - **Loop detection**: sha2 digests of the charge vector find the period
//!   a host needs for a seamlessly looping animation.
//!
//! Image decoding, frame assembly and display are the host's concern; the
//! engine talks to them through [`PixelGrid`] on the way in and
//! [`PixelSink`] on the way out.
//!
//! ## Example
//!
//! ```
//! use wiresim::{find_loop, PixelGrid, Simulation};
//!
//! // A 2x2 conductive block: one wire, and a power source by convention.
//! let grid = PixelGrid::new(2, 2, vec![1, 1, 1, 1]).unwrap();
//! let sim = Simulation::from_grid(&grid);
//! assert_eq!(sim.circuit().wire_count(), 1);
//! assert_eq!(sim.charges(), &[0]);
//!
//! // The source ramps one level per tick and saturates.
//! let next = sim.step();
//! assert_eq!(next.charges(), &[1]);
//!
//! let (_, found) = find_loop(sim, Some(1_000)).unwrap();
//! assert_eq!(found.period, 1);
//! ```

/// Circuit extraction: wire segmentation and gate detection
pub mod builder;
/// Immutable circuit topology (wires, transistors, adjacency)
pub mod circuit;
/// TOML-backed configuration for host-facing knobs
pub mod config;
/// State hashing and loop detection
pub mod cycle;
/// Public error taxonomy
pub mod error;
/// Pixel grid input and cell classification
pub mod grid;
/// Logging setup
pub mod metrics;
/// Draw passes over a caller-supplied pixel sink
pub mod render;
/// Tick stepping of the charge state
pub mod simulation;

pub use builder::{extract, Extraction};
pub use circuit::{Bounds, Circuit, Transistor, TransistorId, Wire, WireId};
pub use config::{CycleConfig, SimConfig};
pub use cycle::{find_loop, Loop, StateHash};
pub use error::SimError;
pub use grid::{CellKind, PixelGrid, MAX_CHARGE};
pub use metrics::init_logging;
pub use render::{ClassMap, PaletteClassMap, PixelSink};
pub use simulation::{Simulation, Snapshot};
