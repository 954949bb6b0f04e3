//! Draw-pass seam between the engine and a host renderer.
//!
//! The core emits per-pixel class writes through a caller-supplied
//! [`PixelSink`]; how those classes become colors (palette lookup, GIF
//! frames, a live canvas) is entirely the host's concern.

use crate::grid::MAX_CHARGE;
use crate::simulation::Simulation;

/// Capability to set one output pixel to a color class.
pub trait PixelSink {
    fn set_pixel(&mut self, x: u32, y: u32, class: u8);
}

/// Maps wire charges and the transistor marker to output color classes.
pub trait ClassMap {
    fn wire_class(&self, charge: u8) -> u8;
    fn transistor_class(&self) -> u8;
}

/// The convention the input grid was encoded with: class = charge + 1, and
/// transistors one past the last wire class.
#[derive(Debug, Clone, Copy, Default)]
pub struct PaletteClassMap;

impl ClassMap for PaletteClassMap {
    fn wire_class(&self, charge: u8) -> u8 {
        charge + 1
    }

    fn transistor_class(&self) -> u8 {
        MAX_CHARGE + 2
    }
}

impl Simulation {
    /// Full draw: every wire pixel at its charge's class, every transistor
    /// at the marker class.
    pub fn draw(&self, sink: &mut impl PixelSink, classes: &impl ClassMap) {
        for id in self.circuit().wire_ids() {
            let class = classes.wire_class(self.charge(id));
            for &(x, y) in &self.circuit().wire(id).pixels {
                sink.set_pixel(x, y, class);
            }
        }
        for transistor in self.circuit().transistors() {
            let (x, y) = transistor.position;
            sink.set_pixel(x, y, classes.transistor_class());
        }
    }

    /// Differential draw: only the wires whose charge changed since `prev`.
    /// Lets a host encode sparse animation frames.
    pub fn diff_draw(&self, prev: &Simulation, sink: &mut impl PixelSink, classes: &impl ClassMap) {
        for id in self.circuit().wire_ids() {
            if prev.charge(id) == self.charge(id) {
                continue;
            }
            let class = classes.wire_class(self.charge(id));
            for &(x, y) in &self.circuit().wire(id).pixels {
                sink.set_pixel(x, y, class);
            }
        }
    }
}
