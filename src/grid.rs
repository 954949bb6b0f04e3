//! Pixel grid input and cell classification.
//!
//! The engine never touches an image format. Its input is an abstract
//! indexed grid: one unsigned color class per cell, row-major. How classes
//! map to palette colors is the decoder's business; here class 0 is
//! background, classes `1..=MAX_CHARGE + 1` are conductive with initial
//! charge `class - 1`, and everything above the wire range (transistor
//! glyphs included) is empty.

use serde::{Deserialize, Serialize};

use crate::error::SimError;

/// Highest charge level a wire can hold.
pub const MAX_CHARGE: u8 = 6;

/// Semantic meaning of one grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    /// Part of a wire, with the initial charge encoded by the color class.
    Conductive(u8),
    /// Background, a transistor glyph, or any class outside the wire range.
    Empty,
}

impl CellKind {
    /// Classifies a raw color class.
    ///
    /// `checked_sub` keeps class 0 out of the conductive range without
    /// relying on wrapping arithmetic.
    pub fn classify(class: u8) -> CellKind {
        match class.checked_sub(1) {
            Some(charge) if charge <= MAX_CHARGE => CellKind::Conductive(charge),
            _ => CellKind::Empty,
        }
    }

    /// True for cells that belong to a wire.
    pub fn is_conductive(self) -> bool {
        matches!(self, CellKind::Conductive(_))
    }
}

/// An indexed pixel grid, validated at construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PixelGrid {
    width: u32,
    height: u32,
    cells: Vec<u8>,
}

impl PixelGrid {
    /// Wraps a row-major class buffer. Fails fast on a zero dimension or a
    /// buffer whose length does not match `width * height`, so extraction
    /// never runs on a malformed grid.
    pub fn new(width: u32, height: u32, cells: Vec<u8>) -> Result<Self, SimError> {
        if width == 0 || height == 0 {
            return Err(SimError::InvalidInput(format!(
                "grid dimensions must be non-zero, got {width}x{height}"
            )));
        }
        let expected = width as usize * height as usize;
        if cells.len() != expected {
            return Err(SimError::InvalidInput(format!(
                "cell buffer holds {} classes, a {width}x{height} grid needs {expected}",
                cells.len()
            )));
        }
        Ok(Self {
            width,
            height,
            cells,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Color class at (x, y). Panics out of bounds; the builder only walks
    /// the grid's own dimensions.
    pub fn class_at(&self, x: u32, y: u32) -> u8 {
        self.cells[y as usize * self.width as usize + x as usize]
    }

    pub fn kind_at(&self, x: u32, y: u32) -> CellKind {
        CellKind::classify(self.class_at(x, y))
    }
}
