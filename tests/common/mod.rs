#![allow(dead_code)]

use std::collections::BTreeSet;

use wiresim::{Circuit, PixelGrid, WireId};

/// Builds a grid from ASCII art: '.' is background, digits are color
/// classes (so '1' is a charge-0 wire and '7' a fully charged one).
pub fn grid_from_art(rows: &[&str]) -> PixelGrid {
    let height = rows.len() as u32;
    let width = rows[0].len() as u32;
    let mut cells = Vec::with_capacity((width * height) as usize);
    for row in rows {
        assert_eq!(row.len() as u32, width, "art rows must share one width");
        for ch in row.chars() {
            cells.push(match ch {
                '.' => 0,
                digit => digit.to_digit(10).expect("art cells are '.' or digits") as u8,
            });
        }
    }
    PixelGrid::new(width, height, cells).unwrap()
}

/// The wire owning the given pixel.
pub fn wire_at(circuit: &Circuit, pixel: (u32, u32)) -> WireId {
    circuit
        .wire_ids()
        .find(|&id| circuit.wire(id).pixels.contains(&pixel))
        .unwrap_or_else(|| panic!("no wire owns pixel {pixel:?}"))
}

/// The pixel partition as a set of pixel sets, for order-independent
/// comparison between extraction runs.
pub fn partition(circuit: &Circuit) -> BTreeSet<BTreeSet<(u32, u32)>> {
    circuit
        .wires()
        .iter()
        .map(|wire| wire.pixels.iter().copied().collect())
        .collect()
}
