//! Circuit extraction: wire segmentation and gate detection.
//!
//! Three passes over the grid, strictly in order:
//!
//! 1. a row-major scan groups conductive cells into tentative groups through
//!    a union-find bucket matrix, marking any group that completes a solid
//!    2x2 block as a power source;
//! 2. a crossover pass over empty cells unions the vertical and the
//!    horizontal neighbor pair independently wherever all four orthogonal
//!    neighbors are wired and all four diagonals are not, letting two wires
//!    cross a one-pixel gap without becoming one node;
//! 3. a transistor pass instantiates a gate at every empty cell with exactly
//!    three wired orthogonal neighbors whose missing side has both adjacent
//!    diagonals clear.
//!
//! Group membership is final only after pass 2; pass 3 reads finalized wire
//! identities.

use crate::circuit::{Bounds, Circuit, Transistor, TransistorId, Wire, WireId};
use crate::grid::{CellKind, PixelGrid};

/// Index of a tentative group in the arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct GroupId(u32);

/// A not-yet-finalized wire accumulated during the scan.
#[derive(Debug)]
struct Group {
    pixels: Vec<(u32, u32)>,
    bounds: Bounds,
    charge: u8,
    is_power_source: bool,
}

impl Group {
    fn new() -> Group {
        Group {
            pixels: Vec::new(),
            bounds: Bounds::of_pixel(0, 0),
            charge: 0,
            is_power_source: false,
        }
    }

    fn record(&mut self, x: u32, y: u32) {
        let pixel = Bounds::of_pixel(x, y);
        self.bounds = if self.pixels.is_empty() {
            pixel
        } else {
            self.bounds.union(pixel)
        };
        self.pixels.push((x, y));
    }
}

/// Arena of tentative groups. A merged-away group leaves a `None` slot, so
/// ids stay stable and a stale id is caught instead of aliasing.
#[derive(Default)]
struct GroupArena {
    slots: Vec<Option<Group>>,
}

impl GroupArena {
    fn alloc(&mut self) -> GroupId {
        let id = GroupId(self.slots.len() as u32);
        self.slots.push(Some(Group::new()));
        id
    }

    fn get_mut(&mut self, id: GroupId) -> &mut Group {
        self.slots[id.0 as usize]
            .as_mut()
            .expect("bucket points at a retired group")
    }

    /// Folds `src` into `dst`: every bucket of `src` is re-pointed at `dst`,
    /// charge is the max of the two and the power flags are ORed.
    fn merge(&mut self, src: GroupId, dst: GroupId, buckets: &mut BucketMatrix) {
        assert_ne!(src, dst, "a wire group can not be merged into itself");
        let moved = self.slots[src.0 as usize]
            .take()
            .expect("merge source is a retired group");
        for &(x, y) in &moved.pixels {
            buckets.set(x, y, dst);
        }
        let target = self.get_mut(dst);
        target.bounds = if target.pixels.is_empty() {
            moved.bounds
        } else {
            target.bounds.union(moved.bounds)
        };
        target.charge = target.charge.max(moved.charge);
        target.is_power_source |= moved.is_power_source;
        target.pixels.extend(moved.pixels);
    }
}

/// One optional group id per grid cell. Out-of-range probes read as
/// unassigned, which lets the scan treat the border like background.
struct BucketMatrix {
    width: i64,
    height: i64,
    slots: Vec<Option<GroupId>>,
}

impl BucketMatrix {
    fn new(width: u32, height: u32) -> BucketMatrix {
        BucketMatrix {
            width: i64::from(width),
            height: i64::from(height),
            slots: vec![None; width as usize * height as usize],
        }
    }

    fn get(&self, x: i64, y: i64) -> Option<GroupId> {
        if x < 0 || y < 0 || x >= self.width || y >= self.height {
            return None;
        }
        self.slots[(y * self.width + x) as usize]
    }

    fn set(&mut self, x: u32, y: u32, id: GroupId) {
        self.slots[y as usize * self.width as usize + x as usize] = Some(id);
    }
}

/// Everything extraction produces: the immutable topology plus the charge
/// each wire accumulated from its pixels' color classes.
#[derive(Debug)]
pub struct Extraction {
    pub circuit: Circuit,
    pub initial_charges: Vec<u8>,
}

/// Segments `grid` into wires and transistors.
///
/// The grid is validated at construction, so extraction itself is total.
/// Wire indices are assigned in group-allocation order, which makes two runs
/// over the same grid produce identical circuits.
pub fn extract(grid: &PixelGrid) -> Extraction {
    let mut arena = GroupArena::default();
    let mut buckets = BucketMatrix::new(grid.width(), grid.height());

    scan_wires(grid, &mut arena, &mut buckets);
    merge_crossovers(grid, &mut arena, &mut buckets);
    let (mut wires, initial_charges, wire_of_group) = finalize_wires(arena);
    let transistors = detect_transistors(grid, &buckets, &wire_of_group, &mut wires);

    tracing::debug!(
        wires = wires.len(),
        transistors = transistors.len(),
        width = grid.width(),
        height = grid.height(),
        "extracted circuit"
    );

    Extraction {
        circuit: Circuit { wires, transistors },
        initial_charges,
    }
}

/// Pass 1: row-major union-find scan over conductive cells.
fn scan_wires(grid: &PixelGrid, arena: &mut GroupArena, buckets: &mut BucketMatrix) {
    for y in 0..grid.height() {
        for x in 0..grid.width() {
            let CellKind::Conductive(charge) = grid.kind_at(x, y) else {
                continue;
            };
            let (xi, yi) = (i64::from(x), i64::from(y));
            let top_left = buckets.get(xi - 1, yi - 1);
            let top = buckets.get(xi, yi - 1);
            let left = buckets.get(xi - 1, yi);

            let current = match (top, left) {
                (None, None) => arena.alloc(),
                (None, Some(l)) => l,
                (Some(t), None) => t,
                (Some(t), Some(l)) if t == l => t,
                (Some(t), Some(l)) => {
                    arena.merge(l, t, buckets);
                    t
                }
            };

            // This cell completes a solid 2x2 conductive block: the
            // image-encoding convention for a permanent power source.
            if top_left.is_some() && top.is_some() && left.is_some() {
                arena.get_mut(current).is_power_source = true;
            }

            buckets.set(x, y, current);
            let group = arena.get_mut(current);
            group.charge = group.charge.max(charge);
            group.record(x, y);
        }
    }
}

/// Pass 2: crossover unions. The center cell stays unassigned, so the two
/// wires touch the gap without sharing a node.
fn merge_crossovers(grid: &PixelGrid, arena: &mut GroupArena, buckets: &mut BucketMatrix) {
    for y in 0..grid.height() {
        for x in 0..grid.width() {
            let (xi, yi) = (i64::from(x), i64::from(y));
            if buckets.get(xi, yi).is_some() {
                continue;
            }
            let (Some(top), Some(bottom)) = (buckets.get(xi, yi - 1), buckets.get(xi, yi + 1))
            else {
                continue;
            };
            if buckets.get(xi + 1, yi).is_none() || buckets.get(xi - 1, yi).is_none() {
                continue;
            }
            let diagonals_clear = buckets.get(xi - 1, yi - 1).is_none()
                && buckets.get(xi + 1, yi - 1).is_none()
                && buckets.get(xi - 1, yi + 1).is_none()
                && buckets.get(xi + 1, yi + 1).is_none();
            if !diagonals_clear {
                continue;
            }
            if top != bottom {
                arena.merge(top, bottom, buckets);
            }
            // The vertical merge may have re-pointed the horizontal pair's
            // buckets; re-read them to get live ids.
            let right = buckets.get(xi + 1, yi).expect("crossover right neighbor");
            let left = buckets.get(xi - 1, yi).expect("crossover left neighbor");
            if right != left {
                arena.merge(right, left, buckets);
            }
        }
    }
}

/// Materializes surviving groups as wires with dense indices and returns the
/// group-slot -> wire-id mapping the transistor pass resolves buckets with.
fn finalize_wires(arena: GroupArena) -> (Vec<Wire>, Vec<u8>, Vec<Option<WireId>>) {
    let mut wires = Vec::new();
    let mut initial_charges = Vec::new();
    let mut wire_of_group = vec![None; arena.slots.len()];

    for (slot, group) in arena.slots.into_iter().enumerate() {
        let Some(group) = group else { continue };
        let id = WireId(wires.len() as u32);
        wire_of_group[slot] = Some(id);
        initial_charges.push(group.charge);
        wires.push(Wire {
            pixels: group.pixels,
            bounds: group.bounds,
            is_power_source: group.is_power_source,
            transistors: Vec::new(),
        });
    }

    (wires, initial_charges, wire_of_group)
}

/// Pass 3: transistor detection over empty cells, reading post-union wire
/// identities only.
///
/// The base is the wire opposite the missing side; the two perpendicular
/// neighbors are the inputs, and the gate registers on both input wires'
/// incidence lists (never on the base's).
fn detect_transistors(
    grid: &PixelGrid,
    buckets: &BucketMatrix,
    wire_of_group: &[Option<WireId>],
    wires: &mut [Wire],
) -> Vec<Transistor> {
    let wire_at = |x: i64, y: i64| -> Option<WireId> {
        buckets.get(x, y).map(|group| {
            wire_of_group[group.0 as usize].expect("bucket points at a retired group")
        })
    };

    let mut transistors = Vec::new();
    for y in 0..grid.height() {
        for x in 0..grid.width() {
            let (xi, yi) = (i64::from(x), i64::from(y));
            if buckets.get(xi, yi).is_some() {
                continue;
            }
            let top = wire_at(xi, yi - 1);
            let right = wire_at(xi + 1, yi);
            let bottom = wire_at(xi, yi + 1);
            let left = wire_at(xi - 1, yi);
            let top_left = buckets.get(xi - 1, yi - 1).is_none();
            let top_right = buckets.get(xi + 1, yi - 1).is_none();
            let bottom_left = buckets.get(xi - 1, yi + 1).is_none();
            let bottom_right = buckets.get(xi + 1, yi + 1).is_none();

            let transistor = match (top, right, bottom, left) {
                // Missing top: base below, inputs run horizontally.
                (None, Some(r), Some(b), Some(l)) if top_left && top_right => Transistor {
                    position: (x, y),
                    base: b,
                    input_a: r,
                    input_b: l,
                },
                // Missing right: base on the left, inputs run vertically.
                (Some(t), None, Some(b), Some(l)) if top_right && bottom_right => Transistor {
                    position: (x, y),
                    base: l,
                    input_a: t,
                    input_b: b,
                },
                // Missing bottom: base above, inputs run horizontally.
                (Some(t), Some(r), None, Some(l)) if bottom_left && bottom_right => Transistor {
                    position: (x, y),
                    base: t,
                    input_a: r,
                    input_b: l,
                },
                // Missing left: base on the right, inputs run vertically.
                (Some(t), Some(r), Some(b), None) if top_left && bottom_left => Transistor {
                    position: (x, y),
                    base: r,
                    input_a: t,
                    input_b: b,
                },
                _ => continue,
            };

            let id = TransistorId(transistors.len() as u32);
            wires[transistor.input_a.0 as usize].transistors.push(id);
            wires[transistor.input_b.0 as usize].transistors.push(id);
            transistors.push(transistor);
        }
    }
    transistors
}
