//! Test utilities for ChakraMap integration tests.
//!
//! This module provides helpers for building populated layers, seeded random
//! shifts, and robot paths.

#![allow(dead_code)]

use chakra_map::{LogicalCoord, PhysicalCoord, SweepAnchor, ToroidalLayer};
use rand::prelude::*;

/// Install a test logger once per binary. Honors `RUST_LOG`.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Deterministic RNG for property tests.
pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Layer whose physical cell `(r, c)` holds `r * 1000 + c + 1`, so every cell
/// is distinct and non-zero (zero is the fill value).
pub fn numbered_layer(width: usize, height: usize) -> ToroidalLayer<i64> {
    numbered_layer_anchored(width, height, SweepAnchor::Origin)
}

/// [`numbered_layer`] with an explicit sweep anchor.
pub fn numbered_layer_anchored(
    width: usize,
    height: usize,
    anchor: SweepAnchor,
) -> ToroidalLayer<i64> {
    let mut layer = ToroidalLayer::with_anchor(width, height, 0, anchor).unwrap();
    for row in 0..height as i32 {
        for col in 0..width as i32 {
            let p = layer.logical_to_physical(LogicalCoord::new(row, col));
            layer.set(
                LogicalCoord::new(row, col),
                p.row as i64 * 1000 + p.col as i64 + 1,
            );
        }
    }
    layer
}

/// Snapshot of a layer's physical storage as `(coord, value)` pairs.
pub fn physical_snapshot<T: chakra_map::CellValue>(
    layer: &ToroidalLayer<T>,
) -> Vec<(PhysicalCoord, T)> {
    layer.storage().iter().collect()
}

/// Random shift strictly smaller than the layer in both axes.
pub fn small_shift(rng: &mut StdRng, width: usize, height: usize) -> (i32, i32) {
    let h = height as i32;
    let w = width as i32;
    (rng.random_range(-(h - 1)..h), rng.random_range(-(w - 1)..w))
}

/// Straight robot path as a list of unit moves.
pub fn straight_path(steps: usize, dx: i32, dy: i32) -> Vec<(i32, i32)> {
    vec![(dx, dy); steps]
}

/// Square loop of unit moves, returning to the start.
pub fn square_path(side: usize) -> Vec<(i32, i32)> {
    let mut moves = Vec::with_capacity(side * 4);
    moves.extend(straight_path(side, 1, 0));
    moves.extend(straight_path(side, 0, 1));
    moves.extend(straight_path(side, -1, 0));
    moves.extend(straight_path(side, 0, -1));
    moves
}
