//! Toroidal grid layer.
//!
//! A [`ToroidalLayer`] owns one fixed-size [`GridStorage`] and an offset that
//! says which physical cell currently represents logical (0, 0):
//!
//! ```text
//! physical = (logical + offset) mod dim
//! logical  = (physical - offset) mod dim
//! ```
//!
//! Scrolling the window changes only the offset and re-fills the band of
//! rows/columns that changed meaning, so a move costs
//! O(|d_row| * width + |d_col| * height) regardless of the window area.

use std::ops::Deref;

use crate::core::{CellValue, LogicalCoord, PhysicalCoord, wrap_index};
use crate::error::{MapError, Result};

use super::storage::GridStorage;
use super::sweep::{SweepAnchor, SweepSummary, SweptBand};

/// One scrolling grid with wrap-around addressing.
#[derive(Clone, Debug)]
pub struct ToroidalLayer<T> {
    storage: GridStorage<T>,
    width: usize,
    height: usize,
    /// Physical cell aliased to logical (0, 0)
    offset: PhysicalCoord,
    /// Offset before the most recent shift
    prev_offset: PhysicalCoord,
    /// Value written into swept cells
    fill_value: T,
    anchor: SweepAnchor,
}

impl<T: CellValue> ToroidalLayer<T> {
    /// Create a layer filled with `fill_value`, swept relative to the origin.
    pub fn new(width: usize, height: usize, fill_value: T) -> Result<Self> {
        Self::with_anchor(width, height, fill_value, SweepAnchor::default())
    }

    /// Create a layer with an explicit sweep anchor.
    ///
    /// Both dimensions must lie in `1..=i32::MAX` so every physical index has
    /// a logical counterpart.
    pub fn with_anchor(
        width: usize,
        height: usize,
        fill_value: T,
        anchor: SweepAnchor,
    ) -> Result<Self> {
        let max = i32::MAX as usize;
        if width == 0 || height == 0 || width > max || height > max {
            return Err(MapError::InvalidDimensions { width, height });
        }
        Ok(Self::filled(width, height, fill_value, anchor))
    }

    /// Construct without validation. `width` and `height` must be non-zero.
    pub(crate) fn filled(width: usize, height: usize, fill_value: T, anchor: SweepAnchor) -> Self {
        Self {
            storage: GridStorage::new(width, height, fill_value),
            width,
            height,
            offset: PhysicalCoord::default(),
            prev_offset: PhysicalCoord::default(),
            fill_value,
            anchor,
        }
    }

    // === Properties ===

    /// Width in cells.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height in cells.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Physical cell currently aliased to logical (0, 0).
    #[inline]
    pub fn offset(&self) -> PhysicalCoord {
        self.offset
    }

    /// Offset before the most recent shift.
    #[inline]
    pub fn prev_offset(&self) -> PhysicalCoord {
        self.prev_offset
    }

    /// Value assigned to cells entering the window.
    #[inline]
    pub fn fill_value(&self) -> T {
        self.fill_value
    }

    /// Sweep anchor.
    #[inline]
    pub fn anchor(&self) -> SweepAnchor {
        self.anchor
    }

    /// Underlying physical storage.
    #[inline]
    pub fn storage(&self) -> &GridStorage<T> {
        &self.storage
    }

    // === Addressing ===

    /// Map a logical coordinate onto storage.
    #[inline]
    pub fn logical_to_physical(&self, logical: LogicalCoord) -> PhysicalCoord {
        PhysicalCoord::new(
            wrap_index(logical.row as i64 + self.offset.row as i64, self.height),
            wrap_index(logical.col as i64 + self.offset.col as i64, self.width),
        )
    }

    /// Map a storage coordinate back to its logical coordinate.
    ///
    /// The result is normalized into `[0, height) x [0, width)`; any logical
    /// coordinate congruent to it addresses the same cell.
    #[inline]
    pub fn physical_to_logical(&self, physical: PhysicalCoord) -> LogicalCoord {
        LogicalCoord::new(
            wrap_index(physical.row as i64 - self.offset.row as i64, self.height) as i32,
            wrap_index(physical.col as i64 - self.offset.col as i64, self.width) as i32,
        )
    }

    // === Cell Access ===

    /// Read the cell at a logical coordinate.
    #[inline]
    pub fn get(&self, logical: LogicalCoord) -> T {
        let p = self.logical_to_physical(logical);
        self.storage[(p.row, p.col)]
    }

    /// Mutable reference to the cell at a logical coordinate.
    #[inline]
    pub fn get_mut(&mut self, logical: LogicalCoord) -> &mut T {
        let p = self.logical_to_physical(logical);
        &mut self.storage[(p.row, p.col)]
    }

    /// Write the cell at a logical coordinate.
    #[inline]
    pub fn set(&mut self, logical: LogicalCoord, value: T) {
        *self.get_mut(logical) = value;
    }

    // === Scrolling ===

    /// Move the logical origin by `(d_row, d_col)` cells.
    ///
    /// Cells outside the swept band keep their values and their physical
    /// location; the band is reset to the fill value. Shifts of a full
    /// dimension or more clear that axis exactly once.
    pub fn move_logical_origin(&mut self, d_row: i32, d_col: i32) -> SweepSummary {
        self.prev_offset = self.offset;
        self.offset = PhysicalCoord::new(
            wrap_index(self.offset.row as i64 + d_row as i64, self.height),
            wrap_index(self.offset.col as i64 + d_col as i64, self.width),
        );

        let row_band = SweptBand::new(
            self.prev_offset.row,
            self.offset.row,
            d_row,
            self.height,
            self.anchor,
        );
        let col_band = SweptBand::new(
            self.prev_offset.col,
            self.offset.col,
            d_col,
            self.width,
            self.anchor,
        );

        for row in row_band.indices() {
            self.storage.fill_row(row, self.fill_value);
        }
        for col in col_band.indices() {
            self.storage.fill_col(col, self.fill_value);
        }

        SweepSummary {
            rows_cleared: row_band.len(),
            cols_cleared: col_band.len(),
            rows_saturated: row_band.is_saturated(),
            cols_saturated: col_band.is_saturated(),
        }
    }

    // === Bulk Operations ===

    /// Copy out a `view_height x view_width` window centered on `center`.
    ///
    /// Cell `(y, x)` of the result is
    /// `get(center.row - view_height/2 + y, center.col - view_width/2 + x)`.
    pub fn view(&self, center: LogicalCoord, view_height: usize, view_width: usize) -> GridStorage<T> {
        let top = center.row as i64 - (view_height / 2) as i64;
        let left = center.col as i64 - (view_width / 2) as i64;

        GridStorage::from_fn(view_width, view_height, |y, x| {
            let p = PhysicalCoord::new(
                wrap_index(top + y as i64 + self.offset.row as i64, self.height),
                wrap_index(left + x as i64 + self.offset.col as i64, self.width),
            );
            self.storage[(p.row, p.col)]
        })
    }

    /// Overwrite every cell with `value` and use it for future sweeps.
    pub fn reset(&mut self, value: T) {
        self.storage.fill(value);
        self.fill_value = value;
    }

    /// Reset every cell to `T::default()`.
    pub fn clear(&mut self) {
        self.reset(T::default());
    }

    /// Iterate over all cells in logical order, starting at the origin.
    ///
    /// Yields `(logical, value)` with rows in `[0, height)` and columns in
    /// `[0, width)`.
    pub fn iter_logical(&self) -> impl Iterator<Item = (LogicalCoord, T)> + '_ {
        (0..self.height as i32).flat_map(move |row| {
            (0..self.width as i32).map(move |col| {
                let logical = LogicalCoord::new(row, col);
                (logical, self.get(logical))
            })
        })
    }
}

/// Mutable access to one layer of a multi-layer map.
///
/// Cells can be read, written and reset, but the layer cannot be shifted on
/// its own, so it stays in the frame shared with the other layers. Read-only
/// layer methods are available through `Deref`.
#[derive(Debug)]
pub struct LayerMut<'a, T> {
    layer: &'a mut ToroidalLayer<T>,
}

impl<'a, T: CellValue> LayerMut<'a, T> {
    pub(crate) fn new(layer: &'a mut ToroidalLayer<T>) -> Self {
        Self { layer }
    }

    /// Mutable reference to the cell at a logical coordinate.
    #[inline]
    pub fn get_mut(&mut self, logical: LogicalCoord) -> &mut T {
        self.layer.get_mut(logical)
    }

    /// Write the cell at a logical coordinate.
    #[inline]
    pub fn set(&mut self, logical: LogicalCoord, value: T) {
        self.layer.set(logical, value);
    }

    /// Overwrite every cell with `value` and use it for future sweeps.
    pub fn reset(&mut self, value: T) {
        self.layer.reset(value);
    }

    /// Reset every cell to `T::default()`.
    pub fn clear(&mut self) {
        self.layer.clear();
    }
}

impl<T> Deref for LayerMut<'_, T> {
    type Target = ToroidalLayer<T>;

    fn deref(&self) -> &ToroidalLayer<T> {
        &*self.layer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbered(width: usize, height: usize) -> ToroidalLayer<i32> {
        let mut layer = ToroidalLayer::new(width, height, 0).unwrap();
        for row in 0..height as i32 {
            for col in 0..width as i32 {
                layer.set(LogicalCoord::new(row, col), row * 100 + col + 1);
            }
        }
        layer
    }

    #[test]
    fn test_layer_creation() {
        let layer = ToroidalLayer::new(8, 6, 1.5f32).unwrap();
        assert_eq!(layer.width(), 8);
        assert_eq!(layer.height(), 6);
        assert_eq!(layer.offset(), PhysicalCoord::new(0, 0));
        assert_eq!(layer.fill_value(), 1.5);
        assert!(layer.storage().as_slice().iter().all(|&c| c == 1.5));
    }

    #[test]
    fn test_zero_dimensions_rejected() {
        assert_eq!(
            ToroidalLayer::new(0, 5, 0u8).unwrap_err(),
            MapError::InvalidDimensions {
                width: 0,
                height: 5
            }
        );
        assert!(ToroidalLayer::new(5, 0, 0u8).is_err());
    }

    #[test]
    fn test_oversized_dimensions_rejected() {
        // Checked before anything is allocated
        let too_wide = i32::MAX as usize + 1;
        assert_eq!(
            ToroidalLayer::new(too_wide, 1, 0u8).unwrap_err(),
            MapError::InvalidDimensions {
                width: too_wide,
                height: 1
            }
        );
        assert!(ToroidalLayer::with_anchor(1, usize::MAX, 0u8, SweepAnchor::Centered).is_err());
    }

    #[test]
    fn test_logical_to_physical_wraps() {
        let mut layer = ToroidalLayer::new(10, 10, 0u8).unwrap();
        layer.move_logical_origin(3, 7);

        assert_eq!(
            layer.logical_to_physical(LogicalCoord::new(0, 0)),
            PhysicalCoord::new(3, 7)
        );
        assert_eq!(
            layer.logical_to_physical(LogicalCoord::new(-4, 5)),
            PhysicalCoord::new(9, 2)
        );
        assert_eq!(
            layer.logical_to_physical(LogicalCoord::new(-23, 13)),
            PhysicalCoord::new(0, 0)
        );
    }

    #[test]
    fn test_physical_to_logical_inverse() {
        let mut layer = ToroidalLayer::new(7, 5, 0u8).unwrap();
        layer.move_logical_origin(-2, 11);

        for row in 0..5 {
            for col in 0..7 {
                let p = PhysicalCoord::new(row, col);
                let l = layer.physical_to_logical(p);
                assert_eq!(layer.logical_to_physical(l), p);
                assert!((0..5).contains(&l.row));
                assert!((0..7).contains(&l.col));
            }
        }
    }

    #[test]
    fn test_get_set_any_integer() {
        let mut layer = ToroidalLayer::new(4, 4, 0i32).unwrap();
        layer.set(LogicalCoord::new(-1, -1), 5);

        assert_eq!(layer.get(LogicalCoord::new(-1, -1)), 5);
        assert_eq!(layer.get(LogicalCoord::new(3, 3)), 5);
        assert_eq!(layer.get(LogicalCoord::new(i32::MAX, i32::MAX)), 5);
        assert_eq!(layer.get(LogicalCoord::new(0, 0)), 0);

        *layer.get_mut(LogicalCoord::new(2, 1)) += 3;
        assert_eq!(layer.get(LogicalCoord::new(2, 1)), 3);
    }

    #[test]
    fn test_move_positive_clears_previous_band() {
        let mut layer = numbered(5, 4);
        let summary = layer.move_logical_origin(1, 0);

        assert_eq!(layer.prev_offset(), PhysicalCoord::new(0, 0));
        assert_eq!(layer.offset(), PhysicalCoord::new(1, 0));
        assert_eq!(summary.rows_cleared, 1);
        assert_eq!(summary.cols_cleared, 0);

        // Physical row 0 swept; it is now logical row 3
        assert_eq!(layer.storage().row(0), &[0, 0, 0, 0, 0]);
        for col in 0..5 {
            assert_eq!(layer.get(LogicalCoord::new(3, col)), 0);
        }
        // Old logical row 1 is the new logical row 0
        assert_eq!(layer.get(LogicalCoord::new(0, 2)), 103);
    }

    #[test]
    fn test_move_negative_clears_new_band() {
        let mut layer = numbered(5, 4);
        let summary = layer.move_logical_origin(0, -2);

        assert_eq!(layer.offset(), PhysicalCoord::new(0, 3));
        assert_eq!(summary.cols_cleared, 2);
        for row in 0..4 {
            assert_eq!(layer.get(LogicalCoord::new(row, 0)), 0);
            assert_eq!(layer.get(LogicalCoord::new(row, 1)), 0);
            // Old logical col 0 is now col 2
            assert_eq!(layer.get(LogicalCoord::new(row, 2)), row * 100 + 1);
        }
    }

    #[test]
    fn test_move_zero_is_noop() {
        let mut layer = numbered(3, 3);
        let before = layer.storage().clone();
        let summary = layer.move_logical_origin(0, 0);

        assert!(summary.is_noop());
        assert_eq!(layer.storage(), &before);
    }

    #[test]
    fn test_large_move_clears_axis_once() {
        let mut layer = numbered(6, 4);
        let summary = layer.move_logical_origin(9, 0);

        assert!(summary.rows_saturated);
        assert!(!summary.cols_saturated);
        assert_eq!(summary.rows_cleared, 4);
        assert_eq!(layer.offset(), PhysicalCoord::new(1, 0));
        assert!(layer.storage().as_slice().iter().all(|&c| c == 0));
    }

    #[test]
    fn test_view_matches_offset_formula() {
        let mut layer = numbered(6, 5);
        layer.move_logical_origin(2, -1);

        let view = layer.view(LogicalCoord::new(1, -3), 3, 4);
        assert_eq!(view.height(), 3);
        assert_eq!(view.width(), 4);
        for y in 0..3 {
            for x in 0..4 {
                let expected = layer.get(LogicalCoord::new(1 - 1 + y as i32, -3 - 2 + x as i32));
                assert_eq!(view[(y, x)], expected, "cell ({y}, {x})");
            }
        }
    }

    #[test]
    fn test_view_is_a_copy() {
        let mut layer = ToroidalLayer::new(4, 4, 1u8).unwrap();
        let view = layer.view(LogicalCoord::ORIGIN, 4, 4);
        layer.set(LogicalCoord::ORIGIN, 9);
        assert!(view.as_slice().iter().all(|&c| c == 1));
    }

    #[test]
    fn test_view_larger_than_layer_wraps() {
        let layer = numbered(2, 2);
        let view = layer.view(LogicalCoord::ORIGIN, 4, 4);
        // top-left is logical (-2, -2) == (0, 0)
        assert_eq!(view[(0, 0)], 1);
        assert_eq!(view[(0, 1)], 2);
        assert_eq!(view[(0, 2)], 1);
        assert_eq!(view[(3, 3)], 102);
    }

    #[test]
    fn test_reset_updates_fill_value() {
        let mut layer = numbered(4, 4);
        layer.reset(-1);

        assert_eq!(layer.fill_value(), -1);
        assert!(layer.storage().as_slice().iter().all(|&c| c == -1));

        layer.set(LogicalCoord::ORIGIN, 5);
        layer.move_logical_origin(1, 1);
        assert_eq!(layer.get(LogicalCoord::new(3, 3)), -1);

        layer.clear();
        assert_eq!(layer.fill_value(), 0);
        assert!(layer.storage().as_slice().iter().all(|&c| c == 0));
    }

    #[test]
    fn test_layer_mut_edits_without_shifting() {
        let mut layer = numbered(4, 3);
        layer.move_logical_origin(1, 2);
        let offset = layer.offset();

        let mut handle = LayerMut::new(&mut layer);
        handle.set(LogicalCoord::new(0, 0), -5);
        *handle.get_mut(LogicalCoord::new(1, 1)) += 1000;
        assert_eq!(handle.get(LogicalCoord::new(0, 0)), -5);
        assert_eq!(handle.offset(), offset);

        handle.clear();
        assert_eq!(layer.offset(), offset);
        assert!(layer.storage().as_slice().iter().all(|&c| c == 0));
    }

    #[test]
    fn test_iter_logical_order() {
        let mut layer = numbered(3, 2);
        layer.move_logical_origin(1, 0);
        // Row 0 logical is old row 1; row 1 logical was swept
        let values: Vec<i32> = layer.iter_logical().map(|(_, v)| v).collect();
        assert_eq!(values, vec![101, 102, 103, 0, 0, 0]);
    }
}
