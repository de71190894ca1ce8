//! Grid storage core implementation.

use std::ops::{Index, IndexMut};

use crate::core::{CellValue, PhysicalCoord};

/// Fixed-size dense 2D array in row-major order.
///
/// Cell `(row, col)` lives at `row * width + col`. The shape never changes
/// after construction; rows and columns can be bulk-filled in
/// O(width) and O(height) respectively.
///
/// ## Memory Layout
///
/// ```text
/// row 0: [c0 c1 c2 ... c(w-1)]
/// row 1: [c0 c1 c2 ... c(w-1)]
///  ...
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct GridStorage<T> {
    pub(super) cells: Vec<T>,
    pub(super) width: usize,
    pub(super) height: usize,
}

impl<T: CellValue> GridStorage<T> {
    // === Constructors ===

    /// Create a grid with every cell set to `value`.
    pub fn new(width: usize, height: usize, value: T) -> Self {
        Self {
            cells: vec![value; width * height],
            width,
            height,
        }
    }

    /// Create a grid with every cell set to `T::default()`.
    pub fn with_default(width: usize, height: usize) -> Self {
        Self::new(width, height, T::default())
    }

    /// Create a grid by evaluating `f(row, col)` for every cell.
    pub fn from_fn(width: usize, height: usize, mut f: impl FnMut(usize, usize) -> T) -> Self {
        let mut cells = Vec::with_capacity(width * height);
        for row in 0..height {
            for col in 0..width {
                cells.push(f(row, col));
            }
        }
        Self {
            cells,
            width,
            height,
        }
    }

    // === Basic Properties ===

    /// Width in cells (number of columns).
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height in cells (number of rows).
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Total number of cells.
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.width * self.height
    }

    /// Raw row-major cell slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.cells
    }

    /// Check if a coordinate lies inside the grid.
    #[inline]
    pub fn contains(&self, coord: PhysicalCoord) -> bool {
        coord.row < self.height && coord.col < self.width
    }

    // === Cell Access ===

    #[inline]
    fn index_of(&self, coord: PhysicalCoord) -> Option<usize> {
        if self.contains(coord) {
            Some(coord.row * self.width + coord.col)
        } else {
            None
        }
    }

    /// Get a cell, or `None` outside the grid.
    #[inline]
    pub fn get(&self, coord: PhysicalCoord) -> Option<T> {
        self.index_of(coord).map(|idx| self.cells[idx])
    }

    /// Get a mutable reference to a cell, or `None` outside the grid.
    #[inline]
    pub fn get_mut(&mut self, coord: PhysicalCoord) -> Option<&mut T> {
        let idx = self.index_of(coord)?;
        Some(&mut self.cells[idx])
    }

    /// Set a cell. Returns false (and writes nothing) outside the grid.
    #[inline]
    pub fn set(&mut self, coord: PhysicalCoord, value: T) -> bool {
        match self.get_mut(coord) {
            Some(cell) => {
                *cell = value;
                true
            }
            None => false,
        }
    }

    /// One row as a slice.
    ///
    /// # Panics
    /// Panics if `row >= height`.
    #[inline]
    pub fn row(&self, row: usize) -> &[T] {
        let start = row * self.width;
        &self.cells[start..start + self.width]
    }

    // === Bulk Fill ===

    /// Set every cell to `value`.
    pub fn fill(&mut self, value: T) {
        self.cells.fill(value);
    }

    /// Set every cell of one row. Out-of-range rows are ignored.
    pub fn fill_row(&mut self, row: usize, value: T) {
        if row >= self.height {
            return;
        }
        let start = row * self.width;
        self.cells[start..start + self.width].fill(value);
    }

    /// Set every cell of one column. Out-of-range columns are ignored.
    pub fn fill_col(&mut self, col: usize, value: T) {
        if col >= self.width {
            return;
        }
        for cell in self.cells.iter_mut().skip(col).step_by(self.width) {
            *cell = value;
        }
    }

    // === Iteration ===

    /// Iterate over all cells with their coordinates in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (PhysicalCoord, T)> + '_ {
        let width = self.width;
        self.cells
            .iter()
            .enumerate()
            .map(move |(idx, &cell)| (PhysicalCoord::new(idx / width, idx % width), cell))
    }
}

impl<T> Index<(usize, usize)> for GridStorage<T> {
    type Output = T;

    /// Index by `(row, col)`.
    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &T {
        assert!(
            row < self.height && col < self.width,
            "cell ({row}, {col}) outside {}x{} grid",
            self.height,
            self.width
        );
        &self.cells[row * self.width + col]
    }
}

impl<T> IndexMut<(usize, usize)> for GridStorage<T> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        assert!(
            row < self.height && col < self.width,
            "cell ({row}, {col}) outside {}x{} grid",
            self.height,
            self.width
        );
        &mut self.cells[row * self.width + col]
    }
}
