//! Swept-band computation for window shifts.
//!
//! When the logical origin moves by `d` cells along an axis, `min(|d|, dim)`
//! physical rows (or columns) change meaning and must be reinitialized:
//!
//! ```text
//! d > 0:  band starts at the previous offset   [prev, prev + d)
//! d < 0:  band starts at the new offset        [new,  new + |d|)
//! ```
//!
//! Both ranges are taken modulo `dim`. With [`SweepAnchor::Centered`] the band
//! is shifted back by `dim / 2`, so the preserved window is the one centered on
//! logical (0, 0) instead of the one starting there.

use serde::{Deserialize, Serialize};

use crate::core::wrap_index;

/// Where the preserved window sits relative to the logical origin.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SweepAnchor {
    /// Window spans logical `[0, dim)`; the band starts at the origin offset.
    #[default]
    Origin,
    /// Window spans logical `[-dim/2, dim - dim/2)`, matching centered views.
    Centered,
}

impl SweepAnchor {
    /// Physical shift applied to the band start for an axis of size `dim`.
    #[inline]
    fn band_shift(self, dim: usize) -> i64 {
        match self {
            SweepAnchor::Origin => 0,
            SweepAnchor::Centered => (dim / 2) as i64,
        }
    }
}

/// Physical indices swept by a shift of `delta` along one axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SweptBand {
    start: usize,
    len: usize,
    dim: usize,
}

impl SweptBand {
    /// Compute the band for one axis.
    ///
    /// `prev_offset` and `new_offset` are the axis offsets before and after
    /// the shift. `dim` must be non-zero.
    pub fn new(
        prev_offset: usize,
        new_offset: usize,
        delta: i32,
        dim: usize,
        anchor: SweepAnchor,
    ) -> Self {
        let len = (delta.unsigned_abs() as usize).min(dim);
        let base = if delta > 0 { prev_offset } else { new_offset };
        let start = wrap_index(base as i64 - anchor.band_shift(dim), dim);
        Self { start, len, dim }
    }

    /// Number of rows/columns in the band.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// True if the shift was zero.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// True if the band covers the whole axis.
    #[inline]
    pub fn is_saturated(&self) -> bool {
        self.len == self.dim
    }

    /// Physical indices in the band, each exactly once.
    pub fn indices(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.len).map(move |k| (self.start + k) % self.dim)
    }

    /// Check if a physical index falls in the band.
    pub fn contains(&self, index: usize) -> bool {
        index < self.dim && (index + self.dim - self.start) % self.dim < self.len
    }
}

/// Result of a single window shift.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SweepSummary {
    /// Physical rows reset to the fill value
    pub rows_cleared: usize,
    /// Physical columns reset to the fill value
    pub cols_cleared: usize,
    /// Every row was swept (|d_row| >= height)
    pub rows_saturated: bool,
    /// Every column was swept (|d_col| >= width)
    pub cols_saturated: bool,
}

impl SweepSummary {
    /// True if nothing was cleared.
    pub fn is_noop(&self) -> bool {
        self.rows_cleared == 0 && self.cols_cleared == 0
    }

    /// Upper bound on cells written: `rows * width + cols * height`.
    pub fn cells_written(&self, width: usize, height: usize) -> usize {
        self.rows_cleared * width + self.cols_cleared * height
    }
}
