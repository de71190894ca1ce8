//! Dense storage backing every grid layer.
//!
//! [`GridStorage`] is a fixed-size row-major array. Layers never resize or
//! move it; scrolling is done purely by changing how logical coordinates map
//! onto it. It is also the type returned for extracted views.
//!
//! ## Cost Model
//!
//! | Operation | Cost |
//! |-----------|------|
//! | `get` / `set` | O(1) |
//! | `fill_row` | O(width), contiguous |
//! | `fill_col` | O(height), strided |
//! | `fill` | O(width x height) |

mod core;

pub use self::core::GridStorage;
