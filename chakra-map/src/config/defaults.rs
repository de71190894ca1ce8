//! Default value functions for serde deserialization.

pub fn window_size() -> usize {
    200
}
