//! Points to be covered.

/// A point on the integer line.
///
/// The `id` is only used for reporting; two points may share a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub id: u32,
    pub position: i64,
}

impl Point {
    pub fn new(id: u32, position: i64) -> Self {
        Self { id, position }
    }
}
